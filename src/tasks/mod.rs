pub mod debounce_task;
pub mod dispatch_task;
pub mod heartbeat_task;
pub mod inject_task;
pub mod sensor_task;

// 传感器任务
//
// 把边沿能力适配成事件队列消息；模拟环境下由 MockEdgeSensor 供边

use log::info;

use crate::drivers::{EdgeSource, MockEdgeSensor};
use crate::event::{Event, EventSender};

/// 传感器任务
#[embassy_executor::task]
pub async fn sensor_task(sensor: MockEdgeSensor, event_tx: EventSender<'static>) -> ! {
    run_sensor(sensor, event_tx).await
}

/// 传感器循环本体
pub async fn run_sensor<S: EdgeSource>(mut sensor: S, event_tx: EventSender<'_>) -> ! {
    info!("Sensor task started");

    loop {
        sensor.wait_for_edge().await;
        event_tx.send(Event::EdgeDetected).await;
    }
}

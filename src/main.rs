// 投币接收模拟器
//
// 事件驱动架构：传感器/注入任务产生边沿事件，dispatch 任务
// 串行处理，去抖任务负责窗口到期检查

mod coin;
mod drivers;
mod error;
mod event;
mod tasks;

use embassy_executor::Spawner;
use embassy_time::Timer;
use log::{info, warn};
use static_cell::StaticCell;

use coin::{AcceptorHandle, CoinAcceptor, SharedStatus};
use drivers::{MockEdgeSensor, MockEnableLine};
use event::EventChannel;
use tasks::debounce_task::CheckChannel;
use tasks::inject_task::InjectChannel;

/// 模拟硬币序列（按面值表轮流）
static COIN_PATTERN: [u32; 4] = [1, 5, 10, 20];

/// 状态快照，dispatch 写、查询方读
static STATUS: SharedStatus = SharedStatus::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    env_logger::init();

    info!("=== Coin Acceptor (Event-Driven Simulation) ===");
    info!("Initializing...");

    // 创建事件通道
    static EVENT_CHANNEL: StaticCell<EventChannel> = StaticCell::new();
    static CHECK_CHANNEL: StaticCell<CheckChannel> = StaticCell::new();
    static INJECT_CHANNEL: StaticCell<InjectChannel> = StaticCell::new();

    let event_channel = EVENT_CHANNEL.init(EventChannel::new());
    let check_channel = CHECK_CHANNEL.init(CheckChannel::new());
    let inject_channel = INJECT_CHANNEL.init(InjectChannel::new());

    info!("Event system initialized");

    // 驱动在这里注入一次；接真实硬件时换成 HAL 实现
    let acceptor = CoinAcceptor::new(Some(MockEnableLine::new()));
    let sensor = MockEdgeSensor::new(&COIN_PATTERN);

    // 启动所有任务
    info!("Spawning tasks...");

    spawner
        .spawn(tasks::dispatch_task::dispatch_task(
            acceptor,
            event_channel.receiver(),
            check_channel.sender(),
            inject_channel.sender(),
            &STATUS,
        ))
        .unwrap();
    info!("  - Dispatch task spawned");

    spawner
        .spawn(tasks::debounce_task::debounce_task(
            check_channel.receiver(),
            event_channel.sender(),
        ))
        .unwrap();
    info!("  - Debounce task spawned");

    spawner
        .spawn(tasks::inject_task::inject_task(
            inject_channel.receiver(),
            event_channel.sender(),
        ))
        .unwrap();
    info!("  - Inject task spawned");

    spawner
        .spawn(tasks::sensor_task::sensor_task(
            sensor,
            event_channel.sender(),
        ))
        .unwrap();
    info!("  - Sensor task spawned");

    spawner
        .spawn(tasks::heartbeat_task::heartbeat_task(&STATUS))
        .unwrap();
    info!("  - Heartbeat task spawned");

    let handle = AcceptorHandle::new(event_channel.sender(), &STATUS);

    // 上电自检：激活后注入一簇脉冲验证整条管线
    if let Err(e) = handle.activate() {
        warn!("Activate command failed: {:?}", e);
    }
    if let Err(e) = handle.inject_pulses(5) {
        warn!("Self-test inject failed: {:?}", e);
    }

    info!("=== System ready ===");

    // 主任务空转
    loop {
        Timer::after_secs(60).await;
        info!("Main: running, total {}", handle.status().total_value);
    }
}

// 心跳任务
//
// 周期性输出状态快照，内容与 UI 轮询接口看到的一致

use embassy_time::{Duration, Instant, Timer};
use log::info;

use crate::coin::SharedStatus;

/// 心跳间隔
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

/// 心跳任务
#[embassy_executor::task]
pub async fn heartbeat_task(status: &'static SharedStatus) -> ! {
    info!("Heartbeat task started");

    let started = Instant::now();

    loop {
        Timer::after(HEARTBEAT_INTERVAL).await;

        let snap = status.snapshot();
        info!(
            "Heartbeat: uptime {} s, total {}, active {}",
            started.elapsed().as_secs(),
            snap.total_value,
            snap.active
        );
    }
}

// 去抖检查任务
//
// 接收检查请求，睡到 fire_at 时刻，再把检查事件送回事件队列。
// 所有请求带同一固定延迟且队列先进先出，到期时刻单调不减

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::Timer;
use log::info;

use crate::coin::CheckRequest;
use crate::event::{Event, EventSender};

/// 检查队列深度：50ms 间距的脉冲在 500ms 窗口内最多积压约 10 个待命检查
pub const CHECK_QUEUE_DEPTH: usize = 32;

/// 检查通道类型
pub type CheckChannel = Channel<CriticalSectionRawMutex, CheckRequest, CHECK_QUEUE_DEPTH>;
pub type CheckSender<'a> = Sender<'a, CriticalSectionRawMutex, CheckRequest, CHECK_QUEUE_DEPTH>;
pub type CheckReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, CheckRequest, CHECK_QUEUE_DEPTH>;

/// 去抖检查任务
#[embassy_executor::task]
pub async fn debounce_task(check_rx: CheckReceiver<'static>, event_tx: EventSender<'static>) -> ! {
    run_debounce(check_rx, event_tx).await
}

/// 检查循环本体（测试中直接驱动）
pub async fn run_debounce(check_rx: CheckReceiver<'_>, event_tx: EventSender<'_>) -> ! {
    info!("Debounce task started");

    loop {
        let check = check_rx.receive().await;
        Timer::at(check.fire_at).await;
        event_tx
            .send(Event::DebounceCheck {
                generation: check.generation,
            })
            .await;
    }
}

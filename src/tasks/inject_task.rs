// 脉冲注入任务
//
// 无传感器环境下的测试命令：合成 n 个约 50ms 间距的边沿事件。
// 单独成任务，注入间隔不会拖慢 dispatch 的脉冲路径

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Timer};
use log::info;

use crate::event::{Event, EventSender};

/// 合成脉冲间距
pub const PULSE_SPACING: Duration = Duration::from_millis(50);

/// 注入请求队列深度
pub const INJECT_QUEUE_DEPTH: usize = 8;

/// 注入通道类型（元素为脉冲个数）
pub type InjectChannel = Channel<CriticalSectionRawMutex, u32, INJECT_QUEUE_DEPTH>;
pub type InjectSender<'a> = Sender<'a, CriticalSectionRawMutex, u32, INJECT_QUEUE_DEPTH>;
pub type InjectReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, u32, INJECT_QUEUE_DEPTH>;

/// 脉冲注入任务
#[embassy_executor::task]
pub async fn inject_task(inject_rx: InjectReceiver<'static>, event_tx: EventSender<'static>) -> ! {
    run_inject(inject_rx, event_tx).await
}

/// 注入循环本体（测试中直接驱动）
pub async fn run_inject(inject_rx: InjectReceiver<'_>, event_tx: EventSender<'_>) -> ! {
    info!("Inject task started");

    loop {
        let count = inject_rx.receive().await;
        info!("Injecting {} synthetic pulses", count);

        for _ in 0..count {
            event_tx.send(Event::EdgeDetected).await;
            Timer::after(PULSE_SPACING).await;
        }
    }
}

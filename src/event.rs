// 事件系统
//
// 所有系统事件都通过这个枚举传递，由 dispatch 任务串行消费，
// 保证脉冲簇与累计金额的变更互不交错

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

/// 事件队列深度
pub const EVENT_QUEUE_DEPTH: usize = 32;

/// 事件通道类型
pub type EventChannel = Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;
pub type EventSender<'a> = Sender<'a, CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;
pub type EventReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;

/// 系统事件
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// 传感器上升沿（一个脉冲）
    EdgeDetected,

    /// 去抖检查到期
    ///
    /// generation 是调度时刻的脉冲代号，用于识别过期检查
    DebounceCheck { generation: u32 },

    /// 激活投币接收
    Activate,

    /// 停用投币接收
    Deactivate,

    /// 注入模拟脉冲（测试命令）
    InjectPulses { count: u32 },
}

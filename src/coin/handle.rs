// 命令与查询入口
//
// 供 UI / 命令行等外部调用方使用：命令非阻塞投递到事件队列，
// 查询走原子快照，两者都不会卡住脉冲路径

use crate::coin::status::{SharedStatus, StatusSnapshot};
use crate::error::{Error, Result};
use crate::event::{Event, EventSender};

/// 接收器命令句柄
#[derive(Clone, Copy)]
pub struct AcceptorHandle<'a> {
    events: EventSender<'a>,
    status: &'a SharedStatus,
}

impl<'a> AcceptorHandle<'a> {
    pub fn new(events: EventSender<'a>, status: &'a SharedStatus) -> Self {
        Self { events, status }
    }

    /// 激活接收
    pub fn activate(&self) -> Result<()> {
        self.send(Event::Activate)
    }

    /// 停用接收
    pub fn deactivate(&self) -> Result<()> {
        self.send(Event::Deactivate)
    }

    /// 注入 count 个模拟脉冲（约 50ms 间距），用于无传感器环境
    pub fn inject_pulses(&self, count: u32) -> Result<()> {
        if count == 0 {
            return Err(Error::InvalidParameter);
        }
        self.send(Event::InjectPulses { count })
    }

    /// 读取状态快照
    pub fn status(&self) -> StatusSnapshot {
        self.status.snapshot()
    }

    fn send(&self, event: Event) -> Result<()> {
        self.events.try_send(event).map_err(|_| Error::BufferFull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventChannel;

    #[test]
    fn commands_are_enqueued_in_order() {
        let channel = EventChannel::new();
        let status = SharedStatus::new();
        let handle = AcceptorHandle::new(channel.sender(), &status);

        handle.activate().unwrap();
        handle.inject_pulses(5).unwrap();
        handle.deactivate().unwrap();

        assert!(matches!(channel.try_receive(), Ok(Event::Activate)));
        assert!(matches!(
            channel.try_receive(),
            Ok(Event::InjectPulses { count: 5 })
        ));
        assert!(matches!(channel.try_receive(), Ok(Event::Deactivate)));
    }

    #[test]
    fn zero_pulse_inject_is_rejected() {
        let channel = EventChannel::new();
        let status = SharedStatus::new();
        let handle = AcceptorHandle::new(channel.sender(), &status);

        assert_eq!(handle.inject_pulses(0), Err(Error::InvalidParameter));
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn full_queue_reports_buffer_full() {
        let channel = EventChannel::new();
        let status = SharedStatus::new();
        let handle = AcceptorHandle::new(channel.sender(), &status);

        while handle.activate().is_ok() {}
        assert_eq!(handle.activate(), Err(Error::BufferFull));
    }

    #[test]
    fn status_reads_shared_snapshot() {
        let channel = EventChannel::new();
        let status = SharedStatus::new();
        status.publish(42, true);

        let handle = AcceptorHandle::new(channel.sender(), &status);
        assert_eq!(handle.status().total_value, 42);
        assert!(handle.status().active);
    }
}

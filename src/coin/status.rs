// 状态快照
//
// dispatch 任务每处理完一个事件就发布一次；查询方原子读取，
// 不会阻塞脉冲路径

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// 共享状态（随时可读的原子量）
pub struct SharedStatus {
    total: AtomicU32,
    active: AtomicBool,
}

/// 一次快照读取
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub total_value: u32,
    pub active: bool,
}

impl SharedStatus {
    pub const fn new() -> Self {
        Self {
            total: AtomicU32::new(0),
            active: AtomicBool::new(false),
        }
    }

    /// 发布最新状态（仅 dispatch 任务调用）
    pub fn publish(&self, total: u32, active: bool) {
        self.total.store(total, Ordering::Relaxed);
        self.active.store(active, Ordering::Relaxed);
    }

    /// 读取快照
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            total_value: self.total.load(Ordering::Relaxed),
            active: self.active.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive_and_zero() {
        let status = SharedStatus::new();
        assert_eq!(
            status.snapshot(),
            StatusSnapshot {
                total_value: 0,
                active: false
            }
        );
    }

    #[test]
    fn snapshot_reflects_last_publish() {
        let status = SharedStatus::new();
        status.publish(6, true);
        let snap = status.snapshot();
        assert_eq!(snap.total_value, 6);
        assert!(snap.active);
    }
}

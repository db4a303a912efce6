// 模拟硬件（投币传感器、使能线）
use embassy_time::{Duration, Timer};
use log::info;

use crate::drivers::{EdgeSource, EnableLine};
use crate::error::Result;

/// 模拟脉冲间距
const PULSE_GAP: Duration = Duration::from_millis(50);
/// 两枚模拟硬币之间的间隔
const COIN_GAP: Duration = Duration::from_secs(8);

/// 模拟投币传感器
///
/// 周期性产生一簇脉冲，按给定序列轮流模拟不同面值的硬币。
/// 在真实硬件上这会被 GPIO 上升沿中断驱动替换
pub struct MockEdgeSensor {
    pattern: &'static [u32],
    index: usize,
    remaining: u32,
}

impl MockEdgeSensor {
    pub const fn new(pattern: &'static [u32]) -> Self {
        Self {
            pattern,
            index: 0,
            remaining: 0,
        }
    }
}

impl EdgeSource for MockEdgeSensor {
    async fn wait_for_edge(&mut self) {
        if self.remaining == 0 {
            // 当前簇已发完，等待下一枚硬币
            Timer::after(COIN_GAP).await;
            let pulses = self.pattern[self.index];
            self.index = (self.index + 1) % self.pattern.len();
            self.remaining = pulses;
            info!("Mock: inserting coin worth {} pulses", pulses);
        } else {
            Timer::after(PULSE_GAP).await;
        }
        self.remaining -= 1;
    }
}

/// 模拟使能线
pub struct MockEnableLine {
    pub level: bool,
}

impl MockEnableLine {
    pub const fn new() -> Self {
        Self { level: false }
    }
}

impl EnableLine for MockEnableLine {
    fn set_level(&mut self, high: bool) -> Result<()> {
        info!("Mock: enable line {}", if high { "HIGH" } else { "LOW" });
        self.level = high;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enable_line_records_level() {
        let mut line = MockEnableLine::new();
        assert!(!line.level);

        line.set_level(true).unwrap();
        assert!(line.level);

        line.set_level(false).unwrap();
        assert!(!line.level);
    }
}

// 硬件能力抽象
//
// 真实驱动与模拟驱动实现同一组 trait，构造时注入一次，
// 调用点不区分平台

use crate::error::Result;

// 模拟驱动（用于无硬件环境）
pub mod mock_hw;

pub use mock_hw::*;

/// 脉冲传感器能力
///
/// 每个物理上升沿返回一次，不携带数据
pub trait EdgeSource {
    async fn wait_for_edge(&mut self);
}

/// 使能线能力：驱动接收器的物理使能电平
pub trait EnableLine {
    fn set_level(&mut self, high: bool) -> Result<()>;
}

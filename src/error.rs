// 错误定义

/// 结果类型
pub type Result<T> = core::result::Result<T, Error>;

/// 错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// 输出驱动不可用（无法驱动使能线）
    GateUnavailable,
    /// 事件队列满
    BufferFull,
    /// 无效参数
    InvalidParameter,
}

// 投币接收核心
//
// 脉冲计数、去抖结算、面值解析与累计金额

pub mod acceptor;
pub mod denomination;
pub mod handle;
pub mod status;

// 重新导出常用类型
pub use acceptor::{AcceptorConfig, BurstResolution, CheckRequest, CoinAcceptor, DEBOUNCE_WINDOW};
pub use handle::AcceptorHandle;
pub use status::{SharedStatus, StatusSnapshot};

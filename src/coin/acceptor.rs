// 投币脉冲状态机
//
// 核心算法：门控计数 + 去抖窗口结算。所有可变状态由 dispatch
// 任务独占持有，这里不做任何加锁

use embassy_time::{Duration, Instant};
use log::{debug, info, trace, warn};

use crate::coin::denomination;
use crate::drivers::EnableLine;
use crate::error::{Error, Result};

/// 去抖窗口：最后一个脉冲之后安静超过该时长，视为一枚硬币投完
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// 状态机配置
#[derive(Debug, Clone, Copy)]
pub struct AcceptorConfig {
    /// 去抖窗口
    pub debounce_window: Duration,
}

impl Default for AcceptorConfig {
    fn default() -> Self {
        Self {
            debounce_window: DEBOUNCE_WINDOW,
        }
    }
}

/// 去抖检查请求
///
/// 每个边沿调度一次；fire_at 到点后把 generation 送回 on_check。
/// generation 绑定调度时刻的脉冲代号，检查不依赖回调的触发顺序
#[derive(Debug, Clone, Copy)]
pub struct CheckRequest {
    pub fire_at: Instant,
    pub generation: u32,
}

/// 脉冲簇：自上一次结算以来收到的脉冲
struct PulseBurst {
    count: u32,
    last_edge: Instant,
    generation: u32,
}

/// 一簇脉冲的结算结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstResolution {
    /// 识别为一枚硬币
    Accepted { pulses: u32, value: u32 },
    /// 脉冲数不在面值表中，计零
    Unrecognized { pulses: u32 },
}

/// 投币接收状态机
///
/// 使能线驱动在构造时注入；None 表示硬件缺失（纯软件环境）
pub struct CoinAcceptor<O: EnableLine> {
    config: AcceptorConfig,
    output: Option<O>,
    active: bool,
    burst: PulseBurst,
    total: u32,
}

impl<O: EnableLine> CoinAcceptor<O> {
    pub fn new(output: Option<O>) -> Self {
        Self::with_config(output, AcceptorConfig::default())
    }

    pub fn with_config(output: Option<O>, config: AcceptorConfig) -> Self {
        Self {
            config,
            output,
            active: false,
            burst: PulseBurst {
                count: 0,
                last_edge: Instant::from_ticks(0),
                generation: 0,
            },
            total: 0,
        }
    }

    /// 激活接收：后续脉冲开始计数，使能线拉高
    ///
    /// 输出驱动缺失时向调用方报告失败，但 active 标志照常更新，
    /// 没有硬件时纯软件测试仍然可用
    pub fn activate(&mut self) -> Result<()> {
        self.active = true;
        info!("Acceptor activated");
        self.drive_output(true)
    }

    /// 停用接收：后续脉冲被丢弃，使能线拉低
    ///
    /// 进行中的脉冲簇保持原样，已调度的检查仍会将其结算
    pub fn deactivate(&mut self) -> Result<()> {
        self.active = false;
        info!("Acceptor deactivated");
        self.drive_output(false)
    }

    fn drive_output(&mut self, high: bool) -> Result<()> {
        match self.output.as_mut() {
            Some(line) => line.set_level(high),
            None => Err(Error::GateUnavailable),
        }
    }

    /// 处理一个上升沿
    ///
    /// 门未激活时静默丢弃（不计数、不调度）。否则计数加一、
    /// 更新时间戳并递增 generation，返回一个去抖检查请求
    pub fn on_edge(&mut self, now: Instant) -> Option<CheckRequest> {
        if !self.active {
            trace!("Edge dropped: acceptor inactive");
            return None;
        }

        self.burst.count += 1;
        self.burst.last_edge = now;
        self.burst.generation = self.burst.generation.wrapping_add(1);

        debug!("Edge counted: burst at {} pulses", self.burst.count);

        Some(CheckRequest {
            fire_at: now + self.config.debounce_window,
            generation: self.burst.generation,
        })
    }

    /// 处理一次到期的去抖检查
    ///
    /// generation 不匹配说明调度之后又有新脉冲，由更晚的检查负责
    /// 结算；count 为零说明已经结算过。两种情况都是安全的空操作，
    /// 重复检查不会重复计数
    pub fn on_check(&mut self, generation: u32, now: Instant) -> Option<BurstResolution> {
        if generation != self.burst.generation {
            trace!("Debounce check superseded (generation {})", generation);
            return None;
        }
        if self.burst.count == 0 {
            trace!("Debounce check redundant: no pulses pending");
            return None;
        }

        let pulses = self.burst.count;
        let quiet_ms = now.as_millis().saturating_sub(self.burst.last_edge.as_millis());
        self.burst.count = 0;

        match denomination::value_for(pulses) {
            Some(value) => {
                self.total += value;
                info!(
                    "Coin accepted: {} pulses -> value {} ({} ms quiet), total {}",
                    pulses, value, quiet_ms, self.total
                );
                Some(BurstResolution::Accepted { pulses, value })
            }
            None => {
                warn!("Unrecognized burst of {} pulses, counted as zero", pulses);
                Some(BurstResolution::Unrecognized { pulses })
            }
        }
    }

    /// 门是否激活
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 累计金额（只增不减）
    pub fn total(&self) -> u32 {
        self.total
    }

    /// 当前脉冲簇的计数
    pub fn burst_count(&self) -> u32 {
        self.burst.count
    }
}

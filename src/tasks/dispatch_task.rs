// 事件分发任务
//
// 独占持有状态机，从事件队列串行消费。边沿计数、去抖结算、
// 门控命令全部在这里排队执行，互不交错

use embassy_time::Instant;
use log::{info, trace, warn};

use crate::coin::{CoinAcceptor, SharedStatus};
use crate::drivers::{EnableLine, MockEnableLine};
use crate::event::{Event, EventReceiver};
use crate::tasks::debounce_task::CheckSender;
use crate::tasks::inject_task::InjectSender;

/// 事件分发任务
#[embassy_executor::task]
pub async fn dispatch_task(
    acceptor: CoinAcceptor<MockEnableLine>,
    event_rx: EventReceiver<'static>,
    check_tx: CheckSender<'static>,
    inject_tx: InjectSender<'static>,
    status: &'static SharedStatus,
) -> ! {
    run_dispatch(acceptor, event_rx, check_tx, inject_tx, status).await
}

/// 分发循环本体（测试中直接驱动）
pub async fn run_dispatch<O: EnableLine>(
    mut acceptor: CoinAcceptor<O>,
    event_rx: EventReceiver<'_>,
    check_tx: CheckSender<'_>,
    inject_tx: InjectSender<'_>,
    status: &SharedStatus,
) -> ! {
    info!("Dispatch task started");

    loop {
        let event = event_rx.receive().await;

        match event {
            Event::EdgeDetected => {
                if let Some(check) = acceptor.on_edge(Instant::now()) {
                    trace!("Burst at {} pulses, check scheduled", acceptor.burst_count());
                    check_tx.send(check).await;
                }
            }

            Event::DebounceCheck { generation } => {
                // 结算与计账都在状态机内部完成，这里只负责驱动
                acceptor.on_check(generation, Instant::now());
            }

            Event::Activate => {
                if let Err(e) = acceptor.activate() {
                    warn!("Activate command failed: {:?}", e);
                }
            }

            Event::Deactivate => {
                if let Err(e) = acceptor.deactivate() {
                    warn!("Deactivate command failed: {:?}", e);
                }
            }

            Event::InjectPulses { count } => {
                if inject_tx.try_send(count).is_err() {
                    warn!("Inject request dropped: queue full");
                }
            }
        }

        status.publish(acceptor.total(), acceptor.is_active());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_futures::select::{Either4, select4};
    use embassy_time::{Duration, Timer};

    use crate::event::EventChannel;
    use crate::tasks::debounce_task::{CheckChannel, run_debounce};
    use crate::tasks::inject_task::{InjectChannel, run_inject};

    /// 真实时间驱动整条管线，脚本结束时 select 返回
    fn run_pipeline(script: impl AsyncFnOnce(&EventChannel, &SharedStatus)) {
        let events = EventChannel::new();
        let checks = CheckChannel::new();
        let injects = InjectChannel::new();
        let status = SharedStatus::new();

        let acceptor = CoinAcceptor::new(Some(MockEnableLine::new()));

        let dispatch = run_dispatch(
            acceptor,
            events.receiver(),
            checks.sender(),
            injects.sender(),
            &status,
        );
        let debounce = run_debounce(checks.receiver(), events.sender());
        let inject = run_inject(injects.receiver(), events.sender());

        block_on(async {
            match select4(dispatch, debounce, inject, script(&events, &status)).await {
                Either4::Fourth(()) => {}
                _ => unreachable!("pipeline tasks never return"),
            }
        });
    }

    /// 激活 → 1 脉冲 → 5 连脉冲 → 停用后注入被丢弃
    #[test]
    fn pipeline_counts_injected_bursts() {
        run_pipeline(async |events, status| {
            let tx = events.sender();

            tx.send(Event::Activate).await;
            tx.send(Event::InjectPulses { count: 1 }).await;
            Timer::after(Duration::from_millis(800)).await;

            let snap = status.snapshot();
            assert!(snap.active);
            assert_eq!(snap.total_value, 1);

            tx.send(Event::InjectPulses { count: 5 }).await;
            Timer::after(Duration::from_millis(1000)).await;
            assert_eq!(status.snapshot().total_value, 6);

            tx.send(Event::Deactivate).await;
            tx.send(Event::InjectPulses { count: 10 }).await;
            Timer::after(Duration::from_millis(1200)).await;

            let snap = status.snapshot();
            assert_eq!(snap.total_value, 6);
            assert!(!snap.active);
        });
    }

    /// 表外脉冲数计零，且不影响后续投币
    #[test]
    fn unknown_burst_counts_zero_end_to_end() {
        run_pipeline(async |events, status| {
            let tx = events.sender();

            tx.send(Event::Activate).await;
            tx.send(Event::InjectPulses { count: 3 }).await;
            Timer::after(Duration::from_millis(900)).await;
            assert_eq!(status.snapshot().total_value, 0);

            tx.send(Event::InjectPulses { count: 10 }).await;
            Timer::after(Duration::from_millis(1300)).await;
            assert_eq!(status.snapshot().total_value, 10);
        });
    }

    /// 未激活时注入的脉冲不改变任何状态
    #[test]
    fn edges_while_inactive_are_dropped_end_to_end() {
        run_pipeline(async |events, status| {
            let tx = events.sender();

            tx.send(Event::InjectPulses { count: 5 }).await;
            Timer::after(Duration::from_millis(900)).await;

            let snap = status.snapshot();
            assert_eq!(snap.total_value, 0);
            assert!(!snap.active);
        });
    }
}

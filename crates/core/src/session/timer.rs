use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use crate::models::event::DashboardEvent;
use crate::services::clock::Clock;

/// Recurring clock tick, posted as `DashboardEvent::Tick` on a channel.
///
/// The first tick fires one `period` after `start`. The background task is
/// aborted when the timer is dropped, so no tick is delivered after that.
pub struct TickTimer {
    handle: JoinHandle<()>,
    period: Duration,
}

impl TickTimer {
    /// Spawn the tick task. Must be called inside a tokio runtime.
    pub fn start(
        period: Duration,
        clock: Arc<dyn Clock>,
        events: mpsc::UnboundedSender<DashboardEvent>,
    ) -> Self {
        let period = period.max(Duration::from_millis(1));
        let first = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if events.send(DashboardEvent::Tick(clock.now())).is_err() {
                    debug!("tick receiver gone, stopping timer");
                    break;
                }
            }
        });
        debug!(period_ms = period.as_millis() as u64, "tick timer started");
        Self { handle, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// `false` once the task has stopped (receiver dropped or aborted).
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the timer now. Equivalent to dropping it.
    pub fn stop(self) {}
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

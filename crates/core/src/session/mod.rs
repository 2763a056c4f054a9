pub mod timer;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::models::event::{DashboardEvent, EventOutcome};
use crate::Dashboard;

use timer::TickTimer;

/// Cloneable handle for posting user events into a mounted session.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<DashboardEvent>,
}

impl EventSender {
    /// Queue an event. Returns `false` if the session is gone.
    pub fn send(&self, event: DashboardEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// A mounted dashboard: the dashboard itself, its event queue and, when the
/// configuration asks for a live clock, the tick timer.
///
/// Events are applied strictly one at a time. The timer never touches state;
/// it only queues `Tick` events. Unmounting (or dropping the session) stops
/// the timer unconditionally.
pub struct DashboardSession {
    dashboard: Dashboard,
    tx: mpsc::UnboundedSender<DashboardEvent>,
    rx: mpsc::UnboundedReceiver<DashboardEvent>,
    timer: Option<TickTimer>,
}

impl std::fmt::Debug for DashboardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardSession")
            .field("dashboard", &self.dashboard)
            .field("live", &self.is_live())
            .finish()
    }
}

impl DashboardSession {
    /// Activate a dashboard. Must be called inside a tokio runtime when the
    /// configuration enables the live clock.
    pub fn mount(dashboard: Dashboard) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = if dashboard.config().live_clock {
            Some(TickTimer::start(
                dashboard.config().tick_interval(),
                dashboard.clock(),
                tx.clone(),
            ))
        } else {
            None
        };
        info!(
            variant = %dashboard.config().variant,
            live_clock = timer.is_some(),
            "dashboard mounted"
        );
        Self {
            dashboard,
            tx,
            rx,
            timer,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Whether the tick timer is running.
    pub fn is_live(&self) -> bool {
        self.timer.as_ref().is_some_and(TickTimer::is_running)
    }

    /// Apply an event immediately, bypassing the queue.
    pub fn dispatch(&mut self, event: DashboardEvent) -> EventOutcome {
        self.dashboard.apply(event)
    }

    /// Apply every queued event in arrival order. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.dashboard.apply(event);
            applied += 1;
        }
        if applied > 0 {
            debug!(applied, "processed pending events");
        }
        applied
    }

    /// Wait for the next event and apply it.
    pub async fn next_event(&mut self) -> Option<EventOutcome> {
        let event = self.rx.recv().await?;
        Some(self.dashboard.apply(event))
    }

    /// Stop the timer and hand the dashboard back.
    ///
    /// Events already queued (ticks the timer fired, accepted user events)
    /// are applied first. Nothing sent after this call is delivered.
    pub fn unmount(mut self) -> Dashboard {
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
        self.rx.close();
        let drained = self.process_pending();
        info!(
            ticks = self.dashboard.tick_count(),
            drained,
            "dashboard unmounted"
        );
        self.dashboard
    }
}

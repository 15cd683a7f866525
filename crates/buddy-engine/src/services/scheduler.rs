//! Scheduler Service - Passive decay and motivation ticks
//!
//! Periodically runs the decay check and the motivational chatter for one
//! session. The task lives until its [`SchedulerHandle`] is shut down or dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::interval;

use buddy::PetRepository;

use crate::application::PetSession;

/// Scheduler configuration
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Interval between decay checks
    pub decay_interval: Duration,
    /// Interval between motivation rolls
    pub motivation_interval: Duration,
    /// Enable/disable scheduler
    pub enabled: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            decay_interval: Duration::from_secs(300), // 5 minutes
            motivation_interval: Duration::from_secs(60),
            enabled: true,
        }
    }
}

/// Background ticker for a shared session
pub struct PetScheduler<R: PetRepository> {
    session: Arc<Mutex<PetSession<R>>>,
    config: SchedulerConfig,
}

impl<R: PetRepository + 'static> PetScheduler<R> {
    /// Creates a new scheduler
    pub fn new(session: Arc<Mutex<PetSession<R>>>, config: Option<SchedulerConfig>) -> Self {
        Self {
            session,
            config: config.unwrap_or_default(),
        }
    }

    /// Start the scheduler (runs in background)
    pub fn start(self) -> SchedulerHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            self.run(stop_rx).await;
        });
        SchedulerHandle {
            stop: stop_tx,
            task: Some(task),
        }
    }

    /// Run the scheduler loop
    async fn run(self, mut stop: watch::Receiver<bool>) {
        if !self.config.enabled {
            tracing::info!("📅 Pet scheduler disabled");
            return;
        }

        tracing::info!(
            "📅 Pet scheduler started (decay: {:?}, motivation: {:?})",
            self.config.decay_interval,
            self.config.motivation_interval
        );

        let mut decay_ticker = interval(self.config.decay_interval);
        let mut motivation_ticker = interval(self.config.motivation_interval);

        // Skip the first immediate tick
        decay_ticker.tick().await;
        motivation_ticker.tick().await;

        loop {
            tokio::select! {
                _ = stop.changed() => break,
                _ = decay_ticker.tick() => self.decay_cycle().await,
                _ = motivation_ticker.tick() => self.motivation_cycle().await,
            }
        }

        tracing::info!("📅 Pet scheduler stopped");
    }

    async fn decay_cycle(&self) {
        let mut session = self.session.lock().await;
        let now = session.now();
        match session.check_decay(now).await {
            Ok(Some(transition)) => {
                tracing::debug!("🔄 Scheduler: decay -> {}", transition.emotion);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("  ❌ Decay check could not be saved: {}", e);
            }
        }
    }

    async fn motivation_cycle(&self) {
        let mut session = self.session.lock().await;
        if let Some(entry) = session.motivate() {
            tracing::debug!("💬 Scheduler: {}", entry.text);
        }
    }
}

/// Owner of a running scheduler task.
///
/// Dropping the handle aborts the task; `shutdown` stops it after the
/// current tick completes.
pub struct SchedulerHandle {
    stop: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Signal the loop to stop and wait for it
    pub async fn shutdown(mut self) {
        let _ = self.stop.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("⚠️  Pet scheduler ended abnormally: {}", e);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

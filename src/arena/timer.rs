use super::Inbound;
use crate::ALLOWED_TIMEOUTS;
use crate::DECISION_TIMEOUT;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Timing policy for a match: how long a bot may think, and how many
/// lapses are forgiven before it is removed.
///
/// Injected into the orchestrator at construction.
#[derive(Debug, Clone, Copy)]
pub struct TurnClock {
    pub decision: Duration,
    pub strikes: usize,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self {
            decision: Duration::from_secs(DECISION_TIMEOUT),
            strikes: ALLOWED_TIMEOUTS,
        }
    }
}

/// An armed response deadline for one pending turn.
///
/// Spawns a task that posts [`Inbound::Expired`] into the orchestrator's
/// inbox when the window elapses. `cancel` is a plain abort and is safe to
/// call after the task already fired; dropping the deadline cancels it too,
/// so a superseded timer can never outlive its turn.
#[derive(Debug)]
pub struct Deadline {
    task: JoinHandle<()>,
}

impl Deadline {
    pub fn schedule(delay: Duration, postbox: UnboundedSender<Inbound>, name: String) -> Self {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = postbox.send(Inbound::Expired { name });
        });
        Self { task }
    }
    /// No-op if the deadline already fired.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn default_clock() {
        let clock = TurnClock::default();
        assert_eq!(clock.decision, Duration::from_secs(DECISION_TIMEOUT));
        assert_eq!(clock.strikes, ALLOWED_TIMEOUTS);
    }
    #[tokio::test(start_paused = true)]
    async fn deadline_fires_after_delay() {
        let (tx, mut rx) = unbounded_channel();
        let _deadline = Deadline::schedule(Duration::from_secs(5), tx, "bot_0".to_string());
        tokio::time::advance(Duration::from_secs(6)).await;
        match rx.recv().await {
            Some(Inbound::Expired { name }) => assert_eq!(name, "bot_0"),
            other => panic!("expected Expired, got {:?}", other),
        }
    }
    #[tokio::test(start_paused = true)]
    async fn cancelled_deadline_never_fires() {
        let (tx, mut rx) = unbounded_channel();
        let deadline = Deadline::schedule(Duration::from_secs(5), tx, "bot_0".to_string());
        deadline.cancel();
        tokio::time::advance(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn cancel_after_fire_is_noop() {
        let (tx, mut rx) = unbounded_channel();
        let deadline = Deadline::schedule(Duration::from_secs(1), tx, "bot_0".to_string());
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(matches!(rx.recv().await, Some(Inbound::Expired { .. })));
        deadline.cancel();
        deadline.cancel();
    }
}

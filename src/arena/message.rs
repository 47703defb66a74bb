use crate::AgentKey;

/// Traffic multiplexed into the orchestrator's single inbox.
///
/// Bot actors and deadline timers share one channel, so a turn can be
/// resolved by whichever arrives first; the orchestrator's waiting-name
/// guards make stale entries harmless.
#[derive(Debug, Clone)]
pub enum Inbound {
    /// A bot wrote a line, identified only by its sender key.
    Said { key: AgentKey, line: String },
    /// The deadline armed for this player's turn elapsed.
    Expired { name: String },
}

impl std::fmt::Display for Inbound {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Inbound::Said { key, line } => write!(f, "#{} says {:?}", key, line),
            Inbound::Expired { name } => write!(f, "{} timed out", name),
        }
    }
}

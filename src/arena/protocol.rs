use crate::Chips;
use crate::Position;
use crate::gameplay::Action;

/// Lines beginning with this prefix are server control traffic, never a
/// player action.
pub const CONTROL_PREFIX: char = '!';

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    InvalidAction(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAction(s) => write!(f, "invalid action: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Centralizes the line vocabulary between the referee and its bots:
/// parsing inbound action lines and building the outbound reporting lines.
/// No component parses its own output.
pub struct Protocol;

impl Protocol {
    /// Parses a bot's line into an Action.
    pub fn decode(s: &str) -> Result<Action, ProtocolError> {
        Action::try_from(s.trim()).map_err(|_| ProtocolError::InvalidAction(s.to_string()))
    }
    /// True for server control lines that must never reach the round.
    pub fn is_control(line: &str) -> bool {
        line.starts_with(CONTROL_PREFIX)
    }
    /// The your-turn prompt, carrying the response window in milliseconds.
    pub fn go(window: std::time::Duration) -> String {
        format!("go {}", window.as_millis())
    }
    pub fn your_bot(name: &str) -> String {
        format!("Settings yourBot {}", name)
    }
    pub fn seat(name: &str, seat: Position) -> String {
        format!("{} seat {}", name, seat)
    }
    pub fn stack(name: &str, stack: Chips) -> String {
        format!("{} stack {}", name, stack)
    }
    pub fn post(name: &str, blind: Chips) -> String {
        format!("{} post {}", name, blind)
    }
    pub fn wins(name: &str, prize: Chips) -> String {
        format!("{} wins {}", name, prize)
    }
    pub fn action(name: &str, action: Action) -> String {
        format!("{} {}", name, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_valid_action() {
        assert!(Protocol::decode("fold").is_ok());
        assert!(Protocol::decode("check").is_ok());
        assert!(Protocol::decode(" call ").is_ok());
        assert!(Protocol::decode("raise 20").is_ok());
    }
    #[test]
    fn decode_invalid_action() {
        assert!(Protocol::decode("invalid").is_err());
        assert!(Protocol::decode("raise").is_err()); // missing amount
        assert!(Protocol::decode("").is_err());
    }
    #[test]
    fn control_lines_flagged() {
        assert!(Protocol::is_control("!shutdown"));
        assert!(!Protocol::is_control("check"));
    }
    #[test]
    fn go_prompt_in_millis() {
        let line = Protocol::go(std::time::Duration::from_secs(5));
        assert_eq!(line, "go 5000");
    }
    #[test]
    fn reporting_lines() {
        assert_eq!(Protocol::your_bot("bot_0"), "Settings yourBot bot_0");
        assert_eq!(Protocol::seat("bot_0", 0), "bot_0 seat 0");
        assert_eq!(Protocol::stack("bot_1", 990), "bot_1 stack 990");
        assert_eq!(Protocol::post("bot_1", 20), "bot_1 post 20");
        assert_eq!(Protocol::wins("bot_1", 30), "bot_1 wins 30");
    }
}

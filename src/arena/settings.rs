use super::TurnClock;
use crate::Chips;
use crate::HANDS_PER_LEVEL;
use crate::STACK;
use crate::gameplay::Blinds;

/// Configuration for one match.
///
/// `max_hands` is a referee backstop: a lineup of perfectly symmetric bots
/// could trade the same chips forever, so the match is adjudicated to the
/// surviving stacks after this many hands.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub stack: Chips,
    pub blinds: Blinds,
    pub hands_per_level: usize,
    pub clock: TurnClock,
    pub max_hands: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stack: STACK,
            blinds: Blinds::default(),
            hands_per_level: HANDS_PER_LEVEL,
            clock: TurnClock::default(),
            max_hands: 10_000,
        }
    }
}

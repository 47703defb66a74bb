use crate::Chips;

/// Betting-limit policy: is this bet amount legal given the current pot?
///
/// Injected into [`crate::gameplay::BettingRound`] at construction so the
/// round logic is limit-agnostic. Implementations must be pure.
pub trait BetLimit: Send + Sync {
    fn check_bet(&self, pot: Chips, amount: Chips) -> bool;
}

/// No-limit: any non-negative amount is legal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBetLimit;

impl BetLimit for NoBetLimit {
    fn check_bet(&self, _pot: Chips, amount: Chips) -> bool {
        amount >= 0
    }
}

/// Pot-limit: a bet may not exceed the current pot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PotLimit;

impl BetLimit for PotLimit {
    fn check_bet(&self, pot: Chips, amount: Chips) -> bool {
        amount >= 0 && amount <= pot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_limit_allows_any_positive_bet() {
        let limit = NoBetLimit;
        let pot = 100;
        assert!(limit.check_bet(pot, 30));
        assert!(limit.check_bet(pot, 100 * pot));
        assert!(!limit.check_bet(pot, -30));
    }
    #[test]
    fn pot_limit_caps_at_pot() {
        let limit = PotLimit;
        assert!(limit.check_bet(100, 100));
        assert!(limit.check_bet(100, 1));
        assert!(!limit.check_bet(100, 101));
        assert!(!limit.check_bet(100, -1));
    }
}

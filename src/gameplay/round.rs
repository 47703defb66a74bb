use super::BetLimit;
use super::NoBetLimit;
use crate::Chips;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Chip commitments and turn order for one betting round of a hand.
///
/// Seeded with the posted blinds, then fed one accepted action at a time
/// until [`BettingRound::next_better`] reports nobody left to ask. The pot
/// is the sum of everything posted this round; the side pot is the single
/// call threshold (the highest committed bet), not a split-for-all-ins
/// structure.
///
/// Stake bookkeeping distinguishes two ways of being "staked": a voluntary
/// accepted action marks the seat as having acted, while a blind post leaves
/// the seat unconditionally staked for reporting but keeps its option to act
/// alive.
pub struct BettingRound {
    order: Vec<String>,
    bets: HashMap<String, Chips>,
    pot: Chips,
    sidepot: Chips,
    staked: HashSet<String>,
    posted: HashSet<String>,
    folded: HashSet<String>,
    high_better: Option<String>,
    limit: Arc<dyn BetLimit>,
}

impl BettingRound {
    /// No-limit round seeded with the given initial bets (the blinds).
    pub fn new(order: Vec<String>, bets: HashMap<String, Chips>) -> Self {
        Self::with_limit(order, bets, Arc::new(NoBetLimit))
    }
    pub fn with_limit(
        order: Vec<String>,
        bets: HashMap<String, Chips>,
        limit: Arc<dyn BetLimit>,
    ) -> Self {
        assert!(
            bets.keys().all(|name| order.contains(name)),
            "initial bet from unseated player"
        );
        let bets = order
            .iter()
            .map(|name| (name.clone(), bets.get(name).copied().unwrap_or(0)))
            .collect::<HashMap<_, _>>();
        let pot = bets.values().sum();
        let sidepot = bets.values().copied().max().unwrap_or(0);
        let posted = bets
            .iter()
            .filter(|(_, amount)| **amount > 0)
            .map(|(name, _)| name.clone())
            .collect();
        Self {
            order,
            bets,
            pot,
            sidepot,
            posted,
            staked: HashSet::new(),
            folded: HashSet::new(),
            high_better: None,
            limit,
        }
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn sidepot(&self) -> Chips {
        self.sidepot
    }
    pub fn high_better(&self) -> Option<&str> {
        self.high_better.as_deref()
    }
    pub fn order(&self) -> &[String] {
        &self.order
    }
    /// This seat's commitment so far this round.
    pub fn bet(&self, name: &str) -> Chips {
        self.bets.get(name).copied().unwrap_or(0)
    }
    /// Chips this seat must add to match the current call threshold.
    pub fn to_call(&self, name: &str) -> Chips {
        self.sidepot - self.bet(name)
    }

    /// Posts `amount` more chips for `name`. An amount of 0 from a seat
    /// below the call threshold is a fold. Returns true for any accepted
    /// non-fold action; false for a fold or a bet the limit rejects (the
    /// latter with no state change).
    pub fn post_bet(&mut self, name: &str, amount: Chips) -> bool {
        assert!(self.order.iter().any(|n| n == name), "unseated player bet");
        assert!(!self.folded.contains(name), "folded player bet");
        if amount == 0 && self.bet(name) < self.sidepot {
            return self.post_fold(name);
        }
        if !self.limit.check_bet(self.pot, amount) {
            log::warn!("[round] rejecting bet of {} from {}", amount, name);
            return false;
        }
        let total = self.bet(name) + amount;
        self.bets.insert(name.to_string(), total);
        self.pot += amount;
        if total > self.sidepot {
            self.sidepot = total;
            self.high_better = Some(name.to_string());
        }
        self.staked.insert(name.to_string());
        true
    }

    /// Removes `name` from the round; their chips stay in the pot.
    /// Always returns false, mirroring the fold path of [`Self::post_bet`].
    pub fn post_fold(&mut self, name: &str) -> bool {
        assert!(self.order.iter().any(|n| n == name), "unseated player fold");
        self.folded.insert(name.to_string());
        self.staked.remove(name);
        self.posted.remove(name);
        false
    }

    /// True if this seat may still be asked for an action.
    pub fn can_bet(&self, name: &str) -> bool {
        self.order.iter().any(|n| n == name)
            && !self.folded.contains(name)
            && (!self.staked.contains(name) || self.bet(name) < self.sidepot)
    }

    /// True if this seat has acted and currently matches the call threshold,
    /// or is unconditionally staked from posting a blind.
    pub fn is_staked(&self, name: &str) -> bool {
        self.posted.contains(name)
            || (self.staked.contains(name) && self.bet(name) == self.sidepot)
    }

    /// The next seat to ask, scanning seating order cyclically from just
    /// after the last aggressor. Before any raise the anchor is the last
    /// seat committed at the call threshold (the big blind), which both
    /// starts the round after the blinds and preserves the big blind's
    /// option. None means the round is over: everyone left is staked at the
    /// threshold, or only one seat remains (uncontested).
    pub fn next_better(&self) -> Option<&str> {
        if self.remaining_players().len() <= 1 {
            return None;
        }
        let n = self.order.len();
        let start = self.anchor().map(|i| i + 1).unwrap_or(0);
        (0..n)
            .map(|k| &self.order[(start + k) % n])
            .find(|name| self.can_bet(name))
            .map(String::as_str)
    }

    /// True once this seat has folded out of the round.
    pub fn has_folded(&self, name: &str) -> bool {
        self.folded.contains(name)
    }

    /// Seats still contesting the pot, in seating order.
    pub fn remaining_players(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| !self.folded.contains(*name))
            .map(String::as_str)
            .collect()
    }

    /// Reporting lines for the current pot state.
    pub fn say_pot(&self) -> Vec<String> {
        vec![
            format!("Match pot {}", self.pot),
            format!("Match sidepots [{}]", self.sidepot),
        ]
    }

    fn anchor(&self) -> Option<usize> {
        match &self.high_better {
            Some(name) => self.order.iter().position(|n| n == name),
            None if self.sidepot > 0 => self
                .order
                .iter()
                .rposition(|name| self.bet(name) == self.sidepot),
            None => None,
        }
    }
}

impl std::fmt::Debug for BettingRound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BettingRound")
            .field("order", &self.order)
            .field("pot", &self.pot)
            .field("sidepot", &self.sidepot)
            .field("folded", &self.folded)
            .field("high_better", &self.high_better)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::PotLimit;

    fn round() -> BettingRound {
        let order = ["a", "b", "c"].map(String::from).to_vec();
        let bets = HashMap::from([("a".to_string(), 10), ("b".to_string(), 20)]);
        BettingRound::new(order, bets)
    }

    #[test]
    fn say_pot_lines() {
        let br = round();
        let pots = br.say_pot();
        assert!(pots.contains(&"Match pot 30".to_string()));
        assert!(pots.contains(&"Match sidepots [20]".to_string()));
    }
    #[test]
    fn constructor_state() {
        let br = round();
        assert_eq!(br.pot(), 30);
        assert_eq!(br.sidepot(), 20);
        assert_eq!(br.high_better(), None);
        assert_eq!(br.bet("c"), 0);
        assert_eq!(br.order(), ["a", "b", "c"]);
    }
    #[test]
    fn bet_staked_state() {
        let br = round();
        assert!(br.can_bet("c"));
        assert!(br.can_bet("a"));
        assert!(br.can_bet("b"));
        assert!(!br.can_bet("d"));
        assert!(br.is_staked("a"));
        assert!(br.is_staked("b"));
        assert!(!br.is_staked("c"));
    }
    #[test]
    fn next_better_after_blinds() {
        assert_eq!(round().next_better(), Some("c"));
    }
    #[test]
    fn fold_finds_next_better() {
        let mut br = round();
        assert_eq!(br.next_better(), Some("c"));
        br.post_bet("c", 0);
        assert_eq!(br.next_better(), Some("a"));
    }
    #[test]
    fn big_blind_keeps_option() {
        let mut br = round();
        assert!(!br.post_fold("c"));
        assert!(br.post_bet("a", 10));
        assert_eq!(br.next_better(), Some("b"));
    }
    #[test]
    fn round_over_after_fold_call_check() {
        let mut br = round();
        assert!(!br.post_fold("c"));
        assert!(br.post_bet("a", 10));
        assert!(br.post_bet("b", 0));
        assert_eq!(br.next_better(), None);
        let remaining = br.remaining_players();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.contains(&"a"));
        assert!(remaining.contains(&"b"));
    }
    #[test]
    fn heads_up_fold_wins_uncontested() {
        let mut br = round();
        assert!(!br.post_fold("c"));
        assert!(!br.post_fold("a"));
        assert_eq!(br.next_better(), None);
        assert_eq!(br.remaining_players(), ["b"]);
    }
    #[test]
    fn post_bet_raises_sidepot() {
        let mut br = round();
        assert!(br.post_bet("c", 100));
        assert_eq!(br.sidepot(), 100);
        assert_eq!(br.pot(), 130);
        assert_eq!(br.high_better(), Some("c"));
        for name in ["a", "b", "c"] {
            assert!(br.is_staked(name));
        }
    }
    #[test]
    fn zero_bet_below_call_is_fold() {
        let mut br = round();
        assert!(!br.post_bet("c", 0));
        assert_eq!(br.pot(), 30);
        assert!(!br.is_staked("c"));
        assert!(!br.can_bet("c"));
    }
    #[test]
    fn pot_invariants_hold_across_bets() {
        let mut br = round();
        br.post_bet("c", 40);
        br.post_bet("a", 30);
        br.post_bet("b", 60);
        let sum: Chips = ["a", "b", "c"].iter().map(|n| br.bet(n)).sum();
        let max: Chips = ["a", "b", "c"].iter().map(|n| br.bet(n)).max().unwrap();
        assert_eq!(br.pot(), sum);
        assert_eq!(br.sidepot(), max);
    }
    #[test]
    fn next_better_skips_raiser_until_reraised() {
        let mut br = round();
        br.post_bet("c", 100);
        assert_eq!(br.next_better(), Some("a"));
        br.post_bet("a", 90);
        assert_eq!(br.next_better(), Some("b"));
        br.post_bet("b", 80);
        assert_eq!(br.next_better(), None);
    }
    #[test]
    fn limit_rejection_leaves_state_unchanged() {
        let order = ["a", "b", "c"].map(String::from).to_vec();
        let bets = HashMap::from([("a".to_string(), 10), ("b".to_string(), 20)]);
        let mut br = BettingRound::with_limit(order, bets, Arc::new(PotLimit));
        assert!(!br.post_bet("c", 1000));
        assert_eq!(br.pot(), 30);
        assert_eq!(br.sidepot(), 20);
        assert!(br.can_bet("c"));
        assert!(br.post_bet("c", 30));
        assert_eq!(br.pot(), 60);
    }
    #[test]
    fn to_call_tracks_sidepot() {
        let mut br = round();
        assert_eq!(br.to_call("a"), 10);
        assert_eq!(br.to_call("b"), 0);
        assert_eq!(br.to_call("c"), 20);
        br.post_bet("c", 100);
        assert_eq!(br.to_call("a"), 90);
    }
    #[test]
    #[should_panic(expected = "unseated player bet")]
    fn unseated_bet_is_contract_violation() {
        round().post_bet("d", 10);
    }
}

use super::Player;
use super::Protocol;
use super::Settings;
use super::Table;
use super::TurnOrchestrator;
use crate::Chips;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::gameplay::Action;
use crate::gameplay::BetLimit;
use crate::gameplay::BettingRound;
use crate::gameplay::BlindManager;
use crate::gameplay::NoBetLimit;
use std::collections::HashMap;
use std::sync::Arc;

/// Final standings of a settled match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub hands: u64,
    pub winners: Vec<String>,
    pub stacks: Vec<(String, Chips)>,
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hands, winners: {}",
            self.hands,
            self.winners.join(", ")
        )
    }
}

/// Match coordinator: plays hands until one bot holds all the chips.
///
/// Imperative shell over the betting core. Each hand it asks the blind
/// rotation who posts, seeds a [`BettingRound`] with the forced bets, then
/// pumps the one-at-a-time ask/apply cycle through the orchestrator until
/// the round reports nobody left to ask. Settlement splits the pot evenly
/// over the seats still in (the single-tier policy; deeper side-pot
/// structure is out of scope), then busted and disconnected seats leave
/// the rotation for good.
pub struct MatchDriver {
    settings: Settings,
    limit: Arc<dyn BetLimit>,
    table: Table,
    orchestrator: TurnOrchestrator,
}

impl MatchDriver {
    pub fn new(settings: Settings, limit: Arc<dyn BetLimit>) -> Self {
        Self {
            settings,
            limit,
            table: Table::new(),
            orchestrator: TurnOrchestrator::new(settings.clock),
        }
    }
    pub fn with_defaults() -> Self {
        Self::new(Settings::default(), Arc::new(NoBetLimit))
    }
    /// Seats a player with the configured starting stack.
    pub fn sit<P>(&mut self, player: P) -> String
    where
        P: Player + 'static,
    {
        self.table
            .sit(Box::new(player), self.orchestrator.postbox(), self.settings.stack)
    }

    /// Plays the match to completion and resolves exactly once with the
    /// result. Every surviving bot is killed before this returns, on the
    /// error path too.
    pub async fn run(mut self) -> anyhow::Result<MatchResult> {
        let result = self.play().await;
        self.table.shutdown();
        result
    }

    async fn play(&mut self) -> anyhow::Result<MatchResult> {
        let seated = self.table.living_count();
        anyhow::ensure!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&seated),
            "wrong number of bots ({}), need {}-{}",
            seated,
            MIN_PLAYERS,
            MAX_PLAYERS,
        );
        log::info!("[driver] starting match with {} bots", seated);
        let mut rotation = BlindManager::with_blinds(
            self.settings.hands_per_level,
            self.table.living_names(),
            self.settings.blinds,
        );
        self.say_match_updates(&rotation);
        let mut hands = 0;
        while self.table.living_count() >= MIN_PLAYERS && hands < self.settings.max_hands {
            self.say_round_updates();
            self.play_hand(&mut rotation).await;
            hands += 1;
        }
        self.say_round_updates();
        log::info!("[driver] match over after {} hands", hands);
        Ok(MatchResult {
            hands,
            winners: self.table.living_names(),
            stacks: self
                .table
                .seats()
                .iter()
                .map(|s| (s.name().to_string(), s.chips()))
                .collect(),
        })
    }

    /// One hand: blinds, a betting round, settlement, eliminations.
    async fn play_hand(&mut self, rotation: &mut BlindManager) {
        let sb = rotation.next_sb().1.to_string();
        let bb = rotation.next_bb().1.to_string();
        for line in rotation.blinds().hand_blinds() {
            self.table.broadcast(&line);
        }
        let small = rotation.blinds().small().min(self.table.stack(&sb));
        let big = rotation.blinds().big().min(self.table.stack(&bb));
        self.table.change_chips(&sb, -small);
        self.table.change_chips(&bb, -big);
        self.table.broadcast(&Protocol::post(&sb, small));
        self.table.broadcast(&Protocol::post(&bb, big));
        let bets = HashMap::from([(sb, small), (bb, big)]);
        let mut round =
            BettingRound::with_limit(rotation.seats().to_vec(), bets, self.limit.clone());
        for line in round.say_pot() {
            self.table.broadcast(&line);
        }
        while let Some(name) = round.next_better().map(str::to_string) {
            let action = self.orchestrator.turn(&mut self.table, &name).await;
            self.apply(&mut round, &name, action);
        }
        self.settle(&round);
        rotation.finish_hand();
        self.eliminate(rotation);
    }

    /// Turns an action into a chip delta and posts it. The referee computes
    /// call amounts itself and clamps everything to the seat's stack; an
    /// action the round rejects outright costs the seat its hand.
    fn apply(&mut self, round: &mut BettingRound, name: &str, action: Action) {
        let stack = self.table.stack(name);
        let amount = match action {
            Action::Fold => {
                round.post_fold(name);
                self.say_action(round, name, action);
                return;
            }
            Action::Check => 0,
            Action::Call => round.to_call(name).min(stack),
            Action::Raise(more) => (round.to_call(name) + more).min(stack),
            Action::Shove => stack,
        };
        if round.post_bet(name, amount) {
            self.table.change_chips(name, -amount);
        } else if !round.has_folded(name) {
            log::warn!("[driver] {} mucked on a rejected {}", name, action.label());
            round.post_fold(name);
        }
        self.say_action(round, name, action);
    }

    /// Splits the pot evenly over the seats still in. Integer division;
    /// the remainder stays with the house.
    fn settle(&mut self, round: &BettingRound) {
        let winners = round
            .remaining_players()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>();
        let prize = round.pot() / winners.len() as Chips;
        for name in &winners {
            self.table.change_chips(name, prize);
            self.table.broadcast(&Protocol::wins(name, prize));
        }
    }

    /// Removes busted and disconnected seats from the table and the blind
    /// rotation. Irreversible.
    fn eliminate(&mut self, rotation: &mut BlindManager) {
        for name in rotation.seats().to_vec() {
            let alive = self.table.seat(&name).map(|s| s.alive()).unwrap_or(false);
            if alive && self.table.stack(&name) <= 0 {
                self.table.kill(&name, "busted");
            }
            if !self.table.seat(&name).map(|s| s.alive()).unwrap_or(false) {
                rotation.eliminate_player(&name);
            }
        }
    }

    /// Match-start announcements: blind schedule, then seating, individual
    /// and broadcast.
    fn say_match_updates(&self, rotation: &BlindManager) {
        for line in rotation.match_blinds() {
            self.table.broadcast(&line);
        }
        for (seat, s) in self.table.seats().iter().enumerate() {
            self.table.unicast(s.name(), &Protocol::your_bot(s.name()));
            self.table.broadcast(&Protocol::seat(s.name(), seat));
        }
    }

    /// Per-hand stack report for every seat.
    fn say_round_updates(&self) {
        for seat in self.table.seats() {
            self.table
                .broadcast(&Protocol::stack(seat.name(), seat.chips()));
        }
    }

    fn say_action(&self, round: &BettingRound, name: &str, action: Action) {
        self.table.broadcast(&Protocol::action(name, action));
        for line in round.say_pot() {
            self.table.broadcast(&line);
        }
    }
}

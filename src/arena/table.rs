use super::Actor;
use super::Inbound;
use super::Player;
use crate::AgentKey;
use crate::Chips;
use tokio::sync::mpsc::UnboundedSender;

/// One seated bot: identity, bankroll, liveness, and its line inbox.
#[derive(Debug)]
pub struct Seat {
    key: AgentKey,
    name: String,
    stack: Chips,
    alive: bool,
    sender: Option<UnboundedSender<String>>,
}

impl Seat {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn key(&self) -> AgentKey {
        self.key
    }
    /// A dead seat's chips are out of play.
    pub fn chips(&self) -> Chips {
        if self.alive { self.stack } else { 0 }
    }
    pub fn alive(&self) -> bool {
        self.alive
    }
}

/// Seat registry and line delivery: the arena's view of who is connected,
/// what they are called, and how to reach them.
///
/// Seating spawns an [`Actor`] for the player and binds its sender key;
/// inbound traffic is resolved back to a name through [`Table::identify`].
/// Names follow seating order (`bot_0`, `bot_1`, ...) and are never reused
/// within a match.
#[derive(Debug, Default)]
pub struct Table {
    seats: Vec<Seat>,
    next_key: AgentKey,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }
    /// Seats a player with the given starting stack, wiring its actor into
    /// the shared inbox. Returns the assigned name.
    pub fn sit(
        &mut self,
        player: Box<dyn Player>,
        postbox: UnboundedSender<Inbound>,
        stack: Chips,
    ) -> String {
        let key = self.next_key;
        self.next_key += 1;
        let name = format!("bot_{}", self.seats.len());
        let sender = Actor::spawn(key, player, postbox);
        log::info!("[table] seating {} (#{})", name, key);
        self.seats.push(Seat {
            key,
            name: name.clone(),
            stack,
            alive: true,
            sender: Some(sender),
        });
        name
    }
    /// Resolves a sender key to a living seat's name. None for unknown or
    /// stale (killed) keys.
    pub fn identify(&self, key: AgentKey) -> Option<&str> {
        self.seats
            .iter()
            .find(|s| s.key == key && s.alive)
            .map(|s| s.name.as_str())
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, name: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.name == name)
    }
    /// Names of seats that still have money, in seating order.
    pub fn living_names(&self) -> Vec<String> {
        self.seats
            .iter()
            .filter(|s| s.alive)
            .map(|s| s.name.clone())
            .collect()
    }
    pub fn living_count(&self) -> usize {
        self.seats.iter().filter(|s| s.alive).count()
    }
    pub fn stack(&self, name: &str) -> Chips {
        self.seat(name).map(Seat::chips).unwrap_or(0)
    }
    /// Adjusts a seat's bankroll. Elimination of busted seats is the
    /// driver's call, made between hands.
    pub fn change_chips(&mut self, name: &str, delta: Chips) {
        if let Some(seat) = self.seats.iter_mut().find(|s| s.name == name) {
            seat.stack += delta;
        } else {
            log::warn!("[table] chips for unknown seat {}", name);
        }
    }
    /// Removes a seat from play permanently and closes its line inbox.
    pub fn kill(&mut self, name: &str, reason: &str) {
        match self.seats.iter_mut().find(|s| s.name == name) {
            Some(seat) if seat.alive => {
                log::info!("[table] killing {}: {}", name, reason);
                seat.alive = false;
                seat.sender = None;
            }
            Some(_) => log::debug!("[table] {} already dead", name),
            None => log::warn!("[table] cannot kill unknown seat {}", name),
        }
    }
    /// Kills every seat. The match finalizer; idempotent.
    pub fn shutdown(&mut self) {
        for name in self.living_names() {
            self.kill(&name, "match over");
        }
    }
    /// Sends a line to a specific seat.
    pub fn unicast(&self, name: &str, line: &str) {
        log::debug!("[table] unicast to {}: {}", name, line);
        match self
            .seat(name)
            .and_then(|s| s.sender.as_ref())
            .map(|inbox| inbox.send(line.to_string()))
        {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[table] unicast to {} failed: {:?}", name, e),
            None => log::warn!("[table] unicast to {}: no such player", name),
        }
    }
    /// Sends a line to all living seats.
    pub fn broadcast(&self, line: &str) {
        log::debug!("[table] broadcast: {}", line);
        self.seats
            .iter()
            .filter_map(|s| s.sender.as_ref().map(|inbox| (s, inbox)))
            .for_each(|(s, inbox)| match inbox.send(line.to_string()) {
                Ok(()) => {}
                Err(e) => log::warn!("[table] broadcast to {} failed: {:?}", s.name, e),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Station;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn table_seats_and_names() {
        let (tx, _rx) = unbounded_channel();
        let mut table = Table::new();
        let first = table.sit(Box::new(Station), tx.clone(), 1000);
        let second = table.sit(Box::new(Station), tx.clone(), 1000);
        assert_eq!(first, "bot_0");
        assert_eq!(second, "bot_1");
        assert_eq!(table.living_count(), 2);
    }
    #[tokio::test]
    async fn identify_resolves_keys() {
        let (tx, _rx) = unbounded_channel();
        let mut table = Table::new();
        let name = table.sit(Box::new(Station), tx.clone(), 1000);
        let key = table.seat(&name).unwrap().key();
        assert_eq!(table.identify(key), Some(name.as_str()));
        assert_eq!(table.identify(key + 999), None);
    }
    #[tokio::test]
    async fn killed_seat_goes_stale() {
        let (tx, _rx) = unbounded_channel();
        let mut table = Table::new();
        let name = table.sit(Box::new(Station), tx.clone(), 1000);
        let key = table.seat(&name).unwrap().key();
        table.kill(&name, "too many timeouts");
        assert_eq!(table.identify(key), None);
        assert_eq!(table.living_count(), 0);
        assert_eq!(table.stack(&name), 0);
    }
    #[tokio::test]
    async fn chips_move() {
        let (tx, _rx) = unbounded_channel();
        let mut table = Table::new();
        let name = table.sit(Box::new(Station), tx.clone(), 1000);
        table.change_chips(&name, -30);
        assert_eq!(table.stack(&name), 970);
        table.change_chips(&name, 90);
        assert_eq!(table.stack(&name), 1060);
    }
}

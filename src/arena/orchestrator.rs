use super::Deadline;
use super::Inbound;
use super::Protocol;
use super::Table;
use super::TurnClock;
use crate::AgentKey;
use crate::gameplay::Action;
use std::collections::HashMap;
use tokio::sync::mpsc::*;
use tokio::sync::oneshot;

/// The one outstanding turn request, destroyed on resolution.
struct Pending {
    name: String,
    promise: oneshot::Sender<Action>,
    deadline: Deadline,
}

/// Arbitrates whose turn it is: asks exactly one bot at a time, arms a
/// deadline, and resolves each request exactly once from whichever of the
/// bot's response or the timer arrives first.
///
/// The orchestrator is either idle or waiting on one name. Responses and
/// expirations that reach it in any other state are ignored, which makes
/// races between a late line and a firing timer benign. A bot that lets the
/// deadline lapse is answered for: a synthesized check while its strikes
/// last, then a synthesized fold and permanent removal from the match.
pub struct TurnOrchestrator {
    clock: TurnClock,
    inbox: UnboundedReceiver<Inbound>,
    postbox: UnboundedSender<Inbound>,
    waiting: Option<Pending>,
    strikes: HashMap<String, usize>,
}

impl TurnOrchestrator {
    pub fn new(clock: TurnClock) -> Self {
        let (postbox, inbox) = unbounded_channel();
        Self {
            clock,
            inbox,
            postbox,
            waiting: None,
            strikes: HashMap::new(),
        }
    }
    /// Sender side of the shared inbox, cloned into each seated actor.
    pub fn postbox(&self) -> UnboundedSender<Inbound> {
        self.postbox.clone()
    }
    pub fn is_idle(&self) -> bool {
        self.waiting.is_none()
    }

    /// Asks `name` for an action and awaits the resolution.
    ///
    /// Pumps the shared inbox while the request is outstanding, routing
    /// traffic into [`Self::on_response`] / [`Self::on_timeout`]; whichever
    /// of them resolves the promise ends the wait.
    pub async fn turn(&mut self, table: &mut Table, name: &str) -> Action {
        self.drain(table);
        let mut resolution = self.get_action(table, name);
        loop {
            let message = tokio::select! {
                biased;
                action = &mut resolution => return action.unwrap_or(Action::Fold),
                message = self.inbox.recv() => message,
            };
            match message {
                Some(Inbound::Said { key, line }) => self.on_response(table, key, &line),
                Some(Inbound::Expired { name }) => self.on_timeout(table, &name),
                None => return Action::Fold,
            }
        }
    }

    /// Prompts the bot, arms the deadline, and transitions Idle -> Waiting.
    /// Returns the not-yet-resolved result handle. Idle only.
    pub fn get_action(&mut self, table: &Table, name: &str) -> oneshot::Receiver<Action> {
        assert!(self.waiting.is_none(), "one outstanding request at a time");
        log::debug!("[orchestrator] asking {} for action", name);
        table.unicast(name, &Protocol::go(self.clock.decision));
        let (promise, resolution) = oneshot::channel();
        let deadline = Deadline::schedule(
            self.clock.decision,
            self.postbox.clone(),
            name.to_string(),
        );
        self.waiting = Some(Pending {
            name: name.to_string(),
            promise,
            deadline,
        });
        resolution
    }

    /// Handles a line from sender `key`. Ignored when the line is server
    /// control traffic or empty, when the key is unknown or stale, when the
    /// sender is not the bot being waited on, or when nothing is pending. A
    /// malformed action line is likewise ignored and the deadline keeps
    /// running. Otherwise resolves the pending turn and goes Idle.
    pub fn on_response(&mut self, table: &Table, key: AgentKey, line: &str) {
        if Protocol::is_control(line) {
            log::debug!("[orchestrator] ignoring control line: {}", line);
            return;
        }
        if line.trim().is_empty() {
            log::debug!("[orchestrator] ignoring empty line from #{}", key);
            return;
        }
        let Some(name) = table.identify(key) else {
            log::debug!("[orchestrator] ignoring line from unknown key #{}", key);
            return;
        };
        match &self.waiting {
            Some(pending) if pending.name == name => {}
            Some(pending) => {
                log::debug!(
                    "[orchestrator] ignoring {}, waiting on {}",
                    name,
                    pending.name
                );
                return;
            }
            None => {
                log::debug!("[orchestrator] ignoring {}, nobody was asked", name);
                return;
            }
        }
        let action = match Protocol::decode(line) {
            Ok(action) => action,
            Err(e) => {
                log::debug!("[orchestrator] ignoring {} from {}", e, name);
                return;
            }
        };
        let pending = self.waiting.take().expect("checked above");
        pending.deadline.cancel();
        log::debug!("[orchestrator] {} answers {}", pending.name, action);
        let _ = pending.promise.send(action);
    }

    /// Handles an expired deadline. A timer firing after the turn already
    /// resolved (or for some other name) is a no-op. Within the strike
    /// allowance the bot is answered with a synthesized check; past it, a
    /// synthesized fold and permanent removal from the match.
    pub fn on_timeout(&mut self, table: &mut Table, name: &str) {
        match &self.waiting {
            Some(pending) if pending.name == name => {}
            _ => {
                log::debug!("[orchestrator] stale timeout for {}", name);
                return;
            }
        }
        let strikes = self.strikes.entry(name.to_string()).or_insert(0);
        *strikes += 1;
        log::info!("[orchestrator] {} timed out (strike {})", name, strikes);
        let action = if *strikes > self.clock.strikes {
            table.kill(name, "disconnected, too many timeouts");
            Action::Fold
        } else {
            Action::Check
        };
        let pending = self.waiting.take().expect("checked above");
        let _ = pending.promise.send(action);
    }

    /// Discards traffic that arrived while idle. Everything routed here is
    /// stale by definition; the handlers log and drop it.
    fn drain(&mut self, table: &mut Table) {
        while let Ok(message) = self.inbox.try_recv() {
            log::debug!("[orchestrator] late traffic: {}", message);
            match message {
                Inbound::Said { key, line } => self.on_response(table, key, &line),
                Inbound::Expired { name } => self.on_timeout(table, &name),
            }
        }
    }
}

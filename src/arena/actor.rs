use super::Inbound;
use super::Player;
use crate::AgentKey;
use tokio::sync::mpsc::*;

/// Wrapper that runs a Player in its own async task.
///
/// - Table unicasts every line addressed to this seat
/// - On a `go` prompt the actor asks the Player to act and posts the
///   response (tagged with this seat's sender key) into the shared inbox
/// - All other lines are forwarded to [`Player::notify`]
pub struct Actor {
    key: AgentKey,
    player: Box<dyn Player>,
    getter: UnboundedReceiver<String>,
    postbox: UnboundedSender<Inbound>,
}

impl Actor {
    pub fn spawn(
        key: AgentKey,
        player: Box<dyn Player>,
        postbox: UnboundedSender<Inbound>,
    ) -> UnboundedSender<String> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            key,
            player,
            postbox,
            getter: rx,
        };
        tokio::spawn(actor.run());
        tx
    }
    async fn run(mut self) {
        loop {
            match self.getter.recv().await {
                Some(ref line) if Self::is_go(line) => {
                    log::debug!("[actor #{}] prompted", self.key);
                    self.player.notify(line).await;
                    let said = self.player.act().await;
                    log::debug!("[actor #{}] answers {:?}", self.key, said);
                    let _ = self.postbox.send(Inbound::Said {
                        key: self.key,
                        line: said,
                    });
                    if !self.player.alive() {
                        log::info!("[actor #{}] player hung up", self.key);
                        break;
                    }
                }
                Some(ref line) => {
                    log::trace!("[actor #{}] received {:?}", self.key, line);
                    self.player.notify(line).await;
                }
                None => break,
            }
        }
    }
    fn is_go(line: &str) -> bool {
        line == "go" || line.starts_with("go ")
    }
}

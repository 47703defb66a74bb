/// Trait for entities that answer the referee's prompts.
/// Implementations can be scripted strategies, humans via CLI, or network
/// bridges; the arena doesn't care where lines come from.
///
/// The async design allows:
/// - Scripted players to answer immediately
/// - Human or network players to await input without blocking the match
#[async_trait::async_trait]
pub trait Player: Send {
    /// Check if the player is still connected.
    /// Default implementation returns true (scripted players are always alive).
    fn alive(&self) -> bool {
        true
    }
    /// Receive a game-state line. Called for every broadcast and for
    /// private lines addressed to this player.
    async fn notify(&mut self, line: &str);
    /// Produce a response line after a `go` prompt. Whatever comes back is
    /// sent verbatim; the referee does the validating.
    async fn act(&mut self) -> String;
}

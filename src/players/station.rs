use crate::arena::Player;

/// The calling station: matches every bet, never raises, never folds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Station;

#[async_trait::async_trait]
impl Player for Station {
    async fn notify(&mut self, _: &str) {}
    async fn act(&mut self) -> String {
        "call".to_string()
    }
}

use crate::arena::Player;

/// Folds to any pressure.
///
/// Always answers `check`; the referee converts a check from a seat facing
/// a bet into a fold, so this bot only ever wins walks and free showdowns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nit;

#[async_trait::async_trait]
impl Player for Nit {
    async fn notify(&mut self, _: &str) {}
    async fn act(&mut self) -> String {
        "check".to_string()
    }
}

use crate::B_BLIND;
use crate::Chips;
use crate::arena::Player;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Mixes raises into a calling baseline.
///
/// With probability `aggression` it raises by a fixed increment, otherwise
/// it calls. At 1.0 this is the pure raise bot, at 0.0 a calling station.
#[derive(Debug)]
pub struct Maniac {
    aggression: f64,
    raise: Chips,
    rng: SmallRng,
}

impl Maniac {
    pub fn new(aggression: f64, raise: Chips) -> Self {
        assert!((0.0..=1.0).contains(&aggression), "aggression is a probability");
        assert!(raise > 0, "raise increment must be positive");
        Self {
            aggression,
            raise,
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Default for Maniac {
    fn default() -> Self {
        Self::new(0.5, B_BLIND)
    }
}

#[async_trait::async_trait]
impl Player for Maniac {
    async fn notify(&mut self, _: &str) {}
    async fn act(&mut self) -> String {
        if self.rng.random_bool(self.aggression) {
            format!("raise {}", self.raise)
        } else {
            "call".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn extremes_are_deterministic() {
        let mut raiser = Maniac::new(1.0, 20);
        assert_eq!(raiser.act().await, "raise 20");
        let mut caller = Maniac::new(0.0, 20);
        assert_eq!(caller.act().await, "call");
    }
}

//! Arena binary.
//!
//! Seats a scripted lineup and referees a match to completion.

use botarena::*;
use clap::Parser;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "arena", about = "Referee a poker match between scripted bots")]
struct Args {
    /// Calling stations to seat.
    #[arg(long, default_value_t = 1)]
    stations: usize,
    /// Check-fold nits to seat.
    #[arg(long, default_value_t = 1)]
    nits: usize,
    /// Raise-happy maniacs to seat.
    #[arg(long, default_value_t = 1)]
    maniacs: usize,
    /// Starting stack per bot.
    #[arg(long, default_value_t = STACK)]
    stack: Chips,
    /// Hands per blind level.
    #[arg(long, default_value_t = HANDS_PER_LEVEL)]
    hands_per_level: usize,
    /// Cap bets at the pot instead of no-limit.
    #[arg(long)]
    pot_limit: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let settings = arena::Settings {
        stack: args.stack,
        hands_per_level: args.hands_per_level,
        ..arena::Settings::default()
    };
    let limit: Arc<dyn gameplay::BetLimit> = if args.pot_limit {
        Arc::new(gameplay::PotLimit)
    } else {
        Arc::new(gameplay::NoBetLimit)
    };
    let mut driver = arena::MatchDriver::new(settings, limit);
    for _ in 0..args.nits {
        driver.sit(players::Nit);
    }
    for _ in 0..args.stations {
        driver.sit(players::Station);
    }
    for _ in 0..args.maniacs {
        driver.sit(players::Maniac::default());
    }
    let result = driver.run().await?;
    log::info!("{}", result);
    for (name, stack) in &result.stacks {
        log::info!("{} finishes with {}", name, stack);
    }
    Ok(())
}

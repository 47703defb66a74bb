//! Referee engine for multi-bot poker matches.
//!
//! Bots speak a line-oriented text protocol; the arena arbitrates whose turn
//! it is, enforces response deadlines, tracks chip commitments through a
//! betting round, and rotates blind obligations as players bust out.
//!
//! ## Architecture
//!
//! - [`arena::MatchDriver`] — Match coordinator sequencing hands and settling pots
//! - [`arena::TurnOrchestrator`] — One-outstanding-request turn arbiter with deadlines
//! - [`arena::Table`] — Seat registry, sender-key identity, and line delivery
//! - [`arena::Actor`] — Async task wrapper for a single bot's line loop
//! - [`gameplay::BettingRound`] — Pot, side pot, and fold/stake bookkeeping for one round
//! - [`gameplay::BlindManager`] — Blind rotation across a shrinking seat list
//!
//! ## Submodules
//!
//! - [`gameplay`] — Betting rules: actions, limits, blinds, rounds
//! - [`arena`] — Async runtime: table, orchestrator, driver, protocol
//! - [`players`] — Scripted bot implementations (Nit, Station, Maniac)

pub mod arena;
pub mod gameplay;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and bet amounts in chips.
pub type Chips = i32;
/// Seat index around the table.
pub type Position = usize;
/// Opaque sender key assigned to each connected bot.
pub type AgentKey = u64;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Fewest players a match can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players a table will seat.
pub const MAX_PLAYERS: usize = 10;
/// Starting stack size in chips.
pub const STACK: Chips = 1000;
/// Small blind at the first level.
pub const S_BLIND: Chips = 10;
/// Big blind at the first level.
pub const B_BLIND: Chips = 20;
/// Hands played before the blinds escalate.
pub const HANDS_PER_LEVEL: usize = 10;
/// Seconds a bot has to answer a `go` prompt.
pub const DECISION_TIMEOUT: u64 = 5;
/// Timeouts forgiven (as synthesized checks) before a bot is removed.
pub const ALLOWED_TIMEOUTS: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

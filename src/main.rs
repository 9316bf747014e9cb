//! Sky Climb headless driver
//!
//! Plays a number of autopilot runs back to back, one tick per simulated
//! frame, and reports the session leaderboard.
//!
//! Usage: `skyclimb [classic|catch-up|settings.json] [runs]`

use skyclimb::highscores::RunRecord;
use skyclimb::sim::{RenderSnapshot, TickInput, WorldState, tick};
use skyclimb::{HighScores, Settings};

/// Runs longer than this are cut off (about five minutes at 60 Hz)
const MAX_TICKS_PER_RUN: u64 = 60 * 60 * 5;
const DEFAULT_RUNS: u32 = 3;

fn main() {
    env_logger::init();
    log::info!("Sky Climb (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(arg) => Settings::from_arg(&arg),
        None => Settings::default(),
    };
    let runs = match args.next().map(|s| s.parse::<u32>()) {
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            log::warn!("Invalid run count, using {DEFAULT_RUNS}");
            DEFAULT_RUNS
        }
        None => DEFAULT_RUNS,
    };

    let seed = rand::random::<u64>();
    let mut world = WorldState::new(settings, seed);
    log::info!("Game initialized with seed: {seed}, camera: {:?}", world.settings.camera);

    let mut highscores = HighScores::new();
    let mut last = None;

    for run in 1..=runs {
        if run > 1 {
            world.reset();
        }
        let (snapshot, record) = play(&mut world);
        let best = record.peak().text();

        match highscores.add_score(record.into_entry(world.seed)) {
            Some(rank) => log::info!("Run {run}: best {best} (rank {rank})"),
            None => log::info!("Run {run}: best {best}"),
        }
        last = Some(snapshot);
    }

    println!("Session leaderboard:");
    for (i, entry) in highscores.entries.iter().enumerate() {
        println!(
            "{:>2}. {:>8.1}  {:<12} {:>6} ticks  seed {}",
            i + 1,
            entry.score,
            entry.band.as_str(),
            entry.ticks,
            entry.seed
        );
    }
    if highscores.is_empty() {
        println!("  (no scoring runs)");
    }

    if let Some(last) = &last {
        match serde_json::to_string(last) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize final snapshot: {e}"),
        }
    }
}

/// Tick one run to completion or the tick cap
fn play(world: &mut WorldState) -> (RenderSnapshot, RunRecord) {
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut record = RunRecord::new();
    let mut snapshot = RenderSnapshot::capture(world);
    while snapshot.running && snapshot.time_ticks < MAX_TICKS_PER_RUN {
        let band = record.band();
        snapshot = tick(world, &input);
        record.observe(&snapshot);
        if record.band() != band {
            log::info!("Reached {} at score {}", record.band().as_str(), snapshot.score_text);
        }
    }

    if snapshot.running {
        log::info!("Run stopped at tick cap, score {}", snapshot.score_text);
    }
    (snapshot, record)
}

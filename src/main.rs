//! Dungeon Gunner - Entry Point
//!
//! Headless driver: loads the config, wires the state machine to the stock
//! dungeon builder and ECS spawner, and ticks it at a fixed rate while
//! reading raw key events.
//!
//! Keys: `space` scores 10 points, `+`/`-` step the multiplier, `p` restarts
//! the level, `q`/`esc` quits.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    style::Print,
    terminal::{self, disable_raw_mode, enable_raw_mode, ClearType},
};

use dungeon_gunner::data::{export_default_config, GameConfig};
use dungeon_gunner::dungeon::{NearestSpawnPoint, RoomGraphBuilder};
use dungeon_gunner::entities::WorldSpawner;
use dungeon_gunner::{EventBus, EventKind, Game, GameEvent};

fn main() -> Result<()> {
    // Log to file so raw terminal output stays readable
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("dungeon-gunner.log")
        .context("failed to open dungeon-gunner.log")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Dungeon Gunner v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let config_arg = match args.next().as_deref() {
        Some("--export-config") => {
            let path = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(dungeon_gunner::data::config_path);
            export_default_config(&path)?;
            println!("Wrote default config to {}", path.display());
            return Ok(());
        }
        Some(path) => Some(PathBuf::from(path)),
        None => None,
    };

    let config = GameConfig::load_or_default(config_arg.as_deref())?;
    config.validate().context("invalid game configuration")?;

    let bus = EventBus::new();
    let mut game = Game::new(
        bus.clone(),
        Box::new(RoomGraphBuilder::new(config.seed)),
        Box::new(NearestSpawnPoint),
        Box::new(WorldSpawner::new()),
    );
    game.initialize(config.levels.clone(), config.player.clone())
        .context("failed to initialize game")?;

    bus.subscribe(EventKind::ScoreChanged, |event| {
        if let GameEvent::ScoreChanged(args) = event {
            log::info!("Score {} (x{})", args.score, args.multiplier);
        }
    });

    enable_raw_mode()?;
    let result = run_game_loop(&mut game, config.ticks_per_second.max(1));
    disable_raw_mode()?;
    println!();

    game.shutdown();

    if let Err(ref e) = result {
        log::error!("Game exited with error: {:#}", e);
    }

    log::info!("Dungeon Gunner shut down cleanly");
    result
}

/// Fixed-rate tick loop
fn run_game_loop(game: &mut Game, ticks_per_second: u32) -> Result<()> {
    let tick_time = Duration::from_secs(1) / ticks_per_second;
    let mut stdout = io::stdout();

    loop {
        let tick_start = Instant::now();

        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('p') => game.request_restart(),
                        KeyCode::Char(' ') => game.bus().enqueue(GameEvent::point_scored(10)),
                        KeyCode::Char('+') => game.bus().enqueue(GameEvent::multiplier_changed(true)),
                        KeyCode::Char('-') => game.bus().enqueue(GameEvent::multiplier_changed(false)),
                        _ => {}
                    }
                }
            }
        }

        game.tick()?;

        let room = game
            .current_room()
            .map_or_else(|| "-".to_string(), |r| format!("{:?}", r.id));
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            Print(format!(
                "{:?} | room {} | score {} x{}",
                game.state(),
                room,
                game.score(),
                game.multiplier()
            ))
        )?;
        stdout.flush()?;

        let elapsed = tick_start.elapsed();
        if elapsed < tick_time {
            std::thread::sleep(tick_time - elapsed);
        }
    }

    Ok(())
}

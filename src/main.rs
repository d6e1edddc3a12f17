mod input;
mod ui;

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use input::KeyTracker;
use rand::thread_rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use runner::build_info;
use runner::{RunnerConfig, Session, SessionAction};
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file. Unset means no logging.
const LOG_ENV_VAR: &str = "RUNNER_LOG";

/// Install a file-backed subscriber. The terminal is in raw mode on the
/// alternate screen, so nothing may be written to stdout or stderr.
fn init_logging() {
    let Ok(path) = std::env::var(LOG_ENV_VAR) else {
        return;
    };
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => eprintln!("Could not open log file {}: {}", path, e),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "runner {} ({} {})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skater Survival - terminal endless runner\n");
                println!("Usage: runner [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Environment:");
                println!("  RUNNER_CONFIG  Config file (default config/runner.toml)");
                println!("  RUNNER_LOG     Write logs to this file (filter with RUST_LOG)");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'runner --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();
    let config = RunnerConfig::load();
    tracing::info!(?config, "Starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(cursor::Hide)?;
    // Key release events where the terminal supports them; others only
    // report presses and fall back to the hold window in `KeyTracker`.
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false)
        && stdout
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    tracing::debug!(keyboard_enhanced, "Keyboard mode");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Blocking reads live on their own thread so the frame loop never waits
    // on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut terminal, config, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = terminal.backend_mut().execute(PopKeyboardEnhancementFlags);
    }
    let _ = terminal.backend_mut().execute(cursor::Show);
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();

    if let Err(e) = &result {
        tracing::error!("Terminal error: {}", e);
    }
    result
}

/// Fixed-rate frame loop: drain input, advance the session, draw.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: RunnerConfig,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> io::Result<()> {
    let started = Instant::now();
    let frame_time = Duration::from_millis(1000 / u64::from(config.fps.max(1)));
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new(keyboard_enhanced, config.fps);
    let mut session = Session::new(config, 0);

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            keys.handle_event(&ev);
        }
        let input = keys.snapshot();

        let now_ms = started.elapsed().as_millis() as u64;
        let screen = session.screen;
        if session.frame(&input, now_ms, &mut rng) == SessionAction::Quit {
            tracing::info!(
                best_seconds = session.records.best_seconds,
                best_level = session.records.best_level,
                "Quit"
            );
            return Ok(());
        }
        if session.screen != screen {
            keys.release_all();
        }

        terminal.draw(|frame| ui::draw_ui(frame, &session))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

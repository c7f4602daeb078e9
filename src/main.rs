mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use side_shooter::{Command, GameEvent, GameMode, Session, SimConfig, TickInput, WeaponId};

use crate::display::Viewport;

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 FPS

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so 8 frames (≈133 ms) is always
/// refreshed before expiry.  Without release events, two taps closer together
/// than the window read as one hold, so the second tap does not fire.
const HOLD_WINDOW: u64 = 8;

#[derive(Parser, Debug)]
#[command(name = "side_shooter", about = "Side-scrolling terminal shooter")]
struct Args {
    /// JSON file overriding simulation tuning
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed the RNG for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Log file (stderr is the game screen)
    #[arg(long, default_value = "side_shooter.log")]
    log_file: PathBuf,
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = SimConfig::from_json(&text)
        .with_context(|| format!("loading config {}", path.display()))?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// The audible side of a tick: hits ring the terminal bell, everything else
/// only goes to the log.
fn emit_tones<W: Write>(out: &mut W, events: &[GameEvent]) -> std::io::Result<()> {
    for event in events {
        debug!("tone: {event:?}");
        if matches!(
            event,
            GameEvent::EnemyHit | GameEvent::BossDefeated | GameEvent::PlayerHurt
        ) {
            out.write_all(b"\x07")?;
        }
    }
    Ok(())
}

fn menu_command(mode: GameMode, code: KeyCode) -> Option<Command> {
    match (mode, code) {
        (GameMode::MainMenu, KeyCode::Enter) => Some(Command::Start),
        (GameMode::Paused, KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C')) => {
            Some(Command::Resume)
        }
        (GameMode::Paused, KeyCode::Char('r') | KeyCode::Char('R')) => Some(Command::Restart),
        (GameMode::GameOver, KeyCode::Char('r') | KeyCode::Char('R')) => Some(Command::Retry),
        (GameMode::Paused | GameMode::GameOver, KeyCode::Char('m') | KeyCode::Char('M')) => {
            Some(Command::QuitToMenu)
        }
        (GameMode::Paused, KeyCode::Char(c)) => c
            .to_digit(10)
            .and_then(|d| WeaponId::from_slot(d as usize))
            .map(Command::Purchase),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key.  Each frame the keys that are still
/// "fresh" form the held-input snapshot handed to the simulation, so Space
/// and W/S can be held together.  One-shot keys (menus, pause) act on press.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
    seed: Option<u64>,
) -> std::io::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let clock = Instant::now();

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut pause_requested = false;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Esc if session.mode() == GameMode::Playing => {
                            pause_requested = true;
                        }
                        _ => {
                            if let Some(command) = menu_command(session.mode(), code) {
                                if let Err(err) = session.apply(command) {
                                    warn!("{err}");
                                }
                            }
                        }
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let input = TickInput {
            up: is_held(&key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame),
            down: is_held(&key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame),
            fire: is_held(&key_frame, &[KeyCode::Char(' ')], frame),
            pause: std::mem::take(&mut pause_requested),
            now: clock.elapsed(),
        };
        session.step(&input, &mut rng);
        emit_tones(out, &session.state.events)?;

        let (cols, rows) = terminal::size()?;
        display::render(out, &session.state, Viewport { cols, rows })?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;
    let config = load_config(args.config.as_deref())?;
    let mut session = Session::new(config).context("starting session")?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads live on their own thread so the frame loop never
    // waits on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    info!("starting, seed {:?}", args.seed);
    let result = game_loop(&mut out, &mut session, &rx, args.seed);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting with score {}, level {}", session.state.score, session.state.level);
    result.context("terminal I/O")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_stays_held_for_the_window() {
        let mut key_frame = HashMap::new();
        key_frame.insert(KeyCode::Char(' '), 10);
        let space = [KeyCode::Char(' ')];
        assert!(is_held(&key_frame, &space, 10 + HOLD_WINDOW));
        assert!(!is_held(&key_frame, &space, 11 + HOLD_WINDOW));
        // a second tap inside the window only refreshes the same hold
        key_frame.insert(KeyCode::Char(' '), 14);
        assert!(is_held(&key_frame, &space, 14 + HOLD_WINDOW));
    }
}

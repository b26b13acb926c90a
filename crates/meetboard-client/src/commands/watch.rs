//! Live mode: keep the board on the alternate screen and refresh it.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use chrono::{Local, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use meetboard_core::Board;
use meetboard_providers::{CalendarSource, GoogleEventsFile};
use tracing::{debug, warn};

use crate::commands::show::render_pass;
use crate::config::{ClientConfig, MAX_WATCH_INTERVAL_SECS};
use crate::error::{ClientError, ClientResult};

const POLL_SLICE: Duration = Duration::from_millis(250);

/// Runs the refresh loop until the user quits.
pub fn run(config: &ClientConfig) -> ClientResult<()> {
    let source = GoogleEventsFile::new(config.events_file()?)?;
    if !source.input().is_rereadable() {
        return Err(ClientError::Config(
            "watch mode re-reads the events file and cannot use stdin".into(),
        ));
    }
    let board = Board::new(config.limits(), config.style());
    let interval = Duration::from_secs(config.watch.interval_secs);

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    loop {
        let frame = render_frame(&source, &board);
        draw(&mut stdout, &frame)?;
        if wait_for_quit(interval)? {
            debug!("quit requested");
            return Ok(());
        }
    }
}

/// Renders one frame, turning a fetch failure into an on-screen message so
/// the next tick can retry.
fn render_frame<S: CalendarSource + ?Sized>(source: &S, board: &Board) -> String {
    match render_pass(source, board, Utc::now(), &Local) {
        Ok(table) => table,
        Err(e) => {
            warn!("refresh failed: {}", e);
            format!("error: {}", e)
        }
    }
}

fn draw(stdout: &mut io::Stdout, frame: &str) -> io::Result<()> {
    queue!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(ClearType::All)
    )?;
    for line in frame.lines() {
        queue!(stdout, Print(line), cursor::MoveToNextLine(1))?;
    }
    queue!(
        stdout,
        cursor::MoveToNextLine(1),
        Print(format!("updated {} | q to quit", Local::now().format("%H:%M:%S")))
    )?;
    stdout.flush()
}

/// Waits up to `interval` for a quit key. Returns early without quitting on
/// resize so the frame is redrawn.
fn wait_for_quit(interval: Duration) -> io::Result<bool> {
    let deadline = deadline_after(Instant::now(), interval);
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if !event::poll(remaining.min(POLL_SLICE))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press && is_quit_key(&key) => {
                return Ok(true);
            }
            Event::Resize(..) => return Ok(false),
            _ => {}
        }
    }
}

/// `start + interval`, with the interval clamped to the longest accepted one.
fn deadline_after(start: Instant, interval: Duration) -> Instant {
    let interval = interval.min(Duration::from_secs(MAX_WATCH_INTERVAL_SECS));
    start.checked_add(interval).unwrap_or(start)
}

/// `q`, `Esc` and `Ctrl-C` all leave watch mode.
fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Restores the terminal when dropped, including on early returns.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut io::Stdout) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetboard_providers::StaticSource;

    #[test]
    fn quit_keys() {
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn other_keys_do_not_quit() {
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_quit_key(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn deadline_clamps_oversized_interval() {
        let start = Instant::now();
        let deadline = deadline_after(start, Duration::from_secs(u64::MAX));
        assert_eq!(
            deadline - start,
            Duration::from_secs(MAX_WATCH_INTERVAL_SECS)
        );
        assert_eq!(
            deadline_after(start, Duration::from_secs(30)) - start,
            Duration::from_secs(30)
        );
    }

    #[test]
    fn stdin_rejected_before_touching_terminal() {
        let mut config = ClientConfig::default();
        config.source.events_file = Some("-".into());
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }

    #[test]
    fn empty_source_frame_shows_notice() {
        let frame = render_frame(&StaticSource::default(), &Board::default());
        assert_eq!(frame, crate::commands::show::NO_EVENTS_TEXT);
    }
}

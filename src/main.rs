//! Alien Invasion entry point
//!
//! Owns the platform loop: terminal setup and teardown, a dedicated input
//! thread feeding a channel, and a fixed-rate tick/render cycle over the
//! simulation. A quit request is honored on the very next frame, including
//! during the post-hit breather.

use std::collections::HashMap;
use std::io::{BufWriter, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
};

use alien_invasion::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};
use alien_invasion::renderer;
use alien_invasion::sim::state::GameState;
use alien_invasion::sim::tick::{TickInput, tick};

const FRAME: Duration = Duration::from_millis(1000 / TICK_RATE as u64);

/// A held key stays live this many frames past its last press/repeat event.
/// Covers classic terminals that never report releases: the OS key-repeat
/// stream refreshes the key well inside this window.
const HOLD_WINDOW: u64 = 4;

/// Tracks which keys are currently held. Keyboard-enhancement terminals
/// report releases directly; everywhere else a key expires after a few
/// frames of silence.
#[derive(Default)]
struct HeldKeys {
    last_seen: HashMap<KeyCode, u64>,
}

impl HeldKeys {
    fn record(&mut self, code: KeyCode, frame: u64) {
        self.last_seen.insert(code, frame);
    }

    fn release(&mut self, code: KeyCode) {
        self.last_seen.remove(&code);
    }

    fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&code)
            .is_some_and(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
    }

    fn any_held(&self, codes: &[KeyCode], frame: u64) -> bool {
        codes.iter().any(|&code| self.is_held(code, frame))
    }
}

/// Map a terminal cell to virtual-screen coordinates.
fn to_virtual(col: u16, row: u16, term: (u16, u16)) -> (i32, i32) {
    let cols = term.0.max(1) as i32;
    let rows = term.1.max(1) as i32;
    (
        col as i32 * SCREEN_WIDTH / cols,
        row as i32 * SCREEN_HEIGHT / rows,
    )
}

/// Run the session until a quit request arrives.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut held = HeldKeys::default();
    let mut frame: u64 = 0;
    let mut cursor_shown = true;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // One-shot inputs gathered fresh every frame
        let mut fire = false;
        let mut start = false;
        let mut click = None;

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        held.record(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            // Fire only on the press edge, never on repeat
                            KeyCode::Char(' ') => fire = true,
                            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => {
                                start = true;
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => held.record(code, frame),
                    KeyEventKind::Release => held.release(code),
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    click = Some(to_virtual(column, row, terminal::size()?));
                }
                _ => {}
            }
        }

        let input = TickInput {
            left: held.any_held(
                &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')],
                frame,
            ),
            right: held.any_held(
                &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')],
                frame,
            ),
            fire,
            start,
            click,
        };
        tick(state, &input);

        if state.cursor_visible != cursor_shown {
            if state.cursor_visible {
                out.execute(cursor::Show)?;
            } else {
                out.execute(cursor::Hide)?;
            }
            cursor_shown = state.cursor_visible;
        }

        renderer::render(out, state, terminal::size()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;

    // Ask for key-release events where the terminal supports them; the
    // hold-window fallback covers everything else.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicated thread for blocking event reads so the frame loop never
    // waits on input I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let mut state = GameState::default();
    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

//! Terminal blockfall runner (default binary).
//!
//! Owns the frame loop: poll input until the frame deadline, resolve the
//! frame against the simulation (input first, then gravity catch-up),
//! then draw. Uses crossterm for input and a framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Simulation;
use blockfall::input::{handle_key_event, should_quit, EdgeFilter};
use blockfall::term::{FieldView, FrameBuffer, TerminalRenderer, Viewport};
use blockfall::types::{InputAction, FRAME_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut sim = Simulation::new(1);
    sim.start();

    let view = FieldView::default();
    let mut edges = EdgeFilter::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut actions: Vec<InputAction> = Vec::new();

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        // Render the state left by the previous frame.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&sim, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Gather edge-triggered input until the frame deadline.
        let deadline = Instant::now() + frame;
        actions.clear();
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if edges.press(key.code) {
                            if let Some(action) = handle_key_event(key) {
                                actions.push(action);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Terminal auto-repeat is not a fresh press.
                    }
                    KeyEventKind::Release => edges.release(key.code),
                }
            }
        }

        // One frame: input before gravity, gravity before the next draw.
        sim.frame(&actions, start.elapsed());
    }
}

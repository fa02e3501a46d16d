//! Interactive key handling for the animation run.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use flipbook_lib::engine::AnimationEngine;

/// Poll for one key event and apply it. Returns `false` once the run should
/// stop (the user cancelled).
pub fn handle_key_event(engine: &AnimationEngine) -> bool {
    if event::poll(Duration::from_millis(100)).unwrap_or(false) {
        if let Ok(Event::Key(key)) = event::read() {
            if key.kind != KeyEventKind::Press {
                return true;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    engine.cancel();
                    return false;
                }
                _ => {}
            }
        }
    }

    true
}

//! Input Actor: Dedicated thread for polling terminal key events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to capture key presses without blocking the engine.

use super::messages::{InputEvent, KeyChord, KeyCode, KeyModifiers};
use crossbeam_channel::{SendTimeoutError, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send input events to the engine.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("deckhand-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.try_send(InputEvent::Shutdown);
                break;
            }

            let forwarded = match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => Self::convert_event(event)
                        .map_or(true, |input_event| Self::forward(sender, shutdown, input_event, poll_timeout)),
                    Err(e) => Self::forward(sender, shutdown, InputEvent::Error(e.to_string()), poll_timeout),
                },
                Ok(false) => true,
                Err(e) => Self::forward(sender, shutdown, InputEvent::Error(e.to_string()), poll_timeout),
            };

            if !forwarded {
                // Receiver dropped or shutdown requested while the channel was full
                break;
            }
        }
    }

    /// Send `event`, waiting at most `timeout` at a time so a full channel
    /// cannot hold off shutdown.
    ///
    /// Returns `false` when the loop should exit.
    fn forward(sender: &Sender<InputEvent>, shutdown: &AtomicBool, event: InputEvent, timeout: Duration) -> bool {
        let mut pending = event;
        loop {
            match sender.send_timeout(pending, timeout) {
                Ok(()) => return true,
                Err(SendTimeoutError::Timeout(event)) => {
                    if shutdown.load(Ordering::Relaxed) {
                        return false;
                    }
                    pending = event;
                }
                Err(SendTimeoutError::Disconnected(_)) => return false,
            }
        }
    }

    /// Convert a crossterm event to our InputEvent.
    fn convert_event(event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (not release or repeat)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                let code = convert_key_code(key_event.code)?;
                Some(InputEvent::Key(KeyChord::new(code, convert_modifiers(key_event.modifiers))))
            }
            _ => None,
        }
    }
}

/// Convert crossterm KeyCode to our KeyCode.
pub(crate) const fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Insert => KeyCode::Insert,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None, // Ignore other key codes
    })
}

/// Convert crossterm KeyModifiers to our KeyModifiers.
pub(crate) fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    for (theirs, ours) in [
        (event::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (event::KeyModifiers::ALT, KeyModifiers::ALT),
        (event::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (event::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ] {
        if mods.contains(theirs) {
            out |= ours;
        }
    }
    out
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

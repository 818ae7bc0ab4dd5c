//! Engine: Main coordinator that ties the input actor to the slide host.
//!
//! The Engine owns the host, the keymap and the config. Every key chord it
//! receives is looked up, run as a [`Command`], and turned into a
//! [`Notification`]; failures become error notifications instead of
//! propagating.

use super::keymap::Keymap;
use super::messages::{InputEvent, KeyChord, KeyCode, KeyModifiers};
use super::InputActor;
use crate::command::{self, Command};
use crate::config::Config;
use crate::error::Result;
use crate::host::SlideHost;
use crate::notify::Notification;
use crossbeam_channel::{bounded, Receiver, TryRecvError};
use crossterm::terminal;
use std::time::Duration;

/// Capacity of the input channel.
const INPUT_CHANNEL_CAPACITY: usize = 64;

/// Display time of the quick-keys listing.
const QUICK_KEYS_DURATION: Duration = Duration::from_secs(10);

/// The shortcut engine.
///
/// Front ends either feed it [`InputEvent`]s through [`Engine::run`], or
/// call [`Engine::dispatch`] directly.
pub struct Engine<H: SlideHost> {
    /// The slide being edited.
    host: H,
    /// Chord to command table.
    keymap: Keymap,
    /// Configuration.
    config: Config,
    /// Whether the engine is running.
    running: bool,
    /// Input actor handle, present once a terminal is attached.
    input_actor: Option<InputActor>,
    /// Whether raw mode was enabled by [`Engine::attach_terminal`].
    raw_mode: bool,
}

impl<H: SlideHost> Engine<H> {
    /// Create an engine with the default keymap plus `config.key_bindings`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured binding does not parse.
    pub fn new(host: H, config: Config) -> Result<Self> {
        let keymap = Keymap::with_overrides(&config.key_bindings)?;
        Ok(Self::with_keymap(host, config, keymap))
    }

    /// Create an engine with an explicit keymap.
    pub fn with_keymap(host: H, config: Config, keymap: Keymap) -> Self {
        Self {
            host,
            keymap,
            config,
            running: true,
            input_actor: None,
            raw_mode: false,
        }
    }

    /// Get a reference to the host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Get a mutable reference to the host.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Get the keymap.
    pub const fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Get a mutable reference to the keymap.
    pub const fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    /// Get the config.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Run `command` and report the outcome.
    ///
    /// Errors are logged and returned as an error notification.
    pub fn dispatch(&mut self, command: Command) -> Notification {
        let outcome = match command {
            Command::ShowQuickKeys => {
                Ok(Notification::info(self.keymap.help_text()).with_duration(QUICK_KEYS_DURATION))
            }
            other => command::execute(other, &mut self.host, &self.config),
        };

        let notification = outcome.unwrap_or_else(|e| {
            Notification::error(format!("Could not {}: {e}", command.failure_phrase()))
        });
        notification.log();
        notification
    }

    /// Handle a key chord.
    ///
    /// Returns `None` for unbound chords and for the stop chords (`Esc`,
    /// `Ctrl+C`).
    pub fn handle_key(&mut self, chord: KeyChord) -> Option<Notification> {
        if is_stop_chord(chord) {
            log::debug!("stop requested by {chord}");
            self.stop();
            return None;
        }

        if let Some(command) = self.keymap.lookup(chord) {
            Some(self.dispatch(command))
        } else {
            log::trace!("unbound chord {chord}");
            None
        }
    }

    /// Handle one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Notification> {
        match event {
            InputEvent::Key(chord) => self.handle_key(chord),
            InputEvent::Command(command) => Some(self.dispatch(command)),
            InputEvent::Error(message) => {
                log::warn!("input error: {message}");
                None
            }
            InputEvent::Shutdown => {
                self.stop();
                None
            }
        }
    }

    /// Drain input until the engine stops or the channel disconnects,
    /// passing every notification to `on_notify`.
    pub fn run(&mut self, input: &Receiver<InputEvent>, mut on_notify: impl FnMut(&Notification)) {
        while self.running {
            let Ok(event) = input.recv() else {
                log::debug!("input channel disconnected");
                break;
            };
            if let Some(notification) = self.handle_event(event) {
                on_notify(&notification);
            }
        }
    }

    /// Handle every event already queued, without blocking.
    pub fn drain(&mut self, input: &Receiver<InputEvent>) -> Vec<Notification> {
        let mut notifications = Vec::new();
        while self.running {
            match input.try_recv() {
                Ok(event) => notifications.extend(self.handle_event(event)),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        notifications
    }

    /// Put the terminal in raw mode and spawn the input actor.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the thread cannot
    /// be spawned.
    pub fn attach_terminal(&mut self) -> Result<Receiver<InputEvent>> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;

        let (input_tx, input_rx) = bounded::<InputEvent>(INPUT_CHANNEL_CAPACITY);
        self.input_actor = Some(InputActor::spawn(input_tx, self.config.input_poll_timeout())?);
        log::debug!("terminal attached");
        Ok(input_rx)
    }
}

fn is_stop_chord(chord: KeyChord) -> bool {
    chord == KeyChord::plain(KeyCode::Esc) || chord == KeyChord::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
}

impl<H: SlideHost> Drop for Engine<H> {
    fn drop(&mut self) {
        // Stop actors
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        // Restore terminal state
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

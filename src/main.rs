//! Zellij plugin wrapper and entry point.
//!
//! The thin layer between the Folio library and Zellij: it registers the
//! plugin and its worker, translates Zellij events into [`folio::Event`]s,
//! and carries out the [`folio::Action`]s the handler returns.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │   FolioWorker    │   │  ← Catalog, theme preference,
//! │  │ (worker thread)  │   │    contact submissions
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! - `1`-`4`: jump to Home, About, Projects, Contact
//! - `Tab` / `Shift+Tab`: next / previous section
//! - `m`: section menu, `t`: toggle theme, `q`: hide
//! - `j`/`k` or arrows: move within a section
//! - Projects: `/` search, `f`/`F` category, `d`/`n` sort, `r` reset, `R` retry
//! - Contact: `Enter` edits a field or submits, `Ctrl+s` submits, `Esc` leaves a field
//!
//! Only the wasm build talks to Zellij; a native build just prints a hint so
//! the library and its tests build on any host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
mod plugin {
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;
    use zellij_tile::shim::{post_message_to, post_message_to_plugin};

    use folio::worker::{FolioWorker, WorkerMessage, WorkerResponse, WORKER_NAME};
    use folio::{handle_event, Action, Config, Event as FolioEvent};

    pub struct State {
        app: folio::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: folio::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            folio::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            self.app = folio::initialize(&config);
            tracing::debug!(catalog_file = ?config.catalog_file, "app state initialized");

            subscribe(&[EventType::Key, EventType::CustomMessage, EventType::Timer]);

            self.dispatch(&FolioEvent::Start);
        }

        fn update(&mut self, event: Event) -> bool {
            let event_name = Self::event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let folio_event = match event {
                Event::Key(ref key) => match Self::map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                Event::CustomMessage(message, payload) => match Self::map_custom_message(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                },
                Event::Timer(elapsed) => FolioEvent::Timer {
                    millis: seconds_to_millis(elapsed),
                },
                _ => return false,
            };

            self.dispatch(&folio_event)
        }

        fn render(&mut self, rows: usize, cols: usize) {
            folio::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn dispatch(&mut self, event: &FolioEvent) -> bool {
            match handle_event(&mut self.app, event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn event_name(event: &Event) -> String {
            match event {
                Event::Key(key) => format!("Key({:?})", key.bare_key),
                Event::CustomMessage(name, _) => format!("CustomMessage({name})"),
                Event::Timer(elapsed) => format!("Timer({elapsed})"),
                _ => "Other".to_string(),
            }
        }

        fn map_key_event(key: &KeyWithModifier) -> Option<FolioEvent> {
            if key.bare_key == BareKey::Char('s') && key.has_modifiers(&[KeyModifier::Ctrl]) {
                return Some(FolioEvent::Submit);
            }
            if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
                return Some(FolioEvent::PreviousSection);
            }

            Some(match key.bare_key {
                BareKey::Tab => FolioEvent::NextSection,
                BareKey::Enter => FolioEvent::Enter,
                BareKey::Esc => FolioEvent::Escape,
                BareKey::Backspace => FolioEvent::Backspace,
                BareKey::Up => FolioEvent::Up,
                BareKey::Down => FolioEvent::Down,
                BareKey::Char(c) => FolioEvent::Char(c),
                _ => return None,
            })
        }

        fn map_custom_message(name: &str, payload: &str) -> Option<FolioEvent> {
            if name != WORKER_NAME {
                tracing::debug!(message_name = %name, "ignoring custom message with unknown name");
                return None;
            }

            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(FolioEvent::WorkerResponse(response)),
                Err(e) => {
                    tracing::warn!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        }

        fn post_worker_message(message: &WorkerMessage) {
            match serde_json::to_string(message) {
                Ok(payload) => {
                    tracing::debug!(kind = message.kind(), payload_len = payload.len(), "posting message to worker");
                    post_message_to(PluginMessage {
                        worker_name: Some(WORKER_NAME.to_string()),
                        name: WORKER_NAME.to_string(),
                        payload,
                    });
                }
                Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
            }
        }

        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => hide_self(),
                Action::PostToWorker(message) => Self::post_worker_message(message),
                Action::SetTimeout { millis } => set_timeout(millis_to_seconds(*millis)),
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn millis_to_seconds(millis: u64) -> f64 {
        millis as f64 / 1000.0
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn seconds_to_millis(seconds: f64) -> u64 {
        (seconds * 1000.0).round().max(0.0) as u64
    }

    /// Zellij-facing wrapper around [`FolioWorker`].
    #[derive(Default, Serialize, Deserialize)]
    pub struct Worker(FolioWorker);

    impl ZellijWorker<'_> for Worker {
        fn on_message(&mut self, message: String, payload: String) {
            folio::observability::init_worker_tracing();

            if let Some(response) = self.0.handle_payload(&payload) {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload: response,
                    worker_name: None,
                });
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(plugin::State);
#[cfg(target_arch = "wasm32")]
register_worker!(plugin::Worker, folio_worker, FOLIO_WORKER);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("folio is a Zellij plugin; build it with --target wasm32-wasip1 and load the .wasm in Zellij.");
}

//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the sheetpane library
//! and the Zellij plugin system. It implements `ZellijPlugin`, translates
//! Zellij events into library events and turns library actions into host
//! calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `Mouse` and `Timer` events
//! 3. **Render**: Report the pane size (mounting the sheet on first call),
//!    then draw
//! 4. **Update**: Handle events, execute actions, request re-render
//!
//! # Event Mapping
//!
//! - `Key(o)` / `Key(Enter)` → `Event::OpenSheet`
//! - `Key(c)` / `Key(Esc)` → `Event::CloseSheet`
//! - `Key(q)` → `Event::CloseFocus`
//! - `Mouse(LeftClick)` → `Event::PointerDown`
//! - `Mouse(Hold)` → `Event::PointerDrag`
//! - `Mouse(Release)` → `Event::PointerUp`
//! - `Timer(elapsed)` → `Event::Frame { elapsed }`
//!
//! The plugin only runs inside Zellij's WASM runtime; native builds get a
//! stub `main` so the library and its tests build on the host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use sheetpane::{handle_event, Action, Config, Event};

    /// Plugin state wrapper.
    pub struct State {
        app: sheetpane::app::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: sheetpane::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            let tracing_error = sheetpane::observability::init_tracing(&config).err();

            let _guard = tracing::debug_span!("plugin_load").entered();
            if let Some(e) = tracing_error {
                eprintln!("sheetpane: tracing disabled: {e}");
            }

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = sheetpane::initialize(&config);

            subscribe(&[EventType::Key, EventType::Mouse, EventType::Timer]);
            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let Some(our_event) = Self::map_event(&event) else {
                return false;
            };
            self.dispatch(&our_event)
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.dispatch(&Event::Viewport { rows, cols });
            sheetpane::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Runs one library event and executes its actions.
        ///
        /// Returns whether the UI should re-render.
        fn dispatch(&mut self, event: &Event) -> bool {
            match handle_event(&mut self.app, event) {
                Ok((should_render, actions)) => {
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, event = ?event, "error handling event");
                    false
                }
            }
        }

        fn map_event(event: &zellij_tile::prelude::Event) -> Option<Event> {
            match event {
                zellij_tile::prelude::Event::Key(key) => Self::map_key_event(key),
                zellij_tile::prelude::Event::Mouse(mouse) => Self::map_mouse_event(mouse),
                zellij_tile::prelude::Event::Timer(elapsed) => Some(Event::Frame { elapsed: *elapsed }),
                _ => None,
            }
        }

        fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");
            if !key.key_modifiers.is_empty() {
                return None;
            }
            match key.bare_key {
                BareKey::Char('o') | BareKey::Enter => Some(Event::OpenSheet),
                BareKey::Char('c') | BareKey::Esc => Some(Event::CloseSheet),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            }
        }

        fn map_mouse_event(mouse: &Mouse) -> Option<Event> {
            match *mouse {
                Mouse::LeftClick(line, col) => Some(Event::PointerDown { line, col }),
                Mouse::Hold(line, col) => Some(Event::PointerDrag { line, col }),
                Mouse::Release(line, col) => Some(Event::PointerUp { line, col }),
                _ => None,
            }
        }

        /// Translates library actions to Zellij API calls.
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
                Action::ScheduleFrame { after_secs } => set_timeout(*after_secs),
            }
        }
    }
}

#[cfg(target_family = "wasm")]
use plugin::State;

#[cfg(target_family = "wasm")]
zellij_tile::register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("sheetpane is a Zellij plugin; build it with --target wasm32-wasip1");
}

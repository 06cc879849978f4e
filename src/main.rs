//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the BookConnect library
//! and the Zellij plugin system. It implements `ZellijPlugin`, maps key presses
//! to library events, and executes the resulting actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState` (startup frame)
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Permissions**: Once host access is granted, reload a configured catalog file
//! 4. **Update**: Map keys by input mode, delegate to `handle_event`
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open details of the selected book
//! - `m`: Show more
//! - `/`: Open the search form
//! - `s`: Open settings
//! - `q`: Close plugin
//!
//! Search form:
//! - Typing edits the title, `Backspace` deletes
//! - `Tab`/`Shift+Tab` (or `Down`/`Up`): Change field
//! - `Left`/`Right`: Cycle author or genre
//! - `Enter`: Search, `Esc`: Cancel
//!
//! Settings:
//! - `Left`/`Right`: Toggle day/night
//! - `Enter`: Apply, `Esc`: Cancel
//!
//! Detail:
//! - `Esc`/`Enter`/`q`: Close

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookconnect::{handle_event, Action, Config, Event, InputMode, SearchField};

register_plugin!(State);

struct State {
    app: bookconnect::AppState,

    config: Config,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: bookconnect::initialize(&config),
            config,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookconnect::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(
            catalog_file = ?config.catalog_file,
            books_per_page = ?config.books_per_page,
            theme = %config.theme,
            "parsed configuration"
        );
        self.app = bookconnect::initialize(&config);
        self.config = config;
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::FullHdAccess,
        ]);

        tracing::debug!("subscribing to events");
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let mut render = should_render;
                for a in actions {
                    render |= self.execute_action(&a);
                }
                render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        bookconnect::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        match self.app.input_mode {
            InputMode::Browse => Self::map_browse_key(key),
            InputMode::Search(field) => Self::map_search_key(key, field),
            InputMode::Settings => Self::map_settings_key(key),
            InputMode::Detail => Self::map_detail_key(key),
        }
    }

    fn map_browse_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Confirm,
            BareKey::Char('m') => Event::ShowMore,
            BareKey::Char('/') => Event::OpenSearch,
            BareKey::Char('s') => Event::OpenSettings,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier, field: SearchField) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
            BareKey::Tab | BareKey::Down => Event::NextField,
            BareKey::Up => Event::PrevField,
            BareKey::Right => Event::NextOption,
            BareKey::Left => Event::PrevOption,
            BareKey::Enter => Event::Confirm,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if field == SearchField::Title => Event::Char(c),
            _ => return None,
        })
    }

    fn map_settings_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Right | BareKey::Char('l') => Event::NextOption,
            BareKey::Left | BareKey::Char('h') => Event::PrevOption,
            BareKey::Enter => Event::Confirm,
            BareKey::Esc | BareKey::Char('q') => Event::Escape,
            _ => return None,
        })
    }

    fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Event::Escape,
            _ => return None,
        })
    }

    /// Reloads a configured catalog file once host access is granted.
    fn handle_permission_result(&mut self, permissions: PermissionStatus) -> Event {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                if self.config.catalog_file.is_some() {
                    tracing::debug!("reloading catalog with host access");
                    self.app = bookconnect::initialize(&self.config);
                }
                Event::PermissionsResult { granted: true }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - using the catalog loaded at startup");
                Event::PermissionsResult { granted: false }
            }
        }
    }

    /// Executes one action; returns whether it changed what is on screen.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
                false
            }
            Action::DeclineDetail => {
                self.app.apply(action);
                false
            }
            _ => {
                self.app.apply(action);
                true
            }
        }
    }
}

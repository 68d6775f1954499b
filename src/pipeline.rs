//! Reference key-event pipeline
//!
//! Owns the per-stream composition state and the action map, and routes
//! key-down events through hotkey dispatch and then dead-key composition.
//! Hosts with their own event plumbing can use [`Composer`] and
//! [`ActionMap`] directly instead.

use crate::binding::ActionMap;
use crate::compose::Composer;
use crate::config::Config;
use crate::keys::Key;
use crate::mods::Mods;

/// Keyboard input handling for one input stream.
///
/// One instance per independent stream (e.g. per focused text field);
/// nothing here is shared or locked.
pub struct InputContext {
    composer: Composer,
    actions: ActionMap,
    compose_enabled: bool,
}

impl InputContext {
    /// Create a context with composition enabled and no actions bound.
    pub fn new() -> Self {
        Self {
            composer: Composer::new(),
            actions: ActionMap::new(),
            compose_enabled: true,
        }
    }

    /// Create a context configured from `config`. Keybinds from the config
    /// are applied after actions are registered, via
    /// [`Config::apply_keybinds`] on [`actions_mut`](Self::actions_mut).
    pub fn from_config(config: &Config) -> Self {
        Self {
            composer: Composer::new(),
            actions: ActionMap::new(),
            compose_enabled: config.compose.enabled,
        }
    }

    /// The action map, for registering actions and bindings.
    pub fn actions_mut(&mut self) -> &mut ActionMap {
        &mut self.actions
    }

    /// The composition state, for inspection.
    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Process one key-down event.
    ///
    /// Returns the character to deliver to the focused input target, or
    /// `None` when the event was consumed (hotkey fired or dead key armed)
    /// or produced no character.
    pub fn handle_key(&mut self, key: Key, ch: char, mods: Mods) -> Option<char> {
        log::debug!("[KEY] key={key} ch={ch:?} mods={mods:?}");

        // Hotkeys take precedence over text input, and an executed action
        // interrupts any composition in progress.
        if self.actions.dispatch(key, mods) {
            self.composer.reset();
            log::debug!("[KEY] consumed by action");
            return None;
        }

        let out = if self.compose_enabled {
            self.composer.process(key, ch, mods)
        } else {
            ch
        };

        if out == '\0' { None } else { Some(out) }
    }
}

impl Default for InputContext {
    fn default() -> Self {
        Self::new()
    }
}

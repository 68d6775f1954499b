//! Hotkey action binding and dispatch
//!
//! Actions expose an id, a title, an optional hotkey, and an enabled check.
//! The `ActionMap` owns registered actions and routes key events to them
//! before the event reaches text composition.

use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};

use crate::keys::Key;
use crate::mods::{self, Mods};

/// A modifier chord plus a key, as bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotKey {
    /// Required modifier state.
    pub mods: Mods,
    /// The key itself.
    pub key: Key,
}

impl HotKey {
    /// Parse a binding spec such as `"cmd+shift+s"`, `"ctrl+return"` or
    /// `"a"`.
    ///
    /// Leading tokens are modifiers (`shift`, `ctrl`/`control`,
    /// `opt`/`option`/`alt`, `cmd`/`command`/`super`); the final token must
    /// be a known key name. Tokens are case-insensitive.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut tokens = spec.split('+').map(str::trim).peekable();
        let mut m = mods::EMPTY;

        while let Some(tok) = tokens.next() {
            if tokens.peek().is_none() {
                // Last token is the key.
                let key = Key::by_name(tok)
                    .ok_or_else(|| anyhow!("unknown key {tok:?} in binding {spec:?}"))?;
                return Ok(Self { mods: m, key });
            }
            let flag = match tok.to_ascii_lowercase().as_str() {
                "shift" => &mut m.shift,
                "ctrl" | "control" => &mut m.ctrl,
                "opt" | "option" | "alt" => &mut m.option,
                "cmd" | "command" | "super" => &mut m.command,
                _ => bail!("unknown modifier {tok:?} in binding {spec:?}"),
            };
            if *flag {
                bail!("duplicate modifier {tok:?} in binding {spec:?}");
            }
            *flag = true;
        }

        bail!("empty binding spec")
    }
}

impl std::fmt::Display for HotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mods.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.mods.option {
            write!(f, "option+")?;
        }
        if self.mods.shift {
            write!(f, "shift+")?;
        }
        if self.mods.command {
            write!(f, "cmd+")?;
        }
        f.write_str(self.key.name)
    }
}

/// Something the user can invoke, by menu or by hotkey.
pub trait Action {
    /// Stable identifier, used for binding (e.g. `"app.quit"`).
    fn id(&self) -> &str;
    /// Human-readable title.
    fn title(&self) -> &str;
    /// Default hotkey, installed on registration.
    fn hot_key(&self) -> Option<HotKey> {
        None
    }
    /// Whether the action may currently run. Disabled actions never
    /// consume key events.
    fn enabled(&self) -> bool {
        true
    }
    /// Run the action.
    fn execute(&mut self);
}

/// Registry of actions and their hotkey bindings.
#[derive(Default)]
pub struct ActionMap {
    actions: Vec<Box<dyn Action>>,
    bindings: HashMap<HotKey, usize>,
}

impl ActionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action, installing its default hotkey if it has one.
    /// A later registration or an explicit [`bind`](Self::bind) may take
    /// over the same hotkey.
    pub fn register(&mut self, action: Box<dyn Action>) {
        let idx = self.actions.len();
        if let Some(hk) = action.hot_key() {
            self.bindings.insert(hk, idx);
        }
        self.actions.push(action);
    }

    /// Bind a hotkey to a registered action by id, replacing any previous
    /// binding for that hotkey.
    pub fn bind(&mut self, hot_key: HotKey, id: &str) -> Result<()> {
        let idx = self
            .actions
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| anyhow!("unknown action id {id:?}"))?;
        self.bindings.insert(hot_key, idx);
        Ok(())
    }

    /// Bind a parsed spec string (see [`HotKey::parse`]) to an action id.
    pub fn bind_spec(&mut self, spec: &str, id: &str) -> Result<()> {
        self.bind(HotKey::parse(spec)?, id)
    }

    /// Look up the action id bound to a hotkey, if any.
    pub fn bound_id(&self, hot_key: HotKey) -> Option<&str> {
        self.bindings.get(&hot_key).map(|&i| self.actions[i].id())
    }

    /// Route a key event. Returns `true` if an enabled action consumed it.
    pub fn dispatch(&mut self, key: Key, mods: Mods) -> bool {
        let Some(&idx) = self.bindings.get(&HotKey { mods, key }) else {
            return false;
        };
        let action = &mut self.actions[idx];
        if !action.enabled() {
            log::debug!("[ACTION] {} bound but disabled", action.id());
            return false;
        }
        log::debug!("[ACTION] executing {}", action.id());
        action.execute();
        true
    }
}

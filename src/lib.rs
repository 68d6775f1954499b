//! Dead-key diacritic composition and hotkey action dispatch.
//!
//! The core is [`compose::Composer`], a small state machine that turns
//! macOS-style Option dead-key sequences (Option+E then `a` → `á`) into
//! precomposed accented characters. Around it sit a key/modifier model
//! ([`keys`], [`mods`]), hotkey-to-action routing ([`binding`]), a shared
//! lazy cache ([`cache`]), TOML configuration ([`config`]), and a reference
//! per-stream pipeline ([`pipeline::InputContext`]) that wires it all to a
//! host's key-down events.
//!
//! ```
//! use deadkeys::{keys, mods, Composer};
//!
//! let mut composer = Composer::new();
//! assert_eq!(composer.process(keys::E, '\0', mods::OPTION), '\0');
//! assert_eq!(composer.process(keys::A, 'a', mods::EMPTY), 'á');
//! ```

pub mod binding;
pub mod cache;
pub mod compose;
pub mod config;
pub mod keys;
pub mod mods;
pub mod pipeline;

pub use binding::{Action, ActionMap, HotKey};
pub use cache::LazyCache;
pub use compose::{Accent, Composer};
pub use config::Config;
pub use keys::Key;
pub use mods::Mods;
pub use pipeline::InputContext;

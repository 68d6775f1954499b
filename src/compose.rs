//! Dead-key diacritic composition
//!
//! Option+E/I/Backquote/N/U arms a pending accent without producing output;
//! the next plain letter is replaced by its precomposed accented form when
//! one exists. Pure state-transition logic — no I/O and no platform calls.

use crate::keys::{self, Key};
use crate::mods::Mods;

/// An accent armed by a dead-key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    /// Option+E: acute (´).
    Acute,
    /// Option+I: circumflex (ˆ).
    Circumflex,
    /// Option+Backquote: grave (`).
    Grave,
    /// Option+N: tilde (˜).
    Tilde,
    /// Option+U: umlaut (¨).
    Umlaut,
}

impl Accent {
    /// Map an accent-trigger key code to its accent, if it is one.
    pub fn from_trigger(code: u32) -> Option<Self> {
        match code {
            c if c == keys::E.code => Some(Self::Acute),
            c if c == keys::I.code => Some(Self::Circumflex),
            c if c == keys::BACKQUOTE.code => Some(Self::Grave),
            c if c == keys::N.code => Some(Self::Tilde),
            c if c == keys::U.code => Some(Self::Umlaut),
            _ => None,
        }
    }
}

/// Precomposed form of `base` under `accent`, if one exists.
///
/// The gaps (no tilde for e/i/u, no rows beyond a/e/i/o/u) are deliberate
/// and mirror actual accent availability for these layouts; do not fill
/// them in.
fn accented(base: char, accent: Accent) -> Option<char> {
    use Accent::*;

    Some(match (base, accent) {
        ('a', Acute) => 'á',
        ('a', Circumflex) => 'â',
        ('a', Grave) => 'à',
        ('a', Tilde) => 'ã',
        ('a', Umlaut) => 'ä',
        ('A', Acute) => 'Á',
        ('A', Circumflex) => 'Â',
        ('A', Grave) => 'À',
        ('A', Tilde) => 'Ã',
        ('A', Umlaut) => 'Ä',
        ('e', Acute) => 'é',
        ('e', Circumflex) => 'ê',
        ('e', Grave) => 'è',
        ('e', Umlaut) => 'ë',
        ('E', Acute) => 'É',
        ('E', Circumflex) => 'Ê',
        ('E', Grave) => 'È',
        ('E', Umlaut) => 'Ë',
        ('i', Acute) => 'í',
        ('i', Circumflex) => 'î',
        ('i', Grave) => 'ì',
        ('i', Umlaut) => 'ï',
        ('I', Acute) => 'Í',
        ('I', Circumflex) => 'Î',
        ('I', Grave) => 'Ì',
        ('I', Umlaut) => 'Ï',
        ('o', Acute) => 'ó',
        ('o', Circumflex) => 'ô',
        ('o', Grave) => 'ò',
        ('o', Tilde) => 'õ',
        ('o', Umlaut) => 'ö',
        ('O', Acute) => 'Ó',
        ('O', Circumflex) => 'Ô',
        ('O', Grave) => 'Ò',
        ('O', Tilde) => 'Õ',
        ('O', Umlaut) => 'Ö',
        ('u', Acute) => 'ú',
        ('u', Circumflex) => 'û',
        ('u', Grave) => 'ù',
        ('u', Umlaut) => 'ü',
        ('U', Acute) => 'Ú',
        ('U', Circumflex) => 'Û',
        ('U', Grave) => 'Ù',
        ('U', Umlaut) => 'Ü',
        _ => return None,
    })
}

/// Dead-key composition state for one input stream.
///
/// Mutated only by [`Composer::process`]; one instance per independent
/// input context (e.g. per focused text field).
#[derive(Debug, Default)]
pub struct Composer {
    pending: Option<Accent>,
}

impl Composer {
    /// Create a composer in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently armed accent, if any.
    pub fn pending(&self) -> Option<Accent> {
        self.pending
    }

    /// Drop any armed accent and return to idle.
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Process one key-down event and return the character to deliver.
    ///
    /// `ch` is the character the platform layout produces for the key
    /// (`'\0'` if none). The return value is `'\0'` when the keystroke
    /// armed a dead key and must not produce visible output; otherwise it
    /// is `ch`, possibly replaced by its accented form.
    ///
    /// A pending accent is consumed only when no modifier other than shift
    /// is held; it is cleared by every call that does not arm a new one.
    pub fn process(&mut self, key: Key, ch: char, mods: Mods) -> char {
        let mut out = ch;

        if let Some(accent) = self.pending
            && !mods.without_shift().any()
            && let Some(composed) = accented(ch, accent)
        {
            out = composed;
        }

        if mods.option_only()
            && let Some(next) = Accent::from_trigger(key.code)
        {
            // Dead-key press: arm (or re-arm) and suppress output.
            self.pending = Some(next);
            out = '\0';
        } else {
            self.pending = None;
        }

        out
    }
}

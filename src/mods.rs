//! Modifier set model
//!
//! Tracks which modifier keys are held during a key event. Option is Alt on
//! non-Apple keyboards; command is Super/Win.

use std::ops::Add;

/// Modifier key state for a single key event.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mods {
    /// Shift is held.
    pub shift: bool,
    /// Control is held.
    pub ctrl: bool,
    /// Option/Alt is held.
    pub option: bool,
    /// Command/Super is held.
    pub command: bool,
}

/// No modifiers held.
pub const EMPTY: Mods = Mods {
    shift: false,
    ctrl: false,
    option: false,
    command: false,
};

/// Shift only.
pub const SHIFT: Mods = Mods {
    shift: true,
    ctrl: false,
    option: false,
    command: false,
};

/// Control only.
pub const CTRL: Mods = Mods {
    shift: false,
    ctrl: true,
    option: false,
    command: false,
};

/// Option/Alt only.
pub const OPTION: Mods = Mods {
    shift: false,
    ctrl: false,
    option: true,
    command: false,
};

/// Command/Super only.
pub const COMMAND: Mods = Mods {
    shift: false,
    ctrl: false,
    option: false,
    command: true,
};

impl Mods {
    /// Returns the same set with shift cleared.
    pub fn without_shift(self) -> Self {
        Self {
            shift: false,
            ..self
        }
    }

    /// Returns `true` if any modifier is held.
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.option || self.command
    }

    /// Dead-key arming condition: option held with neither ctrl nor command.
    /// Shift is ignored.
    pub fn option_only(self) -> bool {
        self.option && !self.ctrl && !self.command
    }
}

impl Add for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            option: self.option || other.option,
            command: self.command || other.command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_via_add() {
        let m = OPTION + SHIFT;
        assert!(m.option);
        assert!(m.shift);
        assert!(!m.ctrl);
        assert_eq!(SHIFT + SHIFT, SHIFT);
    }

    #[test]
    fn without_shift_clears_only_shift() {
        assert_eq!((OPTION + SHIFT).without_shift(), OPTION);
        assert_eq!(SHIFT.without_shift(), EMPTY);
        assert_eq!((CTRL + COMMAND).without_shift(), CTRL + COMMAND);
    }

    #[test]
    fn any_detects_each_flag() {
        assert!(!EMPTY.any());
        assert!(SHIFT.any());
        assert!(CTRL.any());
        assert!(OPTION.any());
        assert!(COMMAND.any());
    }

    #[test]
    fn option_only_ignores_shift() {
        assert!(OPTION.option_only());
        assert!((OPTION + SHIFT).option_only());
    }

    #[test]
    fn option_only_rejects_other_modifiers() {
        assert!(!EMPTY.option_only());
        assert!(!SHIFT.option_only());
        assert!(!(OPTION + CTRL).option_only());
        assert!(!(OPTION + COMMAND).option_only());
        assert!(!COMMAND.option_only());
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Mods::default(), EMPTY);
    }
}

//! Key identifier model
//!
//! A key is an opaque numeric code paired with a display name. The codes are
//! internal to this crate; hosts translate their platform scancodes/keysyms
//! into these before calling in.

/// A physical key: an opaque code plus a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    /// Opaque key code. Only compared for equality, never interpreted.
    pub code: u32,
    /// Display name, as used in binding specs (e.g. `"A"`, `"Backquote"`).
    pub name: &'static str,
}

macro_rules! keys {
    ($($konst:ident = ($code:literal, $name:literal);)+) => {
        $(
            #[doc = concat!("The ", $name, " key.")]
            pub const $konst: Key = Key { code: $code, name: $name };
        )+

        /// All keys known to this crate, in code order.
        pub const ALL: &[Key] = &[$($konst),+];
    };
}

keys! {
    BACKSPACE = (8, "Backspace");
    TAB = (9, "Tab");
    RETURN = (13, "Return");
    ESCAPE = (27, "Escape");
    SPACE = (32, "Space");
    DIGIT_0 = (48, "0");
    DIGIT_1 = (49, "1");
    DIGIT_2 = (50, "2");
    DIGIT_3 = (51, "3");
    DIGIT_4 = (52, "4");
    DIGIT_5 = (53, "5");
    DIGIT_6 = (54, "6");
    DIGIT_7 = (55, "7");
    DIGIT_8 = (56, "8");
    DIGIT_9 = (57, "9");
    A = (65, "A");
    B = (66, "B");
    C = (67, "C");
    D = (68, "D");
    E = (69, "E");
    F = (70, "F");
    G = (71, "G");
    H = (72, "H");
    I = (73, "I");
    J = (74, "J");
    K = (75, "K");
    L = (76, "L");
    M = (77, "M");
    N = (78, "N");
    O = (79, "O");
    P = (80, "P");
    Q = (81, "Q");
    R = (82, "R");
    S = (83, "S");
    T = (84, "T");
    U = (85, "U");
    V = (86, "V");
    W = (87, "W");
    X = (88, "X");
    Y = (89, "Y");
    Z = (90, "Z");
    BACKQUOTE = (96, "Backquote");
}

impl Key {
    /// Look up a known key by its code.
    pub fn by_code(code: u32) -> Option<Self> {
        ALL.iter().find(|k| k.code == code).copied()
    }

    /// Look up a known key by display name, case-insensitively.
    pub fn by_name(name: &str) -> Option<Self> {
        ALL.iter().find(|k| k.name.eq_ignore_ascii_case(name)).copied()
    }

    /// The character this key produces on an unmodified US layout, if any.
    ///
    /// Letters yield lowercase; `shift` selects uppercase. Keys with no
    /// printable character (Escape, Backspace, ...) yield `None`.
    pub fn base_char(&self, shift: bool) -> Option<char> {
        match self.code {
            32 => Some(' '),
            48..=57 => Some((self.code as u8) as char),
            65..=90 => {
                let c = (self.code as u8) as char;
                Some(if shift { c } else { c.to_ascii_lowercase() })
            }
            96 => Some('`'),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_code_known_keys() {
        assert_eq!(Key::by_code(65), Some(A));
        assert_eq!(Key::by_code(96), Some(BACKQUOTE));
        assert_eq!(Key::by_code(13), Some(RETURN));
    }

    #[test]
    fn by_code_unknown_returns_none() {
        assert_eq!(Key::by_code(0), None);
        assert_eq!(Key::by_code(9999), None);
    }

    #[test]
    fn by_name_case_insensitive() {
        assert_eq!(Key::by_name("a"), Some(A));
        assert_eq!(Key::by_name("A"), Some(A));
        assert_eq!(Key::by_name("backquote"), Some(BACKQUOTE));
        assert_eq!(Key::by_name("RETURN"), Some(RETURN));
    }

    #[test]
    fn by_name_unknown_returns_none() {
        assert_eq!(Key::by_name(""), None);
        assert_eq!(Key::by_name("hyper"), None);
    }

    #[test]
    fn base_char_letters_honor_shift() {
        assert_eq!(A.base_char(false), Some('a'));
        assert_eq!(A.base_char(true), Some('A'));
        assert_eq!(Z.base_char(false), Some('z'));
    }

    #[test]
    fn base_char_non_letters() {
        assert_eq!(DIGIT_7.base_char(false), Some('7'));
        assert_eq!(SPACE.base_char(true), Some(' '));
        assert_eq!(BACKQUOTE.base_char(false), Some('`'));
        assert_eq!(ESCAPE.base_char(false), None);
        assert_eq!(BACKSPACE.base_char(false), None);
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.code, b.code, "{} and {} share a code", a, b);
            }
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(BACKQUOTE.to_string(), "Backquote");
        assert_eq!(E.to_string(), "E");
    }
}

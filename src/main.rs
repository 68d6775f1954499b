//! Interactive composition demo.
//!
//! Reads one chord per line from stdin (binding-spec syntax, e.g. `alt+e`,
//! `shift+a`, `a`), feeds it through an [`InputContext`] and echoes the
//! accumulated text. `ctrl+u` clears the line, `cmd+q` (or EOF) exits.

use std::cell::Cell;
use std::io::BufRead;
use std::rc::Rc;

use deadkeys::binding::{Action, HotKey};
use deadkeys::config::Config;
use deadkeys::keys::Key;
use deadkeys::mods::{self, Mods};
use deadkeys::pipeline::InputContext;

/// Translate a chord spec into the (key, char, mods) triple a platform
/// layout would deliver for it.
fn chord_to_event(spec: &str) -> anyhow::Result<(Key, char, Mods)> {
    let hk = HotKey::parse(spec)?;
    let ch = hk.key.base_char(hk.mods.shift).unwrap_or('\0');
    Ok((hk.key, ch, hk.mods))
}

struct FlagAction {
    id: &'static str,
    title: &'static str,
    hot_key: HotKey,
    flag: Rc<Cell<bool>>,
}

impl Action for FlagAction {
    fn id(&self) -> &str {
        self.id
    }
    fn title(&self) -> &str {
        self.title
    }
    fn hot_key(&self) -> Option<HotKey> {
        Some(self.hot_key)
    }
    fn execute(&mut self) {
        self.flag.set(true);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load();
    let mut ctx = InputContext::from_config(&config);

    let quit = Rc::new(Cell::new(false));
    let clear = Rc::new(Cell::new(false));
    ctx.actions_mut().register(Box::new(FlagAction {
        id: "demo.quit",
        title: "Quit",
        hot_key: HotKey::parse("cmd+q")?,
        flag: quit.clone(),
    }));
    ctx.actions_mut().register(Box::new(FlagAction {
        id: "demo.clear",
        title: "Clear Line",
        hot_key: HotKey::parse("ctrl+u")?,
        flag: clear.clone(),
    }));
    config.apply_keybinds(ctx.actions_mut());

    eprintln!("Enter chords (e.g. 'alt+e' then 'a' for á). cmd+q or EOF quits.");

    let mut line = String::new();
    for input in std::io::stdin().lock().lines() {
        let input = input?;
        let spec = input.trim();
        if spec.is_empty() {
            continue;
        }

        let (key, ch, m) = match chord_to_event(spec) {
            Ok(ev) => ev,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match ctx.handle_key(key, ch, m) {
            Some(c) => line.push(c),
            None => {
                if ctx.composer().pending().is_some() {
                    eprintln!("(dead key armed)");
                }
            }
        }

        if quit.get() {
            break;
        }
        if clear.take() {
            line.clear();
        }
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::chord_to_event;
    use deadkeys::keys;
    use deadkeys::mods::{EMPTY, OPTION, SHIFT};

    #[test]
    fn plain_letter() {
        assert_eq!(chord_to_event("a").unwrap(), (keys::A, 'a', EMPTY));
    }

    #[test]
    fn shifted_letter_is_uppercase() {
        assert_eq!(chord_to_event("shift+a").unwrap(), (keys::A, 'A', SHIFT));
    }

    #[test]
    fn dead_key_chord() {
        assert_eq!(chord_to_event("alt+e").unwrap(), (keys::E, 'e', OPTION));
    }

    #[test]
    fn non_printable_key_has_nul_char() {
        assert_eq!(chord_to_event("escape").unwrap().1, '\0');
    }

    #[test]
    fn bad_spec_is_err() {
        assert!(chord_to_event("hyper+x").is_err());
    }
}

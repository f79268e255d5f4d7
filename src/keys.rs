//! Key chords: a key plus modifiers, written as `"ctrl+c"`, `"enter"`, `"f5"`

use crate::error::ConfigError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        KeyChord {
            code,
            modifiers: normalize(code, modifiers),
        }
    }

    pub fn plain(code: KeyCode) -> Self {
        KeyChord::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        KeyChord::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// A character that would be typed into a buffer, if any
    pub fn typed_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c)
                if !self
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }
}

/// Shift is already folded into the character for printable keys
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    let modifiers = modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
    match code {
        KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
        _ => modifiers,
    }
}

impl From<KeyEvent> for KeyChord {
    fn from(event: KeyEvent) -> Self {
        KeyChord::new(event.code, event.modifiers)
    }
}

impl FromStr for KeyChord {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidKey(s.to_string());
        let trimmed = s.trim();
        // "+" and "ctrl++" bind the plus key
        let (mods, key) = match trimmed.strip_suffix("++") {
            Some(prefix) => (prefix, "+"),
            None if trimmed == "+" => ("", "+"),
            None => match trimmed.rsplit_once('+') {
                Some((prefix, key)) => (prefix, key),
                None => ("", trimmed),
            },
        };

        let mut modifiers = KeyModifiers::NONE;
        for m in mods.split('+').filter(|m| !m.is_empty()) {
            modifiers |= match m.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" | "meta" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            };
        }

        let mut code = match key.to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "insert" => KeyCode::Insert,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "null" => KeyCode::Null,
            "capslock" => KeyCode::CapsLock,
            "scrolllock" => KeyCode::ScrollLock,
            "numlock" => KeyCode::NumLock,
            "printscreen" => KeyCode::PrintScreen,
            "pause" => KeyCode::Pause,
            "menu" => KeyCode::Menu,
            "keypadbegin" => KeyCode::KeypadBegin,
            named => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    (Some('f' | 'F'), Some(_)) => {
                        let n: u8 = named[1..].parse().map_err(|_| invalid())?;
                        if !(1..=24).contains(&n) {
                            return Err(invalid());
                        }
                        KeyCode::F(n)
                    }
                    _ => return Err(invalid()),
                }
            }
        };

        // Terminals report shift+a as 'A'; shifted symbols depend on the
        // keyboard layout and cannot be spelled this way.
        if modifiers.contains(KeyModifiers::SHIFT) {
            if let KeyCode::Char(c) = code {
                if !c.is_ascii_alphabetic() {
                    return Err(invalid());
                }
                code = KeyCode::Char(c.to_ascii_uppercase());
            }
        }

        Ok(KeyChord::new(code, modifiers))
    }
}

impl TryFrom<String> for KeyChord {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Only chords with a parseable name are written out
impl Serialize for KeyChord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if key_name(self.code).is_none() {
            return Err(serde::ser::Error::custom(format!(
                "key {:?} has no name",
                self.code
            )));
        }
        serializer.collect_str(self)
    }
}

/// Name accepted by [`KeyChord::from_str`], if the key has one
fn key_name(code: KeyCode) -> Option<Cow<'static, str>> {
    let name = match code {
        KeyCode::Enter => "enter",
        KeyCode::Esc => "esc",
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "backtab",
        KeyCode::Backspace => "backspace",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::Char(' ') => "space",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        KeyCode::Null => "null",
        KeyCode::CapsLock => "capslock",
        KeyCode::ScrollLock => "scrolllock",
        KeyCode::NumLock => "numlock",
        KeyCode::PrintScreen => "printscreen",
        KeyCode::Pause => "pause",
        KeyCode::Menu => "menu",
        KeyCode::KeypadBegin => "keypadbegin",
        KeyCode::F(n) => return Some(Cow::Owned(format!("f{}", n))),
        KeyCode::Char(c) => return Some(Cow::Owned(c.to_string())),
        KeyCode::Media(_) | KeyCode::Modifier(_) => return None,
    };
    Some(Cow::Borrowed(name))
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "shift+")?;
        }
        match key_name(self.code) {
            Some(name) => f.write_str(&name),
            None => write!(f, "{:?}", self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chords() {
        assert_eq!("ctrl+c".parse::<KeyChord>().unwrap(), KeyChord::ctrl('c'));
        assert_eq!(
            "Enter".parse::<KeyChord>().unwrap(),
            KeyChord::plain(KeyCode::Enter)
        );
        assert_eq!(
            "alt+shift+f5".parse::<KeyChord>().unwrap(),
            KeyChord::new(KeyCode::F(5), KeyModifiers::ALT | KeyModifiers::SHIFT)
        );
        assert_eq!(
            "ctrl++".parse::<KeyChord>().unwrap(),
            KeyChord::ctrl('+')
        );
        assert_eq!(
            "space".parse::<KeyChord>().unwrap(),
            KeyChord::plain(KeyCode::Char(' '))
        );
    }

    #[test]
    fn test_reject_bad_chords() {
        for bad in ["", "hyper+x", "f0", "f99", "enterr", "ctrl+", "shift+1", "shift++"] {
            assert!(
                matches!(bad.parse::<KeyChord>(), Err(ConfigError::InvalidKey(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_display_parses_back() {
        for s in [
            "ctrl+c",
            "esc",
            "enter",
            "alt+left",
            "f12",
            "q",
            "space",
            "+",
            "ctrl++",
            "shift+backtab",
            "ctrl+A",
            "capslock",
            "printscreen",
            "keypadbegin",
        ] {
            let chord: KeyChord = s.parse().unwrap();
            assert_eq!(chord.to_string(), s);
        }
    }

    #[test]
    fn test_shift_folded_into_chars() {
        let event = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        let chord = KeyChord::from(event);
        assert_eq!(chord, KeyChord::plain(KeyCode::Char('Q')));
        assert_eq!(chord.typed_char(), Some('Q'));
        assert_eq!(KeyChord::ctrl('c').typed_char(), None);
    }

    #[test]
    fn test_shift_letter_matches_terminal_event() {
        let parsed: KeyChord = "shift+a".parse().unwrap();
        let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);

        assert_eq!(parsed, KeyChord::from(event));
        assert_ne!(parsed, KeyChord::plain(KeyCode::Char('a')));
        assert_eq!(
            "ctrl+shift+x".parse::<KeyChord>().unwrap(),
            KeyChord::ctrl('X')
        );
    }

    #[test]
    fn test_plus_is_a_key() {
        assert_eq!(
            "+".parse::<KeyChord>().unwrap(),
            KeyChord::plain(KeyCode::Char('+'))
        );
    }

    #[test]
    fn test_unnamed_keys_refuse_to_serialize() {
        use crossterm::event::MediaKeyCode;

        #[derive(Serialize)]
        struct Binding {
            key: KeyChord,
        }

        let media = Binding {
            key: KeyChord::plain(KeyCode::Media(MediaKeyCode::Play)),
        };
        assert!(toml::to_string(&media).is_err());

        let plus = Binding {
            key: KeyChord::plain(KeyCode::Char('+')),
        };
        assert_eq!(toml::to_string(&plus).unwrap().trim(), r#"key = "+""#);
    }
}

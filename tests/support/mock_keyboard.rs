use keymap_mini::traits::KeyboardOps;
use keymap_mini::{KeyInput, Modifiers, RawCode, SymbolicKey};

/// A platform key identifier in the style of a Windows virtual-key wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockKey(pub RawCode);

#[derive(Debug, Clone, Copy)]
struct KeyDef {
    raw: RawCode,
    key: SymbolicKey,
    base: Option<char>,
    shifted: Option<char>,
}

/// Default core set: US-QWERTY punctuation reachable only via Shift.
pub const DEFAULT_CORE: [char; 21] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '{', '}', ':', '"', '<', '>', '?',
    '~', '|',
];

/// A US-QWERTY keyboard with VK-style raw codes.
///
/// Letters live at 0x41..=0x5A, digits at 0x30..=0x39, OEM punctuation at
/// the usual VK_OEM_* codes, plus a handful of non-character keys. The
/// shifted column exists only so `char_to_raw_code` can answer reverse
/// queries; `resolve_raw_code` reports the unshifted character, mirroring
/// what real platform APIs expose.
pub struct MockKeyboard {
    defs: Vec<KeyDef>,
    core: Vec<char>,
}

impl MockKeyboard {
    pub fn new() -> Self {
        Self::with_core(DEFAULT_CORE.to_vec())
    }

    pub fn with_core(core: Vec<char>) -> Self {
        let mut defs = Vec::new();

        for (i, ch) in ('a'..='z').enumerate() {
            defs.push(KeyDef {
                raw: 0x41 + i as RawCode,
                key: SymbolicKey::Char(ch),
                base: Some(ch),
                shifted: Some(ch.to_ascii_uppercase()),
            });
        }

        let digit_shifted = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];
        for d in 0..10usize {
            let ch = char::from(b'0' + d as u8);
            defs.push(KeyDef {
                raw: 0x30 + d as RawCode,
                key: SymbolicKey::Char(ch),
                base: Some(ch),
                shifted: Some(digit_shifted[d]),
            });
        }

        let oem = [
            (0xBA, ';', ':'),
            (0xBB, '=', '+'),
            (0xBC, ',', '<'),
            (0xBD, '-', '_'),
            (0xBE, '.', '>'),
            (0xBF, '/', '?'),
            (0xC0, '`', '~'),
            (0xDB, '[', '{'),
            (0xDC, '\\', '|'),
            (0xDD, ']', '}'),
            (0xDE, '\'', '"'),
        ];
        for (raw, base, shifted) in oem {
            defs.push(KeyDef {
                raw,
                key: SymbolicKey::Char(base),
                base: Some(base),
                shifted: Some(shifted),
            });
        }

        defs.push(KeyDef {
            raw: 0x20,
            key: SymbolicKey::Char(' '),
            base: Some(' '),
            shifted: None,
        });

        let special = [
            (0x1B, SymbolicKey::Esc),
            (0x0D, SymbolicKey::Enter),
            (0x08, SymbolicKey::Backspace),
            (0x09, SymbolicKey::Tab),
            (0x70, SymbolicKey::Function(1)),
            (0x71, SymbolicKey::Function(2)),
        ];
        for (raw, key) in special {
            defs.push(KeyDef {
                raw,
                key,
                base: None,
                shifted: None,
            });
        }

        Self { defs, core }
    }

    fn def_for_raw(&self, raw: RawCode) -> Option<&KeyDef> {
        self.defs.iter().find(|d| d.raw == raw)
    }
}

impl Default for MockKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardOps for MockKeyboard {
    type Key = MockKey;

    fn raw_code(&self, key: MockKey) -> RawCode {
        key.0
    }

    fn key_from_raw_code(&self, raw: RawCode) -> Option<MockKey> {
        self.def_for_raw(raw).map(|d| MockKey(d.raw))
    }

    fn resolve_raw_code(&self, raw: RawCode) -> Option<KeyInput> {
        self.def_for_raw(raw)
            .map(|d| KeyInput::new(d.raw, d.key, Modifiers::empty(), d.base))
    }

    fn char_to_raw_code(&self, ch: char) -> Option<(RawCode, Modifiers)> {
        if let Some(d) = self.defs.iter().find(|d| d.base == Some(ch)) {
            return Some((d.raw, Modifiers::empty()));
        }
        self.defs
            .iter()
            .find(|d| d.shifted == Some(ch))
            .map(|d| (d.raw, Modifiers::SHIFT))
    }

    fn core_characters(&self) -> &[char] {
        &self.core
    }
}

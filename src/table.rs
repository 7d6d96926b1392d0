use std::sync::OnceLock;

use crate::key::{Modifiers, RawCode};
use crate::traits::KeyboardOps;

/// One resolved core character: the character plus the raw code and editor
/// modifiers the platform says produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftEntry {
    /// The core character.
    pub ch: char,
    /// The raw key code that produces it.
    pub raw_code: RawCode,
    /// The editor modifiers required alongside that key.
    pub mods: Modifiers,
}

/// The shift correspondence table: a precomputed character <-> (raw code,
/// modifiers) mapping limited to the editor's core character set.
///
/// Built once by probing the host's character lookup for each core
/// character and keeping only successful resolutions; read-only afterward.
/// Core characters the platform cannot resolve are simply absent, which
/// makes forward conversion fall back to the unshifted character for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTable {
    entries: Vec<ShiftEntry>,
}

impl ShiftTable {
    /// Builds the table from the host's core character set. Deterministic:
    /// entries appear in core-set declaration order.
    pub fn build<K: KeyboardOps>(keyboard: &K) -> Self {
        let entries = keyboard
            .core_characters()
            .iter()
            .filter_map(|&ch| {
                keyboard
                    .char_to_raw_code(ch)
                    .map(|(raw_code, mods)| ShiftEntry { ch, raw_code, mods })
            })
            .collect();
        Self { entries }
    }

    /// Looks up the character produced by `raw` held together with Shift and
    /// nothing else. Duplicate raw codes resolve by declaration order.
    pub fn shifted_char(&self, raw: RawCode) -> Option<char> {
        self.entries
            .iter()
            .find(|e| e.raw_code == raw && e.mods == Modifiers::SHIFT)
            .map(|e| e.ch)
    }

    /// The resolved entries, in core-set declaration order.
    pub fn entries(&self) -> &[ShiftEntry] {
        &self.entries
    }

    /// Number of resolved core characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no core character resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute-once holder for a [`ShiftTable`].
///
/// The first caller builds the table; concurrent first callers share one
/// result. After that the table is immutable until [`reset`](Self::reset),
/// which requires exclusive access and exists for test isolation.
#[derive(Debug, Default)]
pub struct ShiftCache {
    table: OnceLock<ShiftTable>,
}

impl ShiftCache {
    /// Creates an empty cache; nothing is built until first access.
    pub const fn new() -> Self {
        Self {
            table: OnceLock::new(),
        }
    }

    /// Returns the cached table, building it on first access.
    pub fn get_or_build<K: KeyboardOps>(&self, keyboard: &K) -> &ShiftTable {
        self.table.get_or_init(|| ShiftTable::build(keyboard))
    }

    /// Discards the cached table so the next access rebuilds it.
    pub fn reset(&mut self) {
        self.table.take();
    }
}

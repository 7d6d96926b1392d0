use crate::key::{
    KeyInput, Modifiers, PlatformModifiers, RawCode, to_editor_modifiers, to_platform_modifiers,
};
use crate::table::{ShiftCache, ShiftTable};
use crate::traits::KeyboardOps;

/// The key translation engine.
///
/// A stateless set of pure conversions between platform key events and
/// canonical [`KeyInput`] values, plus one lazily-built shift correspondence
/// table. The host's keyboard capabilities are injected at construction;
/// all methods are total and never panic.
#[derive(Debug)]
pub struct Engine<K: KeyboardOps> {
    keyboard: K,
    cache: ShiftCache,
}

impl<K: KeyboardOps + Default> Default for Engine<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: KeyboardOps> Engine<K> {
    /// Creates an engine over the given keyboard capabilities. The shift
    /// correspondence table is not built until first needed.
    pub fn new(keyboard: K) -> Self {
        Self {
            keyboard,
            cache: ShiftCache::new(),
        }
    }

    /// The injected keyboard capabilities.
    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    /// The shift correspondence table. The first call builds it from the
    /// host's core character set; later calls reuse the cached result.
    pub fn shift_table(&self) -> &ShiftTable {
        self.cache.get_or_build(&self.keyboard)
    }

    /// Discards the cached shift table so the next access rebuilds it.
    /// Exists for test isolation; production hosts never need it.
    pub fn reset_shift_table(&mut self) {
        self.cache.reset();
    }

    fn try_resolve(&self, key: K::Key) -> Option<(KeyInput, RawCode)> {
        let raw = self.keyboard.raw_code(key);
        self.keyboard.resolve_raw_code(raw).map(|ki| (ki, raw))
    }

    /// Converts a platform key event to a canonical key input.
    ///
    /// Any key identifier is accepted; unresolvable keys yield the
    /// [`KeyInput::not_well_known`] fallback rather than an error. Without
    /// Shift the platform's unshifted resolution passes through with only
    /// the modifier field replaced.
    ///
    /// The Shift flag is the tricky case. No platform API translates a raw
    /// code plus an extra modifier, so the shift correspondence table maps
    /// the editor's core characters to their (raw code, Shift) pairs and is
    /// consulted here to "shift" the resolved character. Keys outside the
    /// core set keep their unshifted character alongside the full modifier
    /// set, a known-imprecise but safe fallback.
    pub fn to_canonical(&self, key: K::Key, mods: PlatformModifiers) -> KeyInput {
        let mods = to_editor_modifiers(mods);
        let Some((base, raw)) = self.try_resolve(key) else {
            return KeyInput::not_well_known(mods);
        };

        if !mods.contains(Modifiers::SHIFT) {
            return KeyInput { mods, ..base };
        }

        match self.shift_table().shifted_char(raw) {
            Some(ch) => KeyInput {
                mods,
                ch: Some(ch),
                ..base
            },
            None => KeyInput { mods, ..base },
        }
    }

    /// Converts a canonical key input back to a platform key identifier and
    /// modifier set, for simulating or redisplaying a keystroke.
    ///
    /// The key identifier is `None` when the input carries no character or
    /// the platform has no reverse mapping for it; the modifier set is
    /// returned either way. This path deliberately does not consult the
    /// shift correspondence table: producing the correct shifted character
    /// was the responsibility of whoever constructed `input`, and the
    /// host's direct character lookup already names a key that plausibly
    /// produces it.
    pub fn to_platform(&self, input: &KeyInput) -> (Option<K::Key>, PlatformModifiers) {
        let mods = to_platform_modifiers(input.mods);
        let key = input
            .ch
            .and_then(|ch| self.keyboard.char_to_raw_code(ch))
            .and_then(|(raw, _)| self.keyboard.key_from_raw_code(raw));
        (key, mods)
    }

    /// Convenience over [`to_platform`](Self::to_platform) that discards the
    /// modifier half.
    pub fn to_platform_key(&self, input: &KeyInput) -> Option<K::Key> {
        self.to_platform(input).0
    }
}

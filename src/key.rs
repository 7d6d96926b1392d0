/// A platform-assigned integer identifying a physical key, independent of
/// modifiers. On Windows hosts this is the virtual-key code; other hosts
/// supply whatever integer their key APIs hand out.
pub type RawCode = u32;

bitflags::bitflags! {
    /// Editor-side keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held
    /// simultaneously. Only these three flags exist on the editor side;
    /// anything else a platform reports is dropped at the conversion
    /// boundary.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
    }
}

bitflags::bitflags! {
    /// Platform-side keyboard modifier flags.
    ///
    /// The bit layout deliberately differs from [`Modifiers`] (it follows the
    /// WPF `ModifierKeys` ordering), so conversion maps each flag
    /// individually rather than masking. `META` has no editor-side
    /// counterpart and never survives a round trip.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PlatformModifiers: u8 {
        const ALT   = 0b0001;
        const CTRL  = 0b0010;
        const SHIFT = 0b0100;
        const META  = 0b1000;
    }
}

/// Converts platform modifier flags to the editor representation.
///
/// Total and order-independent; platform flags with no editor counterpart
/// (e.g. `META`) are dropped.
pub fn to_editor_modifiers(mods: PlatformModifiers) -> Modifiers {
    let mut res = Modifiers::empty();
    if mods.contains(PlatformModifiers::SHIFT) {
        res |= Modifiers::SHIFT;
    }
    if mods.contains(PlatformModifiers::CTRL) {
        res |= Modifiers::CTRL;
    }
    if mods.contains(PlatformModifiers::ALT) {
        res |= Modifiers::ALT;
    }
    res
}

/// Converts editor modifier flags to the platform representation.
///
/// Inverse of [`to_editor_modifiers`] on the three shared flags; never
/// fabricates platform-only flags.
pub fn to_platform_modifiers(mods: Modifiers) -> PlatformModifiers {
    let mut res = PlatformModifiers::empty();
    if mods.contains(Modifiers::SHIFT) {
        res |= PlatformModifiers::SHIFT;
    }
    if mods.contains(Modifiers::CTRL) {
        res |= PlatformModifiers::CTRL;
    }
    if mods.contains(Modifiers::ALT) {
        res |= PlatformModifiers::ALT;
    }
    res
}

/// The editor's named identity for a key.
///
/// This enum provides a platform-agnostic classification of keys. Hosts map
/// their platform-specific key events to these values when resolving a raw
/// code; keys the host cannot classify come back as `NotWellKnown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolicKey {
    /// A character-producing key, identified by its unshifted character.
    Char(char),
    /// The Escape key.
    Esc,
    /// The Enter/Return key.
    Enter,
    /// The Backspace key.
    Backspace,
    /// The Tab key.
    Tab,
    /// A function key (F1 = 1, F2 = 2, ...).
    Function(u8),
    /// A key with no well-known editor identity.
    NotWellKnown,
}

/// A canonical, platform-independent key input value.
///
/// This is what command dispatch consumes: a raw code, a symbolic
/// classification, the editor modifier set, and the character the key
/// produces under that modifier interpretation. `ch` is `None` only for keys
/// with no associated character (function keys, unmapped keys); when `SHIFT`
/// is involved it may differ from the unshifted character the platform
/// reports (see [`Engine::to_canonical`](crate::Engine::to_canonical)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// The platform raw key code, or 0 when the key is not well known.
    pub raw_code: RawCode,
    /// The symbolic classification of the key.
    pub key: SymbolicKey,
    /// Editor modifier flags held during the key press.
    pub mods: Modifiers,
    /// The character this input produces, if any.
    pub ch: Option<char>,
}

impl KeyInput {
    /// Creates a key input value.
    pub fn new(raw_code: RawCode, key: SymbolicKey, mods: Modifiers, ch: Option<char>) -> Self {
        Self {
            raw_code,
            key,
            mods,
            ch,
        }
    }

    /// The defined fallback for keys the platform cannot resolve: raw code 0,
    /// `NotWellKnown`, no character, the given modifiers. Not an error value.
    pub fn not_well_known(mods: Modifiers) -> Self {
        Self {
            raw_code: 0,
            key: SymbolicKey::NotWellKnown,
            mods,
            ch: None,
        }
    }
}

use crate::key::{KeyInput, Modifiers, RawCode};

/// Platform keyboard capabilities the host must supply.
///
/// Keyboard APIs are lossy: platforms reliably map a physical key to the
/// character it produces with no modifiers, but offer no general
/// "key + Shift -> character" query and no reliable "character -> key"
/// inverse. The engine works over this trait and patches the gaps itself;
/// every query here is best-effort and in-memory, so `Option` at a boundary
/// means "the platform has no answer", never an error.
pub trait KeyboardOps {
    /// The host's native key identifier (e.g. a platform key enum).
    type Key: Copy + Eq;

    /// Translates a platform key identifier to its raw key code.
    fn raw_code(&self, key: Self::Key) -> RawCode;

    /// Translates a raw key code back to a platform key identifier, if the
    /// platform knows one.
    fn key_from_raw_code(&self, raw: RawCode) -> Option<Self::Key>;

    /// Resolves a raw key code to a base key input: the symbolic
    /// classification and the character produced with no modifiers held.
    /// The returned value carries an empty modifier set.
    fn resolve_raw_code(&self, raw: RawCode) -> Option<KeyInput>;

    /// Resolves a character to the raw code and editor modifiers that
    /// produce it. Best-effort and possibly incomplete; independent of the
    /// engine's shift correspondence table.
    fn char_to_raw_code(&self, ch: char) -> Option<(RawCode, Modifiers)>;

    /// The editor-declared characters requiring precise Shift handling,
    /// in declaration order. Read-only input to the engine.
    fn core_characters(&self) -> &[char];
}

pub mod engine;
pub mod key;
pub mod table;
pub mod traits;

pub use crate::engine::Engine;
pub use crate::key::{
    KeyInput, Modifiers, PlatformModifiers, RawCode, SymbolicKey, to_editor_modifiers,
    to_platform_modifiers,
};
pub use crate::table::{ShiftCache, ShiftEntry, ShiftTable};
pub use crate::traits::KeyboardOps;

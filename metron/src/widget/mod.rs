//! Widget state.
mod button;
mod mnemonic;

pub use button::{Button, ButtonAction, Checkable};
pub use mnemonic::{mnemonic_from_text, strip_mnemonic_markers};

/// Mouse buttons, as far as widgets care.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// How a widget wants to grow or shrink along one axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SizePolicyKind {
    Fixed,
    Minimum,
    Maximum,
    Preferred,
    Expanding,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SizePolicy {
    pub horizontal: SizePolicyKind,
    pub vertical: SizePolicyKind,
}

impl SizePolicy {
    pub const fn new(horizontal: SizePolicyKind, vertical: SizePolicyKind) -> SizePolicy {
        SizePolicy {
            horizontal,
            vertical,
        }
    }

    pub const fn uniform(kind: SizePolicyKind) -> SizePolicy {
        SizePolicy::new(kind, kind)
    }
}

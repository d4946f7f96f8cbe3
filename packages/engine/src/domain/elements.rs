//! Element definitions - the closed set of per-cell states
//!
//! Codes are stable and exported to the host (see the `el_*` functions in
//! lib.rs), so a JS renderer can read the cell array directly.

/// Per-cell element state.
///
/// `Void` is the out-of-bounds sentinel: lookups outside the grid return it,
/// but it is never stored in a grid cell.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Element {
    Empty = 0,
    Sand = 1,
    Pipe = 2,
    Paint = 3,
    Head = 4,
    Tail = 5,
    Forkbomb = 6,
    Void = 99,
}

impl Element {
    /// Stable numeric code, as seen by the host over the wasm boundary.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a host-supplied element code. Unknown codes are rejected.
    pub fn from_code(code: u8) -> Option<Element> {
        match code {
            0 => Some(Element::Empty),
            1 => Some(Element::Sand),
            2 => Some(Element::Pipe),
            3 => Some(Element::Paint),
            4 => Some(Element::Head),
            5 => Some(Element::Tail),
            6 => Some(Element::Forkbomb),
            99 => Some(Element::Void),
            _ => None,
        }
    }

    /// True for every state a grid cell may legally hold.
    #[inline]
    pub fn is_storable(self) -> bool {
        self != Element::Void
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Element::Empty
    }

    /// Pipe-family states that carry paint saturation.
    #[inline]
    pub fn is_pipework(self) -> bool {
        matches!(
            self,
            Element::Pipe | Element::Paint | Element::Head | Element::Tail
        )
    }
}

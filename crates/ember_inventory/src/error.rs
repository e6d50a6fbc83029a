//! Error types for slot access

use thiserror::Error;

/// Contract violations when addressing a slot directly by index.
///
/// These are programmer errors, distinct from the silent policy outcomes
/// (zero amounts, absent items, full inventory) which are reported through
/// plain return values and never through this type. The two variants are
/// deliberately discriminable so callers can tell "bad index" apart from
/// "no item there".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotAccessError {
    /// The index is outside `[0, capacity)`.
    #[error("slot index {index} out of range (capacity {capacity})")]
    OutOfRange { index: usize, capacity: usize },
    /// The index is valid but the slot holds no item.
    #[error("slot {index} is empty")]
    EmptySlot { index: usize },
}

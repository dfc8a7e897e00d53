//! Error types for buffer configuration and state updates.

/// Failure to append a buffer to a [`crate::BufInfo`]. The buffer set is
/// left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufInfoError {
    /// All attribute buffer slots are in use.
    #[error("attribute buffer set is full ({capacity} buffers)")]
    Full { capacity: usize },

    /// The buffer lies below the base address offsets are relative to.
    #[error("buffer address {addr:#010x} lies below base address {base:#010x}")]
    BelowBase { addr: u32, base: u32 },
}

/// A combiner stage index outside `0..TEXENV_STAGE_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("combiner stage {0} out of range")]
pub struct InvalidStage(pub usize);

/// Error type for state updates, generic over command sink errors.
#[derive(Debug, thiserror::Error)]
pub enum GpuError<E: core::fmt::Debug> {
    /// The command sink rejected a write.
    #[error("command sink error: {0:?}")]
    Sink(E),

    /// A combiner stage index was out of range.
    #[error(transparent)]
    Stage(InvalidStage),
}

impl<E: core::fmt::Debug> From<E> for GpuError<E> {
    fn from(e: E) -> Self {
        GpuError::Sink(e)
    }
}

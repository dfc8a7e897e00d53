//! Field enum encoding helpers

/// A raw bit pattern that does not correspond to any variant of a field enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVariant<T>(T);

impl<T: Copy> UnknownVariant<T> {
    #[must_use]
    pub const fn new(bits: T) -> Self {
        Self(bits)
    }

    /// The offending bit pattern.
    #[must_use]
    pub const fn bits(&self) -> T {
        self.0
    }
}

impl<T: core::fmt::LowerHex> core::fmt::Display for UnknownVariant<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown field encoding {:#x}", self.0)
    }
}

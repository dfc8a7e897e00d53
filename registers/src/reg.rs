//! Register word abstraction

use num_traits::PrimInt;

/// A typed view over a raw register word.
pub trait Register: Copy {
    type Regwidth: PrimInt;

    /// # Safety
    ///
    /// The caller must guarantee that `val` is an encoding the hardware
    /// accepts for this register.
    unsafe fn from_raw(val: Self::Regwidth) -> Self;

    fn to_raw(self) -> Self::Regwidth;
}

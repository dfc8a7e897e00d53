//! Field Enum: TEV_SCALE

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TevScaleE {
    /// 1x
    Scale1 = 0x0,
    /// 2x
    Scale2 = 0x1,
    /// 4x
    Scale4 = 0x2,
}

impl TevScaleE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0x0 => Ok(Self::Scale1),
            0x1 => Ok(Self::Scale2),
            0x2 => Ok(Self::Scale4),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}

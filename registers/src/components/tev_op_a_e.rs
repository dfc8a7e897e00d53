//! Field Enum: TEV_OP_A

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TevOpAE {
    /// Source alpha
    SrcAlpha = 0x0,
    /// One minus source alpha
    OneMinusSrcAlpha = 0x1,
    /// Source red
    SrcR = 0x2,
    /// One minus source red
    OneMinusSrcR = 0x3,
    /// Source green
    SrcG = 0x4,
    /// One minus source green
    OneMinusSrcG = 0x5,
    /// Source blue
    SrcB = 0x6,
    /// One minus source blue
    OneMinusSrcB = 0x7,
}

impl TevOpAE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0x0 => Ok(Self::SrcAlpha),
            0x1 => Ok(Self::OneMinusSrcAlpha),
            0x2 => Ok(Self::SrcR),
            0x3 => Ok(Self::OneMinusSrcR),
            0x4 => Ok(Self::SrcG),
            0x5 => Ok(Self::OneMinusSrcG),
            0x6 => Ok(Self::SrcB),
            0x7 => Ok(Self::OneMinusSrcB),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}

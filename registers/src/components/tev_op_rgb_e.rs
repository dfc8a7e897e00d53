//! Field Enum: TEV_OP_RGB

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TevOpRgbE {
    /// Source color
    SrcColor = 0x0,
    /// One minus source color
    OneMinusSrcColor = 0x1,
    /// Source alpha broadcast
    SrcAlpha = 0x2,
    /// One minus source alpha broadcast
    OneMinusSrcAlpha = 0x3,
    /// Source red broadcast
    SrcR = 0x4,
    /// One minus source red broadcast
    OneMinusSrcR = 0x5,
    /// Reserved
    Rsvd6 = 0x6,
    /// Reserved
    Rsvd7 = 0x7,
    /// Source green broadcast
    SrcG = 0x8,
    /// One minus source green broadcast
    OneMinusSrcG = 0x9,
    /// Reserved
    Rsvd10 = 0xA,
    /// Reserved
    Rsvd11 = 0xB,
    /// Source blue broadcast
    SrcB = 0xC,
    /// One minus source blue broadcast
    OneMinusSrcB = 0xD,
    /// Reserved
    Rsvd14 = 0xE,
    /// Reserved
    Rsvd15 = 0xF,
}

impl TevOpRgbE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0x0 => Ok(Self::SrcColor),
            0x1 => Ok(Self::OneMinusSrcColor),
            0x2 => Ok(Self::SrcAlpha),
            0x3 => Ok(Self::OneMinusSrcAlpha),
            0x4 => Ok(Self::SrcR),
            0x5 => Ok(Self::OneMinusSrcR),
            0x6 => Ok(Self::Rsvd6),
            0x7 => Ok(Self::Rsvd7),
            0x8 => Ok(Self::SrcG),
            0x9 => Ok(Self::OneMinusSrcG),
            0xA => Ok(Self::Rsvd10),
            0xB => Ok(Self::Rsvd11),
            0xC => Ok(Self::SrcB),
            0xD => Ok(Self::OneMinusSrcB),
            0xE => Ok(Self::Rsvd14),
            0xF => Ok(Self::Rsvd15),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}

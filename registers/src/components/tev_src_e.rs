//! Field Enum: TEV_SRC

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TevSrcE {
    /// Interpolated vertex color
    PrimaryColor = 0x0,
    /// Fragment lighting primary color
    FragmentPrimaryColor = 0x1,
    /// Fragment lighting secondary color
    FragmentSecondaryColor = 0x2,
    /// Texture unit 0
    Texture0 = 0x3,
    /// Texture unit 1
    Texture1 = 0x4,
    /// Texture unit 2
    Texture2 = 0x5,
    /// Texture unit 3 (procedural texture)
    Texture3 = 0x6,
    /// Reserved
    Rsvd7 = 0x7,
    /// Reserved
    Rsvd8 = 0x8,
    /// Reserved
    Rsvd9 = 0x9,
    /// Reserved
    Rsvd10 = 0xA,
    /// Reserved
    Rsvd11 = 0xB,
    /// Reserved
    Rsvd12 = 0xC,
    /// Combiner buffer written by earlier stages
    PreviousBuffer = 0xD,
    /// Per-stage constant color
    Constant = 0xE,
    /// Output of the previous stage
    Previous = 0xF,
}

impl TevSrcE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0x0 => Ok(Self::PrimaryColor),
            0x1 => Ok(Self::FragmentPrimaryColor),
            0x2 => Ok(Self::FragmentSecondaryColor),
            0x3 => Ok(Self::Texture0),
            0x4 => Ok(Self::Texture1),
            0x5 => Ok(Self::Texture2),
            0x6 => Ok(Self::Texture3),
            0x7 => Ok(Self::Rsvd7),
            0x8 => Ok(Self::Rsvd8),
            0x9 => Ok(Self::Rsvd9),
            0xA => Ok(Self::Rsvd10),
            0xB => Ok(Self::Rsvd11),
            0xC => Ok(Self::Rsvd12),
            0xD => Ok(Self::PreviousBuffer),
            0xE => Ok(Self::Constant),
            0xF => Ok(Self::Previous),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}

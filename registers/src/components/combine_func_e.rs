//! Field Enum: COMBINE_FUNC

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineFuncE {
    /// A
    Replace = 0x0,
    /// A * B
    Modulate = 0x1,
    /// A + B
    Add = 0x2,
    /// A + B - 0.5
    AddSigned = 0x3,
    /// A * C + B * (1 - C)
    Interpolate = 0x4,
    /// A - B
    Subtract = 0x5,
    /// dot(A, B) to RGB
    Dot3Rgb = 0x6,
    /// dot(A, B) to RGBA
    Dot3Rgba = 0x7,
    /// (A * B) + C
    MultiplyAdd = 0x8,
    /// (A + B) * C
    AddMultiply = 0x9,
}

impl CombineFuncE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0x0 => Ok(Self::Replace),
            0x1 => Ok(Self::Modulate),
            0x2 => Ok(Self::Add),
            0x3 => Ok(Self::AddSigned),
            0x4 => Ok(Self::Interpolate),
            0x5 => Ok(Self::Subtract),
            0x6 => Ok(Self::Dot3Rgb),
            0x7 => Ok(Self::Dot3Rgba),
            0x8 => Ok(Self::MultiplyAdd),
            0x9 => Ok(Self::AddMultiply),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}

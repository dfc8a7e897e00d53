//! Field Enum: COLORBUF

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBufE {
    /// 8-8-8-8, 4 bytes per pixel
    Rgba8 = 0,
    /// 8-8-8, 3 bytes per pixel
    Rgb8 = 1,
    /// 5-5-5-1, 2 bytes per pixel
    Rgba5551 = 2,
    /// 5-6-5, 2 bytes per pixel
    Rgb565 = 3,
    /// 4-4-4-4, 2 bytes per pixel
    Rgba4 = 4,
}

impl ColorBufE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Rgba8),
            1 => Ok(Self::Rgb8),
            2 => Ok(Self::Rgba5551),
            3 => Ok(Self::Rgb565),
            4 => Ok(Self::Rgba4),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Bytes per pixel in memory.
    #[must_use]
    pub const fn bytes_per_pixel(&self) -> u32 {
        match self {
            Self::Rgba8 => 4,
            Self::Rgb8 => 3,
            Self::Rgba5551 | Self::Rgb565 | Self::Rgba4 => 2,
        }
    }

    /// Pixel size code used by the format and memory fill registers
    /// (bytes per pixel minus two).
    #[must_use]
    pub const fn size_code(&self) -> u8 {
        (self.bytes_per_pixel() - 2) as u8
    }
}

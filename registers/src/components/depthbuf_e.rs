//! Field Enum: DEPTHBUF

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBufE {
    /// 16-bit depth
    Depth16 = 0,
    /// 24-bit depth
    Depth24 = 2,
    /// 24-bit depth with 8-bit stencil
    Depth24Stencil8 = 3,
}

impl DepthBufE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::Depth16),
            2 => Ok(Self::Depth24),
            3 => Ok(Self::Depth24Stencil8),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    #[must_use]
    pub const fn bytes_per_pixel(&self) -> u32 {
        match self {
            Self::Depth16 => 2,
            Self::Depth24 => 3,
            Self::Depth24Stencil8 => 4,
        }
    }

    #[must_use]
    pub const fn size_code(&self) -> u8 {
        (self.bytes_per_pixel() - 2) as u8
    }

    #[must_use]
    pub const fn has_stencil(&self) -> bool {
        matches!(self, Self::Depth24Stencil8)
    }
}

//! Register: COLORBUFFER_FORMAT

// Instances of named component types
pub use crate::components::colorbuf_e as format;

/// COLORBUFFER_FORMAT
///
/// Color buffer pixel format [18:16] and pixel size code [1:0]
/// (bytes per pixel minus two).
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorBufferFormatReg(u32);

impl core::default::Default for ColorBufferFormatReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for ColorBufferFormatReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl ColorBufferFormatReg {
    /// Register value for a color buffer in `fmt`.
    #[must_use]
    pub fn for_format(fmt: format::ColorBufE) -> Self {
        let mut reg = Self::default();
        reg.set_pixel_size(fmt.size_code());
        reg.set_format(fmt);
        reg
    }

    pub const PIXEL_SIZE_OFFSET: usize = 0;
    pub const PIXEL_SIZE_WIDTH: usize = 2;
    pub const PIXEL_SIZE_MASK: u32 = 0x3;

    /// PIXEL_SIZE
    #[inline(always)]
    #[must_use]
    pub fn pixel_size(&self) -> u8 {
        let val = (self.0 >> Self::PIXEL_SIZE_OFFSET) & Self::PIXEL_SIZE_MASK;
        val as u8
    }

    /// PIXEL_SIZE
    #[inline(always)]
    pub fn set_pixel_size(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::PIXEL_SIZE_MASK << Self::PIXEL_SIZE_OFFSET))
            | ((val & Self::PIXEL_SIZE_MASK) << Self::PIXEL_SIZE_OFFSET);
    }

    pub const FORMAT_OFFSET: usize = 16;
    pub const FORMAT_WIDTH: usize = 3;
    pub const FORMAT_MASK: u32 = 0x7;

    /// FORMAT
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn format(&self) -> Result<format::ColorBufE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::FORMAT_OFFSET) & Self::FORMAT_MASK;
        format::ColorBufE::from_bits(val as u8)
    }

    /// FORMAT
    #[inline(always)]
    pub fn set_format(&mut self, val: format::ColorBufE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::FORMAT_MASK << Self::FORMAT_OFFSET))
            | ((val & Self::FORMAT_MASK) << Self::FORMAT_OFFSET);
    }
}

impl core::fmt::Debug for ColorBufferFormatReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColorBufferFormatReg")
            .field("pixel_size", &self.pixel_size())
            .field("format", &self.format())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = ColorBufferFormatReg::default();
        assert_eq!(reg.pixel_size(), 0);
        assert_eq!(reg.format(), Ok(format::ColorBufE::Rgba8));
    }

    #[test]
    fn test_for_format() {
        assert_eq!(ColorBufferFormatReg::for_format(format::ColorBufE::Rgba8).to_raw(), 0x0000_0002);
        assert_eq!(ColorBufferFormatReg::for_format(format::ColorBufE::Rgb8).to_raw(), 0x0001_0001);
        assert_eq!(ColorBufferFormatReg::for_format(format::ColorBufE::Rgb565).to_raw(), 0x0003_0000);
        assert_eq!(ColorBufferFormatReg::for_format(format::ColorBufE::Rgba4).to_raw(), 0x0004_0000);
    }
}

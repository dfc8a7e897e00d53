//! Register: FRAMEBUFFER_DIM

/// FRAMEBUFFER_DIM
///
/// Render target dimensions. WIDTH is in pixels, HEIGHT_M1 is the
/// height minus one. Bit 24 must be set; the reset value carries it.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameBufferDimReg(u32);

impl core::default::Default for FrameBufferDimReg {
    fn default() -> Self {
        Self(0x0100_0000)
    }
}

impl crate::reg::Register for FrameBufferDimReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl FrameBufferDimReg {
    /// Register value for a `width` x `height` target. A zero height wraps
    /// to the maximum field value, as the hardware encoding does.
    #[must_use]
    pub fn for_size(width: u16, height: u16) -> Self {
        let mut reg = Self::default();
        reg.set_width(width);
        reg.set_height_m1(height.wrapping_sub(1));
        reg
    }

    pub const WIDTH_OFFSET: usize = 0;
    pub const WIDTH_WIDTH: usize = 12;
    pub const WIDTH_MASK: u32 = 0xFFF;

    /// WIDTH
    #[inline(always)]
    #[must_use]
    pub fn width(&self) -> u16 {
        let val = (self.0 >> Self::WIDTH_OFFSET) & Self::WIDTH_MASK;
        val as u16
    }

    /// WIDTH
    #[inline(always)]
    pub fn set_width(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::WIDTH_MASK << Self::WIDTH_OFFSET))
            | ((val & Self::WIDTH_MASK) << Self::WIDTH_OFFSET);
    }

    pub const HEIGHT_M1_OFFSET: usize = 12;
    pub const HEIGHT_M1_WIDTH: usize = 12;
    pub const HEIGHT_M1_MASK: u32 = 0xFFF;

    /// HEIGHT_M1
    #[inline(always)]
    #[must_use]
    pub fn height_m1(&self) -> u16 {
        let val = (self.0 >> Self::HEIGHT_M1_OFFSET) & Self::HEIGHT_M1_MASK;
        val as u16
    }

    /// HEIGHT_M1
    #[inline(always)]
    pub fn set_height_m1(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::HEIGHT_M1_MASK << Self::HEIGHT_M1_OFFSET))
            | ((val & Self::HEIGHT_M1_MASK) << Self::HEIGHT_M1_OFFSET);
    }
}

impl core::fmt::Debug for FrameBufferDimReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBufferDimReg")
            .field("width", &self.width())
            .field("height_m1", &self.height_m1())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = FrameBufferDimReg::default();
        assert_eq!(reg.width(), 0);
        assert_eq!(reg.height_m1(), 0);
        assert_eq!(reg.to_raw(), 0x0100_0000);
    }

    #[test]
    fn test_top_screen() {
        // Top screen render target is 240x400 (rotated).
        let reg = FrameBufferDimReg::for_size(240, 400);
        assert_eq!(reg.to_raw(), 0x0118_F0F0);
    }
}

//! Register: TEXENV_UPDATE_BUFFER

/// TEXENV_UPDATE_BUFFER
///
/// Selects which combiner stages write their output into the combiner
/// buffer read back through the PreviousBuffer source. Bit n of each
/// 4-bit mask enables the write for stage n + 1. The low byte holds fog
/// configuration owned elsewhere, so this register is written with
/// `BYTE_MASK` only.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexEnvUpdateBufferReg(u32);

impl core::default::Default for TexEnvUpdateBufferReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for TexEnvUpdateBufferReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl TexEnvUpdateBufferReg {
    /// Byte-enable mask covering bits [15:8].
    pub const BYTE_MASK: u8 = 0x2;

    pub const RGB_UPDATE_OFFSET: usize = 8;
    pub const RGB_UPDATE_WIDTH: usize = 4;
    pub const RGB_UPDATE_MASK: u32 = 0xF;

    /// RGB_UPDATE
    #[inline(always)]
    #[must_use]
    pub fn rgb_update(&self) -> u8 {
        let val = (self.0 >> Self::RGB_UPDATE_OFFSET) & Self::RGB_UPDATE_MASK;
        val as u8
    }

    /// RGB_UPDATE
    #[inline(always)]
    pub fn set_rgb_update(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::RGB_UPDATE_MASK << Self::RGB_UPDATE_OFFSET))
            | ((val & Self::RGB_UPDATE_MASK) << Self::RGB_UPDATE_OFFSET);
    }

    pub const ALPHA_UPDATE_OFFSET: usize = 12;
    pub const ALPHA_UPDATE_WIDTH: usize = 4;
    pub const ALPHA_UPDATE_MASK: u32 = 0xF;

    /// ALPHA_UPDATE
    #[inline(always)]
    #[must_use]
    pub fn alpha_update(&self) -> u8 {
        let val = (self.0 >> Self::ALPHA_UPDATE_OFFSET) & Self::ALPHA_UPDATE_MASK;
        val as u8
    }

    /// ALPHA_UPDATE
    #[inline(always)]
    pub fn set_alpha_update(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::ALPHA_UPDATE_MASK << Self::ALPHA_UPDATE_OFFSET))
            | ((val & Self::ALPHA_UPDATE_MASK) << Self::ALPHA_UPDATE_OFFSET);
    }
}

/// Build a stage mask for RGB_UPDATE / ALPHA_UPDATE from per-stage flags
/// for stages 1 through 4.
#[inline(always)]
#[must_use]
pub const fn tev_buffer_write_config(stage1: bool, stage2: bool, stage3: bool, stage4: bool) -> u8 {
    (stage1 as u8) | ((stage2 as u8) << 1) | ((stage3 as u8) << 2) | ((stage4 as u8) << 3)
}

impl core::fmt::Debug for TexEnvUpdateBufferReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TexEnvUpdateBufferReg")
            .field("rgb_update", &self.rgb_update())
            .field("alpha_update", &self.alpha_update())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = TexEnvUpdateBufferReg::default();
        assert_eq!(reg.rgb_update(), 0);
        assert_eq!(reg.alpha_update(), 0);
    }

    #[test]
    fn test_masks_land_in_second_byte() {
        let mut reg = TexEnvUpdateBufferReg::default();
        reg.set_rgb_update(tev_buffer_write_config(true, false, true, false));
        reg.set_alpha_update(0x1F);
        assert_eq!(reg.to_raw(), 0x0000_F500);
    }
}

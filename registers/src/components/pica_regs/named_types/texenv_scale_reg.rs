//! Register: TEXENVi_SCALE

// Instances of named component types
pub use crate::components::tev_scale_e as rgb_scale;
pub use crate::components::tev_scale_e as alpha_scale;

/// TEXENVi_SCALE
///
/// Output scale for the RGB [1:0] and alpha [17:16] channels.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexEnvScaleReg(u32);

impl core::default::Default for TexEnvScaleReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for TexEnvScaleReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl TexEnvScaleReg {
    pub const RGB_SCALE_OFFSET: usize = 0;
    pub const RGB_SCALE_WIDTH: usize = 2;
    pub const RGB_SCALE_MASK: u32 = 0x3;

    /// RGB_SCALE
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn rgb_scale(&self) -> Result<rgb_scale::TevScaleE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::RGB_SCALE_OFFSET) & Self::RGB_SCALE_MASK;
        rgb_scale::TevScaleE::from_bits(val as u8)
    }

    /// RGB_SCALE
    #[inline(always)]
    pub fn set_rgb_scale(&mut self, val: rgb_scale::TevScaleE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::RGB_SCALE_MASK << Self::RGB_SCALE_OFFSET))
            | ((val & Self::RGB_SCALE_MASK) << Self::RGB_SCALE_OFFSET);
    }

    pub const ALPHA_SCALE_OFFSET: usize = 16;
    pub const ALPHA_SCALE_WIDTH: usize = 2;
    pub const ALPHA_SCALE_MASK: u32 = 0x3;

    /// ALPHA_SCALE
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn alpha_scale(
        &self,
    ) -> Result<alpha_scale::TevScaleE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::ALPHA_SCALE_OFFSET) & Self::ALPHA_SCALE_MASK;
        alpha_scale::TevScaleE::from_bits(val as u8)
    }

    /// ALPHA_SCALE
    #[inline(always)]
    pub fn set_alpha_scale(&mut self, val: alpha_scale::TevScaleE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::ALPHA_SCALE_MASK << Self::ALPHA_SCALE_OFFSET))
            | ((val & Self::ALPHA_SCALE_MASK) << Self::ALPHA_SCALE_OFFSET);
    }
}

impl core::fmt::Debug for TexEnvScaleReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TexEnvScaleReg")
            .field("rgb_scale", &self.rgb_scale())
            .field("alpha_scale", &self.alpha_scale())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = TexEnvScaleReg::default();
        assert_eq!(reg.rgb_scale(), Ok(rgb_scale::TevScaleE::Scale1));
        assert_eq!(reg.alpha_scale(), Ok(alpha_scale::TevScaleE::Scale1));
    }

    #[test]
    fn test_set_alpha_scale() {
        let mut reg = TexEnvScaleReg::default();
        reg.set_alpha_scale(alpha_scale::TevScaleE::Scale4);
        assert_eq!(reg.to_raw(), 0x0002_0000);
        assert_eq!(reg.rgb_scale(), Ok(rgb_scale::TevScaleE::Scale1));
    }
}

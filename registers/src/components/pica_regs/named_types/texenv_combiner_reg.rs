//! Register: TEXENVi_COMBINER

// Instances of named component types
pub use crate::components::combine_func_e as rgb_func;
pub use crate::components::combine_func_e as alpha_func;

/// TEXENVi_COMBINER
///
/// Combine function for the RGB [3:0] and alpha [19:16] channels.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexEnvCombinerReg(u32);

impl core::default::Default for TexEnvCombinerReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for TexEnvCombinerReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl TexEnvCombinerReg {
    pub const RGB_FUNC_OFFSET: usize = 0;
    pub const RGB_FUNC_WIDTH: usize = 4;
    pub const RGB_FUNC_MASK: u32 = 0xF;

    /// RGB_FUNC
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn rgb_func(&self) -> Result<rgb_func::CombineFuncE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::RGB_FUNC_OFFSET) & Self::RGB_FUNC_MASK;
        rgb_func::CombineFuncE::from_bits(val as u8)
    }

    /// RGB_FUNC
    #[inline(always)]
    pub fn set_rgb_func(&mut self, val: rgb_func::CombineFuncE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::RGB_FUNC_MASK << Self::RGB_FUNC_OFFSET))
            | ((val & Self::RGB_FUNC_MASK) << Self::RGB_FUNC_OFFSET);
    }

    pub const ALPHA_FUNC_OFFSET: usize = 16;
    pub const ALPHA_FUNC_WIDTH: usize = 4;
    pub const ALPHA_FUNC_MASK: u32 = 0xF;

    /// ALPHA_FUNC
    #[inline(always)]
    #[allow(clippy::missing_errors_doc)]
    pub fn alpha_func(
        &self,
    ) -> Result<alpha_func::CombineFuncE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::ALPHA_FUNC_OFFSET) & Self::ALPHA_FUNC_MASK;
        alpha_func::CombineFuncE::from_bits(val as u8)
    }

    /// ALPHA_FUNC
    #[inline(always)]
    pub fn set_alpha_func(&mut self, val: alpha_func::CombineFuncE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::ALPHA_FUNC_MASK << Self::ALPHA_FUNC_OFFSET))
            | ((val & Self::ALPHA_FUNC_MASK) << Self::ALPHA_FUNC_OFFSET);
    }
}

impl core::fmt::Debug for TexEnvCombinerReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TexEnvCombinerReg")
            .field("rgb_func", &self.rgb_func())
            .field("alpha_func", &self.alpha_func())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = TexEnvCombinerReg::default();
        assert_eq!(reg.rgb_func(), Ok(rgb_func::CombineFuncE::Replace));
        assert_eq!(reg.alpha_func(), Ok(alpha_func::CombineFuncE::Replace));
    }

    #[test]
    fn test_reserved_encoding_reported() {
        let reg = unsafe { TexEnvCombinerReg::from_raw(0x000C_0009) };
        assert_eq!(reg.rgb_func(), Ok(rgb_func::CombineFuncE::AddMultiply));
        assert_eq!(reg.alpha_func().map_err(|e| e.bits()), Err(0xC));
    }
}

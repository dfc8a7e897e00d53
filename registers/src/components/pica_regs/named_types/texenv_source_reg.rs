//! Register: TEXENVi_SOURCE

// Instances of named component types
pub use crate::components::tev_src_e as rgb_src0;
pub use crate::components::tev_src_e as rgb_src1;
pub use crate::components::tev_src_e as rgb_src2;
pub use crate::components::tev_src_e as alpha_src0;
pub use crate::components::tev_src_e as alpha_src1;
pub use crate::components::tev_src_e as alpha_src2;

/// TEXENVi_SOURCE
///
/// Input sources of a combiner stage. RGB sources occupy [11:0] and
/// alpha sources [27:16], one nibble per source. The RGB and ALPHA
/// fields are 12-bit views over the same nibbles.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexEnvSourceReg(u32);

impl core::default::Default for TexEnvSourceReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for TexEnvSourceReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

/// Pack three 4-bit selectors into a 12-bit triple, first selector lowest.
#[inline(always)]
#[must_use]
pub const fn pack_triple(a: u8, b: u8, c: u8) -> u16 {
    (a as u16 & 0xF) | ((b as u16 & 0xF) << 4) | ((c as u16 & 0xF) << 8)
}

impl TexEnvSourceReg {
    pub const RGB_OFFSET: usize = 0;
    pub const RGB_WIDTH: usize = 12;
    pub const RGB_MASK: u32 = 0xFFF;

    /// RGB
    #[inline(always)]
    #[must_use]
    pub fn rgb(&self) -> u16 {
        let val = (self.0 >> Self::RGB_OFFSET) & Self::RGB_MASK;
        val as u16
    }

    /// RGB
    #[inline(always)]
    pub fn set_rgb(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::RGB_MASK << Self::RGB_OFFSET))
            | ((val & Self::RGB_MASK) << Self::RGB_OFFSET);
    }

    pub const ALPHA_OFFSET: usize = 16;
    pub const ALPHA_WIDTH: usize = 12;
    pub const ALPHA_MASK: u32 = 0xFFF;

    /// ALPHA
    #[inline(always)]
    #[must_use]
    pub fn alpha(&self) -> u16 {
        let val = (self.0 >> Self::ALPHA_OFFSET) & Self::ALPHA_MASK;
        val as u16
    }

    /// ALPHA
    #[inline(always)]
    pub fn set_alpha(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::ALPHA_MASK << Self::ALPHA_OFFSET))
            | ((val & Self::ALPHA_MASK) << Self::ALPHA_OFFSET);
    }

    pub const RGB_SRC0_OFFSET: usize = 0;
    pub const RGB_SRC0_WIDTH: usize = 4;
    pub const RGB_SRC0_MASK: u32 = 0xF;

    /// RGB_SRC0
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn rgb_src0(&self) -> rgb_src0::TevSrcE {
        let val = (self.0 >> Self::RGB_SRC0_OFFSET) & Self::RGB_SRC0_MASK;
        rgb_src0::TevSrcE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// RGB_SRC0
    #[inline(always)]
    pub fn set_rgb_src0(&mut self, val: rgb_src0::TevSrcE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::RGB_SRC0_MASK << Self::RGB_SRC0_OFFSET))
            | ((val & Self::RGB_SRC0_MASK) << Self::RGB_SRC0_OFFSET);
    }

    pub const RGB_SRC1_OFFSET: usize = 4;
    pub const RGB_SRC1_WIDTH: usize = 4;
    pub const RGB_SRC1_MASK: u32 = 0xF;

    /// RGB_SRC1
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn rgb_src1(&self) -> rgb_src1::TevSrcE {
        let val = (self.0 >> Self::RGB_SRC1_OFFSET) & Self::RGB_SRC1_MASK;
        rgb_src1::TevSrcE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// RGB_SRC1
    #[inline(always)]
    pub fn set_rgb_src1(&mut self, val: rgb_src1::TevSrcE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::RGB_SRC1_MASK << Self::RGB_SRC1_OFFSET))
            | ((val & Self::RGB_SRC1_MASK) << Self::RGB_SRC1_OFFSET);
    }

    pub const RGB_SRC2_OFFSET: usize = 8;
    pub const RGB_SRC2_WIDTH: usize = 4;
    pub const RGB_SRC2_MASK: u32 = 0xF;

    /// RGB_SRC2
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn rgb_src2(&self) -> rgb_src2::TevSrcE {
        let val = (self.0 >> Self::RGB_SRC2_OFFSET) & Self::RGB_SRC2_MASK;
        rgb_src2::TevSrcE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// RGB_SRC2
    #[inline(always)]
    pub fn set_rgb_src2(&mut self, val: rgb_src2::TevSrcE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::RGB_SRC2_MASK << Self::RGB_SRC2_OFFSET))
            | ((val & Self::RGB_SRC2_MASK) << Self::RGB_SRC2_OFFSET);
    }

    pub const ALPHA_SRC0_OFFSET: usize = 16;
    pub const ALPHA_SRC0_WIDTH: usize = 4;
    pub const ALPHA_SRC0_MASK: u32 = 0xF;

    /// ALPHA_SRC0
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn alpha_src0(&self) -> alpha_src0::TevSrcE {
        let val = (self.0 >> Self::ALPHA_SRC0_OFFSET) & Self::ALPHA_SRC0_MASK;
        alpha_src0::TevSrcE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// ALPHA_SRC0
    #[inline(always)]
    pub fn set_alpha_src0(&mut self, val: alpha_src0::TevSrcE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::ALPHA_SRC0_MASK << Self::ALPHA_SRC0_OFFSET))
            | ((val & Self::ALPHA_SRC0_MASK) << Self::ALPHA_SRC0_OFFSET);
    }

    pub const ALPHA_SRC1_OFFSET: usize = 20;
    pub const ALPHA_SRC1_WIDTH: usize = 4;
    pub const ALPHA_SRC1_MASK: u32 = 0xF;

    /// ALPHA_SRC1
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn alpha_src1(&self) -> alpha_src1::TevSrcE {
        let val = (self.0 >> Self::ALPHA_SRC1_OFFSET) & Self::ALPHA_SRC1_MASK;
        alpha_src1::TevSrcE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// ALPHA_SRC1
    #[inline(always)]
    pub fn set_alpha_src1(&mut self, val: alpha_src1::TevSrcE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::ALPHA_SRC1_MASK << Self::ALPHA_SRC1_OFFSET))
            | ((val & Self::ALPHA_SRC1_MASK) << Self::ALPHA_SRC1_OFFSET);
    }

    pub const ALPHA_SRC2_OFFSET: usize = 24;
    pub const ALPHA_SRC2_WIDTH: usize = 4;
    pub const ALPHA_SRC2_MASK: u32 = 0xF;

    /// ALPHA_SRC2
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn alpha_src2(&self) -> alpha_src2::TevSrcE {
        let val = (self.0 >> Self::ALPHA_SRC2_OFFSET) & Self::ALPHA_SRC2_MASK;
        alpha_src2::TevSrcE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// ALPHA_SRC2
    #[inline(always)]
    pub fn set_alpha_src2(&mut self, val: alpha_src2::TevSrcE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::ALPHA_SRC2_MASK << Self::ALPHA_SRC2_OFFSET))
            | ((val & Self::ALPHA_SRC2_MASK) << Self::ALPHA_SRC2_OFFSET);
    }
}

impl core::fmt::Debug for TexEnvSourceReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TexEnvSourceReg")
            .field("rgb_src0", &self.rgb_src0())
            .field("rgb_src1", &self.rgb_src1())
            .field("rgb_src2", &self.rgb_src2())
            .field("alpha_src0", &self.alpha_src0())
            .field("alpha_src1", &self.alpha_src1())
            .field("alpha_src2", &self.alpha_src2())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = TexEnvSourceReg::default();
        assert_eq!(reg.rgb_src0(), rgb_src0::TevSrcE::PrimaryColor);
        assert_eq!(reg.rgb_src1(), rgb_src1::TevSrcE::PrimaryColor);
        assert_eq!(reg.rgb_src2(), rgb_src2::TevSrcE::PrimaryColor);
        assert_eq!(reg.alpha_src0(), alpha_src0::TevSrcE::PrimaryColor);
        assert_eq!(reg.alpha_src1(), alpha_src1::TevSrcE::PrimaryColor);
        assert_eq!(reg.alpha_src2(), alpha_src2::TevSrcE::PrimaryColor);
    }

    #[test]
    fn test_views_share_bits() {
        let mut reg = TexEnvSourceReg::default();
        reg.set_rgb(pack_triple(0x3, 0xE, 0xF));
        assert_eq!(reg.rgb_src0(), rgb_src0::TevSrcE::Texture0);
        assert_eq!(reg.rgb_src1(), rgb_src1::TevSrcE::Constant);
        assert_eq!(reg.rgb_src2(), rgb_src2::TevSrcE::Previous);
        assert_eq!(reg.alpha(), 0);

        reg.set_alpha_src1(alpha_src1::TevSrcE::Texture1);
        assert_eq!(reg.alpha(), 0x040);
        assert_eq!(reg.to_raw(), 0x0040_0FE3);
    }
}

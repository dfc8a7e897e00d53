//! Register: TEXENVi_OPERAND

// Instances of named component types
pub use crate::components::tev_op_rgb_e as rgb_op0;
pub use crate::components::tev_op_rgb_e as rgb_op1;
pub use crate::components::tev_op_rgb_e as rgb_op2;
pub use crate::components::tev_op_a_e as alpha_op0;
pub use crate::components::tev_op_a_e as alpha_op1;
pub use crate::components::tev_op_a_e as alpha_op2;

/// TEXENVi_OPERAND
///
/// Per-source operand selection. The register is one word with two
/// 12-bit views: RGB operands in [11:0] and alpha operands in [23:12].
/// Alpha operands are 3 bits wide inside 4-bit slots.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexEnvOperandReg(u32);

impl core::default::Default for TexEnvOperandReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for TexEnvOperandReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl TexEnvOperandReg {
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

    pub const ALPHA_OFFSET: usize = 12;
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

    pub const RGB_OP0_OFFSET: usize = 0;
    pub const RGB_OP0_WIDTH: usize = 4;
    pub const RGB_OP0_MASK: u32 = 0xF;

    /// RGB_OP0
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn rgb_op0(&self) -> rgb_op0::TevOpRgbE {
        let val = (self.0 >> Self::RGB_OP0_OFFSET) & Self::RGB_OP0_MASK;
        rgb_op0::TevOpRgbE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// RGB_OP0
    #[inline(always)]
    pub fn set_rgb_op0(&mut self, val: rgb_op0::TevOpRgbE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::RGB_OP0_MASK << Self::RGB_OP0_OFFSET))
            | ((val & Self::RGB_OP0_MASK) << Self::RGB_OP0_OFFSET);
    }

    pub const RGB_OP1_OFFSET: usize = 4;
    pub const RGB_OP1_WIDTH: usize = 4;
    pub const RGB_OP1_MASK: u32 = 0xF;

    /// RGB_OP1
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn rgb_op1(&self) -> rgb_op1::TevOpRgbE {
        let val = (self.0 >> Self::RGB_OP1_OFFSET) & Self::RGB_OP1_MASK;
        rgb_op1::TevOpRgbE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// RGB_OP1
    #[inline(always)]
    pub fn set_rgb_op1(&mut self, val: rgb_op1::TevOpRgbE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::RGB_OP1_MASK << Self::RGB_OP1_OFFSET))
            | ((val & Self::RGB_OP1_MASK) << Self::RGB_OP1_OFFSET);
    }

    pub const RGB_OP2_OFFSET: usize = 8;
    pub const RGB_OP2_WIDTH: usize = 4;
    pub const RGB_OP2_MASK: u32 = 0xF;

    /// RGB_OP2
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn rgb_op2(&self) -> rgb_op2::TevOpRgbE {
        let val = (self.0 >> Self::RGB_OP2_OFFSET) & Self::RGB_OP2_MASK;
        rgb_op2::TevOpRgbE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// RGB_OP2
    #[inline(always)]
    pub fn set_rgb_op2(&mut self, val: rgb_op2::TevOpRgbE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::RGB_OP2_MASK << Self::RGB_OP2_OFFSET))
            | ((val & Self::RGB_OP2_MASK) << Self::RGB_OP2_OFFSET);
    }

    pub const ALPHA_OP0_OFFSET: usize = 12;
    pub const ALPHA_OP0_WIDTH: usize = 3;
    pub const ALPHA_OP0_MASK: u32 = 0x7;

    /// ALPHA_OP0
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn alpha_op0(&self) -> alpha_op0::TevOpAE {
        let val = (self.0 >> Self::ALPHA_OP0_OFFSET) & Self::ALPHA_OP0_MASK;
        alpha_op0::TevOpAE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// ALPHA_OP0
    #[inline(always)]
    pub fn set_alpha_op0(&mut self, val: alpha_op0::TevOpAE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::ALPHA_OP0_MASK << Self::ALPHA_OP0_OFFSET))
            | ((val & Self::ALPHA_OP0_MASK) << Self::ALPHA_OP0_OFFSET);
    }

    pub const ALPHA_OP1_OFFSET: usize = 16;
    pub const ALPHA_OP1_WIDTH: usize = 3;
    pub const ALPHA_OP1_MASK: u32 = 0x7;

    /// ALPHA_OP1
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn alpha_op1(&self) -> alpha_op1::TevOpAE {
        let val = (self.0 >> Self::ALPHA_OP1_OFFSET) & Self::ALPHA_OP1_MASK;
        alpha_op1::TevOpAE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// ALPHA_OP1
    #[inline(always)]
    pub fn set_alpha_op1(&mut self, val: alpha_op1::TevOpAE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::ALPHA_OP1_MASK << Self::ALPHA_OP1_OFFSET))
            | ((val & Self::ALPHA_OP1_MASK) << Self::ALPHA_OP1_OFFSET);
    }

    pub const ALPHA_OP2_OFFSET: usize = 20;
    pub const ALPHA_OP2_WIDTH: usize = 3;
    pub const ALPHA_OP2_MASK: u32 = 0x7;

    /// ALPHA_OP2
    #[inline(always)]
    #[allow(clippy::missing_panics_doc)]
    #[must_use]
    pub fn alpha_op2(&self) -> alpha_op2::TevOpAE {
        let val = (self.0 >> Self::ALPHA_OP2_OFFSET) & Self::ALPHA_OP2_MASK;
        alpha_op2::TevOpAE::from_bits(val as u8)
            .expect("All possible field values represented by enum")
    }

    /// ALPHA_OP2
    #[inline(always)]
    pub fn set_alpha_op2(&mut self, val: alpha_op2::TevOpAE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::ALPHA_OP2_MASK << Self::ALPHA_OP2_OFFSET))
            | ((val & Self::ALPHA_OP2_MASK) << Self::ALPHA_OP2_OFFSET);
    }
}

impl core::fmt::Debug for TexEnvOperandReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TexEnvOperandReg")
            .field("rgb_op0", &self.rgb_op0())
            .field("rgb_op1", &self.rgb_op1())
            .field("rgb_op2", &self.rgb_op2())
            .field("alpha_op0", &self.alpha_op0())
            .field("alpha_op1", &self.alpha_op1())
            .field("alpha_op2", &self.alpha_op2())
            .finish()
    }
}

//! Register: ATTRIBBUFFERi_CONFIG2

/// ATTRIBBUFFERi_CONFIG2
///
/// Upper half of an attribute buffer's layout description. CONFIG1
/// holds permutation nibbles 0..8; this register carries nibbles 8..12,
/// the vertex stride in bytes and the number of attributes read from
/// the buffer.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct AttribBufferConfig2Reg(u32);

impl core::default::Default for AttribBufferConfig2Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for AttribBufferConfig2Reg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl AttribBufferConfig2Reg {
    pub const PERMUTATION_HI_OFFSET: usize = 0;
    pub const PERMUTATION_HI_WIDTH: usize = 16;
    pub const PERMUTATION_HI_MASK: u32 = 0xFFFF;

    /// PERMUTATION_HI
    #[inline(always)]
    #[must_use]
    pub fn permutation_hi(&self) -> u16 {
        let val = (self.0 >> Self::PERMUTATION_HI_OFFSET) & Self::PERMUTATION_HI_MASK;
        val as u16
    }

    /// PERMUTATION_HI
    #[inline(always)]
    pub fn set_permutation_hi(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::PERMUTATION_HI_MASK << Self::PERMUTATION_HI_OFFSET))
            | ((val & Self::PERMUTATION_HI_MASK) << Self::PERMUTATION_HI_OFFSET);
    }

    pub const STRIDE_OFFSET: usize = 16;
    pub const STRIDE_WIDTH: usize = 8;
    pub const STRIDE_MASK: u32 = 0xFF;

    /// STRIDE
    #[inline(always)]
    #[must_use]
    pub fn stride(&self) -> u8 {
        let val = (self.0 >> Self::STRIDE_OFFSET) & Self::STRIDE_MASK;
        val as u8
    }

    /// STRIDE
    #[inline(always)]
    pub fn set_stride(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::STRIDE_MASK << Self::STRIDE_OFFSET))
            | ((val & Self::STRIDE_MASK) << Self::STRIDE_OFFSET);
    }

    pub const ATTRIB_COUNT_OFFSET: usize = 28;
    pub const ATTRIB_COUNT_WIDTH: usize = 4;
    pub const ATTRIB_COUNT_MASK: u32 = 0xF;

    /// ATTRIB_COUNT
    #[inline(always)]
    #[must_use]
    pub fn attrib_count(&self) -> u8 {
        let val = (self.0 >> Self::ATTRIB_COUNT_OFFSET) & Self::ATTRIB_COUNT_MASK;
        val as u8
    }

    /// ATTRIB_COUNT
    #[inline(always)]
    pub fn set_attrib_count(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::ATTRIB_COUNT_MASK << Self::ATTRIB_COUNT_OFFSET))
            | ((val & Self::ATTRIB_COUNT_MASK) << Self::ATTRIB_COUNT_OFFSET);
    }
}

impl core::fmt::Debug for AttribBufferConfig2Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AttribBufferConfig2Reg")
            .field("permutation_hi", &self.permutation_hi())
            .field("stride", &self.stride())
            .field("attrib_count", &self.attrib_count())
            .finish()
    }
}

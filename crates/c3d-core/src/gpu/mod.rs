pub mod buffers;
pub mod context;
pub mod framebuffer;
pub mod registers;
pub mod texenv;

pub use buffers::{BufCfg, BufInfo};
pub use context::{Dirty, GpuContext};
pub use framebuffer::{ClearBits, FrameBuf};
pub use registers::{ColorBuf, CombineFunc, DepthBuf, TevOpA, TevOpRgb, TevScale, TevSrc};
pub use texenv::{TexEnv, TexEnvMode};

/// A physical memory address as seen by the GPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u32);

impl PhysAddr {
    /// Address in the 8-byte units used by the location registers.
    #[must_use]
    pub const fn units_of_8(self) -> u32 {
        self.0 >> 3
    }
}

impl From<u32> for PhysAddr {
    fn from(addr: u32) -> Self {
        PhysAddr(addr)
    }
}

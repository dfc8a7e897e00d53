//! Fixed-function state for the PICA200: attribute buffers, texture
//! combiner stages and framebuffers, packed into register words and
//! emitted through a [`c3d_hal::CommandSink`].
#![no_std]

pub mod error;
pub mod gpu;

pub use error::{BufInfoError, GpuError, InvalidStage};
pub use gpu::{BufInfo, FrameBuf, GpuContext, PhysAddr, TexEnv, TexEnvMode};

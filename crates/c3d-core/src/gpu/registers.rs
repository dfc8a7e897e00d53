//! PICA200 register ids and bit-field types.
//!
//! Re-exported from the `pica-registers` crate (single source of truth).

pub use pica_registers::*;

pub use pica_registers::{
    ColorBufE as ColorBuf, CombineFuncE as CombineFunc, DepthBufE as DepthBuf,
    TevOpAE as TevOpA, TevOpRgbE as TevOpRgb, TevScaleE as TevScale, TevSrcE as TevSrc,
};

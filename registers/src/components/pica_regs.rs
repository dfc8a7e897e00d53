//! Addrmap: PICA200 fixed-function register map
//!
//! Register ids are command-stream indices; each register is one 32-bit word.

/// Named types defined within this component's body
pub mod named_types {
    pub mod attrib_buffer_config2_reg;
    pub mod colorbuffer_format_reg;
    pub mod framebuffer_dim_reg;
    pub mod texenv_combiner_reg;
    pub mod texenv_operand_reg;
    pub mod texenv_scale_reg;
    pub mod texenv_source_reg;
    pub mod texenv_update_buffer_reg;
}

// Instances of named component types
pub use crate::components::pica_regs::named_types::attrib_buffer_config2_reg as attrib_buffer_config2;
pub use crate::components::pica_regs::named_types::colorbuffer_format_reg as colorbuffer_format;
pub use crate::components::pica_regs::named_types::framebuffer_dim_reg as framebuffer_dim;
pub use crate::components::pica_regs::named_types::framebuffer_dim_reg as renderbuf_dim;
pub use crate::components::pica_regs::named_types::texenv_combiner_reg as texenv_combiner;
pub use crate::components::pica_regs::named_types::texenv_operand_reg as texenv_operand;
pub use crate::components::pica_regs::named_types::texenv_scale_reg as texenv_scale;
pub use crate::components::pica_regs::named_types::texenv_source_reg as texenv_source;
pub use crate::components::pica_regs::named_types::texenv_update_buffer_reg as texenv_update_buffer;

pub use crate::components::colorbuf_e::ColorBufE;
pub use crate::components::combine_func_e::CombineFuncE;
pub use crate::components::depthbuf_e::DepthBufE;
pub use crate::components::tev_op_a_e::TevOpAE;
pub use crate::components::tev_op_rgb_e::TevOpRgbE;
pub use crate::components::tev_scale_e::TevScaleE;
pub use crate::components::tev_src_e::TevSrcE;

// --- Rasterizer (0x040-0x07F) ---

/// Render buffer dimensions, mirrors FRAMEBUFFER_DIM.
pub const RENDERBUF_DIM: u16 = 0x06E;

// --- Texture combiners (0x0C0-0x0FF) ---

/// Number of combiner stages.
pub const TEXENV_STAGE_COUNT: usize = 6;

pub const TEXENV0_SOURCE: u16 = 0x0C0;
pub const TEXENV1_SOURCE: u16 = 0x0C8;
pub const TEXENV2_SOURCE: u16 = 0x0D0;
pub const TEXENV3_SOURCE: u16 = 0x0D8;
/// Combiner buffer update config; shares the word with fog mode bits.
pub const TEXENV_UPDATE_BUFFER: u16 = 0x0E0;
pub const TEXENV4_SOURCE: u16 = 0x0F0;
pub const TEXENV5_SOURCE: u16 = 0x0F8;
/// Initial combiner buffer color (RGBA8).
pub const TEXENV_BUFFER_COLOR: u16 = 0x0FD;

/// Offsets of a stage's registers from its SOURCE register.
pub const TEXENV_SOURCE_OFFSET: u16 = 0;
pub const TEXENV_OPERAND_OFFSET: u16 = 1;
pub const TEXENV_COMBINER_OFFSET: u16 = 2;
pub const TEXENV_COLOR_OFFSET: u16 = 3;
pub const TEXENV_SCALE_OFFSET: u16 = 4;
/// Registers per stage.
pub const TEXENV_REG_COUNT: usize = 5;

const TEXENV_BASES: [u16; TEXENV_STAGE_COUNT] = [
    TEXENV0_SOURCE,
    TEXENV1_SOURCE,
    TEXENV2_SOURCE,
    TEXENV3_SOURCE,
    TEXENV4_SOURCE,
    TEXENV5_SOURCE,
];

/// SOURCE register id of combiner stage `stage`. Stages 4 and 5 sit
/// after the update-buffer block.
#[must_use]
pub const fn texenv_base(stage: usize) -> Option<u16> {
    if stage < TEXENV_STAGE_COUNT {
        Some(TEXENV_BASES[stage])
    } else {
        None
    }
}

// --- Framebuffer (0x110-0x11F) ---

pub const FRAMEBUFFER_INVALIDATE: u16 = 0x110;
pub const FRAMEBUFFER_FLUSH: u16 = 0x111;
pub const COLORBUFFER_READ: u16 = 0x112;
pub const COLORBUFFER_WRITE: u16 = 0x113;
pub const DEPTHBUFFER_READ: u16 = 0x114;
pub const DEPTHBUFFER_WRITE: u16 = 0x115;
pub const DEPTHBUFFER_FORMAT: u16 = 0x116;
pub const COLORBUFFER_FORMAT: u16 = 0x117;
pub const FRAMEBUFFER_BLOCK32: u16 = 0x11B;
/// Depth buffer physical address >> 3.
pub const DEPTHBUFFER_LOC: u16 = 0x11C;
/// Color buffer physical address >> 3.
pub const COLORBUFFER_LOC: u16 = 0x11D;
pub const FRAMEBUFFER_DIM: u16 = 0x11E;

// --- Geometry pipeline: attribute buffers (0x200-0x227) ---

/// Attribute buffer base physical address >> 3.
pub const ATTRIBBUFFERS_LOC: u16 = 0x200;
pub const ATTRIBBUFFERS_FORMAT_LOW: u16 = 0x201;
pub const ATTRIBBUFFERS_FORMAT_HIGH: u16 = 0x202;
pub const ATTRIBBUFFER0_OFFSET: u16 = 0x203;
pub const ATTRIBBUFFER0_CONFIG1: u16 = 0x204;
pub const ATTRIBBUFFER0_CONFIG2: u16 = 0x205;
/// Number of attribute buffers.
pub const ATTRIBBUFFER_COUNT: usize = 12;
/// Registers per attribute buffer (OFFSET, CONFIG1, CONFIG2).
pub const ATTRIBBUFFER_REG_COUNT: usize = 3;

//! Bound GPU state.
//!
//! [`GpuContext`] owns the buffer set, combiner stages and framebuffer
//! that draw calls use, and tracks which of them still have to be
//! written to the command stream.

use bitflags::bitflags;
use c3d_hal::CommandSink;

use super::buffers::BufInfo;
use super::framebuffer::FrameBuf;
use super::registers::{
    self, texenv_update_buffer::TexEnvUpdateBufferReg, TEXENV_STAGE_COUNT,
};
use super::texenv::{TexEnv, TexEnvMode};
use crate::error::{GpuError, InvalidStage};

bitflags! {
    /// State that has changed since the last [`GpuContext::update`].
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Dirty: u32 {
        const BUF_INFO = 1 << 0;
        const FRAME_BUF = 1 << 1;
        const TEX_ENV_BUF = 1 << 2;
        const TEX_ENV_0 = 1 << 8;
        const TEX_ENV_1 = 1 << 9;
        const TEX_ENV_2 = 1 << 10;
        const TEX_ENV_3 = 1 << 11;
        const TEX_ENV_4 = 1 << 12;
        const TEX_ENV_5 = 1 << 13;
    }
}

impl Dirty {
    /// Flag for combiner stage `id`, or `None` past the last stage.
    pub const fn tex_env(id: usize) -> Option<Dirty> {
        if id < TEXENV_STAGE_COUNT {
            Some(Dirty::from_bits_retain(Dirty::TEX_ENV_0.bits() << id))
        } else {
            None
        }
    }
}

/// Initial combiner buffer color: opaque white.
pub const DEFAULT_TEX_ENV_BUF_COLOR: u32 = 0xFFFF_FFFF;

/// The state bound for drawing. Everything starts dirty so the first
/// [`GpuContext::update`] programs the whole pipeline.
#[derive(Clone, Debug)]
pub struct GpuContext {
    buf_info: BufInfo,
    tex_env: [TexEnv; TEXENV_STAGE_COUNT],
    tex_env_buf: TexEnvUpdateBufferReg,
    tex_env_buf_color: u32,
    frame_buf: FrameBuf,
    dirty: Dirty,
}

impl Default for GpuContext {
    fn default() -> Self {
        Self::new()
    }
}

fn stage_flag(id: usize) -> Result<Dirty, InvalidStage> {
    Dirty::tex_env(id).ok_or(InvalidStage(id))
}

impl GpuContext {
    pub fn new() -> Self {
        Self {
            buf_info: BufInfo::new(),
            tex_env: [TexEnv::new(); TEXENV_STAGE_COUNT],
            tex_env_buf: TexEnvUpdateBufferReg::default(),
            tex_env_buf_color: DEFAULT_TEX_ENV_BUF_COLOR,
            frame_buf: FrameBuf::new(),
            dirty: Dirty::all(),
        }
    }

    pub fn dirty(&self) -> Dirty {
        self.dirty
    }

    // --- Attribute buffers ---

    pub fn buf_info(&self) -> &BufInfo {
        &self.buf_info
    }

    /// Mutable access to the bound buffer set; marks it for rewrite.
    pub fn buf_info_mut(&mut self) -> &mut BufInfo {
        self.dirty |= Dirty::BUF_INFO;
        &mut self.buf_info
    }

    /// Bind a copy of `info`. The caller keeps its own value.
    pub fn set_buf_info(&mut self, info: &BufInfo) {
        self.buf_info = *info;
        self.dirty |= Dirty::BUF_INFO;
        log::debug!("GpuContext: bound {} attribute buffers", info.len());
    }

    // --- Combiner stages ---

    pub fn tex_env(&self, id: usize) -> Result<&TexEnv, InvalidStage> {
        self.tex_env.get(id).ok_or(InvalidStage(id))
    }

    /// Mutable access to stage `id`; marks it for rewrite.
    pub fn tex_env_mut(&mut self, id: usize) -> Result<&mut TexEnv, InvalidStage> {
        self.dirty |= stage_flag(id)?;
        Ok(&mut self.tex_env[id])
    }

    /// Bind a copy of `env` to stage `id`.
    pub fn set_tex_env(&mut self, id: usize, env: &TexEnv) -> Result<(), InvalidStage> {
        self.dirty |= stage_flag(id)?;
        self.tex_env[id] = *env;
        Ok(())
    }

    /// Request that stage `id` is rewritten on the next update, e.g. after
    /// the command stream was reset underneath it.
    pub fn dirty_tex_env(&mut self, id: usize) -> Result<(), InvalidStage> {
        self.dirty |= stage_flag(id)?;
        Ok(())
    }

    /// Select which stages write their output to the combiner buffer, for
    /// the channels in `mode`. Bit n of `mask` stands for stage n + 1; only
    /// the low four bits are used.
    pub fn tex_env_buf_update(&mut self, mode: TexEnvMode, mask: u8) {
        let mask = mask & 0xF;
        if mode.rgb() {
            self.tex_env_buf.set_rgb_update(mask);
        }
        if mode.alpha() {
            self.tex_env_buf.set_alpha_update(mask);
        }
        self.dirty |= Dirty::TEX_ENV_BUF;
    }

    /// Initial value of the combiner buffer.
    pub fn tex_env_buf_color(&mut self, color: u32) {
        self.tex_env_buf_color = color;
        self.dirty |= Dirty::TEX_ENV_BUF;
    }

    pub fn tex_env_update_buffer(&self) -> TexEnvUpdateBufferReg {
        self.tex_env_buf
    }

    pub fn tex_env_buffer_color(&self) -> u32 {
        self.tex_env_buf_color
    }

    // --- Framebuffer ---

    pub fn frame_buf(&self) -> &FrameBuf {
        &self.frame_buf
    }

    /// Mutable access to the bound framebuffer; marks it for rewrite.
    pub fn frame_buf_mut(&mut self) -> &mut FrameBuf {
        self.dirty |= Dirty::FRAME_BUF;
        &mut self.frame_buf
    }

    /// Bind a copy of `fb` as the render target.
    pub fn set_frame_buf(&mut self, fb: &FrameBuf) {
        self.frame_buf = *fb;
        self.dirty |= Dirty::FRAME_BUF;
        log::debug!(
            "GpuContext: bound {}x{} framebuffer",
            fb.width(),
            fb.height()
        );
    }

    /// Write all dirty state to `sink`. Each piece is marked clean once
    /// its registers were accepted, so a failed update can be retried.
    pub fn update<S: CommandSink>(&mut self, sink: &mut S) -> Result<(), GpuError<S::Error>> {
        if self.dirty.is_empty() {
            return Ok(());
        }
        log::debug!("GpuContext::update: {:?}", self.dirty);

        if self.dirty.contains(Dirty::FRAME_BUF) {
            self.frame_buf.write_to(sink)?;
            self.dirty.remove(Dirty::FRAME_BUF);
        }

        if self.dirty.contains(Dirty::BUF_INFO) {
            self.buf_info.write_to(sink)?;
            self.dirty.remove(Dirty::BUF_INFO);
        }

        for (id, env) in self.tex_env.iter().enumerate() {
            match Dirty::tex_env(id) {
                Some(flag) if self.dirty.contains(flag) => {
                    env.write_to(id, sink)?;
                    self.dirty.remove(flag);
                }
                _ => {}
            }
        }

        if self.dirty.contains(Dirty::TEX_ENV_BUF) {
            sink.write_masked(
                registers::TEXENV_UPDATE_BUFFER,
                TexEnvUpdateBufferReg::BYTE_MASK,
                bytemuck::cast(self.tex_env_buf),
            )?;
            sink.write_register(registers::TEXENV_BUFFER_COLOR, self.tex_env_buf_color)?;
            self.dirty.remove(Dirty::TEX_ENV_BUF);
        }

        Ok(())
    }
}

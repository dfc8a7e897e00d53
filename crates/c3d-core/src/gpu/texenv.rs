//! Texture combiner ("TexEnv") stage configuration.
//!
//! A [`TexEnv`] is laid out as the five consecutive registers of one
//! combiner stage: SOURCE, OPERAND, COMBINER, COLOR and SCALE.

use bytemuck::{Pod, Zeroable};
use c3d_hal::CommandSink;

use super::registers::{
    self, texenv_combiner::TexEnvCombinerReg, texenv_operand::TexEnvOperandReg,
    texenv_scale::TexEnvScaleReg, texenv_source::pack_triple, texenv_source::TexEnvSourceReg,
    CombineFunc, TevOpA, TevOpRgb, TevScale, TevSrc,
};
use crate::error::{GpuError, InvalidStage};

/// Channel selector for combiner setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TexEnvMode {
    Rgb,
    Alpha,
    Both,
}

impl TexEnvMode {
    pub const fn rgb(self) -> bool {
        matches!(self, TexEnvMode::Rgb | TexEnvMode::Both)
    }

    pub const fn alpha(self) -> bool {
        matches!(self, TexEnvMode::Alpha | TexEnvMode::Both)
    }
}

/// One texture combiner stage.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct TexEnv {
    source: TexEnvSourceReg,
    operand: TexEnvOperandReg,
    combiner: TexEnvCombinerReg,
    color: u32,
    scale: TexEnvScaleReg,
}

impl Default for TexEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TexEnv {
    /// A pass-through stage: both channels take the previous stage's
    /// output unchanged, constant color is opaque white.
    pub fn new() -> Self {
        let mut env = Self::zeroed();
        env.init();
        env
    }

    /// Reset to the pass-through state of [`TexEnv::new`].
    pub fn init(&mut self) {
        self.set_src(
            TexEnvMode::Both,
            TevSrc::Previous,
            TevSrc::PrimaryColor,
            TevSrc::PrimaryColor,
        );
        self.operand = TexEnvOperandReg::default();
        self.set_func(TexEnvMode::Both, CombineFunc::Replace);
        self.color = 0xFFFF_FFFF;
        self.set_scale(TexEnvMode::Both, TevScale::Scale1);
    }

    /// Select the three input sources of the chosen channels.
    pub fn set_src(&mut self, mode: TexEnvMode, s1: TevSrc, s2: TevSrc, s3: TevSrc) {
        let param = pack_triple(s1.bits(), s2.bits(), s3.bits());
        if mode.rgb() {
            self.source.set_rgb(param);
        }
        if mode.alpha() {
            self.source.set_alpha(param);
        }
    }

    /// Set raw operand nibbles for the chosen channels. Values are not
    /// checked against the operand tables of either channel.
    pub fn set_op(&mut self, mode: TexEnvMode, o1: u8, o2: u8, o3: u8) {
        let param = pack_triple(o1, o2, o3);
        if mode.rgb() {
            self.operand.set_rgb(param);
        }
        if mode.alpha() {
            self.operand.set_alpha(param);
        }
    }

    /// Operations applied to each color source before the function.
    pub fn set_op_rgb(&mut self, o1: TevOpRgb, o2: TevOpRgb, o3: TevOpRgb) {
        self.operand
            .set_rgb(pack_triple(o1.bits(), o2.bits(), o3.bits()));
    }

    /// Operations applied to each alpha source before the function.
    pub fn set_op_alpha(&mut self, o1: TevOpA, o2: TevOpA, o3: TevOpA) {
        self.operand
            .set_alpha(pack_triple(o1.bits(), o2.bits(), o3.bits()));
    }

    pub fn set_func(&mut self, mode: TexEnvMode, func: CombineFunc) {
        if mode.rgb() {
            self.combiner.set_rgb_func(func);
        }
        if mode.alpha() {
            self.combiner.set_alpha_func(func);
        }
    }

    /// Value of the [`TevSrc::Constant`] source, RGBA8 with red in the low byte.
    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    pub fn set_scale(&mut self, mode: TexEnvMode, scale: TevScale) {
        if mode.rgb() {
            self.scale.set_rgb_scale(scale);
        }
        if mode.alpha() {
            self.scale.set_alpha_scale(scale);
        }
    }

    /// Packed RGB source triple.
    pub fn src_rgb(&self) -> u16 {
        self.source.rgb()
    }

    /// Packed alpha source triple.
    pub fn src_alpha(&self) -> u16 {
        self.source.alpha()
    }

    /// 12-bit RGB view of the operand word.
    pub fn op_rgb(&self) -> u16 {
        self.operand.rgb()
    }

    /// 12-bit alpha view of the operand word.
    pub fn op_alpha(&self) -> u16 {
        self.operand.alpha()
    }

    /// The whole operand word.
    pub fn op_all(&self) -> u32 {
        bytemuck::cast(self.operand)
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn source(&self) -> TexEnvSourceReg {
        self.source
    }

    pub fn operand(&self) -> TexEnvOperandReg {
        self.operand
    }

    pub fn combiner(&self) -> TexEnvCombinerReg {
        self.combiner
    }

    pub fn scale(&self) -> TexEnvScaleReg {
        self.scale
    }

    /// The stage's register words in SOURCE..=SCALE order.
    pub fn words(&self) -> [u32; registers::TEXENV_REG_COUNT] {
        bytemuck::cast(*self)
    }

    /// Emit the stage's five registers for combiner stage `stage`.
    pub fn write_to<S: CommandSink>(
        &self,
        stage: usize,
        sink: &mut S,
    ) -> Result<(), GpuError<S::Error>> {
        let Some(base) = registers::texenv_base(stage) else {
            return Err(GpuError::Stage(InvalidStage(stage)));
        };
        log::trace!("TexEnv::write_to: stage {stage} at {base:#05x}");
        sink.write_incremental(base, &self.words())?;
        Ok(())
    }
}

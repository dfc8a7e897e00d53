//! Integration tests for TexEnv: defaults, per-channel setters and the
//! stage register stream.

mod common;

use c3d_core::gpu::registers;
use c3d_core::gpu::{CombineFunc, TevOpA, TevOpRgb, TevScale, TevSrc};
use c3d_core::{GpuError, InvalidStage, TexEnv, TexEnvMode};
use common::MockSink;
use proptest::prelude::*;

#[test]
fn test_default_stage_passes_previous_through() {
    let env = TexEnv::new();
    assert_eq!(env.src_rgb(), 0x00F);
    assert_eq!(env.src_alpha(), 0x00F);
    assert_eq!(env.op_all(), 0);
    assert_eq!(env.combiner().rgb_func(), Ok(CombineFunc::Replace));
    assert_eq!(env.combiner().alpha_func(), Ok(CombineFunc::Replace));
    assert_eq!(env.color(), 0xFFFF_FFFF);
    assert_eq!(env.scale().rgb_scale(), Ok(TevScale::Scale1));
    assert_eq!(env.scale().alpha_scale(), Ok(TevScale::Scale1));
    assert_eq!(env.words(), [0x000F_000F, 0, 0, 0xFFFF_FFFF, 0]);
    assert_eq!(TexEnv::default(), env);
}

#[test]
fn test_init_resets_modified_stage() {
    let mut env = TexEnv::new();
    env.set_src(TexEnvMode::Both, TevSrc::Texture0, TevSrc::Constant, TevSrc::Texture1);
    env.set_func(TexEnvMode::Rgb, CombineFunc::Modulate);
    env.set_color(0x8040_2010);
    env.set_op(TexEnvMode::Both, 1, 2, 3);
    env.set_scale(TexEnvMode::Alpha, TevScale::Scale4);

    env.init();
    assert_eq!(env, TexEnv::new());
}

#[test]
fn test_set_src_rgb_leaves_alpha() {
    let mut env = TexEnv::new();
    env.set_src(TexEnvMode::Rgb, TevSrc::Texture0, TevSrc::PrimaryColor, TevSrc::Constant);
    assert_eq!(env.src_rgb(), 0xE03);
    assert_eq!(env.src_alpha(), 0x00F);
    assert_eq!(env.source().rgb_src0(), TevSrc::Texture0);
    assert_eq!(env.source().rgb_src2(), TevSrc::Constant);
}

#[test]
fn test_set_src_alpha_leaves_rgb() {
    let mut env = TexEnv::new();
    env.set_src(TexEnvMode::Alpha, TevSrc::Texture1, TevSrc::PreviousBuffer, TevSrc::Texture2);
    assert_eq!(env.src_rgb(), 0x00F);
    assert_eq!(env.src_alpha(), 0x5D4);
    assert_eq!(env.words()[0], 0x05D4_000F);
}

#[test]
fn test_set_src_both() {
    let mut env = TexEnv::new();
    env.set_src(TexEnvMode::Both, TevSrc::Texture0, TevSrc::Texture0, TevSrc::Texture0);
    assert_eq!(env.words()[0], 0x0333_0333);
}

#[test]
fn test_set_func_per_channel() {
    let mut env = TexEnv::new();
    env.set_func(TexEnvMode::Rgb, CombineFunc::Interpolate);
    assert_eq!(env.combiner().rgb_func(), Ok(CombineFunc::Interpolate));
    assert_eq!(env.combiner().alpha_func(), Ok(CombineFunc::Replace));

    env.set_func(TexEnvMode::Alpha, CombineFunc::AddMultiply);
    assert_eq!(env.combiner().rgb_func(), Ok(CombineFunc::Interpolate));
    assert_eq!(env.combiner().alpha_func(), Ok(CombineFunc::AddMultiply));
    assert_eq!(env.words()[2], 0x0009_0004);
}

#[test]
fn test_set_scale_per_channel() {
    let mut env = TexEnv::new();
    env.set_scale(TexEnvMode::Alpha, TevScale::Scale2);
    assert_eq!(env.scale().rgb_scale(), Ok(TevScale::Scale1));
    assert_eq!(env.scale().alpha_scale(), Ok(TevScale::Scale2));

    env.set_scale(TexEnvMode::Both, TevScale::Scale4);
    assert_eq!(env.words()[4], 0x0002_0002);
}

#[test]
fn test_typed_operands_share_one_word() {
    let mut env = TexEnv::new();
    env.set_op_rgb(TevOpRgb::OneMinusSrcColor, TevOpRgb::SrcAlpha, TevOpRgb::SrcB);
    assert_eq!(env.op_rgb(), 0xC21);
    assert_eq!(env.op_alpha(), 0);

    env.set_op_alpha(TevOpA::OneMinusSrcAlpha, TevOpA::SrcG, TevOpA::OneMinusSrcB);
    assert_eq!(env.op_rgb(), 0xC21);
    assert_eq!(env.op_alpha(), 0x741);
    assert_eq!(env.op_all(), 0x0074_1C21);
    assert_eq!(env.operand().alpha_op2(), TevOpA::OneMinusSrcB);
    assert_eq!(env.operand().rgb_op2(), TevOpRgb::SrcB);
}

#[test]
fn test_raw_operands_honour_mode() {
    let mut env = TexEnv::new();
    env.set_op(TexEnvMode::Rgb, 0x3, 0x2, 0x1);
    assert_eq!(env.op_all(), 0x0000_0123);

    env.set_op(TexEnvMode::Alpha, 0x1, 0x0, 0x6);
    assert_eq!(env.op_all(), 0x0060_1123);

    env.set_op(TexEnvMode::Both, 0, 0, 0);
    assert_eq!(env.op_all(), 0);
}

#[test]
fn test_color_is_stored_verbatim() {
    let mut env = TexEnv::new();
    env.set_color(0x80FF_0000);
    assert_eq!(env.color(), 0x80FF_0000);
    assert_eq!(env.words()[3], 0x80FF_0000);
}

#[test]
fn test_write_to_uses_stage_base() {
    let mut env = TexEnv::new();
    env.set_color(0x1234_5678);

    for (stage, base) in [(0usize, 0x0C0u16), (3, 0x0D8), (4, 0x0F0), (5, 0x0F8)] {
        let mut sink = MockSink::new();
        env.write_to(stage, &mut sink).unwrap();
        let writes = sink.get_writes();
        assert_eq!(writes.len(), registers::TEXENV_REG_COUNT);
        assert_eq!(writes[0], (base, 0x000F_000F));
        assert_eq!(writes[3], (base + registers::TEXENV_COLOR_OFFSET, 0x1234_5678));
        assert_eq!(writes[4].0, base + registers::TEXENV_SCALE_OFFSET);
    }
}

#[test]
fn test_write_to_rejects_invalid_stage() {
    let mut sink = MockSink::new();
    let err = TexEnv::new().write_to(6, &mut sink).unwrap_err();
    assert!(matches!(err, GpuError::Stage(InvalidStage(6))));
    assert!(sink.get_writes().is_empty());
}

fn any_mode() -> impl Strategy<Value = TexEnvMode> {
    prop_oneof![
        Just(TexEnvMode::Rgb),
        Just(TexEnvMode::Alpha),
        Just(TexEnvMode::Both),
    ]
}

proptest! {
    #[test]
    fn prop_src_touches_only_selected_channel(
        mode in any_mode(),
        s in prop::array::uniform3(0u8..16),
    ) {
        let mut env = TexEnv::new();
        let [s1, s2, s3] = s.map(|b| TevSrc::from_bits(b).unwrap());
        env.set_src(mode, s1, s2, s3);
        let packed = u16::from(s[0]) | (u16::from(s[1]) << 4) | (u16::from(s[2]) << 8);

        prop_assert_eq!(env.src_rgb(), if mode.rgb() { packed } else { 0x00F });
        prop_assert_eq!(env.src_alpha(), if mode.alpha() { packed } else { 0x00F });
    }

    #[test]
    fn prop_raw_op_touches_only_selected_channel(
        mode in any_mode(),
        o in prop::array::uniform3(0u8..16),
    ) {
        let mut env = TexEnv::new();
        env.set_op(mode, o[0], o[1], o[2]);
        let packed = u16::from(o[0]) | (u16::from(o[1]) << 4) | (u16::from(o[2]) << 8);

        prop_assert_eq!(env.op_rgb(), if mode.rgb() { packed } else { 0 });
        prop_assert_eq!(env.op_alpha(), if mode.alpha() { packed } else { 0 });
    }
}

//! Register dump tool.
//!
//! Builds a framebuffer, attribute buffer and combiner configuration from
//! the command line, runs one context update and prints the resulting
//! register writes as `reg = value` lines.

mod dump;

use std::process;

use c3d_core::gpu::registers::texenv_update_buffer::tev_buffer_write_config;
use c3d_core::gpu::{ColorBuf, CombineFunc, DepthBuf, TevSrc};
use c3d_core::{BufInfo, FrameBuf, GpuContext, GpuError, PhysAddr, TexEnvMode};
use clap::{Parser, ValueEnum};

use crate::dump::RecordingSink;

/// Start of VRAM, where the render targets are placed back to back.
const VRAM_BASE: u32 = 0x1F00_0000;

#[derive(Parser)]
#[command(name = "c3d-dump")]
#[command(about = "Print the PICA200 register stream for a render target configuration", long_about = None)]
#[command(version)]
struct Cli {
    /// Render target width in pixels
    #[arg(long, default_value = "240")]
    width: u16,

    /// Render target height in pixels
    #[arg(long, default_value = "400")]
    height: u16,

    /// Color buffer format
    #[arg(long, value_enum, default_value_t = ColorFormat::Rgba8)]
    color_format: ColorFormat,

    /// Depth buffer format, or `none` to render without depth
    #[arg(long, value_enum, default_value_t = DepthFormat::Depth24Stencil8)]
    depth_format: DepthFormat,

    /// Use 32x32 block tiling
    #[arg(long)]
    block32: bool,

    /// Number of combiner stages that modulate texture 0 into the result
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(0..=6))]
    stages: u8,

    /// Vertex buffer to bind, as `ADDR:STRIDE:COUNT:PERMUTATION` (hex address
    /// and permutation). May be repeated.
    #[arg(long = "buffer", value_parser = parse_buffer)]
    buffers: Vec<BufferArg>,

    /// Suppress log output (register lines are still printed)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorFormat {
    Rgba8,
    Rgb8,
    Rgba5551,
    Rgb565,
    Rgba4,
}

impl From<ColorFormat> for ColorBuf {
    fn from(fmt: ColorFormat) -> Self {
        match fmt {
            ColorFormat::Rgba8 => ColorBuf::Rgba8,
            ColorFormat::Rgb8 => ColorBuf::Rgb8,
            ColorFormat::Rgba5551 => ColorBuf::Rgba5551,
            ColorFormat::Rgb565 => ColorBuf::Rgb565,
            ColorFormat::Rgba4 => ColorBuf::Rgba4,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DepthFormat {
    None,
    Depth16,
    Depth24,
    Depth24Stencil8,
}

impl DepthFormat {
    fn to_depth_buf(self) -> Option<DepthBuf> {
        match self {
            DepthFormat::None => None,
            DepthFormat::Depth16 => Some(DepthBuf::Depth16),
            DepthFormat::Depth24 => Some(DepthBuf::Depth24),
            DepthFormat::Depth24Stencil8 => Some(DepthBuf::Depth24Stencil8),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BufferArg {
    addr: u32,
    stride: u8,
    attrib_count: u8,
    permutation: u64,
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

fn parse_buffer(s: &str) -> Result<BufferArg, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [addr, stride, count, perm] = parts.as_slice() else {
        return Err(format!("expected ADDR:STRIDE:COUNT:PERMUTATION, got '{s}'"));
    };
    let addr = u32::try_from(parse_hex(addr)?).map_err(|_| format!("address '{addr}' out of range"))?;
    let stride = stride
        .parse()
        .map_err(|e| format!("invalid stride '{stride}': {e}"))?;
    let attrib_count = count
        .parse()
        .map_err(|e| format!("invalid attribute count '{count}': {e}"))?;
    Ok(BufferArg {
        addr,
        stride,
        attrib_count,
        permutation: parse_hex(perm)?,
    })
}

/// Byte size of a render target, or `None` if it would not fit below 4 GiB.
fn target_size(width: u16, height: u16, bytes_per_pixel: u32) -> Option<u32> {
    u32::from(width)
        .checked_mul(height.into())?
        .checked_mul(bytes_per_pixel)
}

/// Address of the first byte after `size` bytes at `addr`.
fn end_of(addr: u32, size: u32) -> Result<u32, String> {
    addr.checked_add(size)
        .ok_or_else(|| format!("render targets do not fit above {VRAM_BASE:#010x}"))
}

fn build_context(cli: &Cli) -> Result<GpuContext, String> {
    let mut ctx = GpuContext::new();

    let color_fmt = ColorBuf::from(cli.color_format);
    let mut fb = FrameBuf::new();
    fb.set_attrib(cli.width, cli.height, cli.block32);
    fb.set_color(Some(PhysAddr(VRAM_BASE)), color_fmt);
    let too_large = || format!("{}x{} render target is too large", cli.width, cli.height);
    let color_size = target_size(cli.width, cli.height, color_fmt.bytes_per_pixel())
        .ok_or_else(too_large)?;
    let depth_addr = end_of(VRAM_BASE, color_size)?;
    match cli.depth_format.to_depth_buf() {
        Some(depth_fmt) => {
            let depth_size = target_size(cli.width, cli.height, depth_fmt.bytes_per_pixel())
                .ok_or_else(too_large)?;
            end_of(depth_addr, depth_size)?;
            fb.set_depth(Some(PhysAddr(depth_addr)), depth_fmt);
            log::info!(
                "color buffer {VRAM_BASE:#010x} ({color_size} bytes), depth buffer {depth_addr:#010x} ({depth_size} bytes)"
            );
        }
        None => {
            fb.set_depth(None, DepthBuf::Depth24);
            log::info!("color buffer {VRAM_BASE:#010x} ({color_size} bytes), no depth buffer");
        }
    }
    ctx.set_frame_buf(&fb);

    let mut info = BufInfo::new();
    for buf in &cli.buffers {
        info.add(PhysAddr(buf.addr), buf.stride, buf.attrib_count, buf.permutation)
            .map_err(|e| e.to_string())?;
    }
    ctx.set_buf_info(&info);

    for id in 0..usize::from(cli.stages) {
        let env = ctx.tex_env_mut(id).map_err(|e| e.to_string())?;
        let first = if id == 0 {
            TevSrc::PrimaryColor
        } else {
            TevSrc::Previous
        };
        env.set_src(TexEnvMode::Both, TevSrc::Texture0, first, TevSrc::PrimaryColor);
        env.set_func(TexEnvMode::Both, CombineFunc::Modulate);
    }
    if cli.stages > 1 {
        ctx.tex_env_buf_update(
            TexEnvMode::Rgb,
            tev_buffer_write_config(true, false, false, false),
        );
    }

    Ok(ctx)
}

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut ctx = match build_context(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut sink = RecordingSink::new();
    if let Err(e) = ctx.update(&mut sink) {
        match e {
            GpuError::Sink(never) => match never {},
            GpuError::Stage(stage) => eprintln!("Error: {}", stage),
        }
        process::exit(1);
    }

    log::info!("{} register writes", sink.writes().len());
    for write in sink.writes() {
        println!("{write}");
    }
}

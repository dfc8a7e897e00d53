//! Render target configuration, clearing and display transfer.

use bitflags::bitflags;
use c3d_hal::{CommandSink, DisplayQueue, MemoryFill, Screen, Side};

use super::registers::{
    self, colorbuffer_format::ColorBufferFormatReg, framebuffer_dim::FrameBufferDimReg, ColorBuf,
    DepthBuf,
};
use super::PhysAddr;

bitflags! {
    /// Buffers affected by [`FrameBuf::clear`].
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ClearBits: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const ALL = Self::COLOR.bits() | Self::DEPTH.bits();
    }
}

/// Color format a detached color buffer reports.
pub const DEFAULT_COLOR_FMT: ColorBuf = ColorBuf::Rgba8;
/// Depth format a detached depth buffer reports.
pub const DEFAULT_DEPTH_FMT: DepthBuf = DepthBuf::Depth24;

/// Write mask of an attached color buffer (all four channels).
const COLOR_MASK_ALL: u8 = 0xF;
/// Depth write bit of the depth mask.
const DEPTH_MASK_DEPTH: u8 = 0x2;
/// Depth and stencil write bits of the depth mask.
const DEPTH_MASK_DEPTH_STENCIL: u8 = 0x3;

/// Memory fill control: start bit plus pixel size code in [9:8].
const FILL_START: u16 = 1 << 0;

/// Byte size of a `width` x `height` color buffer in `fmt`, modulo 2^32.
pub fn calc_color_buf_size(width: u32, height: u32, fmt: ColorBuf) -> u32 {
    width.wrapping_mul(height).wrapping_mul(fmt.bytes_per_pixel())
}

/// Byte size of a `width` x `height` depth buffer in `fmt`, modulo 2^32.
pub fn calc_depth_buf_size(width: u32, height: u32, fmt: DepthBuf) -> u32 {
    width.wrapping_mul(height).wrapping_mul(fmt.bytes_per_pixel())
}

/// Display engine dimension word: height in [31:16], width in [15:0].
pub fn buffer_dim(width: u16, height: u16) -> u32 {
    ((height as u32) << 16) | width as u32
}

/// A color target with an optional depth/stencil target.
///
/// The buffers are referenced by physical address only; their memory is
/// owned elsewhere. A missing buffer always has a zero mask and the
/// default format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameBuf {
    color_buf: Option<PhysAddr>,
    depth_buf: Option<PhysAddr>,
    width: u16,
    height: u16,
    color_fmt: ColorBuf,
    depth_fmt: DepthBuf,
    block32: bool,
    color_mask: u8,
    depth_mask: u8,
}

impl Default for FrameBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuf {
    pub const fn new() -> Self {
        Self {
            color_buf: None,
            depth_buf: None,
            width: 0,
            height: 0,
            color_fmt: DEFAULT_COLOR_FMT,
            depth_fmt: DEFAULT_DEPTH_FMT,
            block32: false,
            color_mask: 0,
            depth_mask: 0,
        }
    }

    /// Set dimensions and the 32x32 block tiling flag.
    pub fn set_attrib(&mut self, width: u16, height: u16, block32: bool) {
        self.width = width;
        self.height = height;
        self.block32 = block32;
    }

    /// Attach or detach the color buffer.
    pub fn set_color(&mut self, buf: Option<PhysAddr>, fmt: ColorBuf) {
        match buf {
            Some(addr) => {
                self.color_buf = Some(addr);
                self.color_fmt = fmt;
                self.color_mask = COLOR_MASK_ALL;
            }
            None => {
                self.color_buf = None;
                self.color_fmt = DEFAULT_COLOR_FMT;
                self.color_mask = 0;
            }
        }
    }

    /// Attach or detach the depth buffer. Stencil writes are enabled only
    /// for [`DepthBuf::Depth24Stencil8`].
    pub fn set_depth(&mut self, buf: Option<PhysAddr>, fmt: DepthBuf) {
        match buf {
            Some(addr) => {
                self.depth_buf = Some(addr);
                self.depth_fmt = fmt;
                self.depth_mask = if fmt.has_stencil() {
                    DEPTH_MASK_DEPTH_STENCIL
                } else {
                    DEPTH_MASK_DEPTH
                };
            }
            None => {
                self.depth_buf = None;
                self.depth_fmt = DEFAULT_DEPTH_FMT;
                self.depth_mask = 0;
            }
        }
    }

    pub fn color_buf(&self) -> Option<PhysAddr> {
        self.color_buf
    }

    pub fn depth_buf(&self) -> Option<PhysAddr> {
        self.depth_buf
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn color_fmt(&self) -> ColorBuf {
        self.color_fmt
    }

    pub fn depth_fmt(&self) -> DepthBuf {
        self.depth_fmt
    }

    pub fn block32(&self) -> bool {
        self.block32
    }

    pub fn color_mask(&self) -> u8 {
        self.color_mask
    }

    pub fn depth_mask(&self) -> u8 {
        self.depth_mask
    }

    // Fill ends wrap at 2^32 like the address registers they are written to.
    fn color_fill(&self, color: u32) -> Option<MemoryFill> {
        let start = self.color_buf?.0;
        let size = calc_color_buf_size(self.width.into(), self.height.into(), self.color_fmt);
        Some(MemoryFill {
            start,
            end: start.wrapping_add(size),
            value: color,
            control: FILL_START | ((self.color_fmt.size_code() as u16) << 8),
        })
    }

    fn depth_fill(&self, depth: u32) -> Option<MemoryFill> {
        let start = self.depth_buf?.0;
        let size = calc_depth_buf_size(self.width.into(), self.height.into(), self.depth_fmt);
        Some(MemoryFill {
            start,
            end: start.wrapping_add(size),
            value: depth,
            control: FILL_START | ((self.depth_fmt.size_code() as u16) << 8),
        })
    }

    /// Fill the selected buffers with `clear_color` / `clear_depth`.
    ///
    /// Both fills are issued as one request when both are selected.
    /// Selected buffers that are not attached are skipped.
    pub fn clear<Q: DisplayQueue>(
        &self,
        queue: &mut Q,
        bits: ClearBits,
        clear_color: u32,
        clear_depth: u32,
    ) -> Result<(), Q::Error> {
        let color = if bits.contains(ClearBits::COLOR) {
            self.color_fill(clear_color)
        } else {
            None
        };
        let depth = if bits.contains(ClearBits::DEPTH) {
            self.depth_fill(clear_depth)
        } else {
            None
        };

        match (color, depth) {
            (Some(color), depth) => queue.memory_fill(color, depth),
            (None, Some(depth)) => queue.memory_fill(depth, None),
            (None, None) => {
                log::debug!("FrameBuf::clear: nothing to clear for {bits:?}");
                Ok(())
            }
        }
    }

    /// Copy the color buffer to the framebuffer of `screen` / `side`.
    /// `flags` is passed through to the display engine unchanged.
    pub fn transfer<Q: DisplayQueue>(
        &self,
        queue: &mut Q,
        screen: Screen,
        side: Side,
        flags: u32,
    ) -> Result<(), Q::Error> {
        let Some(src) = self.color_buf else {
            log::warn!("FrameBuf::transfer: no color buffer attached");
            return Ok(());
        };
        let out = queue.screen_buffer(screen, side)?;
        log::debug!(
            "FrameBuf::transfer: {}x{} -> {screen:?}/{side:?} {}x{} at {:#010x}",
            self.width,
            self.height,
            out.width,
            out.height,
            out.addr
        );
        queue.display_transfer(
            src.0,
            buffer_dim(self.width, self.height),
            out.addr,
            buffer_dim(out.width, out.height),
            flags,
        )
    }

    /// Emit the registers that bind this framebuffer as the render target.
    pub fn write_to<S: CommandSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let dim: u32 = bytemuck::cast(FrameBufferDimReg::for_size(self.width, self.height));
        let depth_loc = self.depth_buf.map_or(0, PhysAddr::units_of_8);
        let color_loc = self.color_buf.map_or(0, PhysAddr::units_of_8);
        log::trace!(
            "FrameBuf::write_to: {}x{} color={color_loc:#x} depth={depth_loc:#x}",
            self.width,
            self.height
        );

        sink.write_register(registers::FRAMEBUFFER_INVALIDATE, 1)?;
        sink.write_incremental(registers::DEPTHBUFFER_LOC, &[depth_loc, color_loc, dim])?;
        sink.write_register(registers::RENDERBUF_DIM, dim)?;
        sink.write_register(registers::DEPTHBUFFER_FORMAT, self.depth_fmt.bits() as u32)?;
        sink.write_register(
            registers::COLORBUFFER_FORMAT,
            bytemuck::cast(ColorBufferFormatReg::for_format(self.color_fmt)),
        )?;
        sink.write_register(registers::FRAMEBUFFER_BLOCK32, self.block32 as u32)?;

        // Masks are already zero for detached buffers.
        let color_mask = self.color_mask as u32;
        let depth_mask = self.depth_mask as u32;
        sink.write_incremental(
            registers::COLORBUFFER_READ,
            &[color_mask, color_mask, depth_mask, depth_mask],
        )
    }
}

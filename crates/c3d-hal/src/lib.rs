#![no_std]

/// Abstracts the GPU command stream that register writes are queued into.
///
/// Register ids and values follow the PICA200 encoding. Implementations
/// decide when queued commands are submitted to the hardware.
pub trait CommandSink {
    type Error: core::fmt::Debug;

    /// Queue a full-word write to a register.
    fn write_register(&mut self, reg: u16, value: u32) -> Result<(), Self::Error>;

    /// Queue a write that only touches the bytes selected by `byte_mask`
    /// (bit n enables byte n).
    fn write_masked(&mut self, reg: u16, byte_mask: u8, value: u32) -> Result<(), Self::Error>;

    /// Queue writes of `values` to consecutive registers starting at `reg`.
    fn write_incremental(&mut self, reg: u16, values: &[u32]) -> Result<(), Self::Error> {
        for (i, &value) in values.iter().enumerate() {
            self.write_register(reg + i as u16, value)?;
        }
        Ok(())
    }
}

/// One memory fill request: `[start, end)` is filled with `value`.
///
/// `control` carries the start bit (bit 0) and the pixel size code in
/// bits [9:8].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryFill {
    pub start: u32,
    pub end: u32,
    pub value: u32,
    pub control: u16,
}

/// Physical screens of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Top,
    Bottom,
}

/// Eye of the stereoscopic top screen. The bottom screen only has `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Output framebuffer of a screen as reported by the display driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBuffer {
    pub addr: u32,
    pub width: u16,
    pub height: u16,
}

/// Abstracts the display engine: memory fills and display transfers.
///
/// Addresses are physical. Dimension words pack the height in [31:16]
/// and the width in [15:0].
pub trait DisplayQueue {
    type Error: core::fmt::Debug;

    /// Run up to two memory fills as a single request.
    fn memory_fill(
        &mut self,
        first: MemoryFill,
        second: Option<MemoryFill>,
    ) -> Result<(), Self::Error>;

    /// Copy and convert a rendered buffer into a screen framebuffer.
    fn display_transfer(
        &mut self,
        src: u32,
        src_dim: u32,
        dst: u32,
        dst_dim: u32,
        flags: u32,
    ) -> Result<(), Self::Error>;

    /// Framebuffer currently shown on `screen` / `side`.
    fn screen_buffer(&mut self, screen: Screen, side: Side) -> Result<ScreenBuffer, Self::Error>;
}

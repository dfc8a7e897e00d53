//! Command sink that records register writes for printing.

use std::convert::Infallible;
use std::fmt;

use c3d_hal::CommandSink;

/// One recorded register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub reg: u16,
    pub value: u32,
    /// Byte enables of a masked write, `None` for a full-word write.
    pub byte_mask: Option<u8>,
}

impl fmt::Display for Write {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x} = {:#010x}", self.reg, self.value)?;
        if let Some(mask) = self.byte_mask {
            write!(f, " (mask {mask:#x})")?;
        }
        Ok(())
    }
}

/// Sink that keeps every write in submission order and never fails.
#[derive(Debug, Default)]
pub struct RecordingSink {
    writes: Vec<Write>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[Write] {
        &self.writes
    }
}

impl CommandSink for RecordingSink {
    type Error = Infallible;

    fn write_register(&mut self, reg: u16, value: u32) -> Result<(), Self::Error> {
        log::trace!("write {reg:#05x} = {value:#010x}");
        self.writes.push(Write {
            reg,
            value,
            byte_mask: None,
        });
        Ok(())
    }

    fn write_masked(&mut self, reg: u16, byte_mask: u8, value: u32) -> Result<(), Self::Error> {
        log::trace!("write {reg:#05x} = {value:#010x} mask {byte_mask:#x}");
        self.writes.push(Write {
            reg,
            value,
            byte_mask: Some(byte_mask),
        });
        Ok(())
    }
}

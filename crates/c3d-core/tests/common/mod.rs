//! Recording mocks for the command stream and display engine.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use c3d_hal::{CommandSink, DisplayQueue, MemoryFill, Screen, ScreenBuffer, Side};

/// Captured register write: (register, value).
pub type WriteRecord = (u16, u32);

/// Mock command sink that records every register write. Masked writes are
/// recorded in `writes` and additionally with their byte mask in `masked`.
#[derive(Clone, Default)]
pub struct MockSink {
    writes: Rc<RefCell<Vec<WriteRecord>>>,
    masked: Rc<RefCell<Vec<(u16, u8, u32)>>>,
    fail_after: Option<usize>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that rejects every write once `n` writes were accepted.
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    pub fn get_writes(&self) -> Vec<WriteRecord> {
        self.writes.borrow().clone()
    }

    pub fn get_masked(&self) -> Vec<(u16, u8, u32)> {
        self.masked.borrow().clone()
    }

    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
        self.masked.borrow_mut().clear();
    }

    /// Find the last write to a specific register.
    pub fn last_write_to(&self, reg: u16) -> Option<u32> {
        self.writes
            .borrow()
            .iter()
            .rev()
            .find(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
    }

    /// Count writes to a specific register.
    pub fn count_writes_to(&self, reg: u16) -> usize {
        self.writes.borrow().iter().filter(|(r, _)| *r == reg).count()
    }

    fn check(&self) -> Result<(), MockError> {
        match self.fail_after {
            Some(n) if self.writes.borrow().len() >= n => Err(MockError),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl CommandSink for MockSink {
    type Error = MockError;

    fn write_register(&mut self, reg: u16, value: u32) -> Result<(), Self::Error> {
        self.check()?;
        self.writes.borrow_mut().push((reg, value));
        Ok(())
    }

    fn write_masked(&mut self, reg: u16, byte_mask: u8, value: u32) -> Result<(), Self::Error> {
        self.check()?;
        self.writes.borrow_mut().push((reg, value));
        self.masked.borrow_mut().push((reg, byte_mask, value));
        Ok(())
    }
}

/// Captured display transfer: (src, src_dim, dst, dst_dim, flags).
pub type TransferRecord = (u32, u32, u32, u32, u32);

/// Mock display engine. Top screen is 240x400, bottom 240x320, matching
/// the rotated framebuffers the display driver reports.
#[derive(Clone, Default)]
pub struct MockDisplay {
    pub fills: Vec<(MemoryFill, Option<MemoryFill>)>,
    pub transfers: Vec<TransferRecord>,
}

pub const TOP_LEFT_ADDR: u32 = 0x1830_0000;
pub const TOP_RIGHT_ADDR: u32 = 0x1834_6500;
pub const BOTTOM_ADDR: u32 = 0x1838_C000;

impl DisplayQueue for MockDisplay {
    type Error = MockError;

    fn memory_fill(
        &mut self,
        first: MemoryFill,
        second: Option<MemoryFill>,
    ) -> Result<(), Self::Error> {
        self.fills.push((first, second));
        Ok(())
    }

    fn display_transfer(
        &mut self,
        src: u32,
        src_dim: u32,
        dst: u32,
        dst_dim: u32,
        flags: u32,
    ) -> Result<(), Self::Error> {
        self.transfers.push((src, src_dim, dst, dst_dim, flags));
        Ok(())
    }

    fn screen_buffer(&mut self, screen: Screen, side: Side) -> Result<ScreenBuffer, Self::Error> {
        Ok(match (screen, side) {
            (Screen::Top, Side::Left) => ScreenBuffer {
                addr: TOP_LEFT_ADDR,
                width: 240,
                height: 400,
            },
            (Screen::Top, Side::Right) => ScreenBuffer {
                addr: TOP_RIGHT_ADDR,
                width: 240,
                height: 400,
            },
            (Screen::Bottom, _) => ScreenBuffer {
                addr: BOTTOM_ADDR,
                width: 240,
                height: 320,
            },
        })
    }
}

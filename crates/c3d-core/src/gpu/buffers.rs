//! Vertex attribute buffer configuration.
//!
//! A [`BufInfo`] describes up to twelve attribute buffers read by a draw
//! call. Each buffer is stored exactly as its three hardware registers
//! (OFFSET, CONFIG1, CONFIG2) so the whole set can be written with one
//! incremental register write.

use bytemuck::{Pod, Zeroable};
use c3d_hal::CommandSink;

use super::registers::{self, attrib_buffer_config2::AttribBufferConfig2Reg};
use super::PhysAddr;
use crate::error::BufInfoError;

/// Maximum number of attribute buffers.
pub const BUFINFO_MAX: usize = registers::ATTRIBBUFFER_COUNT;

/// Base physical address buffer offsets are relative to after
/// [`BufInfo::init`] (start of linear heap memory).
pub const DEFAULT_BASE_PADDR: u32 = 0x1800_0000;

/// One attribute buffer: byte offset from the base address plus the two
/// layout words.
///
/// `flags[0]` holds permutation nibbles 0..8. `flags[1]` is an
/// ATTRIBBUFFERi_CONFIG2 word: nibbles 8..12, stride, attribute count.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct BufCfg {
    pub offset: u32,
    pub flags: [u32; 2],
}

impl BufCfg {
    /// Pack a buffer entry. `attrib_count` is truncated to 4 bits and
    /// `permutation` to 48 bits.
    pub fn new(offset: u32, stride: u8, attrib_count: u8, permutation: u64) -> Self {
        let mut config2 = AttribBufferConfig2Reg::default();
        config2.set_permutation_hi((permutation >> 32) as u16);
        config2.set_stride(stride);
        config2.set_attrib_count(attrib_count);

        Self {
            offset,
            flags: [permutation as u32, bytemuck::cast(config2)],
        }
    }

    fn config2(&self) -> AttribBufferConfig2Reg {
        bytemuck::cast(self.flags[1])
    }

    /// The 48-bit permutation: nibble n is the attribute index stored in
    /// slot n of each vertex.
    pub fn permutation(&self) -> u64 {
        (self.flags[0] as u64) | ((self.config2().permutation_hi() as u64) << 32)
    }

    /// Vertex stride in bytes.
    pub fn stride(&self) -> u8 {
        self.config2().stride()
    }

    pub fn attrib_count(&self) -> u8 {
        self.config2().attrib_count()
    }

    /// Attribute index stored in each slot, in memory order.
    ///
    /// Nibbles 0xC..=0xF are padding markers and are yielded as-is.
    pub fn attribute_order(&self) -> impl Iterator<Item = u8> {
        let permutation = self.permutation();
        (0..self.attrib_count() as u32).map(move |slot| ((permutation >> (slot * 4)) & 0xF) as u8)
    }
}

/// The set of attribute buffers bound for drawing.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufInfo {
    base_paddr: u32,
    count: usize,
    buffers: [BufCfg; BUFINFO_MAX],
}

impl Default for BufInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl BufInfo {
    /// An empty buffer set based at [`DEFAULT_BASE_PADDR`].
    pub const fn new() -> Self {
        Self::with_base(DEFAULT_BASE_PADDR)
    }

    /// An empty buffer set based at `base_paddr`.
    pub const fn with_base(base_paddr: u32) -> Self {
        Self {
            base_paddr,
            count: 0,
            buffers: [BufCfg {
                offset: 0,
                flags: [0; 2],
            }; BUFINFO_MAX],
        }
    }

    /// Reset to the empty state based at [`DEFAULT_BASE_PADDR`].
    pub fn init(&mut self) {
        *self = Self::new();
    }

    pub fn base_paddr(&self) -> u32 {
        self.base_paddr
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The active buffer entries.
    pub fn buffers(&self) -> &[BufCfg] {
        &self.buffers[..self.count]
    }

    /// Append a buffer and return its index.
    ///
    /// `data` is the physical address of the first vertex, `stride` the
    /// distance between vertices and `permutation` the attribute index of
    /// each slot, least-significant nibble first. With three attributes,
    /// `0x210` stores attributes 0, 1, 2 in that order and `0x120` stores
    /// 0, 2, 1.
    ///
    /// # Errors
    /// [`BufInfoError::Full`] when twelve buffers are already present and
    /// [`BufInfoError::BelowBase`] when `data` precedes the base address.
    /// The set is unchanged on error.
    pub fn add(
        &mut self,
        data: PhysAddr,
        stride: u8,
        attrib_count: u8,
        permutation: u64,
    ) -> Result<usize, BufInfoError> {
        if self.count == BUFINFO_MAX {
            log::warn!("BufInfo::add: all {BUFINFO_MAX} attribute buffers in use");
            return Err(BufInfoError::Full {
                capacity: BUFINFO_MAX,
            });
        }
        if data.0 < self.base_paddr {
            log::warn!(
                "BufInfo::add: buffer {:#010x} below base {:#010x}",
                data.0,
                self.base_paddr
            );
            return Err(BufInfoError::BelowBase {
                addr: data.0,
                base: self.base_paddr,
            });
        }

        let id = self.count;
        self.buffers[id] = BufCfg::new(data.0 - self.base_paddr, stride, attrib_count, permutation);
        self.count += 1;
        log::trace!(
            "BufInfo::add: buffer {id} offset={:#x} stride={stride} attribs={attrib_count} perm={permutation:#x}",
            self.buffers[id].offset
        );
        Ok(id)
    }

    /// Emit the base address and all twelve buffer entries. Unused entries
    /// are written as zero.
    pub fn write_to<S: CommandSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.write_register(registers::ATTRIBBUFFERS_LOC, PhysAddr(self.base_paddr).units_of_8())?;
        sink.write_incremental(
            registers::ATTRIBBUFFER0_OFFSET,
            bytemuck::cast_slice(&self.buffers[..]),
        )
    }
}

//! PICA200 register definitions for the fixed-function pipeline
//!
//! Covers the attribute buffer, texture combiner and framebuffer register
//! blocks. Registers are 32 bits wide and addressed by command-stream id.
#![no_std]
#![allow(clippy::cast_lossless)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::identity_op)]
#![allow(clippy::inline_always)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::unnecessary_cast)]

#[cfg(not(doctest))]
pub mod components;
pub mod encode;
pub mod reg;

#[cfg(not(doctest))]
pub use crate::components::pica_regs::*;

//! Register component definitions
#![allow(non_camel_case_types)] // needed for type normalization suffixes

pub mod colorbuf_e;
pub mod combine_func_e;
pub mod depthbuf_e;
pub mod pica_regs;
pub mod tev_op_a_e;
pub mod tev_op_rgb_e;
pub mod tev_scale_e;
pub mod tev_src_e;

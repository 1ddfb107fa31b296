//! PSW (program status word) bit layout.
//!
//! The 8080 packs its five condition flags into a single byte when `PUSH
//! PSW`/`POP PSW` moves them to and from the stack alongside the accumulator.
//! Bit 1 is unused by any flag but is forced to `1` on push; bits 3 and 5 are
//! unused and forced to `0`.
//!
//! # References
//! - adc_8080_cpu.c: `op_push_psw`/`op_pop_psw`

/// Sign flag (bit 7): set when the result's high bit is set.
pub const S: u8 = 0b1000_0000;
/// Zero flag (bit 6): set when the result is zero.
pub const Z: u8 = 0b0100_0000;
/// Auxiliary carry flag (bit 4): carry out of bit 3, used by `DAA`.
pub const A: u8 = 0b0001_0000;
/// Parity flag (bit 2): set when the result has an even number of one bits.
pub const P: u8 = 0b0000_0100;
/// Carry flag (bit 0): carry/borrow out of bit 7.
pub const C: u8 = 0b0000_0001;
/// Bit 1 is unused; the 8080 always sets it to 1 when packing a PSW.
pub const UNUSED_SET: u8 = 0b0000_0010;

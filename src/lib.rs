//! Intel 8080 CPU core and static disassembler
//!
//! This crate provides a platform-agnostic 8080 interpreter and a
//! table-driven disassembler. No OS APIs are used — the interpreter reaches
//! memory and device I/O exclusively through the [`bus::Bus`] trait supplied
//! by the caller at each `step()`.
//!
//! # Architecture
//!
//! - `table`: the 256-entry opcode table (cycle counts, mnemonics, sizes,
//!   condition-bit classes) shared by the CPU and the disassembler.
//! - `bus`: the `Bus` trait and a `FlatMemoryBus` reference implementation.
//! - `cpu`: the 8080 register/flag state and instruction interpreter.
//! - `disasm`: a linear-sweep disassembler built on top of `table`.
//!
//! This crate has no executable surface of its own — no CLI, no ROM loader,
//! no peripheral emulation. Hosts wire their own memory map and device I/O
//! into a [`bus::Bus`] implementation and drive [`cpu::Cpu::step`] in a loop.

pub mod bus;
pub mod cpu;
pub mod disasm;
pub mod table;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bus::{Bus, FlatMemoryBus};
pub use cpu::Cpu;
pub use disasm::Disassembly;

//! WebAssembly bindings for the 8080 core.
//!
//! A thin `wasm-bindgen` wrapper around [`Cpu`] and [`FlatMemoryBus`] for
//! browser-hosted frontends that want to step the interpreter and inspect
//! its state from JavaScript. Device I/O is not exposed here: a host that
//! needs port-mapped peripherals should implement [`Bus`] itself against the
//! non-wasm API instead.

use wasm_bindgen::prelude::*;

use crate::bus::{Bus, FlatMemoryBus};
use crate::cpu::Cpu;

/// WASM-friendly pairing of a [`Cpu`] with its backing [`FlatMemoryBus`].
/// Unlike the C ABI, this owns both directly without a mutex, since WASM is
/// single-threaded.
#[wasm_bindgen]
pub struct WasmCpu {
    cpu: Cpu,
    bus: FlatMemoryBus,
}

#[wasm_bindgen]
impl WasmCpu {
    /// Create a new CPU with zeroed registers and a blank 64K memory image.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCpu {
        console_error_panic_hook::set_once();
        WasmCpu {
            cpu: Cpu::new(),
            bus: FlatMemoryBus::new(),
        }
    }

    /// Load `data` into memory at `origin`.
    #[wasm_bindgen]
    pub fn load(&mut self, origin: u16, data: &[u8]) {
        self.bus.load(origin, data);
    }

    /// Execute one instruction and return the number of cycles consumed.
    #[wasm_bindgen]
    pub fn step(&mut self) -> u8 {
        self.cpu.step(&mut self.bus)
    }

    /// Run up to `max_cycles` worth of instructions, stopping early if the
    /// CPU halts. Returns the number of cycles actually consumed.
    #[wasm_bindgen]
    pub fn run_cycles(&mut self, max_cycles: u32) -> u32 {
        let mut consumed = 0u32;
        while consumed < max_cycles && !self.cpu.halted {
            consumed += self.cpu.step(&mut self.bus) as u32;
        }
        consumed
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a
    }
    #[wasm_bindgen(getter)]
    pub fn bc(&self) -> u16 {
        self.cpu.bc()
    }
    #[wasm_bindgen(getter)]
    pub fn de(&self) -> u16 {
        self.cpu.de()
    }
    #[wasm_bindgen(getter)]
    pub fn hl(&self) -> u16 {
        self.cpu.hl()
    }
    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc
    }
    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp
    }
    #[wasm_bindgen(getter)]
    pub fn psw(&self) -> u8 {
        self.cpu.psw()
    }
    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.halted
    }

    /// Read one byte of memory, for inspecting results after a run.
    #[wasm_bindgen]
    pub fn read_byte(&mut self, addr: u16) -> u8 {
        self.bus.read_byte(addr)
    }

    /// Queue an interrupt to be recognized at the start of the next `step`.
    #[wasm_bindgen]
    pub fn request_interrupt(&mut self, opcode: u8) {
        self.cpu.request_interrupt(opcode);
    }
}

impl Default for WasmCpu {
    fn default() -> Self {
        Self::new()
    }
}

//! Linear-sweep disassembler over a fixed memory image.
//!
//! A [`Disassembly`] walks a byte range once, consulting
//! [`crate::table::OPCODE_TABLE`] for each instruction's length, and records
//! one [`OperationRecord`] per instruction in address order. Callers then
//! look up instructions by address ([`Disassembly::find`]) or windowed
//! around an address ([`Disassembly::list`]) without re-walking memory.
//!
//! # References
//! - adc_8080_dasm.c: `adc_8080_dasm_disassemble`, `adc_8080_dasm_find`,
//!   `adc_8080_dasm_list`, `adc_8080_dasm_op_to_string`

use crate::table::{OpDef, OPCODE_TABLE};

/// One disassembled instruction: its static definition plus where it sits in
/// the walked program.
#[derive(Debug, Clone, Copy)]
pub struct OperationRecord {
    pub def: OpDef,
    /// Address of the opcode byte.
    pub addr: u16,
    /// Position of this instruction within the disassembly, in program
    /// order. Used by [`Disassembly::list`] to window around a lookup hit.
    pub index: usize,
}

/// A disassembled program: an ordered, gap-free walk of `memory[org_addr ..
/// org_addr + program_size]`, one record per instruction.
#[derive(Debug, Clone)]
pub struct Disassembly {
    ops: Vec<OperationRecord>,
}

impl Disassembly {
    /// Walk `memory` from `org_addr` for `program_size` bytes, decoding one
    /// instruction at a time via [`OPCODE_TABLE`]. An instruction whose
    /// operand bytes run past `org_addr + program_size` is still recorded in
    /// full; only its first byte is guaranteed to lie in range.
    pub fn build(memory: &[u8], program_size: usize, org_addr: u16) -> Disassembly {
        let start_addr = org_addr as usize;
        let end_addr = start_addr + program_size;

        let mut ops = Vec::new();
        let mut addr = start_addr;
        let mut index = 0;
        while addr < end_addr {
            let opcode = memory[addr];
            let def = OPCODE_TABLE[opcode as usize];
            ops.push(OperationRecord {
                def,
                addr: addr as u16,
                index,
            });
            addr += def.size as usize;
            index += 1;
        }

        Disassembly { ops }
    }

    /// Number of instructions recorded.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Find the instruction starting exactly at `addr`, or `None` if `addr`
    /// falls in the middle of an instruction or outside the walked range.
    pub fn find(&self, addr: u16) -> Option<&OperationRecord> {
        self.ops
            .binary_search_by_key(&addr, |op| op.addr)
            .ok()
            .map(|i| &self.ops[i])
    }

    /// Return up to `num_lines` records centered on the instruction at
    /// `addr`: `num_lines / 2` before it and the same number after,
    /// clamped to the ends of the disassembly.
    pub fn list(&self, addr: u16, num_lines: usize) -> &[OperationRecord] {
        let Some(hit) = self.find(addr) else {
            return &[];
        };
        let n = num_lines / 2;
        let imin = hit.index.saturating_sub(n);
        let imax = (hit.index + n).min(self.ops.len() - 1);
        &self.ops[imin..=imax]
    }

    /// Render one instruction's mnemonic, substituting its immediate operand
    /// (if any) from `memory` at the instruction's address.
    ///
    /// A record's operand bytes can run past the end of `memory` (`build`
    /// only guarantees the opcode byte itself is in range, per its own
    /// doc comment), so out-of-range operand bytes read as `0` rather than
    /// panicking — matching the original C disassembler, which only ever
    /// operated over a full 64 KiB image and so never had a gap to fall
    /// into in the first place.
    pub fn mnemonic(&self, memory: &[u8], op: &OperationRecord) -> String {
        let byte_at = |idx: usize| memory.get(idx).copied().unwrap_or(0);
        match op.def.size {
            1 => op.def.mnemonic.to_string(),
            2 => {
                let operand = byte_at(op.addr as usize + 1);
                op.def
                    .mnemonic
                    .replace("{:02x}", &format!("{:02x}", operand))
            }
            3 => {
                let word = u16::from_le_bytes([
                    byte_at(op.addr as usize + 1),
                    byte_at(op.addr as usize + 2),
                ]);
                op.def
                    .mnemonic
                    .replace("{:04x}", &format!("{:04x}", word))
            }
            _ => String::new(),
        }
    }

    /// Render one instruction as a full listing line: address, mnemonic,
    /// affected condition bits, and description.
    pub fn render(&self, memory: &[u8], op: &OperationRecord) -> String {
        let mnemonic = self.mnemonic(memory, op);
        format!(
            "{:04x}    {:<15} {:<12}; condbits: {:<12} description: {:<12}",
            op.addr,
            mnemonic,
            "",
            op.def.condbits.as_str(),
            op.def.desc
        )
    }
}

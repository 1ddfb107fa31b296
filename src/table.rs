//! Shared 256-entry opcode table: cycle counts, disassembly mnemonics, and
//! condition-bit classes, indexed by raw opcode byte.
//!
//! Both the CPU interpreter (for `cycles`) and the disassembler (for
//! `mnemonic`/`size`/`condbits`/`desc`) read from the same table, so the two
//! components can never disagree about how many bytes an opcode occupies or
//! how it renders.
//!
//! # References
//! - adc_8080_cpu.c: `s_cycles_lut`
//! - adc_8080_dasm.c: `s_dasm_lut`

/// Which condition bits (flags) an instruction may affect, for disassembly
/// annotation purposes only — the interpreter computes flags directly from
/// each opcode's own logic, not from this classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CondBits {
    /// No condition bits affected.
    None,
    /// Carry only.
    Cy,
    /// Sign, zero, auxiliary carry, parity (not carry).
    Szap,
    /// Sign, zero, auxiliary carry, parity, and carry.
    All,
}

impl CondBits {
    /// Render as the short label the original disassembler used
    /// (`none` / `cy` / `z,s,p,ac` / `z,s,p,ac,cy`).
    pub fn as_str(self) -> &'static str {
        match self {
            CondBits::None => "none",
            CondBits::Cy => "cy",
            CondBits::Szap => "z,s,p,ac",
            CondBits::All => "z,s,p,ac,cy",
        }
    }
}

/// Static metadata for one opcode: how the disassembler renders it and how
/// many cycles the interpreter charges for it.
#[derive(Debug, Clone, Copy)]
pub struct OpDef {
    /// Mnemonic template. Opcodes with an 8-bit or 16-bit immediate operand
    /// carry a `{:02x}`/`{:04x}` placeholder consumed by
    /// [`crate::disasm::Disassembly`] when rendering a line of text.
    pub mnemonic: &'static str,
    /// Instruction length in bytes (1, 2, or 3).
    pub size: u8,
    /// Condition bits this instruction may affect, for the disassembler's
    /// annotation column.
    pub condbits: CondBits,
    /// One-line human description of the instruction's effect.
    pub desc: &'static str,
    /// Base cycle count charged for this opcode by [`crate::cpu::Cpu::step`].
    /// Conditional jumps/calls/returns add further cycles when taken; see
    /// the interpreter's dispatch logic.
    pub cycles: u8,
}

/// The 256-entry instruction table, indexed directly by opcode byte.
///
/// Seven byte values decode to the same table entry as one of their
/// "canonical" neighbors because the real 8080 duplicates several opcodes:
/// `0x08/0x10/0x18/0x20/0x28/0x30/0x38` behave as `NOP`, `0xCB` as `JMP`,
/// `0xD9` as `RET`, and `0xDD/0xED/0xFD` as `CALL`. Those entries are listed
/// here exactly as the undocumented duplicates they are, not folded away.
pub static OPCODE_TABLE: [OpDef; 256] = [
    OpDef { mnemonic: "nop", size: 1, condbits: CondBits::None, desc: "no operation", cycles: 4 }, // 0x00
    OpDef { mnemonic: "lxi b,{:04x}", size: 3, condbits: CondBits::None, desc: "b = byte 3, c = byte 2", cycles: 10 }, // 0x01
    OpDef { mnemonic: "stax b", size: 1, condbits: CondBits::None, desc: "(bc) = a", cycles: 7 }, // 0x02
    OpDef { mnemonic: "inx b", size: 1, condbits: CondBits::None, desc: "bc++", cycles: 5 }, // 0x03
    OpDef { mnemonic: "inr b", size: 1, condbits: CondBits::Szap, desc: "b++", cycles: 5 }, // 0x04
    OpDef { mnemonic: "dcr b", size: 1, condbits: CondBits::Szap, desc: "b--", cycles: 5 }, // 0x05
    OpDef { mnemonic: "mvi b,{:02x}", size: 2, condbits: CondBits::None, desc: "b = byte 2", cycles: 7 }, // 0x06
    OpDef { mnemonic: "rlc", size: 1, condbits: CondBits::Cy, desc: "a <<= 1; bit 0 = prev bit 7; cy = prev bit 7", cycles: 4 }, // 0x07
    OpDef { mnemonic: "nop", size: 1, condbits: CondBits::None, desc: "no operation", cycles: 4 }, // 0x08
    OpDef { mnemonic: "dad b", size: 1, condbits: CondBits::Cy, desc: "hl += bc", cycles: 10 }, // 0x09
    OpDef { mnemonic: "ldax b", size: 1, condbits: CondBits::None, desc: "a = (bc)", cycles: 7 }, // 0x0A
    OpDef { mnemonic: "dcx b", size: 1, condbits: CondBits::None, desc: "bc--", cycles: 5 }, // 0x0B
    OpDef { mnemonic: "inr c", size: 1, condbits: CondBits::Szap, desc: "c++", cycles: 5 }, // 0x0C
    OpDef { mnemonic: "dcr c", size: 1, condbits: CondBits::Szap, desc: "c--", cycles: 5 }, // 0x0D
    OpDef { mnemonic: "mvi c,{:02x}", size: 2, condbits: CondBits::None, desc: "c = byte 2", cycles: 7 }, // 0x0E
    OpDef { mnemonic: "rrc", size: 1, condbits: CondBits::Cy, desc: "a >>= 1; bit 7 = prev bit 0; cy = prev bit 0", cycles: 4 }, // 0x0F
    OpDef { mnemonic: "nop", size: 1, condbits: CondBits::None, desc: "no operation", cycles: 4 }, // 0x10
    OpDef { mnemonic: "lxi d,{:04x}", size: 3, condbits: CondBits::None, desc: "d = byte 3, e = byte 2", cycles: 10 }, // 0x11
    OpDef { mnemonic: "stax d", size: 1, condbits: CondBits::None, desc: "(de) = a", cycles: 7 }, // 0x12
    OpDef { mnemonic: "inx d", size: 1, condbits: CondBits::None, desc: "de++", cycles: 5 }, // 0x13
    OpDef { mnemonic: "inr d", size: 1, condbits: CondBits::Szap, desc: "d++", cycles: 5 }, // 0x14
    OpDef { mnemonic: "dcr d", size: 1, condbits: CondBits::Szap, desc: "d--", cycles: 5 }, // 0x15
    OpDef { mnemonic: "mvi d,{:02x}", size: 2, condbits: CondBits::None, desc: "d = byte 2", cycles: 7 }, // 0x16
    OpDef { mnemonic: "ral", size: 1, condbits: CondBits::Cy, desc: "a <<= 1; bit 0 = prev cy; cy = prev bit 7", cycles: 4 }, // 0x17
    OpDef { mnemonic: "nop", size: 1, condbits: CondBits::None, desc: "no operation", cycles: 4 }, // 0x18
    OpDef { mnemonic: "dad d", size: 1, condbits: CondBits::Cy, desc: "hl += de", cycles: 10 }, // 0x19
    OpDef { mnemonic: "ldax d", size: 1, condbits: CondBits::None, desc: "a = (de)", cycles: 7 }, // 0x1A
    OpDef { mnemonic: "dcx d", size: 1, condbits: CondBits::None, desc: "de--", cycles: 5 }, // 0x1B
    OpDef { mnemonic: "inr e", size: 1, condbits: CondBits::Szap, desc: "e++", cycles: 5 }, // 0x1C
    OpDef { mnemonic: "dcr e", size: 1, condbits: CondBits::Szap, desc: "e--", cycles: 5 }, // 0x1D
    OpDef { mnemonic: "mvi e,{:02x}", size: 2, condbits: CondBits::None, desc: "e = byte 2", cycles: 7 }, // 0x1E
    OpDef { mnemonic: "rar", size: 1, condbits: CondBits::Cy, desc: "a >>= 1; bit 7 = prev cy; cy = prev bit 0", cycles: 4 }, // 0x1F
    OpDef { mnemonic: "nop", size: 1, condbits: CondBits::None, desc: "no operation", cycles: 4 }, // 0x20
    OpDef { mnemonic: "lxi h,{:04x}", size: 3, condbits: CondBits::None, desc: "h = byte 3, l = byte 2", cycles: 10 }, // 0x21
    OpDef { mnemonic: "shld ({:04x})", size: 3, condbits: CondBits::None, desc: "(adr+1) = h, (adr) = l", cycles: 16 }, // 0x22
    OpDef { mnemonic: "inx h", size: 1, condbits: CondBits::None, desc: "hl++", cycles: 5 }, // 0x23
    OpDef { mnemonic: "inr h", size: 1, condbits: CondBits::Szap, desc: "h++", cycles: 5 }, // 0x24
    OpDef { mnemonic: "dcr h", size: 1, condbits: CondBits::Szap, desc: "h--", cycles: 5 }, // 0x25
    OpDef { mnemonic: "mvi h,{:02x}", size: 2, condbits: CondBits::None, desc: "h = byte 2", cycles: 7 }, // 0x26
    OpDef { mnemonic: "daa", size: 1, condbits: CondBits::All, desc: "decimal adjust a", cycles: 4 }, // 0x27
    OpDef { mnemonic: "nop", size: 1, condbits: CondBits::None, desc: "no operation", cycles: 4 }, // 0x28
    OpDef { mnemonic: "dad h", size: 1, condbits: CondBits::Cy, desc: "hl += hl", cycles: 10 }, // 0x29
    OpDef { mnemonic: "lhld ({:04x})", size: 3, condbits: CondBits::None, desc: "h = (adr+1), l = (adr)", cycles: 16 }, // 0x2A
    OpDef { mnemonic: "dcx h", size: 1, condbits: CondBits::None, desc: "hl--", cycles: 5 }, // 0x2B
    OpDef { mnemonic: "inr l", size: 1, condbits: CondBits::Szap, desc: "l++", cycles: 5 }, // 0x2C
    OpDef { mnemonic: "dcr l", size: 1, condbits: CondBits::Szap, desc: "l--", cycles: 5 }, // 0x2D
    OpDef { mnemonic: "mvi l,{:02x}", size: 2, condbits: CondBits::None, desc: "l = byte 2", cycles: 7 }, // 0x2E
    OpDef { mnemonic: "cma", size: 1, condbits: CondBits::None, desc: "a = !a", cycles: 4 }, // 0x2F
    OpDef { mnemonic: "nop", size: 1, condbits: CondBits::None, desc: "no operation", cycles: 4 }, // 0x30
    OpDef { mnemonic: "lxi sp,{:04x}", size: 3, condbits: CondBits::None, desc: "s = byte 3, p = byte 2", cycles: 10 }, // 0x31
    OpDef { mnemonic: "sta ({:04x})", size: 3, condbits: CondBits::None, desc: "(adr) = a", cycles: 13 }, // 0x32
    OpDef { mnemonic: "inx sp", size: 1, condbits: CondBits::None, desc: "sp++", cycles: 5 }, // 0x33
    OpDef { mnemonic: "inr m", size: 1, condbits: CondBits::Szap, desc: "(hl)++", cycles: 10 }, // 0x34
    OpDef { mnemonic: "dcr m", size: 1, condbits: CondBits::Szap, desc: "(hl)--", cycles: 10 }, // 0x35
    OpDef { mnemonic: "mvi m,{:02x}", size: 2, condbits: CondBits::None, desc: "(hl) = byte 2", cycles: 10 }, // 0x36
    OpDef { mnemonic: "stc", size: 1, condbits: CondBits::Cy, desc: "cy = 1", cycles: 4 }, // 0x37
    OpDef { mnemonic: "nop", size: 1, condbits: CondBits::None, desc: "no operation", cycles: 4 }, // 0x38
    OpDef { mnemonic: "dad sp", size: 1, condbits: CondBits::Cy, desc: "hl += sp", cycles: 10 }, // 0x39
    OpDef { mnemonic: "lda ({:04x})", size: 3, condbits: CondBits::None, desc: "a = (adr)", cycles: 13 }, // 0x3A
    OpDef { mnemonic: "dcx sp", size: 1, condbits: CondBits::None, desc: "sp--", cycles: 5 }, // 0x3B
    OpDef { mnemonic: "inr a", size: 1, condbits: CondBits::Szap, desc: "a++", cycles: 5 }, // 0x3C
    OpDef { mnemonic: "dcr a", size: 1, condbits: CondBits::Szap, desc: "a--", cycles: 5 }, // 0x3D
    OpDef { mnemonic: "mvi a,{:02x}", size: 2, condbits: CondBits::None, desc: "a = byte 2", cycles: 7 }, // 0x3E
    OpDef { mnemonic: "cmc", size: 1, condbits: CondBits::Cy, desc: "cy = !cy", cycles: 4 }, // 0x3F
    OpDef { mnemonic: "mov b,b", size: 1, condbits: CondBits::None, desc: "b = b", cycles: 5 }, // 0x40
    OpDef { mnemonic: "mov b,c", size: 1, condbits: CondBits::None, desc: "b = c", cycles: 5 }, // 0x41
    OpDef { mnemonic: "mov b,d", size: 1, condbits: CondBits::None, desc: "b = d", cycles: 5 }, // 0x42
    OpDef { mnemonic: "mov b,e", size: 1, condbits: CondBits::None, desc: "b = e", cycles: 5 }, // 0x43
    OpDef { mnemonic: "mov b,h", size: 1, condbits: CondBits::None, desc: "b = h", cycles: 5 }, // 0x44
    OpDef { mnemonic: "mov b,l", size: 1, condbits: CondBits::None, desc: "b = l", cycles: 5 }, // 0x45
    OpDef { mnemonic: "mov b,m", size: 1, condbits: CondBits::None, desc: "b = (hl)", cycles: 7 }, // 0x46
    OpDef { mnemonic: "mov b,a", size: 1, condbits: CondBits::None, desc: "b = a", cycles: 5 }, // 0x47
    OpDef { mnemonic: "mov c,b", size: 1, condbits: CondBits::None, desc: "c = b", cycles: 5 }, // 0x48
    OpDef { mnemonic: "mov c,c", size: 1, condbits: CondBits::None, desc: "c = c", cycles: 5 }, // 0x49
    OpDef { mnemonic: "mov c,d", size: 1, condbits: CondBits::None, desc: "c = d", cycles: 5 }, // 0x4A
    OpDef { mnemonic: "mov c,e", size: 1, condbits: CondBits::None, desc: "c = e", cycles: 5 }, // 0x4B
    OpDef { mnemonic: "mov c,h", size: 1, condbits: CondBits::None, desc: "c = h", cycles: 5 }, // 0x4C
    OpDef { mnemonic: "mov c,l", size: 1, condbits: CondBits::None, desc: "c = l", cycles: 5 }, // 0x4D
    OpDef { mnemonic: "mov c,m", size: 1, condbits: CondBits::None, desc: "c = (hl)", cycles: 7 }, // 0x4E
    OpDef { mnemonic: "mov c,a", size: 1, condbits: CondBits::None, desc: "c = a", cycles: 5 }, // 0x4F
    OpDef { mnemonic: "mov d,b", size: 1, condbits: CondBits::None, desc: "d = b", cycles: 5 }, // 0x50
    OpDef { mnemonic: "mov d,c", size: 1, condbits: CondBits::None, desc: "d = c", cycles: 5 }, // 0x51
    OpDef { mnemonic: "mov d,d", size: 1, condbits: CondBits::None, desc: "d = d", cycles: 5 }, // 0x52
    OpDef { mnemonic: "mov d,e", size: 1, condbits: CondBits::None, desc: "d = e", cycles: 5 }, // 0x53
    OpDef { mnemonic: "mov d,h", size: 1, condbits: CondBits::None, desc: "d = h", cycles: 5 }, // 0x54
    OpDef { mnemonic: "mov d,l", size: 1, condbits: CondBits::None, desc: "d = l", cycles: 5 }, // 0x55
    OpDef { mnemonic: "mov d,m", size: 1, condbits: CondBits::None, desc: "d = (hl)", cycles: 7 }, // 0x56
    OpDef { mnemonic: "mov d,a", size: 1, condbits: CondBits::None, desc: "d = a", cycles: 5 }, // 0x57
    OpDef { mnemonic: "mov e,b", size: 1, condbits: CondBits::None, desc: "e = b", cycles: 5 }, // 0x58
    OpDef { mnemonic: "mov e,c", size: 1, condbits: CondBits::None, desc: "e = c", cycles: 5 }, // 0x59
    OpDef { mnemonic: "mov e,d", size: 1, condbits: CondBits::None, desc: "e = d", cycles: 5 }, // 0x5A
    OpDef { mnemonic: "mov e,e", size: 1, condbits: CondBits::None, desc: "e = e", cycles: 5 }, // 0x5B
    OpDef { mnemonic: "mov e,h", size: 1, condbits: CondBits::None, desc: "e = h", cycles: 5 }, // 0x5C
    OpDef { mnemonic: "mov e,l", size: 1, condbits: CondBits::None, desc: "e = l", cycles: 5 }, // 0x5D
    OpDef { mnemonic: "mov e,m", size: 1, condbits: CondBits::None, desc: "e = (hl)", cycles: 7 }, // 0x5E
    OpDef { mnemonic: "mov e,a", size: 1, condbits: CondBits::None, desc: "e = a", cycles: 5 }, // 0x5F
    OpDef { mnemonic: "mov h,b", size: 1, condbits: CondBits::None, desc: "h = b", cycles: 5 }, // 0x60
    OpDef { mnemonic: "mov h,c", size: 1, condbits: CondBits::None, desc: "h = c", cycles: 5 }, // 0x61
    OpDef { mnemonic: "mov h,d", size: 1, condbits: CondBits::None, desc: "h = d", cycles: 5 }, // 0x62
    OpDef { mnemonic: "mov h,e", size: 1, condbits: CondBits::None, desc: "h = e", cycles: 5 }, // 0x63
    OpDef { mnemonic: "mov h,h", size: 1, condbits: CondBits::None, desc: "h = h", cycles: 5 }, // 0x64
    OpDef { mnemonic: "mov h,l", size: 1, condbits: CondBits::None, desc: "h = l", cycles: 5 }, // 0x65
    OpDef { mnemonic: "mov h,m", size: 1, condbits: CondBits::None, desc: "h = (hl)", cycles: 7 }, // 0x66
    OpDef { mnemonic: "mov h,a", size: 1, condbits: CondBits::None, desc: "h = a", cycles: 5 }, // 0x67
    OpDef { mnemonic: "mov l,b", size: 1, condbits: CondBits::None, desc: "l = b", cycles: 5 }, // 0x68
    OpDef { mnemonic: "mov l,c", size: 1, condbits: CondBits::None, desc: "l = c", cycles: 5 }, // 0x69
    OpDef { mnemonic: "mov l,d", size: 1, condbits: CondBits::None, desc: "l = d", cycles: 5 }, // 0x6A
    OpDef { mnemonic: "mov l,e", size: 1, condbits: CondBits::None, desc: "l = e", cycles: 5 }, // 0x6B
    OpDef { mnemonic: "mov l,h", size: 1, condbits: CondBits::None, desc: "l = h", cycles: 5 }, // 0x6C
    OpDef { mnemonic: "mov l,l", size: 1, condbits: CondBits::None, desc: "l = l", cycles: 5 }, // 0x6D
    OpDef { mnemonic: "mov l,m", size: 1, condbits: CondBits::None, desc: "l = (hl)", cycles: 7 }, // 0x6E
    OpDef { mnemonic: "mov l,a", size: 1, condbits: CondBits::None, desc: "l = a", cycles: 5 }, // 0x6F
    OpDef { mnemonic: "mov m,b", size: 1, condbits: CondBits::None, desc: "(hl) = b", cycles: 7 }, // 0x70
    OpDef { mnemonic: "mov m,c", size: 1, condbits: CondBits::None, desc: "(hl) = c", cycles: 7 }, // 0x71
    OpDef { mnemonic: "mov m,d", size: 1, condbits: CondBits::None, desc: "(hl) = d", cycles: 7 }, // 0x72
    OpDef { mnemonic: "mov m,e", size: 1, condbits: CondBits::None, desc: "(hl) = e", cycles: 7 }, // 0x73
    OpDef { mnemonic: "mov m,h", size: 1, condbits: CondBits::None, desc: "(hl) = h", cycles: 7 }, // 0x74
    OpDef { mnemonic: "mov m,l", size: 1, condbits: CondBits::None, desc: "(hl) = l", cycles: 7 }, // 0x75
    OpDef { mnemonic: "hlt", size: 1, condbits: CondBits::None, desc: "halt cpu", cycles: 7 }, // 0x76
    OpDef { mnemonic: "mov m,a", size: 1, condbits: CondBits::None, desc: "(hl) = a", cycles: 7 }, // 0x77
    OpDef { mnemonic: "mov a,b", size: 1, condbits: CondBits::None, desc: "a = b", cycles: 5 }, // 0x78
    OpDef { mnemonic: "mov a,c", size: 1, condbits: CondBits::None, desc: "a = c", cycles: 5 }, // 0x79
    OpDef { mnemonic: "mov a,d", size: 1, condbits: CondBits::None, desc: "a = d", cycles: 5 }, // 0x7A
    OpDef { mnemonic: "mov a,e", size: 1, condbits: CondBits::None, desc: "a = e", cycles: 5 }, // 0x7B
    OpDef { mnemonic: "mov a,h", size: 1, condbits: CondBits::None, desc: "a = h", cycles: 5 }, // 0x7C
    OpDef { mnemonic: "mov a,l", size: 1, condbits: CondBits::None, desc: "a = l", cycles: 5 }, // 0x7D
    OpDef { mnemonic: "mov a,m", size: 1, condbits: CondBits::None, desc: "a = (hl)", cycles: 7 }, // 0x7E
    OpDef { mnemonic: "mov a,a", size: 1, condbits: CondBits::None, desc: "a = a", cycles: 5 }, // 0x7F
    OpDef { mnemonic: "add b", size: 1, condbits: CondBits::All, desc: "a += b", cycles: 4 }, // 0x80
    OpDef { mnemonic: "add c", size: 1, condbits: CondBits::All, desc: "a += c", cycles: 4 }, // 0x81
    OpDef { mnemonic: "add d", size: 1, condbits: CondBits::All, desc: "a += d", cycles: 4 }, // 0x82
    OpDef { mnemonic: "add e", size: 1, condbits: CondBits::All, desc: "a += e", cycles: 4 }, // 0x83
    OpDef { mnemonic: "add h", size: 1, condbits: CondBits::All, desc: "a += h", cycles: 4 }, // 0x84
    OpDef { mnemonic: "add l", size: 1, condbits: CondBits::All, desc: "a += l", cycles: 4 }, // 0x85
    OpDef { mnemonic: "add m", size: 1, condbits: CondBits::All, desc: "a += (hl)", cycles: 7 }, // 0x86
    OpDef { mnemonic: "add a", size: 1, condbits: CondBits::All, desc: "a += a", cycles: 4 }, // 0x87
    OpDef { mnemonic: "adc b", size: 1, condbits: CondBits::All, desc: "a += b + cy", cycles: 4 }, // 0x88
    OpDef { mnemonic: "adc c", size: 1, condbits: CondBits::All, desc: "a += c + cy", cycles: 4 }, // 0x89
    OpDef { mnemonic: "adc d", size: 1, condbits: CondBits::All, desc: "a += d + cy", cycles: 4 }, // 0x8A
    OpDef { mnemonic: "adc e", size: 1, condbits: CondBits::All, desc: "a += e + cy", cycles: 4 }, // 0x8B
    OpDef { mnemonic: "adc h", size: 1, condbits: CondBits::All, desc: "a += h + cy", cycles: 4 }, // 0x8C
    OpDef { mnemonic: "adc l", size: 1, condbits: CondBits::All, desc: "a += l + cy", cycles: 4 }, // 0x8D
    OpDef { mnemonic: "adc m", size: 1, condbits: CondBits::All, desc: "a += (hl) + cy", cycles: 7 }, // 0x8E
    OpDef { mnemonic: "adc a", size: 1, condbits: CondBits::All, desc: "a += a + cy", cycles: 4 }, // 0x8F
    OpDef { mnemonic: "sub b", size: 1, condbits: CondBits::All, desc: "a -= b", cycles: 4 }, // 0x90
    OpDef { mnemonic: "sub c", size: 1, condbits: CondBits::All, desc: "a -= c", cycles: 4 }, // 0x91
    OpDef { mnemonic: "sub d", size: 1, condbits: CondBits::All, desc: "a -= d", cycles: 4 }, // 0x92
    OpDef { mnemonic: "sub e", size: 1, condbits: CondBits::All, desc: "a -= e", cycles: 4 }, // 0x93
    OpDef { mnemonic: "sub h", size: 1, condbits: CondBits::All, desc: "a -= h", cycles: 4 }, // 0x94
    OpDef { mnemonic: "sub l", size: 1, condbits: CondBits::All, desc: "a -= l", cycles: 4 }, // 0x95
    OpDef { mnemonic: "sub m", size: 1, condbits: CondBits::All, desc: "a -= (hl)", cycles: 7 }, // 0x96
    OpDef { mnemonic: "sub a", size: 1, condbits: CondBits::All, desc: "a -= a", cycles: 4 }, // 0x97
    OpDef { mnemonic: "sbb b", size: 1, condbits: CondBits::All, desc: "a -= b - cy", cycles: 4 }, // 0x98
    OpDef { mnemonic: "sbb c", size: 1, condbits: CondBits::All, desc: "a -= c - cy", cycles: 4 }, // 0x99
    OpDef { mnemonic: "sbb d", size: 1, condbits: CondBits::All, desc: "a -= d - cy", cycles: 4 }, // 0x9A
    OpDef { mnemonic: "sbb e", size: 1, condbits: CondBits::All, desc: "a -= e - cy", cycles: 4 }, // 0x9B
    OpDef { mnemonic: "sbb h", size: 1, condbits: CondBits::All, desc: "a -= h - cy", cycles: 4 }, // 0x9C
    OpDef { mnemonic: "sbb l", size: 1, condbits: CondBits::All, desc: "a -= l - cy", cycles: 4 }, // 0x9D
    OpDef { mnemonic: "sbb m", size: 1, condbits: CondBits::All, desc: "a -= (hl) - cy", cycles: 7 }, // 0x9E
    OpDef { mnemonic: "sbb a", size: 1, condbits: CondBits::All, desc: "a -= a - cy", cycles: 4 }, // 0x9F
    OpDef { mnemonic: "ana b", size: 1, condbits: CondBits::All, desc: "a &= b", cycles: 4 }, // 0xA0
    OpDef { mnemonic: "ana c", size: 1, condbits: CondBits::All, desc: "a &= c", cycles: 4 }, // 0xA1
    OpDef { mnemonic: "ana d", size: 1, condbits: CondBits::All, desc: "a &= d", cycles: 4 }, // 0xA2
    OpDef { mnemonic: "ana e", size: 1, condbits: CondBits::All, desc: "a &= e", cycles: 4 }, // 0xA3
    OpDef { mnemonic: "ana h", size: 1, condbits: CondBits::All, desc: "a &= h", cycles: 4 }, // 0xA4
    OpDef { mnemonic: "ana l", size: 1, condbits: CondBits::All, desc: "a &= l", cycles: 4 }, // 0xA5
    OpDef { mnemonic: "ana m", size: 1, condbits: CondBits::All, desc: "a &= (hl)", cycles: 7 }, // 0xA6
    OpDef { mnemonic: "ana a", size: 1, condbits: CondBits::All, desc: "a &= a", cycles: 4 }, // 0xA7
    OpDef { mnemonic: "xra b", size: 1, condbits: CondBits::All, desc: "a ^= b", cycles: 4 }, // 0xA8
    OpDef { mnemonic: "xra c", size: 1, condbits: CondBits::All, desc: "a ^= c", cycles: 4 }, // 0xA9
    OpDef { mnemonic: "xra d", size: 1, condbits: CondBits::All, desc: "a ^= d", cycles: 4 }, // 0xAA
    OpDef { mnemonic: "xra e", size: 1, condbits: CondBits::All, desc: "a ^= e", cycles: 4 }, // 0xAB
    OpDef { mnemonic: "xra h", size: 1, condbits: CondBits::All, desc: "a ^= h", cycles: 4 }, // 0xAC
    OpDef { mnemonic: "xra l", size: 1, condbits: CondBits::All, desc: "a ^= l", cycles: 4 }, // 0xAD
    OpDef { mnemonic: "xra m", size: 1, condbits: CondBits::All, desc: "a ^= (hl)", cycles: 7 }, // 0xAE
    OpDef { mnemonic: "xra a", size: 1, condbits: CondBits::All, desc: "a ^= a", cycles: 4 }, // 0xAF
    OpDef { mnemonic: "ora b", size: 1, condbits: CondBits::All, desc: "a |= b", cycles: 4 }, // 0xB0
    OpDef { mnemonic: "ora c", size: 1, condbits: CondBits::All, desc: "a |= c", cycles: 4 }, // 0xB1
    OpDef { mnemonic: "ora d", size: 1, condbits: CondBits::All, desc: "a |= d", cycles: 4 }, // 0xB2
    OpDef { mnemonic: "ora e", size: 1, condbits: CondBits::All, desc: "a |= e", cycles: 4 }, // 0xB3
    OpDef { mnemonic: "ora h", size: 1, condbits: CondBits::All, desc: "a |= h", cycles: 4 }, // 0xB4
    OpDef { mnemonic: "ora l", size: 1, condbits: CondBits::All, desc: "a |= l", cycles: 4 }, // 0xB5
    OpDef { mnemonic: "ora m", size: 1, condbits: CondBits::All, desc: "a |= (hl)", cycles: 7 }, // 0xB6
    OpDef { mnemonic: "ora a", size: 1, condbits: CondBits::All, desc: "a |= a", cycles: 4 }, // 0xB7
    OpDef { mnemonic: "cmp b", size: 1, condbits: CondBits::All, desc: "a - b", cycles: 4 }, // 0xB8
    OpDef { mnemonic: "cmp c", size: 1, condbits: CondBits::All, desc: "a - c", cycles: 4 }, // 0xB9
    OpDef { mnemonic: "cmp d", size: 1, condbits: CondBits::All, desc: "a - d", cycles: 4 }, // 0xBA
    OpDef { mnemonic: "cmp e", size: 1, condbits: CondBits::All, desc: "a - e", cycles: 4 }, // 0xBB
    OpDef { mnemonic: "cmp h", size: 1, condbits: CondBits::All, desc: "a - h", cycles: 4 }, // 0xBC
    OpDef { mnemonic: "cmp l", size: 1, condbits: CondBits::All, desc: "a - l", cycles: 4 }, // 0xBD
    OpDef { mnemonic: "cmp m", size: 1, condbits: CondBits::All, desc: "a - (hl)", cycles: 7 }, // 0xBE
    OpDef { mnemonic: "cmp a", size: 1, condbits: CondBits::All, desc: "a - a", cycles: 4 }, // 0xBF
    OpDef { mnemonic: "rnz", size: 1, condbits: CondBits::None, desc: "if nz, ret", cycles: 5 }, // 0xC0
    OpDef { mnemonic: "pop b", size: 1, condbits: CondBits::None, desc: "b = (sp+1); c = (sp); sp += 2", cycles: 10 }, // 0xC1
    OpDef { mnemonic: "jnz {:04x}", size: 3, condbits: CondBits::None, desc: "if nz, pc = adr", cycles: 10 }, // 0xC2
    OpDef { mnemonic: "jmp {:04x}", size: 3, condbits: CondBits::None, desc: "pc = adr", cycles: 10 }, // 0xC3
    OpDef { mnemonic: "cnz {:04x}", size: 3, condbits: CondBits::None, desc: "if nz, call adr", cycles: 11 }, // 0xC4
    OpDef { mnemonic: "push b", size: 1, condbits: CondBits::None, desc: "(sp-1) = b; (sp-2) = c; sp -= 2", cycles: 11 }, // 0xC5
    OpDef { mnemonic: "adi {:02x}", size: 2, condbits: CondBits::All, desc: "a += byte", cycles: 7 }, // 0xC6
    OpDef { mnemonic: "rst 0", size: 1, condbits: CondBits::None, desc: "call 0000", cycles: 11 }, // 0xC7
    OpDef { mnemonic: "rz", size: 1, condbits: CondBits::None, desc: "if z, ret", cycles: 5 }, // 0xC8
    OpDef { mnemonic: "ret", size: 1, condbits: CondBits::None, desc: "pc.lo = (sp); pc.hi = (sp+1); sp += 2", cycles: 10 }, // 0xC9
    OpDef { mnemonic: "jz {:04x}", size: 3, condbits: CondBits::None, desc: "if z, pc = adr", cycles: 10 }, // 0xCA
    OpDef { mnemonic: "*jmp {:04x}", size: 3, condbits: CondBits::None, desc: "pc = adr", cycles: 10 }, // 0xCB
    OpDef { mnemonic: "cz {:04x}", size: 3, condbits: CondBits::None, desc: "if z, call adr", cycles: 11 }, // 0xCC
    OpDef { mnemonic: "call {:04x}", size: 3, condbits: CondBits::None, desc: "(sp-1) = pc.hi; (sp-2) = pc.lo; sp -= 2; pc = adr", cycles: 17 }, // 0xCD
    OpDef { mnemonic: "aci {:02x}", size: 2, condbits: CondBits::All, desc: "a += byte + cy", cycles: 7 }, // 0xCE
    OpDef { mnemonic: "rst 1", size: 1, condbits: CondBits::None, desc: "call 0008", cycles: 11 }, // 0xCF
    OpDef { mnemonic: "rnc", size: 1, condbits: CondBits::None, desc: "if ncy, ret", cycles: 5 }, // 0xD0
    OpDef { mnemonic: "pop d", size: 1, condbits: CondBits::None, desc: "d = (sp+1); e = (sp); sp += 2", cycles: 10 }, // 0xD1
    OpDef { mnemonic: "jnc {:04x}", size: 3, condbits: CondBits::None, desc: "if ncy, pc = adr", cycles: 10 }, // 0xD2
    OpDef { mnemonic: "out {:02x}", size: 2, condbits: CondBits::None, desc: "device port byte = a", cycles: 10 }, // 0xD3
    OpDef { mnemonic: "cnc {:04x}", size: 3, condbits: CondBits::None, desc: "if ncy, call adr", cycles: 11 }, // 0xD4
    OpDef { mnemonic: "push d", size: 1, condbits: CondBits::None, desc: "(sp-1) = d; (sp-2) = e; sp -= 2", cycles: 11 }, // 0xD5
    OpDef { mnemonic: "sui {:02x}", size: 2, condbits: CondBits::All, desc: "a -= byte", cycles: 7 }, // 0xD6
    OpDef { mnemonic: "rst 2", size: 1, condbits: CondBits::None, desc: "call 0010", cycles: 11 }, // 0xD7
    OpDef { mnemonic: "rc", size: 1, condbits: CondBits::None, desc: "if cy, ret", cycles: 5 }, // 0xD8
    OpDef { mnemonic: "*ret", size: 1, condbits: CondBits::None, desc: "pc.lo = (sp); pc.hi = (sp+1); sp += 2", cycles: 10 }, // 0xD9
    OpDef { mnemonic: "jc {:04x}", size: 3, condbits: CondBits::None, desc: "if cy, pc = adr", cycles: 10 }, // 0xDA
    OpDef { mnemonic: "in {:02x}", size: 2, condbits: CondBits::None, desc: "a = device port byte", cycles: 10 }, // 0xDB
    OpDef { mnemonic: "cc {:04x}", size: 3, condbits: CondBits::None, desc: "if cy, call adr", cycles: 11 }, // 0xDC
    OpDef { mnemonic: "*call {:04x}", size: 3, condbits: CondBits::None, desc: "(sp-1) = pc.hi; (sp-2) = pc.lo; sp -= 2; pc = adr", cycles: 17 }, // 0xDD
    OpDef { mnemonic: "sbi {:02x}", size: 2, condbits: CondBits::All, desc: "a -= byte - cy", cycles: 7 }, // 0xDE
    OpDef { mnemonic: "rst 3", size: 1, condbits: CondBits::None, desc: "call 0018", cycles: 11 }, // 0xDF
    OpDef { mnemonic: "rpo", size: 1, condbits: CondBits::None, desc: "if po, ret", cycles: 5 }, // 0xE0
    OpDef { mnemonic: "pop h", size: 1, condbits: CondBits::None, desc: "h = (sp+1); l = (sp); sp += 2", cycles: 10 }, // 0xE1
    OpDef { mnemonic: "jpo {:04x}", size: 3, condbits: CondBits::None, desc: "if po, pc = adr", cycles: 10 }, // 0xE2
    OpDef { mnemonic: "xthl", size: 1, condbits: CondBits::None, desc: "swap l,(sp); swap h,(sp+1)", cycles: 18 }, // 0xE3
    OpDef { mnemonic: "cpo {:04x}", size: 3, condbits: CondBits::None, desc: "if po, call adr", cycles: 11 }, // 0xE4
    OpDef { mnemonic: "push h", size: 1, condbits: CondBits::None, desc: "(sp-1) = h; (sp-2) = l; sp -= 2", cycles: 11 }, // 0xE5
    OpDef { mnemonic: "ani {:02x}", size: 2, condbits: CondBits::All, desc: "a &= byte", cycles: 7 }, // 0xE6
    OpDef { mnemonic: "rst 4", size: 1, condbits: CondBits::None, desc: "call 0020", cycles: 11 }, // 0xE7
    OpDef { mnemonic: "rpe", size: 1, condbits: CondBits::None, desc: "if pe, ret", cycles: 5 }, // 0xE8
    OpDef { mnemonic: "pchl", size: 1, condbits: CondBits::None, desc: "pc.hi = h; pc.lo = l", cycles: 5 }, // 0xE9
    OpDef { mnemonic: "jpe {:04x}", size: 3, condbits: CondBits::None, desc: "if pe, pc = adr", cycles: 10 }, // 0xEA
    OpDef { mnemonic: "xchg", size: 1, condbits: CondBits::None, desc: "swap h,d; swap l,e", cycles: 4 }, // 0xEB
    OpDef { mnemonic: "cpe {:04x}", size: 3, condbits: CondBits::None, desc: "if pe, call adr", cycles: 11 }, // 0xEC
    OpDef { mnemonic: "*call {:04x}", size: 3, condbits: CondBits::None, desc: "(sp-1) = pc.hi; (sp-2) = pc.lo; sp -= 2; pc = adr", cycles: 17 }, // 0xED
    OpDef { mnemonic: "xri {:02x}", size: 2, condbits: CondBits::All, desc: "a ^= byte", cycles: 7 }, // 0xEE
    OpDef { mnemonic: "rst 5", size: 1, condbits: CondBits::None, desc: "call 0028", cycles: 11 }, // 0xEF
    OpDef { mnemonic: "rp", size: 1, condbits: CondBits::None, desc: "if p, ret", cycles: 5 }, // 0xF0
    OpDef { mnemonic: "pop psw", size: 1, condbits: CondBits::None, desc: "condbits = (sp); a = (sp+1); sp += 2", cycles: 10 }, // 0xF1
    OpDef { mnemonic: "jp {:04x}", size: 3, condbits: CondBits::None, desc: "if p, pc = adr", cycles: 10 }, // 0xF2
    OpDef { mnemonic: "di", size: 1, condbits: CondBits::None, desc: "disable interrupt flip-flop", cycles: 4 }, // 0xF3
    OpDef { mnemonic: "cp {:04x}", size: 3, condbits: CondBits::None, desc: "if p, call adr", cycles: 11 }, // 0xF4
    OpDef { mnemonic: "push psw", size: 1, condbits: CondBits::None, desc: "(sp-2) = condbits; (sp-1) = a; sp -= 2", cycles: 11 }, // 0xF5
    OpDef { mnemonic: "ori {:02x}", size: 2, condbits: CondBits::All, desc: "a |= byte", cycles: 7 }, // 0xF6
    OpDef { mnemonic: "rst 6", size: 1, condbits: CondBits::None, desc: "call 0030", cycles: 11 }, // 0xF7
    OpDef { mnemonic: "rm", size: 1, condbits: CondBits::None, desc: "if m, ret", cycles: 5 }, // 0xF8
    OpDef { mnemonic: "sphl", size: 1, condbits: CondBits::None, desc: "sp = hl", cycles: 5 }, // 0xF9
    OpDef { mnemonic: "jm {:04x}", size: 3, condbits: CondBits::None, desc: "if m, pc = adr", cycles: 10 }, // 0xFA
    OpDef { mnemonic: "ei", size: 1, condbits: CondBits::None, desc: "enable interrupt flip-flop", cycles: 4 }, // 0xFB
    OpDef { mnemonic: "cm {:04x}", size: 3, condbits: CondBits::None, desc: "if m, call adr", cycles: 11 }, // 0xFC
    OpDef { mnemonic: "*call {:04x}", size: 3, condbits: CondBits::None, desc: "(sp-1) = pc.hi; (sp-2) = pc.lo; sp -= 2; pc = adr", cycles: 17 }, // 0xFD
    OpDef { mnemonic: "cpi {:02x}", size: 2, condbits: CondBits::All, desc: "a - byte", cycles: 7 }, // 0xFE
    OpDef { mnemonic: "rst 7", size: 1, condbits: CondBits::None, desc: "call 0038", cycles: 11 }, // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_opcode() {
        assert_eq!(OPCODE_TABLE[0x00].mnemonic, "nop");
        assert_eq!(OPCODE_TABLE[0xC3].mnemonic, "jmp {:04x}");
        assert_eq!(OPCODE_TABLE[0x76].mnemonic, "hlt");
    }

    #[test]
    fn undocumented_duplicates_match_canonical_form() {
        for dup in [0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38] {
            assert_eq!(OPCODE_TABLE[dup].mnemonic, "nop");
            assert_eq!(OPCODE_TABLE[dup].cycles, OPCODE_TABLE[0x00].cycles);
        }
        assert_eq!(OPCODE_TABLE[0xCB].mnemonic, "*jmp {:04x}");
        assert_eq!(OPCODE_TABLE[0xD9].mnemonic, "*ret");
        for dup in [0xDD, 0xED, 0xFD] {
            assert_eq!(OPCODE_TABLE[dup].mnemonic, "*call {:04x}");
        }
    }

    #[test]
    fn sizes_are_one_two_or_three() {
        for op in OPCODE_TABLE.iter() {
            assert!(op.size >= 1 && op.size <= 3);
        }
    }

    #[test]
    fn condbits_label_matches_original_strings() {
        assert_eq!(CondBits::None.as_str(), "none");
        assert_eq!(CondBits::Cy.as_str(), "cy");
        assert_eq!(CondBits::Szap.as_str(), "z,s,p,ac");
        assert_eq!(CondBits::All.as_str(), "z,s,p,ac,cy");
    }

    /// Entries that are easy to transcribe wrong because a neighboring row
    /// (`dad d`/`dad h`, `mov d,b` vs. `mov b,b`, `xthl`/`xchg`) looks almost
    /// identical: cross-check the full register set for self-consistency.
    #[test]
    fn register_pair_and_exchange_entries_are_not_copy_paste_errors() {
        assert_eq!(OPCODE_TABLE[0x09].desc, "hl += bc");
        assert_eq!(OPCODE_TABLE[0x19].desc, "hl += de");
        assert_eq!(OPCODE_TABLE[0x29].desc, "hl += hl");
        assert_eq!(OPCODE_TABLE[0x39].mnemonic, "dad sp");
        assert_eq!(OPCODE_TABLE[0x39].desc, "hl += sp");

        assert_eq!(OPCODE_TABLE[0x50].mnemonic, "mov d,b");
        assert_eq!(OPCODE_TABLE[0x50].desc, "d = b");

        assert_eq!(OPCODE_TABLE[0xE3].mnemonic, "xthl");
        assert_eq!(OPCODE_TABLE[0xEB].mnemonic, "xchg");
    }

    #[test]
    fn daa_and_cmc_affect_documented_condition_bits() {
        assert_eq!(OPCODE_TABLE[0x27].mnemonic, "daa");
        assert_eq!(OPCODE_TABLE[0x27].condbits, CondBits::All);
        assert_ne!(OPCODE_TABLE[0x27].desc, "todo");

        assert_eq!(OPCODE_TABLE[0x3F].mnemonic, "cmc");
        assert_eq!(OPCODE_TABLE[0x3F].condbits, CondBits::Cy);
    }
}

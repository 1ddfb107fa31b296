//! `step` entry point: interrupt recognition ordering and the 256-way
//! opcode dispatch.
//!
//! # References
//! - adc_8080_cpu.c: `adc_8080_cpu_step`, `exec_next`

use super::Cpu;
use crate::bus::Bus;
use crate::table::OPCODE_TABLE;

/// Recognize a pending interrupt, or fetch-and-execute the next
/// instruction, then return the number of cycles consumed.
///
/// Interrupt recognition happens only when all of the following hold:
/// - an interrupt is pending (`request_interrupt` was called),
/// - the INTE flip-flop is enabled, and
/// - the previous instruction wasn't `EI` (the one-step delay).
///
/// When recognized, `pc` is left untouched — the interrupt opcode is not
/// read from memory — and `interrupt_pending`/`inte`/`halted` are cleared.
/// Otherwise, if the CPU isn't halted, the next opcode byte is fetched from
/// `pc` and dispatched normally.
pub(super) fn step(cpu: &mut Cpu, bus: &mut dyn Bus) -> u8 {
    if cpu.interrupt_pending && cpu.inte && !cpu.interrupt_delay {
        cpu.interrupt_pending = false;
        cpu.inte = false;
        cpu.halted = false;

        let opcode = cpu.interrupt_opcode;
        exec_next(cpu, bus, opcode)
    } else if !cpu.halted {
        let opcode = cpu.fetch_byte(bus);
        exec_next(cpu, bus, opcode)
    } else {
        0
    }
}

fn exec_next(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u8 {
    let base_cycles = OPCODE_TABLE[opcode as usize].cycles as u64;
    cpu.cycles += base_cycles;
    let before_extra = cpu.cycles;

    if cpu.interrupt_delay {
        cpu.interrupt_delay = false;
    }

    match opcode {
        // Carry bit ops
        0x37 => cpu.flag_c = true, // STC
        0x3F => cpu.flag_c = !cpu.flag_c, // CMC

        // Single register ops
        0x04 => cpu.b = cpu.op_inr(cpu.b), // INR B
        0x05 => cpu.b = cpu.op_dcr(cpu.b), // DCR B
        0x0C => cpu.c = cpu.op_inr(cpu.c), // INR C
        0x0D => cpu.c = cpu.op_dcr(cpu.c), // DCR C
        0x14 => cpu.d = cpu.op_inr(cpu.d), // INR D
        0x15 => cpu.d = cpu.op_dcr(cpu.d), // DCR D
        0x1C => cpu.e = cpu.op_inr(cpu.e), // INR E
        0x1D => cpu.e = cpu.op_dcr(cpu.e), // DCR E
        0x24 => cpu.h = cpu.op_inr(cpu.h), // INR H
        0x25 => cpu.h = cpu.op_dcr(cpu.h), // DCR H
        0x2C => cpu.l = cpu.op_inr(cpu.l), // INR L
        0x2D => cpu.l = cpu.op_dcr(cpu.l), // DCR L
        0x34 => {
            // INR M
            let addr = cpu.hl();
            let val = bus.read_byte(addr);
            let res = cpu.op_inr(val);
            bus.write_byte(addr, res);
        }
        0x35 => {
            // DCR M
            let addr = cpu.hl();
            let val = bus.read_byte(addr);
            let res = cpu.op_dcr(val);
            bus.write_byte(addr, res);
        }
        0x3C => cpu.a = cpu.op_inr(cpu.a), // INR A
        0x3D => cpu.a = cpu.op_dcr(cpu.a), // DCR A
        0x2F => cpu.a = !cpu.a,            // CMA
        0x27 => cpu.op_daa(),              // DAA

        // NOP and undocumented duplicate NOPs
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => {}

        // Data transfer ops (MOV)
        0x40 => {} // MOV B,B
        0x41 => cpu.b = cpu.c,
        0x42 => cpu.b = cpu.d,
        0x43 => cpu.b = cpu.e,
        0x44 => cpu.b = cpu.h,
        0x45 => cpu.b = cpu.l,
        0x46 => cpu.b = bus.read_byte(cpu.hl()),
        0x47 => cpu.b = cpu.a,
        0x48 => cpu.c = cpu.b,
        0x49 => {} // MOV C,C
        0x4A => cpu.c = cpu.d,
        0x4B => cpu.c = cpu.e,
        0x4C => cpu.c = cpu.h,
        0x4D => cpu.c = cpu.l,
        0x4E => cpu.c = bus.read_byte(cpu.hl()),
        0x4F => cpu.c = cpu.a,
        0x50 => cpu.d = cpu.b,
        0x51 => cpu.d = cpu.c,
        0x52 => {} // MOV D,D
        0x53 => cpu.d = cpu.e,
        0x54 => cpu.d = cpu.h,
        0x55 => cpu.d = cpu.l,
        0x56 => cpu.d = bus.read_byte(cpu.hl()),
        0x57 => cpu.d = cpu.a,
        0x58 => cpu.e = cpu.b,
        0x59 => cpu.e = cpu.c,
        0x5A => cpu.e = cpu.d,
        0x5B => {} // MOV E,E
        0x5C => cpu.e = cpu.h,
        0x5D => cpu.e = cpu.l,
        0x5E => cpu.e = bus.read_byte(cpu.hl()),
        0x5F => cpu.e = cpu.a,
        0x60 => cpu.h = cpu.b,
        0x61 => cpu.h = cpu.c,
        0x62 => cpu.h = cpu.d,
        0x63 => cpu.h = cpu.e,
        0x64 => {} // MOV H,H
        0x65 => cpu.h = cpu.l,
        0x66 => cpu.h = bus.read_byte(cpu.hl()),
        0x67 => cpu.h = cpu.a,
        0x68 => cpu.l = cpu.b,
        0x69 => cpu.l = cpu.c,
        0x6A => cpu.l = cpu.d,
        0x6B => cpu.l = cpu.e,
        0x6C => cpu.l = cpu.h,
        0x6D => {} // MOV L,L
        0x6E => cpu.l = bus.read_byte(cpu.hl()),
        0x6F => cpu.l = cpu.a,
        0x70 => bus.write_byte(cpu.hl(), cpu.b),
        0x71 => bus.write_byte(cpu.hl(), cpu.c),
        0x72 => bus.write_byte(cpu.hl(), cpu.d),
        0x73 => bus.write_byte(cpu.hl(), cpu.e),
        0x74 => bus.write_byte(cpu.hl(), cpu.h),
        0x75 => bus.write_byte(cpu.hl(), cpu.l),
        0x77 => bus.write_byte(cpu.hl(), cpu.a),
        0x78 => cpu.a = cpu.b,
        0x79 => cpu.a = cpu.c,
        0x7A => cpu.a = cpu.d,
        0x7B => cpu.a = cpu.e,
        0x7C => cpu.a = cpu.h,
        0x7D => cpu.a = cpu.l,
        0x7E => cpu.a = bus.read_byte(cpu.hl()),
        0x7F => {} // MOV A,A

        // Register/memory to accumulator ops
        0x80 => cpu.op_add(cpu.b, false),
        0x81 => cpu.op_add(cpu.c, false),
        0x82 => cpu.op_add(cpu.d, false),
        0x83 => cpu.op_add(cpu.e, false),
        0x84 => cpu.op_add(cpu.h, false),
        0x85 => cpu.op_add(cpu.l, false),
        0x86 => {
            let val = bus.read_byte(cpu.hl());
            cpu.op_add(val, false);
        }
        0x87 => cpu.op_add(cpu.a, false),
        0x88 => cpu.op_add(cpu.b, cpu.flag_c),
        0x89 => cpu.op_add(cpu.c, cpu.flag_c),
        0x8A => cpu.op_add(cpu.d, cpu.flag_c),
        0x8B => cpu.op_add(cpu.e, cpu.flag_c),
        0x8C => cpu.op_add(cpu.h, cpu.flag_c),
        0x8D => cpu.op_add(cpu.l, cpu.flag_c),
        0x8E => {
            let val = bus.read_byte(cpu.hl());
            cpu.op_add(val, cpu.flag_c);
        }
        0x8F => cpu.op_add(cpu.a, cpu.flag_c),
        0x90 => cpu.op_sub(cpu.b, false),
        0x91 => cpu.op_sub(cpu.c, false),
        0x92 => cpu.op_sub(cpu.d, false),
        0x93 => cpu.op_sub(cpu.e, false),
        0x94 => cpu.op_sub(cpu.h, false),
        0x95 => cpu.op_sub(cpu.l, false),
        0x96 => {
            let val = bus.read_byte(cpu.hl());
            cpu.op_sub(val, false);
        }
        0x97 => cpu.op_sub(cpu.a, false),
        0x98 => cpu.op_sub(cpu.b, cpu.flag_c),
        0x99 => cpu.op_sub(cpu.c, cpu.flag_c),
        0x9A => cpu.op_sub(cpu.d, cpu.flag_c),
        0x9B => cpu.op_sub(cpu.e, cpu.flag_c),
        0x9C => cpu.op_sub(cpu.h, cpu.flag_c),
        0x9D => cpu.op_sub(cpu.l, cpu.flag_c),
        0x9E => {
            let val = bus.read_byte(cpu.hl());
            cpu.op_sub(val, cpu.flag_c);
        }
        0x9F => cpu.op_sub(cpu.a, cpu.flag_c),
        0xA0 => cpu.op_ana(cpu.b),
        0xA1 => cpu.op_ana(cpu.c),
        0xA2 => cpu.op_ana(cpu.d),
        0xA3 => cpu.op_ana(cpu.e),
        0xA4 => cpu.op_ana(cpu.h),
        0xA5 => cpu.op_ana(cpu.l),
        0xA6 => {
            let val = bus.read_byte(cpu.hl());
            cpu.op_ana(val);
        }
        0xA7 => cpu.op_ana(cpu.a),
        0xA8 => cpu.op_xra(cpu.b),
        0xA9 => cpu.op_xra(cpu.c),
        0xAA => cpu.op_xra(cpu.d),
        0xAB => cpu.op_xra(cpu.e),
        0xAC => cpu.op_xra(cpu.h),
        0xAD => cpu.op_xra(cpu.l),
        0xAE => {
            let val = bus.read_byte(cpu.hl());
            cpu.op_xra(val);
        }
        0xAF => cpu.op_xra(cpu.a),
        0xB0 => cpu.op_ora(cpu.b),
        0xB1 => cpu.op_ora(cpu.c),
        0xB2 => cpu.op_ora(cpu.d),
        0xB3 => cpu.op_ora(cpu.e),
        0xB4 => cpu.op_ora(cpu.h),
        0xB5 => cpu.op_ora(cpu.l),
        0xB6 => {
            let val = bus.read_byte(cpu.hl());
            cpu.op_ora(val);
        }
        0xB7 => cpu.op_ora(cpu.a),
        0xB8 => cpu.op_cmp(cpu.b),
        0xB9 => cpu.op_cmp(cpu.c),
        0xBA => cpu.op_cmp(cpu.d),
        0xBB => cpu.op_cmp(cpu.e),
        0xBC => cpu.op_cmp(cpu.h),
        0xBD => cpu.op_cmp(cpu.l),
        0xBE => {
            let val = bus.read_byte(cpu.hl());
            cpu.op_cmp(val);
        }
        0xBF => cpu.op_cmp(cpu.a),

        // Rotate accumulator ops
        0x07 => cpu.op_rlc(),
        0x0F => cpu.op_rrc(),
        0x17 => cpu.op_ral(),
        0x1F => cpu.op_rar(),

        // Register pair ops
        0xC5 => {
            let bc = cpu.bc();
            cpu.push_word(bus, bc);
        }
        0xD5 => {
            let de = cpu.de();
            cpu.push_word(bus, de);
        }
        0xE5 => {
            let hl = cpu.hl();
            cpu.push_word(bus, hl);
        }
        0xF5 => cpu.op_push_psw(bus),
        0xC1 => {
            let w = cpu.pop_word(bus);
            cpu.set_bc(w);
        }
        0xD1 => {
            let w = cpu.pop_word(bus);
            cpu.set_de(w);
        }
        0xE1 => {
            let w = cpu.pop_word(bus);
            cpu.set_hl(w);
        }
        0xF1 => cpu.op_pop_psw(bus),
        0x09 => cpu.op_dad(cpu.bc()),
        0x19 => cpu.op_dad(cpu.de()),
        0x29 => cpu.op_dad(cpu.hl()),
        0x39 => cpu.op_dad(cpu.sp),
        0x03 => cpu.set_bc(cpu.bc().wrapping_add(1)),
        0x13 => cpu.set_de(cpu.de().wrapping_add(1)),
        0x23 => cpu.set_hl(cpu.hl().wrapping_add(1)),
        0x33 => cpu.sp = cpu.sp.wrapping_add(1),
        0x0B => cpu.set_bc(cpu.bc().wrapping_sub(1)),
        0x1B => cpu.set_de(cpu.de().wrapping_sub(1)),
        0x2B => cpu.set_hl(cpu.hl().wrapping_sub(1)),
        0x3B => cpu.sp = cpu.sp.wrapping_sub(1),
        0xEB => cpu.op_xchg(),
        0xE3 => cpu.op_xthl(bus),
        0xF9 => cpu.sp = cpu.hl(),

        // Immediate ops
        0x01 => {
            let w = cpu.fetch_word(bus);
            cpu.set_bc(w);
        }
        0x11 => {
            let w = cpu.fetch_word(bus);
            cpu.set_de(w);
        }
        0x21 => {
            let w = cpu.fetch_word(bus);
            cpu.set_hl(w);
        }
        0x31 => cpu.sp = cpu.fetch_word(bus),
        0x06 => cpu.b = cpu.fetch_byte(bus),
        0x0E => cpu.c = cpu.fetch_byte(bus),
        0x16 => cpu.d = cpu.fetch_byte(bus),
        0x1E => cpu.e = cpu.fetch_byte(bus),
        0x26 => cpu.h = cpu.fetch_byte(bus),
        0x2E => cpu.l = cpu.fetch_byte(bus),
        0x36 => {
            let val = cpu.fetch_byte(bus);
            bus.write_byte(cpu.hl(), val);
        }
        0x3E => cpu.a = cpu.fetch_byte(bus),
        0xC6 => {
            let val = cpu.fetch_byte(bus);
            cpu.op_add(val, false);
        }
        0xCE => {
            let val = cpu.fetch_byte(bus);
            cpu.op_add(val, cpu.flag_c);
        }
        0xD6 => {
            let val = cpu.fetch_byte(bus);
            cpu.op_sub(val, false);
        }
        0xDE => {
            let val = cpu.fetch_byte(bus);
            cpu.op_sub(val, cpu.flag_c);
        }
        0xE6 => {
            let val = cpu.fetch_byte(bus);
            cpu.op_ana(val);
        }
        0xEE => {
            let val = cpu.fetch_byte(bus);
            cpu.op_xra(val);
        }
        0xF6 => {
            let val = cpu.fetch_byte(bus);
            cpu.op_ora(val);
        }
        0xFE => {
            let val = cpu.fetch_byte(bus);
            cpu.op_cmp(val);
        }

        // Direct addressing ops
        0x02 => bus.write_byte(cpu.bc(), cpu.a),
        0x12 => bus.write_byte(cpu.de(), cpu.a),
        0x32 => {
            let addr = cpu.fetch_word(bus);
            bus.write_byte(addr, cpu.a);
        }
        0x0A => cpu.a = bus.read_byte(cpu.bc()),
        0x1A => cpu.a = bus.read_byte(cpu.de()),
        0x3A => {
            let addr = cpu.fetch_word(bus);
            cpu.a = bus.read_byte(addr);
        }
        0x22 => {
            let addr = cpu.fetch_word(bus);
            let l = cpu.l;
            let h = cpu.h;
            bus.write_byte(addr, l);
            bus.write_byte(addr.wrapping_add(1), h);
        }
        0x2A => {
            let addr = cpu.fetch_word(bus);
            let lo = bus.read_byte(addr);
            let hi = bus.read_byte(addr.wrapping_add(1));
            cpu.set_hl(u16::from_le_bytes([lo, hi]));
        }

        // Jump ops
        0xE9 => cpu.pc = cpu.hl(),
        0xC2 => {
            let addr = cpu.fetch_word(bus);
            cpu.op_jmp_cond(addr, !cpu.flag_z);
        }
        0xC3 | 0xCB => cpu.pc = cpu.fetch_word(bus), // JMP, *JMP
        0xCA => {
            let addr = cpu.fetch_word(bus);
            cpu.op_jmp_cond(addr, cpu.flag_z);
        }
        0xD2 => {
            let addr = cpu.fetch_word(bus);
            cpu.op_jmp_cond(addr, !cpu.flag_c);
        }
        0xDA => {
            let addr = cpu.fetch_word(bus);
            cpu.op_jmp_cond(addr, cpu.flag_c);
        }
        0xE2 => {
            let addr = cpu.fetch_word(bus);
            cpu.op_jmp_cond(addr, !cpu.flag_p);
        }
        0xEA => {
            let addr = cpu.fetch_word(bus);
            cpu.op_jmp_cond(addr, cpu.flag_p);
        }
        0xF2 => {
            let addr = cpu.fetch_word(bus);
            cpu.op_jmp_cond(addr, !cpu.flag_s);
        }
        0xFA => {
            let addr = cpu.fetch_word(bus);
            cpu.op_jmp_cond(addr, cpu.flag_s);
        }

        // Call ops
        0xCD | 0xDD | 0xED | 0xFD => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call(bus, addr);
        }
        0xDC => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call_cond(bus, addr, cpu.flag_c);
        }
        0xD4 => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call_cond(bus, addr, !cpu.flag_c);
        }
        0xCC => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call_cond(bus, addr, cpu.flag_z);
        }
        0xC4 => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call_cond(bus, addr, !cpu.flag_z);
        }
        0xF4 => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call_cond(bus, addr, !cpu.flag_s);
        }
        0xFC => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call_cond(bus, addr, cpu.flag_s);
        }
        0xEC => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call_cond(bus, addr, cpu.flag_p);
        }
        0xE4 => {
            let addr = cpu.fetch_word(bus);
            cpu.op_call_cond(bus, addr, !cpu.flag_p);
        }

        // Return ops
        0xC9 | 0xD9 => cpu.pc = cpu.pop_word(bus), // RET, *RET
        0xD8 => cpu.op_ret_cond(bus, cpu.flag_c),
        0xD0 => cpu.op_ret_cond(bus, !cpu.flag_c),
        0xC8 => cpu.op_ret_cond(bus, cpu.flag_z),
        0xC0 => cpu.op_ret_cond(bus, !cpu.flag_z),
        0xF8 => cpu.op_ret_cond(bus, cpu.flag_s),
        0xF0 => cpu.op_ret_cond(bus, !cpu.flag_s),
        0xE8 => cpu.op_ret_cond(bus, cpu.flag_p),
        0xE0 => cpu.op_ret_cond(bus, !cpu.flag_p),

        // RST ops
        0xC7 => cpu.op_call(bus, 0x00),
        0xCF => cpu.op_call(bus, 0x08),
        0xD7 => cpu.op_call(bus, 0x10),
        0xDF => cpu.op_call(bus, 0x18),
        0xE7 => cpu.op_call(bus, 0x20),
        0xEF => cpu.op_call(bus, 0x28),
        0xF7 => cpu.op_call(bus, 0x30),
        0xFF => cpu.op_call(bus, 0x38),

        // INTE flip-flop ops
        0xFB => {
            cpu.inte = true;
            cpu.interrupt_delay = true;
        }
        0xF3 => cpu.inte = false,

        // Device read/write ops
        0xDB => {
            let port = cpu.fetch_byte(bus);
            cpu.a = bus.read_device(port);
        }
        0xD3 => {
            let port = cpu.fetch_byte(bus);
            bus.write_device(port, cpu.a);
        }

        // HLT
        0x76 => cpu.halted = true,

        _ => unreachable!("opcode {:#04x} is handled by every arm above", opcode),
    }

    (base_cycles + (cpu.cycles - before_extra)) as u8
}

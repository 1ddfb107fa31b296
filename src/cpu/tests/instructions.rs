//! Tests for individual instruction families beyond the ALU helper tests in
//! `cpu/helpers.rs`: register transfers, register-pair ops, stack ops, and
//! control flow.

use super::cpu_with_program;
use crate::bus::{Bus, FlatMemoryBus};
use crate::cpu::Cpu;

#[test]
fn mvi_and_mov_move_bytes_between_registers() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x3E, 0x42, 0x47]); // MVI A,0x42; MOV B,A
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.b, 0x42);
}

#[test]
fn mov_through_memory_uses_hl() {
    let mut bus = FlatMemoryBus::new();
    bus.load(0x0000, &[0x77]); // MOV M,A
    let mut cpu = Cpu::new();
    cpu.a = 0x99;
    cpu.set_hl(0x3000);
    cpu.step(&mut bus);
    assert_eq!(bus.read_byte(0x3000), 0x99);
}

#[test]
fn lxi_loads_register_pair_little_endian() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x21, 0x34, 0x12]); // LXI H,0x1234
    cpu.step(&mut bus);
    assert_eq!(cpu.hl(), 0x1234);
}

#[test]
fn push_pop_round_trips_through_the_stack() {
    let mut bus = FlatMemoryBus::new();
    bus.load(0x0000, &[0xC5, 0xD1]); // PUSH B; POP D
    let mut cpu = Cpu::new();
    cpu.sp = 0x2000;
    cpu.set_bc(0xBEEF);
    cpu.step(&mut bus); // PUSH B
    assert_eq!(cpu.sp, 0x1FFE);
    cpu.step(&mut bus); // POP D
    assert_eq!(cpu.de(), 0xBEEF);
    assert_eq!(cpu.sp, 0x2000);
}

#[test]
fn inx_dcx_wrap_at_pair_boundaries() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x03]); // INX B
    cpu.set_bc(0xFFFF);
    cpu.step(&mut bus);
    assert_eq!(cpu.bc(), 0x0000);
}

#[test]
fn conditional_jump_taken_and_not_taken() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xCA, 0x00, 0x10]); // JZ 0x1000
    cpu.flag_z = false;
    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 3); // not taken, falls through

    let (mut cpu, mut bus) = cpu_with_program(&[0xCA, 0x00, 0x10]);
    cpu.flag_z = true;
    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x1000);
}

#[test]
fn conditional_call_charges_extra_cycles_only_when_taken() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xC4, 0x00, 0x10]); // CNZ 0x1000
    cpu.sp = 0x2000;
    cpu.flag_z = true; // not taken
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 11);
    assert_eq!(cpu.pc, 3);

    let (mut cpu, mut bus) = cpu_with_program(&[0xC4, 0x00, 0x10]);
    cpu.sp = 0x2000;
    cpu.flag_z = false; // taken
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 17);
    assert_eq!(cpu.pc, 0x1000);
}

#[test]
fn rst_pushes_return_address_and_jumps_to_fixed_vector() {
    let mut bus = FlatMemoryBus::new();
    bus.load(0x0010, &[0xDF]); // RST 3 at address 0x10
    let mut cpu = Cpu::new();
    cpu.pc = 0x0010;
    cpu.sp = 0x2000;
    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0018);
    assert_eq!(cpu.sp, 0x1FFE);
    assert_eq!(bus.read_byte(0x1FFE), 0x11); // return address = 0x0011
}

#[test]
fn xchg_swaps_de_and_hl() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xEB]); // XCHG
    cpu.set_de(0x1111);
    cpu.set_hl(0x2222);
    cpu.step(&mut bus);
    assert_eq!(cpu.de(), 0x2222);
    assert_eq!(cpu.hl(), 0x1111);
}

#[test]
fn in_out_reach_the_device_bus() {
    struct Echo {
        memory: FlatMemoryBus,
        last_write: Option<(u8, u8)>,
    }
    impl Bus for Echo {
        fn read_byte(&mut self, addr: u16) -> u8 {
            self.memory.read_byte(addr)
        }
        fn write_byte(&mut self, addr: u16, val: u8) {
            self.memory.write_byte(addr, val)
        }
        fn read_device(&mut self, port: u8) -> u8 {
            port.wrapping_mul(2)
        }
        fn write_device(&mut self, port: u8, val: u8) {
            self.last_write = Some((port, val));
        }
    }

    let mut memory = FlatMemoryBus::new();
    memory.load(0x0000, &[0xDB, 0x05, 0xD3, 0x07]); // IN 0x05; OUT 0x07
    let mut bus = Echo {
        memory,
        last_write: None,
    };
    let mut cpu = Cpu::new();
    cpu.step(&mut bus); // IN 0x05
    assert_eq!(cpu.a, 0x0A);
    cpu.step(&mut bus); // OUT 0x07
    assert_eq!(bus.last_write, Some((0x07, 0x0A)));
}

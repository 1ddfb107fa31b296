//! Black-box integration tests against the crate's public API: boot a CPU,
//! load a small program, and check the end-to-end result.

use i8080_core::{Bus, Cpu, Disassembly, FlatMemoryBus};

#[test]
fn runs_a_short_program_to_completion() {
    let mut bus = FlatMemoryBus::new();
    // mvi a,0x05; mvi b,0x03; add b; hlt
    bus.load(0x0000, &[0x3E, 0x05, 0x06, 0x03, 0x80, 0x76]);

    let mut cpu = Cpu::new();
    while !cpu.halted {
        cpu.step(&mut bus);
    }

    assert_eq!(cpu.a, 0x08);
    assert!(cpu.flag_z == false);
}

#[test]
fn a_fibonacci_style_loop_produces_the_expected_accumulator() {
    // b counts down from 5, accumulating 1+2+3+4+5 = 15 in a via repeated add.
    let mut bus = FlatMemoryBus::new();
    let program = [
        0x3E, 0x00, // mvi a,0
        0x06, 0x05, // mvi b,5
        // loop:
        0x80, // add b (addr 0x0004)
        0x05, // dcr b
        0xC2, 0x04, 0x00, // jnz loop
        0x76, // hlt
    ];
    bus.load(0x0000, &program);

    let mut cpu = Cpu::new();
    let mut guard = 0;
    while !cpu.halted && guard < 1000 {
        cpu.step(&mut bus);
        guard += 1;
    }

    assert_eq!(cpu.a, 15);
    assert!(cpu.halted);
}

#[test]
fn disassembly_and_interpretation_agree_on_instruction_length() {
    let program = [0x21, 0x00, 0x20, 0x7E, 0x76]; // lxi h,0x2000; mov a,m; hlt
    let mut bus = FlatMemoryBus::new();
    bus.load(0x0000, &program);
    bus.write_byte(0x2000, 0x99);

    let dasm = Disassembly::build(&program, program.len(), 0x0000);
    assert_eq!(dasm.len(), 3);

    let mut cpu = Cpu::new();
    while !cpu.halted {
        cpu.step(&mut bus);
    }
    assert_eq!(cpu.a, 0x99);
}

#[test]
fn print_state_reports_final_register_contents() {
    let mut bus = FlatMemoryBus::new();
    bus.load(0x0000, &[0x3E, 0x7B, 0x76]); // mvi a,0x7B; hlt
    let mut cpu = Cpu::new();
    while !cpu.halted {
        cpu.step(&mut bus);
    }

    let mut out = Vec::new();
    cpu.print_state(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("a:0x7b"));
    assert!(text.contains("halted: 1"));
}

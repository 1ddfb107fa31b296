//! Interrupt recognition, the post-`EI` delay, and `HLT` interaction.

use super::cpu_with_program;

#[test]
fn pending_interrupt_is_ignored_while_inte_is_clear() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x00, 0x00]); // NOP; NOP
    cpu.inte = false;
    cpu.request_interrupt(0xFF); // RST 7
    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 1); // ordinary NOP ran, interrupt still pending
    assert!(cpu.interrupt_pending);
}

#[test]
fn recognized_interrupt_dispatches_opcode_without_a_pc_fetch() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x00, 0x00]);
    cpu.inte = true;
    cpu.sp = 0x2000;
    cpu.request_interrupt(0xFF); // RST 7 -> jumps to 0x0038
    let pc_before = cpu.pc;
    cpu.step(&mut bus);
    assert_eq!(cpu.pc, 0x0038);
    assert!(!cpu.interrupt_pending);
    assert!(!cpu.inte);
    // the pushed return address is the PC as it stood before recognition,
    // since the interrupt opcode is never fetched from program memory.
    assert_eq!(bus.read_byte(cpu.sp), pc_before as u8);
}

#[test]
fn ei_suppresses_interrupt_recognition_for_exactly_one_step() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xFB, 0x00, 0x00]); // EI; NOP; NOP
    cpu.inte = false;
    cpu.request_interrupt(0xFF);
    cpu.step(&mut bus); // EI: sets inte, arms interrupt_delay
    assert!(cpu.inte);
    assert!(cpu.interrupt_delay);

    cpu.step(&mut bus); // interrupt_delay suppresses recognition this step
    assert_eq!(cpu.pc, 2); // ran the NOP normally, did not jump
    assert!(cpu.interrupt_pending);
    assert!(!cpu.interrupt_delay);

    cpu.step(&mut bus); // now recognized
    assert!(!cpu.interrupt_pending);
}

#[test]
fn recognized_interrupt_wakes_a_halted_cpu() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x76]); // HLT
    cpu.step(&mut bus);
    assert!(cpu.halted);

    cpu.inte = true;
    cpu.sp = 0x2000;
    cpu.request_interrupt(0xC7); // RST 0
    cpu.step(&mut bus);
    assert!(!cpu.halted);
    assert_eq!(cpu.pc, 0x0000);
}

#[test]
fn halted_cpu_with_no_pending_interrupt_stays_halted() {
    let (mut cpu, mut bus) = cpu_with_program(&[0x76]);
    cpu.step(&mut bus);
    assert!(cpu.halted);
    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 0);
    assert!(cpu.halted);
}

#[test]
fn di_clears_inte_immediately() {
    let (mut cpu, mut bus) = cpu_with_program(&[0xF3]); // DI
    cpu.inte = true;
    cpu.step(&mut bus);
    assert!(!cpu.inte);
}

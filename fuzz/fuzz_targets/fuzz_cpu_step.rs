//! Fuzz the fetch-decode-execute loop with arbitrary memory images.
//!
//! The CPU must never panic, whatever bytes it chews through: undocumented
//! opcodes surface as lookup errors and everything else must execute.

#![no_main]

use core6502::{memory, nmos, FlatMemory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut mem = FlatMemory::new();
    let len = data.len().min(0x10000);
    memory::load(&mut mem, 0, &data[..len]);
    memory::write_reset_vector(&mut mem, 0x0000);

    let Ok(mut cpu) = nmos::cpu_6502(mem) else {
        return;
    };
    cpu.reset();

    for _ in 0..512 {
        let _ = cpu.step();
    }
});

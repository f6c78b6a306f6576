use crate::cpu::tick;
use crate::memory::Memory;
use crate::register::RegisterFile;

/// Drives `tick` to completion. The caller owns `memory` and `registers` for
/// the duration of the run; nothing is retained afterward.
pub fn run(memory: &mut Memory, registers: &mut RegisterFile) {
    while tick(memory, registers) {}
}

/// Like [`run`](fn.run.html), but invokes `hook` after every tick. Intended
/// for external collaborators (a display updater, a pacing layer) observing
/// machine state between ticks; the core does not implement either itself.
pub fn run_with_hook<F>(memory: &mut Memory, registers: &mut RegisterFile, mut hook: F)
where
    F: FnMut(&Memory, &RegisterFile),
{
    while tick(memory, registers) {
        hook(memory, registers);
    }
}

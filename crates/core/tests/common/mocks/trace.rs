use mockall::mock;
use yuemu_core::common::Fault;
use yuemu_core::core::arch::Gpr;
use yuemu_core::isa::Instruction;
use yuemu_core::sim::HaltReason;
use yuemu_core::sim::trace::TraceSink;

mock! {
    pub Sink {}
    impl TraceSink for Sink {
        fn instruction(&mut self, pc: u32, inst: &Instruction);
        fn registers(&mut self, pc: u32, regs: &Gpr);
        fn halted(&mut self, reason: &HaltReason, retired: u64);
        fn fault(&mut self, fault: &Fault);
    }
}

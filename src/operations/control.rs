use crate::registers::Register;
use crate::Processor;

impl Processor {
    /// Label marker: capture the current program counter in $ra
    pub(crate) fn op_label(&mut self) {
        self.registers.set(Register::RA, self.program_counter as i32);
    }

    /// Set on less than (slt, sltu)
    pub(crate) fn op_slt(&mut self, rd: Register, rs: Register, rt: Register) {
        let b = self.registers.get(rt);
        let a = self.registers.get(rs);
        self.set_on_less_than(rd, a, b);
    }

    /// Set on less than immediate (slti, sltiu)
    pub(crate) fn op_slti(&mut self, rd: Register, rs: Register, imm: i32) {
        let a = self.registers.get(rs);
        self.set_on_less_than(rd, a, imm);
    }

    /// Jump register: set the program counter to the return address.
    /// The loop's post-increment still applies, so execution resumes at
    /// the instruction after it.
    pub(crate) fn op_jr(&mut self) {
        self.program_counter = self.registers.get(Register::RA) as usize;
    }

    /// When the comparison holds, the program counter takes an extra step
    /// and the next instruction is skipped.
    fn set_on_less_than(&mut self, rd: Register, a: i32, b: i32) {
        if a < b {
            self.registers.set(rd, 1);
            self.program_counter += 1;
        } else {
            self.registers.set(rd, 0);
        }
    }
}

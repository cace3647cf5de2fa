use crate::registers::Register;
use crate::Processor;

impl Processor {
    /// Load immediate
    pub(crate) fn op_li(&mut self, rd: Register, imm: i32) {
        self.registers.set(rd, imm);
    }

    /// Load upper immediate
    pub(crate) fn op_lui(&mut self, rd: Register, imm: i32) {
        self.registers.set(rd, imm.wrapping_shl(16));
    }

    /// Copy rs into rd
    pub(crate) fn op_move(&mut self, rd: Register, rs: Register) {
        let value = self.registers.get(rs);
        self.registers.set(rd, value);
    }

    /// Move if rt is non-zero
    pub(crate) fn op_movn(&mut self, rd: Register, rs: Register, rt: Register) {
        if self.registers.get(rt) != 0 {
            let value = self.registers.get(rs);
            self.registers.set(rd, value);
        }
    }

    /// Move if rt is zero
    pub(crate) fn op_movz(&mut self, rd: Register, rs: Register, rt: Register) {
        if self.registers.get(rt) == 0 {
            let value = self.registers.get(rs);
            self.registers.set(rd, value);
        }
    }
}

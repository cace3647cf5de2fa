use crate::registers::Register;
use crate::Processor;

impl Processor {
    /// Add (add, addu). Signed and unsigned forms behave identically; there
    /// is no overflow trap.
    pub(crate) fn op_add(&mut self, rd: Register, rs: Register, rt: Register) {
        let value = self.registers.get(rs).wrapping_add(self.registers.get(rt));
        self.registers.set(rd, value);
    }

    /// Add immediate (addi, addiu)
    pub(crate) fn op_addi(&mut self, rd: Register, rs: Register, imm: i32) {
        let value = self.registers.get(rs).wrapping_add(imm);
        self.registers.set(rd, value);
    }

    /// Subtract (sub, subu)
    pub(crate) fn op_sub(&mut self, rd: Register, rs: Register, rt: Register) {
        let value = self.registers.get(rs).wrapping_sub(self.registers.get(rt));
        self.registers.set(rd, value);
    }

    /// Negate
    pub(crate) fn op_negu(&mut self, rd: Register, rs: Register) {
        let value = self.registers.get(rs).wrapping_neg();
        self.registers.set(rd, value);
    }

    /// Count one bits in the whole word
    pub(crate) fn op_clo(&mut self, rd: Register, rs: Register) {
        let value = self.registers.get(rs).count_ones();
        self.registers.set(rd, value as i32);
    }

    /// Count zero bits in the whole word
    pub(crate) fn op_clz(&mut self, rd: Register, rs: Register) {
        let value = self.registers.get(rs).count_zeros();
        self.registers.set(rd, value as i32);
    }
}

use crate::registers::Register;
use crate::Processor;

impl Processor {
    /// Bitwise and
    pub(crate) fn op_and(&mut self, rd: Register, rs: Register, rt: Register) {
        let value = self.registers.get(rs) & self.registers.get(rt);
        self.registers.set(rd, value);
    }

    /// Bitwise and immediate
    pub(crate) fn op_andi(&mut self, rd: Register, rs: Register, imm: i32) {
        let value = self.registers.get(rs) & imm;
        self.registers.set(rd, value);
    }

    /// Bitwise or
    pub(crate) fn op_or(&mut self, rd: Register, rs: Register, rt: Register) {
        let value = self.registers.get(rs) | self.registers.get(rt);
        self.registers.set(rd, value);
    }

    /// Bitwise or immediate
    pub(crate) fn op_ori(&mut self, rd: Register, rs: Register, imm: i32) {
        let value = self.registers.get(rs) | imm;
        self.registers.set(rd, value);
    }

    /// Bitwise xor
    pub(crate) fn op_xor(&mut self, rd: Register, rs: Register, rt: Register) {
        let value = self.registers.get(rs) ^ self.registers.get(rt);
        self.registers.set(rd, value);
    }

    /// Bitwise xor immediate
    pub(crate) fn op_xori(&mut self, rd: Register, rs: Register, imm: i32) {
        let value = self.registers.get(rs) ^ imm;
        self.registers.set(rd, value);
    }

    /// Or of the complements: (~rs) | (~rt), not the complement of the or
    pub(crate) fn op_nor(&mut self, rd: Register, rs: Register, rt: Register) {
        let value = !self.registers.get(rs) | !self.registers.get(rt);
        self.registers.set(rd, value);
    }

    /// Bitwise not
    pub(crate) fn op_not(&mut self, rd: Register, rs: Register) {
        let value = !self.registers.get(rs);
        self.registers.set(rd, value);
    }

    /// Shift left logical by a literal amount
    pub(crate) fn op_sll(&mut self, rd: Register, rs: Register, shamt: i32) {
        let value = self.registers.get(rs).wrapping_shl(shamt as u32);
        self.registers.set(rd, value);
    }

    /// Shift left logical by the low 5 bits of rt
    pub(crate) fn op_sllv(&mut self, rd: Register, rs: Register, rt: Register) {
        let shamt = (self.registers.get(rt) & 0x1F) as u32;
        let value = self.registers.get(rs).wrapping_shl(shamt);
        self.registers.set(rd, value);
    }

    /// Shift right by a literal amount (sra, srl). Both forms shift
    /// arithmetically; there is no signed/unsigned distinction.
    pub(crate) fn op_sra(&mut self, rd: Register, rs: Register, shamt: i32) {
        let value = self.registers.get(rs).wrapping_shr(shamt as u32);
        self.registers.set(rd, value);
    }

    /// Shift right by the low 5 bits of rt (srav, srlv)
    pub(crate) fn op_srav(&mut self, rd: Register, rs: Register, rt: Register) {
        let shamt = (self.registers.get(rt) & 0x1F) as u32;
        let value = self.registers.get(rs).wrapping_shr(shamt);
        self.registers.set(rd, value);
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::registers::Register;
    use crate::Processor;

    fn reg(name: &str) -> Register {
        Register::from_name(name).unwrap()
    }

    fn processor_with(values: &[(&str, i32)]) -> Processor {
        let mut processor = Processor::new(Config::default());
        for (name, value) in values {
            processor.registers_mut().set(reg(name), *value);
        }
        processor
    }

    #[test]
    fn logic_operations() {
        let mut processor = processor_with(&[("t0", 0b1100), ("t1", 0b1010)]);
        processor.op_and(reg("t2"), reg("t0"), reg("t1"));
        assert_eq!(processor.registers().get(reg("t2")), 0b1000);
        processor.op_or(reg("t2"), reg("t0"), reg("t1"));
        assert_eq!(processor.registers().get(reg("t2")), 0b1110);
        processor.op_xor(reg("t2"), reg("t0"), reg("t1"));
        assert_eq!(processor.registers().get(reg("t2")), 0b0110);
    }

    #[test]
    fn immediate_forms_use_the_literal() {
        let mut processor = processor_with(&[("t0", 0b1100)]);
        processor.op_andi(reg("t1"), reg("t0"), 0b0110);
        assert_eq!(processor.registers().get(reg("t1")), 0b0100);
        processor.op_ori(reg("t1"), reg("t0"), 0b0011);
        assert_eq!(processor.registers().get(reg("t1")), 0b1111);
        processor.op_xori(reg("t1"), reg("t0"), 0b1111);
        assert_eq!(processor.registers().get(reg("t1")), 0b0011);
    }

    #[test]
    fn nor_is_the_or_of_the_complements() {
        let mut processor = processor_with(&[("t0", 0b1100), ("t1", 0b1010)]);
        processor.op_nor(reg("t2"), reg("t0"), reg("t1"));
        assert_eq!(
            processor.registers().get(reg("t2")),
            !0b1100_i32 | !0b1010_i32
        );
        // A true nor would complement the or instead
        assert_ne!(processor.registers().get(reg("t2")), !(0b1100_i32 | 0b1010));
    }

    #[test]
    fn not_complements_the_word() {
        let mut processor = processor_with(&[("t0", 0)]);
        processor.op_not(reg("t1"), reg("t0"));
        assert_eq!(processor.registers().get(reg("t1")), -1);
    }

    #[test]
    fn shift_left_uses_the_literal_amount() {
        let mut processor = processor_with(&[("t0", 1)]);
        processor.op_sll(reg("t1"), reg("t0"), 4);
        assert_eq!(processor.registers().get(reg("t1")), 16);
    }

    #[test]
    fn variable_shifts_mask_to_five_bits() {
        let mut processor = processor_with(&[("t0", 1), ("t1", 33)]);
        // 33 & 0x1F == 1
        processor.op_sllv(reg("t2"), reg("t0"), reg("t1"));
        assert_eq!(processor.registers().get(reg("t2")), 2);

        let mut processor = processor_with(&[("t0", 16), ("t1", 36)]);
        // 36 & 0x1F == 4
        processor.op_srav(reg("t2"), reg("t0"), reg("t1"));
        assert_eq!(processor.registers().get(reg("t2")), 1);
    }

    #[test]
    fn right_shift_is_arithmetic() {
        let mut processor = processor_with(&[("t0", -8)]);
        processor.op_sra(reg("t1"), reg("t0"), 2);
        assert_eq!(processor.registers().get(reg("t1")), -2);
    }
}

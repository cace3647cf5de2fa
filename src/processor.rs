use crate::config::Config;
use crate::instruction::Instruction;
use crate::program::Program;
use crate::registers::Registers;

/// A MIPS processor
#[derive(Debug)]
pub struct Processor {
    pub(crate) registers: Registers,
    pub(crate) program_counter: usize,
    program: Program,
    config: Config,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Processor {
            registers: Registers::new(),
            program_counter: 0,
            program: Program::default(),
            config,
        }
    }

    /// Load a program, replacing any previously loaded one
    pub fn load_program(&mut self, program: Program) {
        self.program = program;
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Direct register access, for seeding argument registers in test
    /// scenarios
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn program_counter(&self) -> usize {
        self.program_counter
    }

    /// Run until the program counter passes the end of the program
    pub fn run(&mut self) {
        while self.program_counter < self.program.len() {
            self.step();
        }
    }

    /// Execute the instruction at the program counter, then advance it.
    /// The increment applies even when the instruction set the counter
    /// itself, so a transfer lands one past its target.
    pub fn step(&mut self) {
        let instruction = self.program.instruction(self.program_counter).clone();

        if self.config.trace {
            log::info!("{:4}: {}", self.program_counter, instruction);
        }

        self.execute(instruction);
        self.program_counter += 1;
    }

    fn execute(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::Label(_) => self.op_label(),
            Instruction::Add { rd, rs, rt } | Instruction::Addu { rd, rs, rt } => {
                self.op_add(rd, rs, rt)
            }
            Instruction::Sub { rd, rs, rt } | Instruction::Subu { rd, rs, rt } => {
                self.op_sub(rd, rs, rt)
            }
            Instruction::Addi { rd, rs, imm } | Instruction::Addiu { rd, rs, imm } => {
                self.op_addi(rd, rs, imm)
            }
            Instruction::Negu { rd, rs } => self.op_negu(rd, rs),
            Instruction::Clo { rd, rs } => self.op_clo(rd, rs),
            Instruction::Clz { rd, rs } => self.op_clz(rd, rs),
            Instruction::Li { rd, imm } => self.op_li(rd, imm),
            Instruction::Lui { rd, imm } => self.op_lui(rd, imm),
            Instruction::Move { rd, rs } => self.op_move(rd, rs),
            Instruction::Sll { rd, rs, shamt } => self.op_sll(rd, rs, shamt),
            Instruction::Sra { rd, rs, shamt } | Instruction::Srl { rd, rs, shamt } => {
                self.op_sra(rd, rs, shamt)
            }
            Instruction::Sllv { rd, rs, rt } => self.op_sllv(rd, rs, rt),
            Instruction::Srav { rd, rs, rt } | Instruction::Srlv { rd, rs, rt } => {
                self.op_srav(rd, rs, rt)
            }
            Instruction::And { rd, rs, rt } => self.op_and(rd, rs, rt),
            Instruction::Or { rd, rs, rt } => self.op_or(rd, rs, rt),
            Instruction::Xor { rd, rs, rt } => self.op_xor(rd, rs, rt),
            Instruction::Nor { rd, rs, rt } => self.op_nor(rd, rs, rt),
            Instruction::Andi { rd, rs, imm } => self.op_andi(rd, rs, imm),
            Instruction::Ori { rd, rs, imm } => self.op_ori(rd, rs, imm),
            Instruction::Xori { rd, rs, imm } => self.op_xori(rd, rs, imm),
            Instruction::Not { rd, rs } => self.op_not(rd, rs),
            Instruction::Movn { rd, rs, rt } => self.op_movn(rd, rs, rt),
            Instruction::Movz { rd, rs, rt } => self.op_movz(rd, rs, rt),
            Instruction::Slt { rd, rs, rt } | Instruction::Sltu { rd, rs, rt } => {
                self.op_slt(rd, rs, rt)
            }
            Instruction::Slti { rd, rs, imm } | Instruction::Sltiu { rd, rs, imm } => {
                self.op_slti(rd, rs, imm)
            }
            Instruction::Jr => self.op_jr(),
            Instruction::Reserved(_) | Instruction::Unknown(_) => {}
        }
    }
}

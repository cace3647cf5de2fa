use crate::error::InterpreterError;
use crate::registers::Register;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A decoded MIPS instruction.
///
/// Register operands are resolved to indices and immediates are parsed when
/// the program is loaded; execution never re-reads the source tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// A label definition line; executing it captures the program counter
    /// in $ra
    Label(String),
    Add { rd: Register, rs: Register, rt: Register },
    Addu { rd: Register, rs: Register, rt: Register },
    Sub { rd: Register, rs: Register, rt: Register },
    Subu { rd: Register, rs: Register, rt: Register },
    Addi { rd: Register, rs: Register, imm: i32 },
    Addiu { rd: Register, rs: Register, imm: i32 },
    Negu { rd: Register, rs: Register },
    /// Count of one bits in rs (the whole word, not leading ones)
    Clo { rd: Register, rs: Register },
    /// Count of zero bits in rs (the whole word, not leading zeros)
    Clz { rd: Register, rs: Register },
    Li { rd: Register, imm: i32 },
    Lui { rd: Register, imm: i32 },
    Move { rd: Register, rs: Register },
    Sll { rd: Register, rs: Register, shamt: i32 },
    Sra { rd: Register, rs: Register, shamt: i32 },
    Srl { rd: Register, rs: Register, shamt: i32 },
    Sllv { rd: Register, rs: Register, rt: Register },
    Srav { rd: Register, rs: Register, rt: Register },
    Srlv { rd: Register, rs: Register, rt: Register },
    And { rd: Register, rs: Register, rt: Register },
    Or { rd: Register, rs: Register, rt: Register },
    Xor { rd: Register, rs: Register, rt: Register },
    /// Computes (~rs) | (~rt), not the complement of the OR
    Nor { rd: Register, rs: Register, rt: Register },
    Andi { rd: Register, rs: Register, imm: i32 },
    Ori { rd: Register, rs: Register, imm: i32 },
    Xori { rd: Register, rs: Register, imm: i32 },
    Not { rd: Register, rs: Register },
    Movn { rd: Register, rs: Register, rt: Register },
    Movz { rd: Register, rs: Register, rt: Register },
    Slt { rd: Register, rs: Register, rt: Register },
    Sltu { rd: Register, rs: Register, rt: Register },
    Slti { rd: Register, rs: Register, imm: i32 },
    Sltiu { rd: Register, rs: Register, imm: i32 },
    /// Jumps to the address held in $ra; any operand token is ignored
    Jr,
    /// MIPS32 Release 2 instructions and `la`, recognized but not implemented
    Reserved(String),
    /// An opcode outside the recognized set; executes as a no-op
    Unknown(String),
}

impl Instruction {
    /// Decode one tokenized source line into an instruction
    pub fn decode(opcode: &str, operands: &[&str]) -> Result<Self, InterpreterError> {
        if opcode.ends_with(':') {
            let name = &opcode[..opcode.len() - 1];
            return Ok(Instruction::Label(name.to_string()));
        }

        let mut operands = Operands::new(opcode, operands);

        let instruction = match opcode {
            "add" => Instruction::Add {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "addu" => Instruction::Addu {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "sub" => Instruction::Sub {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "subu" => Instruction::Subu {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "addi" => Instruction::Addi {
                rd: operands.register()?,
                rs: operands.register()?,
                imm: operands.immediate()?,
            },
            "addiu" => Instruction::Addiu {
                rd: operands.register()?,
                rs: operands.register()?,
                imm: operands.immediate()?,
            },
            "negu" => Instruction::Negu {
                rd: operands.register()?,
                rs: operands.register()?,
            },
            "clo" => Instruction::Clo {
                rd: operands.register()?,
                rs: operands.register()?,
            },
            "clz" => Instruction::Clz {
                rd: operands.register()?,
                rs: operands.register()?,
            },
            "li" => Instruction::Li {
                rd: operands.register()?,
                imm: operands.immediate()?,
            },
            "lui" => Instruction::Lui {
                rd: operands.register()?,
                imm: operands.immediate()?,
            },
            "move" => Instruction::Move {
                rd: operands.register()?,
                rs: operands.register()?,
            },
            "sll" => Instruction::Sll {
                rd: operands.register()?,
                rs: operands.register()?,
                shamt: operands.immediate()?,
            },
            "sra" => Instruction::Sra {
                rd: operands.register()?,
                rs: operands.register()?,
                shamt: operands.immediate()?,
            },
            "srl" => Instruction::Srl {
                rd: operands.register()?,
                rs: operands.register()?,
                shamt: operands.immediate()?,
            },
            "sllv" => Instruction::Sllv {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "srav" => Instruction::Srav {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "srlv" => Instruction::Srlv {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "and" => Instruction::And {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "or" => Instruction::Or {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "xor" => Instruction::Xor {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "nor" => Instruction::Nor {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "andi" => Instruction::Andi {
                rd: operands.register()?,
                rs: operands.register()?,
                imm: operands.immediate()?,
            },
            "ori" => Instruction::Ori {
                rd: operands.register()?,
                rs: operands.register()?,
                imm: operands.immediate()?,
            },
            "xori" => Instruction::Xori {
                rd: operands.register()?,
                rs: operands.register()?,
                imm: operands.immediate()?,
            },
            "not" => Instruction::Not {
                rd: operands.register()?,
                rs: operands.register()?,
            },
            "movn" => Instruction::Movn {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "movz" => Instruction::Movz {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "slt" => Instruction::Slt {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "sltu" => Instruction::Sltu {
                rd: operands.register()?,
                rs: operands.register()?,
                rt: operands.register()?,
            },
            "slti" => Instruction::Slti {
                rd: operands.register()?,
                rs: operands.register()?,
                imm: operands.immediate()?,
            },
            "sltiu" => Instruction::Sltiu {
                rd: operands.register()?,
                rs: operands.register()?,
                imm: operands.immediate()?,
            },
            "jr" => Instruction::Jr,
            "la" | "seb" | "seh" | "rotr" | "rotrv" | "ext" | "ins" | "wsbh" => {
                Instruction::Reserved(opcode.to_string())
            }
            _ => {
                log::warn!("Unrecognized opcode {:?}, treating it as a no-op", opcode);
                Instruction::Unknown(opcode.to_string())
            }
        };

        Ok(instruction)
    }
}

impl Display for Instruction {
    /// Render the instruction in its canonical assembly form
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Shorthand closures to render common operand shapes.
        let rrr = |name: &str, rd: &Register, rs: &Register, rt: &Register| {
            format!("{} ${}, ${}, ${}", name, rd, rs, rt)
        };
        let rri = |name: &str, rd: &Register, rs: &Register, imm: &i32| {
            format!("{} ${}, ${}, {}", name, rd, rs, imm)
        };
        let rr = |name: &str, rd: &Register, rs: &Register| format!("{} ${}, ${}", name, rd, rs);
        let ri = |name: &str, rd: &Register, imm: &i32| format!("{} ${}, {}", name, rd, imm);

        let rendered = match self {
            Instruction::Label(name) => format!("{}:", name),
            Instruction::Add { rd, rs, rt } => rrr("add", rd, rs, rt),
            Instruction::Addu { rd, rs, rt } => rrr("addu", rd, rs, rt),
            Instruction::Sub { rd, rs, rt } => rrr("sub", rd, rs, rt),
            Instruction::Subu { rd, rs, rt } => rrr("subu", rd, rs, rt),
            Instruction::Addi { rd, rs, imm } => rri("addi", rd, rs, imm),
            Instruction::Addiu { rd, rs, imm } => rri("addiu", rd, rs, imm),
            Instruction::Negu { rd, rs } => rr("negu", rd, rs),
            Instruction::Clo { rd, rs } => rr("clo", rd, rs),
            Instruction::Clz { rd, rs } => rr("clz", rd, rs),
            Instruction::Li { rd, imm } => ri("li", rd, imm),
            Instruction::Lui { rd, imm } => ri("lui", rd, imm),
            Instruction::Move { rd, rs } => rr("move", rd, rs),
            Instruction::Sll { rd, rs, shamt } => rri("sll", rd, rs, shamt),
            Instruction::Sra { rd, rs, shamt } => rri("sra", rd, rs, shamt),
            Instruction::Srl { rd, rs, shamt } => rri("srl", rd, rs, shamt),
            Instruction::Sllv { rd, rs, rt } => rrr("sllv", rd, rs, rt),
            Instruction::Srav { rd, rs, rt } => rrr("srav", rd, rs, rt),
            Instruction::Srlv { rd, rs, rt } => rrr("srlv", rd, rs, rt),
            Instruction::And { rd, rs, rt } => rrr("and", rd, rs, rt),
            Instruction::Or { rd, rs, rt } => rrr("or", rd, rs, rt),
            Instruction::Xor { rd, rs, rt } => rrr("xor", rd, rs, rt),
            Instruction::Nor { rd, rs, rt } => rrr("nor", rd, rs, rt),
            Instruction::Andi { rd, rs, imm } => rri("andi", rd, rs, imm),
            Instruction::Ori { rd, rs, imm } => rri("ori", rd, rs, imm),
            Instruction::Xori { rd, rs, imm } => rri("xori", rd, rs, imm),
            Instruction::Not { rd, rs } => rr("not", rd, rs),
            Instruction::Movn { rd, rs, rt } => rrr("movn", rd, rs, rt),
            Instruction::Movz { rd, rs, rt } => rrr("movz", rd, rs, rt),
            Instruction::Slt { rd, rs, rt } => rrr("slt", rd, rs, rt),
            Instruction::Sltu { rd, rs, rt } => rrr("sltu", rd, rs, rt),
            Instruction::Slti { rd, rs, imm } => rri("slti", rd, rs, imm),
            Instruction::Sltiu { rd, rs, imm } => rri("sltiu", rd, rs, imm),
            Instruction::Jr => "jr $ra".to_string(),
            Instruction::Reserved(opcode) | Instruction::Unknown(opcode) => opcode.clone(),
        };

        f.write_str(&rendered)
    }
}

/// Cursor over a line's raw operand tokens
struct Operands<'a> {
    opcode: &'a str,
    tokens: &'a [&'a str],
    position: usize,
}

impl<'a> Operands<'a> {
    fn new(opcode: &'a str, tokens: &'a [&'a str]) -> Self {
        Operands {
            opcode,
            tokens,
            position: 0,
        }
    }

    /// Take the next operand token, cleaned of punctuation
    fn next(&mut self) -> Result<&'a str, InterpreterError> {
        let token = self
            .tokens
            .get(self.position)
            .ok_or_else(|| InterpreterError::OperandCount {
                opcode: self.opcode.to_string(),
                expected: self.position + 1,
                found: self.tokens.len(),
            })?;
        self.position += 1;

        Ok(clean(token))
    }

    fn register(&mut self) -> Result<Register, InterpreterError> {
        Register::from_name(self.next()?)
    }

    fn immediate(&mut self) -> Result<i32, InterpreterError> {
        let token = self.next()?;
        token
            .parse()
            .map_err(|_| InterpreterError::MalformedOperand(token.to_string()))
    }
}

/// Strip the register sigil and any trailing comma from a raw operand token
fn clean(token: &str) -> &str {
    let token = token.strip_prefix('$').unwrap_or(token);
    token.strip_suffix(',').unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_three_register_form() {
        let instruction = Instruction::decode("add", &["$t2,", "$t0,", "$t1"]).unwrap();
        assert_eq!(
            instruction,
            Instruction::Add {
                rd: Register::from_name("t2").unwrap(),
                rs: Register::from_name("t0").unwrap(),
                rt: Register::from_name("t1").unwrap(),
            }
        );
    }

    #[test]
    fn sigil_and_comma_resolve_like_the_bare_name() {
        let decorated = Instruction::decode("add", &["$t0,", "$t0,", "$t0"]).unwrap();
        let bare = Instruction::decode("add", &["t0", "t0", "t0"]).unwrap();
        assert_eq!(decorated, bare);
    }

    #[test]
    fn decodes_negative_immediates() {
        let instruction = Instruction::decode("li", &["$t0,", "-5"]).unwrap();
        assert_eq!(
            instruction,
            Instruction::Li {
                rd: Register::from_name("t0").unwrap(),
                imm: -5,
            }
        );
    }

    #[test]
    fn label_line_decodes_without_operand_resolution() {
        let instruction = Instruction::decode("main:", &["$nonsense"]).unwrap();
        assert_eq!(instruction, Instruction::Label("main".to_string()));
    }

    #[test]
    fn missing_operands_are_an_arity_error() {
        let error = Instruction::decode("add", &["$t0,"]).unwrap_err();
        match error {
            InterpreterError::OperandCount {
                opcode,
                expected,
                found,
            } => {
                assert_eq!(opcode, "add");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("Expected an operand count error, got {}", other),
        }
    }

    #[test]
    fn extra_operands_are_ignored() {
        let instruction = Instruction::decode("jr", &["$ra"]).unwrap();
        assert_eq!(instruction, Instruction::Jr);
    }

    #[test]
    fn non_numeric_immediate_is_malformed() {
        let error = Instruction::decode("li", &["$t0,", "five"]).unwrap_err();
        assert!(matches!(error, InterpreterError::MalformedOperand(token) if token == "five"));
    }

    #[test]
    fn unknown_register_name_is_an_error() {
        let error = Instruction::decode("move", &["$t0,", "$t42"]).unwrap_err();
        assert!(matches!(error, InterpreterError::UnknownRegister(name) if name == "t42"));
    }

    #[test]
    fn release_2_opcodes_decode_as_reserved() {
        for opcode in &["la", "seb", "seh", "rotr", "rotrv", "ext", "ins", "wsbh"] {
            let instruction = Instruction::decode(opcode, &["$t0,", "$t1"]).unwrap();
            assert_eq!(instruction, Instruction::Reserved(opcode.to_string()));
        }
    }

    #[test]
    fn unrecognized_opcode_decodes_as_unknown() {
        let instruction = Instruction::decode("syscall", &[]).unwrap();
        assert_eq!(instruction, Instruction::Unknown("syscall".to_string()));
    }

    #[test]
    fn renders_canonical_assembly() {
        let add = Instruction::decode("add", &["$t2,", "$t0,", "$t1"]).unwrap();
        assert_eq!(add.to_string(), "add $t2, $t0, $t1");

        let li = Instruction::decode("li", &["$t0,", "5"]).unwrap();
        assert_eq!(li.to_string(), "li $t0, 5");

        let label = Instruction::decode("loop:", &[]).unwrap();
        assert_eq!(label.to_string(), "loop:");
    }
}

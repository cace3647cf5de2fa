use crate::constants::TEXT_MARKER;
use crate::error::InterpreterError;
use crate::instruction::Instruction;
use std::io::BufRead;

/// An ordered list of decoded instructions.
///
/// An instruction's position in the list is its program counter value; there
/// is no separate address space.
#[derive(Debug, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Parse an assembly listing.
    ///
    /// Everything up to the code-section marker line is directive/data
    /// preamble and is discarded. Each line after it is tokenized by
    /// whitespace and decoded in order.
    pub fn parse<R: BufRead>(input: R) -> Result<Self, InterpreterError> {
        let mut instructions = Vec::new();
        let mut in_text_section = false;

        for line in input.lines() {
            let line = line?;

            if line == TEXT_MARKER {
                log::info!("Program started");
                in_text_section = true;
            } else if in_text_section {
                let tokens: Vec<&str> = line.split_whitespace().collect();

                // Blank lines hold no instruction and take no slot
                if let Some((opcode, operands)) = tokens.split_first() {
                    instructions.push(Instruction::decode(opcode, operands)?);
                }
            }
        }

        Ok(Self { instructions })
    }

    /// Get the instruction at the position
    pub fn instruction(&self, position: usize) -> &Instruction {
        &self.instructions[position]
    }

    /// The number of loaded instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn preamble_before_the_marker_is_discarded() {
        let source = "\t.data\nmsg: .asciiz \"hi\"\n\t.text\nli $t0, 1\n";
        let program = Program::parse(Cursor::new(source)).unwrap();
        assert_eq!(program.len(), 1);
    }

    #[test]
    fn missing_marker_loads_nothing() {
        let source = "li $t0, 1\nadd $t1, $t0, $t0\n";
        let program = Program::parse(Cursor::new(source)).unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn blank_lines_take_no_instruction_slot() {
        let source = "\t.text\nli $t0, 1\n\nli $t1, 2\n";
        let program = Program::parse(Cursor::new(source)).unwrap();
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn marker_must_match_exactly() {
        // No leading tab, so the section never starts
        let source = ".text\nli $t0, 1\n";
        let program = Program::parse(Cursor::new(source)).unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn decode_failures_propagate() {
        let source = "\t.text\nli $t0, five\n";
        assert!(matches!(
            Program::parse(Cursor::new(source)),
            Err(InterpreterError::MalformedOperand(_))
        ));
    }

    #[test]
    fn instructions_keep_their_source_order() {
        let source = "\t.text\nli $t0, 1\nmain:\nadd $t1, $t0, $t0\n";
        let program = Program::parse(Cursor::new(source)).unwrap();
        assert_eq!(program.len(), 3);
        assert_eq!(program.instruction(1), &Instruction::Label("main".to_string()));
    }
}

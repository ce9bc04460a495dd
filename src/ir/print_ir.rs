use std::fmt;
use std::fmt::Display;

use super::ir::*;

// This prints the instructions in the same form as they are written in the source

impl Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Variable(variable) => write!(f, "{}", variable),
            Operand::Literal(value) => write!(f, "{}", value),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;
        match self {
            Assignment { dest, source } => write!(f, "{} = {}", dest, source),
            UnaryOp { dest, op, operand } => write!(f, "{} = {}{}", dest, op, operand),
            BinaryOp { dest, op1, op, op2 } => write!(f, "{} = {} {} {}", dest, op1, op, op2),
        }
    }
}

impl Display for InstructionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in self.instructions() {
            writeln!(f, "{}", instruction)?;
        }
        write!(f, "live: ")?;
        let names: Vec<&str> = self.live_out().iter().map(|v| v.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

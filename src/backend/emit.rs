use smallvec::{smallvec, SmallVec};

use super::register_allocation::{Register, RegisterAssignment};
use crate::error::AllocationError;
use crate::ir::{BinaryOperator, Instruction, InstructionSequence, Operand, UnaryOperator, Variable};

// Opcodes:
//      MOV src,Ri  copies src into Ri
//      ADD src,Ri  Ri = Ri + src
//      SUB src,Ri  Ri = Ri - src
//      MUL src,Ri  Ri = Ri * src
//      DIV src,Ri  Ri = Ri / src
// src is either an immediate #x or a register Ri

pub fn opcode(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "ADD",
        BinaryOperator::Sub => "SUB",
        BinaryOperator::Mul => "MUL",
        BinaryOperator::Div => "DIV",
    }
}

pub struct Emitter<'a> {
    assignment: &'a RegisterAssignment,
}

impl<'a> Emitter<'a> {
    pub fn new(assignment: &'a RegisterAssignment) -> Emitter<'a> {
        Emitter { assignment }
    }

    pub fn emit(&self, sequence: &InstructionSequence) -> Result<Vec<String>, AllocationError> {
        log::debug!("Emitting {} instructions", sequence.len());
        let mut listing = Vec::with_capacity(sequence.len() * 2);
        for instruction in sequence.instructions() {
            let lines = self.emit_instruction(instruction)?;
            log::trace!("{} => {:?}", instruction, lines);
            listing.extend(lines);
        }
        Ok(listing)
    }

    // Every instruction first moves its (first) source into the destination register,
    // an operation is then applied in place
    pub fn emit_instruction(
        &self,
        instruction: &Instruction,
    ) -> Result<SmallVec<[String; 2]>, AllocationError> {
        use Instruction::*;
        let result = match instruction {
            Assignment { dest, source } => {
                let dest = self.register(dest)?;
                smallvec![format!("MOV {},{}", self.source(source)?, dest)]
            }
            UnaryOp {
                dest,
                op: UnaryOperator::Neg,
                operand,
            } => {
                let dest = self.register(dest)?;
                smallvec![
                    format!("MOV {},{}", self.source(operand)?, dest),
                    format!("MUL #-1,{}", dest),
                ]
            }
            BinaryOp { dest, op1, op, op2 } => {
                let dest = self.register(dest)?;
                smallvec![
                    format!("MOV {},{}", self.source(op1)?, dest),
                    format!("{} {},{}", opcode(*op), self.source(op2)?, dest),
                ]
            }
        };
        Ok(result)
    }

    fn register(&self, variable: &Variable) -> Result<Register, AllocationError> {
        self.assignment.get(variable).ok_or_else(|| {
            log::error!("{} has no register", variable);
            AllocationError::Unassigned(variable.clone())
        })
    }

    fn source(&self, operand: &Operand) -> Result<String, AllocationError> {
        match operand {
            Operand::Literal(value) => Ok(format!("#{}", value)),
            Operand::Variable(variable) => Ok(self.register(variable)?.to_string()),
        }
    }
}

pub fn emit(
    sequence: &InstructionSequence,
    assignment: &RegisterAssignment,
) -> Result<Vec<String>, AllocationError> {
    Emitter::new(assignment).emit(sequence)
}

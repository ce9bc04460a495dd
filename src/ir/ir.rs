use std::collections::HashSet;
use std::fmt::{self, Display};

use smallvec::{smallvec, SmallVec};

/// A named value of the block. Identity is by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(String);

impl Variable {
    pub fn new<S: Into<String>>(name: S) -> Variable {
        Variable(name.into())
    }
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Variable {
        Variable::new(name)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Variable(Variable),
    Literal(u64),
}

impl Operand {
    pub fn var(name: &str) -> Operand {
        Operand::Variable(Variable::new(name))
    }

    pub fn variable(&self) -> Option<&Variable> {
        match self {
            Operand::Variable(variable) => Some(variable),
            Operand::Literal(_) => None,
        }
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Operand {
        Operand::Literal(value)
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Operand {
        Operand::var(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Neg,
}

impl UnaryOperator {
    pub fn symbol(&self) -> char {
        match self {
            UnaryOperator::Neg => '-',
        }
    }
}

/// A three address instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Assignment {
        dest: Variable,
        source: Operand,
    },
    UnaryOp {
        dest: Variable,
        op: UnaryOperator,
        operand: Operand,
    },
    BinaryOp {
        dest: Variable,
        op1: Operand,
        op: BinaryOperator,
        op2: Operand,
    },
}

impl Instruction {
    pub fn assign<S: Into<Operand>>(dest: &str, source: S) -> Instruction {
        Instruction::Assignment {
            dest: Variable::new(dest),
            source: source.into(),
        }
    }

    pub fn negate<S: Into<Operand>>(dest: &str, operand: S) -> Instruction {
        Instruction::UnaryOp {
            dest: Variable::new(dest),
            op: UnaryOperator::Neg,
            operand: operand.into(),
        }
    }

    pub fn binary<S: Into<Operand>, T: Into<Operand>>(
        dest: &str,
        op1: S,
        op: BinaryOperator,
        op2: T,
    ) -> Instruction {
        Instruction::BinaryOp {
            dest: Variable::new(dest),
            op1: op1.into(),
            op,
            op2: op2.into(),
        }
    }

    pub fn destination(&self) -> &Variable {
        match self {
            Instruction::Assignment { dest, .. }
            | Instruction::UnaryOp { dest, .. }
            | Instruction::BinaryOp { dest, .. } => dest,
        }
    }

    pub fn operands(&self) -> SmallVec<[&Operand; 2]> {
        match self {
            Instruction::Assignment { source, .. } => smallvec![source],
            Instruction::UnaryOp { operand, .. } => smallvec![operand],
            Instruction::BinaryOp { op1, op2, .. } => smallvec![op1, op2],
        }
    }

    // The variables read by this instruction, literals excluded
    pub fn uses(&self) -> SmallVec<[&Variable; 2]> {
        self.operands()
            .into_iter()
            .filter_map(|operand| operand.variable())
            .collect()
    }
}

/// One basic block together with the variables that must survive it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSequence {
    instructions: Vec<Instruction>,
    live_out: Vec<Variable>,
    variables: Vec<Variable>,
}

impl InstructionSequence {
    // The variable universe is every name in first-occurrence order,
    // destination before operands, followed by any live name not yet seen
    pub fn new(instructions: Vec<Instruction>, live_out: Vec<Variable>) -> InstructionSequence {
        let mut seen = HashSet::new();
        let mut variables = Vec::new();
        let names = instructions
            .iter()
            .flat_map(|ins| std::iter::once(ins.destination()).chain(ins.uses()))
            .chain(live_out.iter());
        for variable in names {
            if seen.insert(variable) {
                variables.push(variable.clone());
            }
        }

        let mut unique = HashSet::new();
        let live_out = live_out
            .into_iter()
            .filter(|variable| unique.insert(variable.clone()))
            .collect();

        InstructionSequence {
            instructions,
            live_out,
            variables,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn live_out(&self) -> &[Variable] {
        &self.live_out
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Live names that no instruction defines or reads
    pub fn undeclared_live_out(&self) -> Vec<&Variable> {
        let mentioned: HashSet<&Variable> = self
            .instructions
            .iter()
            .flat_map(|ins| std::iter::once(ins.destination()).chain(ins.uses()))
            .collect();
        self.live_out
            .iter()
            .filter(|variable| !mentioned.contains(variable))
            .collect()
    }
}

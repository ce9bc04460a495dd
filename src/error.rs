use std::fmt::{self, Display};

use crate::ir::Variable;

#[macro_export]
macro_rules! error {
    ($span:expr,$( $exp:expr ),*) => {
        {
            use colored::Colorize;
            format!("{:?}: error: {}",$span,format!($($exp,)*).red())
        }
    };
}

#[macro_export]
macro_rules! warning {
    ($span:expr,$( $exp:expr ),*) => {
        {
            use colored::Colorize;
            format!("{:?}: warning: {}",$span,format!($($exp,)*).purple())
        }
    };
}

/// Failures of the register allocation pipeline itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// The search exhausted every candidate without finding a proper coloring
    Infeasible { registers: u32, variables: usize },
    /// A register count of zero was requested
    NoRegisters,
    /// The emitter met a variable that never received a register
    Unassigned(Variable),
}

impl Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AllocationError::*;
        match self {
            Infeasible {
                registers,
                variables,
            } => write!(
                f,
                "{} variables cannot be allocated to {} register{}",
                variables,
                registers,
                if *registers == 1 { "" } else { "s" }
            ),
            NoRegisters => write!(f, "at least one register is required"),
            Unassigned(variable) => write!(
                f,
                "internal error: variable '{}' was not assigned a register",
                variable
            ),
        }
    }
}

impl std::error::Error for AllocationError {}

#[derive(Debug)]
pub enum CompileError {
    Io(String, std::io::Error),
    Lex(Vec<String>),
    Parse(Vec<String>),
    Allocation(AllocationError),
}

impl Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use colored::Colorize;
        use CompileError::*;
        match self {
            Io(file, err) => write!(f, "{} {}: {}", "Error: Failed to access".bright_red(), file, err),
            Lex(errors) | Parse(errors) => {
                let mut first = true;
                for error in errors {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{}", error)?;
                    first = false;
                }
                Ok(())
            }
            Allocation(err) => write!(f, "{} {}", "Error:".bright_red(), err),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Io(_, err) => Some(err),
            CompileError::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AllocationError> for CompileError {
    fn from(err: AllocationError) -> Self {
        CompileError::Allocation(err)
    }
}

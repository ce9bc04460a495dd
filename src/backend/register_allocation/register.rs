use std::collections::HashMap;
use std::fmt::{self, Display};
use std::iter::FromIterator;

use super::{ColorMap, InterferenceGraph};
use crate::error::AllocationError;
use crate::ir::Variable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(pub u32);

impl Register {
    pub fn index(&self) -> u32 {
        self.0
    }
}

impl Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// The register of every variable, as read by the emitter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterAssignment {
    registers: HashMap<Variable, Register>,
}

impl RegisterAssignment {
    // Every node must have a color
    pub fn from_coloring(
        graph: &InterferenceGraph,
        colors: &ColorMap,
    ) -> Result<RegisterAssignment, AllocationError> {
        let mut registers = HashMap::with_capacity(graph.len());
        for (node, variable) in graph.variables().iter().enumerate() {
            match colors.get(node as u32) {
                Some(color) => {
                    registers.insert(variable.clone(), Register(color));
                }
                None => return Err(AllocationError::Unassigned(variable.clone())),
            }
        }
        Ok(RegisterAssignment { registers })
    }

    pub fn get(&self, variable: &Variable) -> Option<Register> {
        self.registers.get(variable).copied()
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}

impl FromIterator<(Variable, Register)> for RegisterAssignment {
    fn from_iter<T: IntoIterator<Item = (Variable, Register)>>(iter: T) -> Self {
        RegisterAssignment {
            registers: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, u32)> for RegisterAssignment {
    fn from_iter<T: IntoIterator<Item = (&'a str, u32)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(name, register)| (Variable::new(name), Register(register)))
            .collect()
    }
}

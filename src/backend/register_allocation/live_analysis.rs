use std::collections::VecDeque;
use std::fmt::{self, Debug, Display};

use smallvec::SmallVec;

use crate::ir::{InstructionSequence, Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveState {
    Defined,
    Live,
}

/// The state of every variable mentioned at one program point
// Entries keep the order in which they were first marked
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LivenessPoint {
    entries: SmallVec<[(Variable, LiveState); 8]>,
}

impl LivenessPoint {
    pub fn new() -> LivenessPoint {
        LivenessPoint {
            entries: SmallVec::new(),
        }
    }

    // A later mark overwrites an earlier one for the same name
    pub fn mark(&mut self, variable: &Variable, state: LiveState) {
        match self.entries.iter_mut().find(|(v, _)| v == variable) {
            Some(entry) => entry.1 = state,
            None => self.entries.push((variable.clone(), state)),
        }
    }

    pub fn state(&self, name: &str) -> Option<LiveState> {
        self.entries
            .iter()
            .find(|(v, _)| v.name() == name)
            .map(|&(_, state)| state)
    }

    pub fn is_live(&self, name: &str) -> bool {
        self.state(name) == Some(LiveState::Live)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.state(name) == Some(LiveState::Defined)
    }

    pub fn live(&self) -> impl Iterator<Item = &Variable> {
        self.entries
            .iter()
            .filter(|(_, state)| *state == LiveState::Live)
            .map(|(v, _)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Variable, LiveState)> {
        self.entries.iter().map(|(v, state)| (v, *state))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for LivenessPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (variable, state)) in self.entries.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            let state = match state {
                LiveState::Defined => "defined",
                LiveState::Live => "live",
            };
            write!(f, "{}: {}", variable, state)?;
        }
        write!(f, "]")
    }
}

/// Point i holds the state before instruction i, the last point holds the live out set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivenessTable {
    points: Vec<LivenessPoint>,
}

impl LivenessTable {
    pub fn points(&self) -> &[LivenessPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn exit(&self) -> &LivenessPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn display<'a>(&'a self, sequence: &'a InstructionSequence) -> LivenessDisplay<'a> {
        LivenessDisplay {
            table: self,
            sequence,
        }
    }
}

impl std::ops::Index<usize> for LivenessTable {
    type Output = LivenessPoint;
    fn index(&self, index: usize) -> &LivenessPoint {
        &self.points[index]
    }
}

pub struct LivenessDisplay<'a> {
    table: &'a LivenessTable,
    sequence: &'a InstructionSequence,
}

impl<'a> Display for LivenessDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instructions = self.sequence.instructions();
        for (i, instruction) in instructions.iter().enumerate() {
            writeln!(f, "{}: {}: {:?}", i, instruction, self.table[i])?;
        }
        write!(
            f,
            "{}: End of code block: {:?}",
            instructions.len(),
            self.table.exit()
        )
    }
}

// Single backward pass over the block
// The carry set holds the names that are live after the current instruction
// Before an instruction: carried names and read variables are live,
// and the destination is marked defined last, overriding both
pub fn find_liveness(sequence: &InstructionSequence) -> LivenessTable {
    log::debug!("Starting live analysis");
    let mut points = VecDeque::with_capacity(sequence.len() + 1);

    let mut exit = LivenessPoint::new();
    for variable in sequence.live_out() {
        exit.mark(variable, LiveState::Live);
    }
    let mut carry: Vec<Variable> = exit.live().cloned().collect();
    log::trace!("{}: {:?}", sequence.len(), exit);
    points.push_front(exit);

    for (index, instruction) in sequence.instructions().iter().enumerate().rev() {
        let mut point = LivenessPoint::new();
        for variable in &carry {
            point.mark(variable, LiveState::Live);
        }
        for variable in instruction.uses() {
            point.mark(variable, LiveState::Live);
        }
        point.mark(instruction.destination(), LiveState::Defined);

        carry = point.live().cloned().collect();
        log::trace!("{}: {:?}", index, point);
        points.push_front(point);
    }

    LivenessTable {
        points: Vec::from(points),
    }
}

use std::{
    collections::HashMap,
    fmt::{self, Debug, Display},
};

use bitvec::prelude::BitVec;
use smallvec::SmallVec;

use crate::ir::Variable;

/// Undirected interference graph over the variables of one block
// Nodes are numbered in the order in which the variables were given
// The bit matrix answers edge queries, the adjacency lists serve iteration
pub struct InterferenceGraph {
    variables: Vec<Variable>,
    index: HashMap<Variable, u32>,
    bit_matrix: BitMatrix,
    adjacency_list: Vec<SmallVec<[u32; 4]>>,
}

impl InterferenceGraph {
    pub fn new(variables: &[Variable]) -> InterferenceGraph {
        let mut nodes = Vec::with_capacity(variables.len());
        let mut index = HashMap::with_capacity(variables.len());
        for variable in variables {
            if !index.contains_key(variable) {
                index.insert(variable.clone(), nodes.len() as u32);
                nodes.push(variable.clone());
            }
        }
        let length = nodes.len();

        InterferenceGraph {
            variables: nodes,
            index,
            bit_matrix: BitMatrix::new(length),
            adjacency_list: vec![SmallVec::new(); length],
        }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, node: u32) -> &Variable {
        &self.variables[node as usize]
    }

    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.index.get(&Variable::new(name)).copied()
    }

    pub fn node(&self, variable: &Variable) -> Option<u32> {
        self.index.get(variable).copied()
    }

    pub fn neighbors(&self, node: u32) -> &[u32] {
        &self.adjacency_list[node as usize]
    }

    pub fn degree(&self, node: u32) -> u32 {
        self.adjacency_list[node as usize].len() as u32
    }

    // Self loops are never stored
    pub fn let_interfere(&mut self, x: u32, y: u32) {
        if x == y {
            return;
        }
        if !self.bit_matrix.replace(x, y, true) {
            self.adjacency_list[x as usize].push(y);
            self.adjacency_list[y as usize].push(x);
        }
    }

    pub fn interfere(&self, x: u32, y: u32) -> bool {
        if cfg!(debug_assertions) {
            let xu = x as usize;
            let yu = y as usize;
            debug_assert_eq!(
                self.adjacency_list[xu].contains(&y),
                self.adjacency_list[yu].contains(&x)
            )
        }
        x != y && self.bit_matrix.get(x, y)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(x), Some(y)) => self.interfere(x, y),
            _ => false,
        }
    }

    /// Every edge once, as (lower node, higher node)
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges = Vec::new();
        for i in 0..self.len() as u32 {
            for j in (i + 1)..self.len() as u32 {
                if self.bit_matrix.get(i, j) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency_list.iter().map(|list| list.len()).sum::<usize>() / 2
    }
}

impl Display for InterferenceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Interference Graph:")?;
        let nodes: Vec<&str> = self.variables.iter().map(|v| v.name()).collect();
        writeln!(f, "Nodes: [{}]", nodes.join(", "))?;
        let edges: Vec<String> = self
            .edges()
            .into_iter()
            .map(|(x, y)| format!("({}, {})", self.variable(x), self.variable(y)))
            .collect();
        write!(f, "Edges: [{}]", edges.join(", "))
    }
}

impl Debug for InterferenceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bitmatrix:{:?}", self.bit_matrix)?;
        writeln!(f, "variables:")?;
        for (node, variable) in self.variables.iter().enumerate() {
            writeln!(f, "\t{} => {}", node, variable)?;
        }
        writeln!(f, "adjacency lists:")?;
        for (node, adjacencies) in self.adjacency_list.iter().enumerate() {
            writeln!(f, "\t{} => {:?}", node, adjacencies)?;
        }
        write!(f, "length: {}", self.len())
    }
}

/// Lower triangle of a symmetric boolean matrix without the diagonal
pub struct BitMatrix {
    vector: BitVec,
    size: usize,
}

impl BitMatrix {
    pub fn new(size: usize) -> BitMatrix {
        let len = (size * size.saturating_sub(1)) / 2;
        BitMatrix {
            vector: BitVec::repeat(false, len),
            size,
        }
    }
    fn to_index(x: u32, y: u32) -> usize {
        assert_ne!(x, y);
        let i = std::cmp::min(x, y) as usize;
        let j = std::cmp::max(x, y) as usize;
        (j * (j - 1)) / 2 + i
    }
    pub fn get(&self, x: u32, y: u32) -> bool {
        let index = BitMatrix::to_index(x, y);
        self.vector[index]
    }
    pub fn replace(&mut self, x: u32, y: u32, value: bool) -> bool {
        let index = BitMatrix::to_index(x, y);
        self.vector.replace(index, value)
    }
}

impl Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for i in 1..self.size {
            write!(f, "{:4}:[", i)?;
            for j in 0..i {
                write!(f, "{}", self.get(i as u32, j as u32) as u32)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

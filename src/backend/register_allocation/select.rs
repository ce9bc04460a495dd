use std::fmt::{self, Debug};

use super::InterferenceGraph;
use crate::error::AllocationError;

/// Register index per graph node, None while unassigned
#[derive(Clone, PartialEq, Eq)]
pub struct ColorMap {
    colors: Vec<Option<u32>>,
}

impl ColorMap {
    pub fn new(length: usize) -> ColorMap {
        ColorMap {
            colors: vec![None; length],
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, node: u32) -> Option<u32> {
        self.colors.get(node as usize).copied().flatten()
    }

    pub fn color_of(&self, graph: &InterferenceGraph, name: &str) -> Option<u32> {
        graph.index_of(name).and_then(|node| self.get(node))
    }

    pub fn set(&mut self, node: u32, color: Option<u32>) {
        self.colors[node as usize] = color;
    }

    pub fn reset(&mut self) {
        for color in self.colors.iter_mut() {
            *color = None;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(|color| color.is_some())
    }

    /// No edge joins two nodes of the same color
    pub fn is_proper(&self, graph: &InterferenceGraph) -> bool {
        graph.edges().into_iter().all(|(x, y)| match (self.get(x), self.get(y)) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        })
    }

    pub fn registers_used(&self) -> u32 {
        self.colors
            .iter()
            .filter_map(|&color| color)
            .max()
            .map_or(0, |max| max + 1)
    }
}

impl Debug for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, color) in self.colors.iter().enumerate() {
            match color {
                Some(color) => writeln!(f, "\t{} => {}", node, color)?,
                None => writeln!(f, "\t{} => -", node)?,
            }
        }
        Ok(())
    }
}

// Exhaustive backtracking search for a coloring with at most `registers` colors
// A complete and proper coloring already present for the same count is kept as is
// On failure the map is left fully unassigned
pub fn color(
    graph: &InterferenceGraph,
    registers: u32,
    colors: &mut ColorMap,
) -> Result<(), AllocationError> {
    log::debug!("Starting select phase with {} registers", registers);
    if colors.len() != graph.len() {
        *colors = ColorMap::new(graph.len());
    }

    if colors.is_complete()
        && colors.is_proper(graph)
        && colors.colors.iter().flatten().all(|&c| c < registers)
    {
        log::debug!("graph is already colored");
        return Ok(());
    }

    colors.reset();
    if assign(graph, registers, colors, 0) {
        log::trace!("Color result:\n{:?}", colors);
        Ok(())
    } else {
        colors.reset();
        log::debug!(
            "{} variables cannot be colored with {} registers",
            graph.len(),
            registers
        );
        Err(AllocationError::Infeasible {
            registers,
            variables: graph.len(),
        })
    }
}

fn assign(graph: &InterferenceGraph, registers: u32, colors: &mut ColorMap, index: usize) -> bool {
    if colors.is_complete() && colors.is_proper(graph) {
        return true;
    }
    if index >= graph.len() {
        return false;
    }

    // Neighbors that are not colored yet do not constrain this node
    let node = index as u32;
    let mut used_colors = vec![false; registers as usize];
    for &n in graph.neighbors(node) {
        if let Some(color) = colors.get(n) {
            if let Some(used) = used_colors.get_mut(color as usize) {
                *used = true;
            }
        }
    }

    for candidate in (0..registers).filter(|&c| !used_colors[c as usize]) {
        log::trace!("try {} => {}", graph.variable(node), candidate);
        colors.set(node, Some(candidate));
        if assign(graph, registers, colors, index + 1) {
            return true;
        }
        log::trace!("undo {} => {}", graph.variable(node), candidate);
        colors.set(node, None);
    }
    false
}

/// The smallest register count for which the graph can be colored
pub fn minimum_registers(graph: &InterferenceGraph) -> u32 {
    let mut colors = ColorMap::new(graph.len());
    (0..=graph.len() as u32)
        .find(|&registers| color(graph, registers, &mut colors).is_ok())
        .unwrap_or(graph.len() as u32)
}

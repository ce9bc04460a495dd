mod common;

use common::XorShift;
use tacc_lib::backend::register_allocation::{color, minimum_registers, ColorMap, InterferenceGraph};
use tacc_lib::error::AllocationError;
use tacc_lib::ir::Variable;

fn graph_from_edges(nodes: usize, edges: &[(u32, u32)]) -> InterferenceGraph {
    let variables: Vec<Variable> = (0..nodes).map(|i| Variable::new(format!("v{}", i))).collect();
    let mut graph = InterferenceGraph::new(&variables);
    for &(x, y) in edges {
        graph.let_interfere(x, y);
    }
    graph
}

fn cycle(nodes: u32) -> InterferenceGraph {
    let edges: Vec<(u32, u32)> = (0..nodes).map(|i| (i, (i + 1) % nodes)).collect();
    graph_from_edges(nodes as usize, &edges)
}

fn clique(nodes: u32) -> InterferenceGraph {
    let mut edges = Vec::new();
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            edges.push((i, j));
        }
    }
    graph_from_edges(nodes as usize, &edges)
}

// Exhaustive check that no proper coloring with the given count exists
fn colorable_by_enumeration(graph: &InterferenceGraph, registers: u32) -> bool {
    let nodes = graph.len() as u32;
    if nodes == 0 {
        return true;
    }
    if registers == 0 {
        return false;
    }
    let total = (registers as u64).pow(nodes);
    let edges = graph.edges();
    (0..total).any(|mut code| {
        let mut assignment = Vec::with_capacity(nodes as usize);
        for _ in 0..nodes {
            assignment.push(code % registers as u64);
            code /= registers as u64;
        }
        edges
            .iter()
            .all(|&(x, y)| assignment[x as usize] != assignment[y as usize])
    })
}

#[test]
fn triangle_needs_three_registers() {
    let graph = clique(3);
    let mut colors = ColorMap::new(graph.len());

    let result = color(&graph, 2, &mut colors);
    assert_eq!(
        result,
        Err(AllocationError::Infeasible {
            registers: 2,
            variables: 3
        })
    );
    assert!((0..3).all(|node| colors.get(node).is_none()));

    assert!(color(&graph, 3, &mut colors).is_ok());
    assert!(colors.is_complete());
    assert!(colors.is_proper(&graph));
}

#[test]
fn odd_cycle_is_not_bipartite() {
    let graph = cycle(5);
    let mut colors = ColorMap::new(graph.len());
    assert!(color(&graph, 2, &mut colors).is_err());
    assert!(color(&graph, 3, &mut colors).is_ok());
    assert_eq!(minimum_registers(&graph), 3);
}

#[test]
fn even_cycle_is_bipartite() {
    let graph = cycle(6);
    let mut colors = ColorMap::new(graph.len());
    assert!(color(&graph, 2, &mut colors).is_ok());
    assert!(colors.is_proper(&graph));
    assert_eq!(colors.registers_used(), 2);
}

#[test]
fn clique_needs_one_register_per_node() {
    let graph = clique(4);
    let mut colors = ColorMap::new(graph.len());
    assert!(color(&graph, 3, &mut colors).is_err());
    assert_eq!(minimum_registers(&graph), 4);
}

#[test]
fn first_candidate_is_taken_in_node_order() {
    let graph = clique(3);
    let mut colors = ColorMap::new(graph.len());
    color(&graph, 5, &mut colors).unwrap();
    assert_eq!(colors.get(0), Some(0));
    assert_eq!(colors.get(1), Some(1));
    assert_eq!(colors.get(2), Some(2));
}

#[test]
fn backtracks_past_a_greedy_dead_end() {
    // Path v0 - v2 - v3 - v1: greedy in node order gives v0=0, v1=0, v2=1
    // and leaves v3 without a color, so v1 has to move
    let graph = graph_from_edges(4, &[(0, 2), (2, 3), (3, 1)]);
    let mut colors = ColorMap::new(graph.len());
    assert!(color(&graph, 2, &mut colors).is_ok());
    assert!(colors.is_complete());
    assert!(colors.is_proper(&graph));
    assert_eq!(colors.get(0), Some(0));
    assert_eq!(colors.get(1), Some(1));
    assert_eq!(colors.color_of(&graph, "v2"), Some(1));
    assert_eq!(colors.color_of(&graph, "v3"), Some(0));
    assert_eq!(colors.color_of(&graph, "v4"), None);
}

#[test]
fn empty_and_isolated_graphs() {
    let empty = graph_from_edges(0, &[]);
    let mut colors = ColorMap::new(0);
    assert!(color(&empty, 1, &mut colors).is_ok());
    assert_eq!(minimum_registers(&empty), 0);

    let isolated = graph_from_edges(5, &[]);
    let mut colors = ColorMap::new(isolated.len());
    assert!(color(&isolated, 1, &mut colors).is_ok());
    assert!((0..5).all(|node| colors.get(node) == Some(0)));
}

#[test]
fn zero_registers_are_infeasible_for_any_variable() {
    let graph = graph_from_edges(1, &[]);
    let mut colors = ColorMap::new(graph.len());
    assert_eq!(
        color(&graph, 0, &mut colors),
        Err(AllocationError::Infeasible {
            registers: 0,
            variables: 1
        })
    );
}

#[test]
fn existing_coloring_is_kept() {
    let graph = clique(3);
    let mut colors = ColorMap::new(graph.len());
    colors.set(0, Some(2));
    colors.set(1, Some(1));
    colors.set(2, Some(0));

    assert!(color(&graph, 3, &mut colors).is_ok());
    assert_eq!(colors.get(0), Some(2));
    assert_eq!(colors.get(1), Some(1));
    assert_eq!(colors.get(2), Some(0));

    let before = colors.clone();
    assert!(color(&graph, 3, &mut colors).is_ok());
    assert_eq!(before, colors);
}

#[test]
fn existing_coloring_out_of_range_is_recomputed() {
    let graph = clique(2);
    let mut colors = ColorMap::new(graph.len());
    colors.set(0, Some(7));
    colors.set(1, Some(3));
    assert!(color(&graph, 2, &mut colors).is_ok());
    assert_eq!(colors.get(0), Some(0));
    assert_eq!(colors.get(1), Some(1));
}

#[test]
fn success_is_proper_and_failure_is_exhaustive() {
    let mut rng = XorShift::new(1234);
    for _ in 0..40 {
        let nodes = rng.below(7) as u32;
        let mut edges = Vec::new();
        for i in 0..nodes {
            for j in (i + 1)..nodes {
                if rng.below(2) == 0 {
                    edges.push((i, j));
                }
            }
        }
        let graph = graph_from_edges(nodes as usize, &edges);

        for registers in 0..=nodes.min(4) {
            let mut colors = ColorMap::new(graph.len());
            match color(&graph, registers, &mut colors) {
                Ok(()) => {
                    assert!(colors.is_complete());
                    assert!(colors.is_proper(&graph));
                    assert!(colors.registers_used() <= registers);
                }
                Err(_) => {
                    assert!(!colorable_by_enumeration(&graph, registers));
                    assert!((0..nodes).all(|node| colors.get(node).is_none()));
                }
            }
        }

        let minimum = minimum_registers(&graph);
        assert!(colorable_by_enumeration(&graph, minimum));
        if minimum > 0 {
            assert!(!colorable_by_enumeration(&graph, minimum - 1));
        }
    }
}

use std::fs::read_to_string;

use crate::backend::emit;
use crate::backend::register_allocation::{
    build, color, find_liveness, minimum_registers, ColorMap, EdgeMembership, InterferenceGraph,
    LivenessTable, RegisterAssignment,
};
use crate::error::{AllocationError, CompileError};
use crate::ir::InstructionSequence;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Parameters of one compilation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub registers: u32,
    pub grow: bool,
    pub membership: EdgeMembership,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            registers: 4,
            grow: false,
            membership: EdgeMembership::AllEntries,
        }
    }
}

/// Every artefact produced along the pipeline
#[derive(Debug)]
pub struct Compilation {
    pub sequence: InstructionSequence,
    pub liveness: LivenessTable,
    pub graph: InterferenceGraph,
    pub colors: ColorMap,
    pub registers: u32,
    pub listing: Vec<String>,
}

fn open(filename: &str) -> Result<String, CompileError> {
    read_to_string(filename).map_err(|err| CompileError::Io(filename.to_string(), err))
}

pub fn compile(filename: &str, settings: &Settings) -> Result<Compilation, CompileError> {
    let source = open(filename)?;
    compile_source(filename, &source, settings)
}

pub fn compile_source(
    name: &str,
    source: &str,
    settings: &Settings,
) -> Result<Compilation, CompileError> {
    if settings.registers == 0 {
        return Err(AllocationError::NoRegisters.into());
    }

    let mut lexer = Lexer::new(name);
    let (tokens, result) = lexer.lex(&mut source.chars());
    result.map_err(CompileError::Lex)?;

    let sequence = Parser::new(tokens).parse().map_err(CompileError::Parse)?;
    log::info!("{}: {} instructions", name, sequence.len());
    for variable in sequence.undeclared_live_out() {
        log::warn!("{}: live object {} is never mentioned in the block", name, variable);
    }

    let liveness = find_liveness(&sequence);
    let graph = build(&liveness, sequence.variables(), settings.membership);

    let mut colors = ColorMap::new(graph.len());
    let registers = match color(&graph, settings.registers, &mut colors) {
        Ok(()) => settings.registers,
        Err(AllocationError::Infeasible { .. }) if settings.grow => {
            let registers = minimum_registers(&graph);
            log::info!(
                "{} registers are not enough, growing to {}",
                settings.registers,
                registers
            );
            color(&graph, registers, &mut colors)?;
            registers
        }
        Err(err) => {
            log::warn!("{}: {}", name, err);
            return Err(err.into());
        }
    };

    let assignment = RegisterAssignment::from_coloring(&graph, &colors)?;
    let listing = emit(&sequence, &assignment)?;
    log::info!("{}: emitted {} lines", name, listing.len());

    Ok(Compilation {
        sequence,
        liveness,
        graph,
        colors,
        registers,
        listing,
    })
}

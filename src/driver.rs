use std::fs;

use crate::compiler::{self, Compilation, Settings};
use crate::error::CompileError;
use crate::options::Options;

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum Stage {
    Liveness,
    Graph,
    Listing,
}

impl Options {
    pub fn stage(&self) -> Stage {
        if self.last_stage.liveness {
            Stage::Liveness
        } else if self.last_stage.graph {
            Stage::Graph
        } else {
            Stage::Listing
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            registers: self.registers,
            grow: self.grow,
            membership: self.membership,
        }
    }
}

// Renders the output requested by the last stage
pub fn render(compilation: &Compilation, stage: Stage) -> String {
    match stage {
        Stage::Liveness => compilation
            .liveness
            .display(&compilation.sequence)
            .to_string(),
        Stage::Graph => {
            let mut output = compilation.graph.to_string();
            output.push_str("\nColors:");
            for variable in compilation.graph.variables() {
                match compilation
                    .colors
                    .color_of(&compilation.graph, variable.name())
                {
                    Some(color) => output.push_str(&format!("\n\t{} => R{}", variable, color)),
                    None => output.push_str(&format!("\n\t{} => -", variable)),
                }
            }
            output
        }
        Stage::Listing => compilation.listing.join("\n"),
    }
}

pub fn drive(options: Options) -> Result<(), CompileError> {
    log::info!("driver started");
    let stage = options.stage();
    let settings = options.settings();
    log::debug!("Going to {:?} with {:?}", stage, settings);

    let compilation = compiler::compile(&options.input, &settings)?;
    let mut output = render(&compilation, stage);
    output.push('\n');

    match &options.output {
        Some(filename) => {
            fs::write(filename, output).map_err(|err| CompileError::Io(filename.clone(), err))?;
            log::info!("listing written to {}", filename);
        }
        None => print!("{}", output),
    }
    Ok(())
}

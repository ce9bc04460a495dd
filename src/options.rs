use clap::{ArgGroup, Args, Parser};

use crate::backend::register_allocation::EdgeMembership;

#[derive(Clone, Debug, Parser)]
#[clap(author, version, about)]
pub struct Options {
    /// Input file
    #[clap(required = true)]
    pub input: String,

    /// Output file, the listing is printed when absent
    #[clap(short, long)]
    pub output: Option<String>,

    /// Number of registers available
    #[clap(short, long, default_value_t = 4)]
    pub registers: u32,

    /// Use the smallest sufficient register count when the given count is too small
    #[clap(long)]
    pub grow: bool,

    /// Which entries of a liveness point interfere: all entries or only live ones
    #[clap(long = "interference", default_value_t = EdgeMembership::AllEntries, possible_values(&["all", "live"]))]
    pub membership: EdgeMembership,

    #[clap(flatten)]
    pub last_stage: OptionStage,

    /// Log verbosity, can be repeated
    #[clap(short, parse(from_occurrences))]
    pub verbose: u8,
}

#[derive(Clone, Debug, Args)]
#[clap(group(
    ArgGroup::new("stage")
        .required(false)
        .args(& ["liveness", "graph"])
))]
pub struct OptionStage {
    /// Print the liveness table and stop
    #[clap(short = 'l')]
    pub liveness: bool,

    /// Print the interference graph and its coloring and stop
    #[clap(short = 'g')]
    pub graph: bool,
}

/// Gets command line options and input using clap.
/// Returns an Options struct representing the fully parsed options
pub fn get() -> Options {
    Options::parse()
}

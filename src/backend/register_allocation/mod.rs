mod build;
mod graph;
mod live_analysis;
mod register;
mod select;

pub use self::build::*;
pub use self::graph::*;
pub use self::live_analysis::*;
pub use self::register::*;
pub use self::select::*;

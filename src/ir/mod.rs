mod ir;
mod print_ir;

pub use self::ir::*;

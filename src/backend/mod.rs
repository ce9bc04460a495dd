pub mod emit;
pub mod register_allocation;

pub use self::emit::{emit, Emitter};

pub mod backend;
pub mod compiler;
pub mod driver;
pub mod error;
pub mod file_table;
pub mod ir;
pub mod lexer;
pub mod logger;
pub mod options;
pub mod parser;
pub mod span;
pub mod token;

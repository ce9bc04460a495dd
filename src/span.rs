use std::fmt::{Debug, Display};

/// Struct too show where a token or instruction originates from.
// .file_index gives the index into the list of files
// .line is the line number of the start of the token.
// .column is the column number of the start.
// .offset is the character offset at which the area starts.
// .length is the length of the area.
#[derive(PartialEq, Eq, Clone)]
pub struct Span {
    file_index: u32,
    line: u32,
    column: u32,
    offset: u32,
    length: u32,
}

impl Span {
    pub fn new(file_index: u32, line: u32, column: u32, offset: u32, length: u32) -> Self {
        Span {
            file_index,
            line,
            column,
            offset,
            length,
        }
    }
    pub fn line(&self) -> u32 {
        self.line
    }
    pub fn column(&self) -> u32 {
        self.column
    }
    pub fn offset(&self) -> u32 {
        self.offset
    }
    pub fn length(&self) -> u32 {
        self.length
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::file_table;
        let file = file_table::get_sourcefile(self.file_index);
        write!(f, "{}:{}:{}", file, self.line, self.column)
    }
}

// Diagnostics print spans with {:?}, which should read like a location
impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

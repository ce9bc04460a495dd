use std::sync::Mutex;

use lazy_static::lazy_static;

// This file contains a process wide filetable that is filled by the lexer
// Used by spans to get access to the name of the source
lazy_static! {
    static ref GLOBAL_FILE_TABLE: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

/// Registers a source name and returns its index in the table
pub fn add_sourcefile(s: &str) -> u32 {
    let mut table = match GLOBAL_FILE_TABLE.lock() {
        Ok(table) => table,
        Err(poisoned) => poisoned.into_inner(),
    };
    table.push(s.to_string());
    (table.len() - 1) as u32
}

pub fn get_sourcefile(index: u32) -> String {
    let table = match GLOBAL_FILE_TABLE.lock() {
        Ok(table) => table,
        Err(poisoned) => poisoned.into_inner(),
    };
    table
        .get(index as usize)
        .cloned()
        .unwrap_or_else(|| String::from("<unknown>"))
}

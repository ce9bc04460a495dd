use std::collections::HashSet;

use super::Parser;
use crate::ir::Variable;
use crate::token::TokenType;

impl Parser {
    // live := 'live:' [ident {[','] ident}]
    // Everything up to the end of the input belongs to the live line
    // Duplicates are dropped, keeping the first occurrence
    pub(super) fn parse_live(&mut self) -> Vec<Variable> {
        self.next();
        let mut live = Vec::new();
        let mut seen = HashSet::new();

        while let Some(token) = self.peek_type() {
            match token {
                TokenType::Ident(name) => {
                    let variable = Variable::new(name);
                    if !self.declared.contains(&variable) {
                        self.error_here(format!(
                            "Live object '{}' has not been declared in previous instructions",
                            variable
                        ));
                    } else if seen.insert(variable.clone()) {
                        live.push(variable);
                    } else {
                        log::debug!("dropping duplicate live object {}", variable);
                    }
                }
                TokenType::Comma | TokenType::Newline => (),
                _ => {
                    self.error_here(format!("Expected a live variable, but found {}", token));
                }
            }
            self.next();
        }
        live
    }
}

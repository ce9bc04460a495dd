use std::fmt::Display;

use super::Parser;
use crate::token::{Token, TokenType};

/* The RecoveryStrategy is used to specify how the parser might recover from an error
** UntilNewline - Remove all tokens until and including the first newline
*/
#[derive(Clone, Debug)]
pub enum RecoveryStrategy {
    UntilNewline,
}

impl Parser {
    pub(super) fn recover(&mut self, strategy: &RecoveryStrategy) {
        log::debug!("Recovering from parsing error");
        log::debug!("Strategy: {}", strategy);
        while let Some(token) = self.peek() {
            if self.try_recover(&token, strategy) {
                log::debug!("Succesfully recovered");
                break;
            }
            self.next();
        }
    }

    fn try_recover(&mut self, token: &Token, strategy: &RecoveryStrategy) -> bool {
        match strategy {
            RecoveryStrategy::UntilNewline => {
                let result = *token.token_ref() == TokenType::Newline;
                if result {
                    self.next();
                }
                result
            }
        }
    }
}

impl Display for RecoveryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoveryStrategy::UntilNewline => write!(f, "until newline"),
        }
    }
}

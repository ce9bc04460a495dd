mod parse_instruction;
mod parse_live;
mod recovery;

use std::collections::HashSet;

use crate::error;
use crate::ir::{InstructionSequence, Variable};
use crate::token::{Token, TokenType};

pub use self::recovery::RecoveryStrategy;

// The parser keeps an explicit cursor into the token stream produced by the lexer
// Errors are collected, after which the parser recovers to the next line
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    errors: Vec<String>,
    declared: HashSet<Variable>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        Parser {
            tokens,
            index: 0,
            errors: Vec::new(),
            declared: HashSet::new(),
        }
    }

    /// Parses all instructions and the optional live line that ends the block
    pub fn parse(mut self) -> Result<InstructionSequence, Vec<String>> {
        log::debug!("parser started on {} tokens", self.tokens.len());
        let mut instructions = Vec::new();
        let mut live_out = Vec::new();

        loop {
            self.skip_newlines();
            match self.peek_type() {
                None => break,
                Some(TokenType::Live) => {
                    live_out = self.parse_live();
                    break;
                }
                Some(_) => match self.parse_instruction() {
                    Ok(instruction) => {
                        log::trace!("parsed instruction {}", instruction);
                        instructions.push(instruction);
                    }
                    Err(()) => self.recover(&RecoveryStrategy::UntilNewline),
                },
            }
        }

        if self.errors.is_empty() {
            let sequence = InstructionSequence::new(instructions, live_out);
            log::debug!(
                "parsed {} instructions over {} variables",
                sequence.len(),
                sequence.variables().len()
            );
            Ok(sequence)
        } else {
            Err(self.errors)
        }
    }

    pub(self) fn peek(&self) -> Option<Token> {
        self.tokens.get(self.index).cloned()
    }

    pub(self) fn peek_type(&self) -> Option<TokenType> {
        self.tokens.get(self.index).map(|token| token.token())
    }

    pub(self) fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    fn skip_newlines(&mut self) {
        while let Some(TokenType::Newline) = self.peek_type() {
            self.next();
        }
    }

    // Records an error at the current token, or at the last token at the end of input
    pub(self) fn error_here(&mut self, message: String) {
        let span = self
            .tokens
            .get(self.index)
            .or_else(|| self.tokens.last())
            .map(|token| token.span().clone());
        let error = match span {
            Some(span) => error!(span, "{}", message),
            None => format!("error: {}", message),
        };
        self.errors.push(error);
    }

    pub(self) fn describe_next(&self) -> String {
        match self.peek() {
            Some(token) => token.to_string(),
            None => String::from("end of file"),
        }
    }
}

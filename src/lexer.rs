use crate::error;
use crate::file_table;
use crate::span::Span;
use crate::token;
use crate::token::Token;
use crate::token::TokenType;

// The Lexer is a mutuable structure keeping track of the current location in the source
pub struct Lexer {
    file_index: u32,
    line: u32,
    column: u32,
    offset: u32,
    last_char: Option<char>,
}

impl Lexer {
    pub fn new(filename: &str) -> Lexer {
        let file_index = file_table::add_sourcefile(filename);
        Lexer {
            file_index,
            line: 1,
            column: 1,
            offset: 0,
            last_char: None,
        }
    }
}

impl Lexer {
    // Returns the location of the next character
    fn here(&self) -> Span {
        Span::new(self.file_index, self.line, self.column, self.offset, 1)
    }

    // Returns the area from start up to the current location
    fn since(&self, start: &Span) -> Span {
        Span::new(
            self.file_index,
            start.line(),
            start.column(),
            start.offset(),
            self.offset - start.offset(),
        )
    }

    pub fn peek<T: Iterator<Item = char>>(&mut self, it: &mut T) -> Option<char> {
        if self.last_char.is_none() {
            self.last_char = it.next();
        }
        self.last_char
    }

    pub fn next<T: Iterator<Item = char>>(&mut self, it: &mut T) -> Option<char> {
        let result = self.peek(it);
        self.last_char = None;
        // Keeping track of current character location and offset
        if let Some(c) = result {
            self.offset += 1;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        result
    }

    // General lexing function
    // Identifiers and numbers are split out
    // The lexer can work on any arbitrary iterator that returns characters
    pub fn lex<T: Iterator<Item = char>>(
        &mut self,
        input: &mut T,
    ) -> (Vec<Token>, Result<(), Vec<String>>) {
        let mut output = Vec::<Token>::new();
        let mut errors = Vec::<String>::new();
        while let Some(c) = self.peek(input) {
            match c {
                'a'..='z' | 'A'..='Z' => match self.lex_identifier(input) {
                    (token, Ok(_)) => output.push(token),
                    (token, Err(err)) => {
                        output.push(token);
                        errors.push(err);
                    }
                },
                '0'..='9' => match self.lex_number(input) {
                    (token, Ok(_)) => output.push(token),
                    (token, Err(err)) => {
                        output.push(token);
                        errors.push(err);
                    }
                },
                '+' | '-' | '*' | '/' | '=' | ',' | '\n' => {
                    let begin = self.here();
                    self.next(input);
                    output.push(Token::new(token::punct(c), begin));
                }
                ' ' | '\t' | '\r' => {
                    self.next(input);
                }
                _ => {
                    let begin = self.here();
                    self.next(input);
                    errors.push(error!(begin, "Invalid character {:?}", c));
                }
            }
        }
        log::debug!("lexed {} tokens with {} errors", output.len(), errors.len());
        match errors.is_empty() {
            true => (output, Ok(())),
            false => (output, Err(errors)),
        }
    }

    // Lex an identifier or the live keyword
    pub fn lex_identifier<T: Iterator<Item = char>>(
        &mut self,
        input: &mut T,
    ) -> (Token, Result<(), String>) {
        let start = self.here();
        let mut identifier = String::new();
        while let Some(c) = self.peek(input) {
            match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' => {
                    self.next(input);
                    identifier.push(c);
                }
                _ => {
                    break;
                }
            }
        }

        if identifier == "live" {
            if let Some(':') = self.peek(input) {
                self.next(input);
                return (Token::new(TokenType::Live, self.since(&start)), Ok(()));
            }
        }

        let span = self.since(&start);
        match self.peek(input) {
            Some(':') => {
                self.next(input);
                let span = self.since(&start);
                (
                    Token::new(TokenType::Ident(identifier.clone()), span.clone()),
                    Err(error!(span, "Expected 'live:', but found '{}:'", identifier)),
                )
            }
            _ => (Token::new(TokenType::Ident(identifier), span), Ok(())),
        }
    }

    // Lex a number
    // Only decimal numbers are allowed and a number may not run into a name
    pub fn lex_number<T: Iterator<Item = char>>(
        &mut self,
        input: &mut T,
    ) -> (Token, Result<(), String>) {
        let start = self.here();
        let mut number = String::new();
        let mut is_symbol = false;
        while let Some(c) = self.peek(input) {
            match c {
                '0'..='9' => {
                    self.next(input);
                    number.push(c);
                }
                'a'..='z' | 'A'..='Z' => {
                    self.next(input);
                    number.push(c);
                    is_symbol = true;
                }
                _ => {
                    break;
                }
            }
        }
        let span: Span = self.since(&start);
        if is_symbol {
            return (
                Token::new(TokenType::Ident(number.clone()), span.clone()),
                Err(error!(span, "Invalid symbol starting with a number: {}", number)),
            );
        }
        match number.parse::<u64>() {
            Ok(value) => (Token::new(TokenType::ConstI(value), span), Ok(())),
            Err(_) => (
                Token::new(TokenType::ConstI(0), span.clone()),
                Err(error!(
                    span,
                    "number {} to big too fit in any integer", number
                )),
            ),
        }
    }
}

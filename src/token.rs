use std::fmt::Display;

use crate::span::Span;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum TokenType {
    //Keywords
    Live,

    //Punctuation symbols
    Plus,
    Minus,
    Asterisk,
    Slash,
    Assign,
    Comma,
    Newline,

    //Types with a value
    ConstI(u64),
    Ident(String),
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Token {
    span: Span,
    token: TokenType,
}

pub fn punct<T: Into<TokenType>>(input: T) -> TokenType {
    input.into()
}

impl Token {
    pub fn new(token: TokenType, span: Span) -> Token {
        Token { span, token }
    }
    pub fn span(&self) -> &Span {
        &self.span
    }
    pub fn token(&self) -> TokenType {
        self.token.clone()
    }
    pub fn token_ref(&self) -> &TokenType {
        &self.token
    }
}

impl TokenType {
    pub fn is_operator(&self) -> bool {
        use TokenType::*;
        matches!(self, Plus | Minus | Asterisk | Slash)
    }
}

impl From<char> for TokenType {
    fn from(c: char) -> TokenType {
        use TokenType::*;
        match c {
            '+' => Plus,
            '-' => Minus,
            '*' => Asterisk,
            '/' => Slash,
            '=' => Assign,
            ',' => Comma,
            '\n' => Newline,
            _ => {
                log::warn!(
                    "char to TokenType conversion with unimplemented character {:?}",
                    c
                );
                Newline
            }
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TokenType::*;
        match self {
            Live => write!(f, "'live:'"),

            Plus => write!(f, "'+'"),
            Minus => write!(f, "'-'"),
            Asterisk => write!(f, "'*'"),
            Slash => write!(f, "'/'"),
            Assign => write!(f, "'='"),
            Comma => write!(f, "','"),
            Newline => write!(f, "newline"),

            Ident(val) => write!(f, "'{}'", val),
            ConstI(val) => write!(f, "'{}'", val),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token)
    }
}

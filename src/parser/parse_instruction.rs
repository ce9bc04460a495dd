use super::Parser;
use crate::ir::{BinaryOperator, Instruction, Operand, UnaryOperator, Variable};
use crate::token::TokenType;

impl Parser {
    // instruction := ident '=' operand [operator operand] newline
    //              | ident '=' operator operand newline
    pub(super) fn parse_instruction(&mut self) -> Result<Instruction, ()> {
        let dest = match self.peek_type() {
            Some(TokenType::Ident(name)) => {
                self.next();
                Variable::new(name)
            }
            _ => {
                let found = self.describe_next();
                self.error_here(format!(
                    "Expected a destination variable, but found {}",
                    found
                ));
                return Err(());
            }
        };

        if let Some(TokenType::Assign) = self.peek_type() {
            self.next();
        } else {
            let found = self.describe_next();
            self.error_here(format!("Expected '=' after '{}', but found {}", dest, found));
            return Err(());
        }

        let instruction = match self.peek_type() {
            Some(token) if token.is_operator() => {
                let op = match token {
                    TokenType::Minus => UnaryOperator::Neg,
                    _ => {
                        self.error_here(format!("Unsupported unary operator {}", token));
                        return Err(());
                    }
                };
                self.next();
                let operand = self.parse_operand()?;
                Instruction::UnaryOp { dest, op, operand }
            }
            _ => {
                let op1 = self.parse_operand()?;
                match self.peek_type() {
                    Some(token) if token.is_operator() => {
                        self.next();
                        let op = binary_operator(&token);
                        let op2 = self.parse_operand()?;
                        Instruction::BinaryOp { dest, op1, op, op2 }
                    }
                    _ => Instruction::Assignment { dest, source: op1 },
                }
            }
        };

        self.expect_end_of_line()?;

        self.declared.insert(instruction.destination().clone());
        for variable in instruction.uses() {
            self.declared.insert(variable.clone());
        }
        Ok(instruction)
    }

    fn parse_operand(&mut self) -> Result<Operand, ()> {
        match self.peek_type() {
            Some(TokenType::Ident(name)) => {
                self.next();
                Ok(Operand::Variable(Variable::new(name)))
            }
            Some(TokenType::ConstI(value)) => {
                self.next();
                Ok(Operand::Literal(value))
            }
            _ => {
                let found = self.describe_next();
                self.error_here(format!(
                    "Expected a variable or integer literal, but found {}",
                    found
                ));
                Err(())
            }
        }
    }

    fn expect_end_of_line(&mut self) -> Result<(), ()> {
        match self.peek_type() {
            Some(TokenType::Newline) => {
                self.next();
                Ok(())
            }
            None => Ok(()),
            Some(_) => {
                let found = self.describe_next();
                self.error_here(format!("Expected end of line, but found {}", found));
                Err(())
            }
        }
    }
}

fn binary_operator(token: &TokenType) -> BinaryOperator {
    match token {
        TokenType::Plus => BinaryOperator::Add,
        TokenType::Minus => BinaryOperator::Sub,
        TokenType::Asterisk => BinaryOperator::Mul,
        TokenType::Slash => BinaryOperator::Div,
        _ => unreachable!("binary_operator called on {}", token),
    }
}

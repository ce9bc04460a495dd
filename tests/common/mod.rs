#![allow(dead_code)]
use tacc_lib::ir::{BinaryOperator, Instruction, InstructionSequence, Operand, Variable};
use tacc_lib::lexer::Lexer;
use tacc_lib::parser::Parser;

pub fn parse(source: &str) -> InstructionSequence {
    let mut lexer = Lexer::new("test.tac");
    let (tokens, result) = lexer.lex(&mut source.chars());
    result.expect("lexing failed");
    Parser::new(tokens).parse().expect("parsing failed")
}

pub fn parse_errors(source: &str) -> Vec<String> {
    let mut lexer = Lexer::new("test.tac");
    let (tokens, result) = lexer.lex(&mut source.chars());
    if let Err(errors) = result {
        return errors;
    }
    match Parser::new(tokens).parse() {
        Ok(sequence) => panic!("expected an error, but parsed:\n{}", sequence),
        Err(errors) => errors,
    }
}

pub const SCENARIO_A: &str = "a = a + 1\nt1 = a * 2\nb = t1 / 3\nlive: a, b\n";
pub const SCENARIO_B: &str = "x = 1\nx = x + 1\ny = 2\nlive: y\n";

// Small deterministic generator so random blocks are reproducible
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> XorShift {
        XorShift(seed | 1)
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

const NAMES: [&str; 6] = ["a", "b", "c", "d", "t1", "t2"];

fn random_operand(rng: &mut XorShift) -> Operand {
    if rng.below(4) == 0 {
        Operand::Literal(rng.below(10))
    } else {
        Operand::var(NAMES[rng.below(NAMES.len() as u64) as usize])
    }
}

pub fn random_sequence(rng: &mut XorShift, length: usize) -> InstructionSequence {
    let mut instructions = Vec::with_capacity(length);
    for _ in 0..length {
        let dest = NAMES[rng.below(NAMES.len() as u64) as usize];
        let instruction = match rng.below(3) {
            0 => Instruction::assign(dest, random_operand(rng)),
            1 => Instruction::negate(dest, random_operand(rng)),
            _ => {
                let op = match rng.below(4) {
                    0 => BinaryOperator::Add,
                    1 => BinaryOperator::Sub,
                    2 => BinaryOperator::Mul,
                    _ => BinaryOperator::Div,
                };
                Instruction::binary(dest, random_operand(rng), op, random_operand(rng))
            }
        };
        instructions.push(instruction);
    }

    let mentioned = InstructionSequence::new(instructions.clone(), Vec::new());
    let live_out: Vec<Variable> = mentioned
        .variables()
        .iter()
        .filter(|_| rng.below(2) == 0)
        .cloned()
        .collect();
    InstructionSequence::new(instructions, live_out)
}

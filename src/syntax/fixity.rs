//! Operator fixity and re-association of flat operator chains.
//!
//! The parser keeps `a + b * c` as a flat [`BinOpChain`]. [`resolve`] groups
//! such a chain by precedence climbing over [`OPERATOR_TABLE`].

use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;

use crate::diagnostics::position::Span;
use crate::syntax::expression::{BinOpChain, BinaryOperator, Expression};
use crate::syntax::token_type::TokenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    LogicalOr,  // ||
    LogicalAnd, // &&
    Comparison, // < >
    Sum,        // + -
    Product,    // * /
    Power,      // ^
}

impl Precedence {
    /// Numeric level, 1 for `||` up to 6 for `^`.
    pub fn level(self) -> u8 {
        self as u8
    }

    fn next(self) -> Precedence {
        match self {
            Precedence::Lowest => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::Comparison,
            Precedence::Comparison => Precedence::Sum,
            Precedence::Sum => Precedence::Product,
            Precedence::Product | Precedence::Power => Precedence::Power,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
    Nonassoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub token: TokenType,
    pub precedence: Precedence,
    pub associativity: Assoc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfixInfo {
    pub precedence: Precedence,
    pub associativity: Assoc,
}

// Single source of truth for operator precedence + associativity.
pub const OPERATOR_TABLE: &[OpInfo] = &[
    OpInfo {
        token: TokenType::Or,
        precedence: Precedence::LogicalOr,
        associativity: Assoc::Left,
    },
    OpInfo {
        token: TokenType::And,
        precedence: Precedence::LogicalAnd,
        associativity: Assoc::Left,
    },
    OpInfo {
        token: TokenType::Lt,
        precedence: Precedence::Comparison,
        associativity: Assoc::Nonassoc,
    },
    OpInfo {
        token: TokenType::Gt,
        precedence: Precedence::Comparison,
        associativity: Assoc::Nonassoc,
    },
    OpInfo {
        token: TokenType::Plus,
        precedence: Precedence::Sum,
        associativity: Assoc::Left,
    },
    OpInfo {
        token: TokenType::Minus,
        precedence: Precedence::Sum,
        associativity: Assoc::Left,
    },
    OpInfo {
        token: TokenType::Asterisk,
        precedence: Precedence::Product,
        associativity: Assoc::Left,
    },
    OpInfo {
        token: TokenType::Slash,
        precedence: Precedence::Product,
        associativity: Assoc::Left,
    },
    OpInfo {
        token: TokenType::Caret,
        precedence: Precedence::Power,
        associativity: Assoc::Right,
    },
];

pub static INFIX_TABLE: LazyLock<[Option<InfixInfo>; TokenType::COUNT]> = LazyLock::new(|| {
    let mut table = [None; TokenType::COUNT];
    for info in OPERATOR_TABLE {
        let index = info.token.as_usize();
        debug_assert!(
            table[index].is_none(),
            "duplicate operator table entry for token {:?}",
            info.token
        );
        table[index] = Some(InfixInfo {
            precedence: info.precedence,
            associativity: info.associativity,
        });
    }
    table
});

pub fn infix_op(token_type: TokenType) -> Option<InfixInfo> {
    INFIX_TABLE[token_type.as_usize()]
}

pub fn is_binary_operator(token_type: TokenType) -> bool {
    infix_op(token_type).is_some()
}

/// A chain grouped by fixity. Operands borrow from the chain they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorTree<'a> {
    Operand(&'a Expression),
    Binary {
        left: Box<OperatorTree<'a>>,
        operator: BinaryOperator,
        right: Box<OperatorTree<'a>>,
        span: Span,
    },
}

impl OperatorTree<'_> {
    pub fn span(&self) -> Span {
        match self {
            OperatorTree::Operand(expression) => expression.span(),
            OperatorTree::Binary { span, .. } => *span,
        }
    }
}

impl fmt::Display for OperatorTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorTree::Operand(expression) => write!(f, "{}", expression),
            OperatorTree::Binary {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixityError {
    #[error("comparison operators `{left}` and `{right}` cannot be chained")]
    AmbiguousComparison {
        left: BinaryOperator,
        right: BinaryOperator,
    },
    #[error("`{0}` is not an infix operator")]
    UnknownOperator(BinaryOperator),
    #[error("operator chain has {operands} operands for {operators} operators")]
    MalformedChain { operands: usize, operators: usize },
}

/// Re-associates a flat chain according to [`OPERATOR_TABLE`].
///
/// Left-associative operators fold left to right, `^` folds right to left,
/// and two comparisons at the same level without parentheses are an error.
pub fn resolve(chain: &BinOpChain) -> Result<OperatorTree<'_>, FixityError> {
    if chain.operands.len() != chain.operators.len() + 1 {
        return Err(FixityError::MalformedChain {
            operands: chain.operands.len(),
            operators: chain.operators.len(),
        });
    }
    if let Some(unknown) = chain
        .operators
        .iter()
        .find(|op| infix_op(op.token_type).is_none())
    {
        return Err(FixityError::UnknownOperator(*unknown));
    }

    let mut climber = Climber {
        chain,
        next_operand: 0,
        next_operator: 0,
    };
    climber.climb(Precedence::LogicalOr)
}

struct Climber<'a> {
    chain: &'a BinOpChain,
    next_operand: usize,
    next_operator: usize,
}

impl<'a> Climber<'a> {
    fn peek_operator(&self) -> Option<(BinaryOperator, InfixInfo)> {
        let operator = *self.chain.operators.get(self.next_operator)?;
        infix_op(operator.token_type).map(|info| (operator, info))
    }

    fn take_operand(&mut self) -> OperatorTree<'a> {
        let operand = &self.chain.operands[self.next_operand];
        self.next_operand += 1;
        OperatorTree::Operand(operand)
    }

    fn climb(&mut self, min: Precedence) -> Result<OperatorTree<'a>, FixityError> {
        let mut left = self.take_operand();

        while let Some((operator, info)) = self.peek_operator() {
            if info.precedence < min {
                break;
            }
            self.next_operator += 1;

            let right_min = match info.associativity {
                Assoc::Left | Assoc::Nonassoc => info.precedence.next(),
                Assoc::Right => info.precedence,
            };
            let right = self.climb(right_min)?;
            let span = left.span().merge(right.span());
            left = OperatorTree::Binary {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                span,
            };

            if info.associativity == Assoc::Nonassoc
                && let Some((next, next_info)) = self.peek_operator()
                && next_info.precedence == info.precedence
            {
                return Err(FixityError::AmbiguousComparison {
                    left: operator,
                    right: next,
                });
            }
        }

        Ok(left)
    }
}

use std::fmt;

use serde::Serialize;

use crate::diagnostics::position::Span;

use super::declaration::{TypeAnnotation, ValueDeclaration};
use super::name::{Name, QualifiedName};
use super::pattern::Pattern;
use super::token_type::TokenType;

/// A literal, kept as its exact source text (quotes and escapes included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Literal {
    Int(String),
    Float(String),
    String(String),
    Char(String),
}

impl Literal {
    pub fn raw(&self) -> &str {
        match self {
            Literal::Int(raw) | Literal::Float(raw) | Literal::String(raw) | Literal::Char(raw) => {
                raw
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// An infix operator occurrence inside a [`BinOpChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BinaryOperator {
    pub token_type: TokenType,
    pub span: Span,
}

impl BinaryOperator {
    pub fn symbol(&self) -> String {
        self.token_type.to_string()
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token_type)
    }
}

/// Operands joined by infix operators, exactly as written and not yet
/// grouped by precedence. `operators.len() + 1 == operands.len()`.
///
/// See [`crate::syntax::fixity::resolve`] for the grouped view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinOpChain {
    pub operands: Vec<Expression>,
    pub operators: Vec<BinaryOperator>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordField {
    pub name: Name,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseBranch {
    pub pattern: Pattern,
    pub body: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum LetDeclaration {
    Value(ValueDeclaration),
    Annotation(TypeAnnotation),
}

impl LetDeclaration {
    pub fn span(&self) -> Span {
        match self {
            LetDeclaration::Value(value) => value.span,
            LetDeclaration::Annotation(annotation) => annotation.span,
        }
    }
}

impl fmt::Display for LetDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetDeclaration::Value(value) => write!(f, "{}", value),
            LetDeclaration::Annotation(annotation) => write!(f, "{}", annotation),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Expression {
    Literal {
        literal: Literal,
        span: Span,
    },
    /// `x`, `List.map`, `Just`, `Maybe.Nothing`
    Value {
        name: QualifiedName,
        span: Span,
    },
    /// `record.field`
    FieldAccess {
        target: Box<Expression>,
        field: Name,
        span: Span,
    },
    /// `.field` used as a function
    FieldAccessor {
        field: Name,
        span: Span,
    },
    /// `(+)`
    OperatorFunction {
        operator: BinaryOperator,
        span: Span,
    },
    Negate {
        operand: Box<Expression>,
        span: Span,
    },
    Parenthesized {
        inner: Box<Expression>,
        span: Span,
    },
    Unit {
        span: Span,
    },
    Tuple {
        elements: Vec<Expression>,
        span: Span,
    },
    List {
        elements: Vec<Expression>,
        span: Span,
    },
    /// `{ a = 1 }`, or `{ base | a = 1 }` for record update.
    Record {
        base: Option<Name>,
        fields: Vec<RecordField>,
        span: Span,
    },
    /// `else if` chains nest in `else_branch`.
    If {
        condition: Box<Expression>,
        then_branch: Box<Expression>,
        else_branch: Box<Expression>,
        span: Span,
    },
    Case {
        subject: Box<Expression>,
        branches: Vec<CaseBranch>,
        span: Span,
    },
    Let {
        declarations: Vec<LetDeclaration>,
        body: Box<Expression>,
        span: Span,
    },
    Lambda {
        parameters: Vec<Pattern>,
        body: Box<Expression>,
        span: Span,
    },
    Application {
        function: Box<Expression>,
        arguments: Vec<Expression>,
        span: Span,
    },
    BinOpChain(BinOpChain),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Literal { span, .. }
            | Expression::Value { span, .. }
            | Expression::FieldAccess { span, .. }
            | Expression::FieldAccessor { span, .. }
            | Expression::OperatorFunction { span, .. }
            | Expression::Negate { span, .. }
            | Expression::Parenthesized { span, .. }
            | Expression::Unit { span }
            | Expression::Tuple { span, .. }
            | Expression::List { span, .. }
            | Expression::Record { span, .. }
            | Expression::If { span, .. }
            | Expression::Case { span, .. }
            | Expression::Let { span, .. }
            | Expression::Lambda { span, .. }
            | Expression::Application { span, .. } => *span,
            Expression::BinOpChain(chain) => chain.span,
        }
    }
}

fn join<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for BinOpChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, operand) in self.operands.iter().enumerate() {
            if index > 0 {
                match self.operators.get(index - 1) {
                    Some(operator) => write!(f, " {} ", operator)?,
                    None => write!(f, " ? ")?,
                }
            }
            write!(f, "{}", operand)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal { literal, .. } => write!(f, "{}", literal),
            Expression::Value { name, .. } => write!(f, "{}", name),
            Expression::FieldAccess { target, field, .. } => write!(f, "{}.{}", target, field),
            Expression::FieldAccessor { field, .. } => write!(f, ".{}", field),
            Expression::OperatorFunction { operator, .. } => write!(f, "({})", operator),
            Expression::Negate { operand, .. } => write!(f, "(-{})", operand),
            Expression::Parenthesized { inner, .. } => write!(f, "{}", inner),
            Expression::Unit { .. } => write!(f, "()"),
            Expression::Tuple { elements, .. } => write!(f, "({})", join(elements, ", ")),
            Expression::List { elements, .. } => write!(f, "[{}]", join(elements, ", ")),
            Expression::Record { base, fields, .. } => {
                if fields.is_empty() && base.is_none() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                if let Some(base) = base {
                    write!(f, "{} | ", base)?;
                }
                let fields: Vec<String> = fields
                    .iter()
                    .map(|field| format!("{} = {}", field.name, field.value))
                    .collect();
                write!(f, "{} }}", fields.join(", "))
            }
            Expression::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => write!(
                f,
                "(if {} then {} else {})",
                condition, then_branch, else_branch
            ),
            Expression::Case {
                subject, branches, ..
            } => {
                let branches: Vec<String> = branches
                    .iter()
                    .map(|branch| format!("{} -> {}", branch.pattern, branch.body))
                    .collect();
                write!(f, "(case {} of {{ {} }})", subject, branches.join("; "))
            }
            Expression::Let {
                declarations, body, ..
            } => write!(f, "(let {{ {} }} in {})", join(declarations, "; "), body),
            Expression::Lambda {
                parameters, body, ..
            } => write!(f, "(\\{} -> {})", join(parameters, " "), body),
            Expression::Application {
                function,
                arguments,
                ..
            } => write!(f, "({} {})", function, join(arguments, " ")),
            Expression::BinOpChain(chain) => write!(f, "{}", chain),
        }
    }
}

use std::fmt;

use serde::Serialize;

use crate::diagnostics::position::Span;

use super::name::{Name, QualifiedName};

/// A type expression, as found in annotations, aliases and union variants.
///
/// Arrow chains nest to the right: `a -> b -> c` is
/// `Arrow { a, Arrow { b, c } }`. A type with no arrow is its own trivial chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TypeExpr {
    Reference {
        name: QualifiedName,
        arguments: Vec<TypeExpr>,
        span: Span,
    },
    Variable {
        name: Name,
        span: Span,
    },
    Record {
        base: Option<Name>,
        fields: Vec<RecordFieldType>,
        span: Span,
    },
    Tuple {
        elements: Vec<TypeExpr>,
        span: Span,
    },
    Unit {
        span: Span,
    },
    Parenthesized {
        inner: Box<TypeExpr>,
        span: Span,
    },
    Arrow {
        parameter: Box<TypeExpr>,
        result: Box<TypeExpr>,
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFieldType {
    pub name: Name,
    pub value: TypeExpr,
    pub span: Span,
}

impl TypeExpr {
    pub fn span(&self) -> Span {
        match self {
            TypeExpr::Reference { span, .. }
            | TypeExpr::Variable { span, .. }
            | TypeExpr::Record { span, .. }
            | TypeExpr::Tuple { span, .. }
            | TypeExpr::Unit { span }
            | TypeExpr::Parenthesized { span, .. }
            | TypeExpr::Arrow { span, .. } => *span,
        }
    }

    /// Flattens a right-nested arrow chain into its elements, parameters first.
    pub fn arrow_elements(&self) -> Vec<&TypeExpr> {
        let mut elements = Vec::new();
        let mut current = self;
        while let TypeExpr::Arrow {
            parameter, result, ..
        } = current
        {
            elements.push(parameter.as_ref());
            current = result;
        }
        elements.push(current);
        elements
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Reference {
                name, arguments, ..
            } => {
                if arguments.is_empty() {
                    return write!(f, "{}", name);
                }
                write!(f, "({}", name)?;
                for argument in arguments {
                    write!(f, " {}", argument)?;
                }
                write!(f, ")")
            }
            TypeExpr::Variable { name, .. } => write!(f, "{}", name),
            TypeExpr::Record { base, fields, .. } => {
                if fields.is_empty() && base.is_none() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                if let Some(base) = base {
                    write!(f, "{} | ", base)?;
                }
                let fields: Vec<String> = fields
                    .iter()
                    .map(|field| format!("{} : {}", field.name, field.value))
                    .collect();
                write!(f, "{} }}", fields.join(", "))
            }
            TypeExpr::Tuple { elements, .. } => {
                let elements: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "({})", elements.join(", "))
            }
            TypeExpr::Unit { .. } => write!(f, "()"),
            TypeExpr::Parenthesized { inner, .. } => write!(f, "{}", inner),
            TypeExpr::Arrow {
                parameter, result, ..
            } => write!(f, "({} -> {})", parameter, result),
        }
    }
}

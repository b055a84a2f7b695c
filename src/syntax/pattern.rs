use std::fmt;

use serde::Serialize;

use crate::diagnostics::position::Span;

use super::expression::Literal;
use super::name::{Name, QualifiedName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Pattern {
    Wildcard {
        span: Span,
    },
    Var {
        name: Name,
        span: Span,
    },
    Literal {
        literal: Literal,
        span: Span,
    },
    Unit {
        span: Span,
    },
    /// Two or more elements.
    Tuple {
        elements: Vec<Pattern>,
        span: Span,
    },
    List {
        elements: Vec<Pattern>,
        span: Span,
    },
    /// `{ x, y }`: field names bound to variables of the same name.
    Record {
        fields: Vec<Name>,
        span: Span,
    },
    Constructor {
        name: QualifiedName,
        arguments: Vec<Pattern>,
        span: Span,
    },
    /// `head :: tail`, nested to the right.
    Cons {
        head: Box<Pattern>,
        tail: Box<Pattern>,
        span: Span,
    },
    Parenthesized {
        inner: Box<Pattern>,
        span: Span,
    },
    Alias {
        pattern: Box<Pattern>,
        alias: Name,
        span: Span,
    },
}

impl Pattern {
    pub fn span(&self) -> Span {
        match self {
            Pattern::Wildcard { span }
            | Pattern::Var { span, .. }
            | Pattern::Literal { span, .. }
            | Pattern::Unit { span }
            | Pattern::Tuple { span, .. }
            | Pattern::List { span, .. }
            | Pattern::Record { span, .. }
            | Pattern::Constructor { span, .. }
            | Pattern::Cons { span, .. }
            | Pattern::Parenthesized { span, .. }
            | Pattern::Alias { span, .. } => *span,
        }
    }

    /// Variables bound by this pattern, in source order.
    pub fn bound_names(&self) -> Vec<&Name> {
        let mut names = Vec::new();
        self.collect_bound_names(&mut names);
        names
    }

    fn collect_bound_names<'a>(&'a self, names: &mut Vec<&'a Name>) {
        match self {
            Pattern::Var { name, .. } => names.push(name),
            Pattern::Record { fields, .. } => names.extend(fields.iter()),
            Pattern::Tuple { elements, .. } | Pattern::List { elements, .. } => {
                for element in elements {
                    element.collect_bound_names(names);
                }
            }
            Pattern::Constructor { arguments, .. } => {
                for argument in arguments {
                    argument.collect_bound_names(names);
                }
            }
            Pattern::Cons { head, tail, .. } => {
                head.collect_bound_names(names);
                tail.collect_bound_names(names);
            }
            Pattern::Parenthesized { inner, .. } => inner.collect_bound_names(names),
            Pattern::Alias { pattern, alias, .. } => {
                pattern.collect_bound_names(names);
                names.push(alias);
            }
            Pattern::Wildcard { .. } | Pattern::Literal { .. } | Pattern::Unit { .. } => {}
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

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard { .. } => write!(f, "_"),
            Pattern::Var { name, .. } => write!(f, "{}", name),
            Pattern::Literal { literal, .. } => write!(f, "{}", literal),
            Pattern::Unit { .. } => write!(f, "()"),
            Pattern::Tuple { elements, .. } => write!(f, "({})", join(elements, ", ")),
            Pattern::List { elements, .. } => write!(f, "[{}]", join(elements, ", ")),
            Pattern::Record { fields, .. } => {
                if fields.is_empty() {
                    write!(f, "{{}}")
                } else {
                    write!(f, "{{ {} }}", join(fields, ", "))
                }
            }
            Pattern::Constructor {
                name, arguments, ..
            } => {
                if arguments.is_empty() {
                    write!(f, "{}", name)
                } else {
                    write!(f, "({} {})", name, join(arguments, " "))
                }
            }
            Pattern::Cons { head, tail, .. } => write!(f, "({} :: {})", head, tail),
            Pattern::Parenthesized { inner, .. } => write!(f, "{}", inner),
            Pattern::Alias { pattern, alias, .. } => write!(f, "({} as {})", pattern, alias),
        }
    }
}

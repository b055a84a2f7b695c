use std::fmt;

use serde::Serialize;

use crate::diagnostics::position::Span;

use super::expression::Expression;
use super::file::Comment;
use super::name::{Name, QualifiedName};
use super::pattern::Pattern;
use super::type_expr::TypeExpr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModuleKind {
    Plain,
    Port,
}

/// `module Main exposing (..)`, optionally followed by the module's doc comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleHeader {
    pub kind: ModuleKind,
    pub name: QualifiedName,
    pub exposing: Exposing,
    pub documentation: Option<Comment>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Exposing {
    /// `exposing (..)`
    All { span: Span },
    Explicit { items: Vec<ExposedItem>, span: Span },
}

impl Exposing {
    pub fn span(&self) -> Span {
        match self {
            Exposing::All { span } | Exposing::Explicit { span, .. } => *span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ExposedItem {
    Value {
        name: Name,
    },
    /// `(+)`
    Operator {
        name: Name,
        span: Span,
    },
    /// `Maybe`, `Maybe(..)` or `Maybe(Just, Nothing)`
    Type {
        name: Name,
        constructors: Option<Exposing>,
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    pub name: QualifiedName,
    pub alias: Option<Name>,
    pub exposing: Option<Exposing>,
    pub span: Span,
}

/// The part of a value declaration before `=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum LeftHandSide {
    Function {
        name: Name,
        arguments: Vec<Pattern>,
        span: Span,
    },
    Pattern {
        pattern: Pattern,
    },
}

impl LeftHandSide {
    pub fn span(&self) -> Span {
        match self {
            LeftHandSide::Function { span, .. } => *span,
            LeftHandSide::Pattern { pattern } => pattern.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueDeclaration {
    pub documentation: Option<Comment>,
    pub left: LeftHandSide,
    pub body: Expression,
    pub span: Span,
}

/// `name : Type`, also used for `port name : Type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAnnotation {
    pub documentation: Option<Comment>,
    pub name: Name,
    pub annotation: TypeExpr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAliasDeclaration {
    pub documentation: Option<Comment>,
    pub name: Name,
    pub variables: Vec<Name>,
    pub body: TypeExpr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionVariant {
    pub name: Name,
    pub arguments: Vec<TypeExpr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnionDeclaration {
    pub documentation: Option<Comment>,
    pub name: Name,
    pub variables: Vec<Name>,
    pub variants: Vec<UnionVariant>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Declaration {
    Value(ValueDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Union(UnionDeclaration),
    Annotation(TypeAnnotation),
    Port(TypeAnnotation),
}

impl Declaration {
    pub fn span(&self) -> Span {
        match self {
            Declaration::Value(decl) => decl.span,
            Declaration::TypeAlias(decl) => decl.span,
            Declaration::Union(decl) => decl.span,
            Declaration::Annotation(decl) | Declaration::Port(decl) => decl.span,
        }
    }

    pub fn documentation(&self) -> Option<&Comment> {
        match self {
            Declaration::Value(decl) => decl.documentation.as_ref(),
            Declaration::TypeAlias(decl) => decl.documentation.as_ref(),
            Declaration::Union(decl) => decl.documentation.as_ref(),
            Declaration::Annotation(decl) | Declaration::Port(decl) => decl.documentation.as_ref(),
        }
    }

    /// The name this declaration introduces, if it is a single name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Value(decl) => match &decl.left {
                LeftHandSide::Function { name, .. } => Some(name.as_str()),
                LeftHandSide::Pattern { .. } => None,
            },
            Declaration::TypeAlias(decl) => Some(decl.name.as_str()),
            Declaration::Union(decl) => Some(decl.name.as_str()),
            Declaration::Annotation(decl) | Declaration::Port(decl) => Some(decl.name.as_str()),
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

impl fmt::Display for Exposing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exposing::All { .. } => write!(f, "(..)"),
            Exposing::Explicit { items, .. } => write!(f, "({})", join(items, ", ")),
        }
    }
}

impl fmt::Display for ExposedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposedItem::Value { name } => write!(f, "{}", name),
            ExposedItem::Operator { name, .. } => write!(f, "({})", name),
            ExposedItem::Type {
                name, constructors, ..
            } => match constructors {
                Some(constructors) => write!(f, "{}{}", name, constructors),
                None => write!(f, "{}", name),
            },
        }
    }
}

impl fmt::Display for ModuleHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == ModuleKind::Port {
            write!(f, "port ")?;
        }
        write!(f, "module {} exposing {}", self.name, self.exposing)
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {}", self.name)?;
        if let Some(alias) = &self.alias {
            write!(f, " as {}", alias)?;
        }
        if let Some(exposing) = &self.exposing {
            write!(f, " exposing {}", exposing)?;
        }
        Ok(())
    }
}

impl fmt::Display for LeftHandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeftHandSide::Function {
                name, arguments, ..
            } => {
                write!(f, "{}", name)?;
                for argument in arguments {
                    write!(f, " {}", argument)?;
                }
                Ok(())
            }
            LeftHandSide::Pattern { pattern } => write!(f, "{}", pattern),
        }
    }
}

impl fmt::Display for ValueDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.body)
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.annotation)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Value(decl) => write!(f, "{}", decl),
            Declaration::Annotation(decl) => write!(f, "{}", decl),
            Declaration::Port(decl) => write!(f, "port {}", decl),
            Declaration::TypeAlias(decl) => {
                write!(f, "type alias {}", decl.name)?;
                for variable in &decl.variables {
                    write!(f, " {}", variable)?;
                }
                write!(f, " = {}", decl.body)
            }
            Declaration::Union(decl) => {
                write!(f, "type {}", decl.name)?;
                for variable in &decl.variables {
                    write!(f, " {}", variable)?;
                }
                let variants: Vec<String> = decl
                    .variants
                    .iter()
                    .map(|variant| {
                        let mut text = variant.name.to_string();
                        for argument in &variant.arguments {
                            text.push(' ');
                            text.push_str(&argument.to_string());
                        }
                        text
                    })
                    .collect();
                write!(f, " = {}", variants.join(" | "))
            }
        }
    }
}

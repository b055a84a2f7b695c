use crate::diagnostics::{AMBIGUOUS_COMPARISON, Diagnostic, EXPECTED_EXPRESSION, EXPECTED_PATTERN};
use crate::syntax::expression::{
    BinOpChain, BinaryOperator, CaseBranch, Expression, LetDeclaration, RecordField,
};
use crate::syntax::fixity::{self, FixityError, is_binary_operator};
use crate::syntax::name::Name;
use crate::syntax::token_type::TokenType;

use super::helpers::describe_token;
use super::literal::is_literal_token;
use super::{Layout, Parser};

/// Tokens that can open an atom: a term usable as a function argument.
fn starts_atom(token_type: TokenType) -> bool {
    is_literal_token(token_type)
        || matches!(
            token_type,
            TokenType::LowerIdent
                | TokenType::UpperIdent
                | TokenType::LParen
                | TokenType::LBracket
                | TokenType::LBrace
        )
}

impl Parser {
    // Core expression parsing
    pub(super) fn parse_expression(&mut self) -> Option<Expression> {
        match self.current().token_type {
            TokenType::If => self.parse_if_expression(),
            TokenType::Case => self.parse_case_expression(),
            TokenType::Let => self.parse_let_expression(),
            TokenType::Backslash => self.parse_lambda(),
            _ => self.parse_operator_chain(),
        }
    }

    /// Operands and operators in source order. Grouping by precedence is left
    /// to [`fixity::resolve`], which is also run here to report ambiguities.
    fn parse_operator_chain(&mut self) -> Option<Expression> {
        let first = self.parse_operand()?;
        let start = first.span();
        let mut operands = vec![first];
        let mut operators = Vec::new();

        while is_binary_operator(self.current().token_type) && !self.layout_ends() {
            let token = self.next_token();
            operators.push(BinaryOperator {
                token_type: token.token_type,
                span: token.span,
            });
            let operand = match self.current().token_type {
                // These run to the end of the expression, so they close the chain.
                TokenType::If | TokenType::Case | TokenType::Let | TokenType::Backslash => {
                    self.parse_expression()?
                }
                _ => self.parse_operand()?,
            };
            operands.push(operand);
        }

        if operators.is_empty() {
            return operands.pop();
        }

        let end = operands.last().map_or(start, Expression::span);
        let chain = BinOpChain {
            span: start.merge(end),
            operands,
            operators,
        };
        self.check_fixity(&chain);
        Some(Expression::BinOpChain(chain))
    }

    fn check_fixity(&mut self, chain: &BinOpChain) {
        if let Err(FixityError::AmbiguousComparison { left, right }) = fixity::resolve(chain) {
            let position = self.position_at(left.span.start);
            let (left_symbol, right_symbol) = (left.symbol(), right.symbol());
            self.errors.push(Diagnostic::make_error(
                &AMBIGUOUS_COMPARISON,
                &[left_symbol.as_str(), right_symbol.as_str()],
                left.span.merge(right.span),
                position,
            ));
        }
    }

    /// An application, or `-` applied to one at the start of an operand.
    fn parse_operand(&mut self) -> Option<Expression> {
        if let Some(minus) = self.eat(TokenType::Minus) {
            let operand = self.parse_application()?;
            let span = minus.span.merge(operand.span());
            return Some(Expression::Negate {
                operand: Box::new(operand),
                span,
            });
        }
        self.parse_application()
    }

    /// `f x y`: an atom followed by argument atoms, left to right.
    fn parse_application(&mut self) -> Option<Expression> {
        let function = self.parse_access_chain()?;
        let mut arguments = Vec::new();

        while self.can_start_argument() {
            arguments.push(self.parse_argument()?);
        }

        let Some(last) = arguments.last() else {
            return Some(function);
        };
        let span = function.span().merge(last.span());
        Some(Expression::Application {
            function: Box::new(function),
            arguments,
            span,
        })
    }

    fn can_start_argument(&self) -> bool {
        if self.layout_ends() {
            return false;
        }
        match self.current().token_type {
            TokenType::Dot => self.starts_accessor(),
            TokenType::Minus => self.starts_negative_argument(),
            other => starts_atom(other),
        }
    }

    /// `.field` with nothing between the dot and the name.
    fn starts_accessor(&self) -> bool {
        self.is_current(TokenType::Dot)
            && self.is_peek(TokenType::LowerIdent)
            && self.current().touches(self.peek())
    }

    /// `f -x`: a minus after whitespace that touches the following atom.
    fn starts_negative_argument(&self) -> bool {
        self.is_current(TokenType::Minus)
            && self
                .previous()
                .is_some_and(|prev| !prev.touches(self.current()))
            && self.current().touches(self.peek())
            && starts_atom(self.peek().token_type)
    }

    fn parse_argument(&mut self) -> Option<Expression> {
        if let Some(minus) = self.eat(TokenType::Minus) {
            let operand = self.parse_access_chain()?;
            let span = minus.span.merge(operand.span());
            return Some(Expression::Negate {
                operand: Box::new(operand),
                span,
            });
        }
        self.parse_access_chain()
    }

    /// An atom followed by `.field` accesses written without spaces.
    fn parse_access_chain(&mut self) -> Option<Expression> {
        let mut expression = self.parse_atom()?;

        while allows_field_access(&expression)
            && self.is_current(TokenType::Dot)
            && self
                .previous()
                .is_some_and(|prev| prev.touches(self.current()))
            && self.starts_accessor()
        {
            self.next_token(); // '.'
            let field = self.next_token();
            let span = expression.span().merge(field.span);
            expression = Expression::FieldAccess {
                target: Box::new(expression),
                field: Name::new(field.text(), field.span),
                span,
            };
        }

        Some(expression)
    }

    fn parse_atom(&mut self) -> Option<Expression> {
        if self.layout_ends() {
            let got = describe_token(self.current());
            self.error_at_current(&EXPECTED_EXPRESSION, &[got.as_str()]);
            return None;
        }

        match self.current().token_type {
            TokenType::LowerIdent | TokenType::UpperIdent => {
                let name = self.parse_qualified_name(true);
                Some(Expression::Value {
                    span: name.span,
                    name,
                })
            }
            TokenType::LParen => self.parse_parenthesized_expression(),
            TokenType::LBracket => self.parse_list_expression(),
            TokenType::LBrace => self.parse_record_expression(),
            TokenType::Dot if self.starts_accessor() => {
                let dot = self.next_token();
                let field = self.next_token();
                Some(Expression::FieldAccessor {
                    field: Name::new(field.text(), field.span),
                    span: dot.span.merge(field.span),
                })
            }
            other if is_literal_token(other) => self.parse_literal_expression(),
            _ => {
                let got = describe_token(self.current());
                self.error_at_current(&EXPECTED_EXPRESSION, &[got.as_str()]);
                None
            }
        }
    }

    /// `()`, `(+)`, `(expr)` or `(a, b, ...)`.
    fn parse_parenthesized_expression(&mut self) -> Option<Expression> {
        let open = self.next_token();

        if let Some(close) = self.eat(TokenType::RParen) {
            return Some(Expression::Unit {
                span: open.span.merge(close.span),
            });
        }

        if is_binary_operator(self.current().token_type) && self.is_peek(TokenType::RParen) {
            let operator = self.next_token();
            let close = self.next_token();
            return Some(Expression::OperatorFunction {
                operator: BinaryOperator {
                    token_type: operator.token_type,
                    span: operator.span,
                },
                span: open.span.merge(close.span),
            });
        }

        let (mut elements, close) =
            self.parse_comma_separated(TokenType::RParen, Self::parse_expression)?;
        let span = open.span.merge(close.span);

        if elements.len() > 1 {
            return Some(Expression::Tuple { elements, span });
        }
        Some(match elements.pop() {
            Some(inner) => Expression::Parenthesized {
                inner: Box::new(inner),
                span,
            },
            None => Expression::Unit { span },
        })
    }

    fn parse_list_expression(&mut self) -> Option<Expression> {
        let open = self.next_token();
        let (elements, close) =
            self.parse_comma_separated(TokenType::RBracket, Self::parse_expression)?;
        Some(Expression::List {
            elements,
            span: open.span.merge(close.span),
        })
    }

    /// `{}`, `{ a = 1, b = 2 }` or `{ base | a = 1 }`.
    fn parse_record_expression(&mut self) -> Option<Expression> {
        let open = self.next_token();

        let base = if self.is_current(TokenType::LowerIdent) && self.is_peek(TokenType::Pipe) {
            let name = self.next_token();
            self.next_token(); // '|'
            Some(Name::new(name.text(), name.span))
        } else {
            None
        };

        let (fields, close) =
            self.parse_comma_separated(TokenType::RBrace, Self::parse_record_field)?;
        if base.is_some() && fields.is_empty() {
            self.unexpected("a field update");
        }

        Some(Expression::Record {
            base,
            fields,
            span: open.span.merge(close.span),
        })
    }

    fn parse_record_field(&mut self) -> Option<RecordField> {
        let name = self.expect_name(TokenType::LowerIdent)?;
        self.expect(TokenType::Assign)?;
        let value = self.parse_expression()?;
        let span = name.span.merge(value.span());
        Some(RecordField { name, value, span })
    }

    // Keyword expressions

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let start = self.next_token().span.start;
        let condition = self.parse_expression()?;
        self.expect(TokenType::Then)?;
        let then_branch = self.parse_expression()?;
        self.expect(TokenType::Else)?;
        let else_branch = self.parse_expression()?;

        Some(Expression::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            span: self.span_from(start),
            else_branch: Box::new(else_branch),
        })
    }

    /// Branches line up on the column of the first branch pattern.
    fn parse_case_expression(&mut self) -> Option<Expression> {
        let start = self.next_token().span.start;
        let subject = self.parse_expression()?;
        self.expect(TokenType::Of)?;

        let column = self.current().position.column;
        let branches = self.with_layout(Layout::Column(column), |parser| {
            let mut branches = Vec::new();
            loop {
                branches.push(parser.parse_case_branch()?);
                if parser.is_current(TokenType::Eof)
                    || !parser.starts_line()
                    || parser.current().position.column != column
                {
                    break;
                }
            }
            Some(branches)
        })?;

        Some(Expression::Case {
            subject: Box::new(subject),
            branches,
            span: self.span_from(start),
        })
    }

    fn parse_case_branch(&mut self) -> Option<CaseBranch> {
        let pattern = self.parse_pattern()?;
        self.expect(TokenType::Arrow)?;
        let body = self.parse_expression()?;
        let span = pattern.span().merge(body.span());
        Some(CaseBranch {
            pattern,
            body,
            span,
        })
    }

    /// Declarations line up on the column of the first one; `in` ends the block.
    fn parse_let_expression(&mut self) -> Option<Expression> {
        let start = self.next_token().span.start;

        let column = self.current().position.column;
        let declarations = self.with_layout(Layout::Column(column), |parser| {
            let mut declarations = Vec::new();
            loop {
                declarations.push(parser.parse_let_declaration()?);
                if parser.is_current(TokenType::In)
                    || parser.is_current(TokenType::Eof)
                    || !parser.starts_line()
                    || parser.current().position.column != column
                {
                    break;
                }
            }
            Some(declarations)
        })?;

        self.expect(TokenType::In)?;
        let body = self.parse_expression()?;

        Some(Expression::Let {
            declarations,
            body: Box::new(body),
            span: self.span_from(start),
        })
    }

    fn parse_let_declaration(&mut self) -> Option<LetDeclaration> {
        if self.is_current(TokenType::LowerIdent) && self.is_peek(TokenType::Colon) {
            return self
                .parse_type_annotation(None)
                .map(LetDeclaration::Annotation);
        }
        self.parse_value_declaration(None)
            .map(LetDeclaration::Value)
    }

    /// `\x (a, b) -> body`
    fn parse_lambda(&mut self) -> Option<Expression> {
        let start = self.next_token().span.start;

        let mut parameters = Vec::new();
        while !self.is_current(TokenType::Arrow) {
            if self.layout_ends() {
                let got = describe_token(self.current());
                self.error_at_current(&EXPECTED_PATTERN, &[got.as_str()]);
                return None;
            }
            parameters.push(self.parse_lambda_parameter()?);
        }
        if parameters.is_empty() {
            let got = describe_token(self.current());
            self.error_at_current(&EXPECTED_PATTERN, &[got.as_str()]);
            return None;
        }

        self.expect(TokenType::Arrow)?;
        let body = self.parse_expression()?;

        Some(Expression::Lambda {
            parameters,
            body: Box::new(body),
            span: self.span_from(start),
        })
    }
}

/// Field access applies to names, parenthesized expressions, records and
/// other accesses; `Just.x` and `1.x` are not accesses.
fn allows_field_access(expression: &Expression) -> bool {
    match expression {
        Expression::Value { name, .. } => name.is_value(),
        Expression::Parenthesized { .. }
        | Expression::Record { .. }
        | Expression::FieldAccess { .. } => true,
        _ => false,
    }
}

//! Recursive-descent parser for filter expressions.
//!
//! Precedence, weakest to strongest: `or`, `and`, `not`, primary. Binary
//! logicals associate left. The prefix string-predicate form is recognized
//! by a two-token lookahead of (word, `(`); the infix form flows through
//! the ordinary comparison rule. All failures are
//! [`Error::InvalidSyntax`] carrying the offending lexeme and the token
//! position of discovery.

use sift_core::{Error, Result, StringOp};

use super::ast::{ComparisonOp, FilterExpr, LogicalOp};
use super::token::{Token, TokenKind, tokenize};

/// Parse a filter input into its expression tree.
///
/// # Errors
///
/// Returns [`Error::InvalidSyntax`] if the input violates the grammar:
/// exhaustion mid-rule, a missing `)`, a property without an operator, an
/// operator without a comparable right-hand side, a non-predicate word
/// used as a function name, a function not taking exactly two arguments,
/// or trailing tokens after a complete expression.
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let mut parser = Parser::new(tokenize(input));
    let expr = parser.parse_or()?;
    parser.expect_end()?;
    Ok(expr)
}

/// Token cursor. The stream always ends with an `End` token, and the
/// cursor never advances past it.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn err(&self, expected: impl Into<String>) -> Error {
        Error::InvalidSyntax {
            expected: expected.into(),
            found: self.peek().to_string(),
            at: self.pos,
        }
    }

    fn peek_logical(&self, word: &str) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Logical && token.lexeme.eq_ignore_ascii_case(word)
    }

    fn expect_end(&self) -> Result<()> {
        if self.peek().kind == TokenKind::End {
            Ok(())
        } else {
            Err(self.err("end of filter"))
        }
    }
}

impl Parser {
    fn parse_or(&mut self) -> Result<FilterExpr> {
        let mut left = self.parse_and()?;
        while self.peek_logical("or") {
            self.advance();
            let right = self.parse_and()?;
            left = FilterExpr::Logical {
                op: LogicalOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<FilterExpr> {
        let mut left = self.parse_unary()?;
        while self.peek_logical("and") {
            self.advance();
            let right = self.parse_unary()?;
            left = FilterExpr::Logical {
                op: LogicalOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<FilterExpr> {
        if self.peek_logical("not") {
            self.advance();
            let inner = self.parse_primary()?;
            return Ok(FilterExpr::Not(Box::new(inner)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<FilterExpr> {
        if self.peek().kind == TokenKind::LParen {
            self.advance();
            let expr = self.parse_or()?;
            if self.peek().kind != TokenKind::RParen {
                return Err(self.err("')' closing the group"));
            }
            self.advance();
            return Ok(expr);
        }

        // Prefix predicate form: a word directly followed by '('.
        if matches!(self.peek().kind, TokenKind::Operator | TokenKind::Property)
            && self.next_is_lparen()
        {
            return self.parse_function();
        }

        self.parse_comparison()
    }

    fn next_is_lparen(&self) -> bool {
        self.tokens
            .get(self.pos + 1)
            .is_some_and(|t| t.kind == TokenKind::LParen)
    }

    fn parse_function(&mut self) -> Result<FilterExpr> {
        let at = self.pos;
        let name = self.advance();
        let Some(op) = StringOp::parse(&name.lexeme) else {
            return Err(Error::InvalidSyntax {
                expected: "contains, startswith, or endswith".to_owned(),
                found: name.to_string(),
                at,
            });
        };
        self.advance(); // the '(' seen by lookahead

        let mut args = vec![self.parse_argument()?];
        while self.peek().kind == TokenKind::Comma {
            self.advance();
            args.push(self.parse_argument()?);
        }
        if self.peek().kind != TokenKind::RParen {
            return Err(self.err("')' closing the argument list"));
        }
        self.advance();

        if args.len() != 2 {
            return Err(Error::InvalidSyntax {
                expected: format!("2 arguments to {op}"),
                found: format!("{}", args.len()),
                at,
            });
        }
        Ok(FilterExpr::Function { op, args })
    }

    fn parse_argument(&mut self) -> Result<String> {
        if matches!(self.peek().kind, TokenKind::Property | TokenKind::Value) {
            Ok(self.advance().lexeme)
        } else {
            Err(self.err("a property path or literal argument"))
        }
    }

    fn parse_comparison(&mut self) -> Result<FilterExpr> {
        if self.peek().kind != TokenKind::Property {
            return Err(self.err("a property path"));
        }
        let path = self.advance().lexeme;

        if self.peek().kind != TokenKind::Operator {
            return Err(self.err("a comparison operator"));
        }
        let at = self.pos;
        let op_token = self.advance();
        let op = ComparisonOp::parse(&op_token.lexeme).ok_or_else(|| Error::InvalidSyntax {
            expected: "a comparison operator".to_owned(),
            found: format!("'{}'", op_token.lexeme),
            at,
        })?;

        if !matches!(self.peek().kind, TokenKind::Value | TokenKind::Property) {
            return Err(self.err("a literal value or property"));
        }
        let value = self.advance().lexeme;

        Ok(FilterExpr::Comparison { path, op, value })
    }
}

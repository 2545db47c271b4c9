//! Expressions, terms, and subroutine calls (spec §4.4.7-§4.4.8).
//!
//! No precedence climbing is needed: Jack's `op term` chain is flat and
//! strictly left-associative, so `compile_expression` just folds terms
//! pairwise as it goes.

use crate::{ParseError, Parser, Result};
use jackc_gen::{ArithOp, Segment};
use jackc_lex::{Keyword, TokenKind};

impl Parser {
    /// `expression ::= term (op term)*`
    pub(crate) fn compile_expression(&mut self) -> Result<()> {
        self.compile_term()?;
        while let Some(op) = self.current_binary_op() {
            self.advance();
            self.compile_term()?;
            self.writer.write_arithmetic(op);
        }
        Ok(())
    }

    fn current_binary_op(&self) -> Option<ArithOp> {
        match self.current() {
            Some(t) => match t.kind {
                TokenKind::Symbol(c) => arith_op_for(c),
                _ => None,
            },
            None => None,
        }
    }

    /// `term ::= intConst | stringConst | keywordConst | name
    ///         | name '[' expression ']' | subroutineCall
    ///         | '(' expression ')' | unaryOp term`
    fn compile_term(&mut self) -> Result<()> {
        match self.current().map(|t| t.kind.clone()) {
            Some(TokenKind::IntConst(n)) => {
                self.advance();
                self.writer.write_push(Segment::Constant, n);
                Ok(())
            }
            Some(TokenKind::StringConst(s)) => {
                self.advance();
                self.compile_string_constant(&s);
                Ok(())
            }
            Some(TokenKind::Keyword(Keyword::True)) => {
                self.advance();
                self.writer.write_push(Segment::Constant, 0);
                self.writer.write_arithmetic(ArithOp::Not);
                Ok(())
            }
            Some(TokenKind::Keyword(Keyword::False)) | Some(TokenKind::Keyword(Keyword::Null)) => {
                self.advance();
                self.writer.write_push(Segment::Constant, 0);
                Ok(())
            }
            Some(TokenKind::Keyword(Keyword::This)) => {
                self.advance();
                self.writer.write_push(Segment::Pointer, 0);
                Ok(())
            }
            Some(TokenKind::Identifier(_)) => self.compile_identifier_term(),
            Some(TokenKind::Symbol('(')) => {
                self.advance();
                self.compile_expression()?;
                self.expect_symbol(')')?;
                Ok(())
            }
            Some(TokenKind::Symbol('-')) => {
                self.advance();
                self.compile_term()?;
                self.writer.write_arithmetic(ArithOp::Neg);
                Ok(())
            }
            Some(TokenKind::Symbol('~')) => {
                self.advance();
                self.compile_term()?;
                self.writer.write_arithmetic(ArithOp::Not);
                Ok(())
            }
            _ => Err(ParseError::Expected {
                expected: "a term".to_string(),
                found: self.describe_current(),
                span: self.current_span(),
            }),
        }
    }

    /// A `name` term needs one token of lookahead to tell apart plain
    /// variable access, array indexing, and the two subroutine-call forms.
    fn compile_identifier_term(&mut self) -> Result<()> {
        if self.peek_is_symbol('[') {
            let name_span = self.current_span();
            let name = self.expect_identifier()?;
            self.advance(); // '['

            let (segment, index) = self.resolve(&name, name_span)?;
            self.writer.write_push(segment, index);
            self.compile_expression()?;
            self.writer.write_arithmetic(ArithOp::Add);
            self.expect_symbol(']')?;

            self.writer.write_pop(Segment::Pointer, 1);
            self.writer.write_push(Segment::That, 0);
            Ok(())
        } else if self.peek_is_symbol('(') || self.peek_is_symbol('.') {
            self.compile_subroutine_call()
        } else {
            let name_span = self.current_span();
            let name = self.expect_identifier()?;
            let (segment, index) = self.resolve(&name, name_span)?;
            self.writer.write_push(segment, index);
            Ok(())
        }
    }

    /// `subroutineCall ::= name '(' expressionList ')'
    ///                   | (className|varName) '.' name '(' expressionList ')'`
    ///
    /// Disambiguation follows spec §4.4.8: a bare `name(` is an unqualified
    /// call to a method of the enclosing class, so `this` is pushed as the
    /// implicit receiver. A `name.name(` qualifies the call; if the
    /// qualifier resolves in the symbol table to a non-primitive type, it's
    /// a variable and that variable's value (the object) is the receiver
    /// and the call targets its declared type; otherwise the qualifier is
    /// taken as a class name and the call is a plain `function`/
    /// `constructor` invocation with no extra receiver argument.
    pub(crate) fn compile_subroutine_call(&mut self) -> Result<()> {
        let first_span = self.current_span();
        let first = self.expect_identifier()?;

        if self.is_symbol('(') {
            self.advance();
            self.writer.write_push(Segment::Pointer, 0);
            let n_args = self.compile_expression_list()?;
            self.expect_symbol(')')?;
            self.writer
                .write_call(&format!("{}.{}", self.class_name, first), n_args + 1);
            return Ok(());
        }

        self.expect_symbol('.')?;
        let method_name = self.expect_identifier()?;
        self.expect_symbol('(')?;

        match self.symbols.type_of(&first) {
            Some(ty) if !is_primitive(ty) => {
                let ty = ty.to_string();
                let (segment, index) = self.resolve(&first, first_span)?;
                self.writer.write_push(segment, index);
                let n_args = self.compile_expression_list()?;
                self.expect_symbol(')')?;
                self.writer
                    .write_call(&format!("{ty}.{method_name}"), n_args + 1);
            }
            _ => {
                let n_args = self.compile_expression_list()?;
                self.expect_symbol(')')?;
                self.writer
                    .write_call(&format!("{first}.{method_name}"), n_args);
            }
        }

        Ok(())
    }

    /// `expressionList ::= (expression (',' expression)*)?`
    fn compile_expression_list(&mut self) -> Result<u16> {
        if self.is_symbol(')') {
            return Ok(0);
        }

        let mut count: u16 = 1;
        self.compile_expression()?;
        while self.is_symbol(',') {
            self.advance();
            self.compile_expression()?;
            count += 1;
        }
        Ok(count)
    }

    fn compile_string_constant(&mut self, s: &str) {
        self.writer
            .write_push(Segment::Constant, s.chars().count() as u16);
        self.writer.write_call("String.new", 1);
        for c in s.chars() {
            self.writer.write_push(Segment::Constant, c as u16);
            self.writer.write_call("String.appendChar", 2);
        }
    }
}

fn arith_op_for(c: char) -> Option<ArithOp> {
    match c {
        '+' => Some(ArithOp::Add),
        '-' => Some(ArithOp::Sub),
        '*' => Some(ArithOp::Mul),
        '/' => Some(ArithOp::Div),
        '&' => Some(ArithOp::And),
        '|' => Some(ArithOp::Or),
        '<' => Some(ArithOp::Lt),
        '>' => Some(ArithOp::Gt),
        '=' => Some(ArithOp::Eq),
        _ => None,
    }
}

fn is_primitive(ty: &str) -> bool {
    matches!(ty, "int" | "char" | "boolean")
}

//! The five statement forms: `let`, `if`, `while`, `do`, `return`
//! (spec §4.4.6).

use crate::{Parser, Result};
use jackc_gen::{ArithOp, Segment};
use jackc_lex::{Keyword, TokenKind};

impl Parser {
    /// `statements ::= (letStatement | ifStatement | whileStatement
    ///                  | doStatement | returnStatement)*`
    pub(crate) fn compile_statements(&mut self) -> Result<()> {
        loop {
            match self.current().map(|t| t.kind.clone()) {
                Some(TokenKind::Keyword(Keyword::Let)) => self.compile_let()?,
                Some(TokenKind::Keyword(Keyword::If)) => self.compile_if()?,
                Some(TokenKind::Keyword(Keyword::While)) => self.compile_while()?,
                Some(TokenKind::Keyword(Keyword::Do)) => self.compile_do()?,
                Some(TokenKind::Keyword(Keyword::Return)) => self.compile_return()?,
                _ => break,
            }
        }
        Ok(())
    }

    /// `letStatement ::= 'let' name ('[' expression ']')? '=' expression ';'`
    fn compile_let(&mut self) -> Result<()> {
        self.expect_keyword(Keyword::Let)?;
        let name_span = self.current_span();
        let name = self.expect_identifier()?;

        if self.is_symbol('[') {
            self.advance();

            let (segment, index) = self.resolve(&name, name_span)?;
            self.writer.write_push(segment, index);
            self.compile_expression()?;
            self.writer.write_arithmetic(ArithOp::Add);
            self.expect_symbol(']')?;

            self.expect_symbol('=')?;
            self.compile_expression()?;
            self.expect_symbol(';')?;

            // Preserve the RHS across the THAT-anchor swap: stash it in
            // temp 0, point THAT at the target address, then complete the
            // store.
            self.writer.write_pop(Segment::Temp, 0);
            self.writer.write_pop(Segment::Pointer, 1);
            self.writer.write_push(Segment::Temp, 0);
            self.writer.write_pop(Segment::That, 0);
        } else {
            self.expect_symbol('=')?;
            self.compile_expression()?;
            self.expect_symbol(';')?;

            let (segment, index) = self.resolve(&name, name_span)?;
            self.writer.write_pop(segment, index);
        }

        Ok(())
    }

    /// `ifStatement ::= 'if' '(' expression ')' '{' statements '}'
    ///                  ('else' '{' statements '}')?`
    fn compile_if(&mut self) -> Result<()> {
        self.expect_keyword(Keyword::If)?;

        // Snapshot this syntactic if's label suffix before recursing, so
        // nested ifs (which bump the shared counter further) don't collide
        // with it.
        let k = self.if_counter;
        self.if_counter += 1;

        self.expect_symbol('(')?;
        self.compile_expression()?;
        self.expect_symbol(')')?;

        let label_true = format!("IF_TRUE{k}");
        let label_false = format!("IF_FALSE{k}");
        let label_end = format!("IF_END{k}");

        self.writer.write_if(&label_true);
        self.writer.write_goto(&label_false);
        self.writer.write_label(&label_true);

        self.expect_symbol('{')?;
        self.compile_statements()?;
        self.expect_symbol('}')?;

        if self.is_keyword(Keyword::Else) {
            self.writer.write_goto(&label_end);
            self.writer.write_label(&label_false);

            self.advance();
            self.expect_symbol('{')?;
            self.compile_statements()?;
            self.expect_symbol('}')?;

            self.writer.write_label(&label_end);
        } else {
            self.writer.write_label(&label_false);
        }

        Ok(())
    }

    /// `whileStatement ::= 'while' '(' expression ')' '{' statements '}'`
    fn compile_while(&mut self) -> Result<()> {
        self.expect_keyword(Keyword::While)?;

        let k = self.while_counter;
        self.while_counter += 1;

        let label_exp = format!("WHILE_EXP{k}");
        let label_end = format!("WHILE_END{k}");

        self.writer.write_label(&label_exp);

        self.expect_symbol('(')?;
        self.compile_expression()?;
        self.expect_symbol(')')?;

        self.writer.write_arithmetic(ArithOp::Not);
        self.writer.write_if(&label_end);

        self.expect_symbol('{')?;
        self.compile_statements()?;
        self.expect_symbol('}')?;

        self.writer.write_goto(&label_exp);
        self.writer.write_label(&label_end);

        Ok(())
    }

    /// `doStatement ::= 'do' subroutineCall ';'`
    fn compile_do(&mut self) -> Result<()> {
        self.expect_keyword(Keyword::Do)?;
        self.compile_subroutine_call()?;
        self.expect_symbol(';')?;
        // Every subroutine call leaves exactly one value on the stack;
        // `do` never uses it.
        self.writer.write_pop(Segment::Temp, 0);
        Ok(())
    }

    /// `returnStatement ::= 'return' expression? ';'`
    fn compile_return(&mut self) -> Result<()> {
        self.expect_keyword(Keyword::Return)?;
        if self.is_symbol(';') {
            self.writer.write_push(Segment::Constant, 0);
        } else {
            self.compile_expression()?;
        }
        self.expect_symbol(';')?;
        self.writer.write_return();
        Ok(())
    }
}

//! Class structure: `classVarDec`, `subroutineDec`, `parameterList`,
//! `varDec` (spec §4.4.1-§4.4.5).

use crate::{ParseError, Parser, Result};
use jackc_gen::Segment;
use jackc_lex::{Keyword, TokenKind};
use jackc_sym::SymbolKind;

impl Parser {
    /// `class ::= 'class' Name '{' classVarDec* subroutineDec* '}'`
    pub(crate) fn compile_class(&mut self) -> Result<()> {
        self.expect_keyword(Keyword::Class)?;
        self.class_name = self.expect_identifier()?;
        self.expect_symbol('{')?;

        while self.is_keyword(Keyword::Static) || self.is_keyword(Keyword::Field) {
            self.compile_class_var_dec()?;
        }

        while self.is_keyword(Keyword::Constructor)
            || self.is_keyword(Keyword::Function)
            || self.is_keyword(Keyword::Method)
        {
            self.compile_subroutine_dec()?;
        }

        self.expect_symbol('}')?;
        Ok(())
    }

    /// `classVarDec ::= ('static'|'field') type name (',' name)* ';'`
    fn compile_class_var_dec(&mut self) -> Result<()> {
        let kind = if self.is_keyword(Keyword::Static) {
            self.advance();
            SymbolKind::Static
        } else {
            self.expect_keyword(Keyword::Field)?;
            SymbolKind::Field
        };

        let ty = self.compile_type()?;
        let name = self.expect_identifier()?;
        self.symbols.define(name, ty.clone(), kind);

        while self.is_symbol(',') {
            self.advance();
            let name = self.expect_identifier()?;
            self.symbols.define(name, ty.clone(), kind);
        }

        self.expect_symbol(';')?;
        Ok(())
    }

    /// `type ::= 'int' | 'char' | 'boolean' | className`
    pub(crate) fn compile_type(&mut self) -> Result<String> {
        match self.current().map(|t| t.kind.clone()) {
            Some(TokenKind::Keyword(Keyword::Int)) => {
                self.advance();
                Ok("int".to_string())
            }
            Some(TokenKind::Keyword(Keyword::Char)) => {
                self.advance();
                Ok("char".to_string())
            }
            Some(TokenKind::Keyword(Keyword::Boolean)) => {
                self.advance();
                Ok("boolean".to_string())
            }
            Some(TokenKind::Identifier(name)) => {
                self.advance();
                Ok(name)
            }
            _ => self.expect_identifier(),
        }
    }

    /// `subroutineDec ::= ('constructor'|'function'|'method')
    ///                    (type|'void') name '(' parameterList ')' subroutineBody`
    fn compile_subroutine_dec(&mut self) -> Result<()> {
        let kw = match self.current().map(|t| t.kind.clone()) {
            Some(TokenKind::Keyword(kw @ Keyword::Constructor))
            | Some(TokenKind::Keyword(kw @ Keyword::Function))
            | Some(TokenKind::Keyword(kw @ Keyword::Method)) => {
                self.advance();
                kw
            }
            _ => {
                return Err(ParseError::Expected {
                    expected: "'constructor', 'function', or 'method'".to_string(),
                    found: self.describe_current(),
                    span: self.current_span(),
                })
            }
        };

        if self.is_keyword(Keyword::Void) {
            self.advance();
        } else {
            self.compile_type()?;
        }

        let name = self.expect_identifier()?;

        self.symbols.start_subroutine();
        self.if_counter = 0;
        self.while_counter = 0;

        if kw == Keyword::Method {
            // Pre-inserted as argument 0 so method bodies resolve `this`-relative
            // names the same way any other argument resolves.
            self.symbols
                .define("this", self.class_name.clone(), SymbolKind::Argument);
        }

        self.expect_symbol('(')?;
        self.compile_parameter_list()?;
        self.expect_symbol(')')?;

        self.expect_symbol('{')?;
        while self.is_keyword(Keyword::Var) {
            self.compile_var_dec()?;
        }

        // varDecs syntactically precede statements, so by this point the
        // local count is known. Emit `function` now rather than before
        // parsing the body (spec §4.4.3's deferred-emission fix).
        let locals = self.symbols.count(SymbolKind::Local);
        self.writer
            .write_function(&format!("{}.{}", self.class_name, name), locals);

        match kw {
            Keyword::Constructor => {
                let fields = self.symbols.count(SymbolKind::Field);
                self.writer.write_push(Segment::Constant, fields);
                self.writer.write_call("Memory.alloc", 1);
                self.writer.write_pop(Segment::Pointer, 0);
            }
            Keyword::Method => {
                self.writer.write_push(Segment::Argument, 0);
                self.writer.write_pop(Segment::Pointer, 0);
            }
            Keyword::Function => {}
            _ => unreachable!("matched only constructor/function/method above"),
        }

        self.compile_statements()?;
        self.expect_symbol('}')?;

        Ok(())
    }

    /// `parameterList ::= ( type name (',' type name)* )?`
    fn compile_parameter_list(&mut self) -> Result<()> {
        if self.is_symbol(')') {
            return Ok(());
        }

        let ty = self.compile_type()?;
        let name = self.expect_identifier()?;
        self.symbols.define(name, ty, SymbolKind::Argument);

        while self.is_symbol(',') {
            self.advance();
            let ty = self.compile_type()?;
            let name = self.expect_identifier()?;
            self.symbols.define(name, ty, SymbolKind::Argument);
        }

        Ok(())
    }

    /// `varDec ::= 'var' type name (',' name)* ';'`
    fn compile_var_dec(&mut self) -> Result<()> {
        self.expect_keyword(Keyword::Var)?;
        let ty = self.compile_type()?;
        let name = self.expect_identifier()?;
        self.symbols.define(name, ty.clone(), SymbolKind::Local);

        while self.is_symbol(',') {
            self.advance();
            let name = self.expect_identifier()?;
            self.symbols.define(name, ty.clone(), SymbolKind::Local);
        }

        self.expect_symbol(';')?;
        Ok(())
    }
}

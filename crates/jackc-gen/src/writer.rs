//! The `VmWriter` itself.

use std::io::{self, Write};

use crate::segment::Segment;

/// The operators the Compilation Engine hands to [`VmWriter::write_arithmetic`].
///
/// `Sub` and `Neg` are distinct because Jack's `-` is binary between two
/// terms and unary at the start of one; the engine disambiguates by
/// position and picks the matching variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Neg,
    Mul,
    Div,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

/// Buffers VM instruction lines and renders them as text.
///
/// Holds no knowledge of the source language: every method takes already-
/// resolved segments, indices, and names.
#[derive(Debug, Default)]
pub struct VmWriter {
    lines: Vec<String>,
}

impl VmWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_push(&mut self, segment: Segment, index: u16) {
        self.lines.push(format!("push {segment} {index}"));
    }

    pub fn write_pop(&mut self, segment: Segment, index: u16) {
        self.lines.push(format!("pop {segment} {index}"));
    }

    /// Translates a source operator into its VM opcode (or, for `*`/`/`,
    /// a call to the OS `Math` routines) per the fixed translation table.
    pub fn write_arithmetic(&mut self, op: ArithOp) {
        match op {
            ArithOp::Add => self.lines.push("add".to_string()),
            ArithOp::Sub => self.lines.push("sub".to_string()),
            ArithOp::Neg => self.lines.push("neg".to_string()),
            ArithOp::Eq => self.lines.push("eq".to_string()),
            ArithOp::Gt => self.lines.push("gt".to_string()),
            ArithOp::Lt => self.lines.push("lt".to_string()),
            ArithOp::And => self.lines.push("and".to_string()),
            ArithOp::Or => self.lines.push("or".to_string()),
            ArithOp::Not => self.lines.push("not".to_string()),
            ArithOp::Mul => self.write_call("Math.multiply", 2),
            ArithOp::Div => self.write_call("Math.divide", 2),
        }
    }

    pub fn write_label(&mut self, label: &str) {
        self.lines.push(format!("label {label}"));
    }

    pub fn write_goto(&mut self, label: &str) {
        self.lines.push(format!("goto {label}"));
    }

    pub fn write_if(&mut self, label: &str) {
        self.lines.push(format!("if-goto {label}"));
    }

    pub fn write_call(&mut self, name: &str, n_args: u16) {
        self.lines.push(format!("call {name} {n_args}"));
    }

    pub fn write_function(&mut self, name: &str, n_locals: u16) {
        self.lines.push(format!("function {name} {n_locals}"));
    }

    pub fn write_return(&mut self) {
        self.lines.push("return".to_string());
    }

    /// The buffered instructions, one per line, newline-terminated.
    pub fn output(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Streams the buffered instructions to `sink`, leaving filesystem
    /// concerns to the caller.
    pub fn write_to(&self, mut sink: impl Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(sink, "{line}")?;
        }
        Ok(())
    }
}

//! Source-text rendering of the syntax tree.
//!
//! The output re-parses to an equivalent tree. Infix and prefix operations are
//! fully parenthesized so no precedence information is needed to read it back.

use std::fmt::{self, Display, Formatter, Write as _};

use super::{Block, Expr, ExprKind, FunctionLiteral, Ident, LoopStmt, Program, Stmt, StmtKind};

impl Display for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl Display for ExprKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Int(n) => write!(f, "{n}"),
            ExprKind::Str(s) => write_quoted(f, s),
            ExprKind::Bool(b) => write!(f, "{b}"),
            ExprKind::Array(elements) => {
                f.write_char('[')?;
                write_comma_separated(f, elements)?;
                f.write_char(']')
            }
            ExprKind::Ident(name) => f.write_str(name),
            ExprKind::Prefix { op, operand } => write!(f, "({}{operand})", op.as_symbol()),
            ExprKind::Infix { op, left, right } => {
                write!(f, "({left} {} {right})", op.as_symbol())
            }
            ExprKind::Index { collection, index } => write!(f, "({collection}[{index}])"),
            ExprKind::Function(literal) => literal.fmt(f),
            ExprKind::Call { callee, args } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, args)?;
                f.write_char(')')
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
        }
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("function(")?;
        write_comma_separated(f, &self.params)?;
        write!(f, ") {}", self.body)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Expr(expr) => write!(f, "{expr};"),
            StmtKind::Var { name, value } => write!(f, "var {name} = {value};"),
            StmtKind::Assign { name, value } => write!(f, "{name} = {value};"),
            StmtKind::Return(value) => write!(f, "return {value};"),
            StmtKind::Loop(lp) => lp.fmt(f),
        }
    }
}

impl Display for LoopStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "for ({}", self.element)?;
        if let Some(index) = &self.index {
            write!(f, ", {index}")?;
        }
        write!(f, " in {}) {}", self.source, self.body)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for stmt in &self.statements {
            write!(f, " {stmt}")?;
        }
        f.write_str(" }")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

fn write_comma_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_quoted(f: &mut Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            other => f.write_char(other)?,
        }
    }
    f.write_char('"')
}

//! Prefix and infix operators.

/// Infix (binary) operators.
///
/// There are no short-circuiting logical operators: both operands are always
/// evaluated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl BinaryOp {
    /// Source-level symbol, used in error messages and when printing the tree.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }

    /// Binding power; a larger number binds more tightly.
    ///
    /// - 4: `*` `/`
    /// - 3: `+` `-`
    /// - 2: `<` `>`
    /// - 1: `==` `!=`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 4,
            Self::Add | Self::Sub => 3,
            Self::Lt | Self::Gt => 2,
            Self::Eq | Self::NotEq => 1,
        }
    }
}

/// Prefix (unary) operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical negation `!`, defined through truthiness.
    Not,
    /// Arithmetic negation `-`.
    Neg,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

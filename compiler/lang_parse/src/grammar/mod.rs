//! Grammar productions.
//!
//! - `stmt.rs`: Statements, blocks and loops
//! - `expr.rs`: Expressions, from the precedence chain down to primaries

mod expr;
mod stmt;

//! Source of lines for `read_line`.
//!
//! Either the process's standard input or a scripted queue of lines, which
//! lets tests and embedders drive interactive programs deterministically.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

pub enum InputHandlerImpl {
    Stdin,
    /// Lines handed out front to back; exhausted means end of input.
    Scripted(Mutex<VecDeque<String>>),
}

impl InputHandlerImpl {
    /// Next line without its line terminator, or `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                strip_line_ending(&mut line);
                Ok(Some(line))
            }
            Self::Scripted(lines) => Ok(lines.lock().pop_front()),
        }
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Input handler shared between an interpreter and its host.
pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin)
}

pub fn scripted_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let queue = lines.into_iter().map(Into::into).collect();
    Arc::new(InputHandlerImpl::Scripted(Mutex::new(queue)))
}

//! Stack growth for deeply nested programs.
//!
//! The parser descends once per nesting level and the evaluator once per
//! nested expression or user function call. A script that recurses a few
//! thousand levels deep would exhaust a default thread stack, so every
//! recursive entry point goes through [`ensure_sufficient_stack`], which moves
//! execution onto a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the call is a plain passthrough.

/// Grow when fewer than this many bytes remain.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::ensure_sufficient_stack;

    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn passes_through_the_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| "done"), "done");
        let ok: Result<u8, String> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(ok, Ok(7));
    }

    #[test]
    fn survives_deep_nesting() {
        assert_eq!(nest(200_000), 200_000);
    }
}

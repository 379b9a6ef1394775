//! Cycle detection for recursive resolution.

use std::cell::RefCell;

use crate::error::{DiError, DiResult};

const MAX_DEPTH: usize = 1024;

thread_local! {
    // Names of the types currently being resolved on this thread's call stack.
    static RESOLUTION_STACK: RefCell<Vec<&'static str>> = RefCell::new(Vec::new());
}

/// RAII guard marking a type as resolution-in-progress on this thread.
///
/// Re-entering `enter` for a name already on the stack means a registration's
/// factory transitively requested itself; that returns
/// [`DiError::Circular`] with the full path instead of recursing until the
/// call stack is exhausted.
pub(crate) struct StackGuard;

impl StackGuard {
    pub(crate) fn enter(name: &'static str) -> DiResult<StackGuard> {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.iter().any(|&n| n == name) {
                let mut path = stack.clone();
                path.push(name);
                return Err(DiError::Circular(path));
            }
            if stack.len() >= MAX_DEPTH {
                return Err(DiError::DepthExceeded(stack.len()));
            }
            stack.push(name);
            Ok(StackGuard)
        })
    }
}

impl Drop for StackGuard {
    fn drop(&mut self) {
        RESOLUTION_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

//! Internal implementation details.

mod circular;

pub(crate) use circular::StackGuard;

//! Core trait definitions.

mod construct;
mod resolver;

pub use construct::Construct;
pub use resolver::{Resolver, ResolverCore};

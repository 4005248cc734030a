//! Command implementations

mod publish;

pub use publish::publish;

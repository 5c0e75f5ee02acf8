//! CLI command implementations.

mod build;
mod check;
mod serve;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use serve::ServeArgs;

pub mod action;
#[allow(clippy::module_inception)]
pub mod parser;

pub use action::{Action, DropKind, ShowKind};
pub use parser::parse;

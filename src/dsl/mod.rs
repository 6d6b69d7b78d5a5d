//! DSL Parser: YAML text to structural `trigger` / `workflow` / `pipeline` sections.

pub mod definition;
pub mod parsing;

pub use definition::*;
pub use parsing::parse;

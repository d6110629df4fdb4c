//! CLI command handlers. Each command is in its own file.

mod extract;
mod translate;

pub use extract::run_extract;
pub use translate::run_translate;

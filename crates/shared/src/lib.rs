mod command;
mod issue;

pub use command::*;
pub use issue::*;

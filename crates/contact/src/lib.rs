mod inbox;
mod phone;
mod submission;
mod value_object;

pub use inbox::*;
pub use phone::*;
pub use submission::*;
pub use value_object::*;

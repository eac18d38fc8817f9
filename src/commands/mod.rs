pub mod add;
pub mod output;

pub use add::{AddOptions, add};

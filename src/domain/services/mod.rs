pub mod actions;
mod conversation;
mod math_notation;
mod preferences;
mod transcript;

pub use conversation::*;
pub use math_notation::*;
pub use preferences::*;
pub use transcript::*;

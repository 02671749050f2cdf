//! Column input: the "next column choice" seam between the game loop and
//! whatever front end supplies moves.

mod scripted;
mod source;

pub use scripted::ScriptedInput;
pub use source::{Choice, ColumnSource};

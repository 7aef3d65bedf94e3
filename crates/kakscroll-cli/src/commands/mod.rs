pub mod script;
pub mod scroll;

pub mod cmd;
pub mod command;
pub mod fileformat;
pub mod runtime;
pub mod session;
pub mod uno;
pub mod utils;

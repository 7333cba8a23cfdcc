pub mod uno_function;
pub mod uno_script;

pub use uno_function::UnoFunction;
pub use uno_script::UnoShellScript;

mod command_to_string;
mod detect_software;
mod touch_file;

pub use detect_software::check_python;
pub use detect_software::check_uno_script;

pub use command_to_string::command_to_string;
pub use touch_file::touch_file;

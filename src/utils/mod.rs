pub mod command_line;
pub mod suggest;
pub mod text;
pub mod tool_errors;
pub mod user_paths;

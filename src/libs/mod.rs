pub mod code_converter;
pub mod config_dir;
pub mod config_file;
pub mod menu;
pub mod report;
pub mod util;

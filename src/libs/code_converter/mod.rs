pub mod code_converter;
pub mod error;
pub mod gray;

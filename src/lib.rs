#[macro_use]
extern crate enum_primitive;

pub mod libs;

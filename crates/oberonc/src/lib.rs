#![doc = include_str!("../README.md")]

pub mod compiler;
pub mod render;
pub mod report;

pub use compiler::{DriverError, OberonC, OberonCBuilder};
pub use report::CompileReport;

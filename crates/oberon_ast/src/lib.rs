#![doc = include_str!("../README.md")]

pub mod block;
pub mod error;
pub mod expr;
pub mod function;
pub mod printer;
pub mod statements;
pub mod visitor;

pub use visitor::{traverse, Visitor};

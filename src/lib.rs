//! Guide and code generator for a real-time meeting assistant Chrome extension.
//!
//! The library core is [`generator`], which renders the seven extension files
//! from a [`generator::GenerationOptions`], and [`catalog`], the reference
//! tables shown next to it. The CLI and the local web server in [`api`] are
//! thin front ends over those two.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod generator;
pub mod global;

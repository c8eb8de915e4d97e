// src/lib.rs
pub mod args;
pub mod config;
pub mod counter;
pub mod engine;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;
pub mod stats;

pub use engine::run;

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod logger;
pub mod patterns;
pub mod renamer;
pub mod scanner;
pub mod selector;

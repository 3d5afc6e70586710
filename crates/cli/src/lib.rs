//! `prodcat-cli`
//!
//! **Responsibility:** command-line front end for the product catalog.
//!
//! Configuration is layered (defaults, environment, flags); the catalog is
//! rendered once (`show`) or after every command read from stdin
//! (`interactive`).

pub mod app;
pub mod args;
pub mod config;
pub mod render;
pub mod repl;

pub use app::{load_reference, run};
pub use args::{Cli, Command, FilterArgs, GlobalArgs, OutputFormat};
pub use config::{Config, ConfigError};

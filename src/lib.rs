#![forbid(unsafe_code)]
//! difo — directory information: tree view, size bars, sorted listings and
//! paced file display.

pub mod cli;
pub mod entry;
pub mod error;
pub mod render;
pub mod slide;
pub mod sort;
pub mod style;
pub mod terminal;
pub mod tree;
pub mod view;

pub use error::{DifoError, Result};

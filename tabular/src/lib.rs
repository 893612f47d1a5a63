//! Aligned table rendering for terminal and log output.
//!
//! This crate turns a grid of string cells (an optional headline plus a
//! body matrix) into one monospace text block with column-aware alignment:
//! integers right-aligned, decimal points stacked, dates and times lined
//! up, plain text left-aligned. Width is character count; values are never
//! parsed, only matched by shape.
//!
//! ```
//! use tabular::{cell, render};
//!
//! let body = vec![
//!     vec![cell("1.2"), cell("bolt")],
//!     vec![cell("12.34"), cell("nut")],
//! ];
//! let table = render(&body, None).unwrap();
//! assert_eq!(table, " 1.20 │ bolt\n12.34 │ nut ");
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Alignment engine
pub mod classify;
pub mod column;
pub mod padding;
pub mod patterns;
pub mod text;

// Assembly
pub mod renderer;

// Re-export main types for convenience
pub use classify::{CellKind, classify};
pub use column::ColumnProfile;
pub use config::{DEFAULT_COLUMN_SEPARATOR, RenderConfig};
pub use error::{Result, TableError};
pub use padding::Padding;
pub use renderer::{DEFAULT, TableRenderer, TableRendererBuilder};
pub use types::{Cell, absent, cell};

/// Render a table with the shared default renderer.
pub fn render(body: &[Vec<Cell>], headline: Option<&[Cell]>) -> Result<String> {
    DEFAULT.render(body, headline)
}

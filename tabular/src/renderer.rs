use once_cell::sync::Lazy;

use crate::column::ColumnProfile;
use crate::config::{DEFAULT_COLUMN_SEPARATOR, RenderConfig};
use crate::error::{Result, TableError};
use crate::padding::Padding;
use crate::types::Cell;

/// Horizontal bar of the headline separator line.
const RULE: &str = "─";
/// Continuation of the rule through the default column separator.
const RULE_JUNCTION: &str = "─┼─";

/// Shared renderer with the default configuration.
pub static DEFAULT: Lazy<TableRenderer> = Lazy::new(TableRenderer::new);

/// Renders a grid of cells (optional headline plus body rows) into one
/// aligned block of text.
///
/// Each call is a pure function of the inputs and the immutable
/// configuration; column profiles are rebuilt per call and never shared, so
/// one renderer can be used from any number of threads.
pub struct TableRenderer {
    config: RenderConfig,
}

impl TableRenderer {
    /// Create a renderer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Create a renderer with a custom configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> TableRendererBuilder {
        TableRendererBuilder::new()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `body`, with an optional `headline` row above a separator
    /// line, into a single block without a trailing newline.
    ///
    /// # Errors
    /// `StructuralMismatch` when any row disagrees with the table's column
    /// count (headline length, or the first row's length without a
    /// headline), detected before any output is assembled.
    pub fn render(&self, body: &[Vec<Cell>], headline: Option<&[Cell]>) -> Result<String> {
        if headline.is_none() && body.is_empty() {
            return Ok(String::new());
        }

        let columns = column_count(body, headline);
        validate(body, columns)?;

        let profiles = profiles(body, headline, columns);

        let mut output = String::new();

        if let Some(headline) = headline {
            self.render_row(headline, &profiles, &mut output);
            self.render_separator_line(&profiles, &mut output);
        }

        for row in body {
            self.render_row(row, &profiles, &mut output);
        }

        // Drop the trailing newline of the last row.
        output.pop();

        Ok(output)
    }

    fn render_row(&self, row: &[Cell], profiles: &[ColumnProfile], output: &mut String) {
        for (column, cell) in row.iter().enumerate() {
            if column > 0 {
                output.push_str(&self.config.column_separator);
            }
            self.render_cell(cell.as_deref(), &profiles[column], output);
        }
        output.push('\n');
    }

    fn render_cell(&self, cell: Option<&str>, profile: &ColumnProfile, output: &mut String) {
        let padding = Padding::resolve(cell, profile);
        output.push_str(&padding.prefix);
        output.push_str(cell.unwrap_or(&self.config.null_placeholder));
        output.push_str(&padding.suffix);
    }

    /// The line under the headline: one dash run per column, joined so the
    /// column boundaries stay under the separators above.
    fn render_separator_line(&self, profiles: &[ColumnProfile], output: &mut String) {
        let joint = self.separator_rule();
        for (column, profile) in profiles.iter().enumerate() {
            if column > 0 {
                output.push_str(&joint);
            }
            output.push_str(&RULE.repeat(profile.text_width));
        }
        output.push('\n');
    }

    /// How the rule crosses one column separator. The default separator
    /// turns into a junction glyph; a custom one keeps its interior
    /// verbatim with only the leading and trailing space runs dashed.
    fn separator_rule(&self) -> String {
        let separator = self.config.column_separator.as_str();
        if separator == DEFAULT_COLUMN_SEPARATOR {
            return RULE_JUNCTION.to_string();
        }

        let without_leading = separator.trim_start_matches(' ');
        let leading = separator.len() - without_leading.len();
        let interior = without_leading.trim_end_matches(' ');
        let trailing = without_leading.len() - interior.len();

        let mut rule = RULE.repeat(leading);
        rule.push_str(interior);
        rule.push_str(&RULE.repeat(trailing));
        rule
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn column_count(body: &[Vec<Cell>], headline: Option<&[Cell]>) -> usize {
    match headline {
        Some(headline) => headline.len(),
        None => body[0].len(),
    }
}

fn validate(body: &[Vec<Cell>], columns: usize) -> Result<()> {
    for (row, cells) in body.iter().enumerate() {
        if cells.len() != columns {
            return Err(TableError::StructuralMismatch {
                row,
                expected: columns,
                actual: cells.len(),
            });
        }
    }
    Ok(())
}

fn profiles(body: &[Vec<Cell>], headline: Option<&[Cell]>, columns: usize) -> Vec<ColumnProfile> {
    (0..columns)
        .map(|column| {
            let headline_cell = headline.map(|cells| cells[column].as_deref());
            ColumnProfile::analyze(
                headline_cell
                    .into_iter()
                    .chain(body.iter().map(|row| row[column].as_deref())),
            )
        })
        .collect()
}

/// Builder for `TableRenderer` to improve API ergonomics
pub struct TableRendererBuilder {
    config: RenderConfig,
}

impl TableRendererBuilder {
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Set the string rendered between adjacent columns.
    #[must_use]
    pub fn column_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.config.column_separator = separator.into();
        self
    }

    /// Set the display text substituted for absent cells.
    #[must_use]
    pub fn null_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.config.null_placeholder = placeholder.into();
        self
    }

    pub fn build(self) -> TableRenderer {
        TableRenderer::with_config(self.config)
    }
}

impl Default for TableRendererBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use crate::classify::{CellKind, classify};
use crate::column::ColumnProfile;
use crate::text;

/// Literal strings placed around a formatted cell value. Computed per cell
/// and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Padding {
    pub prefix: String,
    pub suffix: String,
}

impl Padding {
    fn new(prefix: String, suffix: String) -> Self {
        Self { prefix, suffix }
    }

    /// Resolve the padding for one cell against its column's profile.
    ///
    /// Pure function of its inputs: absent cells pad like zero-length text
    /// (the placeholder is substituted later and never affects pad widths),
    /// plain text is left-aligned, numeric cells right-align, and decimal
    /// columns line their points up.
    pub fn resolve(cell: Option<&str>, profile: &ColumnProfile) -> Self {
        let Some(value) = cell else {
            return Self::left_aligned(0, profile);
        };

        match classify(value) {
            kind if kind.has_decimal_point() || (kind.is_numeric() && profile.decimal_aligned) => {
                Self::decimal_aligned(value, kind, profile)
            }
            kind if kind.is_numeric() => Self::right_aligned(text::width(value), profile),
            _ => Self::left_aligned(text::width(value), profile),
        }
    }

    /// All slack goes right.
    fn left_aligned(width: usize, profile: &ColumnProfile) -> Self {
        Self::new(String::new(), " ".repeat(profile.text_width - width))
    }

    /// All slack goes left.
    fn right_aligned(width: usize, profile: &ColumnProfile) -> Self {
        Self::new(" ".repeat(profile.text_width - width), String::new())
    }

    /// Pad the integer and fractional parts independently so decimal points
    /// stack. Reals fill the missing fraction with `0`; fractional times
    /// fill with spaces; a cell without a point gets one extra space
    /// standing in for it. Slack against the column's text width goes
    /// entirely to the left pad.
    fn decimal_aligned(value: &str, kind: CellKind, profile: &ColumnProfile) -> Self {
        let width = text::width(value);
        let point = text::decimal_point(value);
        let (left, right) = match point {
            Some(index) => (index, width - index - 1),
            None => (width, 0),
        };

        // Time-like cells never feed the numeric extents, so saturate.
        let mut left_pad = profile.number_width_left.saturating_sub(left);
        let fill = profile.number_width_right.saturating_sub(right);

        let suffix = match (point.is_some(), kind) {
            (true, CellKind::Real) => "0".repeat(fill),
            (true, _) => " ".repeat(fill),
            (false, _) => " ".repeat(fill + 1),
        };

        let total = left_pad + width + suffix.len();
        if total < profile.text_width {
            left_pad += profile.text_width - total;
        }

        Self::new(" ".repeat(left_pad), suffix)
    }
}

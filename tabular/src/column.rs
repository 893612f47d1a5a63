use crate::classify::{CellKind, classify};
use crate::text;

/// Layout facts for one column, gathered before any cell is rendered and
/// scoped to a single render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnProfile {
    /// Widest cell in the column, in characters.
    pub text_width: usize,
    /// Widest integer part across numeric cells.
    pub number_width_left: usize,
    /// Widest fractional part across decimal-point-bearing cells.
    pub number_width_right: usize,
    /// Set when any cell in the column carries a decimal point.
    pub decimal_aligned: bool,
}

impl ColumnProfile {
    /// Build the profile for one column by folding over its cells, headline
    /// cell first when present.
    pub fn analyze<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        cells
            .into_iter()
            .fold(Self::default(), |profile, cell| profile.observe(cell))
    }

    /// Aggregation is commutative and idempotent, so scan order never
    /// changes the resulting profile.
    fn observe(mut self, cell: Option<&str>) -> Self {
        let Some(value) = cell else {
            return self;
        };

        self.text_width = self.text_width.max(text::width(value));

        match classify(value) {
            CellKind::Integer => {
                self.number_width_left = self.number_width_left.max(text::width(value));
            }
            kind if kind.has_decimal_point() => {
                if let Some(point) = text::decimal_point(value) {
                    self.decimal_aligned = true;
                    self.number_width_left = self.number_width_left.max(point);
                    self.number_width_right = self
                        .number_width_right
                        .max(text::width(value) - point - 1);
                }
            }
            _ => {}
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(cells: &[Option<&str>]) -> ColumnProfile {
        ColumnProfile::analyze(cells.iter().copied())
    }

    #[test]
    fn text_width_takes_the_widest_cell() {
        let profile = analyze(&[Some("a"), Some("three"), Some("bb")]);
        assert_eq!(profile.text_width, 5);
        assert_eq!(profile.number_width_left, 0);
        assert!(!profile.decimal_aligned);
    }

    #[test]
    fn absent_cells_are_zero_width() {
        let profile = analyze(&[None, Some("ab"), None]);
        assert_eq!(profile.text_width, 2);
    }

    #[test]
    fn empty_column_yields_the_default_profile() {
        assert_eq!(analyze(&[]), ColumnProfile::default());
    }

    #[test]
    fn integers_widen_the_left_extent() {
        let profile = analyze(&[Some("7"), Some("1234")]);
        assert_eq!(profile.number_width_left, 4);
        assert_eq!(profile.number_width_right, 0);
        assert!(!profile.decimal_aligned);
    }

    #[test]
    fn reals_split_at_the_point() {
        let profile = analyze(&[Some("1.2"), Some("34.567")]);
        assert!(profile.decimal_aligned);
        assert_eq!(profile.number_width_left, 2);
        assert_eq!(profile.number_width_right, 3);
        assert_eq!(profile.text_width, 6);
    }

    #[test]
    fn fractional_times_split_like_reals() {
        let profile = analyze(&[Some("12:34:56.78")]);
        assert!(profile.decimal_aligned);
        assert_eq!(profile.number_width_left, 8);
        assert_eq!(profile.number_width_right, 2);
    }

    #[test]
    fn plain_dates_and_times_only_affect_text_width() {
        let profile = analyze(&[
            Some("2001-02-03"),
            Some("12:34"),
            Some("2001-02-03 12:34:56"),
        ]);
        assert_eq!(profile.text_width, 19);
        assert_eq!(profile.number_width_left, 0);
        assert_eq!(profile.number_width_right, 0);
        assert!(!profile.decimal_aligned);
    }

    #[test]
    fn scan_order_never_changes_the_profile() {
        let cells = [Some("1.2"), Some("34"), None, Some("text"), Some("5.678")];
        let forward = ColumnProfile::analyze(cells.iter().copied());
        let reversed = ColumnProfile::analyze(cells.iter().rev().copied());
        assert_eq!(forward, reversed);
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::patterns::{
    DATE_PATTERN, DATE_TIME_FRACTION_PATTERN, DATE_TIME_PATTERN, INTEGER_PATTERN, REAL_PATTERN,
    TIME_PATTERN,
};

/// Shape of a single cell value, used to pick its padding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Integer,
    Real,
    Time,
    Date,
    DateTimeFraction,
    DateTime,
    Text,
}

impl CellKind {
    /// Whether the kind takes part in numeric alignment at all.
    pub fn is_numeric(self) -> bool {
        self != CellKind::Text
    }

    /// Whether values of this kind always carry a decimal point.
    pub fn has_decimal_point(self) -> bool {
        matches!(self, CellKind::Real | CellKind::DateTimeFraction)
    }
}

/// Classification table, evaluated top to bottom. The fractional date-time
/// pattern must precede the plain one, which also admits a fractional tail.
static CLASSIFICATION: &[(&Lazy<Regex>, CellKind)] = &[
    (&INTEGER_PATTERN, CellKind::Integer),
    (&REAL_PATTERN, CellKind::Real),
    (&TIME_PATTERN, CellKind::Time),
    (&DATE_PATTERN, CellKind::Date),
    (&DATE_TIME_FRACTION_PATTERN, CellKind::DateTimeFraction),
    (&DATE_TIME_PATTERN, CellKind::DateTime),
];

/// Classify a cell value by full-string match, falling back to `Text`.
pub fn classify(cell: &str) -> CellKind {
    for (pattern, kind) in CLASSIFICATION {
        if pattern.is_match(cell) {
            return *kind;
        }
    }

    CellKind::Text
}

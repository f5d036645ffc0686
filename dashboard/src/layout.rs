//! Grid span lookups.
//!
//! Tiles may cover one to three columns and rows. Class names come from
//! fixed tables so the stylesheet only has to define six selectors.

use crate::error::DataError;
use serde::{Deserialize, Serialize};

/// Number of grid tracks a tile covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Span {
    /// One track (default)
    #[default]
    One,
    /// Two tracks
    Two,
    /// Three tracks
    Three,
}

const COL_CLASSES: [&str; 3] = ["col-span-1", "col-span-2", "col-span-3"];
const ROW_CLASSES: [&str; 3] = ["row-span-1", "row-span-2", "row-span-3"];

impl Span {
    fn index(self) -> usize {
        match self {
            Span::One => 0,
            Span::Two => 1,
            Span::Three => 2,
        }
    }

    /// Track count as an integer.
    pub fn get(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Column class, e.g. `col-span-2`.
    pub fn col_class(self) -> &'static str {
        COL_CLASSES[self.index()]
    }

    /// Row class, e.g. `row-span-2`.
    pub fn row_class(self) -> &'static str {
        ROW_CLASSES[self.index()]
    }

    /// `true` for the default single-track span.
    pub fn is_one(&self) -> bool {
        *self == Span::One
    }
}

impl TryFrom<u8> for Span {
    type Error = DataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Span::One),
            2 => Ok(Span::Two),
            3 => Ok(Span::Three),
            other => Err(DataError::InvalidSpan(other)),
        }
    }
}

impl From<Span> for u8 {
    fn from(span: Span) -> Self {
        span.get()
    }
}

/// Combined class string for a tile cell.
pub fn span_classes(cols: Span, rows: Span) -> String {
    format!("{} {}", cols.col_class(), rows.row_class())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_tables() {
        assert_eq!(Span::One.col_class(), "col-span-1");
        assert_eq!(Span::Three.row_class(), "row-span-3");
        assert_eq!(span_classes(Span::Two, Span::Two), "col-span-2 row-span-2");
        assert_eq!(span_classes(Span::default(), Span::default()), "col-span-1 row-span-1");
    }

    #[test]
    fn integer_conversion() {
        assert_eq!(Span::try_from(2).ok(), Some(Span::Two));
        assert_eq!(u8::from(Span::Three), 3);
        assert!(matches!(Span::try_from(0), Err(DataError::InvalidSpan(0))));
        assert!(matches!(Span::try_from(4), Err(DataError::InvalidSpan(4))));
    }

    #[test]
    fn serde_as_integer() {
        let span: Span = serde_json::from_str("3").unwrap();
        assert_eq!(span, Span::Three);
        assert_eq!(serde_json::to_string(&Span::Two).unwrap(), "2");
        assert!(serde_json::from_str::<Span>("5").is_err());
    }
}

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Requested order of a sorted listing.
///
/// `Asc`/`Desc` describe the order of the underlying values, not "best first".
/// For `rank`, `Asc` means rank 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(ModelError::UnknownSortDirection(other.to_string())),
        }
    }
}

/// Which end of a metric is the good end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Better {
    Higher,
    Lower,
}

impl Better {
    /// The value order that lists the best entries first.
    pub fn best_first(self) -> SortDirection {
        match self {
            Better::Higher => SortDirection::Desc,
            Better::Lower => SortDirection::Asc,
        }
    }
}

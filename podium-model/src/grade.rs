use std::fmt;

/// Qualitative band for a 0-100 sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ScoreGrade {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreGrade {
    pub const EXCELLENT_THRESHOLD: f64 = 95.0;
    pub const GOOD_THRESHOLD: f64 = 90.0;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::EXCELLENT_THRESHOLD {
            ScoreGrade::Excellent
        } else if score >= Self::GOOD_THRESHOLD {
            ScoreGrade::Good
        } else {
            ScoreGrade::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One measured sub-score of an entry, as shown on a detail view.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SubScore {
    pub key: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub grade: ScoreGrade,
}

impl SubScore {
    pub fn new(key: &'static str, label: &'static str, score: f64) -> Self {
        Self {
            key,
            label,
            score,
            grade: ScoreGrade::from_score(score),
        }
    }
}

/// Collect the measured scores from `(key, label, value)` triples, skipping
/// the ones that were never evaluated.
pub(crate) fn present_scores(
    scores: [(&'static str, &'static str, Option<f64>); 5],
) -> Vec<SubScore> {
    scores
        .into_iter()
        .filter_map(|(key, label, value)| {
            value.map(|score| SubScore::new(key, label, score))
        })
        .collect()
}

//! A loaded leaderboard
//!
//! The backing file is read once, normalized and ranked. The collection is
//! immutable afterwards and safe to share behind an `Arc`.

use std::path::{Path, PathBuf};

use podium_model::SubScore;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{PodiumError, Result};
use crate::normalize::{Normalize, normalize_all};
use crate::query::rank_map::{RankMap, Ranked, build_rank_map};
use crate::query::sorting::RankedEntry;
use crate::query::types::{LeaderboardQuery, QueryPage};
use crate::summary::{LeaderboardSummary, summarize};

/// Detail view of one entry: the entry, its canonical rank and the
/// measured sub-scores with their grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDetail<E> {
    #[serde(flatten)]
    pub ranked: Ranked<E>,
    pub sub_scores: Vec<SubScore>,
}

#[derive(Debug, Clone)]
pub struct Leaderboard<E> {
    entries: Vec<E>,
    ranks: RankMap,
    source: Option<PathBuf>,
}

impl<E: RankedEntry> Leaderboard<E> {
    pub fn from_entries(entries: Vec<E>) -> Self {
        let ranks = build_rank_map(&entries);
        Self {
            entries,
            ranks,
            source: None,
        }
    }

    pub fn empty() -> Self {
        Self::from_entries(Vec::new())
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ranks(&self) -> &RankMap {
        &self.ranks
    }

    /// File the collection was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.ranks.get(id)
    }

    /// Case-insensitive exact match on the display name. With duplicate
    /// names the first entry in source order wins, not the best ranked.
    pub fn find_by_name(&self, name: &str) -> Option<&E> {
        let wanted = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.display_name().to_lowercase() == wanted)
    }

    pub fn detail(&self, name: &str) -> Option<EntryDetail<E>> {
        let entry = self.find_by_name(name)?;
        Some(EntryDetail {
            sub_scores: entry.sub_scores(),
            ranked: Ranked::from_map(entry.clone(), &self.ranks),
        })
    }

    pub fn query(&self, query: &LeaderboardQuery<E::SortKey>) -> QueryPage<E> {
        query.execute(&self.entries, &self.ranks)
    }

    pub fn summary(&self) -> LeaderboardSummary<E> {
        summarize(&self.entries)
    }
}

impl<E: RankedEntry + Normalize> Leaderboard<E> {
    pub fn from_records(records: &[Value]) -> Self {
        Self::from_entries(normalize_all(records))
    }

    /// Parse a JSON document. Anything but a top-level array yields an
    /// empty leaderboard.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        match document {
            Value::Array(records) => Ok(Self::from_records(&records)),
            other => {
                warn!(
                    kind = json_kind(&other),
                    "leaderboard document is not an array; loading no entries"
                );
                Ok(Self::empty())
            }
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading leaderboard data");

        let json = std::fs::read_to_string(path)
            .map_err(|source| PodiumError::io(path, source))?;
        let mut leaderboard = Self::from_json_str(&json)?;
        leaderboard.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            entries = leaderboard.len(),
            "loaded leaderboard"
        );
        Ok(leaderboard)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use podium_model::{AlgorithmEntry, ModelEntry, ScoreGrade};

    use super::*;

    const SAMPLE: &str = r#"[
        {"id": "alg-hugo", "algorithmName": "HUGO", "datasetProfile": "BOSSBase-256",
         "compositeScore": 95, "psnrDb": 43.1, "ber": 0.010, "payloadBpp": 0.40,
         "lastEvaluatedIso": "2026-02-24T10:00:00.000Z", "compressionScore": 96.2,
         "noiseScore": 88.0},
        {"id": "alg-suniward", "algorithmName": "S-UNIWARD", "datasetProfile": "BOSSBase-512",
         "compositeScore": 95, "psnrDb": 43.1, "ber": 0.009, "payloadBpp": 0.38,
         "lastEvaluatedIso": "2026-02-24T11:00:00.000Z"}
    ]"#;

    #[test]
    fn loads_and_ranks_a_json_array() {
        let board = Leaderboard::<AlgorithmEntry>::from_json_str(SAMPLE).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.rank_of("alg-suniward"), Some(1));
        assert_eq!(board.rank_of("alg-hugo"), Some(2));
        assert_eq!(board.entries()[0].id, "alg-hugo");
    }

    #[test]
    fn non_array_documents_load_empty() {
        let board = Leaderboard::<ModelEntry>::from_json_str(r#"{"models": []}"#).unwrap();
        assert!(board.is_empty());
        assert!(board.ranks().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = Leaderboard::<ModelEntry>::from_json_str("[{");
        assert!(matches!(result, Err(PodiumError::Serialization(_))));
    }

    #[test]
    fn finds_entries_by_name_ignoring_case() {
        let board = Leaderboard::<AlgorithmEntry>::from_json_str(SAMPLE).unwrap();
        assert_eq!(board.find_by_name("hugo").map(|e| e.id.as_str()), Some("alg-hugo"));
        assert!(board.find_by_name("HUG").is_none());

        let detail = board.detail("HUGO").unwrap();
        assert_eq!(detail.ranked.rank, 2);
        let grades: Vec<_> = detail.sub_scores.iter().map(|s| (s.label, s.grade)).collect();
        assert_eq!(
            grades,
            [
                ("Compression", ScoreGrade::Excellent),
                ("Noise", ScoreGrade::NeedsImprovement)
            ]
        );
    }

    #[test]
    fn duplicate_names_resolve_in_source_order() {
        let json = r#"[
            {"id": "alg-lsb-old", "algorithmName": "LSB", "compositeScore": 70},
            {"id": "alg-lsb-new", "algorithmName": "lsb", "compositeScore": 90}
        ]"#;
        let board = Leaderboard::<AlgorithmEntry>::from_json_str(json).unwrap();
        assert_eq!(board.rank_of("alg-lsb-new"), Some(1));

        let found = board.find_by_name("LSB").map(|e| e.id.as_str());
        assert_eq!(found, Some("alg-lsb-old"));
        assert_eq!(board.detail("lsb").unwrap().ranked.rank, 2);
    }

    #[test]
    fn load_reads_from_disk_and_reports_missing_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let board = Leaderboard::<AlgorithmEntry>::load(file.path()).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.source(), Some(file.path()));

        let dir = tempfile::tempdir().unwrap();
        let missing = Leaderboard::<AlgorithmEntry>::load(dir.path().join("nope.json"));
        assert!(missing.is_err_and(|err| err.is_not_found()));
    }
}

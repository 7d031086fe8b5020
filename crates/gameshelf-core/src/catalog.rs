use crate::record::GameRecord;

/// The full loaded sequence of game records for a page session.
///
/// Loaded once, read thereafter. Records have no identity beyond their
/// position; duplicates are permitted and not deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<GameRecord>,
}

/// One distinct tag: first-seen casing for display, folded key for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLabel {
    pub display: String,
    pub key: String,
}

impl Catalog {
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    /// Parse a catalog from a JSON array of record mappings.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<GameRecord>>(text).map(Self::new)
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct tags across all records as an ordered, deduplicated sequence:
    /// first-seen order, first-seen casing, case-folded key. Deterministic,
    /// unlike a set-ordered iteration.
    pub fn tag_labels(&self) -> Vec<TagLabel> {
        let mut labels: Vec<TagLabel> = Vec::new();
        for record in &self.records {
            for tag in &record.tags {
                let key = tag.to_lowercase();
                if !labels.iter().any(|l| l.key == key) {
                    labels.push(TagLabel {
                        display: tag.clone(),
                        key,
                    });
                }
            }
        }
        labels
    }
}

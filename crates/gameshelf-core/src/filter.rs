use crate::catalog::Catalog;
use crate::record::GameRecord;

/// Key carried by the reserved "all" filter control.
pub const ALL_KEY: &str = "all";

/// The active filter: the whole catalog, or one tag's subset.
///
/// `Tag` always holds the lower-cased key; matching against record tags is
/// exact after case folding, never substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterKey {
    #[default]
    All,
    Tag(String),
}

impl FilterKey {
    pub fn from_key(raw: &str) -> Self {
        let folded = raw.to_lowercase();
        if folded == ALL_KEY {
            Self::All
        } else {
            Self::Tag(folded)
        }
    }
}

/// Extract a filter key from an activation target's key attribute.
///
/// Activations that did not originate from a recognized filter control carry
/// no attribute (or an empty one) and are ignored by returning `None`.
pub fn filter_key_from_attr(attr: Option<&str>) -> Option<FilterKey> {
    match attr {
        Some(raw) if !raw.trim().is_empty() => Some(FilterKey::from_key(raw.trim())),
        _ => None,
    }
}

/// Compute the working subset for a filter key.
///
/// Stateless: always recomputed from the full catalog, never from a
/// previously displayed subset. `All` yields the catalog unchanged; `Tag`
/// yields every record whose folded tags contain the key, in input order.
pub fn compute_subset<'a>(catalog: &'a Catalog, key: &FilterKey) -> Vec<&'a GameRecord> {
    match key {
        FilterKey::All => catalog.records().iter().collect(),
        FilterKey::Tag(k) => catalog.records().iter().filter(|r| r.has_tag(k)).collect(),
    }
}

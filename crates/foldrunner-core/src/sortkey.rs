//! Lexicographic total order over interactions (spec §3, §4.1).
//!
//! A sort-key is the string `<height:012><ms:013><hash:64>`. Comparing two
//! sort-keys as raw bytes reproduces the protocol's total order exactly, so
//! [`SortKey`] derives `Ord` from its inner `String` rather than decomposing
//! into fields for comparison — decomposition would just be a slower way to
//! get the same answer.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

const HEIGHT_WIDTH: usize = 12;
const MS_WIDTH: usize = 13;
const HASH_WIDTH: usize = 64;
const LAST_MS: u64 = 9_999_999_999_999;

/// A total-order key over interactions. Orders lexicographically on the
/// underlying bytes; see module docs for the exact format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortKey(String);

impl SortKey {
    /// Builds a sort-key from its three components, zero-padding the height
    /// and block timestamp and lower-casing/left-padding the hash so that
    /// byte comparison matches numeric comparison for the numeric fields.
    pub fn new(height: u64, block_ms: u64, hash: &str) -> Self {
        debug_assert!(hash.len() <= HASH_WIDTH, "sort-key hash component too long");
        SortKey(format!(
            "{:0height_w$},{:0ms_w$},{:0>hash_w$}",
            height,
            block_ms,
            hash,
            height_w = HEIGHT_WIDTH,
            ms_w = MS_WIDTH,
            hash_w = HASH_WIDTH,
        ))
    }

    /// The distinguished genesis key: compares less than every real
    /// sort-key (the empty string is a prefix of, and thus less than, any
    /// non-empty string).
    pub fn genesis() -> Self {
        SortKey(String::new())
    }

    pub fn is_genesis(&self) -> bool {
        self.0.is_empty()
    }

    /// `generate_last_sort_key(height)`: compares greater than every real
    /// sort-key at `height`, per spec §3.
    pub fn last_at_height(height: u64) -> Self {
        SortKey(format!(
            "{:0height_w$},{},{}",
            height,
            LAST_MS,
            "z".repeat(HASH_WIDTH),
            height_w = HEIGHT_WIDTH,
        ))
    }

    /// Derives a sort-key for an interaction that lacks one, from
    /// `(block_height, block_id, interaction_id)`, per spec §4.1. `block_id`
    /// and `interaction_id` are hashed together into the hash slot so the
    /// derived key still sorts deterministically among peers at the same
    /// height.
    pub fn derive(block_height: u64, block_id: &str, interaction_id: &str) -> Self {
        let mut combined = String::with_capacity(block_id.len() + interaction_id.len());
        combined.push_str(block_id);
        combined.push_str(interaction_id);
        let hash = truncate_or_pad(&combined, HASH_WIDTH);
        SortKey::new(block_height, 0, &hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses a previously-serialized sort-key string verbatim, without
    /// reformatting it. Used when reading keys back out of storage.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        SortKey(raw.into())
    }
}

fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.len() >= width {
        s[s.len() - width..].to_string()
    } else {
        format!("{:0>width$}", s, width = width)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_bytes().cmp(other.0.as_bytes())
    }
}

/// Pure lexicographic comparison on raw bytes, exposed as a free function
/// for callers that prefer it to `SortKey`'s `Ord` impl (spec §4.1
/// `compare(a, b)`).
pub fn compare(a: &SortKey, b: &SortKey) -> Ordering {
    a.cmp(b)
}

/// Sorts interactions ascending by sort-key, deriving one for any
/// interaction that lacks it, using a stable sort so that interactions
/// which tie on sort-key (impossible by construction, but defended per
/// spec §4.7/§9(a)) keep a deterministic secondary order derived from
/// `(block.height, block.id, id)`.
pub fn sort<T: SortKeyed>(mut items: Vec<T>) -> Vec<T> {
    for item in items.iter_mut() {
        if item.sort_key().is_none() {
            let key = item.derive_sort_key();
            item.set_sort_key(key);
        }
    }
    items.sort_by(|a, b| {
        a.sort_key()
            .expect("sort-key assigned above")
            .cmp(b.sort_key().expect("sort-key assigned above"))
            .then_with(|| a.tie_break_key().cmp(&b.tie_break_key()))
    });
    items
}

/// Implemented by anything that can be ordered by [`SortKey`] and, failing
/// that, carries enough data to derive one (spec §4.1) and a
/// `(block.height, block.id, id)` tie-break tuple (spec §4.7).
pub trait SortKeyed {
    fn sort_key(&self) -> Option<&SortKey>;
    fn set_sort_key(&mut self, key: SortKey);
    fn derive_sort_key(&self) -> SortKey;
    fn tie_break_key(&self) -> (u64, String, String);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_orders_before_everything() {
        let g = SortKey::genesis();
        let real = SortKey::new(0, 0, "0");
        assert!(g < real);
    }

    #[test]
    fn last_orders_after_same_height_reals() {
        let real = SortKey::new(5, 1_700_000_000_000, "abc");
        let last = SortKey::last_at_height(5);
        assert!(real < last);
        // but not after a real key at a later height
        let later = SortKey::new(6, 0, "0");
        assert!(last < later);
    }

    #[test]
    fn ordering_is_lexicographic_on_height_first() {
        let a = SortKey::new(1, 999_999_999_999, "z".repeat(64).as_str());
        let b = SortKey::new(2, 0, "0");
        assert!(a < b, "height 1 must sort before height 2 regardless of ms/hash");
    }

    #[test]
    fn stable_sort_preserves_fetch_order_on_tie() {
        #[derive(Clone)]
        struct Item { key: Option<SortKey>, id: String }
        impl SortKeyed for Item {
            fn sort_key(&self) -> Option<&SortKey> { self.key.as_ref() }
            fn set_sort_key(&mut self, key: SortKey) { self.key = Some(key); }
            fn derive_sort_key(&self) -> SortKey { SortKey::derive(0, "b", &self.id) }
            fn tie_break_key(&self) -> (u64, String, String) { (0, "b".to_string(), self.id.clone()) }
        }
        let same = SortKey::new(1, 1, "x");
        let items = vec![
            Item { key: Some(same.clone()), id: "a".into() },
            Item { key: Some(same), id: "a".into() },
        ];
        let sorted = sort(items);
        assert_eq!(sorted.len(), 2);
    }
}

//! Batch aggregation for generated user agents
//!
//! The generator itself produces one string at a time; callers that want N of
//! them collect an ordered [`Batch`]. Entries keep their 1-based sequence
//! index for display, and the batch knows how to serialize itself for the
//! clipboard and the plain-text download.

use crate::generator::{self, Variant};
use serde::Serialize;

/// One generated user agent with its display position
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedUserAgent {
    /// 1-based position within the batch
    pub index: usize,
    /// The user-agent string itself
    pub value: String,
}

/// An ordered batch of independently generated user agents
#[derive(Debug, Clone, Serialize)]
pub struct Batch {
    /// Variant every entry was generated with
    pub variant: Variant,
    items: Vec<GeneratedUserAgent>,
}

impl Batch {
    /// Generate `count` user agents of the given variant, in order
    ///
    /// A count of zero yields an empty batch. No upper bound is enforced
    /// here; limiting is the caller's job.
    pub fn generate(variant: Variant, count: usize) -> Self {
        let items = (1..=count)
            .map(|index| GeneratedUserAgent {
                index,
                value: generator::generate(variant),
            })
            .collect();

        Self { variant, items }
    }

    /// Entries in generation order
    pub fn items(&self) -> &[GeneratedUserAgent] {
        &self.items
    }

    /// Consume the batch, yielding its entries
    pub fn into_items(self) -> Vec<GeneratedUserAgent> {
        self.items
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the batch holds no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Join all values with a blank line, the clipboard and file format
    pub fn join(&self) -> String {
        self.items
            .iter()
            .map(|ua| ua.value.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Date-stamped name for the plain-text download
    pub fn download_filename(&self) -> String {
        format!(
            "android-facebook-user-agents-{}.txt",
            chrono::Local::now().format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order_and_indices() {
        let batch = Batch::generate(Variant::Dalvik, 5);
        assert_eq!(batch.len(), 5);
        for (i, ua) in batch.items().iter().enumerate() {
            assert_eq!(ua.index, i + 1);
            assert!(ua.value.starts_with("Dalvik/"));
            assert!(ua.value.contains(" Build/"));
        }
    }

    #[test]
    fn test_zero_count_is_empty_not_an_error() {
        let batch = Batch::generate(Variant::Facebook, 0);
        assert!(batch.is_empty());
        assert_eq!(batch.join(), "");
    }

    #[test]
    fn test_single_entry() {
        let batch = Batch::generate(Variant::Facebook, 1);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.items()[0].index, 1);
    }

    #[test]
    fn test_large_batch_all_valid() {
        let batch = Batch::generate(Variant::Facebook, 1000);
        assert_eq!(batch.len(), 1000);
        for ua in batch.items() {
            assert!(ua.value.contains("FBAN/FB4A"));
            assert!(ua.value.contains("FBAV/"));
        }
    }

    #[test]
    fn test_join_uses_blank_line_separator() {
        let batch = Batch::generate(Variant::Dalvik, 3);
        let joined = batch.join();
        assert_eq!(joined.matches("\n\n").count(), 2);
        assert_eq!(joined.lines().filter(|l| !l.is_empty()).count(), 3);
    }

    #[test]
    fn test_download_filename_shape() {
        let batch = Batch::generate(Variant::Dalvik, 1);
        let name = batch.download_filename();
        assert!(name.starts_with("android-facebook-user-agents-"));
        assert!(name.ends_with(".txt"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Insertion-ordered list of saved earrings.

use std::path::{Path, PathBuf};

/// One saved earring. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarringRecord {
    brand: String,
    description: String,
    image_path: PathBuf,
}

impl EarringRecord {
    #[must_use]
    pub fn new(
        brand: impl Into<String>,
        description: impl Into<String>,
        image_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            brand: brand.into(),
            description: description.into(),
            image_path: image_path.into(),
        }
    }

    #[must_use]
    pub fn brand(&self) -> &str {
        &self.brand
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }
}

/// Records are only ever appended; nothing is edited or removed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<EarringRecord>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns a reference to it.
    pub fn push(&mut self, record: EarringRecord) -> &EarringRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> impl Iterator<Item = &EarringRecord> {
        self.records.iter()
    }

    /// Records saved by one brand, in save order.
    pub fn by_brand<'a>(&'a self, brand: &'a str) -> impl Iterator<Item = &'a EarringRecord> {
        self.records.iter().filter(move |record| record.brand == brand)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! Request-scoped memoization of resolved locations.

use std::collections::HashMap;

use super::{MediaLocator, ResolvedLocation, Variant};
use crate::access::{AccessContext, AccessLevel};
use crate::record::MediaRecord;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    record: String,
    tree: Option<u32>,
    variant: Variant,
    access_level: AccessLevel,
}

/// Cache of [`ResolvedLocation`]s owned by the calling layer.
///
/// Keys include the viewer's access level: URLs and etags derived from a
/// location are privilege-dependent and must not be shared between viewers.
#[derive(Debug, Default)]
pub struct LocationCache {
    entries: HashMap<CacheKey, ResolvedLocation>,
}

impl LocationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized location, resolving (and probing the filesystem)
    /// only on the first request for this key.
    pub fn get_or_locate(
        &mut self,
        locator: &MediaLocator,
        record: &MediaRecord,
        variant: Variant,
        access: &AccessContext,
    ) -> &ResolvedLocation {
        let key = CacheKey {
            record: record.cache_key().to_string(),
            tree: record.tree().map(|t| t.id),
            variant,
            access_level: access.access_level,
        };
        self.entries
            .entry(key)
            .or_insert_with(|| locator.locate(record, variant))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

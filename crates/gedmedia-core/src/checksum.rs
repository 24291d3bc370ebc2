//! Etag computation for protected media.
//!
//! The etag is appended to media firewall URLs as a cache buster, so it must
//! change whenever the file, the viewer's privileges or the watermark setting
//! change. It is not a content hash and is not meant to be collision-proof.

use crate::access::AccessLevel;

/// Separates etag input fields so that shifting characters between adjacent
/// fields cannot produce the same input.
const FIELD_SEP: u8 = 0x1f;

/// Inputs to [`etag`], in hashing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtagInput<'a> {
    pub basename: &'a str,
    pub modified: i64,
    pub tree_name: &'a str,
    pub access_level: AccessLevel,
    pub suppress_watermark: bool,
}

/// CRC-32 of the etag fields, rendered as 8 lowercase hex digits.
pub fn etag(input: &EtagInput<'_>) -> String {
    let mut hasher = crc32fast::Hasher::new();
    let modified = input.modified.to_string();
    let level = input.access_level.as_i32().to_string();
    let watermark: &[u8] = if input.suppress_watermark { b"1" } else { b"" };
    let fields: [&[u8]; 5] = [
        input.basename.as_bytes(),
        modified.as_bytes(),
        input.tree_name.as_bytes(),
        level.as_bytes(),
        watermark,
    ];
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            hasher.update(&[FIELD_SEP]);
        }
        hasher.update(field);
    }
    hex::encode(hasher.finalize().to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> EtagInput<'static> {
        EtagInput {
            basename: "wedding.jpg",
            modified: 1_300_000_000,
            tree_name: "smith",
            access_level: AccessLevel::Public,
            suppress_watermark: false,
        }
    }

    #[test]
    fn fixed_width_hex() {
        let tag = etag(&base());
        assert_eq!(tag.len(), 8);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn deterministic() {
        assert_eq!(etag(&base()), etag(&base()));
    }

    #[test]
    fn each_field_changes_output() {
        let reference = etag(&base());
        let variants = [
            EtagInput { basename: "funeral.jpg", ..base() },
            EtagInput { modified: 1_300_000_001, ..base() },
            EtagInput { tree_name: "jones", ..base() },
            EtagInput { access_level: AccessLevel::Member, ..base() },
            EtagInput { suppress_watermark: true, ..base() },
        ];
        for v in &variants {
            assert_ne!(etag(v), reference, "{v:?}");
        }
    }

    #[test]
    fn field_boundaries_matter() {
        let a = EtagInput { basename: "a1", modified: 23, ..base() };
        let b = EtagInput { basename: "a", modified: 123, ..base() };
        assert_ne!(etag(&a), etag(&b));
    }
}

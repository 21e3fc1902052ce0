//! Naming strategies and name generators.

use std::fmt;

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::source::SourceFile;

/// Caller-supplied name-computing function.
pub type NameFn = Box<dyn Fn(&SourceFile) -> String + Send + Sync>;

/// How the stored file name is derived.
///
/// One tagged value replaces the usual pile of mutually-exclusive setters:
/// the last strategy configured on the engine wins. The generated variants
/// (`Unique`, `Datetime`, `Sequence`, `Md5`, `Hash`) are collision-safe by
/// construction and bypass the engine's collision fallback; the caller-chosen
/// variants (`ClientOriginal`, `Literal`, `Computed`) get an existence check
/// and fall back to a unique name on collision.
#[derive(Default)]
pub enum NameStrategy {
    /// Use the file's original name.
    #[default]
    ClientOriginal,
    /// Use the given name verbatim.
    Literal(String),
    /// Invoke a function with the source file, use its return verbatim.
    Computed(NameFn),
    /// Random 32-char hex name.
    Unique,
    /// UTC timestamp plus a random 5-digit suffix.
    Datetime,
    /// `{stem}_{index}.{ext}`, linearly probed against the disk from 1.
    Sequence,
    /// MD5 digest of the file bytes.
    Md5,
    /// SHA-256 digest of the file bytes.
    Hash,
}

impl NameStrategy {
    /// Whether this strategy derives the name from randomness, time, or
    /// content rather than caller input.
    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(
            self,
            Self::Unique | Self::Datetime | Self::Sequence | Self::Md5 | Self::Hash
        )
    }
}

impl fmt::Debug for NameStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientOriginal => f.write_str("ClientOriginal"),
            Self::Literal(name) => f.debug_tuple("Literal").field(name).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
            Self::Unique => f.write_str("Unique"),
            Self::Datetime => f.write_str("Datetime"),
            Self::Sequence => f.write_str("Sequence"),
            Self::Md5 => f.write_str("Md5"),
            Self::Hash => f.write_str("Hash"),
        }
    }
}

/// Random unique name, preserving the source extension.
pub(crate) fn unique_name(file: &SourceFile) -> String {
    with_extension(Uuid::new_v4().simple().to_string(), file)
}

/// `YYYYmmddHHMMSS` UTC stamp plus a random 5-digit suffix.
pub(crate) fn datetime_name(file: &SourceFile) -> String {
    let stamp = Utc::now().format("%Y%m%d%H%M%S");
    let suffix: u32 = rand::thread_rng().gen_range(10_000..=99_999);
    with_extension(format!("{stamp}{suffix}"), file)
}

/// Lowercase hex MD5 digest of the file bytes.
pub(crate) fn md5_name(file: &SourceFile) -> String {
    with_extension(format!("{:x}", md5::compute(file.bytes())), file)
}

/// Lowercase hex SHA-256 digest of the file bytes.
pub(crate) fn hash_name(file: &SourceFile) -> String {
    let mut hasher = Sha256::new();
    hasher.update(file.bytes());
    with_extension(hex::encode(hasher.finalize()), file)
}

/// Append the source file's extension when it has one.
fn with_extension(base: String, file: &SourceFile) -> String {
    match file.extension() {
        Some(ext) => format!("{base}.{ext}"),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn file(name: &str, bytes: &'static [u8]) -> SourceFile {
        SourceFile::new(name, Bytes::from_static(bytes))
    }

    #[test]
    fn unique_preserves_extension_and_varies() {
        let f = file("photo.jpg", b"abc");
        let a = unique_name(&f);
        let b = unique_name(&f);
        assert!(a.ends_with(".jpg"));
        assert_eq!(a.len(), 32 + ".jpg".len());
        assert_ne!(a, b);
    }

    #[test]
    fn unique_without_extension_is_bare_hex() {
        let a = unique_name(&file("README", b""));
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn datetime_has_stamp_and_suffix() {
        let a = datetime_name(&file("photo.jpg", b""));
        // 14 digits of timestamp + 5 digit suffix + extension
        assert_eq!(a.len(), 19 + ".jpg".len());
        assert!(a.strip_suffix(".jpg").unwrap().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn md5_is_deterministic() {
        let f = file("doc.pdf", b"hello");
        assert_eq!(md5_name(&f), md5_name(&f));
        assert_eq!(md5_name(&f), "5d41402abc4b2a76b9719d911017c592.pdf");
    }

    #[test]
    fn hash_is_deterministic_and_distinct_from_md5() {
        let f = file("doc.pdf", b"hello");
        assert_eq!(hash_name(&f), hash_name(&f));
        assert_eq!(
            hash_name(&f),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824.pdf"
        );
        assert_ne!(hash_name(&f), md5_name(&f));
    }

    #[test]
    fn strategy_is_generated() {
        assert!(NameStrategy::Unique.is_generated());
        assert!(NameStrategy::Sequence.is_generated());
        assert!(!NameStrategy::ClientOriginal.is_generated());
        assert!(!NameStrategy::Literal("a.txt".into()).is_generated());
        assert!(!NameStrategy::Computed(Box::new(|f| f.name().to_string())).is_generated());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use bytes::Bytes;
    use proptest::prelude::*;

    // Content-derived names are a pure function of the bytes: identical input
    // bytes yield identical resolved names across separate calls.
    proptest! {
        #[test]
        fn prop_content_names_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let a = SourceFile::new("f.bin", Bytes::from(bytes.clone()));
            let b = SourceFile::new("f.bin", Bytes::from(bytes));

            prop_assert_eq!(md5_name(&a), md5_name(&b));
            prop_assert_eq!(hash_name(&a), hash_name(&b));
        }
    }

    // Every generator preserves the original extension.
    proptest! {
        #[test]
        fn prop_generated_names_preserve_extension(
            stem in "[a-zA-Z0-9_-]{1,20}",
            ext in "[a-z]{1,4}",
        ) {
            let f = SourceFile::new(format!("{stem}.{ext}"), Bytes::from_static(b"x"));
            let suffix = format!(".{ext}");

            prop_assert!(unique_name(&f).ends_with(&suffix));
            prop_assert!(datetime_name(&f).ends_with(&suffix));
            prop_assert!(md5_name(&f).ends_with(&suffix));
            prop_assert!(hash_name(&f).ends_with(&suffix));
        }
    }
}

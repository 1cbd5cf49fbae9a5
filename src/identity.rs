use sha1::Sha1;

/// Derives a stable identity string from `seed`.
///
/// Surrounding whitespace is trimmed before hashing and the SHA-1 digest is returned as
/// 40 lowercase hex characters. An empty seed yields an empty identity. The result is a
/// content address for idempotent resource keys and carries no security guarantee.
///
/// # Example
/// ```rust
/// use pemder::derive_identity;
///
/// assert_eq!(derive_identity(""), "");
/// assert_eq!(derive_identity(" abc\n"), derive_identity("abc"));
/// assert_eq!(derive_identity("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
pub fn derive_identity(seed: &str) -> String {
    if seed.is_empty() {
        return String::new();
    }

    let digest = <Sha1 as sha1::Digest>::digest(seed.trim().as_bytes());
    hex::encode(digest)
}

use std::path::Path;

use crate::catalog::load::normalize_extension;
use crate::catalog::model::Signature;

/// Extension of `path` in canonical form (`".zip"`), or `""` if it has none.
///
/// Only the last suffix counts: `backup.tar.gz` is `".gz"`. Dotfiles such
/// as `.bashrc` have no extension.
pub fn observed_extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| normalize_extension(&ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Whether `observed` contradicts the extensions `signature` allows.
///
/// A signature without allowed extensions never reports a mismatch.
pub fn is_extension_mismatch(signature: &Signature, observed: &str) -> bool {
    if signature.allowed_extensions.is_empty() {
        return false;
    }
    let observed = normalize_extension(observed);
    !signature
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&observed))
}

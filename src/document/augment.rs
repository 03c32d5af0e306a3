//! Append computed redirect entries to document metadata.

use super::Metadata;

/// The redirect entry for a document: the URL base prefix followed by its id.
///
/// The id is not validated; an empty id yields the prefix alone.
pub fn redirect_entry(url_base_prefix: &str, id: &str) -> String {
    format!("{url_base_prefix}{id}")
}

/// Append the redirect entry for `metadata` to its `redirect_from` list.
///
/// With `skip_existing` the list is left alone when it already holds the
/// entry. Returns whether an entry was appended.
pub fn append_redirect(metadata: &mut Metadata, url_base_prefix: &str, skip_existing: bool) -> bool {
    let entry = redirect_entry(url_base_prefix, &metadata.id);
    if skip_existing && metadata.redirect_from.contains(&entry) {
        return false;
    }
    metadata.redirect_from.push(entry);
    true
}

use tracing::debug;

/// Find the most recent release tag matching the given prefix.
///
/// Tags arrive oldest→newest as stored by the repository; the scan runs
/// newest→oldest and returns the first match. No match means this is the
/// first release, which is an expected state rather than an error.
pub fn find_previous_tag(all_tags: &[String], prefix: &str) -> Option<String> {
    debug!(prefix, "finding latest tag matching prefix");
    let prev_tag = all_tags
        .iter()
        .rev()
        .find(|tag| tag.starts_with(prefix))
        .cloned();
    debug!(?prev_tag, "previous tag");
    prev_tag
}

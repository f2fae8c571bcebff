pub(crate) const GIT_SHA: &str = env!("INGRESSO_GIT_SHA");

/// Short commit hash for the page footer.
pub(crate) fn short_sha() -> &'static str {
    GIT_SHA.get(..7).unwrap_or(GIT_SHA)
}

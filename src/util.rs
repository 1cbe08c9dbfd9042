//! Small stateless string and path helpers shared with the rest of the
//! add-on.

/// Truncate `s` to at most `max` characters, replacing the tail with `...`
/// when it does not fit. The result never exceeds `max`, even when `max` is
/// too small to hold the full ellipsis.
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.extend("...".chars().take(max - keep));
    out
}

/// Split `s` on any of the characters in `delimiters`. With `trim_empty`
/// set, empty tokens (consecutive delimiters, leading/trailing delimiter)
/// are dropped.
pub fn tokenize(s: &str, delimiters: &str, trim_empty: bool) -> Vec<String> {
    s.split(|c: char| delimiters.contains(c))
        .filter(|token| !trim_empty || !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join all elements of `parts` with `sep`.
pub fn join(parts: &[String], sep: char) -> String {
    parts.join(sep.to_string().as_str())
}

/// Strip `root` from the front of `path` when present, otherwise return the
/// path unchanged. Used to log simulator-relative paths.
pub fn strip_path_prefix(path: &str, root: &str) -> String {
    path.strip_prefix(root).unwrap_or(path).to_string()
}

/// Current UTC wall-clock time as `HH:MM:SS`.
pub fn utc_timestamp() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_keeps_short_strings_intact() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn truncation_appends_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
    }

    #[test]
    fn truncation_never_exceeds_tiny_limits() {
        assert_eq!(truncate_with_ellipsis("hello", 2), "..");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 3), "...");
    }

    #[test]
    fn tokenize_splits_on_any_delimiter() {
        assert_eq!(
            tokenize("a,b c", ", ", false),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn tokenize_keeps_or_trims_empty_tokens() {
        assert_eq!(
            tokenize("a,,b,", ",", false),
            vec!["a".to_string(), String::new(), "b".to_string(), String::new()]
        );
        assert_eq!(
            tokenize("a,,b,", ",", true),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn join_uses_every_element() {
        let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(join(&parts, '/'), "a/b/c");
        assert_eq!(join(&[], '/'), "");
    }

    #[test]
    fn path_prefix_is_only_stripped_when_it_matches() {
        assert_eq!(
            strip_path_prefix("/sim/Resources/plugins/x", "/sim/"),
            "Resources/plugins/x"
        );
        assert_eq!(strip_path_prefix("/other/x", "/sim/"), "/other/x");
    }

    #[test]
    fn utc_timestamp_is_hh_mm_ss() {
        let ts = utc_timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.as_bytes()[2], b':');
        assert_eq!(ts.as_bytes()[5], b':');
    }
}

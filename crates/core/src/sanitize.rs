//! Text sanitization helpers.

use regex::Regex;
use std::sync::LazyLock;

/// Remove `<script>…</script>` blocks and then every markup tag from `input`.
///
/// A tag is a `<` followed by at least one character other than `>` and a
/// closing `>`. An unterminated `<` is kept as text.
///
/// ```
/// use sk_core::sanitize::strip_tags;
///
/// assert_eq!(strip_tags("<b>Rock</b> &amp; roll"), "Rock &amp; roll");
/// assert_eq!(strip_tags("a < b"), "a < b");
/// ```
pub fn strip_tags(input: &str) -> String {
    static RE_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"</?[^>]+>"));

    RE_TAG.replace_all(&strip_scripts(input), "").into_owned()
}

/// Remove `<script …>…</script>` blocks, matching the tag names
/// case-insensitively. An unclosed `<script>` is left alone.
pub fn strip_scripts(input: &str) -> String {
    static RE_SCRIPT: LazyLock<Regex> =
        LazyLock::new(|| compile(r"(?is)<script[^>]*>.*?</script>"));

    RE_SCRIPT.replace_all(input, "").into_owned()
}

/// Compile a pattern written in this crate.
#[allow(clippy::expect_used)]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is a valid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_simple_tags() {
        assert_eq!(strip_tags("<b>Rock</b>abilly"), "Rockabilly");
        assert_eq!(strip_tags("<span class=\"x\">Jazz</span>"), "Jazz");
        assert_eq!(strip_tags("<br/>line"), "line");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(strip_tags("Rock"), "Rock");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_unterminated_and_empty_brackets_are_kept() {
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
        assert_eq!(strip_tags("<>"), "<>");
        assert_eq!(strip_tags("x <b"), "x <b");
    }

    #[test]
    fn test_scripts_are_removed_with_content() {
        assert_eq!(
            strip_tags("Rock<SCRIPT type=\"text/javascript\">alert('x')</script> on"),
            "Rock on"
        );
    }

    #[test]
    fn test_unclosed_script_is_stripped_as_tag_only() {
        assert_eq!(strip_tags("<script>alert(1)"), "alert(1)");
    }

    #[test]
    fn test_multiple_script_blocks_are_removed_separately() {
        assert_eq!(
            strip_tags("<script>a()</script>Soul<script>b()</script> music"),
            "Soul music"
        );
    }

    #[test]
    fn test_multibyte_text_survives() {
        assert_eq!(strip_tags("<i>Müsik</i> – ロック"), "Müsik – ロック");
    }
}

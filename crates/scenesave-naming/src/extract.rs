//! Pure extraction helpers behind the inference pipeline.
//!
//! Each function here is deterministic, allocation-light, and testable in
//! isolation; the engine composes them with the configured defaults.

use regex::{Captures, Regex};

/// The token a match contributes: the first capture group when the pattern
/// defines one, otherwise the whole match.
pub(crate) fn capture_token<'t>(caps: &Captures<'t>) -> &'t str {
    match caps.get(1) {
        Some(group) => group.as_str(),
        None => caps.get(0).map_or("", |m| m.as_str()),
    }
}

/// Last non-empty token produced by `pattern` over `filename`.
pub(crate) fn last_token<'t>(pattern: &Regex, filename: &'t str) -> Option<&'t str> {
    let mut last = None;
    for caps in pattern.captures_iter(filename) {
        let token = capture_token(&caps);
        if !token.is_empty() {
            last = Some(token);
        }
    }
    last
}

/// Integer value of a digit run, saturating at `u32::MAX`.
///
/// Non-digit bytes are skipped so a loosely configured pattern cannot make
/// inference panic.
pub(crate) fn parse_digits(digits: &str) -> u32 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u32, |acc, byte| {
            acc.saturating_mul(10).saturating_add(u32::from(byte - b'0'))
        })
}

/// Description is the filename prefix preceding the earliest located
/// version/user/discipline token.
///
/// This codifies the observed legacy behavior, quirks included:
/// - each token is looked up by its rightmost occurrence, in both its
///   stored case and upper case;
/// - an absent token participates as the empty string, whose rightmost
///   occurrence is the end of the string;
/// - the version token is the plain decimal form of the clamped version;
/// - of the last `.` and last `_` before the cutoff, the *earlier* one
///   terminates the description.
pub(crate) fn find_description(
    filename: &str,
    version: u32,
    user: &str,
    discipline: &str,
) -> Option<String> {
    let version_token = version.to_string();
    let user_upper = user.to_uppercase();
    let discipline_upper = discipline.to_uppercase();
    let tokens = [
        user,
        version_token.as_str(),
        discipline,
        user_upper.as_str(),
        version_token.as_str(),
        discipline_upper.as_str(),
    ];
    let cut = tokens
        .into_iter()
        .filter_map(|token| filename.rfind(token))
        .filter(|&index| index > 0)
        .min()?;
    let head = &filename[..cut];
    let separator = [head.rfind('.'), head.rfind('_')]
        .into_iter()
        .flatten()
        .filter(|&index| index > 0)
        .min()?;
    Some(filename[..separator].to_string())
}

/// Extension is the suffix after the final dot; a bare or dot-leading name
/// has none.
pub(crate) fn find_extension(filename: &str) -> Option<String> {
    let (stem, extension) = filename.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("005"), 5);
        assert_eq!(parse_digits("1032"), 1032);
        assert_eq!(parse_digits("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn test_last_token_prefers_capture_group() {
        let pattern = Regex::new("[vV]([0-9]+)").expect("pattern");
        assert_eq!(last_token(&pattern, "a_v005_b_V012"), Some("012"));
        assert_eq!(last_token(&pattern, "no version here"), None);
    }

    #[test]
    fn test_last_token_whole_match_without_group() {
        let pattern = Regex::new("[0-9]+").expect("pattern");
        assert_eq!(last_token(&pattern, "12_ab_345"), Some("345"));
    }

    #[test]
    fn test_description_uses_earlier_delimiter() {
        // Cutoff lands inside ".v00"; the earlier "_" beats the nearer ".".
        assert_eq!(
            find_description("anim_cave.v005.ma", 5, "", "ANIM"),
            Some("anim".to_string())
        );
    }

    #[test]
    fn test_description_none_without_delimiter() {
        assert_eq!(find_description("test", 1, "", ""), None);
    }

    #[test]
    fn test_description_none_when_tokens_lead() {
        assert_eq!(find_description("v01_brian_aw_LAYOUT.mc", 1, "aw", "LAYOUT"), None);
    }

    #[test]
    fn test_extension() {
        assert_eq!(find_extension("scene.v005.ma"), Some("ma".to_string()));
        assert_eq!(find_extension("scene"), None);
        assert_eq!(find_extension("scene."), None);
        assert_eq!(find_extension(".hidden"), None);
    }
}

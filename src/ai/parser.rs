//! Numbered-list extraction from free-form chat-completion output.
//!
//! The paraphrase prompt asks the model for numbered points ("1.", "2.", ...),
//! but the output is unconstrained natural language. This module is the
//! best-effort heuristic that recovers an ordered variant list from it, pure
//! and network-free so it can be tested with fixed strings.

/// Header line prepended to a non-empty variant list.
pub const VARIANTS_HEADER: &str = "Here are three unique paraphrased versions of the text:";

/// Preamble phrases that mark a line as model chatter rather than a variant.
const PREAMBLE_PHRASES: &[&str] = &["here are", "paraphrased"];

/// Extracts up to `variant_count` paraphrase variants from a raw model reply.
///
/// Primary pass keeps lines that already carry a single-digit ordinal marker
/// ("1." through "9."). If the model ignored the numbered format, a fallback
/// pass takes every non-blank line that is not preamble chatter and renumbers
/// it from 1. A non-empty result gets the fixed header line prepended; an
/// empty result is returned as-is, with no header.
///
/// # Arguments
/// * `raw` - The free-form chat-completion reply
/// * `variant_count` - Maximum number of variants to return
///
/// # Examples
///
/// ```
/// use textmorph::ai::parser::{extract_variants, VARIANTS_HEADER};
///
/// let variants = extract_variants("1. Hi world\n2. Greetings world", 3);
/// assert_eq!(variants, vec![VARIANTS_HEADER, "1. Hi world", "2. Greetings world"]);
/// ```
#[must_use]
pub fn extract_variants(raw: &str, variant_count: usize) -> Vec<String> {
    let mut lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| starts_with_ordinal(line))
        .map(str::to_string)
        .collect();

    // Fallback when the model did not follow the numbered format
    if lines.is_empty() {
        lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !is_preamble(line))
            .enumerate()
            .map(|(i, line)| format!("{}. {line}", i + 1))
            .collect();
    }

    lines.truncate(variant_count);

    if lines.is_empty() {
        return lines;
    }

    let mut result = Vec::with_capacity(lines.len() + 1);
    result.push(VARIANTS_HEADER.to_string());
    result.extend(lines);
    result
}

/// Whether a trimmed line begins with "N." for N in 1..=9.
fn starts_with_ordinal(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some('1'..='9'), Some('.'))
    )
}

/// Whether a line contains one of the known preamble phrases,
/// case-insensitively.
fn is_preamble(line: &str) -> bool {
    let lowered = line.to_lowercase();
    PREAMBLE_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_detection_covers_one_through_nine() {
        for n in 1..=9 {
            assert!(starts_with_ordinal(&format!("{n}. text")));
        }
        assert!(!starts_with_ordinal("0. text"));
        assert!(!starts_with_ordinal("10. text"));
        assert!(!starts_with_ordinal("- text"));
        assert!(!starts_with_ordinal(""));
    }

    #[test]
    fn preamble_detection_is_case_insensitive() {
        assert!(is_preamble("Here Are some options"));
        assert!(is_preamble("the PARAPHRASED text follows"));
        assert!(!is_preamble("A plain sentence"));
    }
}

//! Locale-aware line wrapping.
//!
//! [break_text_into_lines] splits text at explicit hard breaks, tokenizes
//! each segment under a [LocaleRule], and packs tokens greedily into lines
//! no wider than the limit. Under a codepoint rule it breaks one token
//! early where needed to keep a no-lead mark off the start of a line.
//!
//! ```
//! use textbox_layout::{break_text_into_lines, FixedMetrics, LocaleRule, Pt};
//!
//! // every codepoint is half the font size wide: at size 10, "hello" is 25pt
//! let metrics = FixedMetrics { advance: 0.5, ascent: 0.8 };
//! let lines = break_text_into_lines(
//!     "hello world",
//!     Pt(30.0),
//!     Pt(10.0),
//!     &metrics,
//!     &LocaleRule::neutral(),
//! );
//! assert_eq!(lines, vec!["hello", "world"]);
//! ```

use crate::locale::LocaleRule;
use crate::metrics::FontMetrics;
use crate::units::Pt;

/// Break `text` into the ordered lines that fit `max_width` when measured
/// by `metrics` at font size `size`, tokenizing under `rule`.
///
/// Hard breaks are honoured first: a `"\r\n"`, optionally preceded by a
/// single `"\n"`, always ends a line, and that line keeps a trailing
/// `'\n'` so downstream consumers can tell it ended explicitly. A bare
/// `"\n"` is not a break and travels inside its line. A line holding a
/// single token wider than `max_width` is emitted as-is rather than split
/// inside the token.
pub fn break_text_into_lines<M: FontMetrics>(
    text: &str,
    max_width: Pt,
    size: Pt,
    metrics: &M,
    rule: &LocaleRule,
) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let segments = split_hard_breaks(text);
    let last = segments.len() - 1;

    let mut lines: Vec<String> = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        let mut wrapped = wrap_segment(segment, max_width, size, metrics, rule);

        // every segment but the last ended at a hard break; the marker
        // stays on the line that the break terminated
        if i != last {
            match wrapped.last_mut() {
                Some(line) => line.push('\n'),
                None => wrapped.push("\n".to_string()),
            }
        }

        lines.append(&mut wrapped);
    }

    lines
}

/// Split `text` at explicit break sequences: a `"\r\n"` pair, optionally
/// preceded by a single `"\n"`. A bare `"\n"` is not a break and stays
/// inside its segment.
fn split_hard_breaks(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut from = 0;

    while let Some(at) = text[from..].find("\r\n") {
        let at = from + at;
        // fold a directly preceding line feed into the break sequence
        let end = if at > start && text.as_bytes()[at - 1] == b'\n' {
            at - 1
        } else {
            at
        };
        segments.push(&text[start..end]);
        start = at + 2;
        from = at + 2;
    }

    segments.push(&text[start..]);
    segments
}

/// Pack one break-free segment into lines no wider than `max_width`.
fn wrap_segment<M: FontMetrics>(
    segment: &str,
    max_width: Pt,
    size: Pt,
    metrics: &M,
    rule: &LocaleRule,
) -> Vec<String> {
    let (tokens, delimiter): (Vec<String>, &str) = match rule {
        LocaleRule::Delimited(delimiter) => (
            segment
                .split(delimiter.as_str())
                .map(str::to_string)
                .collect(),
            delimiter.as_str(),
        ),
        LocaleRule::Codepoints { .. } => (segment.chars().map(String::from).collect(), ""),
    };

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for (i, token) in tokens.iter().enumerate() {
        let candidate = if line.is_empty() || delimiter.is_empty() {
            format!("{line}{token}")
        } else {
            format!("{line}{delimiter}{token}")
        };

        if metrics.width_of(&candidate, size) <= max_width {
            // a no-lead mark that will not fit after the candidate would
            // otherwise start the next line; break one token early so it
            // trails this token instead
            let orphans_next_mark = tokens.get(i + 1).map_or(false, |next| {
                !line.is_empty()
                    && rule.forbids_lead(next)
                    && metrics.width_of(&format!("{candidate}{next}"), size) > max_width
            });

            if orphans_next_mark {
                lines.push(std::mem::take(&mut line));
                line.push_str(token);
            } else {
                line = candidate;
            }
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line.push_str(token);
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FixedMetrics;

    // one point per codepoint, so max_width reads as a codepoint count
    const METRICS: FixedMetrics = FixedMetrics {
        advance: 1.0,
        ascent: 1.0,
    };

    fn wrap(text: &str, max_chars: f32, rule: &LocaleRule) -> Vec<String> {
        break_text_into_lines(text, Pt(max_chars), Pt(1.0), &METRICS, rule)
    }

    #[test]
    fn wraps_words_at_the_width_limit() {
        let lines = wrap("the quick brown fox jumps", 11.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn empty_text_wraps_to_no_lines() {
        assert!(wrap("", 10.0, &LocaleRule::neutral()).is_empty());
    }

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("hello", 10.0, &LocaleRule::neutral()), vec!["hello"]);
    }

    #[test]
    fn delimiters_are_reinserted_inside_lines_only() {
        let lines = wrap("aa bb cc", 5.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["aa bb", "cc"]);
    }

    #[test]
    fn consecutive_delimiters_produce_empty_tokens_that_survive() {
        let lines = wrap("a  b", 4.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["a  b"]);

        let lines = wrap("a  b", 3.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["a ", "b"]);
    }

    #[test]
    fn an_unbreakable_token_overflows_its_own_line() {
        let lines = wrap("incomprehensibility is rare", 6.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["incomprehensibility", "is", "rare"]);
    }

    #[test]
    fn codepoint_rule_packs_characters() {
        let rule = LocaleRule::japanese();
        assert_eq!(wrap("こんにちは", 2.0, &rule), vec!["こん", "にち", "は"]);
        assert_eq!(wrap("こんにちは", 5.0, &rule), vec!["こんにちは"]);
    }

    #[test]
    fn no_lead_marks_never_start_a_line() {
        // appending the mark to "ab" would overflow, so the break comes one
        // codepoint early and the mark trails "b"
        let rule = LocaleRule::japanese();
        assert_eq!(wrap("ab、cd", 2.0, &rule), vec!["a", "b、", "cd"]);
    }

    #[test]
    fn marks_that_fit_do_not_force_an_early_break() {
        let rule = LocaleRule::japanese();
        assert_eq!(wrap("a、bc", 2.0, &rule), vec!["a、", "bc"]);
    }

    #[test]
    fn the_early_break_may_leave_a_line_short() {
        let rule = LocaleRule::japanese();
        let lines = wrap("ab、cd", 2.0, &rule);
        // "a" runs one codepoint under the limit so that "、" cannot lead
        assert_eq!(lines[0], "a");
        assert!(lines.iter().all(|line| !line.starts_with('、')));
    }

    #[test]
    fn crlf_is_a_hard_break_and_keeps_its_marker() {
        let lines = wrap("abc\r\ndef", 10.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["abc\n", "def"]);
    }

    #[test]
    fn lf_before_crlf_folds_into_one_break() {
        let lines = wrap("abc\n\r\ndef", 10.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["abc\n", "def"]);
    }

    #[test]
    fn a_bare_lf_is_not_a_break() {
        let lines = wrap("ab\ncd", 10.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["ab\ncd"]);
    }

    #[test]
    fn consecutive_hard_breaks_emit_marker_only_lines() {
        let lines = wrap("a\r\n\r\nb", 10.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["a\n", "\n", "b"]);

        let lines = wrap("\r\n", 10.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["\n"]);
    }

    #[test]
    fn trailing_hard_break_leaves_no_empty_line() {
        let lines = wrap("abc\r\n", 10.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["abc\n"]);
    }

    #[test]
    fn hard_breaks_reset_the_width_accumulator() {
        // "aa bb" fits the limit, but the break after "aa" still ends the
        // line; "bb cc" then packs from a fresh accumulator
        let lines = wrap("aa\r\nbb cc", 5.0, &LocaleRule::neutral());
        assert_eq!(lines, vec!["aa\n", "bb cc"]);
    }

    #[test]
    fn wrapping_preserves_every_token() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit";
        let lines = wrap(text, 13.0, &LocaleRule::neutral());
        let rejoined = lines.join(" ");
        let original: Vec<&str> = text.split(' ').collect();
        let recovered: Vec<&str> = rejoined.split(' ').collect();
        assert_eq!(original, recovered);
    }

    #[test]
    fn wrapped_lines_fit_the_limit() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit";
        for max_chars in [8.0, 12.0, 20.0, 40.0] {
            for line in wrap(text, max_chars, &LocaleRule::neutral()) {
                let trimmed = line.trim();
                // a lone word may overflow; assembled lines must fit
                if trimmed.contains(' ') {
                    assert!(METRICS.width_of(trimmed, Pt(1.0)) <= Pt(max_chars));
                }
            }
        }
    }
}

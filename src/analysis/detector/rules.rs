//! Rule-based person-name extraction
//!
//! Looks for phrases that introduce a name ("my name is", "Dear", "Name:")
//! and takes the words that follow as a PERSON candidate. Titles such as
//! "Mr" or "Dr." are left outside the span.

use super::vocabulary::{is_honorific, is_stop_word, is_structural_keyword};
use super::CandidateDetector;
use crate::analysis::models::{CandidateSpan, DetectionMethod, Label};
use crate::domain::{PrivlensError, Result};
use regex::Regex;

const MIN_WORD_LETTERS: usize = 2;
const MAX_WORD_LETTERS: usize = 20;

/// One family of trigger phrases and how many words it may claim
struct TriggerFamily {
    name: &'static str,
    regex: Regex,
    max_words: usize,
}

const TRIGGER_FAMILIES: &[(&str, &str, usize)] = &[
    (
        "introduction",
        r"(?i)\b(?:my\s+(?:full\s+)?name\s+is|my\s+name's|i\s+am\s+called|(?:you\s+can|people)\s+call\s+me)[ \t]+",
        4,
    ),
    ("greeting", r"(?i)\b(?:hi|hello|hey|dear)\b,?[ \t]+", 2),
    (
        "field_label",
        r"(?i)\b(?:(?:full|first|last|patient|customer|candidate|father'?s|mother'?s|spouse'?s)\s+name|name|account\s+holder|emergency\s+contact|contact\s+person|guardian|nominee)[ \t]*:[ \t]*",
        4,
    ),
];

/// Rule-based PERSON extractor
pub struct RuleNameExtractor {
    families: Vec<TriggerFamily>,
}

impl RuleNameExtractor {
    /// Create the extractor with the built-in trigger phrases
    pub fn new() -> Result<Self> {
        let families = TRIGGER_FAMILIES
            .iter()
            .map(|(name, pattern, max_words)| {
                let regex = Regex::new(pattern).map_err(|e| {
                    PrivlensError::Configuration(format!("Invalid {name} trigger regex: {e}"))
                })?;
                Ok(TriggerFamily {
                    name,
                    regex,
                    max_words: *max_words,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { families })
    }

    fn extract(&self, text: &str) -> Vec<CandidateSpan> {
        let mut spans = Vec::new();

        for family in &self.families {
            for trigger in family.regex.find_iter(text) {
                let start = skip_honorifics(text, trigger.end());
                let words = consume_words(text, start, family.max_words);
                let (Some(first), Some(last)) = (words.first(), words.last()) else {
                    continue;
                };

                let Some(span) = CandidateSpan::from_text(
                    text,
                    Label::Person,
                    DetectionMethod::Rule,
                    first.0,
                    last.1,
                ) else {
                    continue;
                };

                if is_structural_keyword(&span.value) {
                    continue;
                }

                tracing::trace!(trigger = family.name, start = span.start, end = span.end, "Rule matched name");
                spans.push(span);
            }
        }

        spans
    }
}

impl CandidateDetector for RuleNameExtractor {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Rule
    }

    fn detect(&self, text: &str) -> Result<Vec<CandidateSpan>> {
        Ok(self.extract(text))
    }
}

/// Characters that may directly follow a name word
fn ends_word(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | ';' | ':' | '!' | '?' | ')' | '"')
}

/// Move past any titles at `start`, with an optional trailing period
fn skip_honorifics(text: &str, start: usize) -> usize {
    let mut pos = start;
    loop {
        let rest = &text[pos..];
        let run = rest
            .char_indices()
            .find(|(_, c)| !c.is_alphabetic())
            .map_or(rest.len(), |(i, _)| i);
        if run == 0 || !is_honorific(&rest[..run]) {
            return pos;
        }

        let mut after = pos + run;
        if text[after..].starts_with('.') {
            after += 1;
        }
        let spaces = text[after..].bytes().take_while(|b| *b == b' ').count();
        if spaces == 0 {
            return pos;
        }
        pos = after + spaces;
    }
}

/// Greedily take space-separated alphabetic words starting at `start`
///
/// Returns the byte ranges of the consumed words.
fn consume_words(text: &str, start: usize, max_words: usize) -> Vec<(usize, usize)> {
    let mut words = Vec::new();
    let mut pos = start;

    while words.len() < max_words {
        let rest = &text[pos..];
        let run = rest
            .char_indices()
            .find(|(_, c)| !c.is_alphabetic())
            .map_or(rest.len(), |(i, _)| i);
        if run == 0 {
            break;
        }

        let word = &rest[..run];
        let letters = word.chars().count();
        if !(MIN_WORD_LETTERS..=MAX_WORD_LETTERS).contains(&letters) {
            break;
        }
        if rest[run..].chars().next().is_some_and(|c| !ends_word(c)) {
            break;
        }
        if is_stop_word(word) || is_structural_keyword(word) || is_honorific(word) {
            break;
        }

        words.push((pos, pos + run));

        let after = pos + run;
        let spaces = text[after..].bytes().take_while(|b| *b == b' ').count();
        if spaces == 0 {
            break;
        }
        pos = after + spaces;
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn names(text: &str) -> Vec<String> {
        RuleNameExtractor::new()
            .unwrap()
            .detect(text)
            .unwrap()
            .into_iter()
            .map(|s| s.value)
            .collect()
    }

    #[test]
    fn test_introduction_phrase() {
        let text = "My name is Alice Kumar and my email is alice@x.com";
        let spans = RuleNameExtractor::new().unwrap().detect(text).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].value, "Alice Kumar");
        assert_eq!(spans[0].label, Label::Person);
        assert_eq!(spans[0].detection_method, DetectionMethod::Rule);
        assert_eq!(&text[spans[0].start..spans[0].end], "Alice Kumar");
    }

    #[test_case("Hello Priya Sharma Verma, welcome", vec!["Priya Sharma"] ; "greeting capped at two words")]
    #[test_case("Dear Sir, thanks", vec![] ; "greeting stop word")]
    #[test_case("Name: Rahul Mehta\nPhone: 98765", vec!["Rahul Mehta"] ; "field label stops at newline")]
    #[test_case("Emergency Contact: Sunita Rao", vec!["Sunita Rao"] ; "emergency contact label")]
    #[test_case("Name: Email", vec![] ; "structural keyword value")]
    #[test_case("Name: R2D2 unit", vec![] ; "non alphabetic token")]
    #[test_case("my full name is Anna Maria Lopez Garcia Perez", vec!["Anna Maria Lopez Garcia"] ; "introduction capped at four words")]
    #[test_case("no names in here", vec![] ; "no trigger")]
    #[test_case("Dear Mr Sharma", vec!["Sharma"] ; "title before surname")]
    #[test_case("Dear Dr. Anita Rao, your report", vec!["Anita Rao"] ; "title with period")]
    #[test_case("Name: Smt Lakshmi Devi", vec!["Lakshmi Devi"] ; "title after field label")]
    #[test_case("Dear Mr, hello", vec![] ; "title alone")]
    fn test_extraction(text: &str, expected: Vec<&str>) {
        assert_eq!(names(text), expected);
    }

    #[test]
    fn test_title_is_left_unredacted() {
        let text = "Dear Mr Sharma";
        let spans = RuleNameExtractor::new().unwrap().detect(text).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (8, 14));
    }

    #[test]
    fn test_word_length_bounds() {
        assert!(names("Name: J Doe").is_empty());
        let long = format!("Name: {}", "a".repeat(21));
        assert!(names(&long).is_empty());
    }

    #[test]
    fn test_unicode_offsets() {
        let text = "Привет. My name is Zoë Ångström.";
        let spans = RuleNameExtractor::new().unwrap().detect(text).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "Zoë Ångström");
    }
}

//! Closed vocabularies used by the name rules and the contextual cleanup

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English function words that terminate a name
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at",
        "be", "because", "been", "before", "but", "by", "can", "could", "did", "do", "does",
        "for", "from", "had", "has", "have", "he", "her", "here", "him", "his", "how", "i",
        "if", "in", "into", "is", "it", "its", "just", "me", "my", "no", "not", "now", "of",
        "on", "or", "our", "please", "she", "so", "than", "that", "the", "their", "them",
        "then", "there", "these", "they", "this", "those", "to", "too", "us", "was", "we",
        "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
        "with", "would", "you", "your", "yours",
        // Greeting tails that are not names
        "everyone", "team", "folks", "sir", "madam", "guys",
    ]
    .into_iter()
    .collect()
});

/// Titles written before a name
static HONORIFICS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["mr", "mrs", "ms", "miss", "dr", "prof", "shri", "sri", "smt"]
        .into_iter()
        .collect()
});

/// Form field names and document structure words that are never names
static STRUCTURAL_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "name", "full name", "first name", "last name", "email", "mail", "phone", "mobile",
        "telephone", "contact", "address", "city", "state", "country", "pin", "pincode",
        "zip", "dob", "date", "birth", "gender", "age", "account", "bank", "branch", "ifsc",
        "pan", "aadhaar", "card", "number", "id", "signature", "details", "information",
        "emergency", "emergency contact", "relationship", "occupation", "nationality",
        "customer", "patient", "employee", "applicant", "subject", "ref", "reference",
    ]
    .into_iter()
    .collect()
});

/// Legal-entity suffixes marking a genuine organization
static BUSINESS_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ltd", "limited", "inc", "incorporated", "corp", "corporation", "co", "company",
        "llc", "llp", "plc", "pvt", "private", "group", "holdings", "bank", "technologies",
        "solutions", "services", "industries", "enterprises", "foundation", "trust",
        "university", "institute", "gmbh", "ag", "sa",
    ]
    .into_iter()
    .collect()
});

/// Whether `word` is a stop-word (case-insensitive)
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}

/// Whether `word` is a title such as "Mr" or "Dr." (case-insensitive)
pub fn is_honorific(word: &str) -> bool {
    HONORIFICS.contains(word.trim_end_matches('.').to_lowercase().as_str())
}

/// Whether `text` as a whole is a structural keyword (case-insensitive, whitespace-normalized)
pub fn is_structural_keyword(text: &str) -> bool {
    let normalized = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    STRUCTURAL_KEYWORDS.contains(normalized.trim_end_matches(':'))
}

/// Whether `word` is a business-entity suffix such as "Ltd." or "Inc"
pub fn is_business_suffix(word: &str) -> bool {
    let trimmed = word.trim_end_matches(['.', ',']);
    BUSINESS_SUFFIXES.contains(trimmed.to_lowercase().as_str())
}

/// Whether `token` is purely alphabetic with at least two letters
pub fn is_name_token(token: &str) -> bool {
    token.chars().count() >= 2 && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("and"));
        assert!(is_stop_word("The"));
        assert!(!is_stop_word("Alice"));
    }

    #[test]
    fn test_honorifics() {
        assert!(is_honorific("Mr"));
        assert!(is_honorific("Dr."));
        assert!(is_honorific("SMT"));
        assert!(!is_honorific("Sharma"));
    }

    #[test]
    fn test_structural_keywords() {
        assert!(is_structural_keyword("Email"));
        assert!(is_structural_keyword("Emergency   Contact"));
        assert!(is_structural_keyword("Phone:"));
        assert!(!is_structural_keyword("Alice Kumar"));
    }

    #[test]
    fn test_business_suffixes() {
        assert!(is_business_suffix("Ltd."));
        assert!(is_business_suffix("INC"));
        assert!(!is_business_suffix("Kumar"));
    }

    #[test]
    fn test_name_tokens() {
        assert!(is_name_token("Jo"));
        assert!(is_name_token("Zoë"));
        assert!(!is_name_token("J"));
        assert!(!is_name_token("R2D2"));
        assert!(!is_name_token("O'Neil"));
    }
}

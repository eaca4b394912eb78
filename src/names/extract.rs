use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Lowercase particles allowed inside a multi-word name span ("Maria da Silva")
pub const CONNECTIVES: [&str; 5] = ["de", "da", "do", "dos", "das"];

/// The spoken list conjunction; separates names, never joins a span
const LIST_SEPARATOR: &str = "e";

/// Common transcript words that are never participant names
pub const STOPLIST: [&str; 31] = [
    "são",
    "está",
    "estão",
    "foram",
    "foi",
    "ser",
    "ter",
    "haver",
    "participantes",
    "participante",
    "pessoas",
    "pessoa",
    "reunião",
    "presentes",
    "presente",
    "todos",
    "todas",
    "aqui",
    "hoje",
    "amanhã",
    "ontem",
    "agora",
    "depois",
    "antes",
    "durante",
    "para",
    "com",
    "sem",
    "sobre",
    "entre",
    "através",
];

/// Introductory phrases that precede a spoken participant list, in priority
/// order; the first match narrows extraction to the captured tail.
#[allow(clippy::expect_used)]
static CONTEXT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?is)participantes?(?:\s+s[ãa]o)?[:\s]+(.+)",
        r"(?is)presentes?(?:\s+est[ãa]o)?[:\s]+(.+)",
        r"(?is)pessoas?(?:\s+s[ãa]o)?[:\s]+(.+)",
        r"(?is)reuni[ãa]o(?:\s+com)?[:\s]+(.+)",
        r"(?is)com\s+a\s+presen[çc]a\s+de[:\s]+(.+)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("context pattern must compile"))
    .collect()
});

/// Extract candidate participant names from a raw transcript
///
/// Narrows to the text after an introductory phrase when one is present,
/// reconstructs capitalized name spans, filters out non-names, and
/// deduplicates case-insensitively preserving first-seen order. Pure function
/// of its input; an empty or nonsensical transcript yields an empty vec.
pub fn extract_names(transcript: &str) -> Vec<String> {
    if transcript.trim().is_empty() {
        return Vec::new();
    }

    let narrowed = narrow_context(transcript);

    let mut candidates = Vec::new();
    for segment in narrowed.split(['.', ',', ';', ':']) {
        collect_spans(segment, &mut candidates);
    }

    let mut seen = HashSet::new();
    candidates.retain(|name| is_valid_name(name) && seen.insert(name.to_lowercase()));

    debug!(count = candidates.len(), "extraction complete");
    candidates
}

/// Locate an introductory phrase and return the text after it, or the whole
/// transcript when no phrase matches. Patterns are tried in priority order.
fn narrow_context(transcript: &str) -> &str {
    for pattern in CONTEXT_PATTERNS.iter() {
        if let Some(tail) = pattern.captures(transcript).and_then(|caps| caps.get(1)) {
            debug!(pattern = pattern.as_str(), "context phrase matched");
            return tail.as_str();
        }
    }
    transcript
}

/// Scan one punctuation-free segment for capitalized name spans
fn collect_spans(segment: &str, out: &mut Vec<String>) {
    let tokens: Vec<&str> = segment.split_whitespace().collect();

    let mut i = 0;
    while i < tokens.len() {
        if !starts_span(tokens[i]) {
            i += 1;
            continue;
        }

        let mut span = vec![tokens[i]];
        i += 1;
        while i < tokens.len() && extends_span(tokens[i]) {
            span.push(tokens[i]);
            i += 1;
        }

        // A name never ends in a particle ("Reunião de" -> "Reunião")
        while span.len() > 1 && is_connective(span[span.len() - 1]) {
            span.pop();
        }

        out.push(span.join(" "));
    }
}

/// A span opens on a capitalized token longer than two characters
fn starts_span(token: &str) -> bool {
    token.chars().count() > 2 && token.chars().next().is_some_and(char::is_uppercase)
}

fn extends_span(token: &str) -> bool {
    if token == LIST_SEPARATOR {
        return false;
    }
    token.chars().next().is_some_and(char::is_uppercase) || is_connective(token)
}

fn is_connective(token: &str) -> bool {
    CONNECTIVES.contains(&token.to_lowercase().as_str())
}

/// Candidate shape filter: at least given + family name, no digits, not a
/// filler word
fn is_valid_name(candidate: &str) -> bool {
    if candidate.split_whitespace().count() < 2 {
        return false;
    }
    if candidate.chars().any(char::is_numeric) {
        return false;
    }
    !STOPLIST.contains(&candidate.to_lowercase().as_str())
}

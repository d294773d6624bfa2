use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;

use crate::language_utils;

// @module: ASS event parsing into bilingual dialogue pairs

/// Section marker that opens the event list
pub const EVENTS_MARKER: &str = "[Events]";

/// Prefix of a dialogue event line
pub const DIALOGUE_PREFIX: &str = "Dialogue:";

/// Number of comma separated fields in a dialogue event; the last one is the text
pub const DIALOGUE_FIELD_COUNT: usize = 10;

// @const: Override tag block, shortest match
static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{.*?\}").expect("override tag pattern is valid")
});

// @struct: One bilingual dialogue line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialoguePair {
    // @field: First-language text
    pub source: String,

    // @field: Second-language text
    pub target: String,
}

impl DialoguePair {
    // @creates: Pair with both fields trimmed
    // @returns: None when both fields are empty
    pub fn new(source: &str, target: &str) -> Option<Self> {
        let source = source.trim();
        let target = target.trim();

        if source.is_empty() && target.is_empty() {
            return None;
        }

        Some(DialoguePair {
            source: source.to_string(),
            target: target.to_string(),
        })
    }
}

impl fmt::Display for DialoguePair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {}", self.source, self.target)
    }
}

/// Where the scanner is within the subtitle file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Before the `[Events]` marker; nothing is parsed
    Preamble,
    /// After the marker, until the end of input
    InEvents,
}

/// Result of looking at a single line inside the event section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueLine {
    /// Not a `Dialogue:` line (comments, format lines, blanks)
    NotDialogue,
    /// Fewer than ten fields
    Malformed,
    /// Parsed, but nothing left once tags were stripped
    Empty,
    Pair(DialoguePair),
}

/// Remove every `{...}` override block, shortest match first
pub fn strip_override_tags(text: &str) -> String {
    OVERRIDE_TAG_REGEX.replace_all(text, "").into_owned()
}

/// Parse one line that may or may not be a dialogue event
pub fn parse_dialogue_line(line: &str) -> DialogueLine {
    let Some(remainder) = line.trim().strip_prefix(DIALOGUE_PREFIX) else {
        return DialogueLine::NotDialogue;
    };

    // The text field keeps any further commas verbatim
    let fields: Vec<&str> = remainder.splitn(DIALOGUE_FIELD_COUNT, ',').collect();
    if fields.len() < DIALOGUE_FIELD_COUNT {
        return DialogueLine::Malformed;
    }

    let text = strip_override_tags(fields[DIALOGUE_FIELD_COUNT - 1].trim());
    let (source, target) = language_utils::split_bilingual(&text);

    match DialoguePair::new(&source, &target) {
        Some(pair) => DialogueLine::Pair(pair),
        None => DialogueLine::Empty,
    }
}

/// Ordered dialogue pairs extracted from one subtitle file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueList {
    /// Pairs in order of appearance
    pub pairs: Vec<DialoguePair>,

    /// Dialogue lines dropped for having too few fields
    pub malformed_lines: usize,
}

impl DialogueList {
    /// Scan decoded lines and collect every dialogue pair after `[Events]`
    pub fn extract<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut list = DialogueList::default();
        let mut state = ScanState::Preamble;

        for line in lines {
            let line = line.as_ref();

            match state {
                ScanState::Preamble => {
                    if line.trim() == EVENTS_MARKER {
                        state = ScanState::InEvents;
                    }
                }
                ScanState::InEvents => match parse_dialogue_line(line) {
                    DialogueLine::Pair(pair) => list.pairs.push(pair),
                    DialogueLine::Malformed => list.malformed_lines += 1,
                    DialogueLine::Empty | DialogueLine::NotDialogue => {}
                },
            }
        }

        list
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Extract only the pairs, discarding the malformed-line count
pub fn extract_dialogues<S: AsRef<str>>(lines: &[S]) -> Vec<DialoguePair> {
    DialogueList::extract(lines).pairs
}

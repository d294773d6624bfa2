//! Language utilities for bilingual subtitle text
//!
//! Dialogue lines in bilingual releases carry two languages in one text field.
//! These helpers separate them, either on an explicit line break or, failing
//! that, by pulling CJK ideographs out into the target language.

/// ASS hard line break
pub const ASS_LINE_BREAK: &str = "\\N";

/// Whether a character lies in the CJK Unified Ideographs block (U+4E00..=U+9FFF)
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Whether any CJK ideograph occurs in the text
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_ideograph)
}

/// Maximal runs of consecutive CJK ideographs, in order of appearance
pub fn cjk_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (is_cjk_ideograph(c), run_start) {
            (true, None) => run_start = Some(idx),
            (false, Some(start)) => {
                runs.push(&text[start..idx]);
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        runs.push(&text[start..]);
    }

    runs
}

/// Text with every CJK ideograph removed
pub fn remove_cjk(text: &str) -> String {
    text.chars().filter(|c| !is_cjk_ideograph(*c)).collect()
}

/// Split a tag-free dialogue text into (source, target), both trimmed
///
/// Priority: the first `\N`, then the first newline, then the CJK heuristic
/// where all ideographs form the target and everything else the source.
pub fn split_bilingual(text: &str) -> (String, String) {
    let (source, target) = if let Some((before, after)) = text.split_once(ASS_LINE_BREAK) {
        (before.to_string(), after.to_string())
    } else if let Some((before, after)) = text.split_once('\n') {
        (before.to_string(), after.to_string())
    } else if contains_cjk(text) {
        (remove_cjk(text), cjk_runs(text).concat())
    } else {
        (text.to_string(), String::new())
    };

    (source.trim().to_string(), target.trim().to_string())
}

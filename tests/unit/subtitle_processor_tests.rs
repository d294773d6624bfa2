/*!
 * Tests for dialogue extraction from ASS event lines
 */

use asstxt::subtitle_processor::{DialogueList, DialoguePair, extract_dialogues, parse_dialogue_line, DialogueLine};
use crate::common;

fn pair(source: &str, target: &str) -> DialoguePair {
    DialoguePair::new(source, target).unwrap()
}

/// Test the basic bilingual scenario
#[test]
fn test_extract_withAssLineBreak_shouldSplitIntoPair() {
    let lines = vec!["[Events]".to_string(), common::dialogue("I love you\\N我爱你")];
    assert_eq!(extract_dialogues(&lines), vec![pair("I love you", "我爱你")]);
}

/// Test that commas inside the text field survive the field split
#[test]
fn test_extract_withCommasInText_shouldKeepTextFieldWhole() {
    let line = "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,Hello, world\\Nworld, hi";
    let pairs = extract_dialogues(&["[Events]", line]);
    assert_eq!(pairs, vec![pair("Hello, world", "world, hi")]);
}

/// Test that lines with fewer than ten fields contribute nothing
#[test]
fn test_extract_withTooFewFields_shouldDropLine() {
    let lines = ["[Events]", "Dialogue: 0,0:00:01.00,0:00:02.00,Default,Hello\\N你好"];
    let list = DialogueList::extract(&lines);
    assert!(list.is_empty());
    assert_eq!(list.malformed_lines, 1);
}

/// Test that override tags vanish, including adjacent and repeated ones
#[test]
fn test_extract_withOverrideTags_shouldStripEveryBlock() {
    let text = "{\\an8}{\\fs20}Hi{\\c&H00FF00&} there\\N{\\i1}你好{\\i0}";
    let pairs = extract_dialogues(&["[Events]".to_string(), common::dialogue(text)]);
    assert_eq!(pairs, vec![pair("Hi there", "你好")]);
    assert!(!pairs[0].source.contains('{') && !pairs[0].target.contains('}'));
}

/// Test that text without separators or CJK becomes source only
#[test]
fn test_extract_withEnglishOnly_shouldLeaveTargetEmpty() {
    let pairs = extract_dialogues(&["[Events]".to_string(), common::dialogue("  Only English here  ")]);
    assert_eq!(pairs, vec![pair("Only English here", "")]);
}

/// Test the CJK heuristic when no line break separates the languages
#[test]
fn test_extract_withInlineCjk_shouldSeparateIdeographs() {
    let pairs = extract_dialogues(&["[Events]".to_string(), common::dialogue("Good morning 早上好")]);
    assert_eq!(pairs, vec![pair("Good morning", "早上好")]);
}

/// Test that Chinese-only text ends up as target with an empty source
#[test]
fn test_extract_withCjkOnly_shouldHaveEmptySource() {
    let pairs = extract_dialogues(&["[Events]".to_string(), common::dialogue("早上好")]);
    assert_eq!(pairs, vec![pair("", "早上好")]);
}

/// Test that events with empty text after stripping are discarded
#[test]
fn test_extract_withBlankText_shouldDiscardPair() {
    let lines = vec![
        "[Events]".to_string(),
        common::dialogue("{\\pos(10,10)}"),
        common::dialogue("   "),
        common::dialogue(" \\N "),
    ];
    assert!(extract_dialogues(&lines).is_empty());
}

/// Test that a file without an events section yields nothing
#[test]
fn test_extract_withoutEventsSection_shouldReturnEmptyList() {
    let lines = vec!["[Script Info]".to_string(), common::dialogue("Hello\\N你好")];
    assert!(extract_dialogues(&lines).is_empty());
}

/// Test that order of appearance is kept and format/comment lines are ignored
#[test]
fn test_extract_withFullDocument_shouldKeepOrder() {
    let mut document = common::ass_document(&["First\\N第一", "Second\\N第二"]);
    document.push_str("Comment: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,ignored\n");
    document.push_str(&common::dialogue("Third\\N第三"));

    let lines: Vec<&str> = document.lines().collect();
    let pairs = extract_dialogues(&lines);

    assert_eq!(
        pairs,
        vec![pair("First", "第一"), pair("Second", "第二"), pair("Third", "第三")]
    );
}

/// Test that extraction is a pure function of its input
#[test]
fn test_extract_withSameInput_shouldBeIdempotent() {
    let document = common::ass_document(&["A\\N甲", "B 乙", "C"]);
    let lines: Vec<&str> = document.lines().collect();
    assert_eq!(DialogueList::extract(&lines), DialogueList::extract(&lines));
}

/// Test that indented dialogue lines are still recognized
#[test]
fn test_parse_dialogue_line_withLeadingWhitespace_shouldParse() {
    let line = format!("   {}", common::dialogue("Hi\\N嗨"));
    assert_eq!(parse_dialogue_line(&line), DialogueLine::Pair(pair("Hi", "嗨")));
}

/// Test pair construction rules
#[test]
fn test_dialogue_pair_new_withBothEmpty_shouldReturnNone() {
    assert!(DialoguePair::new("  ", "").is_none());
    assert_eq!(DialoguePair::new(" a ", " b "), Some(pair("a", "b")));
}

/// Test that only the exact marker opens the section and later sections stay open
#[test]
fn test_extract_withNearMissMarkerAndLaterSection_shouldUseExactMarkerOneWay() {
    let lines = vec![
        "[Events] extra".to_string(),
        common::dialogue("early"),
        "[Events]".to_string(),
        common::dialogue("a"),
        "[Fonts]".to_string(),
        common::dialogue("b"),
    ];
    assert_eq!(extract_dialogues(&lines), vec![pair("a", ""), pair("b", "")]);
}

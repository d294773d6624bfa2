/*!
 * Tests for writing dialogue pairs to text files
 */

use std::fs;
use anyhow::Result;
use asstxt::dialogue_writer::{write_dialogues, Separator};
use asstxt::subtitle_processor::DialoguePair;
use crate::common;

fn sample_pairs() -> Vec<DialoguePair> {
    vec![
        DialoguePair::new("I love you", "我爱你").unwrap(),
        DialoguePair::new("See you", "再见").unwrap(),
    ]
}

/// Test that records are numbered by their position in the list
#[test]
fn test_write_dialogues_withPairs_shouldWriteNumberedLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("out.txt");

    write_dialogues(&sample_pairs(), &output, Separator::Dash)?;

    let content = fs::read_to_string(&output)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["1 - I love you - 我爱你", "2 - See you - 再见"]);
    assert!(content.ends_with('\n'));

    Ok(())
}

/// Test that an existing file is replaced, not appended to
#[test]
fn test_write_dialogues_withExistingFile_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = common::create_test_file(temp_dir.path(), "out.txt", "old content that is longer\n")?;

    write_dialogues(&sample_pairs()[..1], &output, Separator::Tab)?;

    assert_eq!(fs::read_to_string(&output)?, "1\tI love you\t我爱你\n");

    Ok(())
}

/// Test that an unwritable destination reports a write error
#[test]
fn test_write_dialogues_withMissingDirectory_shouldReturnWriteError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("missing").join("out.txt");

    let error = write_dialogues(&sample_pairs(), &output, Separator::Dash).unwrap_err();
    assert!(error.to_string().contains("Failed to write"));

    Ok(())
}

/// Test that the separator serializes as a lowercase name
#[test]
fn test_separator_serde_shouldUseLowercaseNames() -> Result<()> {
    assert_eq!(serde_json::to_string(&Separator::Tab)?, "\"tab\"");
    assert_eq!(serde_json::from_str::<Separator>("\"dash\"")?, Separator::Dash);
    assert_eq!(Separator::default(), Separator::Dash);
    Ok(())
}

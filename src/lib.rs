/*!
 * # asstxt - bilingual dialogue extraction from ASS subtitles
 *
 * A Rust library that pulls the dialogue out of Advanced SubStation Alpha
 * subtitle files and writes it as numbered plain-text lines, one line per
 * event, with the two languages of a bilingual release side by side.
 *
 * ## Features
 *
 * - Reads files in UTF-8 (with or without BOM), GBK, GB2312, Big5 or UTF-16
 * - Strips `{...}` override tags from the event text
 * - Splits bilingual text on `\N`, a newline, or by separating CJK ideographs
 * - Batch mode over a directory, one `.txt` file per `.ass` file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `text_decoder`: Reading files with a prioritized list of encodings
 * - `subtitle_processor`: Event-section scanning and dialogue line parsing
 * - `language_utils`: Bilingual text splitting
 * - `dialogue_writer`: Plain-text output
 * - `app_config`: Configuration management
 * - `app_controller`: Batch processing over a directory
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod dialogue_writer;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod subtitle_processor;
pub mod text_decoder;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BatchSummary, Controller, FileOutcome};
pub use dialogue_writer::{Separator, format_dialogues, write_dialogues};
pub use errors::{AppError, SubtitleError};
pub use subtitle_processor::{DialogueList, DialoguePair, extract_dialogues};
pub use text_decoder::{DecodedText, TextEncoding, read_subtitle_text};

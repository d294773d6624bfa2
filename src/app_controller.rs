use log::{error, warn, info, debug};
use std::fmt;
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use crate::app_config::Config;
use crate::dialogue_writer;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::DialogueList;
use crate::text_decoder;

// @module: Application controller for batch dialogue extraction

/// What happened to a single input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Pairs were extracted and written
    Written {
        output: PathBuf,
        pairs: usize,
        malformed_lines: usize,
    },
    /// Nothing to extract; no output written
    Empty { malformed_lines: usize },
    /// No candidate encoding could decode the file
    DecodeFailed,
    /// Reading or writing failed
    Failed(String),
}

/// Totals for a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub empty: usize,
    pub decode_failures: usize,
    pub io_failures: usize,
    pub malformed_lines: usize,
}

impl BatchSummary {
    // @updates: Counters for one outcome
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Written { malformed_lines, .. } => {
                self.written += 1;
                self.malformed_lines += malformed_lines;
            }
            FileOutcome::Empty { malformed_lines } => {
                self.empty += 1;
                self.malformed_lines += malformed_lines;
            }
            FileOutcome::DecodeFailed => self.decode_failures += 1,
            FileOutcome::Failed(_) => self.io_failures += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.written + self.empty + self.decode_failures + self.io_failures
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} empty, {} undecodable, {} errors",
            self.written, self.empty, self.decode_failures, self.io_failures
        )
    }
}

/// Main application controller for dialogue extraction
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Decode, extract and write one subtitle file
    ///
    /// Every failure is turned into an outcome so that a batch can carry on.
    pub fn process_file(&self, input_file: &Path) -> FileOutcome {
        let file_name = display_name(input_file);

        let decoded = match text_decoder::read_subtitle_text(input_file) {
            Ok(decoded) => decoded,
            Err(e) if e.is_decode_failure() => {
                warn!("{}", e);
                return FileOutcome::DecodeFailed;
            }
            Err(e) => {
                error!("{}", e);
                return FileOutcome::Failed(e.to_string());
            }
        };

        let dialogues = DialogueList::extract(&decoded.lines());
        if dialogues.malformed_lines > 0 {
            debug!("{}: skipped {} malformed dialogue lines", file_name, dialogues.malformed_lines);
        }

        if dialogues.is_empty() {
            warn!("No dialogue extracted from {}", file_name);
            return FileOutcome::Empty {
                malformed_lines: dialogues.malformed_lines,
            };
        }

        let output = FileManager::output_path_for(input_file, &self.config.output_extension);
        if let Err(e) = dialogue_writer::write_dialogues(&dialogues.pairs, &output, self.config.separator) {
            error!("{}", e);
            return FileOutcome::Failed(e.to_string());
        }

        info!("Saved {} dialogue lines to {}", dialogues.len(), output.display());
        FileOutcome::Written {
            output,
            pairs: dialogues.len(),
            malformed_lines: dialogues.malformed_lines,
        }
    }

    /// Process every subtitle file in a directory
    ///
    /// Files are handled in name order; a failure on one file never stops the rest.
    pub fn run_folder(&self, input_dir: &Path) -> Result<BatchSummary, AppError> {
        if !FileManager::dir_exists(input_dir) {
            return Err(AppError::File(format!(
                "Input directory does not exist: {}",
                input_dir.display()
            )));
        }

        let subtitle_files = FileManager::find_files(
            input_dir,
            &self.config.input_extension,
            self.config.recursive,
        )?;

        if subtitle_files.is_empty() {
            return Err(AppError::NoInputFiles(format!(
                "no .{} files in {}",
                self.config.input_extension.trim_start_matches('.'),
                input_dir.display()
            )));
        }

        info!("Found {} subtitle file(s):", subtitle_files.len());
        for file in &subtitle_files {
            info!(" - {}", display_name(file));
        }

        let progress_bar = ProgressBar::new(subtitle_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        let mut summary = BatchSummary::default();
        for subtitle_file in &subtitle_files {
            progress_bar.set_message(format!("Processing: {}", display_name(subtitle_file)));
            let outcome = progress_bar.suspend(|| self.process_file(subtitle_file));
            summary.record(&outcome);
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        info!("Processing completed: {}", summary);
        if summary.malformed_lines > 0 {
            warn!("{} malformed dialogue lines were skipped", summary.malformed_lines);
        }

        Ok(summary)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

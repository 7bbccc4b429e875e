//! The interactive surface around the pipeline: which file is selected,
//! whether a run may start, and what the user is told about it.

use crate::process;
use std::fmt;
use std::path::{Path, PathBuf};

/// What the user sees after each event, one line per state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Selected { file: String },
    Busy,
    Done { file: String },
    Failed { message: String },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Selected { file } => write!(f, "فایل انتخاب شد: {file}"),
            Status::Busy => f.write_str("در حال خواندن و پردازش فایل..."),
            Status::Done { file } => {
                write!(f, "پردازش انجام شد. فایل خروجی با نام {file} ذخیره شد.")
            }
            Status::Failed { message } => f.write_str(message),
        }
    }
}

/// One selection-and-run cycle. A session survives any number of runs; every
/// run, successful or not, leaves it ready for the next one.
pub struct Session {
    out_dir: PathBuf,
    selected: Option<PathBuf>,
    busy: bool,
}

impl Session {
    pub fn new(out_dir: PathBuf) -> Self {
        Session {
            out_dir,
            selected: None,
            busy: false,
        }
    }

    /// Record the user's file choice. Selecting `None` clears a previous
    /// choice and returns the session to idle.
    pub fn select(&mut self, file: Option<PathBuf>) -> Status {
        match file {
            None => {
                self.selected = None;
                Status::Idle
            }
            Some(path) => {
                let file = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.selected = Some(path);
                Status::Selected { file }
            }
        }
    }

    /// Whether a run may be triggered: a file is selected and no run is in
    /// flight.
    pub fn ready(&self) -> bool {
        self.selected.is_some() && !self.busy
    }

    /// Read the selected file, run the pipeline, and save the summary
    /// workbook into the session's output directory.
    ///
    /// Without a selection this is a no-op. The busy flag is cleared no
    /// matter how the run ends, so a failed run can be retried immediately.
    pub fn run(&mut self, options: process::Options) -> Status {
        let Some(path) = self.selected.clone() else {
            return Status::Idle;
        };
        if self.busy {
            return Status::Busy;
        }
        self.busy = true;
        let status = self.execute(&path, options);
        self.busy = false;
        status
    }

    fn execute(&self, path: &Path, options: process::Options) -> Status {
        let input = match std::fs::read(path) {
            Ok(input) => input,
            Err(err) => {
                tracing::error!(file = %path.display(), %err, "could not read the selected file");
                return Status::Failed {
                    message: "خطا در خواندن فایل.".into(),
                };
            }
        };
        let outcome = match crate::process(&input, options) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(%err, "run aborted");
                return Status::Failed {
                    message: format!("خطا در پردازش فایل: {err}"),
                };
            }
        };
        let destination = self.out_dir.join(&outcome.file_name);
        if let Err(err) = std::fs::write(&destination, &outcome.bytes) {
            tracing::error!(file = %destination.display(), %err, "could not save the summary workbook");
            return Status::Failed {
                message: format!("خطا در پردازش فایل: {err}"),
            };
        }
        tracing::info!(
            file = %destination.display(),
            groups = outcome.groups,
            skipped_rows = outcome.skipped_rows,
            "summary workbook saved"
        );
        Status::Done {
            file: outcome.file_name,
        }
    }
}

use eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use treecp_core::{ProgressReporter, ProgressUpdate};

const BAR_TEMPLATE: &str =
    "{bar:60.cyan/blue} {bytes:>10}/{total_bytes:10} {percent:>3}% [{elapsed_precise}] {wide_msg}";

/// Renders copy progress on the terminal.
///
/// With a bar, per-file lines are printed above it so they do not tear the
/// bar. Without one, they go straight to stdout.
pub struct TerminalReporter {
    bar: Option<ProgressBar>,
    verbose: bool,
    source: PathBuf,
    destination: PathBuf,
}

impl TerminalReporter {
    pub fn new(source: &Path, destination: &Path, show_bar: bool, verbose: bool) -> Result<Self> {
        let bar = if show_bar {
            let pb = ProgressBar::new(0);
            pb.set_style(ProgressStyle::with_template(BAR_TEMPLATE)?.progress_chars("=> "));
            Some(pb)
        } else {
            None
        };
        Ok(Self {
            bar,
            verbose,
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
        })
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.bar {
            pb.finish_and_clear();
        }
    }

    fn copied_line(&self, label: &Path) -> String {
        format!(
            "cp: {} => {}",
            self.source.join(label).display(),
            self.destination.join(label).display()
        )
    }
}

impl ProgressReporter for TerminalReporter {
    fn report(&mut self, update: &ProgressUpdate<'_>) {
        if self.verbose {
            if let Some(label) = update.label {
                let line = self.copied_line(label);
                match &self.bar {
                    Some(pb) => pb.println(line),
                    None => println!("{line}"),
                }
            }
        }

        if let Some(pb) = &self.bar {
            if pb.length() != Some(update.total) {
                pb.set_length(update.total);
            }
            pb.set_position(update.current);
            if let Some(label) = update.label {
                pb.set_message(label.display().to_string());
            }
        }
    }
}

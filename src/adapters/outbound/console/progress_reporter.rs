use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::sync::Mutex;

/// Escapes a message for use as workflow command data
fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// ConsoleProgressReporter adapter for the job log
///
/// Inside GitHub Actions warnings and errors are written to stdout as
/// workflow commands (`::warning::`, `::error::`) so they surface as run
/// annotations. Elsewhere everything goes to stderr, colored.
/// Download progress is rendered with indicatif.
pub struct ConsoleProgressReporter {
    workflow_commands: bool,
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgressReporter {
    /// Creates a reporter
    ///
    /// # Arguments
    /// * `workflow_commands` - Emit `::warning::`/`::error::` commands on stdout
    pub fn new(workflow_commands: bool) -> Self {
        Self {
            workflow_commands,
            progress_bar: Mutex::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: Option<u64>) -> Option<ProgressBar> {
        let mut pb_option = self.progress_bar.lock().ok()?;
        if let Some(pb) = pb_option.as_ref() {
            if let Some(total) = total {
                pb.set_length(total);
            }
            return Some(pb.clone());
        }

        let pb = match total {
            Some(total) => {
                let pb = ProgressBar::new(total);
                if let Ok(style) = ProgressStyle::default_bar().template(
                    "   {spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) - {msg}",
                ) {
                    pb.set_style(style.progress_chars("=>-"));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) =
                    ProgressStyle::default_spinner().template("   {spinner:.green} {bytes} - {msg}")
                {
                    pb.set_style(style);
                }
                pb
            }
        };
        *pb_option = Some(pb.clone());
        Some(pb)
    }

    fn finish_progress_bar(&self) {
        if let Ok(mut pb_option) = self.progress_bar.lock() {
            if let Some(pb) = pb_option.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, message: &str) {
        if self.workflow_commands {
            println!("{}", message);
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: u64, total: Option<u64>, message: Option<&str>) {
        let Some(pb) = self.get_or_create_progress_bar(total) else {
            return;
        };
        pb.set_position(current);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        self.finish_progress_bar();
        if self.workflow_commands {
            println!("::warning::{}", escape_command_data(message));
        } else {
            eprintln!("{}", message.yellow());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        if self.workflow_commands {
            println!("::error::{}", escape_command_data(message));
        } else {
            eprintln!("{}", message.red());
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        if self.workflow_commands {
            println!("{}", message);
        } else {
            eprintln!("{}", message.green());
        }
    }
}

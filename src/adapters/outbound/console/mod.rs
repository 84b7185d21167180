/// Console adapters for the job log
mod progress_reporter;

pub use progress_reporter::ConsoleProgressReporter;

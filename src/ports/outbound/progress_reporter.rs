/// ProgressReporter port for reporting progress during the pipeline
///
/// This port abstracts the job log so the core never writes to stdout or
/// stderr directly.
pub trait ProgressReporter: Send + Sync {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports transfer progress
    ///
    /// # Arguments
    /// * `current` - Bytes (or units) processed so far
    /// * `total` - Total expected, when known
    /// * `message` - Optional message to include
    fn report_progress(&self, current: u64, total: Option<u64>, message: Option<&str>);

    /// Reports a recoverable problem; the pipeline continues
    fn report_warning(&self, message: &str);

    /// Reports a fatal problem
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

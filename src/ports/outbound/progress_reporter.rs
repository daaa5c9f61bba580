/// ProgressReporter port for user-facing progress during a run
///
/// Progress goes to the user, not to the log; adapters decide where it is
/// shown and whether it is shown at all.
pub trait ProgressReporter {
    /// Reports a one-line status message
    fn report(&self, message: &str);

    /// Reports how many of `total` nodes have been handled so far
    ///
    /// # Arguments
    /// * `current` - Number of nodes handled, including the current one
    /// * `total` - Number of nodes in the graph
    /// * `message` - Optional label, typically the node being built
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error
    fn report_error(&self, message: &str);

    /// Reports that the run finished
    fn report_completion(&self, message: &str);
}

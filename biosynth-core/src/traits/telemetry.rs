//! Telemetry/debug sink trait

/// External text stream for monitoring and plotting.
///
/// Carries both the normalized sensor lines and the instrument's
/// free-text diagnostics; there is no structured error channel beyond
/// this sink.
pub trait TelemetrySink {
    /// Send one newline-terminated sensor line.
    fn send_line(&mut self, line: &str);

    /// Send a free-text diagnostic message.
    fn debug(&mut self, message: &str);
}

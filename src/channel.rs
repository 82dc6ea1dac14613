use std::time::Duration;

/// One open serial channel, held for the duration of a single transaction.
/// Implement this trait for different backends (serialport, test doubles, etc.)
///
/// Dropping the value closes the channel; there is no explicit close call.
pub trait SerialChannel {
    /// Error type for channel operations
    type Error: std::fmt::Debug;

    /// Discard any bytes buffered for input
    fn flush_input(&mut self) -> Result<(), Self::Error>;

    /// Discard any bytes buffered for output
    fn flush_output(&mut self) -> Result<(), Self::Error>;

    /// Write data to the channel, returning the number of bytes accepted
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Read into `buf`, bounded by the timeout configured at open time.
    ///
    /// A clean timeout must surface as `Ok(0)`, never as an error and never
    /// by blocking indefinitely.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Opens a [`SerialChannel`] for one transaction.
pub trait ChannelOpener {
    /// Channel type produced by this opener
    type Channel: SerialChannel;

    /// Error type for open failures
    type Error: std::fmt::Debug;

    /// Open `port` at `baud_rate` with the given read timeout.
    fn open(
        &self,
        port: &str,
        baud_rate: u32,
        timeout: Duration,
    ) -> Result<Self::Channel, Self::Error>;
}

//! Serial channel backend for desktop using serialport crate

use crate::channel::{ChannelOpener, SerialChannel};
use std::time::Duration;

/// Opens a [`PortChannel`] through the `serialport` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialOpener;

impl ChannelOpener for SerialOpener {
    type Channel = PortChannel;
    type Error = serialport::Error;

    fn open(
        &self,
        port: &str,
        baud_rate: u32,
        timeout: Duration,
    ) -> Result<PortChannel, Self::Error> {
        let port = serialport::new(port, baud_rate).timeout(timeout).open()?;
        Ok(PortChannel { port })
    }
}

/// An open serial port, closed when dropped
pub struct PortChannel {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialChannel for PortChannel {
    type Error = std::io::Error;

    fn flush_input(&mut self) -> Result<(), Self::Error> {
        self.port
            .clear(serialport::ClearBuffer::Input)
            .map_err(|e| std::io::Error::other(e))
    }

    fn flush_output(&mut self) -> Result<(), Self::Error> {
        self.port
            .clear(serialport::ClearBuffer::Output)
            .map_err(|e| std::io::Error::other(e))
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        std::io::Write::write(&mut self.port, data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match std::io::Read::read(&mut self.port, buf) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e),
        }
    }
}

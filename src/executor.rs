use log::{debug, error};
use std::thread;
use std::time::Duration;

use crate::channel::{ChannelOpener, SerialChannel};
use crate::types::{
    bytes_to_hex, DispatchMethod, RequestDescriptor, Response, TransactionError, TransactionMode,
};

/// Executes one-shot transactions against a serial-attached device.
///
/// Each call to [`write`](Executor::write) opens a fresh channel through the
/// configured opener, runs the flush/write/read sequence and closes the
/// channel before returning. No channel outlives its transaction, so the
/// executor itself is stateless across calls.
pub struct Executor<O: ChannelOpener> {
    opener: O,
}

impl<O: ChannelOpener> Executor<O> {
    /// Read timeout, and the settle time granted to the device before the
    /// response read is attempted.
    const WAIT: Duration = Duration::from_millis(100);

    /// Device responses are a fixed 4 bytes, sent least-significant first.
    const RESPONSE_LEN: usize = 4;

    /// Create an executor over the given channel opener
    pub fn new(opener: O) -> Self {
        Self { opener }
    }

    /// Run one transaction.
    ///
    /// Dispatches on the descriptor's method, performs the serial sequence
    /// and folds any fault into the returned [`Response`]; faults never
    /// propagate past this boundary.
    pub fn write(&self, payload: &[u8], descriptor: &RequestDescriptor) -> Response {
        match descriptor.method {
            DispatchMethod::Serial => match self.transact(payload, descriptor) {
                Ok(data) => Response {
                    msg: String::new(),
                    err: false,
                    data,
                },
                Err(fault) => Response::from(fault),
            },
            DispatchMethod::Unrecognized(_) => Response::from(TransactionError::MethodNotFound),
        }
    }

    fn transact(
        &self,
        payload: &[u8],
        descriptor: &RequestDescriptor,
    ) -> Result<Option<String>, TransactionError> {
        let port = &descriptor.port;

        let mut channel = self
            .opener
            .open(port, descriptor.baud_rate, Self::WAIT)
            .map_err(|e| {
                error!("Failed to open {}: {:?}", port, e);
                TransactionError::Open(port.clone())
            })?;

        // Channel is released by drop on every path from here on.
        channel.flush_input().map_err(|e| {
            error!("Failed to flush input on {}: {:?}", port, e);
            TransactionError::Write(port.clone())
        })?;
        channel.flush_output().map_err(|e| {
            error!("Failed to flush output on {}: {:?}", port, e);
            TransactionError::Write(port.clone())
        })?;

        debug!("Writing {} bytes to {}: {:02X?}", payload.len(), port, payload);
        let written = channel.write(payload).map_err(|e| {
            error!("Write to {} failed: {:?}", port, e);
            TransactionError::Write(port.clone())
        })?;
        if written != payload.len() {
            error!(
                "Short write to {}: {} of {} bytes accepted",
                port,
                written,
                payload.len()
            );
            return Err(TransactionError::Write(port.clone()));
        }

        if descriptor.mode == TransactionMode::WriteOnly {
            return Ok(None);
        }

        // Give the device the same interval as the read timeout to respond.
        thread::sleep(Self::WAIT);

        let mut buf = [0u8; Self::RESPONSE_LEN];
        let n = channel.read(&mut buf).map_err(|e| {
            error!("Read from {} failed: {:?}", port, e);
            TransactionError::Read(port.clone())
        })?;
        if n == 0 {
            return Err(TransactionError::NoResponse(port.clone()));
        }

        debug!("Received {} bytes from {}: {:02X?}", n, port, &buf[..n]);
        // Response arrives little-endian in transmission order.
        buf[..n].reverse();
        Ok(Some(bytes_to_hex(&buf[..n])))
    }
}

#[cfg(feature = "serial")]
impl Executor<crate::serial::SerialOpener> {
    /// Executor over the `serialport`-backed opener
    pub fn serial() -> Self {
        Self::new(crate::serial::SerialOpener)
    }
}

//! Request, response and fault types for one-shot transactions

use thiserror::Error;

/// How a request is dispatched to the device.
///
/// Only the wire literal `"serial"` selects the serial path; any other value
/// is carried as [`DispatchMethod::Unrecognized`] and rejected at dispatch
/// time without touching a port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchMethod {
    Serial,
    Unrecognized(String),
}

impl From<&str> for DispatchMethod {
    fn from(value: &str) -> Self {
        match value {
            "serial" => DispatchMethod::Serial,
            other => DispatchMethod::Unrecognized(other.to_string()),
        }
    }
}

/// Whether a transaction stops after writing or waits for a device response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionMode {
    WriteOnly,
    WriteRead,
}

impl TransactionMode {
    /// Parse the wire value: `"read"` requests a response, absence or any
    /// other value means write-only.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("read") => TransactionMode::WriteRead,
            _ => TransactionMode::WriteOnly,
        }
    }
}

/// One transaction request: where to send the payload and whether to wait
/// for a response afterwards.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: DispatchMethod,
    pub port: String,
    pub baud_rate: u32,
    pub mode: TransactionMode,
}

impl RequestDescriptor {
    /// Descriptor for the serial path.
    pub fn serial(port: impl Into<String>, baud_rate: u32, mode: TransactionMode) -> Self {
        Self {
            method: DispatchMethod::Serial,
            port: port.into(),
            baud_rate,
            mode,
        }
    }
}

/// Outcome of one transaction.
///
/// `data` holds the device response as lowercase hex with byte order
/// reversed, and is `None` when the transaction was write-only or failed.
/// Check `err` before trusting `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub msg: String,
    pub err: bool,
    pub data: Option<String>,
}

impl From<TransactionError> for Response {
    fn from(fault: TransactionError) -> Self {
        Response {
            msg: fault.to_string(),
            err: true,
            data: None,
        }
    }
}

/// Faults a transaction can end in.
///
/// The rendered message is the complete user-visible status text; underlying
/// I/O detail is logged by the executor, never embedded here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Dispatch method was not recognized; no channel was opened
    #[error("No data written as method not found")]
    MethodNotFound,
    /// Channel could not be acquired (device absent, permission denied, busy)
    #[error("Unable to open {0}.")]
    Open(String),
    /// Flush failed, or the channel accepted fewer bytes than the payload
    #[error("Unable to write to {0}.")]
    Write(String),
    /// Write succeeded but the device sent nothing within the timeout
    #[error("Waited for data, but no response from {0}.")]
    NoResponse(String),
    /// Read failed with something other than a clean timeout
    #[error("Unable to read from {0}.")]
    Read(String),
}

/// Convert bytes to lowercase hex string
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

//! One-shot write/read transactions against serial-attached devices.
//!
//! Each transaction opens a port, discards stale buffered bytes, writes a
//! command payload, optionally waits for and decodes a short device response,
//! and closes the port again — with every fault folded into a structured
//! [`Response`] instead of propagating.
//!
//! # Features
//!
//! - `serial` - serialport-backed channel for desktop hosts
//!
//! # Example
//!
//! ```ignore
//! use serial_oneshot::{Executor, RequestDescriptor, TransactionMode};
//!
//! let executor = Executor::serial();
//! let descriptor = RequestDescriptor::serial("/dev/ttyUSB0", 115200, TransactionMode::WriteRead);
//!
//! let response = executor.write(&[0xA0, 0x01, 0x05], &descriptor);
//! if !response.err {
//!     println!("Device answered: {:?}", response.data);
//! }
//! ```

mod channel;
mod executor;
mod types;

#[cfg(feature = "serial")]
mod serial;

// Re-exports
pub use channel::{ChannelOpener, SerialChannel};
pub use executor::Executor;
pub use types::{
    DispatchMethod, RequestDescriptor, Response, TransactionError, TransactionMode,
};

#[cfg(feature = "serial")]
pub use serial::{PortChannel, SerialOpener};

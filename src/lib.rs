//! IPv4 subnet calculator.
//!
//! Takes one `address/prefix` string and derives network and broadcast
//! addresses, the usable host range, masks, class and private/public type.
//!
//! ```
//! let info = bitsplitter::calculate("10.0.0.0/8").unwrap();
//! assert_eq!(info.broadcast_addr.to_string(), "10.255.255.255");
//! ```

pub mod cli;
mod error;
pub mod logging;
pub mod models;
pub mod output;

pub use error::SubnetError;
pub use models::{calculate, SubnetInfo};

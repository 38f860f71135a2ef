#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lookup;

pub use error::{LookupError, NotFoundReason};
pub use lookup::{LookupProcessor, LookupRequest, extract_result};

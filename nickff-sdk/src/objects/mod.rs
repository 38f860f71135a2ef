pub mod info;
pub mod lookup;
pub mod upstream;

pub use info::{ServiceInfo, UsageInstructions};
pub use lookup::{ErrorDetail, LookupQuery, LookupResult};

//! Security analysis — does a controller action call an access-control check?
//!
//! Detection is a regex search over raw handler source (see [`scanner`]).

pub mod scanner;

pub use scanner::{SecurityRequirement, SecurityScanner};

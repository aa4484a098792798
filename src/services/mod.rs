pub mod duplicate;

pub use duplicate::DuplicateCheckResult;

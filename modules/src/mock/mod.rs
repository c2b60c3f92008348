//! Implementations of mocks which are used in testing.

pub mod client_def;
pub mod context;
pub mod header;
pub mod proof;

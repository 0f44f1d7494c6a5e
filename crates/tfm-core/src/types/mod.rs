//! Snapshot data model shared by providers and hosts.

pub mod collections;
pub mod family;
pub mod snapshot;
pub mod value;

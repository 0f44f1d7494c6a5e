//! Hash collections keyed by short schema strings.

pub use rustc_hash::FxHashMap;

//! Domain layer: caller-supplied entities the resolver operates on.

pub mod module;
pub mod plugin;

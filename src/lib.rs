//! Layered tfvars file resolution for infrastructure module builds.
//!
//! For a module invocation, this crate decides which variable-definition
//! files apply, in which override order, and from which directory (the
//! module's embedded `tfvars/` folder or a project-level seed override
//! folder). It only computes paths and checks their existence; parsing,
//! merging, and running the underlying infrastructure tool belong to the
//! caller.
//!
//! ```no_run
//! use layervars::{resolve_paths, Module, ModuleKind, PluginRegistry, ProviderInfo, Settings};
//!
//! let mut registry = PluginRegistry::new();
//! registry.register(Box::new(ProviderInfo::new("aws", "us-west-2", "112233445566")));
//!
//! let module = Module::new("app/stacks/core", "stacks/core", ModuleKind::Stack);
//! let paths = resolve_paths(&Settings::default(), &registry, &module)?;
//! # Ok::<(), layervars::ResolveError>(())
//! ```

pub mod domain;
pub mod infra;
pub mod resolver;

pub use domain::{
    module::{Module, ModuleKind},
    plugin::{PluginRegistry, ProviderInfo, ProviderPlugin},
};
pub use infra::{
    config::{LogConfig, ProjectConfig, Settings},
    error::ResolveError,
};
pub use resolver::{autodetect::detect_primary, paths::resolve_paths};

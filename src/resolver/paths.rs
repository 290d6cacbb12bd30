use std::path::PathBuf;

use crate::{
    domain::{module::Module, plugin::PluginRegistry},
    infra::{config::Settings, error::ResolveError, fs_probe},
    resolver::{layer_names, tfvars_dir},
};

/// Script-form files are checked before plain data-form files for a layer.
const LAYER_EXTENSIONS: [&str; 2] = ["rb", "tfvars"];

/// Resolves the ordered list of existing layer files for one module.
///
/// Layer order is override order: downstream mergers give later entries
/// precedence over earlier ones. An empty result is valid and means no
/// overrides exist at any layer.
pub fn resolve_paths(
    settings: &Settings,
    registry: &PluginRegistry,
    module: &Module,
) -> Result<Vec<PathBuf>, ResolveError> {
    let names = layer_names::generate(&settings.project.env, registry);
    let dir = tfvars_dir::resolve(module, &settings.project.root)?;

    let mut paths = Vec::new();
    for name in &names {
        for extension in LAYER_EXTENSIONS {
            let candidate = dir.join(format!("{name}.{extension}"));
            if fs_probe::file_exists(&candidate)? {
                paths.push(candidate);
            }
        }
    }

    tracing::debug!(
        module = %module.root().display(),
        tfvars_dir = %dir.display(),
        layers = names.len(),
        matched = paths.len(),
        "resolved layered tfvars files"
    );

    Ok(paths)
}

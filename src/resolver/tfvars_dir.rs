use std::path::{Path, PathBuf};

use crate::{
    domain::module::{Module, ModuleKind},
    infra::{error::ResolveError, fs_probe},
};

/// Picks the directory layer files are read from for one module.
///
/// A non-empty seed directory (`<project_root>/seed/tfvars/<build_dir>`) takes
/// over the tfvars embedded in a stack, letting operators override a stack
/// without touching it. Modules never pick up seed overrides: they are meant
/// to stay reusable, so any override belongs at the invoking stack level.
pub fn resolve(module: &Module, project_root: &Path) -> Result<PathBuf, ResolveError> {
    let mod_dir = module.tfvars_dir();

    if module.kind() == ModuleKind::Module {
        return Ok(mod_dir);
    }

    let seed_dir = project_root
        .join("seed")
        .join("tfvars")
        .join(module.build_dir());

    if fs_probe::dir_has_entries(&seed_dir)? {
        Ok(seed_dir)
    } else {
        Ok(mod_dir)
    }
}

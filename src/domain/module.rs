use std::path::{Path, PathBuf};

/// Kind of infrastructure unit, as declared by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// Reusable library unit. Never picks up seed overrides; any override
    /// belongs at the invoking stack level.
    Module,
    /// Deployable unit. May have its embedded tfvars taken over by a seed
    /// directory.
    Stack,
}

/// Descriptor of one module invocation. Owned by the caller; read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    root: PathBuf,
    build_dir: PathBuf,
    kind: ModuleKind,
}

impl Module {
    pub fn new(
        root: impl Into<PathBuf>,
        build_dir: impl Into<PathBuf>,
        kind: ModuleKind,
    ) -> Self {
        Self {
            root: root.into(),
            build_dir: build_dir.into(),
            kind,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative build-directory segment, e.g. `stacks/core`. Used to locate
    /// the seed override directory for stacks.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// The module's own embedded layer-file directory.
    pub fn tfvars_dir(&self) -> PathBuf {
        self.root.join("tfvars")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tfvars_dir_is_under_module_root() {
        let module = Module::new("/app/stacks/core", "stacks/core", ModuleKind::Stack);

        assert_eq!(
            module.tfvars_dir(),
            PathBuf::from("/app/stacks/core/tfvars")
        );
    }
}

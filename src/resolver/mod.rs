//! Resolution logic: provider autodetection, layer-name generation, tfvars
//! directory selection, and the path pipeline combining them.

pub mod autodetect;
pub mod layer_names;
pub mod paths;
pub mod tfvars_dir;

use crate::domain::plugin::PluginRegistry;

/// Generates the ordered layer names for one resolution.
///
/// Ordering encodes override precedence, most general first:
///
/// | Name                    | Pattern                        | Example                               |
/// |-------------------------|--------------------------------|---------------------------------------|
/// | base                    | base                           | base.tfvars                           |
/// | env                     | env                            | dev.tfvars                            |
/// | region base             | region/base                    | us-west-2/base.tfvars                 |
/// | region env              | region/env                     | us-west-2/dev.tfvars                  |
/// | provider base           | provider/base                  | aws/base.tfvars                       |
/// | provider env            | provider/env                   | aws/dev.tfvars                        |
/// | provider region base    | provider/region/base           | aws/us-west-2/base.tfvars             |
/// | provider region env     | provider/region/env            | aws/us-west-2/dev.tfvars              |
/// | provider namespace base | provider/namespace/region/base | aws/112233445566/us-west-2/base.tfvars |
/// | provider namespace env  | provider/namespace/region/env  | aws/112233445566/us-west-2/dev.tfvars |
///
/// The per-plugin block repeats for each registered plugin in registration
/// order. Identical names from different plugins are kept as-is: downstream
/// merge semantics depend on position, so deduplicating here would change
/// which layer wins.
pub fn generate(env: &str, registry: &PluginRegistry) -> Vec<String> {
    let mut names = vec!["base".to_owned(), env.to_owned()];

    for plugin in registry.plugins() {
        let provider = plugin.provider();
        let region = plugin.region();
        let namespace = plugin.namespace();

        names.push(format!("{region}/base"));
        names.push(format!("{region}/{env}"));

        names.push(format!("{provider}/base"));
        names.push(format!("{provider}/{env}"));

        names.push(format!("{provider}/{region}/base"));
        names.push(format!("{provider}/{region}/{env}"));

        names.push(format!("{provider}/{namespace}/{region}/base"));
        names.push(format!("{provider}/{namespace}/{region}/{env}"));
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plugin::ProviderInfo;

    #[test]
    fn no_plugins_yields_base_and_env_only() {
        let registry = PluginRegistry::new();

        assert_eq!(generate("dev", &registry), vec!["base", "dev"]);
    }

    #[test]
    fn single_aws_plugin_yields_the_full_ladder() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(ProviderInfo::new(
            "aws",
            "us-west-2",
            "112233445566",
        )));

        assert_eq!(
            generate("dev", &registry),
            vec![
                "base",
                "dev",
                "us-west-2/base",
                "us-west-2/dev",
                "aws/base",
                "aws/dev",
                "aws/us-west-2/base",
                "aws/us-west-2/dev",
                "aws/112233445566/us-west-2/base",
                "aws/112233445566/us-west-2/dev",
            ]
        );
    }

    #[test]
    fn plugins_contribute_blocks_in_registration_order() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(ProviderInfo::new("google", "us-central1", "proj")));
        registry.register(Box::new(ProviderInfo::new("aws", "us-west-2", "112233")));

        let names = generate("prod", &registry);

        assert_eq!(names.len(), 2 + 8 + 8);
        assert_eq!(names[2], "us-central1/base");
        assert_eq!(names[10], "us-west-2/base");
        assert_eq!(names[17], "aws/112233/us-west-2/prod");
    }

    #[test]
    fn colliding_names_are_not_deduplicated() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(ProviderInfo::new("aws", "us-west-2", "111111")));
        registry.register(Box::new(ProviderInfo::new("aws", "us-west-2", "111111")));

        let names = generate("dev", &registry);

        assert_eq!(names.len(), 2 + 8 + 8);
        assert_eq!(names[2], names[10]);
    }

    #[test]
    fn identical_inputs_yield_identical_sequences() {
        let mut registry = PluginRegistry::new();
        registry.register(Box::new(ProviderInfo::new("azurerm", "eastus", "sub-1")));

        assert_eq!(generate("dev", &registry), generate("dev", &registry));
    }
}

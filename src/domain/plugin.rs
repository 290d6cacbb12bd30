/// Capability exposed by a cloud-provider plugin.
///
/// What `region` and `namespace` mean depends on the provider:
///
/// |           | AWS     | Azure        | Google  |
/// |-----------|---------|--------------|---------|
/// | namespace | account | subscription | project |
/// | region    | region  | location     | region  |
pub trait ProviderPlugin {
    fn provider(&self) -> &str;
    fn region(&self) -> &str;
    fn namespace(&self) -> &str;
}

/// Plain owned-value plugin descriptor, the common case for callers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    provider: String,
    region: String,
    namespace: String,
}

impl ProviderInfo {
    pub fn new(
        provider: impl Into<String>,
        region: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            region: region.into(),
            namespace: namespace.into(),
        }
    }
}

impl ProviderPlugin for ProviderInfo {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Ordered collection of registered provider plugins.
///
/// Registration order is significant: layer names are generated per plugin in
/// this order, and position encodes override precedence downstream.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn ProviderPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: Box<dyn ProviderPlugin>) {
        self.plugins.push(plugin);
    }

    pub fn plugins(&self) -> &[Box<dyn ProviderPlugin>] {
        &self.plugins
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.provider()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("providers", &self.provider_names())
            .finish()
    }
}

use crate::domain::plugin::PluginRegistry;

/// Fixed ordering used to disambiguate when multiple providers are registered.
const PROVIDER_PRECEDENCE: [&str; 3] = ["aws", "azurerm", "google"];

/// Picks the single primary provider when behavior must choose unambiguously.
///
/// A lone registered plugin always wins, whatever its name. With several
/// plugins, the first precedence-list entry present in the registry wins.
/// No match is a valid outcome, not an error.
pub fn detect_primary(registry: &PluginRegistry) -> Option<String> {
    let names = registry.provider_names();

    if names.len() == 1 {
        return Some(names[0].to_owned());
    }

    PROVIDER_PRECEDENCE
        .into_iter()
        .find(|candidate| names.contains(candidate))
        .map(str::to_owned)
}

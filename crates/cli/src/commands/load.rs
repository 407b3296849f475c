use beeutil_secrets::{LoadOptions, SecretsCache, SecretsResolver};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub fn execute(
    plugin: Option<String>,
    api_base: Option<String>,
    config: Option<PathBuf>,
    remote_only: bool,
    show_values: bool,
) -> eyre::Result<()> {
    let mut options = LoadOptions::from_env().prefer_local(!remote_only);
    if let Some(plugin) = plugin {
        options = options.plugin_name(plugin);
    }
    if let Some(api_base) = api_base {
        options = options.api_base(api_base);
    }
    if let Some(config) = config {
        options = options.config_path(config);
    }

    let resolver = SecretsResolver::new(Arc::new(SecretsCache::new()))?;
    let resolved = resolver.resolve(&options)?;

    let mut out = io::stdout().lock();
    writeln!(out, "source: {}", resolved.source)?;
    super::print_record(&mut out, &resolved.record, show_values)?;
    Ok(())
}

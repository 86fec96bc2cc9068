// ABOUTME: Config scaffolding for new hosts.
// ABOUTME: Writes a commented docker-facts.yml template.

use std::path::Path;

use crate::error::{Error, Result};

use super::{CONFIG_FILENAME, Config};

pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    std::fs::write(&config_path, generate_template_yaml(&Config::default()))?;
    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"# Engine client searched for on PATH
tool: {}
# Command syntax: posix or windows
platform: {}
# Bound on every engine command
timeout: {}
# Host interface name of a bridge network: prefix + first id_length id characters
bridge:
  prefix: "{}"
  id_length: {}
# Uncomment to use a fixed interface list instead of the host's interfaces fact
# interfaces: [docker0, eth0, lo]
"#,
        config.tool,
        config.platform,
        humantime_serde::re::humantime::format_duration(config.timeout),
        config.bridge.prefix,
        config.bridge.id_length,
    )
}

//! Plugin listing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::connection::Jenkins;
use crate::prelude::*;

/// One plugin installed on the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Human-readable plugin name.
    #[serde(default)]
    pub long_name: String,
    /// Installed version.
    #[serde(default)]
    pub version: String,
    /// Whether the plugin is loaded.
    #[serde(default)]
    pub active: bool,
    /// Whether the plugin is enabled.
    #[serde(default)]
    pub enabled: bool,
}

impl Plugin {
    /// Plugins worth listing: loaded, enabled, and named.
    pub fn is_usable(&self) -> bool {
        self.active && self.enabled && !self.long_name.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PluginList {
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

impl Jenkins {
    /// All plugins installed on the server.
    pub async fn plugins(&self) -> Result<Vec<Plugin>> {
        let list: PluginList = self
            .get_json("pluginManager/api/json?depth=1", "plugin manager")
            .await?;
        Ok(list.plugins)
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.long_name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() -> Result<()> {
        let content = r#"
            {
                "plugins": [
                    {
                        "longName": "Git plugin",
                        "shortName": "git",
                        "version": "5.2.1",
                        "active": true,
                        "enabled": true
                    },
                    {
                        "longName": "Old plugin",
                        "shortName": "old",
                        "version": "1.0",
                        "active": false,
                        "enabled": false
                    }
                ]
            }
        "#;
        let list: PluginList = serde_json::from_str(content)?;
        assert_eq!(list.plugins.len(), 2);
        assert!(list.plugins[0].is_usable());
        assert!(!list.plugins[1].is_usable());
        assert_eq!(list.plugins[0].to_string(), "Git plugin - 5.2.1");
        Ok(())
    }

    #[test]
    fn tolerates_missing_fields() -> Result<()> {
        let plugin: Plugin = serde_json::from_str(r#"{"active": true}"#)?;
        assert!(!plugin.is_usable());
        Ok(())
    }
}

//! Configuration files for the agent.
//!
//! Every config type lives in its own TOML file inside a config directory. An
//! overlay directory (for instance one per player) may contain a file with
//! the same name, whose values take precedence over the main file.

pub mod behavior;
pub mod formation;

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use toml::Table;

use crate::Result;

pub use behavior::BehaviorConfig;
pub use formation::FormationConfig;

/// A config that can be loaded from a TOML file named [`Config::PATH`].
pub trait Config: DeserializeOwned {
    /// File name of the config, relative to the config directory.
    const PATH: &'static str;

    /// Load the config from `dir`.
    fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let table = read_table(&dir.as_ref().join(Self::PATH))?;

        Ok(Table::try_into(table)?)
    }

    /// Load the config from `dir`, with values from `overlay` taking precedence.
    ///
    /// A missing overlay file is not an error, the main file is used as is.
    fn load_with_overlay(dir: impl AsRef<Path>, overlay: impl AsRef<Path>) -> Result<Self> {
        let main = read_table(&dir.as_ref().join(Self::PATH))?;

        let overlay_path = overlay.as_ref().join(Self::PATH);
        let merged = if overlay_path.exists() {
            merge_overlay(main, read_table(&overlay_path)?)
        } else {
            main
        };

        Ok(Table::try_into(merged)?)
    }
}

fn read_table(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path)?;

    Ok(content.parse::<Table>()?)
}

/// Merge `overlay` into `main`, recursing into nested tables.
///
/// Keys only present in the overlay are added as well, `deny_unknown_fields`
/// on the config type rejects them when they are typos.
#[must_use]
pub fn merge_overlay(mut main: Table, overlay: Table) -> Table {
    for (key, value) in overlay {
        let merged = match (main.remove(&key), value) {
            (Some(toml::Value::Table(main_table)), toml::Value::Table(overlay_table)) => {
                toml::Value::Table(merge_overlay(main_table, overlay_table))
            }
            (_, value) => value,
        };

        main.insert(key, merged);
    }

    main
}

//! Unit table configuration files.
//!
//! This module reads a kind's unit table from a TOML document:
//!
//! ```toml
//! kind = "ElectricPotential"
//! base_unit = "Volt"
//!
//! [[units]]
//! name = "Volt"
//! scale = 1.0
//! abbreviation = "V"
//!
//! [[units]]
//! name = "Millivolt"
//! scale = 1e-3
//! abbreviation = "mV"
//! ```
//!
//! Unit names are the [`UnitKind::name`] identifiers of the target unit enum.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::table::{UnitTable, UnitTableBuilder};
use crate::UnitKind;

/// Kind name used when a configuration does not name its kind.
const UNNAMED_KIND: &str = "<unnamed>";

/// Unit table configuration for one quantity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindConfig {
    /// Kind name used in error messages. Defaults to `<unnamed>` when absent or blank.
    #[serde(default)]
    pub kind: String,
    /// Name of the base unit; must also appear in `units` with scale `1`.
    pub base_unit: String,
    /// Registered units.
    #[serde(default)]
    pub units: Vec<UnitConfig>,
}

/// One unit entry of a [`KindConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitConfig {
    /// Unit identifier, see [`UnitKind::name`].
    pub name: String,
    /// Factor such that `base = value * scale`.
    pub scale: f64,
    /// Additive offset. Anything other than `0` is rejected as a non-linear transform.
    #[serde(default)]
    pub offset: f64,
    /// Default display abbreviation.
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl KindConfig {
    /// Parses a configuration document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        toml::from_str(source).map_err(|err| {
            log::error!("malformed unit configuration: {err}");
            ConfigError::Parse(err)
        })
    }

    /// Resolves unit names against `U` and validates the result into a table.
    pub fn into_table<U: UnitKind>(self) -> ConfigResult<UnitTable<U>> {
        let kind = if self.kind.trim().is_empty() {
            UNNAMED_KIND.to_owned()
        } else {
            self.kind
        };
        let mut builder = UnitTableBuilder::new(kind.clone());

        for unit in self.units {
            let Some(id) = U::from_name(&unit.name) else {
                log::error!("{kind}: unknown unit {:?} in configuration", unit.name);
                return Err(ConfigError::UnknownUnit {
                    kind,
                    name: unit.name,
                });
            };
            let is_base = unit.name == self.base_unit;
            builder = builder.push(
                id,
                unit.scale,
                unit.offset,
                unit.abbreviation.unwrap_or_default(),
                is_base,
            );
        }

        builder.build()
    }
}

impl<U: UnitKind> UnitTable<U> {
    /// Builds a table from a TOML configuration document.
    ///
    /// ```rust
    /// use mensura_core::UnitTable;
    /// use mensura_core::electric_potential::ElectricPotentialUnit;
    ///
    /// let table: UnitTable<ElectricPotentialUnit> = UnitTable::from_toml_str(r#"
    ///     kind = "ElectricPotential"
    ///     base_unit = "Volt"
    ///
    ///     [[units]]
    ///     name = "Volt"
    ///     scale = 1.0
    ///     abbreviation = "V"
    /// "#).unwrap();
    ///
    /// assert_eq!(table.base_unit(), ElectricPotentialUnit::Volt);
    /// assert!(!table.contains(ElectricPotentialUnit::Millivolt));
    /// ```
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        KindConfig::from_toml_str(source)?.into_table()
    }

    /// Reads and builds a table from a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading unit configuration from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Describes this table as a configuration document, so it can be written back out.
    pub fn to_config(&self) -> KindConfig {
        KindConfig {
            kind: self.kind().to_owned(),
            base_unit: self.base_unit().name().to_owned(),
            units: self
                .entries()
                .iter()
                .map(|entry| UnitConfig {
                    name: entry.unit().name().to_owned(),
                    scale: entry.scale(),
                    offset: 0.0,
                    abbreviation: Some(entry.abbreviation().to_owned()),
                })
                .collect(),
        }
    }
}

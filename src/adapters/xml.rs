//! XML loader for `<car>` documents.
use crate::core::{Car, CarSource, ConditionType, Part, PartType, Result};
use quick_xml::de::from_str;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CarDocument {
    #[serde(default)]
    year: Option<String>,
    #[serde(default)]
    make: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    parts: Option<PartsDocument>,
}

#[derive(Debug, Default, Deserialize)]
struct PartsDocument {
    #[serde(default, rename = "part")]
    entries: Vec<PartDocument>,
}

#[derive(Debug, Deserialize)]
struct PartDocument {
    #[serde(default, rename = "@type")]
    part_type: Option<String>,
    #[serde(default, rename = "@condition")]
    condition: Option<String>,
}

impl PartDocument {
    // Unknown enum values become unset fields rather than failing the load.
    fn into_part(self, index: usize) -> Part {
        let part_type = self.part_type.and_then(|raw| match raw.parse::<PartType>() {
            Ok(part_type) => Some(part_type),
            Err(e) => {
                tracing::warn!("Part #{}: {}", index + 1, e);
                None
            }
        });
        let condition = self.condition.and_then(|raw| match raw.parse::<ConditionType>() {
            Ok(condition) => Some(condition),
            Err(e) => {
                tracing::warn!("Part #{}: {}", index + 1, e);
                None
            }
        });

        Part {
            part_type,
            condition,
        }
    }
}

impl From<CarDocument> for Car {
    fn from(document: CarDocument) -> Self {
        let parts = document
            .parts
            .unwrap_or_default()
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, part)| part.into_part(index))
            .collect();

        Car {
            year: document.year,
            make: document.make,
            model: document.model,
            parts,
        }
    }
}

/// Reads a car from an XML file on disk.
#[derive(Debug, Clone)]
pub struct XmlCarLoader {
    path: PathBuf,
}

impl XmlCarLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a car from an XML string.
    ///
    /// # Examples
    /// ```rust
    /// use car_diagnostics::adapters::xml::XmlCarLoader;
    ///
    /// let car = XmlCarLoader::parse_str("<car><make>Lexus</make></car>")?;
    /// assert_eq!(car.make.as_deref(), Some("Lexus"));
    /// assert!(car.parts.is_empty());
    /// # Ok::<(), car_diagnostics::DiagnosticsError>(())
    /// ```
    pub fn parse_str(xml: &str) -> Result<Car> {
        let document: CarDocument = from_str(xml)?;
        let car = Car::from(document);

        tracing::debug!(
            "Parsed car {:?} {:?} {:?} with {} part(s)",
            car.year,
            car.make,
            car.model,
            car.parts.len()
        );

        Ok(car)
    }
}

impl CarSource for XmlCarLoader {
    fn load_car(&self) -> Result<Car> {
        tracing::info!("Loading car from: {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        Self::parse_str(&content)
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Component categories a car is checked for.
///
/// Declaration order is the catalog order: `Ord` follows it, so any
/// `BTreeMap<PartType, _>` iterates ENGINE, ELECTRICAL, FUEL_FILTER,
/// OIL_FILTER, TIRE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartType {
    Engine,
    Electrical,
    FuelFilter,
    OilFilter,
    Tire,
}

impl PartType {
    pub const ALL: [PartType; 5] = [
        PartType::Engine,
        PartType::Electrical,
        PartType::FuelFilter,
        PartType::OilFilter,
        PartType::Tire,
    ];

    /// How many parts of this type a complete car carries.
    pub const fn required_count(self) -> u32 {
        match self {
            PartType::Tire => 4,
            _ => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PartType::Engine => "ENGINE",
            PartType::Electrical => "ELECTRICAL",
            PartType::FuelFilter => "FUEL_FILTER",
            PartType::OilFilter => "OIL_FILTER",
            PartType::Tire => "TIRE",
        }
    }
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartType::ALL
            .into_iter()
            .find(|part_type| part_type.as_str() == s.trim())
            .ok_or_else(|| format!("unknown part type: {}", s))
    }
}

/// Health state of a part. Only NEW, GOOD and WORN are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionType {
    New,
    Good,
    Worn,
    WornOut,
    Cracked,
    Damaged,
    Flat,
    Clogged,
    NoPower,
}

impl ConditionType {
    pub const ALL: [ConditionType; 9] = [
        ConditionType::New,
        ConditionType::Good,
        ConditionType::Worn,
        ConditionType::WornOut,
        ConditionType::Cracked,
        ConditionType::Damaged,
        ConditionType::Flat,
        ConditionType::Clogged,
        ConditionType::NoPower,
    ];

    pub const ACCEPTABLE: [ConditionType; 3] =
        [ConditionType::New, ConditionType::Good, ConditionType::Worn];

    pub fn is_acceptable(self) -> bool {
        Self::ACCEPTABLE.contains(&self)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ConditionType::New => "NEW",
            ConditionType::Good => "GOOD",
            ConditionType::Worn => "WORN",
            ConditionType::WornOut => "WORN_OUT",
            ConditionType::Cracked => "CRACKED",
            ConditionType::Damaged => "DAMAGED",
            ConditionType::Flat => "FLAT",
            ConditionType::Clogged => "CLOGGED",
            ConditionType::NoPower => "NO_POWER",
        }
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConditionType::ALL
            .into_iter()
            .find(|condition| condition.as_str() == s.trim())
            .ok_or_else(|| format!("unknown condition: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptiveField {
    Make,
    Model,
    Year,
}

impl fmt::Display for DescriptiveField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DescriptiveField::Make => "Make",
            DescriptiveField::Model => "Model",
            DescriptiveField::Year => "Year",
        };
        f.write_str(name)
    }
}

/// A single component. Either field is `None` when the input left it out or
/// carried a value outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub part_type: Option<PartType>,
    pub condition: Option<ConditionType>,
}

impl Part {
    pub fn new(part_type: PartType, condition: ConditionType) -> Self {
        Self {
            part_type: Some(part_type),
            condition: Some(condition),
        }
    }

    /// A part without a condition is not in the acceptable set either.
    pub fn is_damaged(&self) -> bool {
        !self.condition.is_some_and(ConditionType::is_acceptable)
    }
}

/// Required-but-absent part counts, keyed in catalog order.
pub type MissingParts = BTreeMap<PartType, u32>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Car {
    /// Descriptive fields that are unset or empty, checked as Make, Model, Year.
    pub fn missing_data(&self) -> Vec<DescriptiveField> {
        [
            (DescriptiveField::Make, &self.make),
            (DescriptiveField::Model, &self.model),
            (DescriptiveField::Year, &self.year),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(field, _)| field)
        .collect()
    }

    /// Catalog types present fewer times than required, with the shortfall.
    /// Fully satisfied types have no entry.
    pub fn missing_parts_map(&self) -> MissingParts {
        PartType::ALL
            .into_iter()
            .filter_map(|part_type| {
                let present = self
                    .parts
                    .iter()
                    .filter(|part| part.part_type == Some(part_type))
                    .count() as u32;
                let required = part_type.required_count();
                (present < required).then(|| (part_type, required - present))
            })
            .collect()
    }

    /// Parts whose condition is outside NEW, GOOD, WORN, in input order.
    pub fn damaged_parts(&self) -> Vec<&Part> {
        self.parts.iter().filter(|part| part.is_damaged()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tires(condition: ConditionType, count: usize) -> Vec<Part> {
        (0..count).map(|_| Part::new(PartType::Tire, condition)).collect()
    }

    fn complete_car() -> Car {
        let mut parts = vec![
            Part::new(PartType::Engine, ConditionType::Good),
            Part::new(PartType::Electrical, ConditionType::New),
            Part::new(PartType::FuelFilter, ConditionType::Worn),
            Part::new(PartType::OilFilter, ConditionType::Good),
        ];
        parts.extend(tires(ConditionType::Good, 4));
        Car {
            year: Some("2015".to_string()),
            make: Some("Toyota".to_string()),
            model: Some("Tacoma".to_string()),
            parts,
        }
    }

    #[test]
    fn test_missing_data_order_and_empty_strings() {
        let car = Car {
            year: Some(String::new()),
            make: None,
            model: Some("Tacoma".to_string()),
            parts: Vec::new(),
        };
        assert_eq!(
            car.missing_data(),
            vec![DescriptiveField::Make, DescriptiveField::Year]
        );
        assert!(complete_car().missing_data().is_empty());
    }

    #[test]
    fn test_missing_parts_for_empty_car() {
        let missing = Car::default().missing_parts_map();
        let expected: Vec<(PartType, u32)> = vec![
            (PartType::Engine, 1),
            (PartType::Electrical, 1),
            (PartType::FuelFilter, 1),
            (PartType::OilFilter, 1),
            (PartType::Tire, 4),
        ];
        assert_eq!(missing.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_missing_tires_only() {
        let mut car = complete_car();
        car.parts.truncate(6);
        let missing = car.missing_parts_map();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing.get(&PartType::Tire), Some(&2));
    }

    #[test]
    fn test_extra_parts_are_not_negative_shortfall() {
        let mut car = complete_car();
        car.parts.extend(tires(ConditionType::New, 2));
        car.parts.push(Part::new(PartType::Engine, ConditionType::New));
        assert!(car.missing_parts_map().is_empty());
    }

    #[test]
    fn test_untyped_part_counts_toward_nothing() {
        let mut car = complete_car();
        car.parts[0].part_type = None;
        let missing = car.missing_parts_map();
        assert_eq!(missing.get(&PartType::Engine), Some(&1));
        assert_eq!(missing.len(), 1);
    }

    #[test]
    fn test_damaged_parts_keep_input_order() {
        let mut car = complete_car();
        car.parts[5].condition = Some(ConditionType::Flat);
        car.parts[0].condition = Some(ConditionType::Cracked);
        car.parts[2].condition = None;

        let damaged = car.damaged_parts();
        assert_eq!(damaged.len(), 3);
        assert_eq!(damaged[0].part_type, Some(PartType::Engine));
        assert_eq!(damaged[1].part_type, Some(PartType::FuelFilter));
        assert_eq!(damaged[1].condition, None);
        assert_eq!(damaged[2].condition, Some(ConditionType::Flat));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut car = complete_car();
        car.make = None;
        car.parts.pop();
        car.parts[1].condition = Some(ConditionType::NoPower);

        assert_eq!(car.missing_data(), car.missing_data());
        assert_eq!(car.missing_parts_map(), car.missing_parts_map());
        assert_eq!(car.damaged_parts(), car.damaged_parts());
    }

    #[test]
    fn test_enum_text_forms() {
        assert_eq!(PartType::FuelFilter.to_string(), "FUEL_FILTER");
        assert_eq!("OIL_FILTER".parse::<PartType>(), Ok(PartType::OilFilter));
        assert!("WHEEL".parse::<PartType>().is_err());
        assert_eq!(" WORN_OUT ".parse::<ConditionType>(), Ok(ConditionType::WornOut));
        assert!(ConditionType::Worn.is_acceptable());
        assert!(!ConditionType::WornOut.is_acceptable());
        assert_eq!(
            serde_json::to_string(&ConditionType::NoPower).unwrap(),
            "\"NO_POWER\""
        );
    }
}

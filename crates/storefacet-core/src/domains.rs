//! Built-in facet enumerations for the storefront's two catalog domains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::traits::{FacetKey, SpecificationKey};

/// Sidebar facets for mobile phones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PhoneFacet {
    Manufacturer,
    ModelName,
    RamSize,
    StorageCapacity,
    ColourName,
    OperatingSystem,
    ScreenSize,
}

impl FacetKey for PhoneFacet {
    fn all() -> &'static [Self] {
        &[
            PhoneFacet::Manufacturer,
            PhoneFacet::ModelName,
            PhoneFacet::RamSize,
            PhoneFacet::StorageCapacity,
            PhoneFacet::ColourName,
            PhoneFacet::OperatingSystem,
            PhoneFacet::ScreenSize,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            PhoneFacet::Manufacturer => "Manufacturer",
            PhoneFacet::ModelName => "Model Name",
            PhoneFacet::RamSize => "RAM Size",
            PhoneFacet::StorageCapacity => "Memory Storage Capacity",
            PhoneFacet::ColourName => "Colour Name",
            PhoneFacet::OperatingSystem => "Operating System",
            PhoneFacet::ScreenSize => "Screen Size",
        }
    }
}

impl SpecificationKey for PhoneFacet {
    fn spec_fields(&self) -> &'static [&'static str] {
        match self {
            PhoneFacet::Manufacturer => &["Manufacturer", "Brand"],
            PhoneFacet::ModelName => &["Model Name"],
            PhoneFacet::RamSize => &["RAM Size", "RAM Memory Installed Size", "RAM"],
            PhoneFacet::StorageCapacity => &["Memory Storage Capacity", "Storage"],
            PhoneFacet::ColourName => &["Colour Name", "Color"],
            PhoneFacet::OperatingSystem => &["Operating System", "OS"],
            PhoneFacet::ScreenSize => &["Screen Size", "Standing screen display size"],
        }
    }

    fn uses_manufacturer_field(&self) -> bool {
        matches!(self, PhoneFacet::Manufacturer)
    }
}

/// Sidebar facets for baby products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BabyFacet {
    Brand,
    Size,
    Colour,
    AgeRange,
    Material,
}

impl FacetKey for BabyFacet {
    fn all() -> &'static [Self] {
        &[
            BabyFacet::Brand,
            BabyFacet::Size,
            BabyFacet::Colour,
            BabyFacet::AgeRange,
            BabyFacet::Material,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            BabyFacet::Brand => "Brand",
            BabyFacet::Size => "Size",
            BabyFacet::Colour => "Colour",
            BabyFacet::AgeRange => "Age Range",
            BabyFacet::Material => "Material",
        }
    }
}

impl SpecificationKey for BabyFacet {
    fn spec_fields(&self) -> &'static [&'static str] {
        match self {
            BabyFacet::Brand => &["Brand", "Manufacturer"],
            BabyFacet::Size => &["Size"],
            BabyFacet::Colour => &["Colour", "Color", "Colour Name"],
            BabyFacet::AgeRange => &["Age Range (Description)", "Age Range", "Recommended Age"],
            BabyFacet::Material => &["Material"],
        }
    }

    fn uses_manufacturer_field(&self) -> bool {
        matches!(self, BabyFacet::Brand)
    }
}

/// Which facet enumeration a catalog uses. Config values and CLI flags both
/// go through [`FromStr`], so they accept the same aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Domain {
    #[default]
    Phones,
    Baby,
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phones" | "mobile" | "mobiles" => Ok(Domain::Phones),
            "baby" | "baby-products" => Ok(Domain::Baby),
            other => Err(Error::InvalidConfig(format!("unknown catalog domain '{other}'"))),
        }
    }
}

impl TryFrom<String> for Domain {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Phones => f.write_str("phones"),
            Domain::Baby => f.write_str("baby"),
        }
    }
}

//! Address cascade resolver.
//!
//! Derives the valid province / municipality / barangay options from the
//! static table and keeps a selection consistent: changing an ancestor
//! clears every descendant. The cascade only applies when the country is
//! the Philippines; for any other country the dependent fields are
//! inapplicable, not merely empty.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::reference::address;
use crate::types::{Payload, CASCADE_COUNTRY};

// ---------------------------------------------------------------------------
// Option lookups
// ---------------------------------------------------------------------------

/// All province names, sorted.
pub fn provinces() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = address::table().iter().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    names
}

/// Municipalities of `province`, sorted. Empty when unset or unknown.
pub fn municipalities(province: Option<&str>) -> Vec<&'static str> {
    let Some(province) = province.and_then(address::find_province) else {
        return Vec::new();
    };
    let mut names: Vec<&'static str> = province
        .municipalities
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    names.sort_unstable();
    names
}

/// Barangays of the first municipality named `municipality`, in table order.
///
/// Municipality names repeat across provinces (e.g. "San Isidro"); use
/// [`barangays_of`] when the province is known.
pub fn barangays(municipality: Option<&str>) -> Vec<&'static str> {
    let Some(municipality) = municipality else {
        return Vec::new();
    };
    address::table()
        .iter()
        .find_map(|p| p.find_municipality(municipality))
        .map(|m| m.barangays.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Barangays of `municipality` within `province`, in table order.
pub fn barangays_of(province: &str, municipality: &str) -> Vec<&'static str> {
    address::find_province(province)
        .and_then(|p| p.find_municipality(municipality))
        .map(|m| m.barangays.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Whether the province / municipality / barangay cascade applies.
pub fn cascade_applies(country: Option<&str>) -> bool {
    country.is_some_and(|c| c.trim().eq_ignore_ascii_case(CASCADE_COUNTRY))
}

// ---------------------------------------------------------------------------
// Address field groups inside form payloads
// ---------------------------------------------------------------------------

/// Field names of one address inside a form payload, ordered from the
/// country down to the most specific field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressGroup {
    pub fields: &'static [&'static str],
}

pub const PERMANENT_ADDRESS: AddressGroup = AddressGroup {
    fields: &["country", "province", "municipality", "barangay"],
};

pub const TEMPORARY_ADDRESS: AddressGroup = AddressGroup {
    fields: &[
        "temporary_country",
        "temporary_province",
        "temporary_municipality",
        "temporary_barangay",
    ],
};

pub const PREFERRED_LOCATION: AddressGroup = AddressGroup {
    fields: &["preferred_country", "preferred_province", "preferred_municipality"],
};

pub const ADDRESS_GROUPS: [AddressGroup; 3] =
    [PERMANENT_ADDRESS, TEMPORARY_ADDRESS, PREFERRED_LOCATION];

impl AddressGroup {
    pub fn country(&self) -> &'static str {
        self.fields[0]
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

/// Remove every descendant of `field` from `payload`.
///
/// Applied identically to every address group. Returns the names of the
/// fields that were actually removed.
pub fn clear_descendants(payload: &mut Payload, field: &str) -> Vec<&'static str> {
    let mut cleared = Vec::new();
    for group in ADDRESS_GROUPS {
        if let Some(pos) = group.position(field) {
            for descendant in &group.fields[pos + 1..] {
                if payload.remove(*descendant).is_some() {
                    cleared.push(*descendant);
                }
            }
        }
    }
    cleared
}

// ---------------------------------------------------------------------------
// AddressSelection
// ---------------------------------------------------------------------------

/// A single address being filled in, with the cascade invariant enforced
/// by its setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSelection {
    country: String,
    province: Option<String>,
    municipality: Option<String>,
    barangay: Option<String>,
}

impl AddressSelection {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    pub fn municipality(&self) -> Option<&str> {
        self.municipality.as_deref()
    }

    pub fn barangay(&self) -> Option<&str> {
        self.barangay.as_deref()
    }

    pub fn cascade_enabled(&self) -> bool {
        cascade_applies(Some(&self.country))
    }

    /// Change the country. Any actual change clears the whole cascade.
    pub fn set_country(&mut self, country: impl Into<String>) {
        let country = country.into();
        if country != self.country {
            self.country = country;
            self.province = None;
            self.municipality = None;
            self.barangay = None;
        }
    }

    /// Change the province, clearing municipality and barangay on change.
    pub fn set_province(&mut self, province: Option<String>) -> Result<(), CoreError> {
        if province.is_some() && !self.cascade_enabled() {
            return Err(CoreError::Validation(format!(
                "Province does not apply to country '{}'",
                self.country
            )));
        }
        if province != self.province {
            self.province = province;
            self.municipality = None;
            self.barangay = None;
        }
        Ok(())
    }

    /// Change the municipality, clearing the barangay on change.
    pub fn set_municipality(&mut self, municipality: Option<String>) -> Result<(), CoreError> {
        if municipality.is_some() && self.province.is_none() {
            return Err(CoreError::Validation(
                "Municipality requires a province".to_string(),
            ));
        }
        if municipality != self.municipality {
            self.municipality = municipality;
            self.barangay = None;
        }
        Ok(())
    }

    pub fn set_barangay(&mut self, barangay: Option<String>) -> Result<(), CoreError> {
        if barangay.is_some() && self.municipality.is_none() {
            return Err(CoreError::Validation(
                "Barangay requires a municipality".to_string(),
            ));
        }
        self.barangay = barangay;
        Ok(())
    }

    /// Province options for this selection. Empty outside the cascade.
    pub fn province_options(&self) -> Vec<&'static str> {
        if self.cascade_enabled() {
            provinces()
        } else {
            Vec::new()
        }
    }

    pub fn municipality_options(&self) -> Vec<&'static str> {
        municipalities(self.province())
    }

    pub fn barangay_options(&self) -> Vec<&'static str> {
        match (self.province(), self.municipality()) {
            (Some(p), Some(m)) => barangays_of(p, m),
            _ => Vec::new(),
        }
    }
}

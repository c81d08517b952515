//! Philippine province / municipality / barangay hierarchy.
//!
//! The table is embedded at compile time and parsed once on first use.

use std::sync::LazyLock;

use serde::Deserialize;

/// One province with its municipalities, in table order.
#[derive(Debug, Clone, Deserialize)]
pub struct Province {
    #[serde(rename = "province")]
    pub name: String,
    pub municipalities: Vec<Municipality>,
}

/// One municipality (or city) with its barangays, in table order.
#[derive(Debug, Clone, Deserialize)]
pub struct Municipality {
    pub name: String,
    pub barangays: Vec<String>,
}

static ADDRESS_TABLE: LazyLock<Vec<Province>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../data/ph_address.json"))
        .expect("embedded address table is valid JSON")
});

/// The full nested table, in the order it was authored.
pub fn table() -> &'static [Province] {
    &ADDRESS_TABLE
}

/// Find a province by name, ignoring case.
pub fn find_province(name: &str) -> Option<&'static Province> {
    let name = name.trim();
    table()
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Province {
    /// Find a municipality of this province by name, ignoring case.
    pub fn find_municipality(&self, name: &str) -> Option<&Municipality> {
        let name = name.trim();
        self.municipalities
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_not_empty() {
        assert!(!table().is_empty());
        for province in table() {
            assert!(
                !province.municipalities.is_empty(),
                "{} has no municipalities",
                province.name
            );
        }
    }

    #[test]
    fn find_province_is_case_insensitive() {
        assert_eq!(find_province("abra").unwrap().name, "Abra");
        assert_eq!(find_province(" BENGUET ").unwrap().name, "Benguet");
        assert!(find_province("Atlantis").is_none());
    }

    #[test]
    fn find_municipality_within_province() {
        let abra = find_province("Abra").unwrap();
        assert!(abra.find_municipality("bangued").is_some());
        assert!(abra.find_municipality("Cebu City").is_none());
    }
}

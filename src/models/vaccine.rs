use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RECOGNIZED_CODE_NAMES;

/// Reference data for a dose product.
///
/// Whether the code name is recognized is only checked when a site receives
/// a distribution, so unrecognized vaccines can still be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vaccine {
    code_name: String,
    #[serde(rename = "type")]
    vaccine_type: String,
    manufacturer: String,
}

impl Vaccine {
    pub fn new(
        code_name: impl Into<String>,
        vaccine_type: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            code_name: code_name.into(),
            vaccine_type: vaccine_type.into(),
            manufacturer: manufacturer.into(),
        }
    }

    /// Whether `code_name` is on the recognized allow-list.
    pub fn is_recognized(code_name: &str) -> bool {
        RECOGNIZED_CODE_NAMES.contains(&code_name)
    }

    /// Whether this vaccine's own code name is recognized.
    pub fn recognized(&self) -> bool {
        Self::is_recognized(&self.code_name)
    }

    pub fn code_name(&self) -> &str {
        &self.code_name
    }

    pub fn vaccine_type(&self) -> &str {
        &self.vaccine_type
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn set_code_name(&mut self, code_name: impl Into<String>) {
        self.code_name = code_name.into();
    }

    pub fn set_vaccine_type(&mut self, vaccine_type: impl Into<String>) {
        self.vaccine_type = vaccine_type.into();
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) {
        self.manufacturer = manufacturer.into();
    }
}

impl fmt::Display for Vaccine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.recognized() {
            "Recognized"
        } else {
            "Unrecognized"
        };
        write!(
            f,
            "{label} vaccine: {} ({}; {})",
            self.code_name, self.vaccine_type, self.manufacturer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_code_names_are_recognized() {
        for code in ["mRNA-1273", "BNT162b2", "Ad26.COV2.S", "AZD1222"] {
            assert!(Vaccine::is_recognized(code), "{code} should be recognized");
        }
    }

    #[test]
    fn lookalike_code_names_are_not_recognized() {
        assert!(!Vaccine::is_recognized("mrna-1273"));
        assert!(!Vaccine::is_recognized("AZD1222 "));
        assert!(!Vaccine::is_recognized(""));
        assert!(!Vaccine::is_recognized("Sputnik V"));
    }

    #[test]
    fn recognized_vaccine_display() {
        let v = Vaccine::new("mRNA-1273", "RNA", "Moderna");
        assert_eq!(v.to_string(), "Recognized vaccine: mRNA-1273 (RNA; Moderna)");
    }

    #[test]
    fn unrecognized_vaccine_display() {
        let v = Vaccine::new("Gam-COVID-Vac", "Non-Replicating Viral Vector", "Gamaleya");
        assert_eq!(
            v.to_string(),
            "Unrecognized vaccine: Gam-COVID-Vac (Non-Replicating Viral Vector; Gamaleya)"
        );
    }

    #[test]
    fn setters_change_recognition() {
        let mut v = Vaccine::new("unknown", "RNA", "Pfizer/BioNTech");
        assert!(!v.recognized());

        v.set_code_name("BNT162b2");
        v.set_vaccine_type("mRNA");
        v.set_manufacturer("Pfizer");
        assert!(v.recognized());
        assert_eq!(v.to_string(), "Recognized vaccine: BNT162b2 (mRNA; Pfizer)");
    }

    #[test]
    fn type_field_serializes_as_type() {
        let v = Vaccine::new("AZD1222", "Non-Replicating Viral Vector", "AstraZeneca");
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"type\":\"Non-Replicating Viral Vector\""));
        assert!(json.contains("\"code_name\":\"AZD1222\""));
    }
}

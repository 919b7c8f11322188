use std::fmt;

use serde::{Deserialize, Serialize};

use super::Vaccine;

/// Doses of one vaccine on hand at a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaccineDistribution {
    vaccine: Vaccine,
    doses: u32,
}

impl VaccineDistribution {
    pub fn new(vaccine: Vaccine, doses: u32) -> Self {
        Self { vaccine, doses }
    }

    pub fn vaccine(&self) -> &Vaccine {
        &self.vaccine
    }

    pub fn doses(&self) -> u32 {
        self.doses
    }

    pub fn set_vaccine(&mut self, vaccine: Vaccine) {
        self.vaccine = vaccine;
    }

    pub fn set_doses(&mut self, doses: u32) {
        self.doses = doses;
    }
}

impl fmt::Display for VaccineDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} doses of {} by {}",
            self.doses,
            self.vaccine.code_name(),
            self.vaccine.manufacturer()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_code_and_manufacturer() {
        let d = VaccineDistribution::new(Vaccine::new("BNT162b2", "mRNA", "Pfizer/BioNTech"), 7);
        assert_eq!(d.to_string(), "7 doses of BNT162b2 by Pfizer/BioNTech");
    }

    #[test]
    fn empty_distribution_still_renders() {
        let d = VaccineDistribution::new(Vaccine::new("AZD1222", "Viral Vector", "AstraZeneca"), 0);
        assert_eq!(d.to_string(), "0 doses of AZD1222 by AstraZeneca");
    }

    #[test]
    fn setters_replace_values() {
        let mut d = VaccineDistribution::new(Vaccine::new("AZD1222", "Viral Vector", "AstraZeneca"), 3);
        d.set_doses(12);
        d.set_vaccine(Vaccine::new("Ad26.COV2.S", "Viral Vector", "Janssen"));
        assert_eq!(d.doses(), 12);
        assert_eq!(d.vaccine().manufacturer(), "Janssen");
    }
}

/// Application-level constants
pub const APP_NAME: &str = "VaccinationTracker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vaccine code names recognized when a site receives a distribution.
pub const RECOGNIZED_CODE_NAMES: [&str; 4] = ["mRNA-1273", "BNT162b2", "Ad26.COV2.S", "AZD1222"];

/// Distinct manufacturers a single site can stock.
pub const MAX_VACCINE_KINDS: usize = 4;

/// Booked-but-not-administered appointments a single site can hold.
pub const MAX_APPOINTMENTS: usize = 200;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "vaccination_tracker_lib=info,warn"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_code_names_are_distinct() {
        for (i, a) in RECOGNIZED_CODE_NAMES.iter().enumerate() {
            for b in &RECOGNIZED_CODE_NAMES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn capacity_bounds() {
        assert_eq!(MAX_VACCINE_KINDS, 4);
        assert_eq!(MAX_APPOINTMENTS, 200);
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(default_log_filter().starts_with("vaccination_tracker_lib="));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}

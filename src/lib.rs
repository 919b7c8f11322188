pub mod config;
pub mod models;
pub mod record_store; // Patient-record store
pub mod site; // Supply, booking, administration

pub use models::{AppointmentStatus, DoseEntry, HealthRecord, ModelError, Vaccine, VaccineDistribution};
pub use record_store::HealthRecordStore;
pub use site::{SiteError, VaccinationSite};

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Filter comes from `RUST_LOG`, falling back to `config::default_log_filter()`.
/// Returns false if a subscriber was already installed.
pub fn init_tracing() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} tracing initialized", config::APP_NAME, config::APP_VERSION);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        assert!(!init_tracing(), "second install must be refused");
    }

    #[test]
    fn clinic_day_end_to_end() {
        init_tracing();

        let mut store = HealthRecordStore::new();
        let alice = store.create("Alice", 5);
        let bob = store.create("Bob", 5);

        let mut site = VaccinationSite::new("Clinic A", 100);
        assert!(matches!(
            site.book_appointment(store.get_mut(&alice).unwrap()),
            Err(SiteError::InsufficientDoses(_))
        ));

        site.add_distribution(Vaccine::new("AZD1222", "Non-Replicating Viral Vector", "AstraZeneca"), 1)
            .unwrap();
        site.add_distribution(Vaccine::new("mRNA-1273", "RNA", "Moderna"), 5)
            .unwrap();

        site.book_appointment(store.get_mut(&alice).unwrap()).unwrap();
        site.book_appointment(store.get_mut(&bob).unwrap()).unwrap();
        assert_eq!(site.administer("April-20-2021", &mut store).unwrap(), 2);

        assert_eq!(
            site.to_string(),
            "Clinic A has 4 available doses: <0 doses of AstraZeneca, 4 doses of Moderna>"
        );
        assert_eq!(
            store.get(&bob).unwrap().vaccination_receipt(),
            "Number of doses Bob has received: 1 \
             [Recognized vaccine: mRNA-1273 (RNA; Moderna) in Clinic A on April-20-2021]"
        );
        assert_eq!(
            store.get(&alice).unwrap().appointment_status(),
            "Last vaccination appointment for Alice with Clinic A succeeded"
        );
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AppointmentStatus, ModelError, Vaccine};

/// One administered dose in a patient's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseEntry {
    pub vaccine: Vaccine,
    pub site: String,
    pub date: String,
}

impl fmt::Display for DoseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {} on {}", self.vaccine, self.site, self.date)
    }
}

/// A patient's vaccination history and latest appointment outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    id: Uuid,
    patient: String,
    /// Maximum number of doses this history can hold.
    limit: usize,
    entries: Vec<DoseEntry>,
    appointment_status: AppointmentStatus,
    appointment_site: Option<String>,
}

impl HealthRecord {
    pub fn new(patient: impl Into<String>, limit: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient: patient.into(),
            limit,
            entries: Vec::with_capacity(limit),
            appointment_status: AppointmentStatus::Unset,
            appointment_site: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn patient(&self) -> &str {
        &self.patient
    }

    pub fn set_patient(&mut self, patient: impl Into<String>) {
        self.patient = patient.into();
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the history capacity. Cannot drop below the doses already recorded.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), ModelError> {
        if limit < self.entries.len() {
            return Err(ModelError::CapacityExceeded {
                collection: "dose history".into(),
                limit,
            });
        }
        self.limit = limit;
        Ok(())
    }

    pub fn number_of_doses(&self) -> usize {
        self.entries.len()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.limit
    }

    pub fn entries(&self) -> &[DoseEntry] {
        &self.entries
    }

    /// Vaccines received, oldest first.
    pub fn vaccines(&self) -> Vec<&Vaccine> {
        self.entries.iter().map(|e| &e.vaccine).collect()
    }

    /// Rendered history lines, oldest first.
    pub fn records(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn appointment_state(&self) -> AppointmentStatus {
        self.appointment_status
    }

    pub fn appointment_site(&self) -> Option<&str> {
        self.appointment_site.as_deref()
    }

    /// Append a received dose to the history.
    pub fn add_record(
        &mut self,
        vaccine: &Vaccine,
        site: &str,
        date: &str,
    ) -> Result<(), ModelError> {
        if self.is_full() {
            return Err(ModelError::CapacityExceeded {
                collection: "dose history".into(),
                limit: self.limit,
            });
        }
        self.entries.push(DoseEntry {
            vaccine: vaccine.clone(),
            site: site.to_string(),
            date: date.to_string(),
        });
        Ok(())
    }

    /// Only booking at a site moves the appointment status.
    pub(crate) fn set_appointment(&mut self, status: AppointmentStatus, site: &str) {
        self.appointment_status = status;
        self.appointment_site = Some(site.to_string());
    }

    pub fn vaccination_receipt(&self) -> String {
        if self.entries.is_empty() {
            return format!("{} has not yet received any doses.", self.patient);
        }
        let history = self.records().join("; ");
        format!(
            "Number of doses {} has received: {} [{}]",
            self.patient,
            self.entries.len(),
            history
        )
    }

    pub fn appointment_status(&self) -> String {
        let site = self.appointment_site.as_deref().unwrap_or_default();
        match self.appointment_status {
            AppointmentStatus::Unset => {
                format!("No vaccination appointment for {} yet", self.patient)
            }
            AppointmentStatus::Success => format!(
                "Last vaccination appointment for {} with {} succeeded",
                self.patient, site
            ),
            AppointmentStatus::Fail => format!(
                "Last vaccination appointment for {} with {} failed",
                self.patient, site
            ),
        }
    }
}

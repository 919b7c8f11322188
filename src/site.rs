//! Vaccination site: dose inventory, appointment booking and administration.
//!
//! Doses arrive as distributions, one per manufacturer, kept in arrival
//! order. Booking reserves one dose per appointment; administering consumes
//! the reserved doses from the earliest-arrived distribution that still has
//! stock and writes each dose into the patient's health record.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::config::{MAX_APPOINTMENTS, MAX_VACCINE_KINDS};
use crate::models::{AppointmentStatus, HealthRecord, ModelError, Vaccine, VaccineDistribution};
use crate::record_store::HealthRecordStore;

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Vaccine code name not recognized: {0}")]
    UnrecognizedVaccineCodeName(String),

    #[error("Adding {doses} doses exceeds limit {limit}")]
    DistributionLimitExceeded { doses: u32, limit: u32 },

    #[error("There are 0 doses available")]
    InsufficientDoses(String),

    #[error("Capacity exceeded for {collection}: limit is {limit}")]
    CapacityExceeded { collection: String, limit: usize },

    #[error("Distributions hold {available} doses but {pending} appointments are pending")]
    DosesUnavailable { available: u64, pending: usize },

    #[error("Health record {0} is not in the record store")]
    UnknownRecord(Uuid),

    #[error("No pending appointment for health record {0}")]
    AppointmentNotFound(Uuid),

    #[error("Health record error: {0}")]
    Record(#[from] ModelError),
}

// ═══════════════════════════════════════════════════════════
// VaccinationSite
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct VaccinationSite {
    name: String,
    /// Cap on the doses this site may hold at once.
    limit: u32,
    /// One entry per manufacturer, in order of first arrival.
    distributions: Vec<VaccineDistribution>,
    /// Always the sum of `distributions` doses.
    total_doses: u32,
    /// Record ids of booked appointments, in booking order.
    pending: Vec<Uuid>,
    /// Doses promised to `pending`; never above `total_doses`.
    reserved_doses: u32,
}

impl VaccinationSite {
    pub fn new(name: impl Into<String>, limit: u32) -> Self {
        Self {
            name: name.into(),
            limit,
            distributions: Vec::with_capacity(MAX_VACCINE_KINDS),
            total_doses: 0,
            pending: Vec::new(),
            reserved_doses: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
    }

    pub fn distributions(&self) -> &[VaccineDistribution] {
        &self.distributions
    }

    pub fn number_of_distributions(&self) -> usize {
        self.distributions.len()
    }

    /// Total doses on hand across all distributions.
    pub fn available_doses(&self) -> u32 {
        self.total_doses
    }

    /// Doses on hand for `code_name`.
    ///
    /// When more than one distribution carries the code name (same product
    /// shipped under different manufacturers), the count of the most recently
    /// added of them is returned, not their sum.
    pub fn available_doses_of(&self, code_name: &str) -> u32 {
        self.distributions
            .iter()
            .rev()
            .find(|d| d.vaccine().code_name() == code_name)
            .map_or(0, VaccineDistribution::doses)
    }

    pub fn reserved_doses(&self) -> u32 {
        self.reserved_doses
    }

    pub fn pending_appointments(&self) -> &[Uuid] {
        &self.pending
    }

    // ── Supply ───────────────────────────────────────────────

    /// Receive `doses` of `vaccine`.
    ///
    /// Doses from a manufacturer already stocked here are merged into that
    /// distribution, keeping its position. Nothing changes on error.
    pub fn add_distribution(&mut self, vaccine: Vaccine, doses: u32) -> Result<(), SiteError> {
        if !vaccine.recognized() {
            tracing::warn!(
                site = %self.name,
                code_name = vaccine.code_name(),
                "Rejected distribution of unrecognized vaccine"
            );
            return Err(SiteError::UnrecognizedVaccineCodeName(
                vaccine.code_name().to_string(),
            ));
        }

        let new_total = self
            .total_doses
            .checked_add(doses)
            .filter(|total| *total <= self.limit)
            .ok_or(SiteError::DistributionLimitExceeded {
                doses,
                limit: self.limit,
            })?;

        match self
            .distributions
            .iter()
            .position(|d| d.vaccine().manufacturer() == vaccine.manufacturer())
        {
            Some(index) => {
                let existing = &mut self.distributions[index];
                existing.set_doses(existing.doses() + doses);
            }
            None => {
                if self.distributions.len() >= MAX_VACCINE_KINDS {
                    return Err(SiteError::CapacityExceeded {
                        collection: "distributions".into(),
                        limit: MAX_VACCINE_KINDS,
                    });
                }
                self.distributions.push(VaccineDistribution::new(vaccine.clone(), doses));
            }
        }
        self.total_doses = new_total;

        tracing::info!(
            site = %self.name,
            code_name = vaccine.code_name(),
            manufacturer = vaccine.manufacturer(),
            doses,
            total = self.total_doses,
            "Distribution received"
        );
        Ok(())
    }

    // ── Appointments ─────────────────────────────────────────

    /// Reserve a dose for the patient behind `record`.
    ///
    /// The record's appointment status is updated whether or not the
    /// booking goes through: `Fail` plus this site's name on error.
    pub fn book_appointment(&mut self, record: &mut HealthRecord) -> Result<(), SiteError> {
        if self.total_doses == 0 || self.reserved_doses >= self.total_doses {
            record.set_appointment(AppointmentStatus::Fail, &self.name);
            tracing::warn!(
                site = %self.name,
                patient = record.patient(),
                "Appointment rejected: no unreserved doses"
            );
            return Err(SiteError::InsufficientDoses(self.name.clone()));
        }

        let already_booked = self.pending.iter().filter(|id| **id == record.id()).count();
        if record.number_of_doses() + already_booked >= record.limit() {
            record.set_appointment(AppointmentStatus::Fail, &self.name);
            tracing::warn!(
                site = %self.name,
                patient = record.patient(),
                limit = record.limit(),
                "Appointment rejected: dose history has no room"
            );
            return Err(ModelError::CapacityExceeded {
                collection: "dose history".into(),
                limit: record.limit(),
            }
            .into());
        }

        if self.pending.len() >= MAX_APPOINTMENTS {
            record.set_appointment(AppointmentStatus::Fail, &self.name);
            tracing::warn!(
                site = %self.name,
                patient = record.patient(),
                "Appointment rejected: booking queue full"
            );
            return Err(SiteError::CapacityExceeded {
                collection: "appointments".into(),
                limit: MAX_APPOINTMENTS,
            });
        }

        record.set_appointment(AppointmentStatus::Success, &self.name);
        self.pending.push(record.id());
        self.reserved_doses += 1;

        tracing::info!(
            site = %self.name,
            patient = record.patient(),
            reserved = self.reserved_doses,
            "Appointment booked"
        );
        Ok(())
    }

    /// Drop the earliest pending booking for `record_id` and release its dose.
    ///
    /// The record's appointment status is left as it was.
    pub fn cancel_appointment(&mut self, record_id: Uuid) -> Result<(), SiteError> {
        let index = self
            .pending
            .iter()
            .position(|id| *id == record_id)
            .ok_or(SiteError::AppointmentNotFound(record_id))?;
        self.pending.remove(index);
        self.reserved_doses -= 1;

        tracing::info!(
            site = %self.name,
            record = %record_id,
            reserved = self.reserved_doses,
            "Appointment cancelled"
        );
        Ok(())
    }

    /// Give every pending appointment its dose, dated `date`.
    ///
    /// Returns the number of doses administered. The whole batch is checked
    /// up front; if any appointment cannot be served, neither the site nor
    /// any record is modified.
    pub fn administer(&mut self, date: &str, store: &mut HealthRecordStore) -> Result<usize, SiteError> {
        if self.pending.is_empty() {
            return Ok(0);
        }
        self.check_batch(store)?;

        let site_name = self.name.clone();
        let pending = std::mem::take(&mut self.pending);
        for id in &pending {
            let index = self
                .distributions
                .iter()
                .position(|d| d.doses() > 0)
                .ok_or(SiteError::DosesUnavailable {
                    available: 0,
                    pending: pending.len(),
                })?;
            let record = store.get_mut(id).ok_or(SiteError::UnknownRecord(*id))?;

            let distribution = &mut self.distributions[index];
            distribution.set_doses(distribution.doses() - 1);
            self.total_doses -= 1;
            record.add_record(distribution.vaccine(), &site_name, date)?;

            tracing::debug!(
                site = %site_name,
                patient = record.patient(),
                code_name = distribution.vaccine().code_name(),
                "Dose administered"
            );
        }
        self.reserved_doses = 0;

        tracing::info!(
            site = %site_name,
            administered = pending.len(),
            remaining = self.total_doses,
            date,
            "Administration batch complete"
        );
        Ok(pending.len())
    }

    /// Verify stock, record presence and history room for the pending batch.
    fn check_batch(&self, store: &HealthRecordStore) -> Result<(), SiteError> {
        let available: u64 = self.distributions.iter().map(|d| u64::from(d.doses())).sum();
        if available < self.pending.len() as u64 || (self.total_doses as usize) < self.pending.len() {
            tracing::error!(
                site = %self.name,
                available,
                pending = self.pending.len(),
                "Reserved doses exceed stock"
            );
            return Err(SiteError::DosesUnavailable {
                available,
                pending: self.pending.len(),
            });
        }

        let mut per_record: HashMap<Uuid, usize> = HashMap::new();
        for id in &self.pending {
            *per_record.entry(*id).or_default() += 1;
        }
        for (id, doses) in per_record {
            let record = store.get(&id).ok_or(SiteError::UnknownRecord(id))?;
            if record.number_of_doses() + doses > record.limit() {
                return Err(ModelError::CapacityExceeded {
                    collection: "dose history".into(),
                    limit: record.limit(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl fmt::Display for VaccinationSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supplies = self
            .distributions
            .iter()
            .map(|d| format!("{} doses of {}", d.doses(), d.vaccine().manufacturer()))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} has {} available doses: <{}>",
            self.name, self.total_doses, supplies
        )
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

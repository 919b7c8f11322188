//! Patient-record store.
//!
//! Owns every `HealthRecord`. Vaccination sites never hold records
//! themselves; a booking keeps only the record's id, and administration
//! looks the record up here when the dose is given.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::HealthRecord;

// ═══════════════════════════════════════════════════════════
// HealthRecordStore
// ═══════════════════════════════════════════════════════════

/// In-memory store of health records keyed by record id.
#[derive(Debug, Default)]
pub struct HealthRecordStore {
    records: HashMap<Uuid, HealthRecord>,
}

impl HealthRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Take ownership of a record. Returns its id.
    /// A record with the same id is replaced.
    pub fn insert(&mut self, record: HealthRecord) -> Uuid {
        let id = record.id();
        self.records.insert(id, record);
        id
    }

    /// Create and store a new record for `patient`.
    pub fn create(&mut self, patient: impl Into<String>, limit: usize) -> Uuid {
        self.insert(HealthRecord::new(patient, limit))
    }

    pub fn get(&self, id: &Uuid) -> Option<&HealthRecord> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut HealthRecord> {
        self.records.get_mut(id)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.records.contains_key(id)
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<HealthRecord> {
        self.records.remove(id)
    }

    /// First record whose patient name matches.
    pub fn find_by_patient(&self, patient: &str) -> Option<&HealthRecord> {
        self.records.values().find(|r| r.patient() == patient)
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.records.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

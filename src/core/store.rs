use crate::domain::model::DomainRecord;
use crate::domain::ports::RecordSource;
use chrono::NaiveDateTime;

/// Append-only, insertion-ordered record collection.
///
/// Ids are not checked for uniqueness and names/owners are not validated.
#[derive(Debug, Clone, Default)]
pub struct DomainStore {
    records: Vec<DomainRecord>,
}

impl DomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        id: i64,
        name: impl Into<String>,
        owner: impl Into<String>,
        start_date: NaiveDateTime,
    ) {
        let record = DomainRecord::new(id, name, owner, start_date);
        tracing::trace!(id, name = record.name(), expiry = %record.expiry_date(), "record inserted");
        self.records.push(record);
    }

    pub fn all_records(&self) -> &[DomainRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for DomainStore {
    fn records(&self) -> &[DomainRecord] {
        self.all_records()
    }
}

impl FromIterator<DomainRecord> for DomainStore {
    fn from_iter<I: IntoIterator<Item = DomainRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

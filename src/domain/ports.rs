use crate::domain::model::DomainRecord;
use chrono::{Local, NaiveDateTime};

/// Read access to an ordered set of records.
pub trait RecordSource {
    fn records(&self) -> &[DomainRecord];
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn records(&self) -> &[DomainRecord] {
        (**self).records()
    }
}

impl RecordSource for [DomainRecord] {
    fn records(&self) -> &[DomainRecord] {
        self
    }
}

impl RecordSource for Vec<DomainRecord> {
    fn records(&self) -> &[DomainRecord] {
        self
    }
}

/// Supplies "now" to the presentation layer.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

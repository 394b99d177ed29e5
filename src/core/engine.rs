use crate::core::search;
use crate::domain::model::{Bucket, BucketFlags, ClassificationWindow, DomainRecord};
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use std::collections::HashSet;

/// Read-only classification and search over a record source.
///
/// Every query takes `now` explicitly; nothing here reads the wall clock
/// or mutates the source.
#[derive(Debug, Clone)]
pub struct ExpiryEngine<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> ExpiryEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn records(&self) -> &[DomainRecord] {
        self.source.records()
    }

    /// `now < expiry <= now + 7d`
    pub fn get_7_day_domains(&self, now: NaiveDateTime) -> Vec<String> {
        self.names_in(ClassificationWindow::SEVEN_DAY, now)
    }

    /// `now + 7d < expiry <= now + 30d`, minus any name in the 7-day list.
    ///
    /// Unlike the other classifiers this is a set difference: each name
    /// appears once, in first-seen order.
    pub fn get_30_day_domains(&self, now: NaiveDateTime) -> Vec<String> {
        let seven_day = self.get_7_day_domains(now);
        let mut seen: HashSet<String> = seven_day.into_iter().collect();
        let mut thirty_day = self.names_in(ClassificationWindow::THIRTY_DAY, now);
        thirty_day.retain(|name| seen.insert(name.clone()));
        thirty_day
    }

    /// `expiry <= now`. Overlaps the redemption window.
    pub fn get_expired_domains(&self, now: NaiveDateTime) -> Vec<String> {
        self.names_in(ClassificationWindow::EXPIRED, now)
    }

    /// `now - 4d < expiry <= now - 2d`
    pub fn get_redemption_domains(&self, now: NaiveDateTime) -> Vec<String> {
        self.names_in(ClassificationWindow::REDEMPTION, now)
    }

    pub fn search(&self, term: Option<&str>) -> Result<Vec<&DomainRecord>> {
        search::search(self.records(), term)
    }

    /// Computes all four lists once so a render pass can share them.
    pub fn snapshot(&self, now: NaiveDateTime) -> BucketSnapshot {
        let snapshot = BucketSnapshot {
            now,
            seven_day: self.get_7_day_domains(now),
            thirty_day: self.get_30_day_domains(now),
            expired: self.get_expired_domains(now),
            redemption: self.get_redemption_domains(now),
        };

        tracing::debug!(
            %now,
            records = self.records().len(),
            seven_day = snapshot.seven_day.len(),
            thirty_day = snapshot.thirty_day.len(),
            expired = snapshot.expired.len(),
            redemption = snapshot.redemption.len(),
            "classified domains"
        );
        snapshot
    }

    fn names_in(&self, window: ClassificationWindow, now: NaiveDateTime) -> Vec<String> {
        self.records()
            .iter()
            .filter(|record| window.contains(record.expiry_date(), now))
            .map(|record| record.name().to_string())
            .collect()
    }
}

/// The four classified name lists for one `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSnapshot {
    pub now: NaiveDateTime,
    pub seven_day: Vec<String>,
    pub thirty_day: Vec<String>,
    pub expired: Vec<String>,
    pub redemption: Vec<String>,
}

impl BucketSnapshot {
    /// Membership is by name, so records sharing a name share flags.
    pub fn flags_for(&self, name: &str) -> BucketFlags {
        let listed = |names: &[String]| names.iter().any(|n| n == name);
        BucketFlags {
            thirty_day: listed(&self.thirty_day),
            seven_day: listed(&self.seven_day),
            expired: listed(&self.expired),
            redemption: listed(&self.redemption),
        }
    }

    pub fn bucket_for(&self, name: &str) -> Bucket {
        self.flags_for(name).primary()
    }
}

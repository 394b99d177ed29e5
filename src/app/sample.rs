use crate::core::store::DomainStore;
use crate::utils::datetime::shift_days;
use chrono::{Months, NaiveDateTime};

/// Demo registrations spread across every bucket, as `(id, name, owner, start offset in days)`.
/// `None` means exactly one calendar year before `now`.
const SAMPLE_DOMAINS: [(i64, &str, &str, Option<i64>); 10] = [
    (1, "active.com", "Alex Active", None),
    (2, "thirty.com", "Tim Thirty", Some(-360)),
    (3, "seven.net", "Sam Seven", Some(-363)),
    (4, "justexpired.org", "James Just", Some(-366)),
    (5, "redemption.io", "Rachel Rays", Some(-368)),
    (6, "newactive.site", "Ned New", Some(-300)),
    (7, "another30.com", "Alice Another", Some(-330)),
    (8, "another7.net", "Bob Another", Some(-353)),
    (9, "longexpired.org", "Larry Long", Some(-400)),
    (10, "longredem.io", "Lila Long", Some(-370)),
];

pub fn seed_sample_domains(store: &mut DomainStore, now: NaiveDateTime) {
    for (id, name, owner, offset) in SAMPLE_DOMAINS {
        let start = match offset {
            Some(days) => shift_days(now, days),
            None => now.checked_sub_months(Months::new(12)).unwrap_or(NaiveDateTime::MIN),
        };
        store.insert(id, name, owner, start);
    }
    tracing::info!(count = SAMPLE_DOMAINS.len(), "seeded sample domains");
}

use crate::utils::datetime::{one_year_after, shift_days};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// One tracked registration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRecord {
    id: i64,
    name: String,
    owner: String,
    start_date: NaiveDateTime,
    expiry_date: NaiveDateTime,
}

impl DomainRecord {
    /// Builds a record on a fixed one-year term.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        owner: impl Into<String>,
        start_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            owner: owner.into(),
            start_date,
            expiry_date: one_year_after(start_date),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    pub fn expiry_date(&self) -> NaiveDateTime {
        self.expiry_date
    }
}

/// Day offsets `(lower, upper]` around `now`. A `None` lower bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationWindow {
    pub lower_days: Option<i64>,
    pub upper_days: i64,
}

impl ClassificationWindow {
    pub const SEVEN_DAY: Self = Self {
        lower_days: Some(0),
        upper_days: 7,
    };
    pub const THIRTY_DAY: Self = Self {
        lower_days: Some(7),
        upper_days: 30,
    };
    pub const EXPIRED: Self = Self {
        lower_days: None,
        upper_days: 0,
    };
    pub const REDEMPTION: Self = Self {
        lower_days: Some(-4),
        upper_days: -2,
    };

    /// `now + lower < expiry <= now + upper`
    pub fn contains(&self, expiry: NaiveDateTime, now: NaiveDateTime) -> bool {
        let above_lower = match self.lower_days {
            Some(lower) => expiry > shift_days(now, lower),
            None => true,
        };
        above_lower && expiry <= shift_days(now, self.upper_days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bucket {
    Active,
    SevenDay,
    ThirtyDay,
    Expired,
    Redemption,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bucket::Active => "Active",
            Bucket::SevenDay => "7 Days",
            Bucket::ThirtyDay => "30 Days",
            Bucket::Expired => "Expired",
            Bucket::Redemption => "Redemption",
        };
        f.write_str(label)
    }
}

/// Per-name membership in each classified list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketFlags {
    pub thirty_day: bool,
    pub seven_day: bool,
    pub expired: bool,
    pub redemption: bool,
}

impl BucketFlags {
    /// Most urgent state; Redemption outranks Expired since it is the narrower window.
    pub fn primary(&self) -> Bucket {
        if self.redemption {
            Bucket::Redemption
        } else if self.expired {
            Bucket::Expired
        } else if self.seven_day {
            Bucket::SevenDay
        } else if self.thirty_day {
            Bucket::ThirtyDay
        } else {
            Bucket::Active
        }
    }

    pub fn is_active(&self) -> bool {
        !(self.seven_day || self.thirty_day || self.expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_expiry_is_one_year_after_start() {
        let record = DomainRecord::new(1, "example.com", "Ex Ample", noon(2023, 5, 10));
        assert_eq!(record.expiry_date(), noon(2024, 5, 10));
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let record = DomainRecord::new(0, "", "", noon(2023, 5, 10));
        assert_eq!(record.name(), "");
        assert_eq!(record.owner(), "");
    }

    #[test]
    fn test_window_bounds_are_half_open() {
        let now = noon(2024, 6, 1);
        let window = ClassificationWindow::SEVEN_DAY;

        assert!(!window.contains(now, now));
        assert!(window.contains(shift_days(now, 7), now));
        assert!(!window.contains(shift_days(now, 8), now));
    }

    #[test]
    fn test_open_lower_bound() {
        let now = noon(2024, 6, 1);
        assert!(ClassificationWindow::EXPIRED.contains(shift_days(now, -10_000), now));
        assert!(ClassificationWindow::EXPIRED.contains(now, now));
    }

    #[test]
    fn test_primary_bucket() {
        let flags = BucketFlags {
            expired: true,
            redemption: true,
            ..BucketFlags::default()
        };
        assert_eq!(flags.primary(), Bucket::Redemption);
        assert!(!flags.is_active());
        assert_eq!(BucketFlags::default().primary(), Bucket::Active);
        assert!(BucketFlags::default().is_active());
    }
}

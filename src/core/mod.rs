pub mod engine;
pub mod search;
pub mod store;

pub use crate::domain::model::{Bucket, BucketFlags, ClassificationWindow, DomainRecord};
pub use crate::domain::ports::{Clock, FixedClock, RecordSource, SystemClock};
pub use crate::utils::error::Result;

pub mod payloads;
pub mod provisioner;

pub use crate::domain::ports::{AnalyticsApi, TagManagerApi};
pub use crate::utils::error::Result;
pub use provisioner::Provisioner;

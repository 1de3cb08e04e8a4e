use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What `edit` does when the edited odometer end no longer matches the
/// start of the following row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChainPolicy {
    /// Write without looking at neighbouring rows.
    #[default]
    Ignore,
    /// Write, and report the gap.
    Warn,
    /// Refuse the write.
    Reject,
}

impl ChainPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainPolicy::Ignore => "ignore",
            ChainPolicy::Warn => "warn",
            ChainPolicy::Reject => "reject",
        }
    }
}

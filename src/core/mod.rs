pub mod backup;
pub mod derive;
pub mod form;
pub mod ledger;
pub mod log;
pub mod stats;

pub mod log;
pub mod migrate;
pub mod pool;
pub mod session;
pub mod sheet;
pub mod stats;

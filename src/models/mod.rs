pub mod cursor;
pub mod entry;
pub mod policy;

pub mod format;
pub mod token;

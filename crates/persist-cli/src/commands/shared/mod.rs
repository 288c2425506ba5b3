pub mod file;
pub mod limit;
pub mod lookup;

pub mod day;
pub mod dispatch;
pub mod import;
pub mod log;
pub mod probe;
pub mod programs;
pub mod schema;
pub mod shared;
pub mod validate;
pub mod wipe;

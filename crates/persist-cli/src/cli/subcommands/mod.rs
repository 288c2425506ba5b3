mod day;
mod log;

pub use day::DayCommands;
pub use log::LogCommands;

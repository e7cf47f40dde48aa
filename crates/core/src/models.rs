pub mod owner;
pub mod schedule;
pub mod weekday;

pub mod board;
pub mod calendar;
pub mod tasks;

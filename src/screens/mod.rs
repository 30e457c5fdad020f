//! Screen State
//!
//! Each screen's state as a plain struct with transition methods, plus the
//! async handlers that talk to the service. Components only wire signals.

pub mod day;
pub mod new_habit;

/// Weekday labels in display order, index 0 = Sunday
pub const WEEK_DAYS: [&str; 7] = [
    "Domingo",
    "Segunda-feira",
    "Terça-feira",
    "Quarta-feira",
    "Quinta-feira",
    "Sexta-feira",
    "Sábado",
];

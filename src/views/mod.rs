pub mod agenda;
pub mod month;
pub mod week;

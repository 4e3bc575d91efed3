pub mod checks;
pub mod resolve;

pub mod calculate;
pub mod check;
pub mod rate;

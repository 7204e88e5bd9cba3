pub mod algorithm;
pub mod gradient;

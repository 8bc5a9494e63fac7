pub mod answers;
pub mod quiz;
pub mod stats;

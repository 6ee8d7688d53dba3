pub mod common;
pub mod doctor;
pub mod log;
pub mod output;
pub mod scan;
pub mod stats;

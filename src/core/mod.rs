pub mod allocation;
pub mod method;
pub mod problem;

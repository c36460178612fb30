pub mod basis;

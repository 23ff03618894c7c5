pub mod error;
pub mod payroll;

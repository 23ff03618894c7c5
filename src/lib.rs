pub mod api;
pub mod config;
pub mod docs;
pub mod model;
pub mod payroll;
pub mod routes;

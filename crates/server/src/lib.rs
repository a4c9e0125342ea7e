pub mod errors;
pub mod metrics;
pub mod page;
pub mod routes;
pub mod startup;

pub use startup::run;

pub mod alerts;
pub mod assessment;
pub mod currency;
pub mod error;
pub mod risk;
pub mod stats;
pub mod strategy;
pub mod trade;
pub mod user;
pub mod validation;

//! One module per entity. Each turns a request into repository calls and
//! wraps the outcome in response events; failures become failure events.

pub mod continents;
pub mod countries;
pub mod regions;

// Domain layer: entities, search filters, events and ports. No database types here.

pub mod events;
pub mod model;
pub mod ports;

// HTTP handlers, one module per resource

pub mod goals;
pub mod health;
pub mod scorers;
pub mod teams;

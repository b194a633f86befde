// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod goal;
pub mod repositories;
pub mod scorers;
pub mod team;

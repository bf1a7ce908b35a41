//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod actor;
pub mod driver_profile;
pub mod trip;
pub mod vehicle;

pub use actor::{Actor, ActorRole, UserRole};
pub use driver_profile::DriverProfile;
pub use trip::{Trip, TripStatus};
pub use vehicle::Vehicle;

//! DTOs de la API
//!
//! Tipos de request y response por recurso.

pub mod auth_dto;
pub mod driver_dto;
pub mod trip_dto;
pub mod vehicle_dto;

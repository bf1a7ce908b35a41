//! Ride Hailing - Backend API
//!
//! Backend de ride-hailing que coordina pasajeros, conductores y el ciclo
//! de vida de los viajes (solicitar / aceptar / completar / cancelar) sobre
//! PostgreSQL, con autenticación JWT y autorización por rol.

pub mod config;
pub mod state;
pub mod database;
pub mod utils;
pub mod models;
pub mod middleware;
pub mod controllers;
pub mod repositories;
pub mod routes;
pub mod dto;

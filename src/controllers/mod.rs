//! Controladores de la aplicación
//!
//! Cada controlador evalúa las guardas de su operación y delega el SQL
//! en su repositorio.

pub mod auth_controller;
pub mod driver_controller;
pub mod trip_controller;
pub mod vehicle_controller;

pub use auth_controller::AuthController;
pub use driver_controller::DriverController;
pub use trip_controller::TripController;
pub use vehicle_controller::VehicleController;

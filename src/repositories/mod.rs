//! Repositorios de acceso a datos
//!
//! Todo el SQL del sistema vive aquí; las transiciones de estado de los
//! viajes se materializan como UPDATEs compare-and-swap.

pub mod actor_repository;
pub mod driver_repository;
pub mod trip_repository;
pub mod vehicle_repository;

pub use actor_repository::ActorRepository;
pub use driver_repository::DriverRepository;
pub use trip_repository::TripRepository;
pub use vehicle_repository::VehicleRepository;

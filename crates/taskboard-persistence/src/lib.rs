pub mod gateway;
pub mod migration;
pub mod serialization;
pub mod store;
pub mod traits;

pub use gateway::BoardGateway;
pub use migration::Migrator;
pub use serialization::*;
pub use store::*;
pub use traits::*;

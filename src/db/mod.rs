pub mod backup;
pub mod gateway;
pub mod initialize;
pub mod log;
pub mod pool;

pub use gateway::{SqliteGateway, StoreGateway};

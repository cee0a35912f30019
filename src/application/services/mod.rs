pub mod inventory_service;
pub mod optimistic_store;

pub use inventory_service::InventoryService;
pub use optimistic_store::{OptimisticStore, Settlement};

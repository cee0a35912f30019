pub mod inventory_handler;

pub use inventory_handler::InventoryHandler;

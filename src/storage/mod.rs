// storage/mod.rs
// Evaluation history persistence

pub mod history;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod test_helpers;

// Re-export commonly used items
pub use history::{HistoryStore, SqliteHistoryStore};
pub use memory::InMemoryHistoryStore;
pub use migrations::run_migrations;
pub use pool::init_db_pool_with_path;

pub mod save_worker;
pub mod store;

pub use save_worker::SaveWorker;
pub use store::TaskBoardStore;

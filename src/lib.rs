// tasklist - In-memory task list with filtering, editing, timers and completion tracking

pub mod command;
pub mod config;
pub mod filter;
pub mod id;
pub mod seed;
pub mod store;
pub mod task;
pub mod view;

// Re-export main types for convenience
pub use command::Command;
pub use config::Config;
pub use filter::FilterState;
pub use id::IdSequence;
pub use seed::{SeedTask, load_seed};
pub use store::TaskStore;
pub use task::{Change, Field, FieldValue, Task, TaskId};

pub mod task;

pub use task::{Category, Task, TaskId};

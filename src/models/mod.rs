pub mod task;
pub mod user;

pub use task::{Pagination, Task, TaskInput, TaskPatch, TaskQuery};
pub use user::{PublicUser, User};

pub mod status;
pub mod task;
pub mod week;

pub use status::TaskStatus;
pub use task::{RawTask, Task, normalize_task, validate_input};
pub use week::WeekWindow;

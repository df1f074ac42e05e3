pub mod error;
pub mod models;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::board::Board;
pub use models::merge_record::SprintMergeRecord;
pub use models::sprint_name::sprint_list_names;
pub use models::sprint_task::{SprintList, SprintTask, parse_task_array};

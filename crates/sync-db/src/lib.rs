pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::board_repository::BoardRepository;
pub use repositories::merge_record_repository::MergeRecordRepository;
pub use repositories::team_member_repository::TeamMemberRepository;

#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{create_test_board, create_test_member, seed_test_record};
pub use test_db::create_test_pool;

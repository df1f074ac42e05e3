pub mod board_repository;
pub mod merge_record_repository;
pub mod team_member_repository;

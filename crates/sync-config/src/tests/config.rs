use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_loaded_then_defaults_apply() {
    let (_temp, _guard) = setup_config_dir();

    let config = Config::load().unwrap();

    assert_that!(config.schedule.week_start.as_str(), eq("sunday"));
    assert_that!(config.schedule.utc_offset.as_str(), eq("GMT+2"));
    assert_that!(config.scheduler.interval_secs, eq(3600));
    assert_that!(config.database.path.as_str(), eq("data.db"));
    assert_that!(config.board_api.api_key, none());
}

#[test]
#[serial]
fn given_config_toml_when_loaded_then_file_values_apply() {
    let (temp, _guard) = setup_config_dir();

    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [schedule]
            week_start = "monday"
            utc_offset = "UTC-5"

            [scheduler]
            interval_secs = 600

            [board_api]
            base_url = "http://boards.internal:9000"
        "#,
    )
    .unwrap();

    let config = Config::load().unwrap();

    assert_that!(config.schedule.week_start.as_str(), eq("monday"));
    assert_that!(config.schedule.utc_offset.as_str(), eq("UTC-5"));
    assert_that!(config.scheduler.interval_secs, eq(600));
    assert_that!(
        config.board_api.base_url.as_str(),
        eq("http://boards.internal:9000")
    );
    // Untouched sections keep their defaults
    assert_that!(config.ai.model.as_str(), eq("gpt-4o-mini"));
}

#[test]
#[serial]
fn given_env_overrides_when_loaded_then_they_win_over_file_and_defaults() {
    let (temp, _guard) = setup_config_dir();

    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [schedule]
            week_start = "monday"
        "#,
    )
    .unwrap();

    let _week = EnvGuard::set("SYNC_SCHEDULE_WEEK_START", "friday");
    let _interval = EnvGuard::set("SYNC_SCHEDULER_INTERVAL_SECS", "900");
    let _key = EnvGuard::set("SYNC_AI_API_KEY", "sk-test");

    let config = Config::load().unwrap();

    assert_that!(config.schedule.week_start.as_str(), eq("friday"));
    assert_that!(config.scheduler.interval_secs, eq(900));
    assert_that!(config.ai.api_key, some(eq("sk-test")));
}

#[test]
#[serial]
fn given_malformed_toml_when_loaded_then_error_names_the_file() {
    let (temp, _guard) = setup_config_dir();

    std::fs::write(temp.path().join("config.toml"), "not [valid toml").unwrap();

    let result = Config::load();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("config.toml")
    );
}

#[test]
#[serial]
fn given_config_dir_env_when_resolved_then_database_path_is_under_it() {
    let (temp, _guard) = setup_config_dir();

    let config = Config::load().unwrap();
    let db_path = config.database_path().unwrap();

    assert_that!(db_path.starts_with(temp.path()), eq(true));
    assert_that!(db_path.ends_with("data.db"), eq(true));
}

extern crate hamcrest2;

#[cfg(test)]
mod config_file_spec {
    use std::env;
    use std::fs;
    use temp_testdir::TempDir;
    use crate::libs::config_file::config_file::ConfigurationStore;
    use hamcrest2::prelude::*;
    use std::path::Path;

    #[ctor::ctor]
    fn before_each() {
        env::set_var("RUST_LOG", "debug");
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[ctor::dtor]
    fn after_each() {}

    fn temp_config_dir() -> (Box<Path>, TempDir) {
        // Return both objects as if temp_dir is not moved back to the caller, it'll drop and
        // delete.
        let temp_dir = TempDir::default();
        let temp = temp_dir.to_path_buf();
        assert_that!(temp.as_path(), dir_exists());

        (temp.into_boxed_path(), temp_dir)
    }

    #[test]
    fn new_config_creates_a_toml_file() {
        let (temp, _temp_dir) = temp_config_dir();
        let config = ConfigurationStore::new(temp).unwrap();

        let config_file_path = config.get_config_file_path();
        assert_that!(config_file_path, path_exists());
        assert_that!(config_file_path, file_exists());
        assert_that!(config_file_path.to_string_lossy(), matches_regex("graycode.toml$"));
    }

    #[test]
    fn default_settings() {
        let (temp, _temp_dir) = temp_config_dir();
        let config = ConfigurationStore::new(temp.clone()).unwrap();

        assert_that!(config.get_show_misinterpretation(), eq(true));
        assert_that!(config.get_pause_after_result(), eq(true));
        assert_that!(config.get_table_bits(), eq(4));
    }

    #[test]
    fn settings_can_be_changed_persisted_and_reloaded() {
        let (temp, _temp_dir) = temp_config_dir();
        let mut config = ConfigurationStore::new(temp.clone()).unwrap();

        config.set_show_misinterpretation(false).unwrap();
        config.set_pause_after_result(false).unwrap();
        config.set_table_bits(6).unwrap();

        assert_that!(config.get_show_misinterpretation(), eq(false));
        assert_that!(config.get_pause_after_result(), eq(false));
        assert_that!(config.get_table_bits(), eq(6));

        let reread_config = ConfigurationStore::new(temp.clone()).unwrap();

        assert_that!(reread_config.get_show_misinterpretation(), eq(false));
        assert_that!(reread_config.get_pause_after_result(), eq(false));
        assert_that!(reread_config.get_table_bits(), eq(6));
    }

    #[test]
    fn table_bits_out_of_range_are_rejected_and_not_stored() {
        let (temp, _temp_dir) = temp_config_dir();
        let mut config = ConfigurationStore::new(temp.clone()).unwrap();

        assert_that!(config.set_table_bits(0), err());
        assert_that!(config.set_table_bits(17), err());
        assert_that!(config.get_table_bits(), eq(4));
    }

    #[test]
    fn unparseable_config_file_is_an_error() {
        let (temp, _temp_dir) = temp_config_dir();
        let config = ConfigurationStore::new(temp.clone()).unwrap();
        fs::write(config.get_config_file_path(), "[display\nbroken").unwrap();

        let result = ConfigurationStore::new(temp.clone());
        assert!(result.is_err());
        assert_that!(result.err().unwrap().as_str(), matches_regex("Could not parse config file"));
    }
}

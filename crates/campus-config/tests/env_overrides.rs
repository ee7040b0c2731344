use campus_config::{CampusConfig, ConfigError};
use figment::Jail;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_AUTH__LATENCY_MS", "0");
        jail.set_env("CAMPUS_EVENTS__ENFORCE_CAPACITY", "false");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.auth.latency_ms, 0);
        assert!(!config.events.enforce_capacity);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".campusroot")?;
        jail.create_file(
            ".campusroot/config.toml",
            "[auth]\nadmin_email = \"toml@campus.edu\"\n",
        )?;
        jail.set_env("CAMPUS_AUTH__ADMIN_EMAIL", "env@campus.edu");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.auth.admin_email, "env@campus.edu");
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation_on_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".campusroot")?;
        jail.create_file(
            ".campusroot/config.toml",
            "[donations]\npreset_amounts = []\n",
        )?;

        let err = CampusConfig::load().expect_err("empty presets should fail");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sprach_config::{ConfigError, CoverageBasis, SprachConfig};

#[test]
fn loads_evaluator_thresholds_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[evaluator]
min_coverage = 0.5
max_extra = 3
max_core_extra = 2
coverage_basis = "lemma"
near_miss_max_mismatch = 2
"#,
        )?;

        let config: SprachConfig = Figment::from(Serialized::defaults(SprachConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!((config.evaluator.min_coverage - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.evaluator.max_extra, 3);
        assert_eq!(config.evaluator.max_core_extra, 2);
        assert_eq!(config.evaluator.max_modifier_extra, 2);
        assert_eq!(config.evaluator.coverage_basis, CoverageBasis::Lemma);
        assert_eq!(config.evaluator.near_miss_max_mismatch, 2);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sprach")?;
        jail.create_file(
            ".sprach/config.toml",
            r#"
[server]
bind = "0.0.0.0:9000"
workers = 8
allowed_origins = ["https://app.example"]

[lexicon]
path = "words.txt"
max_edit_distance = 1
"#,
        )?;

        let config = SprachConfig::load(None).expect("config should load");
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.workers, 8);
        assert_eq!(config.server.allowed_origins, vec!["https://app.example".to_string()]);
        assert!(config.lexicon.is_configured());
        assert_eq!(config.lexicon.max_edit_distance, 1);
        Ok(())
    });
}

#[test]
fn explicit_file_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sprach")?;
        jail.create_file(".sprach/config.toml", "[annotator]\ntimeout_secs = 5\n")?;
        jail.create_file("custom.toml", "[annotator]\ntimeout_secs = 30\n")?;

        let config = SprachConfig::load(Some(std::path::Path::new("custom.toml")))
            .expect("config should load");
        assert_eq!(config.annotator.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = SprachConfig::load(Some(std::path::Path::new("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn out_of_range_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sprach")?;
        jail.create_file(".sprach/config.toml", "[server]\nworkers = 0\n")?;

        let result = SprachConfig::load(None);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "server.workers"
        ));
        Ok(())
    });
}

#[test]
fn empty_toml_uses_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "")?;

        let config: SprachConfig = Figment::from(Serialized::defaults(SprachConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config, SprachConfig::default());
        Ok(())
    });
}

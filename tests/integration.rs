// SPDX-License-Identifier: MPL-2.0
use iced_gallery::api::ApiSettings;
use iced_gallery::config::{self, Config, GeneralConfig, ImageType, Orientation};
use iced_gallery::i18n::fluent::I18n;
use std::path::Path;
use tempfile::tempdir;

fn write_settings(config: &Config, path: &Path) {
    let content = toml::to_string_pretty(config).expect("config should serialize");
    std::fs::write(path, content).expect("Failed to write config file");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let english_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    write_settings(&english_config, &temp_config_file_path);

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("load-more-button"), "Load more");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    write_settings(&french_config, &temp_config_file_path);

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("load-more-button"), "Charger plus");
}

#[test]
fn every_locale_translates_every_english_key() {
    let english = I18n::new(Some("en-US".to_string()), None, &Config::default());
    let keys = [
        "window-title",
        "search-placeholder",
        "search-button",
        "load-more-button",
        "end-button",
        "gallery-empty-hint",
        "error-no-results-hint",
        "error-request-failed",
        "modal-close",
        "modal-load-error",
        "notification-empty-query",
        "notification-config-load-error",
        "notification-missing-api-key",
        "notification-client-error",
    ];

    for locale in &english.available_locales {
        let i18n = I18n::new(Some(locale.to_string()), None, &Config::default());
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING"),
                "{locale} is missing {key}"
            );
        }
        let no_results = i18n.tr_with_args("error-no-results", &[("query", "cats")]);
        assert!(no_results.contains("cats"), "{locale}: {no_results}");
    }
}

#[test]
fn settings_file_drives_request_parameters() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        r#"
[api]
endpoint = "https://images.example.test/api/"
key = "file-key"
per_page = 40
image_type = "illustration"
orientation = "vertical"
"#,
    )
    .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.api.image_type, Some(ImageType::Illustration));
    assert_eq!(loaded.api.orientation, Some(Orientation::Vertical));

    let settings = ApiSettings::from_config(&loaded, Some("cli-key".to_string()));
    assert_eq!(settings.key, "cli-key");
    assert_eq!(settings.per_page, 40);

    let url = iced_gallery::api::client::request_url(&settings, "red fox", 2)
        .expect("valid url");
    assert_eq!(url.host_str(), Some("images.example.test"));
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert!(pairs.contains(&("q".to_string(), "red fox".to_string())));
    assert!(pairs.contains(&("page".to_string(), "2".to_string())));
    assert!(pairs.contains(&("per_page".to_string(), "40".to_string())));
    assert!(pairs.contains(&("image_type".to_string(), "illustration".to_string())));
    assert!(pairs.contains(&("orientation".to_string(), "vertical".to_string())));
}

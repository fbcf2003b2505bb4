// SPDX-License-Identifier: MPL-2.0
use pixgrid::api::{ImageRecord, SearchPage};
use pixgrid::config::{self, Config};
use pixgrid::error::Error;
use pixgrid::gallery::{Applied, Effect, Phase, State};
use pixgrid::i18n::fluent::I18n;
use pixgrid::ui::theming::ThemeMode;
use tempfile::tempdir;

fn record(id: u64) -> ImageRecord {
    ImageRecord {
        id,
        thumbnail_url: format!("https://cdn.example/thumb-{id}.jpg"),
        full_url: format!("https://cdn.example/full-{id}.jpg"),
        tags: String::new(),
    }
}

fn page(ids: &[u64], total_hits: u64) -> SearchPage {
    SearchPage {
        hits: ids.iter().copied().map(record).collect(),
        total_hits,
    }
}

#[test]
fn search_then_load_more_accumulates_pages() {
    let mut state = State::new();

    let Effect::Fetch(first) = state.submit("  Cats ") else {
        panic!("submit must request a fetch");
    };
    assert_eq!(first.keyword, "cats");
    assert_eq!(first.page, 1);
    assert_eq!(state.phase(), Phase::Loading);

    assert_eq!(
        state.apply_fetch(first.seq, Ok(page(&[1, 2, 3, 4, 5], 120))),
        Applied::Applied
    );
    assert_eq!(state.phase(), Phase::Loaded);
    assert_eq!(state.items().len(), 5);
    assert!(state.can_load_more());

    let Effect::Fetch(second) = state.load_more() else {
        panic!("load_more must request a fetch");
    };
    assert_eq!(second.page, 2);
    assert!(!state.can_load_more());

    assert_eq!(
        state.apply_fetch(second.seq, Ok(page(&[6, 7, 8], 120))),
        Applied::Applied
    );
    assert_eq!(state.items().len(), 8);
    assert_eq!(state.page(), 2);
}

#[test]
fn zero_hit_search_reports_no_results_with_the_keyword() {
    let mut state = State::new();

    let Effect::Fetch(query) = state.submit("zzzzz") else {
        panic!("submit must request a fetch");
    };
    state.apply_fetch(query.seq, Ok(page(&[], 0)));

    assert_eq!(state.phase(), Phase::Empty);
    assert_eq!(
        state.error_message().as_deref(),
        Some("No images found for zzzzz")
    );
}

#[test]
fn response_of_a_superseded_search_never_lands() {
    let mut state = State::new();

    let Effect::Fetch(old) = state.submit("cats") else {
        panic!("submit must request a fetch");
    };
    let Effect::Fetch(new) = state.submit("dogs") else {
        panic!("submit must request a fetch");
    };

    assert_eq!(state.apply_fetch(old.seq, Ok(page(&[1], 1))), Applied::Stale);
    assert!(state.items().is_empty());
    assert_eq!(state.keyword(), "dogs");

    assert_eq!(
        state.apply_fetch(new.seq, Ok(page(&[2, 3], 2))),
        Applied::Applied
    );
    assert_eq!(state.items().len(), 2);
}

#[test]
fn failed_load_more_keeps_results_and_page() {
    let mut state = State::new();

    let Effect::Fetch(first) = state.submit("cats") else {
        panic!("submit must request a fetch");
    };
    state.apply_fetch(first.seq, Ok(page(&[1, 2], 50)));

    let Effect::Fetch(more) = state.load_more() else {
        panic!("load_more must request a fetch");
    };
    state.apply_fetch(more.seq, Err(Error::Network("timeout".to_owned())));

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.page(), 1);

    // The next load_more retries the same page.
    let Effect::Fetch(retry) = state.load_more() else {
        panic!("load_more must request a fetch");
    };
    assert_eq!(retry.page, 2);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("failed to write config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("failed to close temporary directory");
}

#[test]
fn config_round_trip_preserves_gallery_settings() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        language: Some("fr".to_string()),
        api_key: Some("secret".to_string()),
        endpoint: Some("https://mirror.example/api/".to_string()),
        per_page: Some(24),
        theme_mode: ThemeMode::Light,
    };
    config::save_to_path(&config, &config_path).expect("failed to save config");
    let loaded = config::load_from_path(&config_path).expect("failed to load config");

    assert_eq!(loaded.api_key, config.api_key);
    assert_eq!(loaded.endpoint(), "https://mirror.example/api/");
    assert_eq!(loaded.per_page(), 24);
    assert_eq!(loaded.theme_mode, ThemeMode::Light);
}

// SPDX-License-Identifier: MPL-2.0
use flashdeck::app::storage::{LocalStorage, UI_LANGUAGE_KEY};
use flashdeck::config::{self, Config, DeckConfig, GeneralConfig};
use flashdeck::deck::{BoundaryPolicy, CategoryFilter, DeckState, LanguagePair};
use flashdeck::feedback::{self, Difficulty, Feedback, KeyValueStore};
use flashdeck::i18n::{self, Locale, UiKey, UiLanguage};
use flashdeck::loader::{self, DataSource};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, contents).expect("write file");
}

fn write_deck_source(root: &Path) {
    write(
        root,
        "data/portuguese-to-english.json",
        r#"[
            {"word":"gato","definition":"felino doméstico","translation":"cat","category":"Substantivos"},
            {"word":"correr","definition":"mover-se depressa","translation":"run","category":"Verbos"},
            {"word":"casa","definition":"lugar onde se mora","translation":"house","category":"Substantivos"},
            {"word":"olá","definition":"saudação","translation":"hello"}
        ]"#,
    );
    write(
        root,
        "translations/en.json",
        r#"{"app":{"title":"Cards"},"interface":{"next":"Next"}}"#,
    );
    write(
        root,
        "data/definitions/en.json",
        r#"{"gato":"a small domesticated feline"}"#,
    );
    write(root, "data/categories/en.json", r#"{"Verbos":"Verbs"}"#);
}

#[tokio::test]
async fn directory_source_drives_a_study_session() {
    let dir = tempdir().expect("temp dir");
    write_deck_source(dir.path());
    let source = DataSource::Directory(dir.path().to_path_buf());

    let tables = loader::load_locale(source.clone(), UiLanguage::English).await;
    let locale = Locale::new(tables);
    assert_eq!(locale.tr(UiKey::AppTitle), "Cards");
    // Missing keys render as their path.
    assert_eq!(locale.tr(UiKey::InterfacePrevious), "interface.previous");

    let cards = loader::load_word_list(source, LanguagePair::PortugueseToEnglish)
        .await
        .expect("word list");
    let mut deck = DeckState::new(LanguagePair::PortugueseToEnglish, BoundaryPolicy::Clamp);
    deck.load(LanguagePair::PortugueseToEnglish, cards);
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.categories(), vec!["Substantivos", "Verbos"]);

    let first = deck.current().expect("card");
    assert_eq!(
        locale.definition(&first.word, &first.definition),
        "a small domesticated feline"
    );

    deck.filter_by_category(CategoryFilter::Category("Substantivos".into()));
    assert_eq!(deck.len(), 2);
    deck.next();
    assert_eq!(deck.current().map(|c| c.word.as_str()), Some("casa"));
    assert_eq!(
        locale.definition("casa", "lugar onde se mora"),
        "lugar onde se mora"
    );
    assert!(!deck.next());

    deck.flip();
    let progress = deck.progress();
    assert_eq!(progress.position_label(), "2 / 2");
    assert_eq!(progress.total_cards, 4);
    assert_eq!(progress.studied, 1);
    assert_eq!(progress.category_percent, 50);

    deck.filter_by_category(CategoryFilter::All);
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.index(), 0);

    let mut rng = StdRng::seed_from_u64(42);
    deck.shuffle(&mut rng);
    let mut words: Vec<_> = deck.cards().map(|c| c.word.clone()).collect();
    words.sort();
    assert_eq!(words, vec!["casa", "correr", "gato", "olá"]);
}

#[tokio::test]
async fn missing_word_list_is_reported_as_not_found() {
    let dir = tempdir().expect("temp dir");
    let source = DataSource::Directory(dir.path().to_path_buf());
    let err = loader::load_word_list(source, LanguagePair::Indonesian)
        .await
        .expect_err("no file");
    assert_eq!(err.ui_key(), UiKey::ErrorsNotFound);
}

#[test]
fn ratings_and_language_survive_a_restart() {
    let dir = tempdir().expect("temp dir");
    let base = Some(dir.path().to_path_buf());

    let (mut storage, warning) = LocalStorage::load_from(base.clone());
    assert!(warning.is_none());
    storage.set(UI_LANGUAGE_KEY, UiLanguage::Indonesian.tag().to_string());
    let record = Feedback::new(Difficulty::Hard, "gato", chrono::Utc::now());
    feedback::rate(&mut storage, LanguagePair::PortugueseToEnglish, 2, &record).expect("rate");
    assert!(storage.save().is_none());

    let (reloaded, warning) = LocalStorage::load_from(base);
    assert!(warning.is_none());
    let language = i18n::resolve_locale(None, reloaded.get(UI_LANGUAGE_KEY), Some("en"));
    assert_eq!(language, Some(UiLanguage::Indonesian));

    let rating = feedback::load_rating(&reloaded, LanguagePair::PortugueseToEnglish, 2)
        .expect("rating");
    assert_eq!(rating, record);
    assert!(feedback::load_rating(&reloaded, LanguagePair::English, 2).is_none());
}

#[test]
fn config_file_selects_pair_policy_and_language() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        deck: DeckConfig {
            language_pair: LanguagePair::PortugueseToIndonesian,
            boundary_policy: BoundaryPolicy::Wrap,
            data_source: None,
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded.deck.language_pair, LanguagePair::PortugueseToIndonesian);
    assert_eq!(loaded.deck.boundary_policy, BoundaryPolicy::Wrap);
    assert_eq!(
        i18n::resolve_locale(None, None, loaded.general.language.as_deref()),
        Some(UiLanguage::English)
    );
}

use std::fs;
use std::path::Path;

use crate::dict::{DictError, Dictionaries, DictionaryConfig, DictionaryFormat, DictionaryRegistry};

fn write(home: &Path, key: &str, words: &[&str]) {
    let path = home.join(format!("{key}.dic"));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, words.join("\n")).unwrap();
}

fn sample_home() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let home = dir.path();
    write(home, "base", &["汉文", "文化", "和服", "服装", "的", "我们"]);
    write(home, "division/china", &["北京", "汉文"]);
    write(home, "locale/x-beijing", &["胡同"]);
    write(home, "x-noise-word", &["我们", "不存在的词"]);
    write(home, "x-noise-charactor", &["的", "了"]);
    write(home, "x-unit", &["μm", "公斤"]);
    write(home, "x-confucian-family-name", &["王", "欧阳"]);
    dir
}

#[test]
fn test_text_vocabulary_merges_and_skips_prefixed() {
    let dir = sample_home();
    let dicts = Dictionaries::load_text(&DictionaryConfig::new(dir.path())).unwrap();
    let vocab = dicts.vocabulary();

    let texts: Vec<&str> = vocab.words().map(|w| w.text()).collect();
    assert!(texts.contains(&"北京"));
    assert!(texts.contains(&"汉文"));
    assert_eq!(texts.iter().filter(|t| **t == "汉文").count(), 1);
    assert!(!texts.contains(&"胡同"), "x- dictionaries stay out of the vocabulary");
    assert!(!texts.contains(&"μm"));
    assert_eq!(vocab.len(), 7);

    assert_eq!(dicts.units().len(), 2);
    assert_eq!(dicts.confucian_family_names().len(), 2);
}

#[test]
fn test_noise_tagging_flags_vocabulary_entries() {
    let dir = sample_home();
    let dicts = Dictionaries::load_text(&DictionaryConfig::new(dir.path())).unwrap();
    let vocab = dicts.vocabulary();

    let women = vocab.lookup("我们").unwrap();
    assert!(women.is_noise_word());
    assert!(!women.is_noise_character());

    let de = vocab.lookup("的").unwrap();
    assert!(de.is_noise_character());

    assert!(!vocab.lookup("汉文").unwrap().is_noise());
    // Noise entries absent from the vocabulary are not added to it.
    assert!(vocab.lookup("了").is_none());
    assert!(vocab.lookup("不存在的词").is_none());
}

#[test]
fn test_missing_sub_dictionaries_are_empty() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "base", &["汉文"]);
    write(dir.path(), "x-unit", &[]);
    let dicts = Dictionaries::load_text(&DictionaryConfig::new(dir.path())).unwrap();
    assert_eq!(dicts.vocabulary().len(), 1);
    assert!(dicts.units().is_empty());
    assert!(dicts.noise_words().is_empty());
    assert!(dicts.combinatorics().is_empty());
}

#[test]
fn test_zero_dictionary_files_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "汉文").unwrap();
    let err = Dictionaries::load_text(&DictionaryConfig::new(dir.path())).err().unwrap();
    assert!(matches!(err, DictError::NoDictionaryFiles(_)));
}

#[test]
fn test_missing_home_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = DictionaryConfig::new(dir.path().join("missing"));
    assert!(matches!(
        Dictionaries::load_text(&config).err().unwrap(),
        DictError::MissingHome(_)
    ));
    assert!(matches!(
        Dictionaries::load_compiled(&config).err().unwrap(),
        DictError::MissingHome(_)
    ));
}

#[test]
fn test_unsupported_charset_is_fatal() {
    let dir = sample_home();
    let mut config = DictionaryConfig::new(dir.path());
    config.charset = "GBK".to_string();
    assert!(matches!(
        Dictionaries::load(&config).err().unwrap(),
        DictError::UnsupportedCharset(_)
    ));
}

#[test]
fn test_max_word_length_drops_long_words() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "base", &["汉文", "汉文化", "中华人民共和国"]);
    let config = DictionaryConfig::new(dir.path()).with_max_word_length(3);
    let dicts = Dictionaries::load_text(&config).unwrap();
    assert_eq!(dicts.vocabulary().len(), 2);
    assert!(dicts.vocabulary().lookup("中华人民共和国").is_none());
}

#[test]
fn test_compile_then_load_compiled_keeps_flags() {
    let dir = sample_home();
    let text_config = DictionaryConfig::new(dir.path());
    let dicts = Dictionaries::load_text(&text_config).unwrap();

    let out = tempfile::tempdir().unwrap();
    let written = dicts.compile_to(out.path(), &text_config).unwrap();
    assert_eq!(written.len(), 6);
    assert!(out.path().join("vocabulary.dic.compiled").exists());
    assert!(out.path().join("x-unit.dic.compiled").exists());

    let compiled_config =
        DictionaryConfig::new(out.path()).with_format(DictionaryFormat::Compiled);
    let loaded = Dictionaries::load(&compiled_config).unwrap();
    assert_eq!(loaded.vocabulary().len(), dicts.vocabulary().len());
    assert!(loaded.vocabulary().lookup("我们").unwrap().is_noise_word());
    assert!(loaded.vocabulary().lookup("的").unwrap().is_noise_character());
    assert!(loaded.units().lookup("μm").is_some());
}

#[test]
fn test_compiled_missing_file_is_empty_dictionary() {
    let dir = sample_home();
    let text_config = DictionaryConfig::new(dir.path());
    let dicts = Dictionaries::load_text(&text_config).unwrap();
    let out = tempfile::tempdir().unwrap();
    dicts.compile_to(out.path(), &text_config).unwrap();
    fs::remove_file(out.path().join("x-unit.dic.compiled")).unwrap();

    let config = DictionaryConfig::new(out.path()).with_format(DictionaryFormat::Compiled);
    let loaded = Dictionaries::load(&config).unwrap();
    assert!(loaded.units().is_empty());
    assert!(!loaded.vocabulary().is_empty());
}

#[test]
fn test_compiled_home_without_files_is_fatal() {
    let out = tempfile::tempdir().unwrap();
    let config = DictionaryConfig::new(out.path()).with_format(DictionaryFormat::Compiled);
    assert!(matches!(
        Dictionaries::load(&config).err().unwrap(),
        DictError::NoDictionaryFiles(_)
    ));
}

#[test]
fn test_registry_loads_from_disk_once() {
    let dir = sample_home();
    let config = DictionaryConfig::new(dir.path());
    let registry = DictionaryRegistry::new();
    let first = registry.get_or_load(&config).unwrap();

    // With the files gone a second disk read would fail; the cache must answer.
    fs::remove_dir_all(dir.path().join("division")).unwrap();
    fs::remove_file(dir.path().join("base.dic")).unwrap();
    let second = registry.get_or_load(&config).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert!(second.vocabulary().lookup("北京").is_some());
}

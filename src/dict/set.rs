use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use super::{build, compiled, empty, source, sort_words, DictError, Dictionary, Word, WordFlags};

/// Name of the aggregated vocabulary in the compiled layout.
pub const VOCABULARY: &str = "vocabulary";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryFormat {
    /// Human-editable `*.dic` word lists, merged into one vocabulary.
    #[default]
    Text,
    /// Pre-compiled `*.dic.compiled` files, one per logical dictionary.
    Compiled,
}

/// Everything that determines which dictionaries get built.
///
/// Two equal configs always produce the same dictionary set, which is what
/// lets the registry memoize on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    pub home: PathBuf,
    pub charset: String,
    /// Longest word kept, in characters. 0 = no limit.
    pub max_word_length: usize,
    pub format: DictionaryFormat,
    pub skip_prefix: String,
    pub noise_character: String,
    pub noise_word: String,
    pub unit: String,
    pub confucian_family_name: String,
    pub combinatorics: String,
}

impl DictionaryConfig {
    /// Config with the conventional sub-dictionary names.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            charset: "UTF-8".to_string(),
            max_word_length: 0,
            format: DictionaryFormat::Text,
            skip_prefix: "x-".to_string(),
            noise_character: "x-noise-charactor".to_string(),
            noise_word: "x-noise-word".to_string(),
            unit: "x-unit".to_string(),
            confucian_family_name: "x-confucian-family-name".to_string(),
            combinatorics: "x-for-combinatorics".to_string(),
        }
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = home.into();
        self
    }

    pub fn with_format(mut self, format: DictionaryFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = max_word_length;
        self
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::new("dic")
    }
}

/// The six named dictionaries a knife consults.
pub struct Dictionaries {
    vocabulary: Arc<dyn Dictionary>,
    confucian_family_names: Arc<dyn Dictionary>,
    noise_characters: Arc<dyn Dictionary>,
    noise_words: Arc<dyn Dictionary>,
    units: Arc<dyn Dictionary>,
    combinatorics: Arc<dyn Dictionary>,
}

impl Dictionaries {
    /// Assemble a set from word lists, running the noise tagging pass.
    ///
    /// Every list must already be sorted and deduplicated.
    pub fn from_words(
        vocabulary: Vec<Word>,
        confucian_family_names: Vec<Word>,
        noise_characters: Vec<Word>,
        noise_words: Vec<Word>,
        units: Vec<Word>,
        combinatorics: Vec<Word>,
    ) -> Self {
        let noise_characters = build(noise_characters);
        let noise_words = build(noise_words);
        let base = build(vocabulary);
        let vocabulary = build(tag_noise(base.as_ref(), &*noise_words, &*noise_characters));
        Self {
            vocabulary,
            confucian_family_names: build(confucian_family_names),
            noise_characters,
            noise_words,
            units: build(units),
            combinatorics: build(combinatorics),
        }
    }

    /// Load according to `config.format`.
    pub fn load(config: &DictionaryConfig) -> Result<Self, DictError> {
        match config.format {
            DictionaryFormat::Text => Self::load_text(config),
            DictionaryFormat::Compiled => Self::load_compiled(config),
        }
    }

    /// Read every `*.dic` under the home, merge the vocabulary and tag noise.
    pub fn load_text(config: &DictionaryConfig) -> Result<Self, DictError> {
        source::check_charset(&config.charset)?;
        let _span = info_span!("load_text", home = %config.home.display()).entered();
        info!("loading dictionaries");

        let mut tree = source::read_tree(&config.home, config.max_word_length)?;
        if tree.is_empty() {
            return Err(DictError::NoDictionaryFiles(config.home.clone()));
        }

        let vocabulary = merge_vocabulary(&tree, &config.skip_prefix);
        let mut named = |name: &str| -> Vec<Word> {
            match tree.remove(name) {
                Some(words) if !words.is_empty() => words,
                _ => {
                    warn!(dictionary = name, "dictionary missing or empty; using an empty one");
                    Vec::new()
                }
            }
        };
        let surnames = named(&config.confucian_family_name);
        let noise_characters = named(&config.noise_character);
        let noise_words = named(&config.noise_word);
        let units = named(&config.unit);
        let combinatorics = named(&config.combinatorics);

        let set = Self::from_words(
            vocabulary,
            surnames,
            noise_characters,
            noise_words,
            units,
            combinatorics,
        );
        info!(
            vocabulary = set.vocabulary.len(),
            noise_words = set.noise_words.len(),
            noise_characters = set.noise_characters.len(),
            "dictionaries loaded"
        );
        Ok(set)
    }

    /// Read the `*.dic.compiled` files under the home.
    ///
    /// Each file is read on its own; there is no cross-file merge and no
    /// tagging pass, the vocabulary carries the flags it was compiled with.
    pub fn load_compiled(config: &DictionaryConfig) -> Result<Self, DictError> {
        source::check_charset(&config.charset)?;
        if !config.home.is_dir() {
            return Err(DictError::MissingHome(config.home.clone()));
        }
        let _span = info_span!("load_compiled", home = %config.home.display()).entered();

        let home = config.home.as_path();
        let mut found = 0usize;
        let mut read = |name: &str| -> Result<Arc<dyn Dictionary>, DictError> {
            let path = compiled::path_for(home, name);
            match compiled::open(&path, config.max_word_length)? {
                Some(words) => {
                    found += 1;
                    Ok(build(words))
                }
                None => {
                    warn!(dictionary = name, "compiled dictionary missing; using an empty one");
                    Ok(empty())
                }
            }
        };

        let set = Self {
            vocabulary: read(VOCABULARY)?,
            confucian_family_names: read(&config.confucian_family_name)?,
            noise_characters: read(&config.noise_character)?,
            noise_words: read(&config.noise_word)?,
            units: read(&config.unit)?,
            combinatorics: read(&config.combinatorics)?,
        };
        if found == 0 {
            return Err(DictError::NoDictionaryFiles(config.home.clone()));
        }
        info!(vocabulary = set.vocabulary.len(), "compiled dictionaries loaded");
        Ok(set)
    }

    /// Write every dictionary of this set to `<dir>/<name>.dic.compiled`.
    ///
    /// Returns the paths written, vocabulary first.
    pub fn compile_to(
        &self,
        dir: &Path,
        config: &DictionaryConfig,
    ) -> Result<Vec<PathBuf>, DictError> {
        let outputs: [(&str, &dyn Dictionary); 6] = [
            (VOCABULARY, &*self.vocabulary),
            (config.confucian_family_name.as_str(), &*self.confucian_family_names),
            (config.noise_character.as_str(), &*self.noise_characters),
            (config.noise_word.as_str(), &*self.noise_words),
            (config.unit.as_str(), &*self.units),
            (config.combinatorics.as_str(), &*self.combinatorics),
        ];
        let mut written = Vec::with_capacity(outputs.len());
        for (name, dict) in outputs {
            let words: Vec<Word> = dict.words().cloned().collect();
            let path = compiled::path_for(dir, name);
            compiled::save(&path, &words)?;
            info!(path = %path.display(), words = words.len(), "compiled dictionary");
            written.push(path);
        }
        Ok(written)
    }

    pub fn vocabulary(&self) -> &dyn Dictionary {
        &*self.vocabulary
    }

    pub fn confucian_family_names(&self) -> &dyn Dictionary {
        &*self.confucian_family_names
    }

    pub fn noise_characters(&self) -> &dyn Dictionary {
        &*self.noise_characters
    }

    pub fn noise_words(&self) -> &dyn Dictionary {
        &*self.noise_words
    }

    pub fn units(&self) -> &dyn Dictionary {
        &*self.units
    }

    pub fn combinatorics(&self) -> &dyn Dictionary {
        &*self.combinatorics
    }
}

/// Union every dictionary not excluded by `skip_prefix`, sorted and deduplicated.
fn merge_vocabulary(tree: &BTreeMap<String, Vec<Word>>, skip_prefix: &str) -> Vec<Word> {
    let merged: Vec<Word> = tree
        .iter()
        .filter(|(key, _)| !source::is_skipped(key, skip_prefix))
        .flat_map(|(_, words)| words.iter().cloned())
        .collect();
    sort_words(merged)
}

/// Second phase of vocabulary assembly: look every noise entry up in the
/// built vocabulary and return a tagged copy of its word list.
fn tag_noise(
    vocabulary: &dyn Dictionary,
    noise_words: &dyn Dictionary,
    noise_characters: &dyn Dictionary,
) -> Vec<Word> {
    let mut flags = vec![WordFlags::NONE; vocabulary.len()];
    let mut mark = |noise: &dyn Dictionary, tag: WordFlags| {
        for word in noise.words() {
            let chars: Vec<char> = word.text().chars().collect();
            if let Some(index) = vocabulary.search(&chars, 0, chars.len()).index() {
                flags[index] = flags[index].union(tag);
            }
        }
    };
    mark(
        noise_words,
        WordFlags {
            noise_word: true,
            noise_character: false,
        },
    );
    mark(
        noise_characters,
        WordFlags {
            noise_word: false,
            noise_character: true,
        },
    );

    vocabulary
        .words()
        .zip(flags)
        .map(|(word, tag)| word.clone().into_tagged(tag))
        .collect()
}

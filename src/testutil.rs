use std::sync::Arc;

use crate::dict::{sort_words, Dictionaries, Word, BUCKET_THRESHOLD};

fn list(texts: &[&str]) -> Vec<Word> {
    sort_words(texts.iter().map(|t| Word::new(*t)).collect())
}

/// In-memory dictionary set for tests.
#[derive(Default)]
pub struct TestDicts<'a> {
    pub vocabulary: &'a [&'a str],
    pub surnames: &'a [&'a str],
    pub noise_characters: &'a [&'a str],
    pub noise_words: &'a [&'a str],
    pub units: &'a [&'a str],
    pub combinatorics: &'a [&'a str],
}

impl TestDicts<'_> {
    pub fn build(&self) -> Arc<Dictionaries> {
        Arc::new(Dictionaries::from_words(
            list(self.vocabulary),
            list(self.surnames),
            list(self.noise_characters),
            list(self.noise_words),
            list(self.units),
            list(self.combinatorics),
        ))
    }
}

/// Vocabulary only.
pub fn vocabulary(texts: &[&str]) -> Arc<Dictionaries> {
    TestDicts {
        vocabulary: texts,
        ..Default::default()
    }
    .build()
}

const SAMPLE_VOCABULARY: &[&str] = &[
    "汉文", "文化", "和服", "服装", "中华", "中华人民共和国", "人民", "共和国", "我们",
    "的", "是", "过滤器", "滤芯", "制造商", "适合", "备用", "系列", "北京", "小明",
];

fn with_sample_lists(vocabulary: &[&str]) -> Arc<Dictionaries> {
    TestDicts {
        vocabulary,
        surnames: &["王", "李", "欧阳"],
        noise_characters: &["的", "了", "是", "，", ","],
        noise_words: &["我们"],
        units: &["μm", "m", "公斤", "kg"],
        combinatorics: &["T恤", "卡拉OK"],
    }
    .build()
}

/// A small but realistic set covering every dictionary kind.
pub fn sample() -> Arc<Dictionaries> {
    with_sample_lists(SAMPLE_VOCABULARY)
}

/// [`sample`] with the vocabulary padded past [`BUCKET_THRESHOLD`] so it is
/// served by the bucketed backend. The filler words are pairs of CJK
/// extension A characters, which no test input contains.
pub fn padded_sample() -> Arc<Dictionaries> {
    let filler: Vec<String> = (0..BUCKET_THRESHOLD as u32)
        .map(|i| {
            [0x3400 + i, 0x3C00 + i]
                .into_iter()
                .map(|c| char::from_u32(c).unwrap())
                .collect()
        })
        .collect();
    let vocabulary: Vec<&str> = SAMPLE_VOCABULARY
        .iter()
        .copied()
        .chain(filler.iter().map(String::as_str))
        .collect();
    with_sample_lists(&vocabulary)
}

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cjk_knife::dict::{sort_words, Dictionaries, Word};
use cjk_knife::{Mode, Segmenter};

fn words(texts: &[&str]) -> Vec<Word> {
    sort_words(texts.iter().map(|t| Word::new(*t)).collect())
}

fn bench_dicts() -> Arc<Dictionaries> {
    // Enough filler entries to push the vocabulary onto the bucketed backend.
    let mut vocabulary: Vec<String> = [
        "汉文", "文化", "和服", "服装", "中华", "中华人民共和国", "人民", "共和国", "我们", "的",
        "过滤器", "滤芯", "制造商", "适合", "备用", "系列", "北京", "天安门", "广场",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for i in 0..4000u32 {
        if let (Some(a), Some(b)) = (char::from_u32(0x4E00 + i), char::from_u32(0x5E00 + i)) {
            vocabulary.push(format!("{a}{b}"));
        }
    }
    let refs: Vec<&str> = vocabulary.iter().map(String::as_str).collect();

    Arc::new(Dictionaries::from_words(
        words(&refs),
        words(&["王", "李", "欧阳"]),
        words(&["的", "了", "是", "，", ","]),
        words(&["我们"]),
        words(&["μm", "公斤", "kg"]),
        words(&["T恤", "卡拉OK"]),
    ))
}

const INPUTS: &[(&str, &str)] = &[
    ("short", "汉文化和服装"),
    (
        "mixed",
        "Domnick Hunter 0.01μm 备用过滤器滤芯, 适合制造商OIL-X Plus系列",
    ),
    (
        "long",
        "中华人民共和国的首都是北京，我们在天安门广场看到了王大伟穿着T恤唱卡拉OK，汉文化和服装。",
    ),
];

fn bench_mode(c: &mut Criterion, mode: Mode) {
    let segmenter = Segmenter::new(bench_dicts(), mode);
    let mut group = c.benchmark_group(format!("segment/{mode}"));
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| segmenter.tokenize(text));
        });
    }
    group.finish();
}

fn bench_most_words(c: &mut Criterion) {
    bench_mode(c, Mode::MostWords);
}

fn bench_max_word_length(c: &mut Criterion) {
    bench_mode(c, Mode::MaxWordLength);
}

criterion_group!(benches, bench_most_words, bench_max_word_length);
criterion_main!(benches);

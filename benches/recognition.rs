//! 合成コーパスを用いた単語認識のベンチマーク
//!
//! ローマ字音節から合成した辞書とテキストを使用して、デフォルト設定と
//! 狭い整数幅設定での認識速度を計測します。

use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wakachi::{HashLexicon, Recognizer};

/// 再現可能な擬似乱数で辞書の単語と行を合成します。
fn synthesize_corpus(num_words: usize, num_lines: usize) -> (Vec<String>, Vec<String>) {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let syllables = [
        "ka", "ki", "ku", "ke", "ko", "sa", "shi", "su", "se", "so", "ta", "chi", "tsu", "te",
        "to", "na", "ni", "nu", "ne", "no",
    ];
    let words: Vec<String> = (0..num_words)
        .map(|_| {
            let num_syllables = next() as usize % 4 + 1;
            (0..num_syllables)
                .map(|_| syllables[next() as usize % syllables.len()])
                .collect()
        })
        .collect();

    // Words are concatenated without any separator.
    let lines: Vec<String> = (0..num_lines)
        .map(|_| {
            (0..32)
                .map(|_| words[next() as usize % words.len()].as_str())
                .collect()
        })
        .collect();

    (words, lines)
}

fn benchmark_recognition(c: &mut Criterion) {
    let (words, lines) = synthesize_corpus(500, 100);
    let lexicon = Arc::new(HashLexicon::from_words(words).unwrap());
    let total_bytes: usize = lines.iter().map(|line| line.len()).sum();

    let mut group = c.benchmark_group("Recognition Speed");
    group.throughput(Throughput::Bytes(total_bytes as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    group.bench_function(BenchmarkId::new("Default", "Synthetic"), |b| {
        b.iter_with_setup(
            || {
                let recognizer: Recognizer<_> =
                    Recognizer::from_shared_lexicon(lexicon.clone()).unwrap();
                recognizer.new_worker()
            },
            |mut worker| {
                for line in &lines {
                    worker.reset_text(line);
                    worker.recognize().unwrap();
                }
            },
        );
    });

    group.bench_function(BenchmarkId::new("NarrowSpans", "Synthetic"), |b| {
        b.iter_with_setup(
            || {
                let recognizer =
                    Recognizer::<HashLexicon, u16, i32>::from_shared_lexicon(lexicon.clone())
                        .unwrap();
                recognizer.new_worker()
            },
            |mut worker| {
                for line in &lines {
                    worker.reset_text(line);
                    worker.recognize().unwrap();
                }
            },
        );
    });

    group.finish();
}

criterion_group!(benches, benchmark_recognition);
criterion_main!(benches);

//! 重み最大化に基づく単語認識器。
//!
//! このモジュールは、辞書に基づいてテキストを単語列に分割するメインの
//! 認識器を提供します。辞書に含まれる部分文字列には文字数の3乗の正の重み、
//! 含まれない部分文字列には文字数の3乗の負の重みを与え、動的計画法を
//! 使用して合計重みが最大になる分割を求めます。
//!
//! # 主要な構造体
//!
//! - [`Recognizer`]: 認識を実行するメインの認識器構造体
//! - [`Worker`]: 認識器のワーカー。実際の認識処理を行う
//!
//! # 例
//!
//! ```
//! use wakachi::{HashLexicon, Recognizer};
//!
//! let lexicon = HashLexicon::from_words(["the", "black", "board"])?;
//! let recognizer: Recognizer<_> = Recognizer::new(lexicon)?;
//! let mut worker = recognizer.new_worker();
//!
//! worker.reset_text("theblackboard");
//! worker.recognize()?;
//!
//! for i in 0..worker.num_words() {
//!     let word = worker.word(i);
//!     println!("{}", word.surface());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub(crate) mod chart;
pub mod worker;

use std::marker::PhantomData;
use std::sync::Arc;

use crate::errors::{Result, WakachiError};
use crate::lexicon::Lexicon;
use crate::num::{SpanInt, Weight};
use crate::recognizer::chart::Chart;
use crate::recognizer::worker::Worker;
use crate::span::WordSpan;
use crate::text::Text;

/// 単語認識を行う認識器。
///
/// `Recognizer`は、辞書メンバーの部分文字列に正の重み、非メンバーの
/// 部分文字列に負の重みを与え、合計重みが最大になる分割を動的計画法で
/// 厳密に求めます。辞書を保持し、複数の[`Worker`]インスタンスを生成して
/// 並列処理を行うことができます。
///
/// # 型パラメータ
///
/// - `L`: 辞書の型([`Lexicon`]の実装)
/// - `S`: 区間の格納に使用する整数幅(デフォルトは`usize`)
/// - `W`: 合計重みの累積に使用する整数幅(デフォルトは`i64`)
///
/// # 例
///
/// ```
/// use wakachi::{HashLexicon, Recognizer};
///
/// let lexicon = HashLexicon::from_words(["a", "b", "ab"])?;
/// let recognizer: Recognizer<_> = Recognizer::new(lexicon)?;
/// let mut worker = recognizer.new_worker();
///
/// worker.reset_text("ab");
/// worker.recognize()?;
/// assert_eq!(worker.total_weight(), 8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Recognizer<L, S = usize, W = i64> {
    lexicon: Arc<L>,
    max_word_chars: usize,
    _num: PhantomData<(S, W)>,
}

impl<L, S, W> Clone for Recognizer<L, S, W> {
    fn clone(&self) -> Self {
        Self {
            lexicon: Arc::clone(&self.lexicon),
            max_word_chars: self.max_word_chars,
            _num: PhantomData,
        }
    }
}

impl<L, S, W> Recognizer<L, S, W>
where
    L: Lexicon,
    S: SpanInt,
    W: Weight,
{
    /// 新しい認識器を作成します。
    ///
    /// 辞書は認識器に所有権が移動します。複数の認識器間で辞書を共有する
    /// 必要がある場合は、[`Recognizer::from_shared_lexicon`]を使用してください。
    ///
    /// 最長単語の文字数はこの時点で一度だけ計算され、以降の認識で探索窓の
    /// 上限として使用されます。
    ///
    /// # 引数
    ///
    /// * `lexicon` - 認識に使用する辞書
    ///
    /// # エラー
    ///
    /// - 辞書が空の場合、[`WakachiError::EmptyInput`]
    /// - 長さ0の単語が含まれる場合、[`WakachiError::InvalidLexicon`]
    /// - 最長単語の文字数が`S`で表現できない場合、[`WakachiError::UnsupportedLength`]
    ///
    /// # 例
    ///
    /// ```
    /// use wakachi::{HashLexicon, Recognizer};
    ///
    /// let lexicon = HashLexicon::from_words(["is", "it", "this"])?;
    /// let recognizer: Recognizer<_> = Recognizer::new(lexicon)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(lexicon: L) -> Result<Self> {
        Self::from_shared_lexicon(Arc::new(lexicon))
    }

    /// 共有された辞書から新しい認識器を作成します。
    ///
    /// これは、複数の認識器インスタンスが辞書データを複製することなく
    /// 同じ辞書データを共有する必要があるマルチスレッドシナリオで便利です。
    ///
    /// # 引数
    ///
    /// * `lexicon` - 共有される辞書への`Arc`参照
    ///
    /// # エラー
    ///
    /// [`Recognizer::new`]と同じ条件でエラーを返します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::sync::Arc;
    /// use wakachi::{HashLexicon, Recognizer};
    ///
    /// let lexicon = Arc::new(HashLexicon::from_words(["is", "it", "this"])?);
    /// let recognizer1: Recognizer<_> = Recognizer::from_shared_lexicon(lexicon.clone())?;
    /// let recognizer2: Recognizer<_> = Recognizer::from_shared_lexicon(lexicon.clone())?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_shared_lexicon(lexicon: Arc<L>) -> Result<Self> {
        if lexicon.is_empty() {
            return Err(WakachiError::empty_input("lexicon"));
        }
        let max_word_chars = lexicon.longest_word_chars()?;
        if S::from_usize(max_word_chars).is_none() {
            return Err(WakachiError::unsupported_length(
                "word",
                max_word_chars,
                S::BITS,
            ));
        }
        Ok(Self {
            lexicon,
            max_word_chars,
            _num: PhantomData,
        })
    }

    /// 探索窓の上限となる最長単語の文字数を指定します。
    ///
    /// デフォルト値は0で、構築時に辞書から計算された値を使用することを
    /// 示します。0以外の値は計算された値と照合され、一致しない場合は
    /// エラーになります。
    ///
    /// # 引数
    ///
    /// * `max_word_chars` - 最長単語の文字数。0の場合は計算された値を使用します。
    ///
    /// # エラー
    ///
    /// 指定された値が辞書から計算された値と異なる場合、
    /// [`WakachiError::InvalidLexicon`]が返されます。
    ///
    /// # 例
    ///
    /// ```
    /// use wakachi::{HashLexicon, Recognizer};
    ///
    /// let lexicon = HashLexicon::from_words(["is", "it", "this"])?;
    /// let recognizer: Recognizer<_> = Recognizer::new(lexicon)?.max_word_chars(4)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn max_word_chars(self, max_word_chars: usize) -> Result<Self> {
        if max_word_chars != 0 && max_word_chars != self.max_word_chars {
            return Err(WakachiError::invalid_lexicon(format!(
                "max_word_chars ({}) must equal the longest word length ({})",
                max_word_chars, self.max_word_chars
            )));
        }
        Ok(self)
    }

    /// 辞書への参照を取得します。
    ///
    /// # 戻り値
    ///
    /// 辞書データへの参照
    pub(crate) fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// 新しいワーカーを作成します。
    ///
    /// ワーカーは実際の認識処理を実行するために使用されます。
    /// 各ワーカーは独立した表構造を保持するため、複数のワーカーを
    /// 並列に使用して同時に複数のテキストを認識できます。
    ///
    /// # 戻り値
    ///
    /// 新しい[`Worker`]インスタンス
    ///
    /// # 例
    ///
    /// ```
    /// use wakachi::{HashLexicon, Recognizer};
    ///
    /// let lexicon = HashLexicon::from_words(["is", "it", "this"])?;
    /// let recognizer: Recognizer<_> = Recognizer::new(lexicon)?;
    /// let mut worker = recognizer.new_worker();
    ///
    /// worker.reset_text("thisisit");
    /// worker.recognize()?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new_worker(&self) -> Worker<L, S, W> {
        Worker::new(self.clone())
    }

    /// 表構造を構築します。
    ///
    /// 先頭からの各プレフィックスに対して、最良の合計重みと最後に選ばれた
    /// 単語の区間を確定していきます。
    ///
    /// # 引数
    ///
    /// * `text` - 入力テキスト
    /// * `chart` - 構築する表構造
    pub(crate) fn fill_chart(&self, text: &Text, chart: &mut Chart<S, W>) {
        chart.reset(text.len_char());
        for sub_len in 0..text.len_char() {
            let (best_weight, best_offset) = self.best_word_ending_at(text, chart, sub_len);
            // Both values fit in S: the text length was validated before filling.
            let choice = WordSpan::new(
                S::from_usize(best_offset).unwrap(),
                S::from_usize(sub_len + 1 - best_offset).unwrap(),
            );
            chart.commit(sub_len, best_weight, choice);
        }
    }

    /// 指定されたプレフィックスの末尾の単語として最良の候補を探索します。
    ///
    /// # 引数
    ///
    /// * `text` - 入力テキスト
    /// * `chart` - 構築中の表構造
    /// * `sub_len` - プレフィックスの末尾の文字位置
    ///
    /// # 戻り値
    ///
    /// 最良の合計重みと、そのときの末尾の単語の開始オフセット
    fn best_word_ending_at(&self, text: &Text, chart: &Chart<S, W>, sub_len: usize) -> (W, usize) {
        // No candidate longer than the longest dictionary word can be a
        // member, so the search window never reaches farther back.
        let initial_offset = if sub_len < self.max_word_chars {
            0
        } else {
            sub_len - self.max_word_chars + 1
        };

        let mut best_weight = W::MIN;
        let mut best_offset = 0;
        for offset in initial_offset..=sub_len {
            let surface = text.surface(offset..sub_len + 1);
            let weight =
                chart.prefix_weight(offset) + self.word_weight(surface, sub_len + 1 - offset);
            // Offsets are visited in ascending order, i.e. from the longest
            // candidate down. The strict comparison keeps the earlier
            // (longer) candidate on ties.
            if best_weight < weight {
                best_weight = weight;
                best_offset = offset;
            }
        }

        debug_assert_ne!(best_weight, W::MIN);
        (best_weight, best_offset)
    }

    /// 単語1つ分の符号付き重みを計算します。
    ///
    /// 辞書に含まれる単語は文字数の3乗、含まれない単語は文字数の3乗の
    /// 符号反転が重みになります。
    ///
    /// # 引数
    ///
    /// * `surface` - 単語の表層形
    /// * `len_chars` - 単語の文字数
    #[inline(always)]
    pub(crate) fn word_weight(&self, surface: &str, len_chars: usize) -> W {
        let cube = W::cube(len_chars);
        if self.lexicon.contains(surface) {
            cube
        } else {
            -cube
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexicon::HashLexicon;

    #[track_caller]
    fn build_test_lexicon(words: &[&str]) -> HashLexicon {
        HashLexicon::from_words(words.iter().copied()).unwrap()
    }

    #[test]
    fn test_empty_lexicon_is_rejected() {
        let words: hashbrown::HashSet<String> = hashbrown::HashSet::new();
        let result: Result<Recognizer<_>> = Recognizer::new(words);
        assert!(matches!(result, Err(WakachiError::EmptyInput(_))));
    }

    #[test]
    fn test_zero_length_word_is_rejected() {
        let mut words = hashbrown::HashSet::new();
        words.insert("ab".to_string());
        words.insert(String::new());
        let result: Result<Recognizer<_>> = Recognizer::new(words);
        assert!(matches!(result, Err(WakachiError::InvalidLexicon(_))));
    }

    #[test]
    fn test_word_longer_than_span_width_is_rejected() {
        let long_word = "a".repeat(300);
        let lexicon = build_test_lexicon(&[long_word.as_str()]);
        let result: Result<Recognizer<HashLexicon, u8, i32>> = Recognizer::new(lexicon);
        assert!(matches!(result, Err(WakachiError::UnsupportedLength(_))));
    }

    #[test]
    fn test_wide_enough_span_width_is_accepted() {
        let long_word = "a".repeat(300);
        let lexicon = build_test_lexicon(&[long_word.as_str()]);
        assert!(Recognizer::<HashLexicon, u16, i32>::new(lexicon).is_ok());
    }

    #[test]
    fn test_max_word_chars_hint() {
        let lexicon = build_test_lexicon(&["is", "it", "this"]);
        let recognizer: Recognizer<_> = Recognizer::new(lexicon).unwrap();

        // 0 keeps the computed value; the exact value is accepted.
        let recognizer = recognizer.max_word_chars(0).unwrap();
        let recognizer = recognizer.max_word_chars(4).unwrap();

        assert!(matches!(
            recognizer.max_word_chars(3),
            Err(WakachiError::InvalidLexicon(_))
        ));
    }

    #[test]
    fn test_hint_counts_chars_not_bytes() {
        let lexicon = build_test_lexicon(&["言語処理"]);
        let recognizer: Recognizer<_> = Recognizer::new(lexicon).unwrap();
        assert!(recognizer.max_word_chars(4).is_ok());
    }
}

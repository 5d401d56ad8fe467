//! 認識器のワーカーを提供するモジュール。
use crate::errors::{Result, WakachiError};
use crate::lexicon::Lexicon;
use crate::num::{SpanInt, Weight};
use crate::recognizer::chart::Chart;
use crate::recognizer::Recognizer;
use crate::span::WordSpan;
use crate::text::Text;
use crate::word::{Word, WordIter};

/// 認識を実行するワーカー。
///
/// ワーカーは入力テキストと表構造の作業領域を所有し、テキストを入れ替え
/// ながら何度でも再利用できます。確保されたメモリは次の認識に引き継がれる
/// ため、大量のテキストを処理する場合はワーカーを使い回してください。
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
/// assert_eq!(worker.num_words(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Worker<L, S = usize, W = i64> {
    pub(crate) recognizer: Recognizer<L, S, W>,
    pub(crate) text: Text,
    chart: Chart<S, W>,
    pub(crate) spans: Vec<WordSpan<S>>,
}

impl<L, S, W> Worker<L, S, W>
where
    L: Lexicon,
    S: SpanInt,
    W: Weight,
{
    /// 新しいワーカーを作成します。
    pub(crate) fn new(recognizer: Recognizer<L, S, W>) -> Self {
        Self {
            recognizer,
            text: Text::new(),
            chart: Chart::default(),
            spans: vec![],
        }
    }

    /// 入力テキストを設定します。
    ///
    /// 前回の認識結果はこの時点で破棄されます。
    ///
    /// # 引数
    ///
    /// * `input` - 入力テキスト
    pub fn reset_text<I>(&mut self, input: I)
    where
        I: AsRef<str>,
    {
        self.spans.clear();
        self.text.set_text(input);
    }

    /// 設定されたテキストを認識します。
    ///
    /// # エラー
    ///
    /// - テキストが空の場合、[`WakachiError::EmptyInput`]
    /// - テキストの文字数が`S`で表現できない場合、[`WakachiError::UnsupportedLength`]
    pub fn recognize(&mut self) -> Result<()> {
        self.spans.clear();
        let len_char = self.text.len_char();
        if len_char == 0 {
            return Err(WakachiError::empty_input("text"));
        }
        if S::from_usize(len_char).is_none() {
            return Err(WakachiError::unsupported_length("text", len_char, S::BITS));
        }
        self.recognizer.fill_chart(&self.text, &mut self.chart);
        self.chart.backtrack(&mut self.spans);
        Ok(())
    }

    /// 認識された単語数を取得します。
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.spans.len()
    }

    /// 認識結果全体の合計重みを取得します。
    ///
    /// 認識が行われていない場合は0を返します。
    #[inline(always)]
    pub fn total_weight(&self) -> W {
        if self.spans.is_empty() {
            W::ZERO
        } else {
            self.chart.total_weight()
        }
    }

    /// 認識された単語の区間列を取得します。
    ///
    /// 区間はテキストの先頭から末尾に向かう順に並び、隙間なくテキスト
    /// 全体を被覆します。
    #[inline(always)]
    pub fn spans(&self) -> &[WordSpan<S>] {
        &self.spans
    }

    /// `i`番目の単語を取得します。
    ///
    /// # 引数
    ///
    /// * `i` - 単語のインデックス(0から始まる)
    ///
    /// # 戻り値
    ///
    /// 指定されたインデックスの単語
    ///
    /// # パニック
    ///
    /// `i >= self.num_words()`の場合、パニックします。
    #[inline(always)]
    pub fn word<'w>(&'w self, i: usize) -> Word<'w, L, S, W> {
        assert!(i < self.num_words());
        Word::new(self, i)
    }

    /// 認識結果のイテレータを作成します。
    ///
    /// # 戻り値
    ///
    /// 単語のイテレータ
    #[inline(always)]
    pub fn word_iter<'w>(&'w self) -> WordIter<'w, L, S, W> {
        WordIter::new(self)
    }
}

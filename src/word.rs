//! 単語の結果コンテナ
//!
//! このモジュールは、認識の結果として得られる単語を表現する型を提供します。
//! 単語は入力テキスト中の区間への参照を保持し、表層形、位置情報、重みなどへの
//! アクセスを提供します。

use std::ops::Range;

use crate::lexicon::Lexicon;
use crate::num::{SpanInt, Weight};
use crate::recognizer::worker::Worker;
use crate::span::WordSpan;

/// 認識の結果単語
///
/// この単語は[`Worker`]への軽量な参照であり、実際のデータは
/// Workerが保持しています。単語はWorkerが生存している間のみ有効です。
///
/// 単語からは以下の情報にアクセスできます：
/// - 表層形（元のテキスト中の文字列）
/// - 文字位置およびバイト位置
/// - 辞書メンバーかどうか、および符号付き重み
pub struct Word<'w, L, S = usize, W = i64> {
    worker: &'w Worker<L, S, W>,
    index: usize,
}

impl<'w, L, S, W> Word<'w, L, S, W>
where
    L: Lexicon,
    S: SpanInt,
    W: Weight,
{
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker<L, S, W>, index: usize) -> Self {
        Self { worker, index }
    }

    /// 単語の区間を取得します。
    ///
    /// # 戻り値
    ///
    /// 単語の開始オフセットと文字数を保持する[`WordSpan`]を返します。
    ///
    /// Gets the span of the word.
    #[inline(always)]
    pub fn span(&self) -> WordSpan<S> {
        self.worker.spans[self.index]
    }

    /// 単語の文字単位の位置範囲を取得します。
    ///
    /// # 戻り値
    ///
    /// 単語の開始位置から終了位置までの文字単位の範囲を返します。
    ///
    /// Gets the position range of the word in characters.
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        self.span().range_char()
    }

    /// 単語のバイト単位の位置範囲を取得します。
    ///
    /// # 戻り値
    ///
    /// 単語の開始位置から終了位置までのバイト単位の範囲を返します。
    ///
    /// Gets the position range of the word in bytes.
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        let text = &self.worker.text;
        let range_char = self.range_char();
        text.byte_position(range_char.start)..text.byte_position(range_char.end)
    }

    /// 単語の表層形（元のテキスト中の文字列）を取得します。
    ///
    /// # 戻り値
    ///
    /// 単語の表層形の文字列参照を返します。
    ///
    /// Gets the surface string of the word.
    #[inline(always)]
    pub fn surface(&self) -> &'w str {
        let text = &self.worker.text;
        &text.raw()[self.range_byte()]
    }

    /// 単語の文字数を取得します。
    ///
    /// # 戻り値
    ///
    /// 単語の文字数を返します。
    ///
    /// Gets the number of characters in the word.
    #[inline(always)]
    pub fn len_chars(&self) -> usize {
        self.span().len_chars()
    }

    /// 単語が辞書に含まれるかどうかを取得します。
    ///
    /// # 戻り値
    ///
    /// 表層形が辞書メンバーであれば`true`を返します。
    ///
    /// Checks if the word is a lexicon member.
    #[inline(always)]
    pub fn is_known(&self) -> bool {
        self.worker.recognizer.lexicon().contains(self.surface())
    }

    /// 単語の符号付き重みを取得します。
    ///
    /// 辞書メンバーは文字数の3乗、非メンバーは文字数の3乗の符号反転が
    /// 重みになります。
    ///
    /// # 戻り値
    ///
    /// 単語の符号付き重みを返します。
    ///
    /// Gets the signed weight of the word.
    #[inline(always)]
    pub fn weight(&self) -> W {
        self.worker
            .recognizer
            .word_weight(self.surface(), self.len_chars())
    }
}

impl<L, S, W> std::fmt::Debug for Word<'_, L, S, W>
where
    L: Lexicon,
    S: SpanInt,
    W: Weight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Word")
            .field("surface", &self.surface())
            .field("range_char", &self.range_char())
            .field("range_byte", &self.range_byte())
            .field("is_known", &self.is_known())
            .field("weight", &self.weight())
            .finish()
    }
}

/// 単語のイテレータ
///
/// 認識の結果得られた単語列を順次取得するためのイテレータです。
/// 前方および後方からの走査をサポートしています（[`DoubleEndedIterator`]を実装）。
///
/// Iterator of words.
pub struct WordIter<'w, L, S = usize, W = i64> {
    worker: &'w Worker<L, S, W>,
    front: usize,
    back: usize,
}

impl<'w, L, S, W> WordIter<'w, L, S, W>
where
    L: Lexicon,
    S: SpanInt,
    W: Weight,
{
    #[inline(always)]
    pub(crate) fn new(worker: &'w Worker<L, S, W>) -> Self {
        let num_words = worker.num_words();
        Self {
            worker,
            front: 0,
            back: num_words,
        }
    }
}

impl<'w, L, S, W> Iterator for WordIter<'w, L, S, W>
where
    L: Lexicon,
    S: SpanInt,
    W: Weight,
{
    type Item = Word<'w, L, S, W>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let w = self.worker.word(self.front);
            self.front += 1;
            Some(w)
        } else {
            None
        }
    }
}

impl<'w, L, S, W> DoubleEndedIterator for WordIter<'w, L, S, W>
where
    L: Lexicon,
    S: SpanInt,
    W: Weight,
{
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            let w = self.worker.word(self.back);
            Some(w)
        } else {
            None
        }
    }
}

//! 単語の位置情報
//!
//! このモジュールは、認識された単語のテキスト中の区間を表す値型を提供します。

use std::ops::Range;

use crate::num::SpanInt;

/// テキスト中の単語の区間
///
/// 文字単位のオフセットと長さの組で、認識結果の1単語分の区間を表します。
/// 認識結果の区間列は、先頭が位置0から始まり、隣接する区間が連続し、
/// 末尾がテキスト全体を覆うように並びます。
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Default)]
pub struct WordSpan<S> {
    /// 単語の開始位置(文字単位)
    pub offset: S,

    /// 単語の長さ(文字単位)
    pub len: S,
}

impl<S: SpanInt> WordSpan<S> {
    /// 新しいインスタンスを作成します。
    #[inline(always)]
    pub const fn new(offset: S, len: S) -> Self {
        Self { offset, len }
    }

    /// 単語の文字単位の位置範囲を取得します。
    ///
    /// Gets the position range of the word in characters.
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        let offset = self.offset.to_usize();
        offset..offset + self.len.to_usize()
    }

    /// 単語の長さを文字数で取得します。
    ///
    /// Gets the length of the word in characters.
    #[inline(always)]
    pub fn len_chars(&self) -> usize {
        self.len.to_usize()
    }
}

//! 動的計画法の表構造の実装モジュール。
//!
//! このモジュールは、重み最大化による単語認識のための表構造を提供します。
//! 先頭からの各プレフィックスに対する最良の合計重みと、そのときに最後に
//! 選ばれた単語の区間を保持し、後方走査で認識結果を復元します。

use crate::num::{SpanInt, Weight};
use crate::span::WordSpan;

/// 動的計画法の表構造体。
///
/// `weights[k]`は先頭`k`文字の最良の合計重みを、`choices[k - 1]`はその
/// 分割で最後に選ばれた単語の区間を保持します。`weights[0]`は常にゼロで、
/// 選択に由来しない唯一のエントリです。
pub struct Chart<S, W> {
    weights: Vec<W>,
    choices: Vec<WordSpan<S>>,
    len_char: usize,
}

impl<S, W> Default for Chart<S, W> {
    fn default() -> Self {
        Self {
            weights: vec![],
            choices: vec![],
            len_char: 0,
        }
    }
}

impl<S, W> Chart<S, W>
where
    S: SpanInt,
    W: Weight,
{
    /// 表をリセットし、新しいテキストの処理を準備します。
    ///
    /// 内部バッファは容量を保持したまま再利用されます。
    ///
    /// # 引数
    ///
    /// * `len_char` - 新しいテキストの文字数
    pub fn reset(&mut self, len_char: usize) {
        self.weights.clear();
        self.weights.reserve(len_char + 1);
        self.weights.push(W::ZERO);
        self.choices.clear();
        self.choices.reserve(len_char);
        self.len_char = len_char;
    }

    /// 先頭`offset`文字の最良の合計重みを返します。
    ///
    /// # 引数
    ///
    /// * `offset` - プレフィックスの文字数
    #[inline(always)]
    pub fn prefix_weight(&self, offset: usize) -> W {
        self.weights[offset]
    }

    /// プレフィックスに対する最良の重みと最後の単語区間を確定します。
    ///
    /// `sub_len`の昇順で呼び出される必要があります。
    ///
    /// # 引数
    ///
    /// * `sub_len` - プレフィックスの末尾の文字位置
    /// * `weight` - 先頭`sub_len + 1`文字の最良の合計重み
    /// * `choice` - その分割で最後に選ばれた単語の区間
    pub fn commit(&mut self, sub_len: usize, weight: W, choice: WordSpan<S>) {
        debug_assert_eq!(self.weights.len(), sub_len + 1);
        debug_assert_eq!(self.choices.len(), sub_len);
        self.weights.push(weight);
        self.choices.push(choice);
    }

    /// テキスト全体に対する最良の合計重みを返します。
    #[inline(always)]
    pub fn total_weight(&self) -> W {
        debug_assert_eq!(self.weights.len(), self.len_char + 1);
        self.weights[self.len_char]
    }

    /// 最良の分割を構成する単語区間を復元し、`spans`に追加します。
    ///
    /// 復元はテキスト末尾の区間から後方にたどり、先頭に達した時点で
    /// 終了します。追加された区間は先頭からの順序に並べ替えられます。
    ///
    /// # 引数
    ///
    /// * `spans` - 区間を追加するベクトル
    pub fn backtrack(&self, spans: &mut Vec<WordSpan<S>>) {
        debug_assert_ne!(self.len_char, 0);
        debug_assert_eq!(self.choices.len(), self.len_char);

        let start = spans.len();
        let mut index = self.len_char - 1;
        loop {
            let choice = self.choices[index];
            spans.push(choice);
            if choice.offset.to_usize() == 0 {
                break;
            }
            // The previous word ends right before this one by construction.
            debug_assert!(choice.len_chars() <= index);
            index -= choice.len_chars();
        }
        spans[start..].reverse();
    }
}

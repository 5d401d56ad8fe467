//! 入力テキストの内部表現を提供するモジュール
//!
//! このモジュールは、認識のために入力テキストを効率的に処理するための
//! 内部データ構造を提供します。文字位置からバイト位置へのマッピングを計算・
//! 保持することで、候補部分文字列の切り出しを割り当てなしのスライス操作に
//! します。

use std::ops::Range;

/// 入力テキストの内部表現を保持する構造体
///
/// # フィールド
///
/// * `input` - 元の入力文字列
/// * `c2b` - 文字位置からバイト位置へのマッピング配列
#[derive(Default, Clone, Debug)]
pub struct Text {
    input: String,
    c2b: Vec<usize>,
}

impl Text {
    /// 新しい空の `Text` インスタンスを生成します
    pub fn new() -> Self {
        Self::default()
    }

    /// 内部状態をクリアします
    #[inline(always)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.c2b.clear();
    }

    /// 入力文字列を設定します
    ///
    /// 既存の内部状態をクリアした後、新しい入力文字列を設定し、
    /// バイト位置マッピングを計算します。内部バッファは再利用されるため、
    /// 以前の入力より長くならない限り再割り当ては発生しません。
    ///
    /// # 引数
    ///
    /// * `input` - 設定する入力文字列
    pub fn set_text<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
        for (bi, _) in self.input.char_indices() {
            self.c2b.push(bi);
        }
        self.c2b.push(self.input.len());
    }

    /// 元の入力文字列への参照を返します
    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// 文字数を返します
    ///
    /// 入力文字列の文字数(バイト数ではない)を返します。
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.c2b.len().saturating_sub(1)
    }

    /// 指定された文字位置に対応するバイト位置を返します
    ///
    /// # 引数
    ///
    /// * `pos_char` - 文字位置(0始まり)
    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    /// 指定された文字範囲に対応する部分文字列を返します
    ///
    /// 切り出しはバイト位置マッピングを使ったスライス操作であり、
    /// 新しい文字列の割り当ては発生しません。
    ///
    /// # 引数
    ///
    /// * `range_char` - 文字単位の範囲
    #[inline(always)]
    pub fn surface(&self, range_char: Range<usize>) -> &str {
        &self.input[self.c2b[range_char.start]..self.c2b[range_char.end]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_positions() {
        let mut text = Text::new();
        text.set_text("自然");
        assert_eq!(text.len_char(), 2);
        assert_eq!(text.byte_position(0), 0);
        assert_eq!(text.byte_position(1), 3);
        assert_eq!(text.byte_position(2), 6);
    }

    #[test]
    fn test_surface_slicing() {
        let mut text = Text::new();
        text.set_text("言語処理");
        assert_eq!(text.surface(0..2), "言語");
        assert_eq!(text.surface(2..4), "処理");
        assert_eq!(text.surface(1..1), "");
        assert_eq!(text.raw(), "言語処理");
    }

    #[test]
    fn test_reuse_clears_previous_input() {
        let mut text = Text::new();
        text.set_text("abcdef");
        text.set_text("xy");
        assert_eq!(text.len_char(), 2);
        assert_eq!(text.raw(), "xy");
        assert_eq!(text.surface(0..2), "xy");
    }

    #[test]
    fn test_empty() {
        let text = Text::new();
        assert_eq!(text.len_char(), 0);

        let mut text = Text::new();
        text.set_text("");
        assert_eq!(text.len_char(), 0);
        assert_eq!(text.raw(), "");
    }
}

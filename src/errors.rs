//! エラー型の定義
//!
//! このモジュールは、Wakachiライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt::{self, Debug};

/// Wakachi専用のResult型
///
/// エラー型としてデフォルトで[`WakachiError`]を使用します。
pub type Result<T, E = WakachiError> = std::result::Result<T, E>;

/// Wakachiのエラー型
///
/// このライブラリで発生する可能性のあるすべてのエラーを表現します。
/// 各バリアントは特定のエラー条件に対応しています。
#[derive(Debug, thiserror::Error)]
pub enum WakachiError {
    /// 空入力エラー
    ///
    /// [`EmptyInputError`]のエラーバリアント。
    #[error(transparent)]
    EmptyInput(EmptyInputError),

    /// 無効な辞書エラー
    ///
    /// [`InvalidLexiconError`]のエラーバリアント。
    #[error(transparent)]
    InvalidLexicon(InvalidLexiconError),

    /// 表現不可能な長さエラー
    ///
    /// [`UnsupportedLengthError`]のエラーバリアント。
    #[error(transparent)]
    UnsupportedLength(UnsupportedLengthError),
}

impl WakachiError {
    /// 空入力エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    pub(crate) fn empty_input(arg: &'static str) -> Self {
        Self::EmptyInput(EmptyInputError { arg })
    }

    /// 無効な辞書エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_lexicon<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidLexicon(InvalidLexiconError { msg: msg.into() })
    }

    /// 表現不可能な長さエラーを生成します
    ///
    /// # 引数
    ///
    /// * `what` - 長さの対象の名前
    /// * `len_chars` - 問題となった文字数
    /// * `bits` - 選択された整数幅のビット数
    pub(crate) fn unsupported_length(what: &'static str, len_chars: usize, bits: u32) -> Self {
        Self::UnsupportedLength(UnsupportedLengthError {
            what,
            len_chars,
            bits,
        })
    }
}

/// 入力が空の場合に使用されるエラー
#[derive(Debug)]
pub struct EmptyInputError {
    /// 引数の名前
    pub(crate) arg: &'static str,
}

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EmptyInputError: {} must not be empty", self.arg)
    }
}

impl Error for EmptyInputError {}

/// 辞書が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidLexiconError {
    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidLexiconError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidLexiconError: {}", self.msg)
    }
}

impl Error for InvalidLexiconError {}

/// 長さが選択された整数幅で表現できない場合に使用されるエラー
#[derive(Debug)]
pub struct UnsupportedLengthError {
    /// 長さの対象の名前
    pub(crate) what: &'static str,

    /// 問題となった文字数
    pub(crate) len_chars: usize,

    /// 選択された整数幅のビット数
    pub(crate) bits: u32,
}

impl fmt::Display for UnsupportedLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "UnsupportedLengthError: the {} length of {} chars is not representable in {} bits",
            self.what, self.len_chars, self.bits
        )
    }
}

impl Error for UnsupportedLengthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            WakachiError::empty_input("text").to_string(),
            "EmptyInputError: text must not be empty"
        );
        assert_eq!(
            WakachiError::invalid_lexicon("words must not be empty").to_string(),
            "InvalidLexiconError: words must not be empty"
        );
        assert_eq!(
            WakachiError::unsupported_length("word", 300, 8).to_string(),
            "UnsupportedLengthError: the word length of 300 chars is not representable in 8 bits"
        );
    }
}

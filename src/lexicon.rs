//! 辞書(単語集合)の抽象化と実装
//!
//! このモジュールは、認識に使用する単語集合への参照インタフェースである
//! [`Lexicon`]トレイトと、その標準実装である[`HashLexicon`]を提供します。
//! 認識器は辞書の内部表現に依存せず、このトレイトを通じて単語の所属判定と
//! 最長単語長の計算のみを行います。

use hashbrown::HashSet;

use crate::errors::{Result, WakachiError};

/// 単語集合への参照能力を定義するトレイト
///
/// 認識器が辞書に要求する操作はこのトレイトがすべてです。単語の長さは
/// 常に文字数(バイト数ではない)で数えます。
pub trait Lexicon {
    /// 指定された単語が辞書に含まれるかを判定します。
    ///
    /// Checks if the lexicon contains the given word.
    fn contains(&self, word: &str) -> bool;

    /// 辞書に含まれる単語数を取得します。
    ///
    /// Gets the number of words in the lexicon.
    fn num_words(&self) -> usize;

    /// 辞書が空かどうかを判定します。
    ///
    /// Checks if the lexicon is empty.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.num_words() == 0
    }

    /// 最長単語の文字数を計算します。
    ///
    /// 空の辞書に対しては`Ok(0)`を返します。
    ///
    /// # エラー
    ///
    /// 長さ0の単語が含まれる場合、[`WakachiError::InvalidLexicon`]を返します。
    ///
    /// Computes the length of the longest word in characters.
    fn longest_word_chars(&self) -> Result<usize>;
}

impl Lexicon for HashSet<String> {
    #[inline(always)]
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }

    #[inline(always)]
    fn num_words(&self) -> usize {
        self.len()
    }

    fn longest_word_chars(&self) -> Result<usize> {
        let mut longest = 0;
        for word in self {
            let len_chars = word.chars().count();
            if len_chars == 0 {
                return Err(WakachiError::invalid_lexicon("words must not be empty"));
            }
            longest = longest.max(len_chars);
        }
        Ok(longest)
    }
}

/// ハッシュ集合に基づく標準の辞書実装
///
/// 構築時に単語を検証し、最長単語の文字数をキャッシュします。これにより
/// [`longest_word_chars`]の呼び出しは集合の走査を伴わない定数時間になります。
///
/// [`longest_word_chars`]: Lexicon::longest_word_chars
///
/// # 例
///
/// ```
/// use wakachi::{HashLexicon, Lexicon};
///
/// let lexicon = HashLexicon::from_words(["the", "black", "board"])?;
/// assert!(lexicon.contains("black"));
/// assert!(!lexicon.contains("white"));
/// assert_eq!(lexicon.num_words(), 3);
/// assert_eq!(lexicon.longest_word_chars()?, 5);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct HashLexicon {
    words: HashSet<String>,
    longest: usize,
}

impl HashLexicon {
    /// 単語の列から新しい辞書を構築します。
    ///
    /// 重複する単語は1つにまとめられます。
    ///
    /// # 引数
    ///
    /// * `words` - 辞書に登録する単語の列
    ///
    /// # エラー
    ///
    /// 空文字列が含まれる場合、[`WakachiError::InvalidLexicon`]を返します。
    ///
    /// Builds a new lexicon from a sequence of words.
    pub fn from_words<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut set = HashSet::new();
        let mut longest = 0;
        for word in words {
            let word = word.into();
            let len_chars = word.chars().count();
            if len_chars == 0 {
                return Err(WakachiError::invalid_lexicon("words must not be empty"));
            }
            longest = longest.max(len_chars);
            set.insert(word);
        }
        Ok(Self {
            words: set,
            longest,
        })
    }
}

impl Lexicon for HashLexicon {
    #[inline(always)]
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline(always)]
    fn num_words(&self) -> usize {
        self.words.len()
    }

    #[inline(always)]
    fn longest_word_chars(&self) -> Result<usize> {
        Ok(self.longest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_dedups() {
        let lexicon = HashLexicon::from_words(["the", "the", "board"]).unwrap();
        assert_eq!(lexicon.num_words(), 2);
        assert!(lexicon.contains("the"));
        assert!(!lexicon.contains("black"));
    }

    #[test]
    fn test_from_words_rejects_empty_word() {
        assert!(HashLexicon::from_words(["the", ""]).is_err());
    }

    #[test]
    fn test_longest_is_char_counted() {
        let lexicon = HashLexicon::from_words(["言語処理", "ab"]).unwrap();
        assert_eq!(lexicon.longest_word_chars().unwrap(), 4);
    }

    #[test]
    fn test_raw_set_longest_scans() {
        let mut words = HashSet::new();
        words.insert("aa".to_string());
        words.insert("bbbb".to_string());
        assert_eq!(words.longest_word_chars().unwrap(), 4);
        assert_eq!(Lexicon::num_words(&words), 2);

        words.insert(String::new());
        assert!(words.longest_word_chars().is_err());
    }

    #[test]
    fn test_empty_set() {
        let words: HashSet<String> = HashSet::new();
        assert!(Lexicon::is_empty(&words));
        assert_eq!(words.longest_word_chars().unwrap(), 0);
    }
}

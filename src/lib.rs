//! # Wakachi
//!
//! Wakachiは、辞書に基づく重み最大化により、区切りのないテキストを単語列に
//! 分割する認識器の実装です。
//!
//! ## 概要
//!
//! このライブラリは、空白などの区切りを持たないテキストを辞書を手がかりに
//! 単語列へ分割するための認識器を提供します。辞書に含まれる部分文字列には
//! 文字数の3乗の正の重み、含まれない部分文字列には文字数の3乗の負の重みを
//! 与え、動的計画法によって合計重みが最大になる分割を厳密に求めます。
//!
//! ## 主な機能
//!
//! - **厳密な最適分割**: 動的計画法による合計重み最大の分割の探索
//! - **探索窓の限定**: 最長単語の文字数を上限とした線形時間の認識
//! - **任意の辞書型**: [`Lexicon`]トレイトによる辞書表現の差し替え
//! - **整数幅の選択**: 区間と重みの格納幅を型パラメータで指定可能
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use wakachi::{HashLexicon, Recognizer};
//!
//! let lexicon = HashLexicon::from_words(["the", "black", "board", "blackboard"])?;
//!
//! let recognizer: Recognizer<_> = Recognizer::new(lexicon)?;
//! let mut worker = recognizer.new_worker();
//!
//! worker.reset_text("theblackboard");
//! worker.recognize()?;
//! assert_eq!(worker.num_words(), 2);
//! assert_eq!(worker.total_weight(), 1027);
//!
//! let w0 = worker.word(0);
//! assert_eq!(w0.surface(), "the");
//! assert_eq!(w0.range_char(), 0..3);
//! assert_eq!(w0.weight(), 27);
//!
//! let w1 = worker.word(1);
//! assert_eq!(w1.surface(), "blackboard");
//! assert_eq!(w1.range_char(), 3..13);
//! assert_eq!(w1.weight(), 1000);
//! # Ok(())
//! # }
//! ```

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("`target_pointer_width` must be 32 or 64");

/// エラー型の定義
pub mod errors;

/// 辞書トレイトと実装
pub mod lexicon;

/// 数値型のユーティリティ
pub mod num;

/// 認識器の実装
pub mod recognizer;

/// 単語区間型の定義
pub mod span;

/// テキストの内部表現
mod text;

/// 単語型の定義
pub mod word;


// Re-exports
pub use lexicon::{HashLexicon, Lexicon};
pub use recognizer::Recognizer;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! 数値幅の抽象化を提供するモジュール
//!
//! このモジュールは、認識器が使用する整数幅を選択可能にするための
//! 2つのトレイトを定義します。`SpanInt`は区間(オフセットと長さ)の格納に、
//! `Weight`は合計重みの累積に使用されます。

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Neg};

/// 区間の格納に使用できる符号なし整数型のトレイト
///
/// オフセットと長さはこの型の値として表に格納されます。幅の小さい型を
/// 選択すると表のメモリ使用量が減りますが、扱えるテキストと単語の
/// 文字数がその幅で表現できる範囲に制限されます。
///
/// # 例
///
/// ```
/// use wakachi::num::SpanInt;
///
/// assert_eq!(u8::from_usize(255), Some(255));
/// assert!(u8::from_usize(256).is_none());
/// assert_eq!(u16::BITS, 16);
/// ```
pub trait SpanInt: Copy + Debug + Default + Eq + Hash + Ord {
    /// この型のビット幅
    const BITS: u32;

    /// usize値からの変換を試みます。
    ///
    /// 値がこの型で表現できる場合は`Some`、できない場合は`None`を返します。
    fn from_usize(x: usize) -> Option<Self>;

    /// usize値への変換を行います。
    fn to_usize(self) -> usize;
}

macro_rules! span_int_impl {
    ($($ty:ty),*) => {
        $(
            impl SpanInt for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn from_usize(x: usize) -> Option<Self> {
                    Self::try_from(x).ok()
                }

                #[inline(always)]
                fn to_usize(self) -> usize {
                    // Lossless because the pointer width is guaranteed to be
                    // 32 or 64 (see the guard in lib.rs).
                    self as usize
                }
            }
        )*
    };
}

span_int_impl!(u8, u16, u32, usize);

#[cfg(target_pointer_width = "64")]
span_int_impl!(u64);

/// 合計重みの累積に使用できる符号付き整数型のトレイト
///
/// 認識中の重みの加算と符号反転はこの型の上で行われます。
/// オーバーフローの検査は行われません。
pub trait Weight: Copy + Debug + Eq + Ord + Add<Output = Self> + Neg<Output = Self> {
    /// ゼロ値
    const ZERO: Self;

    /// この型で表現可能な最小値
    const MIN: Self;

    /// 文字数の3乗を計算します。
    ///
    /// # 例
    ///
    /// ```
    /// use wakachi::num::Weight;
    ///
    /// assert_eq!(<i32 as Weight>::cube(3), 27);
    /// assert_eq!(<i64 as Weight>::cube(10), 1000);
    /// ```
    fn cube(len_chars: usize) -> Self;
}

macro_rules! weight_impl {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;
                const MIN: Self = <$ty>::MIN;

                #[inline(always)]
                fn cube(len_chars: usize) -> Self {
                    let n = len_chars as $ty;
                    n * n * n
                }
            }
        )*
    };
}

weight_impl!(i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_usize_bounds() {
        assert_eq!(u8::from_usize(0), Some(0));
        assert_eq!(u8::from_usize(255), Some(255));
        assert!(u8::from_usize(256).is_none());
        assert_eq!(u16::from_usize(65535), Some(65535));
        assert!(u16::from_usize(65536).is_none());
        assert_eq!(usize::from_usize(usize::MAX), Some(usize::MAX));
    }

    #[test]
    fn test_to_usize_roundtrip() {
        assert_eq!(42u8.to_usize(), 42);
        assert_eq!(u32::MAX.to_usize(), u32::MAX as usize);
    }

    #[test]
    fn test_cube() {
        assert_eq!(<i16 as Weight>::cube(0), 0);
        assert_eq!(<i32 as Weight>::cube(1), 1);
        assert_eq!(<i32 as Weight>::cube(5), 125);
        assert_eq!(<i128 as Weight>::cube(1000), 1_000_000_000);
    }
}

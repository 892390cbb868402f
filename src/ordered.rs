use std::cmp::{Ordering, Reverse};

use bytes::{Bytes, BytesMut};
use itertools::{EitherOrBoth, Itertools};

/// Types with a natural three-way ordering.
///
/// Unlike `Ord`, floating-point numbers are included. Their ordering is total
/// but not IEEE 754 `totalOrder`:
///
/// - NaN is less than every non-NaN value,
/// - NaN equals NaN (whatever its sign or payload),
/// - `-0.0` equals `0.0`.
pub trait Ordered {
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_ordered_for_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_ordered_for_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, (), str,
    String,
);

macro_rules! impl_ordered_for_float {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        // neither is NaN, so `<` and `>` are total here and -0.0 == 0.0
                        (false, false) => {
                            if self < other {
                                Ordering::Less
                            } else if self > other {
                                Ordering::Greater
                            } else {
                                Ordering::Equal
                            }
                        }
                    }
                }
            }
        )*
    };
}

impl_ordered_for_float!(f32, f64);

/// Lexicographic comparison, a shorter prefix sorts first.
fn compare_seq<'a, T, I>(left: I, right: I) -> Ordering
where
    T: Ordered + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for pair in left.into_iter().zip_longest(right) {
        match pair {
            EitherOrBoth::Both(a, b) => match a.compare(b) {
                Ordering::Equal => continue,
                ord => return ord,
            },
            EitherOrBoth::Left(_) => return Ordering::Greater,
            EitherOrBoth::Right(_) => return Ordering::Less,
        }
    }
    Ordering::Equal
}

impl<T: Ordered> Ordered for [T] {
    fn compare(&self, other: &Self) -> Ordering {
        compare_seq(self, other)
    }
}

impl<T: Ordered> Ordered for Vec<T> {
    fn compare(&self, other: &Self) -> Ordering {
        compare_seq(self, other)
    }
}

impl<T: Ordered, const N: usize> Ordered for [T; N] {
    fn compare(&self, other: &Self) -> Ordering {
        compare_seq(self, other)
    }
}

impl<T: Ordered> Ordered for Option<T> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.compare(b),
        }
    }
}

impl<T: Ordered + ?Sized> Ordered for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

impl<T: Ordered + ?Sized> Ordered for Box<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

impl<T: Ordered> Ordered for Reverse<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        other.0.compare(&self.0)
    }
}

impl Ordered for Bytes {
    fn compare(&self, other: &Self) -> Ordering {
        self[..].cmp(&other[..])
    }
}

impl Ordered for BytesMut {
    fn compare(&self, other: &Self) -> Ordering {
        self[..].cmp(&other[..])
    }
}

macro_rules! impl_ordered_for_tuple {
    ($(($($name:ident $idx:tt),+))+) => {
        $(
            impl<$($name: Ordered),+> Ordered for ($($name,)+) {
                fn compare(&self, other: &Self) -> Ordering {
                    Ordering::Equal
                        $(.then_with(|| self.$idx.compare(&other.$idx)))+
                }
            }
        )+
    };
}

impl_ordered_for_tuple! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
}

#[cfg(test)]
mod tests {
    use std::cmp::{Ordering, Reverse};

    use bytes::Bytes;

    use super::Ordered;

    #[test]
    fn float_nan_is_lowest() {
        let cases = [f64::NAN, -f64::NAN];
        for nan in cases {
            assert_eq!(nan.compare(&1.0), Ordering::Less);
            assert_eq!(nan.compare(&f64::NEG_INFINITY), Ordering::Less);
            assert_eq!(1.0_f64.compare(&nan), Ordering::Greater);
            assert_eq!(nan.compare(&f64::NAN), Ordering::Equal);
        }
        assert_eq!(f32::NAN.compare(&f32::MIN), Ordering::Less);
    }

    #[test]
    fn float_signed_zero_is_equal() {
        assert_eq!((-0.0_f64).compare(&0.0), Ordering::Equal);
        assert_eq!((0.0_f32).compare(&-0.0), Ordering::Equal);
    }

    #[test]
    fn float_plain_values() {
        assert_eq!(1.5_f64.compare(&2.5), Ordering::Less);
        assert_eq!(f64::INFINITY.compare(&f64::MAX), Ordering::Greater);
        assert_eq!(3.0_f32.compare(&3.0), Ordering::Equal);
    }

    #[test]
    fn sequences_are_lexicographic() {
        assert_eq!([1_i32, 2].as_slice().compare(&[1, 2, 0][..]), Ordering::Less);
        assert_eq!(vec![2_i32].compare(&vec![1, 9]), Ordering::Greater);
        assert_eq!([f64::NAN, 1.0].compare(&[f64::NAN, 1.0]), Ordering::Equal);
        assert_eq!("abc".compare("abd"), Ordering::Less);
    }

    #[test]
    fn option_none_first() {
        assert_eq!(None::<i32>.compare(&Some(i32::MIN)), Ordering::Less);
        assert_eq!(None::<i32>.compare(&None), Ordering::Equal);
        assert_eq!(Some(2_i32).compare(&Some(1)), Ordering::Greater);
    }

    #[test]
    fn tuples_and_wrappers() {
        assert_eq!((1_i32, "b").compare(&(1, "a")), Ordering::Greater);
        assert_eq!((1_u8, 2.0_f32, 'x').compare(&(1, 2.0, 'x')), Ordering::Equal);
        assert_eq!(Reverse(1_i32).compare(&Reverse(2)), Ordering::Greater);
        assert_eq!(Box::new(5_i32).compare(&Box::new(6)), Ordering::Less);
        assert_eq!(
            Bytes::from_static(b"key1").compare(&Bytes::from_static(b"key2")),
            Ordering::Less
        );
    }
}

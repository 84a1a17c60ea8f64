use std::fmt::{Debug, Display};

/// A type that can be used as an edge weight.
///
/// Kruskal’s algorithm only compares weights, so any total order will
/// do, negative values included. The zero value is reserved: a pair of
/// vertices whose weight is zero has no edge between them.
///
/// The methods must agree with `Ord` in the usual way:
///
/// -  `Self::zero().is_zero()` holds, and no other value is zero.
/// -  `a.checked_add(b)` is `Some(a + b)` whenever the sum is
///    representable, and `None` otherwise.
pub trait Weight : Copy + Debug + Display + Ord {
    /// The weight meaning “no edge”.
    fn zero() -> Self;

    /// Is this the weight meaning “no edge”?
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Adds two weights, or returns `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! weight_impl {
    ($($type_:ident)*) => {
        $(
            impl Weight for $type_ {
                #[inline]
                fn zero() -> Self { 0 }

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    $type_::checked_add(self, other)
                }
            }
        )*
    }
}

weight_impl!(u8 u16 u32 u64 u128 usize);
weight_impl!(i8 i16 i32 i64 i128 isize);

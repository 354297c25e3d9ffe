use crate::ListError;

/// Marks the enclosing branch as unlikely, such as the growth path of an insertion.
#[cold]
#[inline(always)]
pub(crate) const fn cold_path() {}

/// Checks that `index` names an existing slot of a list with `len` elements.
#[inline(always)]
pub(crate) const fn check_slot(index: usize, len: usize) -> Result<(), ListError> {
    if index < len {
        Ok(())
    } else {
        cold_path();
        Err(ListError::IndexOutOfBounds { index, len })
    }
}

/// Checks that `index` is a valid insertion point of a non-empty list.
///
/// The end position (`index == len`) is accepted, an empty list accepts nothing.
#[inline(always)]
pub(crate) const fn check_insert(index: usize, len: usize) -> Result<(), ListError> {
    if len != 0 && index <= len {
        Ok(())
    } else {
        cold_path();
        Err(ListError::IndexOutOfBounds { index, len })
    }
}

/// Implements `PartialEq<$rhs>` for `ArrayList<T>` by comparing the live elements as slices.
macro_rules! impl_slice_eq {
    ($([$($vars:tt)*] $rhs:ty, |$other:ident| $as_slice:expr;)+) => {$(
        impl<T, U, $($vars)*> core::cmp::PartialEq<$rhs> for $crate::ArrayList<T>
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, $other: &$rhs) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), $as_slice)
            }
        }
    )+};
}

pub(crate) use impl_slice_eq;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_bounds() {
        assert_eq!(check_slot(0, 1), Ok(()));
        assert_eq!(
            check_slot(1, 1),
            Err(ListError::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert!(check_slot(0, 0).is_err());
        assert!(check_slot(usize::MAX, 3).is_err());
    }

    #[test]
    fn insert_bounds() {
        assert_eq!(check_insert(0, 2), Ok(()));
        assert_eq!(check_insert(2, 2), Ok(()));
        assert!(check_insert(3, 2).is_err());
        assert_eq!(
            check_insert(0, 0),
            Err(ListError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }
}

use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    mem::{ManuallyDrop, MaybeUninit},
    ops::{Index, IndexMut},
    ptr, slice,
};

use crate::ListError;
use crate::utils::{check_insert, check_slot, cold_path, impl_slice_eq};

/// Number of slots a freshly constructed [`ArrayList`] allocates.
pub const INITIAL_CAPACITY: usize = 10;

/// A contiguous list that can be grown and shrunk at both ends and at any index.
///
/// Elements live in a single buffer, in list order, starting at slot `0`.
/// The buffer starts with [`INITIAL_CAPACITY`] slots and doubles whenever an
/// insertion finds it full. It never shrinks.
///
/// | Operation | Cost |
/// |-----------|------|
/// | [`add_back`](ArrayList::add_back), [`remove_back`](ArrayList::remove_back) | O(1) amortized |
/// | [`add_front`](ArrayList::add_front), [`remove_front`](ArrayList::remove_front) | O(n) |
/// | [`add`](ArrayList::add), [`remove`](ArrayList::remove) | O(n) |
/// | [`get`](ArrayList::get), [`set`](ArrayList::set) | O(1) |
/// | [`contains`](ArrayList::contains), [`remove_item`](ArrayList::remove_item) | O(n) |
///
/// Checked operations report misuse through [`ListError`] and leave the list
/// untouched when they fail.
///
/// # Examples
///
/// ```
/// use arraylist::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.add_back(2);
/// list.add_front(1);
/// list.add(2, 3).unwrap();
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
///
/// assert_eq!(list.remove_front(), Ok(1));
/// assert_eq!(list, [2, 3]);
/// ```
///
/// # Display
///
/// An empty list renders as `null` rather than `[]`:
///
/// ```
/// # use arraylist::ArrayList;
/// let list: ArrayList<i32> = ArrayList::new();
/// assert_eq!(list.to_string(), "null");
/// assert_eq!(format!("{list:?}"), "[]");
/// ```
pub struct ArrayList<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        if self.len > 0 {
            // SAFETY: slots `0..len` are initialized and dropped only here.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len));
            }
        }
    }
}

/// Creates an [`ArrayList`] containing the arguments, appended in order.
///
/// # Examples
///
/// ```
/// # use arraylist::{arraylist, ArrayList};
/// let empty: ArrayList<u8> = arraylist![];
/// assert!(empty.is_empty());
///
/// let list = arraylist!["a", "b", "c"];
/// assert_eq!(list.to_string(), "[a, b, c]");
/// ```
#[macro_export]
macro_rules! arraylist {
    [] => { $crate::ArrayList::new() };
    [$($item:expr),+ $(,)?] => {{
        let mut list = $crate::ArrayList::new();
        $( list.add_back($item); )+
        list
    }};
}

impl<T> ArrayList<T> {
    /// Constructs a new, empty list with room for [`INITIAL_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::ArrayList;
    /// let list: ArrayList<String> = ArrayList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: Box::<[T]>::new_uninit_slice(INITIAL_CAPACITY),
            len: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    /// Returns the number of elements in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::arraylist;
    /// let list = arraylist![1, 2, 3];
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the list. Same as [`len`](ArrayList::len).
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::ArrayList;
    /// let mut list = ArrayList::new();
    /// assert!(list.is_empty());
    ///
    /// list.add_back(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extracts a slice of the live elements, in list order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `0..len` are initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots `0..len` are initialized.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Doubles the buffer when it is full.
    ///
    /// Runs at the start of every insertion, before its index is validated.
    #[inline]
    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            cold_path();
            let new_cap = match self.capacity().checked_mul(2) {
                Some(cap) => cap,
                None => capacity_overflow(),
            };
            self.reallocate(new_cap);
        }
    }

    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let mut buf = Box::<[T]>::new_uninit_slice(new_cap);
        // SAFETY: the new buffer holds at least `len` slots and does not overlap the old one.
        // The old buffer is freed without dropping its slots, whose values now live in `buf`.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), buf.as_mut_ptr() as *mut T, self.len);
        }
        self.buf = buf;
    }

    /// Inserts an element at the front of the list, shifting every element one slot back.
    ///
    /// # Time complexity
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::arraylist;
    /// let mut list = arraylist![2, 3];
    /// list.add_front(1);
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn add_front(&mut self, item: T) {
        self.grow_if_full();

        // SAFETY: `len < capacity` after the growth check.
        unsafe {
            let base = self.as_mut_ptr();
            ptr::copy(base, base.add(1), self.len);
            ptr::write(base, item);
        }
        self.len += 1;
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time complexity
    /// O(1) amortized, O(n) when the buffer doubles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::ArrayList;
    /// let mut list = ArrayList::new();
    /// for i in 0..11 {
    ///     list.add_back(i);
    /// }
    /// assert_eq!(list.get(10), Ok(&10));
    /// ```
    pub fn add_back(&mut self, item: T) {
        self.grow_if_full();

        // SAFETY: `len < capacity` after the growth check.
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), item);
        }
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting the elements after it one slot back.
    ///
    /// `index` may equal the length, which appends. The list must not be empty:
    /// use [`add_front`](ArrayList::add_front) or [`add_back`](ArrayList::add_back)
    /// for the first element.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index > len` or the list is empty.
    /// The element is dropped in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::{arraylist, ArrayList, ListError};
    /// let mut list = arraylist![1, 3];
    /// list.add(1, 2).unwrap();
    /// list.add(3, 4).unwrap();
    /// assert_eq!(list, [1, 2, 3, 4]);
    ///
    /// let mut empty = ArrayList::new();
    /// assert_eq!(
    ///     empty.add(0, 1),
    ///     Err(ListError::IndexOutOfBounds { index: 0, len: 0 })
    /// );
    /// ```
    pub fn add(&mut self, index: usize, item: T) -> Result<(), ListError> {
        self.grow_if_full();
        check_insert(index, self.len)?;

        // SAFETY: `index <= len < capacity`.
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            ptr::copy(ptr, ptr.add(1), self.len - index);
            ptr::write(ptr, item);
        }
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::arraylist;
    /// let list = arraylist![10, 20];
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert!(list.get(2).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        check_slot(index, self.len)?;
        // SAFETY: `index < len`.
        unsafe { Ok(&*self.as_ptr().add(index)) }
    }

    /// Replaces the element at `index`, dropping the previous one.
    ///
    /// Only existing slots can be overwritten, so `index == len` is rejected.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index > len - 1`, which includes
    /// every index of an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::arraylist;
    /// let mut list = arraylist!["a", "b"];
    /// list.set(1, "c").unwrap();
    /// assert_eq!(list, ["a", "c"]);
    /// assert!(list.set(2, "d").is_err());
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, item: T) -> Result<(), ListError> {
        check_slot(index, self.len)?;
        // SAFETY: `index < len`, the assignment drops the old element.
        unsafe {
            *self.as_mut_ptr().add(index) = item;
        }
        Ok(())
    }

    /// Removes the first element and returns it, shifting the rest one slot forward.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    ///
    /// # Time complexity
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::{arraylist, ListError};
    /// let mut list = arraylist![1, 2];
    /// assert_eq!(list.remove_front(), Ok(1));
    /// assert_eq!(list.remove_front(), Ok(2));
    /// assert_eq!(list.remove_front(), Err(ListError::Empty));
    /// ```
    pub fn remove_front(&mut self) -> Result<T, ListError> {
        if self.len == 0 {
            cold_path();
            return Err(ListError::Empty);
        }

        // SAFETY: `len > 0`, slot `0` is moved out before the tail closes the gap.
        unsafe {
            let base = self.as_mut_ptr();
            let value = ptr::read(base);
            ptr::copy(base.add(1), base, self.len - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    /// [`ListError::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::{arraylist, ListError};
    /// let mut list = arraylist![1, 2];
    /// assert_eq!(list.remove_back(), Ok(2));
    /// assert_eq!(list, [1]);
    /// ```
    pub fn remove_back(&mut self) -> Result<T, ListError> {
        if self.len == 0 {
            cold_path();
            return Err(ListError::Empty);
        }

        self.len -= 1;
        // SAFETY: the old last slot is initialized and no longer counted as live.
        unsafe { Ok(ptr::read(self.as_ptr().add(self.len))) }
    }

    /// Removes the element at `index` and returns it, shifting the elements after it forward.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::arraylist;
    /// let mut list = arraylist![1, 2, 3];
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list, [1, 3]);
    /// assert!(list.remove(2).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_slot(index, self.len)?;

        // SAFETY: `index < len`, the slot is moved out before the tail closes the gap.
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            let value = ptr::read(ptr);
            if index < self.len - 1 {
                ptr::copy(ptr.add(1), ptr, self.len - index - 1);
            }
            self.len -= 1;
            Ok(value)
        }
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// The iterator borrows the list, so the list cannot be modified until it is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::ArrayList;
    /// let mut list = ArrayList::new();
    /// list.add_front("a");
    /// list.add_back("b");
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&"a"));
    /// assert_eq!(iter.next(), Some(&"b"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            items: self.as_slice(),
            pos: 0,
        }
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Returns `true` if the list holds an element equal to `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::arraylist;
    /// let list = arraylist![1, 2, 3];
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&4));
    /// ```
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|x| x == item)
    }

    /// Removes elements equal to `item` in one forward pass.
    ///
    /// Each match is dropped and the tail shifts forward into its slot, then the
    /// scan moves on to the next slot. The element that was shifted into the
    /// matched slot is therefore never compared, so of several adjacent equal
    /// elements only every other one is removed. Matches that are not adjacent
    /// are all removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::arraylist;
    /// let mut list = arraylist![1, 2, 3, 2];
    /// list.remove_item(&2);
    /// assert_eq!(list, [1, 3]);
    ///
    /// let mut list = arraylist![1, 2, 2, 3];
    /// list.remove_item(&2);
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn remove_item(&mut self, item: &T) {
        let mut i = 0;
        while i < self.len {
            if self.as_slice()[i] == *item {
                // SAFETY: `i < len`, the slot is moved out before the tail closes the gap.
                // `len` is updated before the removed value is dropped.
                let removed = unsafe {
                    let ptr = self.as_mut_ptr().add(i);
                    let value = ptr::read(ptr);
                    ptr::copy(ptr.add(1), ptr, self.len - i - 1);
                    self.len -= 1;
                    value
                };
                drop(removed);
            }
            i += 1;
        }
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self {
            buf: Box::<[T]>::new_uninit_slice(self.capacity()),
            len: 0,
        };
        for item in self {
            list.add_back(item.clone());
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            return f.write_str("null");
        }

        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Hash> Hash for ArrayList<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= len`. Use [`ArrayList::get`] for a checked lookup.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl_slice_eq! {
    [] ArrayList<U>, |other| other.as_slice();
    [] [U], |other| other;
    [] &[U], |other| *other;
    [] &mut [U], |other| &**other;
    [const N: usize] [U; N], |other| other.as_slice();
    [const N: usize] &[U; N], |other| other.as_slice();
    [] Vec<U>, |other| other.as_slice();
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator that yields its elements front to back.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: `this` is never used or dropped again, so the buffer is moved out exactly once.
            buf: unsafe { ptr::read(&this.buf) },
            pos: 0,
            end: this.len,
        }
    }
}

/// Borrowing iterator over the elements of an [`ArrayList`].
///
/// Created by [`ArrayList::iter`]. Each call to `iter` starts a new pass at the front.
pub struct Iter<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            pos: self.pos,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&&self.items[self.pos..]).finish()
    }
}

/// Owning iterator over the elements of an [`ArrayList`].
///
/// Elements that are not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    pos: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements that have not been yielded yet.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `pos..end` are initialized and not yet moved out.
        unsafe { slice::from_raw_parts((self.buf.as_ptr() as *const T).add(self.pos), self.end - self.pos) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.end {
            return None;
        }
        // SAFETY: `pos < end`, the slot is read once and then skipped.
        let value = unsafe { self.buf[self.pos].assume_init_read() };
        self.pos += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.end - self.pos;
        if remaining > 0 {
            // SAFETY: slots `pos..end` are initialized and owned by the iterator.
            unsafe {
                let ptr = (self.buf.as_mut_ptr() as *mut T).add(self.pos);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, remaining));
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

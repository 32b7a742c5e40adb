//! Iteration over the zero or one elements of a `Maybe`.

use std::iter::FusedIterator;

use super::Maybe;

/// An owning iterator over the payload of a `Maybe`.
///
/// Created by [`Maybe::into_iter`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

/// A borrowing iterator over the payload of a `Maybe`.
///
/// Created by [`Maybe::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::option::IntoIter<&'a T>,
}

/// A mutably borrowing iterator over the payload of a `Maybe`.
///
/// Created by [`Maybe::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: std::option::IntoIter<&'a mut T>,
}

macro_rules! delegate_iterator {
    ($name:ident < $($generics:tt),+ >, $item:ty) => {
        impl<$($generics),+> Iterator for $name<$($generics),+> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($generics),+> DoubleEndedIterator for $name<$($generics),+> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<$($generics),+> ExactSizeIterator for $name<$($generics),+> {}

        impl<$($generics),+> FusedIterator for $name<$($generics),+> {}
    };
}

delegate_iterator!(IntoIter<T>, T);
delegate_iterator!(Iter<'a, T>, &'a T);
delegate_iterator!(IterMut<'a, T>, &'a mut T);

impl<T> Maybe<T> {
    /// Returns an iterator over the payload, yielding one element for `Just`
    /// and none for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use justly::maybe::{Maybe, just};
    ///
    /// assert_eq!(just(1).iter().count(), 1);
    /// assert_eq!(Maybe::<i32>::Nothing.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: Option::<&T>::from(self.as_ref()).into_iter(),
        }
    }

    /// Returns a mutable iterator over the payload.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: Option::<&mut T>::from(self.as_mut()).into_iter(),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: Option::<T>::from(self).into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Maybe<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Collects an iterator of `Maybe` values, stopping at the first `Nothing`.
///
/// # Examples
///
/// ```rust
/// use justly::maybe::{Maybe, just, nothing};
///
/// let all: Maybe<Vec<i32>> = vec![just(1), just(2)].into_iter().collect();
/// assert_eq!(all, just(vec![1, 2]));
///
/// let some_missing: Maybe<Vec<i32>> = vec![just(1), nothing()].into_iter().collect();
/// assert_eq!(some_missing, nothing::<Vec<i32>>());
/// ```
impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Maybe<T>>,
    {
        iterator
            .into_iter()
            .map(Option::<T>::from)
            .collect::<Option<V>>()
            .into()
    }
}

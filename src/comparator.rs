use std::{cmp::Ordering, fmt, sync::Arc};

use crate::{
    error::{Error, Result},
    ordered::Ordered,
};

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// A three-way comparison function over `T`.
///
/// Cloning is cheap, clones share the wrapped function. Combinators consume
/// `self` and return a new comparator, so chains read left to right:
///
/// ```
/// use cmpkit::{by, Comparator};
///
/// let cmp: Comparator<(u32, String)> = by(|p: &(u32, String)| p.0).then_by(|p| p.1.clone());
/// assert!(cmp.less(&(1, "a".into()), &(1, "b".into())));
/// ```
pub struct Comparator<T: ?Sized> {
    name: Arc<str>,
    func: Arc<CompareFn<T>>,
}

/// Orders values by their [`Ordered`] implementation.
///
/// For floats NaN sorts below everything and equals itself, and `-0.0` equals
/// `0.0`.
pub fn natural<T>() -> Comparator<T>
where
    T: Ordered + ?Sized + 'static,
{
    Comparator::with_name("natural", |a: &T, b: &T| a.compare(b))
}

/// Orders values by the natural ordering of the key `f` extracts.
pub fn by<T, R, F>(f: F) -> Comparator<T>
where
    T: ?Sized + 'static,
    R: Ordered + 'static,
    F: Fn(&T) -> R + Send + Sync + 'static,
{
    Comparator::with_name("by", move |a: &T, b: &T| f(a).compare(&f(b)))
}

impl<T: ?Sized + 'static> Comparator<T> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::with_name("from_fn", f)
    }

    pub(crate) fn with_name<F>(name: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::trace!(name = %name, "build comparator");
        Self {
            name,
            func: Arc::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name. Comparison results are unaffected.
    pub fn named(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.func)(a, b)
    }

    /// `-1`, `0` or `1`.
    #[inline]
    pub fn compare_sign(&self, a: &T, b: &T) -> i32 {
        self.compare(a, b) as i32
    }

    #[inline]
    pub fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }

    #[inline]
    pub fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }

    #[inline]
    pub fn greater(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_gt()
    }

    /// Compares by `self`, falling back to `next` when `self` reports equal.
    pub fn then(self, next: Comparator<T>) -> Self {
        let name = format!("{}.then({})", self.name, next.name);
        let (first, second) = (self.func, next.func);
        Self::with_name(name, move |a: &T, b: &T| {
            first(a, b).then_with(|| second(a, b))
        })
    }

    /// Shorthand for `self.then(by(f))`.
    pub fn then_by<R, F>(self, f: F) -> Self
    where
        R: Ordered + 'static,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        self.then(by(f))
    }

    pub fn reversed(self) -> Self {
        let name = format!("{}.reversed()", self.name);
        let inner = self.func;
        Self::with_name(name, move |a: &T, b: &T| inner(a, b).reverse())
    }

    /// Borrows the comparator as a plain closure, e.g. for `slice::sort_by`.
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |a: &T, b: &T| self.compare(a, b)
    }
}

impl<T: 'static> Comparator<T> {
    /// Keys of type `U` are projected to `T` by `f` and compared with `self`.
    pub fn on<U, F>(self, f: F) -> Comparator<U>
    where
        U: ?Sized + 'static,
        F: Fn(&U) -> T + Send + Sync + 'static,
    {
        let name = format!("{}.on(..)", self.name);
        let inner = self.func;
        Comparator::with_name(name, move |a: &U, b: &U| inner(&f(a), &f(b)))
    }

    /// Lifts the comparator to `Option<T>`, `None` sorting first.
    pub fn optional(self) -> Comparator<Option<T>> {
        crate::optional::optional_lift(self)
    }

    /// Returns the greatest of `first` and `rest`. The earliest element wins
    /// a tie.
    pub fn max<I>(&self, first: T, rest: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        rest.into_iter()
            .fold(first, |best, v| if self.greater(&v, &best) { v } else { best })
    }

    /// Returns the least of `first` and `rest`. The earliest element wins a
    /// tie.
    pub fn min<I>(&self, first: T, rest: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        rest.into_iter()
            .fold(first, |best, v| if self.less(&v, &best) { v } else { best })
    }

    /// Like [`Comparator::max`], but over any sequence. Fails on empty input.
    pub fn try_max<I>(&self, values: I) -> Result<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = values.into_iter();
        let first = iter.next().ok_or_else(|| self.empty_input("max"))?;
        Ok(self.max(first, iter))
    }

    /// Like [`Comparator::min`], but over any sequence. Fails on empty input.
    pub fn try_min<I>(&self, values: I) -> Result<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = values.into_iter();
        let first = iter.next().ok_or_else(|| self.empty_input("min"))?;
        Ok(self.min(first, iter))
    }

    fn empty_input(&self, op: &str) -> Error {
        tracing::debug!(comparator = %self.name, op, "reduction over empty input");
        Error::InvalidArgument(format!("{op} requires at least one value"))
    }
}

impl<T: Send + Sync + 'static> Comparator<T> {
    /// Forces `bottom` below every other value.
    ///
    /// The check order is `a` then `b`, so comparing the sentinel with itself
    /// yields `Less`, not `Equal`.
    pub fn with_bottom(self, bottom: T) -> Self {
        let name = format!("{}.with_bottom(..)", self.name);
        let inner = self.func;
        Self::with_name(name, move |a: &T, b: &T| {
            if inner(a, &bottom).is_eq() {
                Ordering::Less
            } else if inner(b, &bottom).is_eq() {
                Ordering::Greater
            } else {
                inner(a, b)
            }
        })
    }

    /// Forces `top` above every other value.
    ///
    /// Comparing the sentinel with itself yields `Greater`, not `Equal`.
    pub fn with_top(self, top: T) -> Self {
        let name = format!("{}.with_top(..)", self.name);
        let inner = self.func;
        Self::with_name(name, move |a: &T, b: &T| {
            if inner(a, &top).is_eq() {
                Ordering::Greater
            } else if inner(b, &top).is_eq() {
                Ordering::Less
            } else {
                inner(a, b)
            }
        })
    }
}

impl<T: ?Sized> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            func: self.func.clone(),
        }
    }
}

impl<T: Ordered + ?Sized + 'static> Default for Comparator<T> {
    fn default() -> Self {
        natural()
    }
}

impl<T: ?Sized> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("name", &self.name)
            .finish()
    }
}

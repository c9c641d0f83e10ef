use std::fmt;

/// Decides which of two priorities belongs closer to the root of a heap
///
/// A heap ordered by a comparator keeps, for every parent/child pair, a parent
/// that the child is not preferred over. Implementations must be consistent
/// with a total order: `prefers(a, b)` and `prefers(b, a)` are never both true.
pub trait Comparator<V> {
    /// Returns true if `a` should sit above `b` in the heap
    fn prefers(&self, a: &V, b: &V) -> bool;
}

/// Smaller values first (min-heap)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinOrder;

impl<V: Ord> Comparator<V> for MinOrder {
    #[inline]
    fn prefers(&self, a: &V, b: &V) -> bool {
        a < b
    }
}

/// Larger values first (max-heap)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxOrder;

impl<V: Ord> Comparator<V> for MaxOrder {
    #[inline]
    fn prefers(&self, a: &V, b: &V) -> bool {
        a > b
    }
}

/// Caller-supplied ordering, e.g. for priorities that are not `Ord`
/// or that compare on a projection.
///
/// The closure receives `(a, b)` and returns true if `a` is better than `b`.
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<F> FnOrder<F> {
    pub fn new(f: F) -> Self {
        FnOrder(f)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder(..)")
    }
}

impl<V, F> Comparator<V> for FnOrder<F>
where
    F: Fn(&V, &V) -> bool,
{
    #[inline]
    fn prefers(&self, a: &V, b: &V) -> bool {
        (self.0)(a, b)
    }
}

impl<V, C: Comparator<V> + ?Sized> Comparator<V> for &C {
    #[inline]
    fn prefers(&self, a: &V, b: &V) -> bool {
        (**self).prefers(a, b)
    }
}

//! Recursive median-of-three quicksort with a Lomuto partition, instrumented to count the work
//! it does.
//!
//! The counter is an explicit accumulator threaded through every call instead of shared state,
//! so two sorts never observe each other's counts.

/// Number of comparisons performed by one sort invocation.
///
/// Besides every element comparison in pivot selection and partitioning, each (recursive) call
/// of the sort itself counts once, including calls on empty or single element ranges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Comparisons(u64);

impl Comparisons {
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn tick(&mut self) {
        self.0 += 1;
    }

    pub const fn count(&self) -> u64 {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Sorts the slice in ascending order and adds the work done to `cmp`.
///
/// An empty slice returns immediately without touching `cmp`.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 3, 1, 2];
/// let mut cmp = prime_sort_bench::Comparisons::new();
///
/// prime_sort_bench::quicksort::sort(&mut v, &mut cmp);
/// assert!(v == [1, 2, 3, 3, 5]);
/// ```
#[inline(always)]
pub fn sort<T>(v: &mut [T], cmp: &mut Comparisons)
where
    T: Ord,
{
    sort_by(v, |a, b| a.lt(b), cmp);
}

/// Sorts the slice with a strict less-than predicate and adds the work done to `cmp`.
///
/// `is_less` must implement a strict weak order, otherwise the resulting order is unspecified.
/// The sort still terminates and keeps every original element in `v`.
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F, cmp: &mut Comparisons)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return;
    }

    quicksort(v, &mut is_less, cmp);
}

/// Sorts the inclusive range `v[low..=high]` in place.
///
/// An empty range (`low > high`) still counts as one sort invocation.
///
/// # Panics
///
/// Panics if `high` is out of bounds of a non-empty range.
pub fn sort_range<T>(v: &mut [T], low: usize, high: usize, cmp: &mut Comparisons)
where
    T: Ord,
{
    if low > high {
        cmp.tick();
        return;
    }

    quicksort(&mut v[low..=high], &mut |a: &T, b: &T| a.lt(b), cmp);
}

/// Sorts `v` recursively.
///
/// Each call counts once, then partitions around the median of the first, middle and last
/// element and recurses into both sides. The pivot is excluded from both sides, so every level
/// shrinks the range by at least one element, including for all-equal input.
fn quicksort<T, F>(v: &mut [T], is_less: &mut F, cmp: &mut Comparisons)
where
    F: FnMut(&T, &T) -> bool,
{
    cmp.tick();

    if v.len() < 2 {
        return;
    }

    let pivot_pos = partition(v, is_less, cmp);

    // Split the slice into `left`, `pivot`, and `right`.
    let (left, right) = v.split_at_mut(pivot_pos);
    let right = &mut right[1..];

    quicksort(left, is_less, cmp);
    quicksort(right, is_less, cmp);
}

/// Orders the first, middle and last element of `v` and then moves the median to the end, where
/// `partition` expects the pivot.
///
/// Always performs exactly three comparisons. Returns the middle position.
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn median_of_three<T, F>(v: &mut [T], is_less: &mut F, cmp: &mut Comparisons) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;
    let mid = last / 2;

    cmp.tick();
    if is_less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }

    cmp.tick();
    if is_less(&v[last], &v[mid]) {
        v.swap(mid, last);
    }

    cmp.tick();
    if is_less(&v[mid], &v[0]) {
        v.swap(0, mid);
    }

    v.swap(mid, last);
    mid
}

/// Takes the input slice `v`, selects a pivot with `median_of_three` and re-arranges the elements
/// such that all elements that compare true for `is_less(elem, pivot)` come first, followed by
/// the pivot, followed by the rest.
///
/// Returns the final position of the pivot.
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn partition<T, F>(v: &mut [T], is_less: &mut F, cmp: &mut Comparisons) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    median_of_three(v, is_less, cmp);

    let last = v.len() - 1;
    let (rest, pivot) = v.split_at_mut(last);
    // `rest` and `pivot` can't alias, so the pivot can stay in place while scanning.
    let pivot = &pivot[0];

    let mut boundary = 0;
    for j in 0..rest.len() {
        cmp.tick();
        if is_less(&rest[j], pivot) {
            rest.swap(boundary, j);
            boundary += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(boundary, last);

    boundary
}

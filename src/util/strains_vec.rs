pub use inner::*;

#[cfg(not(feature = "raw_strains"))]
mod inner {
    use std::slice::Iter;

    /// A specialized `Vec<f64>` for non-negative strain peaks.
    ///
    /// It is compact in the sense that zeros are not stored directly but
    /// instead as amount of times they appear consecutively.
    ///
    /// Charts with long breaks produce long runs of empty sections; this keeps
    /// the list short in that case.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct StrainsVec {
        inner: Vec<StrainsEntry>,
        len: usize,
    }

    /// Either a strain value or an amount of consecutive `0.0`.
    #[derive(Copy, Clone, Debug, PartialEq)]
    enum StrainsEntry {
        Value(f64),
        Zeros(usize),
    }

    impl StrainsVec {
        /// Constructs a new, empty [`StrainsVec`] with at least the specified
        /// capacity.
        pub fn with_capacity(capacity: usize) -> Self {
            Self {
                inner: Vec::with_capacity(capacity),
                len: 0,
            }
        }

        /// Returns the number of elements.
        pub const fn len(&self) -> usize {
            self.len
        }

        pub const fn is_empty(&self) -> bool {
            self.len == 0
        }

        /// Appends an element to the back.
        pub fn push(&mut self, value: f64) {
            if value != 0.0 {
                self.inner.push(StrainsEntry::Value(value));
            } else if let Some(StrainsEntry::Zeros(count)) = self.inner.last_mut() {
                *count += 1;
            } else {
                self.inner.push(StrainsEntry::Zeros(1));
            }

            self.len += 1;
        }

        /// Removes all non-positive entries and sorts the remaining ones in
        /// descending order.
        pub fn retain_non_zero_and_sort(&mut self) {
            self.inner
                .retain(|entry| matches!(entry, StrainsEntry::Value(value) if *value > 0.0));

            self.inner.sort_by(|a, b| b.value().total_cmp(&a.value()));
            self.len = self.inner.len();
        }

        /// Same as [`StrainsVec::retain_non_zero_and_sort`] followed by
        /// [`StrainsVec::iter`].
        pub fn sorted_non_zero_iter(&mut self) -> impl ExactSizeIterator<Item = f64> + '_ {
            self.retain_non_zero_and_sort();

            self.inner.iter().map(|entry| entry.value())
        }

        /// Returns an iterator over all values, including zeros.
        pub fn iter(&self) -> StrainsIter<'_> {
            StrainsIter {
                inner: self.inner.iter(),
                zeros_left: 0,
                len: self.len,
            }
        }

        /// Allocates a new `Vec<f64>` to store all values, including zeros.
        pub fn into_vec(self) -> Vec<f64> {
            let mut vec = Vec::with_capacity(self.len);
            vec.extend(self.iter());

            vec
        }
    }

    impl StrainsEntry {
        const fn value(self) -> f64 {
            match self {
                Self::Value(value) => value,
                Self::Zeros(_) => 0.0,
            }
        }
    }

    pub struct StrainsIter<'a> {
        inner: Iter<'a, StrainsEntry>,
        zeros_left: usize,
        len: usize,
    }

    impl Iterator for StrainsIter<'_> {
        type Item = f64;

        fn next(&mut self) -> Option<Self::Item> {
            if self.zeros_left > 0 {
                self.zeros_left -= 1;
                self.len -= 1;

                return Some(0.0);
            }

            match self.inner.next()? {
                StrainsEntry::Value(value) => {
                    self.len -= 1;

                    Some(*value)
                }
                StrainsEntry::Zeros(count) => {
                    self.zeros_left = count - 1;
                    self.len -= 1;

                    Some(0.0)
                }
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len, Some(self.len))
        }
    }

    impl ExactSizeIterator for StrainsIter<'_> {}
}

#[cfg(feature = "raw_strains")]
mod inner {
    use std::{iter::Copied, slice::Iter};

    /// Plain wrapper around `Vec<f64>`.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct StrainsVec {
        inner: Vec<f64>,
    }

    impl StrainsVec {
        pub fn with_capacity(capacity: usize) -> Self {
            Self {
                inner: Vec::with_capacity(capacity),
            }
        }

        pub fn len(&self) -> usize {
            self.inner.len()
        }

        pub fn is_empty(&self) -> bool {
            self.inner.is_empty()
        }

        pub fn push(&mut self, value: f64) {
            self.inner.push(value);
        }

        pub fn retain_non_zero_and_sort(&mut self) {
            self.inner.retain(|&value| value > 0.0);
            self.inner.sort_by(|a, b| b.total_cmp(a));
        }

        pub fn sorted_non_zero_iter(&mut self) -> impl ExactSizeIterator<Item = f64> + '_ {
            self.retain_non_zero_and_sort();

            self.inner.iter().copied()
        }

        pub fn iter(&self) -> Copied<Iter<'_, f64>> {
            self.inner.iter().copied()
        }

        pub fn into_vec(self) -> Vec<f64> {
            self.inner
        }
    }
}

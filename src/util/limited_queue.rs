use std::ops::Index;

/// Indexed queue with limited capacity.
///
/// Pushing onto a full queue evicts the oldest element. Elements are stored
/// inline so `size_of::<T>() * N` should stay small.
#[derive(Clone, Debug)]
pub struct LimitedQueue<T, const N: usize> {
    queue: [T; N],
    /// If the queue is not empty, `end` is the index of the last element.
    /// Otherwise, it has no meaning.
    end: usize,
    /// Amount of elements in the queue. This is equal to `end + 1` if the
    /// queue is not full, or `N` otherwise.
    len: usize,
}

impl<T, const N: usize> Default for LimitedQueue<T, N>
where
    T: Copy + Default,
{
    fn default() -> Self {
        Self {
            end: N - 1,
            queue: [T::default(); N],
            len: 0,
        }
    }
}

impl<T, const N: usize> LimitedQueue<T, N>
where
    T: Copy + Default,
{
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, const N: usize> LimitedQueue<T, N> {
    pub fn push(&mut self, elem: T) {
        self.end = (self.end + 1) % N;
        self.queue[self.end] = elem;
        self.len += usize::from(self.len < N);
    }

    #[cfg(test)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub const fn last(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.queue[self.end])
        }
    }
}

impl<T, const N: usize> Index<usize> for LimitedQueue<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        let idx = (idx + usize::from(self.len == N) * (self.end + 1)) % N;

        &self.queue[idx]
    }
}

#[cfg(test)]
mod tests {
    use std::cmp;

    use super::LimitedQueue;

    #[test]
    fn empty() {
        let queue = LimitedQueue::<u8, 4>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.last(), None);
    }

    #[test]
    fn single_push() {
        let mut queue = LimitedQueue::<u8, 4>::new();
        queue.push(42);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.last(), Some(&42));
        assert_eq!(queue[0], 42);
    }

    #[test]
    fn evicts_oldest() {
        let mut queue = LimitedQueue::<u8, 4>::new();

        for i in 1..=6 {
            queue.push(i as u8);
            assert_eq!(cmp::min(i, 4), queue.len());
        }

        assert_eq!(queue.last(), Some(&6));
        assert_eq!(queue[0], 3);
        assert_eq!(queue[1], 4);
        assert_eq!(queue[3], 6);
    }
}

use std::collections::VecDeque;

/// The container operations the sorter is allowed to use.
///
/// Everything the algorithm does to its chains goes through this trait, so
/// the two implementations differ only in what `insert` costs.
pub trait Sequence<T>: FromIterator<T> + IntoIterator<Item = T> {
    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> &T;

    fn push_back(&mut self, value: T);

    /// Inserts `value` at `index`, shifting everything after it by one.
    fn insert(&mut self, index: usize, value: T);
}

impl<T> Sequence<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn insert(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }
}

/// Picks the container type the sorter runs on.
pub trait Backend {
    /// Display name used in reports and log events.
    const NAME: &'static str;

    type Seq<T>: Sequence<T>;
}

/// Contiguous storage, backed by `Vec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contiguous {}

impl Backend for Contiguous {
    const NAME: &'static str = "Vec";

    type Seq<T> = Vec<T>;
}

/// Ring-buffer storage, backed by `VecDeque`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deque {}

impl Backend for Deque {
    const NAME: &'static str = "VecDeque";

    type Seq<T> = VecDeque<T>;
}

/// Runtime name for a backend, for callers that choose one from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Contiguous,
    Deque,
}

impl BackendKind {
    pub const ALL: [BackendKind; 2] = [BackendKind::Contiguous, BackendKind::Deque];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Contiguous => Contiguous::NAME,
            BackendKind::Deque => Deque::NAME,
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Backend, BackendKind, Contiguous, Deque, Sequence};
    use std::collections::VecDeque;

    fn exercise<S: Sequence<i32>>() -> Vec<i32> {
        let mut seq = S::with_capacity(4);
        assert!(seq.is_empty());
        seq.push_back(1);
        seq.push_back(3);
        seq.insert(1, 2);
        seq.insert(0, 0);
        assert_eq!(seq.len(), 4);
        assert_eq!(*seq.get(2), 2);
        seq.into_iter().collect()
    }

    #[test]
    fn both_containers_forward_the_same_operations() {
        assert_eq!(exercise::<Vec<i32>>(), vec![0, 1, 2, 3]);
        assert_eq!(exercise::<VecDeque<i32>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn kinds_carry_backend_names() {
        assert_eq!(BackendKind::Contiguous.name(), Contiguous::NAME);
        assert_eq!(BackendKind::Deque.to_string(), Deque::NAME);
    }
}

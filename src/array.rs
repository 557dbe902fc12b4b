use std::fmt;
use std::sync::Arc;

/// An immutable fixed-length array, used as the payload of the byte, int
/// and long array tags.
///
/// There is no mutation API: a tag never changes its contents after
/// construction, a new tag is built instead. Cloning is cheap and shares
/// the underlying buffer; equality compares element values.
pub struct ImmutableArray<T>(Arc<[T]>);

impl<T> ImmutableArray<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A read-only view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Copy> ImmutableArray<T> {
    /// Reads the element at `index` by copy, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<T> {
        self.0.get(index).copied()
    }
}

impl<T> Clone for ImmutableArray<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for ImmutableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for ImmutableArray<T> {}

impl<T: fmt::Debug> fmt::Debug for ImmutableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T> Default for ImmutableArray<T> {
    fn default() -> Self {
        Self(Vec::new().into())
    }
}

impl<T> From<Vec<T>> for ImmutableArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values.into())
    }
}

impl<T: Clone> From<&[T]> for ImmutableArray<T> {
    fn from(values: &[T]) -> Self {
        Self(Arc::from(values))
    }
}

impl<T, const N: usize> From<[T; N]> for ImmutableArray<T> {
    fn from(values: [T; N]) -> Self {
        Self(Arc::from(values))
    }
}

impl<T> FromIterator<T> for ImmutableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ImmutableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_on_read_indexing() {
        let a = ImmutableArray::from(vec![3_i32, 1, 4]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.get(1), Some(1));
        assert_eq!(a.get(3), None);
        assert_eq!(a.as_slice(), &[3, 1, 4]);
    }

    #[test]
    fn equality_is_by_value() {
        let a = ImmutableArray::from(vec![1_i64, 2]);
        let b: ImmutableArray<i64> = [1, 2].into();
        let c = ImmutableArray::from(vec![1_i64, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn clone_shares_the_buffer() {
        let a = ImmutableArray::from(vec![1_i8, 2, 3]);
        let b = a.clone();
        assert!(std::ptr::eq(a.as_slice(), b.as_slice()));
    }
}

use crate::id::TagId;
use crate::tag::Tag;

/// A homogeneous ordered sequence of tags sharing one declared element id.
///
/// The declared id is trusted at construction time: supplying elements of a
/// different kind is a programming error that the binary writer detects and
/// reports, rather than silently corrupting the stream. An empty list may
/// carry [`TagId::End`], meaning no element type is known yet; that
/// degenerate form survives a binary round trip unchanged.
#[derive(Clone, PartialEq, Debug)]
pub struct List {
    element_id: TagId,
    elements: Vec<Tag>,
}

impl List {
    /// An empty list with no element type yet.
    pub fn empty() -> Self {
        Self {
            element_id: TagId::End,
            elements: Vec::new(),
        }
    }

    pub fn new(element_id: TagId, elements: Vec<Tag>) -> Self {
        Self {
            element_id,
            elements,
        }
    }

    /// Builds a list by invoking `generate` exactly `len` times, in
    /// increasing index order. The element id is caller-supplied, not
    /// inferred from the generated tags.
    pub fn from_fn(element_id: TagId, len: usize, generate: impl FnMut(usize) -> Tag) -> Self {
        Self {
            element_id,
            elements: (0..len).map(generate).collect(),
        }
    }

    /// The declared id shared by every element.
    pub fn element_id(&self) -> TagId {
        self.element_id
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.elements
    }
}

impl Default for List {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_runs_in_index_order() {
        let mut seen = Vec::new();
        let list = List::from_fn(TagId::Int, 5, |i| {
            seen.push(i);
            Tag::int(i as i32 * 10)
        });

        assert_eq!(seen, [0, 1, 2, 3, 4]);
        assert_eq!(list.len(), 5);
        assert_eq!(list.get(3), Some(&Tag::Int(30)));
    }

    #[test]
    fn empty_list_has_end_element_id() {
        let list = List::empty();
        assert_eq!(list.element_id(), TagId::End);
        assert!(list.is_empty());
        assert_eq!(list, List::from_fn(TagId::End, 0, |_| unreachable!()));
    }
}

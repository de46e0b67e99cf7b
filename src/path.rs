use core::fmt::{self, Debug, Display};
use std::rc::Rc;

/// One step from a container to one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(index) => Some(*index),
        }
    }
}

impl Display for PathSegment {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathSegment::Key(key) => formatter.write_str(key),
            PathSegment::Index(index) => {
                formatter.write_str("[")?;
                formatter.write_str(itoa::Buffer::new().format(*index))?;
                formatter.write_str("]")
            }
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Location of the value being decoded, from the document root.
///
/// This is a persistent list: [`push`](CodingPath::push) shares the parent
/// instead of copying it, and never modifies `self`. Siblings descending from
/// the same parent therefore cannot observe each other's segments.
#[derive(Clone, Default)]
pub struct CodingPath {
    last: Option<Rc<Node>>,
    len: usize,
}

struct Node {
    parent: Option<Rc<Node>>,
    segment: PathSegment,
}

impl CodingPath {
    /// The path of the document root.
    pub fn root() -> Self {
        CodingPath::default()
    }

    pub fn push(&self, segment: impl Into<PathSegment>) -> Self {
        CodingPath {
            last: Some(Rc::new(Node {
                parent: self.last.clone(),
                segment: segment.into(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.last.as_ref().map(|node| &node.segment)
    }

    /// Segments ordered from the root down.
    pub fn to_vec(&self) -> Vec<PathSegment> {
        let mut segments = Vec::with_capacity(self.len);
        let mut node = self.last.as_deref();
        while let Some(current) = node {
            segments.push(current.segment.clone());
            node = current.parent.as_deref();
        }
        segments.reverse();
        segments
    }

    pub fn iter(&self) -> impl Iterator<Item = PathSegment> {
        self.to_vec().into_iter()
    }
}

impl Drop for CodingPath {
    fn drop(&mut self) {
        // Unlink iteratively so very deep paths cannot overflow the stack.
        let mut next = self.last.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for CodingPath {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.to_vec() == other.to_vec()
    }
}

impl Eq for CodingPath {}

impl From<&[PathSegment]> for CodingPath {
    fn from(segments: &[PathSegment]) -> Self {
        segments
            .iter()
            .fold(CodingPath::root(), |path, segment| path.push(segment.clone()))
    }
}

impl Display for CodingPath {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write_segments(formatter, &self.to_vec())
    }
}

impl Debug for CodingPath {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_list().entries(self.to_vec()).finish()
    }
}

/// Renders `segments` like `items[0].name`, or `<root>` when empty.
pub(crate) fn write_segments(
    formatter: &mut fmt::Formatter,
    segments: &[PathSegment],
) -> fmt::Result {
    if segments.is_empty() {
        return formatter.write_str("<root>");
    }
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 && matches!(segment, PathSegment::Key(_)) {
            formatter.write_str(".")?;
        }
        Display::fmt(segment, formatter)?;
    }
    Ok(())
}

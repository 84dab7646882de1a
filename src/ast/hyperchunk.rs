use crate::ast::{AttributeExpr, DimensionSelector, FunctionCall, Hyperslice};

/// One selector clause.
///
/// The optional sections are `None` only when absent from the source
/// text; a present section always holds at least one entry.
///
/// # Example
/// ```text
/// 0:5|7/a0|a1 > 2/order:rank(a0)/0:10,...
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperchunk {
    /// Array alternatives (mandatory)
    pub arrays: Vec<DimensionSelector>,

    /// Attribute alternatives; `None` means all attributes
    pub attributes: Option<Vec<AttributeExpr>>,

    /// Ordering function; only present together with `attributes`
    pub order: Option<FunctionCall>,

    /// Hyperslice alternatives; `None` means the full chunk extent
    pub hyperslices: Option<Vec<Hyperslice>>,
}

impl Hyperchunk {
    /// A hyperchunk with only its arrays section.
    pub fn new(arrays: Vec<DimensionSelector>) -> Self {
        Hyperchunk {
            arrays,
            attributes: None,
            order: None,
            hyperslices: None,
        }
    }
}

/// Hyperchunks in source order, which is also their processing order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hyperchunks(pub Vec<Hyperchunk>);

impl Hyperchunks {
    pub fn iter(&self) -> std::slice::Iter<'_, Hyperchunk> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Index<usize> for Hyperchunks {
    type Output = Hyperchunk;

    fn index(&self, index: usize) -> &Hyperchunk {
        &self.0[index]
    }
}

impl IntoIterator for Hyperchunks {
    type Item = Hyperchunk;
    type IntoIter = std::vec::IntoIter<Hyperchunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hyperchunks {
    type Item = &'a Hyperchunk;
    type IntoIter = std::slice::Iter<'a, Hyperchunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

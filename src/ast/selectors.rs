/// A `start:stop[:step]` range. Empty components are `None`.
///
/// A missing step is interpreted downstream as a step of 1.
///
/// # Examples
/// ```text
/// 0:5      // start 0, stop 5
/// :10:2    // open start, stop 10, step 2
/// 1:5:     // same as 1:5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slice {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl Slice {
    pub fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Slice { start, stop, step }
    }

    /// A closed `start:stop` range with no step.
    pub fn range(start: i64, stop: i64) -> Self {
        Slice::new(Some(start), Some(stop), None)
    }
}

/// A single axis restriction, used for array selection and for each
/// hyperslice dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionSelector {
    /// Range of indices (`0:5`, `::2`)
    Slice(Slice),

    /// All remaining dimensions (`...`)
    Ellipsis,

    /// Exact index, not a slice (`2`, `-1`)
    Index(i64),
}

impl From<Slice> for DimensionSelector {
    fn from(slice: Slice) -> Self {
        DimensionSelector::Slice(slice)
    }
}

impl From<i64> for DimensionSelector {
    fn from(index: i64) -> Self {
        DimensionSelector::Index(index)
    }
}

/// A rectangular sub-region of a chunk: one selector per dimension.
///
/// # Example
/// ```text
/// 0:2,1:3,...
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Hyperslice(pub Vec<DimensionSelector>);

impl Hyperslice {
    pub fn dimensions(&self) -> &[DimensionSelector] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<DimensionSelector>> for Hyperslice {
    fn from(dimensions: Vec<DimensionSelector>) -> Self {
        Hyperslice(dimensions)
    }
}

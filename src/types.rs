/// A single raw line, including its terminator.
pub type Line = Vec<u8>;

/// Metadata lines (`#` prefixed) passed through verbatim to every replicate.
pub type Header = Vec<Line>;

/// Variant records of the input; the sampling population.
pub type DataLines = Vec<Line>;

/// Replicates keyed by position: `set[i].index() == i`.
pub type ReplicateSet = Vec<Replicate>;

/// One bootstrap replicate.
///
/// Stores the drawn positions into the population rather than copies of the
/// lines, so every emitted line is the original record byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replicate {
    index: usize,
    draws: Vec<usize>,
}
impl Replicate {
    pub fn new(index: usize, draws: Vec<usize>) -> Self {
        Self { index, draws }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Resolves the drawn positions against the population they came from.
    pub fn lines<'a>(&'a self, data: &'a [Line]) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.draws.iter().map(move |&pos| data[pos].as_slice())
    }
}

use std::fmt;

/// Number of components on either side of a swizzle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Arity {
    Two,
    Three,
    Four,
}

impl Arity {
    /// Every arity, in emission order.
    pub const ALL: [Arity; 3] = [Arity::Two, Arity::Three, Arity::Four];

    pub fn count(self) -> usize {
        match self {
            Arity::Two => 2,
            Arity::Three => 3,
            Arity::Four => 4,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Component indices of a single swizzle, leftmost position first.
///
/// Only built by [`PermutationBlock::tuples`], so every index is in range for its block.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexTuple(pub(crate) Vec<usize>);

impl IndexTuple {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for IndexTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// One `#ifdef` guarded group of the generated table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PermutationBlock {
    /// Components available on the source vector.
    pub input: Arity,
    /// Components in the resulting accessor.
    pub output: Arity,
}

impl PermutationBlock {
    pub fn new(input: Arity, output: Arity) -> Self {
        PermutationBlock { input, output }
    }

    /// Macro name, also used as the guard symbol.
    pub fn guard(&self) -> String {
        format!("VECTOR_SWIZZLE_PERMUTATION_{}_{}", self.input, self.output)
    }

    /// Every index tuple of this block in odometer order.
    pub fn tuples(&self) -> Vec<IndexTuple> {
        let sets = vec![(0..self.input.count()).collect::<Vec<_>>(); self.output.count()];

        permutations(sets).into_iter().map(IndexTuple).collect()
    }
}

/// All nine blocks in the order they are emitted:
/// input arity ascending, then output arity ascending.
pub fn blocks() -> impl Iterator<Item = PermutationBlock> {
    Arity::ALL.into_iter().flat_map(|input| {
        Arity::ALL
            .into_iter()
            .map(move |output| PermutationBlock::new(input, output))
    })
}

/// Cartesian product of `sets`, in the order nested loops over them visit it.
///
/// The generated table is consumed positionally, so the first set is the
/// outermost loop and the last set changes on every step.
pub fn permutations<T: Clone>(sets: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let mut out = vec![];
    extend_permutations(&sets, &mut Vec::with_capacity(sets.len()), &mut out);
    out
}

fn extend_permutations<T: Clone>(sets: &[Vec<T>], prefix: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    let Some((set, rest)) = sets.split_first() else {
        out.push(prefix.clone());
        return;
    };

    for item in set {
        prefix.push(item.clone());
        extend_permutations(rest, prefix, out);
        prefix.pop();
    }
}

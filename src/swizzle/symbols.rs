use std::{fmt, str::FromStr};

use thiserror::Error;

use super::permutations::IndexTuple;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolSetError {
    #[error("symbol set must have exactly 4 symbols, found {found}")]
    Length { found: usize },
    #[error("symbol '{0}' appears more than once")]
    Duplicate(char),
}

/// Four distinct single-character component names, e.g. `xyzw`.
///
/// Blocks of input arity `n` only use the first `n` symbols.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ComponentSymbolSet([char; 4]);

impl ComponentSymbolSet {
    pub const POSITION: ComponentSymbolSet = ComponentSymbolSet(['x', 'y', 'z', 'w']);
    pub const COLOR: ComponentSymbolSet = ComponentSymbolSet(['r', 'g', 'b', 'a']);

    /// Sets emitted when none are given explicitly, in order.
    pub const CANONICAL: [ComponentSymbolSet; 2] = [Self::POSITION, Self::COLOR];

    pub fn new(symbols: [char; 4]) -> Result<Self, SymbolSetError> {
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(SymbolSetError::Duplicate(*symbol));
            }
        }

        Ok(ComponentSymbolSet(symbols))
    }

    pub fn symbols(&self) -> &[char; 4] {
        &self.0
    }

    /// Accessor name for `tuple`, e.g. `(0, 2) -> "xz"`.
    ///
    /// Tuples come from [`PermutationBlock::tuples`](super::permutations::PermutationBlock::tuples),
    /// whose indices are always below 4.
    pub fn swizzle_name(&self, tuple: &IndexTuple) -> String {
        tuple.indices().iter().map(|&i| self.0[i]).collect()
    }
}

impl FromStr for ComponentSymbolSet {
    type Err = SymbolSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().collect::<Vec<_>>();
        let symbols: [char; 4] = chars
            .try_into()
            .map_err(|chars: Vec<char>| SymbolSetError::Length { found: chars.len() })?;

        ComponentSymbolSet::new(symbols)
    }
}

impl fmt::Display for ComponentSymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}

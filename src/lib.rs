//! Generator for the vector swizzle permutation macro table.

mod swizzle;

use std::io::{self, Write};

pub use swizzle::{
    emit,
    manifest::manifest,
    permutations::{blocks, permutations, Arity, IndexTuple, PermutationBlock},
    render,
    symbols::{ComponentSymbolSet, SymbolSetError},
};

/// Emits the guarded swizzle table for each symbol set, back to back.
///
/// For each set, every input arity `2..=4` produces three blocks, one per
/// output arity `2..=4`, each containing one macro invocation per index tuple.
/// Tuples are enumerated with repetition, rightmost index varying fastest.
///
/// For example:
///
/// ```
/// use swizzle_permutation::{emit_table, ComponentSymbolSet};
///
/// let mut out = Vec::new();
/// emit_table(&ComponentSymbolSet::CANONICAL, &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// let mut lines = text.lines();
/// assert_eq!(lines.next(), Some("#ifdef VECTOR_SWIZZLE_PERMUTATION_2_2"));
/// assert_eq!(lines.next(), Some("\tVECTOR_SWIZZLE_PERMUTATION_2_2(0, 0, xx)"));
/// assert_eq!(text.lines().last(), Some("#endif"));
/// ```
///
/// Would write...
///
/// ```text
/// #ifdef VECTOR_SWIZZLE_PERMUTATION_2_2
/// 	VECTOR_SWIZZLE_PERMUTATION_2_2(0, 0, xx)
/// 	VECTOR_SWIZZLE_PERMUTATION_2_2(0, 1, xy)
/// 	VECTOR_SWIZZLE_PERMUTATION_2_2(1, 0, yx)
/// 	VECTOR_SWIZZLE_PERMUTATION_2_2(1, 1, yy)
/// #endif
/// #ifdef VECTOR_SWIZZLE_PERMUTATION_2_3
/// 	VECTOR_SWIZZLE_PERMUTATION_2_3(0, 0, 0, xxx)
/// 	...
/// #endif
/// ...
/// #ifdef VECTOR_SWIZZLE_PERMUTATION_4_4
/// 	VECTOR_SWIZZLE_PERMUTATION_4_4(0, 0, 0, 0, rrrr)
/// 	...
/// 	VECTOR_SWIZZLE_PERMUTATION_4_4(3, 3, 3, 3, aaaa)
/// #endif
/// ```
///
/// The consumer defines the macro for the block it wants, then includes the table:
///
/// ```text
/// #define VECTOR_SWIZZLE_PERMUTATION_2_2(I0, I1, NAME) ...
/// #include "eVectorSwizzlePermutation.txt"
/// #undef VECTOR_SWIZZLE_PERMUTATION_2_2
/// ```
pub fn emit_table<W: Write>(sets: &[ComponentSymbolSet], out: &mut W) -> io::Result<()> {
    for symbols in sets {
        tracing::info!(%symbols, "emitting swizzle permutations");
        emit(symbols, out)?;
    }

    Ok(())
}

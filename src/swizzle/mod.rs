pub mod manifest;
pub mod permutations;
pub mod symbols;

use std::io::{self, Write};

use self::{permutations::blocks, symbols::ComponentSymbolSet};

/// Writes the guarded macro table for one symbol set.
///
/// For every [`PermutationBlock`](permutations::PermutationBlock) in emission order:
///
/// ```text
/// #ifdef VECTOR_SWIZZLE_PERMUTATION_2_2
/// 	VECTOR_SWIZZLE_PERMUTATION_2_2(0, 0, xx)
/// 	VECTOR_SWIZZLE_PERMUTATION_2_2(0, 1, xy)
/// 	...
/// #endif
/// ```
pub fn emit<W: Write>(symbols: &ComponentSymbolSet, out: &mut W) -> io::Result<()> {
    for block in blocks() {
        let guard = block.guard();
        let tuples = block.tuples();

        tracing::debug!(%symbols, %guard, count = tuples.len(), "emitting block");

        writeln!(out, "#ifdef {guard}")?;
        for tuple in tuples.iter() {
            let name = symbols.swizzle_name(tuple);
            writeln!(out, "\t{guard}({tuple}, {name})")?;
        }
        writeln!(out, "#endif")?;
    }

    Ok(())
}

/// [`emit`] into a string.
pub fn render(symbols: &ComponentSymbolSet) -> String {
    let mut buf = Vec::new();
    emit(symbols, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Accepts `budget` writes, then fails every write after that.
    struct FailingWriter {
        budget: usize,
        failed_writes: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                self.failed_writes += 1;
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.budget -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_error_stops_emission() {
        for budget in [0, 3, 100] {
            let mut out = FailingWriter {
                budget,
                failed_writes: 0,
            };
            let err = emit(&ComponentSymbolSet::POSITION, &mut out).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
            assert_eq!(out.failed_writes, 1, "kept writing after failure");
        }
    }

    fn block_body<'a>(text: &'a str, guard: &str) -> Vec<&'a str> {
        text.lines()
            .skip_while(|line| *line != format!("#ifdef {guard}"))
            .skip(1)
            .take_while(|line| *line != "#endif")
            .collect()
    }

    #[test]
    fn position_2_2_body() {
        let text = render(&ComponentSymbolSet::POSITION);
        assert_eq!(
            block_body(&text, "VECTOR_SWIZZLE_PERMUTATION_2_2"),
            vec![
                "\tVECTOR_SWIZZLE_PERMUTATION_2_2(0, 0, xx)",
                "\tVECTOR_SWIZZLE_PERMUTATION_2_2(0, 1, xy)",
                "\tVECTOR_SWIZZLE_PERMUTATION_2_2(1, 0, yx)",
                "\tVECTOR_SWIZZLE_PERMUTATION_2_2(1, 1, yy)",
            ]
        );
    }

    #[test]
    fn color_4_4_bounds() {
        let text = render(&ComponentSymbolSet::COLOR);
        let body = block_body(&text, "VECTOR_SWIZZLE_PERMUTATION_4_4");
        assert_eq!(body.len(), 256);
        assert_eq!(body[0], "\tVECTOR_SWIZZLE_PERMUTATION_4_4(0, 0, 0, 0, rrrr)");
        assert_eq!(body[1], "\tVECTOR_SWIZZLE_PERMUTATION_4_4(0, 0, 0, 1, rrrg)");
        assert_eq!(body[255], "\tVECTOR_SWIZZLE_PERMUTATION_4_4(3, 3, 3, 3, aaaa)");
    }

    #[test]
    fn three_component_block_start() {
        let text = render(&ComponentSymbolSet::POSITION);
        let body = block_body(&text, "VECTOR_SWIZZLE_PERMUTATION_3_3");
        assert_eq!(body.len(), 27);
        assert_eq!(
            &body[..4],
            &[
                "\tVECTOR_SWIZZLE_PERMUTATION_3_3(0, 0, 0, xxx)",
                "\tVECTOR_SWIZZLE_PERMUTATION_3_3(0, 0, 1, xxy)",
                "\tVECTOR_SWIZZLE_PERMUTATION_3_3(0, 0, 2, xxz)",
                "\tVECTOR_SWIZZLE_PERMUTATION_3_3(0, 1, 0, xyx)",
            ]
        );
    }

    #[test]
    fn names_match_indices() {
        let symbols = ComponentSymbolSet::POSITION;
        let text = render(&symbols);
        for line in text.lines().filter(|line| line.starts_with('\t')) {
            let args = line
                .split_once('(')
                .and_then(|(_, rest)| rest.strip_suffix(')'))
                .unwrap();
            let mut args = args.split(", ").collect::<Vec<_>>();
            let name = args.pop().unwrap();
            assert_eq!(name.chars().count(), args.len(), "{line}");
            for (c, index) in name.chars().zip(args) {
                let index: usize = index.parse().unwrap();
                assert_eq!(c, symbols.symbols()[index], "{line}");
            }
        }
    }

    #[test]
    fn guards_are_balanced() {
        let text = render(&ComponentSymbolSet::COLOR);
        let mut open = None;
        let mut seen = vec![];
        for line in text.lines() {
            if let Some(guard) = line.strip_prefix("#ifdef ") {
                assert_eq!(open, None, "nested guard {guard}");
                open = Some(guard);
                seen.push(guard);
            } else if line == "#endif" {
                assert!(open.take().is_some(), "unmatched #endif");
            } else {
                let guard = open.expect("body line outside guard");
                assert!(line.starts_with(&format!("\t{guard}(")), "{line}");
            }
        }
        assert_eq!(open, None);
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn total_line_count() {
        // 9 blocks of guard lines plus 4 + 8 + 16 + 9 + 27 + 81 + 16 + 64 + 256 bodies
        let text = render(&ComponentSymbolSet::POSITION);
        assert_eq!(text.lines().count(), 18 + 481);
        assert!(text.ends_with("#endif\n"));
    }
}

//! JSON rendering of the swizzle table.
//!
//! The layout is:
//!
//! ```json
//! [
//!     {
//!         "symbols": "xyzw",
//!         "blocks": {
//!             "VECTOR_SWIZZLE_PERMUTATION_2_2": [
//!                 [0, 0, "xx"],
//!                 [0, 1, "xy"],
//!                 ...
//!             ],
//!             ...
//!         }
//!     },
//!     ...
//! ]
//! ```
//!
//! Keys and entries keep the same order as the macro output.

use json::{object::Object, JsonValue};

use super::{permutations::blocks, symbols::ComponentSymbolSet};

pub fn manifest(sets: &[ComponentSymbolSet]) -> JsonValue {
    JsonValue::Array(sets.iter().map(symbol_set_entry).collect())
}

fn symbol_set_entry(symbols: &ComponentSymbolSet) -> JsonValue {
    let mut table = Object::new();

    for block in blocks() {
        let entries = block
            .tuples()
            .iter()
            .map(|tuple| {
                let mut entry = tuple
                    .indices()
                    .iter()
                    .map(|&index| JsonValue::from(index))
                    .collect::<Vec<_>>();
                entry.push(symbols.swizzle_name(tuple).into());
                JsonValue::Array(entry)
            })
            .collect();

        table.insert(&block.guard(), JsonValue::Array(entries));
    }

    let mut entry = Object::new();
    entry.insert("symbols", symbols.to_string().into());
    entry.insert("blocks", JsonValue::Object(table));
    JsonValue::Object(entry)
}

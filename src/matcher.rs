//! The Aho–Corasick walk over input text.

use crate::error::Result;
use crate::keyspace::Keyspace;
use crate::output::fail;
use crate::store::StoreAdapter;

/// Extends `state` by `c` if the result is a known trie node.
fn goto(store: &mut impl StoreAdapter, keys: &Keyspace, state: &str, c: char) -> Result<Option<String>> {
    let mut candidate = state.to_string();
    candidate.push(c);
    if store.zscore(&keys.prefix_key(), &candidate)?.is_some() {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

/// Finds every keyword occurrence in `text`, returning the concatenation
/// of output sets encountered at each visited state, appended before the
/// transition out of that state and once more after the final character.
pub(crate) fn find(store: &mut impl StoreAdapter, keys: &Keyspace, text: &str) -> Result<Vec<String>> {
    let mut result = Vec::new();
    let mut state = String::new();

    for c in text.chars() {
        result.extend(store.smembers(&keys.output_key(&state))?);

        let next = match goto(store, keys, &state, c)? {
            Some(next) => next,
            None => {
                let s1 = fail(store, keys, &state)?;
                match goto(store, keys, &s1, c)? {
                    Some(next) => next,
                    None => fail(store, keys, &format!("{s1}{c}"))?,
                }
            }
        };
        state = next;
    }

    result.extend(store.smembers(&keys.output_key(&state))?);
    Ok(result)
}

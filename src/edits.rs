//! Single-character edit neighbourhoods.
//!
//! Every operation works on `char` boundaries. Letters are only ever
//! introduced from [`ALPHABET`]; any other characters already in the word are
//! carried through untouched.

use std::collections::HashSet;
use std::slice;

pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

fn assemble(parts: &[&[char]]) -> String {
    parts.iter().flat_map(|p| p.iter()).collect()
}

/// All `len + 1` ways to cut `word` into a prefix and a suffix.
pub fn splits(word: &str) -> Vec<(String, String)> {
    let chars: Vec<char> = word.chars().collect();
    (0..=chars.len())
        .map(|i| (assemble(&[&chars[..i]]), assemble(&[&chars[i..]])))
        .collect()
}

/// Drops one character.
pub fn deletes(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .map(|i| assemble(&[&chars[..i], &chars[i + 1..]]))
        .collect()
}

/// Transposes two adjacent characters.
pub fn swaps(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len().saturating_sub(1))
        .map(|i| {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            swapped.into_iter().collect::<String>()
        })
        .collect()
}

/// Replaces one character with each alphabet letter, including itself.
pub fn replaces(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity(chars.len() * ALPHABET.len());
    for i in 0..chars.len() {
        for letter in ALPHABET {
            out.push(assemble(&[&chars[..i], slice::from_ref(&letter), &chars[i + 1..]]));
        }
    }
    out
}

/// Inserts each alphabet letter at every split point.
pub fn inserts(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = Vec::with_capacity((chars.len() + 1) * ALPHABET.len());
    for i in 0..=chars.len() {
        for letter in ALPHABET {
            out.push(assemble(&[&chars[..i], slice::from_ref(&letter), &chars[i..]]));
        }
    }
    out
}

/// Every string one elementary edit away from `word`.
///
/// A word may appear in its own neighbourhood through a no-op replace.
pub fn edits1(word: &str) -> HashSet<String> {
    let mut edits = HashSet::new();
    edits.extend(deletes(word));
    edits.extend(swaps(word));
    edits.extend(replaces(word));
    edits.extend(inserts(word));
    edits
}

/// Every string reachable by applying two elementary edits in sequence.
pub fn edits2(word: &str) -> HashSet<String> {
    edits1(word).iter().flat_map(|e1| edits1(e1)).collect()
}

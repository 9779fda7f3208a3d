/// Sorts the characters of `word` by code point.
///
/// Two words are anagrams exactly when their keys are equal. No case folding
/// or normalization happens here, so `"Cat"` and `"act"` get different keys.
pub fn canonical_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

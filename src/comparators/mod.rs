use crate::comparator::Comparator;

/// Lexicographic byte order, the order of `memcmp`.
pub fn bytewise() -> Comparator<[u8]> {
    Comparator::with_name("cmpkit.BytewiseComparator", |a: &[u8], b: &[u8]| a.cmp(b))
}

/// Compares strings by their lowercase characters, without allocating.
pub fn case_insensitive() -> Comparator<str> {
    Comparator::with_name("cmpkit.CaseInsensitiveComparator", |a: &str, b: &str| {
        a.chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase))
    })
}

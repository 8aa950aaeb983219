/// Defines a hash function over keys of type `T`. The table reduces
/// the result modulo its bucket count
pub trait Hash<T: ?Sized> {
    fn hash(val: &T) -> usize;
}

/// Sums the code points of every character in a string.
///
/// # Notes
///
/// The sum ignores character order, so anagrams such as `"Amy"` and
/// `"May"` always land in the same bucket
pub struct CharSumHash;

/// The character sum of a string
///
/// # Arguments
///
/// `str`: The string to hash
fn char_sum<S: AsRef<str>>(str: S) -> usize {
    str.as_ref()
        .chars()
        .fold(0usize, |sum, c| sum.wrapping_add(c as usize))
}

impl Hash<str> for CharSumHash {
    fn hash(val: &str) -> usize {
        char_sum(val)
    }
}

impl Hash<String> for CharSumHash {
    fn hash(val: &String) -> usize {
        char_sum(val)
    }
}

/// The FNV-1 hash, for callers that want keys spread more evenly than
/// the character sum manages
pub struct Fnv1Hash;

/// The FNV1 hash function
///
/// # Arguments
///
/// `str`: The string to hash
fn fnv1<S: AsRef<str>>(str: S) -> usize {
    let mut res: u32 = 2166136261;
    str.as_ref()
        .bytes()
        .for_each(|c| res = (res.wrapping_mul(16777619)) ^ (c as u32));
    res as usize
}

impl Hash<str> for Fnv1Hash {
    fn hash(val: &str) -> usize {
        fnv1(val)
    }
}

impl Hash<String> for Fnv1Hash {
    fn hash(val: &String) -> usize {
        fnv1(val)
    }
}

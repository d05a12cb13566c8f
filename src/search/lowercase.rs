/// Case-insensitive matching helpers.
/// ASCII input takes a byte-level fast path; anything else goes through
/// full Unicode lowercasing.
pub trait FastLowercase {
    fn fast_to_lowercase(&self) -> String;
    /// `needle` must already be lowercased with `fast_to_lowercase`.
    fn contains_lowercased(&self, needle: &str) -> bool;
}

impl FastLowercase for str {
    #[inline]
    fn fast_to_lowercase(&self) -> String {
        if self.is_ascii() {
            self.to_ascii_lowercase()
        } else {
            self.to_lowercase()
        }
    }

    fn contains_lowercased(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        if self.len() < needle.len() && self.is_ascii() {
            return false;
        }
        let haystack = self.fast_to_lowercase();
        memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_to_lowercase_ascii() {
        assert_eq!("HELLO".fast_to_lowercase(), "hello");
        assert_eq!("Core JavaScript Concepts".fast_to_lowercase(), "core javascript concepts");
        assert_eq!("ES6+".fast_to_lowercase(), "es6+");
    }

    #[test]
    fn test_fast_to_lowercase_unicode() {
        assert_eq!("CAFÉ".fast_to_lowercase(), "café");
        assert_eq!("МОСКВА".fast_to_lowercase(), "москва");
    }

    #[test]
    fn test_contains_lowercased() {
        assert!("Closures".contains_lowercased("clos"));
        assert!("DOM & Browser APIs".contains_lowercased("& b"));
        assert!("Async/await".contains_lowercased("c/a"));
        assert!(!"Hoisting".contains_lowercased("closures"));
        assert!("Café au lait".contains_lowercased("café"));
    }

    #[test]
    fn test_edge_cases() {
        assert!("".contains_lowercased(""));
        assert!("Hello".contains_lowercased(""));
        assert!(!"".contains_lowercased("hello"));
        assert!(!"ab".contains_lowercased("abc"));
    }
}

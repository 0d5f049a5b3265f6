//! String-keyed lookup tables with a guaranteed fallback
//!
//! Content decides which icon a card shows by naming it (`"scan"`,
//! `"lock"` ...). A key the table does not know renders the fallback entry
//! instead of failing.

/// Static key → value table that always yields a value.
///
/// # Example
///
/// ```
/// use demorph_core::FallbackMap;
///
/// let icons = FallbackMap::new("wave", [("scan", "search"), ("lock", "padlock")]);
/// assert_eq!(*icons.get("lock"), "padlock");
/// assert_eq!(*icons.get("unknown"), "wave");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackMap<T> {
    entries: Vec<(&'static str, T)>,
    fallback: T,
}

impl<T> FallbackMap<T> {
    pub fn new<I>(fallback: T, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, T)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            fallback,
        }
    }

    /// Value for `key`, or the fallback when absent.
    pub fn get(&self, key: &str) -> &T {
        self.lookup(key).unwrap_or_else(|| {
            tracing::trace!(key, "Lookup miss, using fallback");
            &self.fallback
        })
    }

    /// Value for `key` without falling back
    pub fn lookup(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, value)| value)
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_resolve() {
        let map = FallbackMap::new(0, [("a", 1), ("b", 2)]);
        assert_eq!(*map.get("a"), 1);
        assert_eq!(*map.get("b"), 2);
    }

    #[test]
    fn unknown_and_empty_keys_fall_back() {
        let map = FallbackMap::new(0, [("a", 1)]);
        assert_eq!(*map.get("z"), 0);
        assert_eq!(*map.get(""), 0);
        assert_eq!(map.lookup("z"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let map = FallbackMap::new("fallback", [("github", "gh")]);
        assert_eq!(*map.get("GitHub"), "fallback");
    }

    #[test]
    fn keys_in_declared_order() {
        let map = FallbackMap::new(0, [("x", 1), ("y", 2)]);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["x", "y"]);
        assert_eq!(*map.fallback(), 0);
    }
}

//! Text renderings of a [`HashTable`]
//!
//! `Display` lists the pairs as `{key: value, ...}` in insertion order, writing keys and values
//! in their `Debug` (literal) form. `Debug` wraps the same listing in the constructor call that
//! rebuilds the table.

use std::{
    fmt,
    hash::{BuildHasher, Hash},
};

use crate::HashTable;

impl<K, V, S> HashTable<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    /// Writes `{key: value, ...}`
    fn write_pairs(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, (key, value)) in self.entries().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value:?}")?;
        }
        f.write_str("}")
    }
}

impl<K, V, S> fmt::Display for HashTable<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_pairs(f)
    }
}

impl<K, V, S> fmt::Debug for HashTable<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashTable::from_entries(")?;
        self.write_pairs(f)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use crate::HashTable;

    #[test]
    fn test_display_uses_literals_in_insertion_order() {
        let table = HashTable::from_entries([("name", "Lorena"), ("city", "Lisbon")], None).unwrap();
        assert_eq!(table.to_string(), r#"{"name": "Lorena", "city": "Lisbon"}"#);
    }

    #[test]
    fn test_display_of_empty_table() {
        let table: HashTable<i32, f64> = HashTable::new(8).unwrap();
        assert_eq!(table.to_string(), "{}");
        assert_eq!(format!("{table:?}"), "HashTable::from_entries({})");
    }

    #[test]
    fn test_debug_wraps_in_constructor() {
        let mut table = HashTable::new(10).unwrap();
        table.set(55, 34.99);
        table.set(1, 0.5);
        assert_eq!(format!("{table:?}"), "HashTable::from_entries({55: 34.99, 1: 0.5})");
    }

    #[test]
    fn test_display_reflects_deletion() {
        let mut table = HashTable::from_entries([(1, true), (2, false), (3, true)], None).unwrap();
        assert_eq!(table.delete(&2), Ok(false));
        assert_eq!(table.to_string(), "{1: true, 3: true}");
    }
}

use std::collections::HashMap;
use std::sync::OnceLock;

/// Known skill synonyms and abbreviations, grouped by meaning
///
/// Every name in a group counts as equivalent to every other name in
/// the same group. Matching happens on normalized text, so entries are
/// listed lowercase.
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["js", "javascript"],
    &["ts", "typescript"],
    &["py", "python"],
    &["c#", "csharp"],
    &["c++", "cplusplus"],
    &["css", "css3"],
    &["html", "html5"],
    &["node", "nodejs", "node.js"],
    &["react", "reactjs", "react.js"],
    &["vue", "vuejs", "vue.js"],
    &["angular", "angularjs"],
    &["ml", "machine learning"],
    &["ai", "artificial intelligence"],
    &["db", "database"],
    &["sql", "structured query language"],
    &["mongodb", "mongo"],
    &["postgresql", "postgres"],
    &["express", "expressjs", "express.js"],
];

/// Normalizes a raw skill name for comparison: trimmed and lower-cased
#[inline]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Read-only lookup answering "do these two names mean the same skill?"
///
/// Built once from [`SYNONYM_GROUPS`] and shared for the lifetime of
/// the process via [`shared`]. Tests that need a different vocabulary
/// can construct their own table with [`SynonymTable::from_groups`].
#[derive(Debug, Clone)]
pub struct SynonymTable {
    group_of: HashMap<String, usize>,
}

impl SynonymTable {
    /// Builds a table from groups of mutually equivalent names
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut group_of = HashMap::new();
        for (index, group) in groups.iter().enumerate() {
            for name in group.iter() {
                group_of.insert((*name).to_string(), index);
            }
        }
        Self { group_of }
    }

    /// True when both names belong to the same synonym group
    ///
    /// Expects normalized input; unknown names never match anything.
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        match (self.group_of.get(a), self.group_of.get(b)) {
            (Some(group_a), Some(group_b)) => group_a == group_b,
            _ => false,
        }
    }
}

/// Process-wide synonym table built on first use
pub fn shared() -> &'static SynonymTable {
    static TABLE: OnceLock<SynonymTable> = OnceLock::new();
    TABLE.get_or_init(|| SynonymTable::from_groups(SYNONYM_GROUPS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  JavaScript  "), "javascript");
        assert_eq!(normalize("C++"), "c++");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_known_pair_is_symmetric() {
        let table = shared();
        assert!(table.are_synonyms("js", "javascript"));
        assert!(table.are_synonyms("javascript", "js"));
    }

    #[test]
    fn test_groups_are_transitive() {
        let table = shared();
        assert!(table.are_synonyms("node", "node.js"));
        assert!(table.are_synonyms("nodejs", "node.js"));
        assert!(table.are_synonyms("react", "reactjs"));
    }

    #[test]
    fn test_multiword_synonyms() {
        let table = shared();
        assert!(table.are_synonyms("ml", "machine learning"));
        assert!(table.are_synonyms("sql", "structured query language"));
    }

    #[test]
    fn test_unknown_names_never_match() {
        let table = shared();
        assert!(!table.are_synonyms("rust", "golang"));
        assert!(!table.are_synonyms("js", "rust"));
        assert!(!table.are_synonyms("", ""));
    }

    #[test]
    fn test_custom_table() {
        let table = SynonymTable::from_groups(&[&["k8s", "kubernetes"]]);
        assert!(table.are_synonyms("k8s", "kubernetes"));
        assert!(!table.are_synonyms("js", "javascript"));
    }
}

use crate::shared::error::BomlintError;
use crate::shared::Result;
use std::collections::BTreeSet;

/// Maximum number of allow-listed dependencies
const MAX_ALLOW_LIST_ENTRIES: usize = 1024;

/// Maximum length of a dependency name (npm registry limit)
const MAX_NAME_LENGTH: usize = 214;

/// ConflictAllowList policy: dependencies whose divergent versions are accepted
///
/// Allow-listed names are left out of the dependency index entirely, so they
/// can never be reported as conflicts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictAllowList {
    names: BTreeSet<String>,
}

impl ConflictAllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an allow-list from individual names
    ///
    /// Names are trimmed; each element may itself be a comma-separated list,
    /// so `--allow-conflicts a,b --allow-conflicts c` and config lists share
    /// one code path.
    ///
    /// # Errors
    /// - An empty name (e.g. `"a,,b"`)
    /// - A name longer than the npm limit
    /// - More than `MAX_ALLOW_LIST_ENTRIES` names
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allow_list = Self::new();
        for raw in names {
            for name in raw.as_ref().split(',') {
                allow_list.add(name)?;
            }
        }
        Ok(allow_list)
    }

    /// Parses a single comma-separated list
    pub fn parse(list: &str) -> Result<Self> {
        Self::from_names([list])
    }

    fn add(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BomlintError::Validation {
                message: "Allowed conflict names must not be empty".to_string(),
            }
            .into());
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(BomlintError::Validation {
                message: format!(
                    "Allowed conflict name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_NAME_LENGTH
                ),
            }
            .into());
        }
        self.names.insert(name.to_string());
        if self.names.len() > MAX_ALLOW_LIST_ENTRIES {
            return Err(BomlintError::Validation {
                message: format!(
                    "Too many allowed conflicts (maximum: {})",
                    MAX_ALLOW_LIST_ENTRIES
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Union of two allow-lists
    pub fn union(mut self, other: ConflictAllowList) -> Self {
        self.names.extend(other.names);
        self
    }

    pub fn allows(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Allowed names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let allow_list = ConflictAllowList::parse("react, typescript ,jest").unwrap();
        assert_eq!(allow_list.len(), 3);
        assert!(allow_list.allows("react"));
        assert!(allow_list.allows("typescript"));
        assert!(!allow_list.allows("lodash"));
    }

    #[test]
    fn test_names_are_sorted() {
        let allow_list = ConflictAllowList::from_names(["zod", "ajv,lodash"]).unwrap();
        assert_eq!(allow_list.names().collect::<Vec<_>>(), vec!["ajv", "lodash", "zod"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let allow_list = ConflictAllowList::from_names(["foo", "foo,foo"]).unwrap();
        assert_eq!(allow_list.len(), 1);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = ConflictAllowList::parse("foo,,bar");
        assert!(result.unwrap_err().to_string().contains("must not be empty"));
    }

    #[test]
    fn test_too_long_name_rejected() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        let result = ConflictAllowList::parse(&name);
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_too_many_names_rejected() {
        let names: Vec<String> = (0..=MAX_ALLOW_LIST_ENTRIES)
            .map(|i| format!("pkg-{}", i))
            .collect();
        let result = ConflictAllowList::from_names(names);
        assert!(result.unwrap_err().to_string().contains("Too many"));
    }

    #[test]
    fn test_union() {
        let cli = ConflictAllowList::parse("foo").unwrap();
        let config = ConflictAllowList::parse("bar").unwrap();
        let merged = cli.union(config);
        assert!(merged.allows("foo"));
        assert!(merged.allows("bar"));
    }

    #[test]
    fn test_default_is_empty() {
        let allow_list = ConflictAllowList::default();
        assert!(allow_list.is_empty());
        assert!(!allow_list.allows("anything"));
    }
}

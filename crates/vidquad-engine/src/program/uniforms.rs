use crate::device::UniformLocation;

/// Uniform locations resolved for a linked program.
///
/// Entries are kept in request order, so index `i` answers the `i`-th requested
/// name. `None` means the name was empty or the program has no such uniform.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct UniformTable {
    entries: Vec<(String, Option<UniformLocation>)>,
}

impl UniformTable {
    /// Resolves each non-empty name with `resolve`. Empty names stay unresolved.
    pub(crate) fn resolve<F>(names: &[&str], mut resolve: F) -> Self
    where
        F: FnMut(&str) -> Option<UniformLocation>,
    {
        let entries = names
            .iter()
            .map(|&name| {
                let location = if name.is_empty() { None } else { resolve(name) };
                (name.to_string(), location)
            })
            .collect();
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Location of the `index`-th requested uniform.
    pub fn get(&self, index: usize) -> Option<UniformLocation> {
        self.entries.get(index).and_then(|(_, loc)| *loc)
    }

    /// Location of the first requested uniform called `name`.
    pub fn location(&self, name: &str) -> Option<UniformLocation> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, loc)| *loc)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<UniformLocation>)> + '_ {
        self.entries.iter().map(|(n, loc)| (n.as_str(), *loc))
    }

    /// Flat integer locations with [`UniformLocation::NOT_FOUND`] for unresolved entries.
    pub fn raw_locations(&self) -> Vec<i32> {
        self.entries
            .iter()
            .map(|(_, loc)| loc.map_or(UniformLocation::NOT_FOUND, UniformLocation::raw))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> UniformTable {
        UniformTable::resolve(&["videoframe", "", "missing"], |name| match name {
            "videoframe" => Some(UniformLocation::new(3)),
            _ => None,
        })
    }

    #[test]
    fn entries_follow_request_order() {
        let t = table();
        assert_eq!(t.len(), 3);
        assert_eq!(t.get(0), Some(UniformLocation::new(3)));
        assert_eq!(t.get(1), None);
        assert_eq!(t.get(2), None);
        assert_eq!(t.get(3), None);
    }

    #[test]
    fn empty_names_are_never_resolved() {
        let mut asked = Vec::new();
        UniformTable::resolve(&["", "a", ""], |name| {
            asked.push(name.to_string());
            None
        });
        assert_eq!(asked, vec!["a".to_string()]);
    }

    #[test]
    fn lookup_by_name() {
        let t = table();
        assert_eq!(t.location("videoframe"), Some(UniformLocation::new(3)));
        assert_eq!(t.location("missing"), None);
        assert_eq!(t.location("never-requested"), None);
    }

    #[test]
    fn raw_locations_use_not_found_sentinel() {
        assert_eq!(table().raw_locations(), vec![3, -1, -1]);
    }
}

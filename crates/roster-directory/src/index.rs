//! The loaded member list and its filtered views.

use std::cmp::Ordering;

use roster_ingest::fold_key;
use roster_model::{FilterState, Member, MemberId};

/// Every member of one load, sorted by role then name.
///
/// The list is immutable; a new load builds a new index.
#[derive(Debug, Clone, Default)]
pub struct DirectoryIndex {
    members: Vec<Member>,
}

impl DirectoryIndex {
    /// Sorts `members` into directory order.
    pub fn new(mut members: Vec<Member>) -> Self {
        members.sort_by(compare_members);
        Self { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }

    /// Looks a member up by the raw id carried in a UI event.
    pub fn get_str(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.id.as_str() == id)
    }

    /// Distinct roles in directory order, for the role select.
    pub fn roles(&self) -> Vec<&str> {
        let mut roles: Vec<&str> = Vec::new();
        for member in &self.members {
            if !roles.contains(&member.role.as_str()) {
                roles.push(member.role.as_str());
            }
        }
        roles
    }

    /// Members passing both the role and the search predicate, in order.
    ///
    /// An empty `role` matches every member; otherwise the role must match
    /// exactly. An empty `search` matches every member; otherwise it must
    /// appear, ignoring case, in the member's searchable text.
    pub fn apply_filter(&self, search: &str, role: &str) -> Vec<&Member> {
        let needle = search.trim().to_lowercase();
        self.members
            .iter()
            .filter(|member| role.is_empty() || member.role == role)
            .filter(|member| needle.is_empty() || member.search_haystack().contains(&needle))
            .collect()
    }

    pub fn filtered(&self, filter: &FilterState) -> Vec<&Member> {
        self.apply_filter(&filter.search, &filter.role)
    }
}

/// Role, then name; compared without case or accents, raw text breaking ties.
fn compare_members(a: &Member, b: &Member) -> Ordering {
    fold_key(&a.role)
        .cmp(&fold_key(&b.role))
        .then_with(|| fold_key(&a.name).cmp(&fold_key(&b.name)))
        .then_with(|| a.role.cmp(&b.role))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: usize, name: &str, role: &str) -> Member {
        let mut member = Member::new(MemberId::positional(id), name).unwrap();
        member.role = role.to_string();
        member
    }

    fn names(members: &[&Member]) -> Vec<String> {
        members.iter().map(|m| m.name.clone()).collect()
    }

    fn sample() -> DirectoryIndex {
        DirectoryIndex::new(vec![
            member(0, "Zoé", "Trésorière"),
            member(1, "Émile", "Coordinateur"),
            member(2, "adama", "Coordinateur"),
            member(3, "Binta", "Chargée de communication"),
        ])
    }

    #[test]
    fn test_sorted_by_role_then_name_ignoring_accents() {
        let index = sample();
        let ordered: Vec<&str> = index.members().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(ordered, vec!["Binta", "adama", "Émile", "Zoé"]);
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let index = sample();
        let all = index.apply_filter("", "");
        assert_eq!(all.len(), index.len());
        let expected: Vec<&Member> = index.members().iter().collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_role_filter_is_exact() {
        let index = sample();
        assert_eq!(
            names(&index.apply_filter("", "Coordinateur")),
            vec!["adama", "Émile"]
        );
        assert!(index.apply_filter("", "coordinateur").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = sample();
        assert_eq!(names(&index.apply_filter("ZOÉ", "")), vec!["Zoé"]);
        assert_eq!(names(&index.apply_filter("  binta ", "")), vec!["Binta"]);
        assert!(index.apply_filter("nobody", "").is_empty());
    }

    #[test]
    fn test_search_covers_tags_and_bio() {
        let mut awa = member(0, "Awa", "Membre");
        awa.bio = Some("Juriste engagée".to_string());
        awa.tags = vec!["Plaidoyer".to_string()];
        let index = DirectoryIndex::new(vec![awa, member(1, "Koffi", "Membre")]);
        assert_eq!(names(&index.apply_filter("juriste", "")), vec!["Awa"]);
        assert_eq!(names(&index.apply_filter("plaidoyer", "")), vec!["Awa"]);
    }

    #[test]
    fn test_roles_in_directory_order() {
        assert_eq!(
            sample().roles(),
            vec!["Chargée de communication", "Coordinateur", "Trésorière"]
        );
    }

    #[test]
    fn test_get_by_id() {
        let index = sample();
        assert_eq!(index.get_str("m2").map(|m| m.name.as_str()), Some("Émile"));
        assert!(index.get(&MemberId::positional(99)).is_none());
    }
}

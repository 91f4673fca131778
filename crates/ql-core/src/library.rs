use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{QlError, QlResult};
use crate::quest::{Quest, QuestId, Subject};

/// Metadata about the library itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryMeta {
    /// Display name shown in the library header.
    pub name: String,
    /// Tagline shown under the name.
    pub tagline: String,
}

impl LibraryMeta {
    /// Create library metadata with an empty tagline.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagline: String::new(),
        }
    }
}

/// The quest catalog. Owns all quest records in insertion order.
///
/// The library is built once at startup and read for the rest of the process
/// lifetime; quests are never mutated or removed.
#[derive(Debug, Clone)]
pub struct Library {
    /// Metadata about the library.
    pub meta: LibraryMeta,
    quests: Vec<Quest>,

    // Index
    by_id: HashMap<QuestId, usize>,
}

impl Library {
    /// Create an empty library.
    pub fn new(meta: LibraryMeta) -> Self {
        Self {
            meta,
            quests: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// The built-in catalog: the three mock science quests.
    pub fn builtin() -> Self {
        let mut meta = LibraryMeta::new("MyLibrary");
        meta.tagline = "Choose your next adventure".to_string();

        let mut library = Self::new(meta);
        for quest in [
            Quest::new("1", "Volcanic Eruption", Subject::Chemistry, "20 mins"),
            Quest::new("2", "Solar Oven", Subject::Physics, "45 mins"),
            Quest::new("3", "Plant Osmosis", Subject::Biology, "3 days"),
        ] {
            library
                .add_quest(quest)
                .expect("built-in quest ids are unique");
        }
        library
    }

    /// Add a quest to the library. Returns the quest's id.
    pub fn add_quest(&mut self, quest: Quest) -> QlResult<QuestId> {
        if self.by_id.contains_key(&quest.id) {
            return Err(QlError::DuplicateId(quest.id.clone()));
        }

        let id = quest.id.clone();
        self.by_id.insert(id.clone(), self.quests.len());
        self.quests.push(quest);
        Ok(id)
    }

    /// Get a quest by id.
    pub fn get(&self, id: &QuestId) -> Option<&Quest> {
        self.by_id.get(id).map(|&i| &self.quests[i])
    }

    /// Find a quest by title (case-insensitive).
    pub fn find_by_title(&self, title: &str) -> Option<&Quest> {
        let title_lower = title.to_lowercase();
        self.quests
            .iter()
            .find(|q| q.title.to_lowercase() == title_lower)
    }

    /// Resolve a quest by id or, failing that, by title (case-insensitive).
    pub fn resolve(&self, id_or_title: &str) -> QlResult<&Quest> {
        self.get(&QuestId::from(id_or_title))
            .or_else(|| self.find_by_title(id_or_title))
            .ok_or_else(|| QlError::QuestNotFound(id_or_title.to_string()))
    }

    /// All quests in insertion order.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Number of quests in the library.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    /// Whether the library holds no quests.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Start building a filtered query over the library.
    pub fn query(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(self)
    }
}

/// A builder for filtering quests in a library.
pub struct QueryBuilder<'l> {
    library: &'l Library,
    subject_filter: Option<Subject>,
    title_contains: Option<String>,
}

impl<'l> QueryBuilder<'l> {
    /// Create a query over the given library.
    pub fn new(library: &'l Library) -> Self {
        Self {
            library,
            subject_filter: None,
            title_contains: None,
        }
    }

    /// Filter by subject.
    pub fn subject(mut self, subject: Subject) -> Self {
        self.subject_filter = Some(subject);
        self
    }

    /// Filter to quests whose title contains the given substring
    /// (case-insensitive).
    pub fn title_contains(mut self, s: impl Into<String>) -> Self {
        self.title_contains = Some(s.into().to_lowercase());
        self
    }

    /// Execute the query. Results keep the library's insertion order, which
    /// is the order the library view displays.
    pub fn execute(self) -> Vec<&'l Quest> {
        self.library
            .quests
            .iter()
            .filter(|q| self.matches(q))
            .collect()
    }

    /// Count matching quests without collecting them.
    pub fn count(self) -> usize {
        self.library.quests.iter().filter(|q| self.matches(q)).count()
    }

    fn matches(&self, quest: &Quest) -> bool {
        if let Some(ref subject) = self.subject_filter
            && quest.subject != *subject
        {
            return false;
        }

        if let Some(ref s) = self.title_contains
            && !quest.title.to_lowercase().contains(s)
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_quests_in_order() {
        let library = Library::builtin();
        assert_eq!(library.len(), 3);

        let titles: Vec<_> = library.quests().iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, ["Volcanic Eruption", "Solar Oven", "Plant Osmosis"]);
    }

    #[test]
    fn builtin_meta_matches_header() {
        let library = Library::builtin();
        assert_eq!(library.meta.name, "MyLibrary");
        assert_eq!(library.meta.tagline, "Choose your next adventure");
    }

    #[test]
    fn get_by_id() {
        let library = Library::builtin();
        let quest = library.get(&QuestId::from("2")).unwrap();
        assert_eq!(quest.title, "Solar Oven");
        assert_eq!(quest.subject, Subject::Physics);
        assert_eq!(quest.duration, "45 mins");
    }

    #[test]
    fn find_by_title_is_case_insensitive() {
        let library = Library::builtin();
        let quest = library.find_by_title("plant osmosis").unwrap();
        assert_eq!(quest.id, QuestId::from("3"));
    }

    #[test]
    fn resolve_prefers_id_then_title() {
        let library = Library::builtin();
        assert_eq!(library.resolve("1").unwrap().title, "Volcanic Eruption");
        assert_eq!(library.resolve("solar oven").unwrap().id, QuestId::from("2"));
    }

    #[test]
    fn resolve_unknown_is_an_error() {
        let library = Library::builtin();
        let err = library.resolve("Time Machine").unwrap_err();
        assert!(err.to_string().contains("quest not found"));
    }

    #[test]
    fn add_quest_rejects_duplicate_id() {
        let mut library = Library::builtin();
        let dup = Quest::new("1", "Baking Soda Rocket", Subject::Chemistry, "10 mins");
        let err = library.add_quest(dup).unwrap_err();
        assert!(matches!(err, QlError::DuplicateId(_)));
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn query_by_subject() {
        let library = Library::builtin();
        let results = library.query().subject(Subject::Physics).execute();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Solar Oven");
    }

    #[test]
    fn query_by_title_contains() {
        let library = Library::builtin();
        let results = library.query().title_contains("oven").execute();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, QuestId::from("2"));
    }

    #[test]
    fn query_count() {
        let library = Library::builtin();
        assert_eq!(library.query().count(), 3);
        assert_eq!(library.query().subject(Subject::Biology).count(), 1);
        assert_eq!(
            library
                .query()
                .subject(Subject::Custom("astronomy".to_string()))
                .count(),
            0
        );
    }
}

//! Ordered, id-keyed vector of one entity type.

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::id::IdGenerator;
use crate::model::Entity;

/// Entities of one type in insertion order.
///
/// Every lookup is a linear scan. Ids are unique within a collection.
#[derive(Debug, Clone)]
pub struct Collection<E> {
    items: Vec<E>,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: Entity> Collection<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All entities in insertion order.
    pub fn list(&self) -> &[E] {
        &self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn position_or_not_found(&self, id: &str) -> StoreResult<usize> {
        self.position(id)
            .ok_or_else(|| StoreError::not_found(E::KIND, id))
    }

    pub fn get(&self, id: &str) -> StoreResult<&E> {
        let index = self.position_or_not_found(id)?;
        Ok(&self.items[index])
    }

    /// Assign a fresh id, append the entity and return a copy of it.
    ///
    /// Draws from `ids` until it yields an id not live in this collection.
    /// A generator that only ever returns live ids makes this loop forever.
    pub fn create(&mut self, ids: &dyn IdGenerator, new: E::New) -> E {
        let id = loop {
            let candidate = ids.next_id();
            if !self.contains(&candidate) {
                break candidate;
            }
            debug!(kind = %E::KIND, id = %candidate, "generated id already in use, drawing again");
        };

        let entity = E::assemble(id, new);
        self.items.push(entity.clone());
        debug!(kind = %E::KIND, id = %entity.id(), "entity created");
        entity
    }

    /// Merge `patch` into the entity in place and return the result.
    pub fn update(&mut self, id: &str, patch: E::Patch) -> StoreResult<E> {
        let index = self.position_or_not_found(id)?;
        let entity = &mut self.items[index];
        entity.apply(patch);
        debug!(kind = %E::KIND, id = %id, "entity updated");
        Ok(entity.clone())
    }

    /// Remove the entity, keeping the order of the rest.
    pub fn remove(&mut self, id: &str) -> StoreResult<E> {
        let index = self.position_or_not_found(id)?;
        let removed = self.items.remove(index);
        debug!(kind = %E::KIND, id = %id, "entity deleted");
        Ok(removed)
    }

    /// Remove everything and return how many entities were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        debug!(kind = %E::KIND, count, "collection cleared");
        count
    }

    /// Entities matching `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<&E>
    where
        P: Fn(&E) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }
}

impl<E: Entity> FromIterator<E> for Collection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for item in iter {
            // later duplicates are dropped
            if !collection.contains(item.id()) {
                collection.items.push(item);
            }
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityKind;
    use crate::id::SequentialIds;
    use crate::model::{NewPost, Post, PostPatch};

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            user_id: "u1".to_string(),
        }
    }

    #[derive(Debug)]
    struct Stuck;

    impl IdGenerator for Stuck {
        fn next_id(&self) -> String {
            "same".to_string()
        }
    }

    #[derive(Debug)]
    struct RepeatsOnce(SequentialIds);

    impl IdGenerator for RepeatsOnce {
        fn next_id(&self) -> String {
            // yields "1", "1", "2", "3", ...
            let n: u64 = self.0.next_id().parse().unwrap();
            if n <= 2 {
                "1".to_string()
            } else {
                (n - 1).to_string()
            }
        }
    }

    #[test]
    fn test_create_appends_in_order() {
        let ids = SequentialIds::default();
        let mut posts = Collection::<Post>::new();
        posts.create(&ids, new_post("a"));
        posts.create(&ids, new_post("b"));
        posts.create(&ids, new_post("c"));

        let titles: Vec<&str> = posts.list().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_create_redraws_colliding_id() {
        let ids = RepeatsOnce(SequentialIds::default());
        let mut posts = Collection::<Post>::new();
        let first = posts.create(&ids, new_post("a"));
        let second = posts.create(&ids, new_post("b"));
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
    }

    #[test]
    fn test_single_create_with_constant_generator() {
        let mut posts = Collection::<Post>::new();
        let post = posts.create(&Stuck, new_post("only"));
        assert_eq!(post.id, "same");
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_update_missing_is_not_found_and_untouched() {
        let ids = SequentialIds::default();
        let mut posts = Collection::<Post>::new();
        posts.create(&ids, new_post("a"));
        let before = posts.list().to_vec();

        let err = posts.update("nope", PostPatch::default()).unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::Post, "nope"));
        assert_eq!(posts.list(), before.as_slice());
    }

    #[test]
    fn test_remove_preserves_remaining_order() {
        let ids = SequentialIds::default();
        let mut posts = Collection::<Post>::new();
        for title in ["a", "b", "c", "d"] {
            posts.create(&ids, new_post(title));
        }

        let removed = posts.remove("2").unwrap();
        assert_eq!(removed.title, "b");
        let titles: Vec<&str> = posts.list().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_clear_reports_count() {
        let ids = SequentialIds::default();
        let mut posts = Collection::<Post>::new();
        posts.create(&ids, new_post("a"));
        posts.create(&ids, new_post("b"));

        assert_eq!(posts.clear(), 2);
        assert!(posts.is_empty());
        assert_eq!(posts.clear(), 0);
    }

    #[test]
    fn test_from_iter_drops_duplicate_ids() {
        let posts: Collection<Post> = vec![
            Post::assemble("1".to_string(), new_post("first")),
            Post::assemble("1".to_string(), new_post("shadow")),
        ]
        .into_iter()
        .collect();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts.get("1").unwrap().title, "first");
    }
}

//! The store facade: three collections, one id generator.

use crate::collection::Collection;
use crate::error::StoreResult;
use crate::id::{IdGenerator, UuidIds};
use crate::model::{
    Comment, CommentPatch, NewComment, NewPost, NewUser, Post, PostPatch, User, UserPatch,
};
use crate::seed;

/// Owns the users, posts and comments collections.
///
/// Foreign keys (`user_id`, `post_id`) are not checked on write. Relationship
/// lookups are computed by scanning at read time, so a dangling reference
/// surfaces as `NotFound` there.
#[derive(Debug)]
pub struct Store {
    users: Collection<User>,
    posts: Collection<Post>,
    comments: Collection<Comment>,
    ids: Box<dyn IdGenerator>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Empty store with UUID ids.
    pub fn new() -> Self {
        Self::with_id_generator(UuidIds)
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            users: Collection::new(),
            posts: Collection::new(),
            comments: Collection::new(),
            ids: Box::new(ids),
        }
    }

    /// Store preloaded with the demo users, posts and comments.
    pub fn seeded() -> Self {
        Self::new().with_data(seed::users(), seed::posts(), seed::comments())
    }

    /// Replace all three collections with the given records.
    pub fn with_data(
        mut self,
        users: impl IntoIterator<Item = User>,
        posts: impl IntoIterator<Item = Post>,
        comments: impl IntoIterator<Item = Comment>,
    ) -> Self {
        self.users = users.into_iter().collect();
        self.posts = posts.into_iter().collect();
        self.comments = comments.into_iter().collect();
        self
    }

    // Users

    pub fn users(&self) -> &[User] {
        self.users.list()
    }

    pub fn user(&self, id: &str) -> StoreResult<&User> {
        self.users.get(id)
    }

    pub fn create_user(&mut self, new: NewUser) -> User {
        self.users.create(self.ids.as_ref(), new)
    }

    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> StoreResult<User> {
        self.users.update(id, patch)
    }

    pub fn delete_user(&mut self, id: &str) -> StoreResult<User> {
        self.users.remove(id)
    }

    pub fn delete_all_users(&mut self) -> usize {
        self.users.clear()
    }

    // Posts

    pub fn posts(&self) -> &[Post] {
        self.posts.list()
    }

    pub fn post(&self, id: &str) -> StoreResult<&Post> {
        self.posts.get(id)
    }

    pub fn create_post(&mut self, new: NewPost) -> Post {
        self.posts.create(self.ids.as_ref(), new)
    }

    pub fn update_post(&mut self, id: &str, patch: PostPatch) -> StoreResult<Post> {
        self.posts.update(id, patch)
    }

    pub fn delete_post(&mut self, id: &str) -> StoreResult<Post> {
        self.posts.remove(id)
    }

    pub fn delete_all_posts(&mut self) -> usize {
        self.posts.clear()
    }

    // Comments

    pub fn comments(&self) -> &[Comment] {
        self.comments.list()
    }

    pub fn comment(&self, id: &str) -> StoreResult<&Comment> {
        self.comments.get(id)
    }

    pub fn create_comment(&mut self, new: NewComment) -> Comment {
        self.comments.create(self.ids.as_ref(), new)
    }

    pub fn update_comment(&mut self, id: &str, patch: CommentPatch) -> StoreResult<Comment> {
        self.comments.update(id, patch)
    }

    pub fn delete_comment(&mut self, id: &str) -> StoreResult<Comment> {
        self.comments.remove(id)
    }

    pub fn delete_all_comments(&mut self) -> usize {
        self.comments.clear()
    }

    // Relationship scans

    pub fn posts_of_user(&self, user_id: &str) -> Vec<&Post> {
        self.posts.filter(|post| post.user_id == user_id)
    }

    pub fn comments_of_user(&self, user_id: &str) -> Vec<&Comment> {
        self.comments.filter(|comment| comment.user_id == user_id)
    }

    pub fn user_of_post(&self, post: &Post) -> StoreResult<&User> {
        self.users.get(&post.user_id)
    }

    pub fn comments_of_post(&self, post_id: &str) -> Vec<&Comment> {
        self.comments.filter(|comment| comment.post_id == post_id)
    }

    pub fn user_of_comment(&self, comment: &Comment) -> StoreResult<&User> {
        self.users.get(&comment.user_id)
    }

    pub fn post_of_comment(&self, comment: &Comment) -> StoreResult<&Post> {
        self.posts.get(&comment.post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EntityKind, StoreError};
    use crate::id::SequentialIds;

    fn ada() -> NewUser {
        NewUser {
            full_name: "Ada".to_string(),
            age: 30,
        }
    }

    #[test]
    fn test_create_user_appears_at_end_of_list() {
        let mut store = Store::seeded();
        let before = store.users().to_vec();

        let user = store.create_user(ada());

        assert!(!user.id.is_empty());
        assert_eq!(user.full_name, "Ada");
        assert_eq!(user.age, 30);
        assert_eq!(store.users().len(), before.len() + 1);
        assert_eq!(&store.users()[..before.len()], before.as_slice());
        assert_eq!(store.users().last(), Some(&user));
        assert_eq!(store.user(&user.id).unwrap(), &user);
    }

    #[test]
    fn test_seeded_posts_of_user_in_order() {
        let store = Store::seeded();
        let titles: Vec<&str> = store
            .posts_of_user("1")
            .into_iter()
            .map(|post| post.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Mehmet'in Gönderisi", "Mehmet'in Diğer Gönderisi"]
        );
    }

    #[test]
    fn test_update_seeded_user_age() {
        let mut store = Store::seeded();
        let user = store
            .update_user(
                "1",
                UserPatch {
                    age: Some(31),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(user.full_name, "Mehmet Seven");
        assert_eq!(user.age, 31);
        assert_eq!(store.user("1").unwrap().age, 31);
    }

    #[test]
    fn test_delete_missing_user_leaves_store_unchanged() {
        let mut store = Store::seeded();
        let before = store.users().to_vec();

        let err = store.delete_user("99").unwrap_err();

        assert_eq!(err, StoreError::not_found(EntityKind::User, "99"));
        assert_eq!(store.users(), before.as_slice());
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = Store::seeded();
        assert_eq!(store.post("99").unwrap_err().kind(), EntityKind::Post);
        assert_eq!(store.comment("99").unwrap_err().kind(), EntityKind::Comment);
    }

    #[test]
    fn test_delete_returns_entity_as_it_was() {
        let mut store = Store::seeded();
        let deleted = store.delete_comment("2").unwrap();

        assert_eq!(deleted.text, "Bu Mehmet'in Yorumudur");
        assert!(store.comment("2").is_err());
        let ids: Vec<&str> = store.comments().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_delete_all_counts() {
        let mut store = Store::seeded();
        assert_eq!(store.delete_all_posts(), 3);
        assert!(store.posts().is_empty());
        assert_eq!(store.delete_all_posts(), 0);

        assert_eq!(store.delete_all_comments(), 4);
        assert_eq!(store.delete_all_users(), 2);
    }

    #[test]
    fn test_deleting_user_does_not_cascade() {
        let mut store = Store::seeded();
        store.delete_user("1").unwrap();

        assert_eq!(store.posts_of_user("1").len(), 2);
        let post = store.post("1").unwrap();
        let err = store.user_of_post(post).unwrap_err();
        assert_eq!(err, StoreError::not_found(EntityKind::User, "1"));
    }

    #[test]
    fn test_dangling_foreign_keys_are_accepted() {
        let mut store = Store::with_id_generator(SequentialIds::default());
        let post = store.create_post(NewPost {
            title: "orphan".to_string(),
            user_id: "ghost".to_string(),
        });
        let comment = store.create_comment(NewComment {
            text: "hi".to_string(),
            post_id: "nowhere".to_string(),
            user_id: "ghost".to_string(),
        });

        assert!(store.user_of_post(&post).is_err());
        assert!(store.user_of_comment(&comment).is_err());
        assert_eq!(
            store.post_of_comment(&comment).unwrap_err(),
            StoreError::not_found(EntityKind::Post, "nowhere")
        );
    }

    #[test]
    fn test_relationship_scans_on_seed() {
        let store = Store::seeded();

        let texts: Vec<&str> = store
            .comments_of_post("1")
            .into_iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(texts, vec!["Bu Ahmet'in Yorumudur", "Bu Mehmet'in Yorumudur"]);

        let ids: Vec<&str> = store
            .comments_of_user("2")
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);

        let comment = store.comment("4").unwrap();
        assert_eq!(store.user_of_comment(comment).unwrap().full_name, "Mehmet Seven");
        assert_eq!(store.post_of_comment(comment).unwrap().title, "Ahmet'in Gönderisi");
        assert_eq!(
            store.user_of_post(store.post("3").unwrap()).unwrap().full_name,
            "Ahmet Günal"
        );
    }

    #[test]
    fn test_sequential_ids_skip_seeded_ids() {
        let mut store = Store::with_id_generator(SequentialIds::default()).with_data(
            seed::users(),
            Vec::<Post>::new(),
            Vec::<Comment>::new(),
        );
        let user = store.create_user(ada());
        assert_eq!(user.id, "3");
    }

    #[test]
    fn test_update_post_reassigns_author() {
        let mut store = Store::seeded();
        store
            .update_post(
                "3",
                PostPatch {
                    user_id: Some("1".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.posts_of_user("1").len(), 3);
        assert!(store.posts_of_user("2").is_empty());
        assert_eq!(store.post("3").unwrap().title, "Ahmet'in Gönderisi");
    }
}

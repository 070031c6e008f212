use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

pub const POSTS_KEY: &str = "posts";
pub const POSTS_PER_PAGE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Couldn't save blog posts: {0}")]
    Storage(#[from] StorageError),
    #[error("Couldn't serialize blog posts: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    pub storage_key: String,
    pub page_size: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            storage_key: POSTS_KEY.to_string(),
            page_size: POSTS_PER_PAGE,
        }
    }
}

/// Posts in insertion order, oldest first. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostCollection(Vec<Post>);

impl PostCollection {
    /// The two posts shown before anything has been written.
    pub fn seeded() -> Self {
        Self(vec![
            Post {
                id: 1,
                title: "The Future of AI in Cryptocurrency".to_string(),
                content: "Exploring the transformative impact of AI on cryptocurrency trading and security.".to_string(),
            },
            Post {
                id: 2,
                title: "Mastering MERN Stack: Tips and Tricks".to_string(),
                content: "Insights on optimizing development workflows using the MERN stack."
                    .to_string(),
            },
        ])
    }

    /// `len + 1`, unless stored data already holds that id. `None` once
    /// the id space is used up.
    fn next_id(&self) -> Option<u64> {
        let by_len = (self.0.len() as u64).checked_add(1)?;
        let by_max = self.0.iter().map(|p| p.id).max().unwrap_or(0).checked_add(1)?;
        Some(by_len.max(by_max))
    }

    fn with_post(&self, title: &str, content: &str) -> Option<Self> {
        let id = self.next_id()?;
        let mut posts = self.0.clone();
        posts.push(Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
        });
        Some(Self(posts))
    }

    /// Drops later posts whose id was already seen.
    fn dedup_ids(self) -> Self {
        let mut seen = std::collections::HashSet::new();
        Self(self.0.into_iter().filter(|p| seen.insert(p.id)).collect())
    }
}

impl Deref for PostCollection {
    type Target = [Post];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Post>> for PostCollection {
    fn from(posts: Vec<Post>) -> Self {
        Self(posts).dedup_ids()
    }
}

type Listener = Box<dyn Fn(&PostCollection)>;

/// Owns the canonical post list and mirrors it into a [`KeyValueStore`].
pub struct PostStore<S> {
    storage: S,
    key: String,
    posts: PostCollection,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStore> PostStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, POSTS_KEY)
    }

    pub fn with_key(storage: S, key: &str) -> Self {
        let mut store = Self {
            storage,
            key: key.to_string(),
            posts: PostCollection::default(),
            listeners: Vec::new(),
        };
        store.posts = store.load();
        store
    }

    pub fn from_config(storage: S, config: &BlogConfig) -> Self {
        Self::with_key(storage, &config.storage_key)
    }

    /// Reads the stored collection, falling back to the seed posts.
    /// Nothing is written back here.
    pub fn load(&self) -> PostCollection {
        let raw = match self.storage.get(&self.key) {
            Some(raw) => raw,
            None => {
                log::debug!("no stored posts under {:?}, using defaults", self.key);
                return PostCollection::seeded();
            }
        };
        match serde_json::from_str::<Vec<Post>>(&raw) {
            Ok(posts) => PostCollection::from(posts),
            Err(e) => {
                log::warn!("ignoring unparsable posts under {:?}: {e}", self.key);
                PostCollection::seeded()
            }
        }
    }

    /// Appends a post and persists the whole list. Skipped when either
    /// field is empty.
    pub fn append(&mut self, title: &str, content: &str) -> &PostCollection {
        if title.is_empty() || content.is_empty() {
            log::debug!("skipping post with empty title or content");
            return &self.posts;
        }
        let Some(posts) = self.posts.with_post(title, content) else {
            log::error!("no post id left, skipping post");
            return &self.posts;
        };
        if let Err(e) = self.persist(&posts) {
            log::error!("{e}");
        }
        self.posts = posts;
        for listener in &self.listeners {
            listener(&self.posts);
        }
        &self.posts
    }

    /// Overwrites the stored value with `posts`.
    pub fn persist(&mut self, posts: &PostCollection) -> Result<(), BlogError> {
        let raw = serde_json::to_string(posts).map_err(|e| BlogError::Serialize(e.to_string()))?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl Fn(&PostCollection) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn posts(&self) -> &PostCollection {
        &self.posts
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::pagination::{can_go_next, can_go_previous, page_count, visible_slice};
    use crate::storage::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn stored_posts(store: &PostStore<MemoryStore>) -> Vec<Post> {
        let raw = store.storage().get(POSTS_KEY).expect("posts should be stored");
        serde_json::from_str(&raw).expect("stored posts should parse")
    }

    #[test]
    fn test_load_defaults_without_write_back() {
        let store = PostStore::new(MemoryStore::new());
        assert_eq!(store.posts(), &PostCollection::seeded());
        assert_eq!(store.posts().len(), 2);
        // defaults are not persisted until something changes
        assert_eq!(store.storage().get(POSTS_KEY), None);
    }

    #[test]
    fn test_load_unparsable_falls_back() {
        for raw in ["not json", "{\"id\":1}", "[{\"id\":\"x\"}]", ""] {
            let store = PostStore::new(MemoryStore::with_item(POSTS_KEY, raw));
            assert_eq!(store.posts(), &PostCollection::seeded(), "input: {raw:?}");
        }
    }

    #[test]
    fn test_load_empty_list_keeps_it_empty() {
        let store = PostStore::new(MemoryStore::with_item(POSTS_KEY, "[]"));
        assert_eq!(store.posts().len(), 0);
        assert_eq!(page_count(store.posts(), POSTS_PER_PAGE), 1);
        assert!(visible_slice(store.posts(), POSTS_PER_PAGE, 1).is_empty());
    }

    #[test]
    fn test_append_onto_empty_list() {
        let mut store = PostStore::new(MemoryStore::with_item(POSTS_KEY, "[]"));
        let posts = store.append("first", "post");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
    }

    #[test]
    fn test_load_stored_posts() {
        let raw = r#"[{"id":1,"title":"a","content":"b"},{"id":2,"title":"c","content":"d"},{"id":3,"title":"e","content":"f"}]"#;
        let store = PostStore::new(MemoryStore::with_item(POSTS_KEY, raw));
        let titles: Vec<_> = store.posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_append_assigns_next_id_and_persists() {
        let mut store = PostStore::new(MemoryStore::new());
        let before = store.posts().len();
        let posts = store.append("Hello", "World");
        assert_eq!(posts.len(), before + 1);
        let last = posts.last().unwrap();
        assert_eq!(last.id, before as u64 + 1);
        assert_eq!(last.title, "Hello");
        assert_eq!(last.content, "World");

        // whole collection written, seeds included
        let stored = stored_posts(&store);
        assert_eq!(stored.len(), 3);
        assert_eq!(stored, store.posts().to_vec());
    }

    #[test]
    fn test_append_rejects_empty_fields() {
        let mut store = PostStore::new(MemoryStore::new());
        let before = store.posts().clone();
        store.append("", "content");
        store.append("title", "");
        store.append("", "");
        assert_eq!(store.posts(), &before);
        assert_eq!(store.storage().get(POSTS_KEY), None);
    }

    #[test]
    fn test_append_survives_reload() {
        let mut store = PostStore::new(MemoryStore::new());
        store.append("A", "B");
        let storage = store.storage().clone();

        let reloaded = PostStore::new(storage);
        assert_eq!(reloaded.posts().len(), 3);
        assert_eq!(reloaded.posts()[2].id, 3);
    }

    #[test]
    fn test_append_avoids_duplicate_ids() {
        // gap in stored ids: len + 1 == 2 would collide with id 2
        let raw = r#"[{"id":2,"title":"a","content":"b"}]"#;
        let mut store = PostStore::new(MemoryStore::with_item(POSTS_KEY, raw));
        let posts = store.append("x", "y");
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].id, 3);
    }

    #[test]
    fn test_append_skipped_when_ids_exhausted() {
        let raw = format!(r#"[{{"id":{},"title":"a","content":"b"}}]"#, u64::MAX);
        let mut store = PostStore::new(MemoryStore::with_item(POSTS_KEY, &raw));
        assert_eq!(store.posts()[0].id, u64::MAX);

        let posts = store.append("x", "y");
        assert_eq!(posts.len(), 1);
        // storage untouched
        assert_eq!(store.storage().get(POSTS_KEY), Some(raw));
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let raw = r#"[{"id":1,"title":"a","content":"b"},{"id":1,"title":"c","content":"d"}]"#;
        let store = PostStore::new(MemoryStore::with_item(POSTS_KEY, raw));
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.posts()[0].title, "a");
    }

    #[test]
    fn test_persist_idempotent() {
        let mut once = PostStore::new(MemoryStore::new());
        let posts = once.posts().clone();
        once.persist(&posts).unwrap();

        let mut twice = PostStore::new(MemoryStore::new());
        twice.persist(&posts).unwrap();
        twice.persist(&posts).unwrap();

        assert_eq!(once.storage().get(POSTS_KEY), twice.storage().get(POSTS_KEY));
    }

    #[test]
    fn test_persist_reports_storage_failure() {
        let mut store = PostStore::new(BrokenStore);
        let posts = store.posts().clone();
        assert_eq!(
            store.persist(&posts),
            Err(BlogError::Storage(StorageError::Unavailable))
        );

        // in-memory list still updates
        let posts = store.append("a", "b");
        assert_eq!(posts.len(), 3);
    }

    #[test]
    fn test_subscribers_get_snapshots() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = PostStore::new(MemoryStore::new());
        let sink = seen.clone();
        store.subscribe(move |posts| sink.borrow_mut().push(posts.len()));

        store.append("a", "b");
        store.append("", "ignored");
        store.append("c", "d");
        assert_eq!(*seen.borrow(), vec![3, 4]);
    }

    #[test]
    fn test_custom_key() {
        let config = BlogConfig {
            storage_key: "journal".to_string(),
            ..Default::default()
        };
        let mut store = PostStore::from_config(MemoryStore::new(), &config);
        store.append("a", "b");
        assert!(store.storage().get("journal").is_some());
        assert_eq!(store.storage().get(POSTS_KEY), None);
    }

    #[test]
    fn test_append_and_paginate_scenario() {
        let size = BlogConfig::default().page_size;
        let mut store = PostStore::new(MemoryStore::new());
        assert_eq!(page_count(store.posts(), size), 1);
        assert!(!can_go_previous(1));
        assert!(!can_go_next(1, store.posts(), size));

        let posts = store.append("A", "B");
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[2].id, 3);
        assert_eq!(page_count(posts, size), 1);

        let posts = store.append("C", "D");
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[3].id, 4);
        assert_eq!(page_count(posts, size), 2);
        assert!(can_go_next(1, posts, size));

        let page = visible_slice(posts, size, 2);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, 4);
        assert_eq!(page[0].title, "C");
    }
}

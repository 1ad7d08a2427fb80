//! In-memory storage: users and tokens, collections and cards, plus the
//! ground-truth tests written once at generation time and read-only after.
//!
//! Persistence engines are outside the engine's scope; this store keeps the
//! same interface shape a database-backed implementation would have, with
//! one method per query.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use flashcards_core::{Card, Collection, Test};
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// A registered user.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Collection metadata; cards are stored separately and joined on demand.
#[derive(Debug, Clone)]
pub struct CollectionRecord {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A generated test with its answers — the grading reference. Never
/// mutated after insertion.
#[derive(Debug, Clone)]
pub struct StoredTest {
    pub test: Test,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct Store {
    users: RwLock<HashMap<Uuid, User>>,
    tokens: RwLock<HashMap<String, Uuid>>,
    collections: RwLock<HashMap<Uuid, CollectionRecord>>,
    cards: RwLock<HashMap<Uuid, Card>>,
    tests: RwLock<HashMap<Uuid, StoredTest>>,
}

impl Store {
    /// Register a user and issue an opaque bearer token.
    pub fn register_user(&self, name: &str) -> Result<(User, String)> {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        let token = Uuid::new_v4().simple().to_string();

        write(&self.users)?.insert(user.id, user.clone());
        write(&self.tokens)?.insert(token.clone(), user.id);
        Ok((user, token))
    }

    pub fn user_by_token(&self, token: &str) -> Result<Option<User>> {
        let user_id = match read(&self.tokens)?.get(token) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(read(&self.users)?.get(&user_id).cloned())
    }

    pub fn create_collection(&self, owner_id: Uuid, name: &str) -> Result<CollectionRecord> {
        let record = CollectionRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            owner_id,
            created_at: Utc::now(),
        };
        write(&self.collections)?.insert(record.id, record.clone());
        Ok(record)
    }

    pub fn collection(&self, id: Uuid) -> Result<Option<CollectionRecord>> {
        Ok(read(&self.collections)?.get(&id).cloned())
    }

    pub fn collections_for(&self, owner_id: Uuid) -> Result<Vec<CollectionRecord>> {
        let mut records: Vec<CollectionRecord> = read(&self.collections)?
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect();
        records.sort_by_key(|c| c.created_at);
        Ok(records)
    }

    /// Collection joined with its cards, in insertion order.
    pub fn collection_with_cards(&self, id: Uuid) -> Result<Option<Collection>> {
        let record = match self.collection(id)? {
            Some(record) => record,
            None => return Ok(None),
        };
        Ok(Some(Collection {
            id: record.id,
            name: record.name,
            owner_id: record.owner_id,
            cards: self.cards_in_collection(id)?,
        }))
    }

    /// Remove a collection and every card it owns.
    pub fn delete_collection(&self, id: Uuid) -> Result<()> {
        write(&self.collections)?.remove(&id);
        write(&self.cards)?.retain(|_, card| card.collection_id != id);
        Ok(())
    }

    pub fn add_card(&self, card: Card) -> Result<()> {
        write(&self.cards)?.insert(card.id, card);
        Ok(())
    }

    pub fn card(&self, id: Uuid) -> Result<Option<Card>> {
        Ok(read(&self.cards)?.get(&id).cloned())
    }

    pub fn cards_in_collection(&self, collection_id: Uuid) -> Result<Vec<Card>> {
        let mut cards: Vec<Card> = read(&self.cards)?
            .values()
            .filter(|c| c.collection_id == collection_id)
            .cloned()
            .collect();
        cards.sort_by_key(|c| c.id);
        Ok(cards)
    }

    pub fn cards_for(&self, owner_id: Uuid) -> Result<Vec<Card>> {
        let mut cards: Vec<Card> = read(&self.cards)?
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect();
        cards.sort_by_key(|c| c.id);
        Ok(cards)
    }

    pub fn delete_card(&self, id: Uuid) -> Result<()> {
        write(&self.cards)?.remove(&id);
        Ok(())
    }

    /// Persist a generated test as grading ground truth.
    pub fn insert_test(&self, stored: StoredTest) -> Result<()> {
        write(&self.tests)?.insert(stored.test.id, stored);
        Ok(())
    }

    pub fn test(&self, id: Uuid) -> Result<Option<StoredTest>> {
        Ok(read(&self.tests)?.get(&id).cloned())
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|_| ApiError::Internal("storage lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|_| ApiError::Internal("storage lock poisoned".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(owner_id: Uuid, collection_id: Uuid, term: &str, definition: &str) -> Card {
        Card {
            id: Uuid::new_v4(),
            term: term.to_string(),
            definition: definition.to_string(),
            owner_id,
            collection_id,
        }
    }

    #[test]
    fn register_issues_a_resolvable_token() {
        let store = Store::default();
        let (user, token) = store.register_user("ada").unwrap();

        let resolved = store.user_by_token(&token).unwrap().unwrap();
        assert_eq!(resolved.id, user.id);
        assert!(store.user_by_token("bogus").unwrap().is_none());
    }

    #[test]
    fn collection_join_returns_only_its_cards() {
        let store = Store::default();
        let (user, _) = store.register_user("ada").unwrap();
        let first = store.create_collection(user.id, "first").unwrap();
        let second = store.create_collection(user.id, "second").unwrap();

        store.add_card(card(user.id, first.id, "a", "1")).unwrap();
        store.add_card(card(user.id, first.id, "b", "2")).unwrap();
        store.add_card(card(user.id, second.id, "c", "3")).unwrap();

        let joined = store.collection_with_cards(first.id).unwrap().unwrap();
        assert_eq!(joined.cards.len(), 2);
        assert!(joined.cards.iter().all(|c| c.collection_id == first.id));
    }

    #[test]
    fn deleting_a_collection_drops_its_cards() {
        let store = Store::default();
        let (user, _) = store.register_user("ada").unwrap();
        let collection = store.create_collection(user.id, "doomed").unwrap();
        let kept = store.create_collection(user.id, "kept").unwrap();

        store
            .add_card(card(user.id, collection.id, "a", "1"))
            .unwrap();
        store.add_card(card(user.id, kept.id, "b", "2")).unwrap();

        store.delete_collection(collection.id).unwrap();
        assert!(store.collection(collection.id).unwrap().is_none());
        assert_eq!(store.cards_for(user.id).unwrap().len(), 1);
    }
}

//! Ticket pool

use serde::{Deserialize, Serialize};

/// One unit of drawing weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Owner of the ticket
    pub username: String,
    /// Position of the earning comment in the loaded comment list
    pub comment_index: usize,
}

/// Ordered, non-deduplicated collection of tickets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketPool {
    tickets: Vec<Ticket>,
}

impl TicketPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from bare usernames, one ticket each
    pub fn from_usernames<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tickets = usernames
            .into_iter()
            .enumerate()
            .map(|(comment_index, username)| Ticket {
                username: username.into(),
                comment_index,
            })
            .collect();
        Self { tickets }
    }

    pub(crate) fn push(&mut self, ticket: Ticket) {
        self.tickets.push(ticket);
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Ticket> {
        self.tickets.get(index)
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    /// Ticket owners in pool order
    pub fn usernames(&self) -> Vec<&str> {
        self.tickets.iter().map(|t| t.username.as_str()).collect()
    }

    /// Number of tickets held by `username`
    pub fn count_for(&self, username: &str) -> usize {
        self.tickets
            .iter()
            .filter(|t| t.username == username)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_usernames() {
        let pool = TicketPool::from_usernames(["alice", "bob", "alice"]);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.usernames(), vec!["alice", "bob", "alice"]);
        assert_eq!(pool.get(1).unwrap().comment_index, 1);
    }

    #[test]
    fn test_count_for() {
        let pool = TicketPool::from_usernames(["alice", "bob", "alice"]);
        assert_eq!(pool.count_for("alice"), 2);
        assert_eq!(pool.count_for("bob"), 1);
        assert_eq!(pool.count_for("Alice"), 0);
    }

    #[test]
    fn test_empty() {
        let pool = TicketPool::new();
        assert!(pool.is_empty());
        assert!(pool.get(0).is_none());
    }

    #[test]
    fn test_serializes_as_list() {
        let pool = TicketPool::from_usernames(["a"]);
        let json = serde_json::to_string(&pool).unwrap();
        assert_eq!(json, r#"[{"username":"a","comment_index":0}]"#);
    }
}

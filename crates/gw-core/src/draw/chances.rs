//! Per-user chance table

use crate::ticket::TicketPool;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One commenter's weight in the draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserChance {
    pub username: String,
    pub tickets: usize,
    /// `tickets / total`, in `[0, 1]`
    pub probability: f64,
}

/// Ticket counts per user, most tickets first
///
/// Users with equal counts keep the order in which their first ticket
/// appears in the pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChanceTable {
    entries: Vec<UserChance>,
    total_tickets: usize,
}

impl ChanceTable {
    /// Tally a ticket pool
    pub fn from_pool(pool: &TicketPool) -> Self {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for ticket in pool.iter() {
            let name = ticket.username.as_str();
            match positions.get(name) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(name, counts.len());
                    counts.push((name, 1));
                }
            }
        }

        // sort_by is stable, so first-seen order survives among ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let total_tickets = pool.len();
        let entries = counts
            .into_iter()
            .map(|(username, tickets)| UserChance {
                username: username.to_string(),
                tickets,
                probability: tickets as f64 / total_tickets as f64,
            })
            .collect();

        Self {
            entries,
            total_tickets,
        }
    }

    pub fn entries(&self) -> &[UserChance] {
        &self.entries
    }

    pub fn total_tickets(&self) -> usize {
        self.total_tickets
    }

    /// Number of distinct users holding tickets
    pub fn participants(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, username: &str) -> Option<&UserChance> {
        self.entries.iter().find(|e| e.username == username)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(table: &ChanceTable) -> Vec<(&str, usize)> {
        table
            .entries()
            .iter()
            .map(|e| (e.username.as_str(), e.tickets))
            .collect()
    }

    #[test]
    fn test_counts_descending() {
        let pool = TicketPool::from_usernames(["bob", "alice", "alice", "carol", "alice", "bob"]);
        let table = ChanceTable::from_pool(&pool);
        assert_eq!(summary(&table), vec![("alice", 3), ("bob", 2), ("carol", 1)]);
        assert_eq!(table.total_tickets(), 6);
        assert_eq!(table.participants(), 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let pool = TicketPool::from_usernames(["carol", "alice", "bob", "alice", "bob", "carol"]);
        let table = ChanceTable::from_pool(&pool);
        assert_eq!(summary(&table), vec![("carol", 2), ("alice", 2), ("bob", 2)]);
    }

    #[test]
    fn test_probabilities() {
        let pool = TicketPool::from_usernames(["alice", "bob", "alice"]);
        let table = ChanceTable::from_pool(&pool);
        let alice = table.get("alice").unwrap();
        let bob = table.get("bob").unwrap();
        assert_eq!(alice.tickets, 2);
        assert_eq!(bob.tickets, 1);
        assert!((alice.probability - 2.0 / 3.0).abs() < 1e-12);
        assert!((bob.probability - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let pool = TicketPool::from_usernames(["Alice", "alice"]);
        let table = ChanceTable::from_pool(&pool);
        assert_eq!(table.participants(), 2);
    }

    #[test]
    fn test_empty_pool() {
        let table = ChanceTable::from_pool(&TicketPool::new());
        assert!(table.is_empty());
        assert_eq!(table.total_tickets(), 0);
    }
}

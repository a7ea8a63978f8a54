use super::Reaction;
use crate::id::{marker::UserMarker, Id};
use std::collections::{HashMap, HashSet};

/// Who reacted with one [`Reaction`].
///
/// `users` holds the reactors known so far; `unknown` counts the ones that
/// are not. Together they make up the reaction's count.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReactionMappingLine {
    pub users: HashSet<Id<UserMarker>>,
    pub unknown: usize,
}

impl ReactionMappingLine {
    /// A line where none of the `count` reactors are known.
    pub fn with_unknown(count: usize) -> Self {
        Self {
            users: HashSet::new(),
            unknown: count,
        }
    }

    /// A line where every reactor is known.
    pub fn with_users(users: impl IntoIterator<Item = Id<UserMarker>>) -> Self {
        Self {
            users: users.into_iter().collect(),
            unknown: 0,
        }
    }

    /// Total number of reactors.
    pub fn count(&self) -> usize {
        self.users.len() + self.unknown
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn contains(&self, user: Id<UserMarker>) -> bool {
        self.users.contains(&user)
    }

    /// Record a new reactor. Returns whether the user wasn't known yet.
    pub fn add(&mut self, user: Id<UserMarker>) -> bool {
        self.users.insert(user)
    }

    /// Record a removed reaction.
    ///
    /// A user that wasn't known must have been one of the unknown reactors.
    /// Returns whether the count went down.
    pub fn remove(&mut self, user: Id<UserMarker>) -> bool {
        if self.users.remove(&user) {
            return true;
        }

        if self.unknown > 0 {
            self.unknown -= 1;
            return true;
        }

        false
    }

    /// Combine with a newer state of the same reaction.
    ///
    /// The newer line's count wins. Users known to either line are kept as
    /// long as they fit in that count; when they don't, the newer line's
    /// users are kept and the rest is filled from this line in ascending
    /// ID order.
    #[must_use]
    pub fn merge_with(&self, newer: &Self) -> Self {
        let count = newer.count();
        let union_len = self.users.union(&newer.users).count();

        if union_len <= count {
            return Self {
                users: self.users.union(&newer.users).copied().collect(),
                unknown: count - union_len,
            };
        }

        let mut older: Vec<_> = self.users.difference(&newer.users).copied().collect();
        older.sort_unstable();

        let mut users = newer.users.clone();
        users.extend(older.into_iter().take(count - newer.users.len()));

        Self { users, unknown: 0 }
    }

    /// Record reactors fetched from the API.
    ///
    /// If the fetched users account for the whole count they replace the
    /// known users, otherwise they are added and the unknown count shrinks
    /// by the number of newly learned users.
    pub fn fill_reactors(&mut self, users: impl IntoIterator<Item = Id<UserMarker>>) {
        let fetched: HashSet<_> = users.into_iter().collect();

        if fetched.len() >= self.count() {
            self.users = fetched;
            self.unknown = 0;

            return;
        }

        for user in fetched {
            if self.users.insert(user) {
                self.unknown = self.unknown.saturating_sub(1);
            }
        }
    }
}

/// Merge a newer set of reaction lines into `old`.
///
/// Every reaction in `new` is merged into its old line, or inserted.
/// Reactions missing from `new` are dropped. Returns whether `old` changed.
pub fn merge_update_reaction_mapping_lines(
    old: &mut HashMap<Reaction, ReactionMappingLine>,
    new: HashMap<Reaction, ReactionMappingLine>,
) -> bool {
    let before = old.len();
    old.retain(|reaction, _| new.contains_key(reaction));
    let mut changed = old.len() != before;

    for (reaction, line) in new {
        match old.get_mut(&reaction) {
            Some(old_line) => {
                let merged = old_line.merge_with(&line);

                if merged != *old_line {
                    *old_line = merged;
                    changed = true;
                }
            }
            None => {
                old.insert(reaction, line);
                changed = true;
            }
        }
    }

    changed
}

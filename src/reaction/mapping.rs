use super::{merge_update_reaction_mapping_lines, Reaction, ReactionMappingLine, ReactionType};
use crate::{
    emoji::Emoji,
    entity::Entity,
    error::EntityError,
    id::{marker::UserMarker, Id},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Reaction counts split by kind.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
struct CountDetails {
    #[serde(default)]
    normal: usize,
    #[serde(default)]
    burst: usize,
}

/// One element of a message's `reactions` array.
#[derive(Debug, Deserialize, Serialize)]
struct MessageReaction {
    emoji: Emoji,
    #[serde(default)]
    count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count_details: Option<CountDetails>,
    #[serde(default)]
    me: bool,
    #[serde(default)]
    burst: bool,
}

/// All reactions on a message.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReactionMapping {
    lines: HashMap<Reaction, ReactionMappingLine>,
}

impl ReactionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a message's `reactions` array.
    ///
    /// Counts are all the payload carries, so every line starts with only
    /// unknown reactors. `null` reads as no reactions.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] if the array doesn't decode or holds an
    /// invalid emoji.
    pub fn from_data(data: &Value) -> Result<Self, EntityError> {
        let reactions = Option::<Vec<MessageReaction>>::deserialize(data)
            .map_err(EntityError::deserialize)?
            .unwrap_or_default();

        let mut mapping = Self::new();

        for reaction in reactions {
            reaction.emoji.validate()?;

            let details = reaction.count_details.unwrap_or(if reaction.burst {
                CountDetails {
                    normal: 0,
                    burst: reaction.count,
                }
            } else {
                CountDetails {
                    normal: reaction.count,
                    burst: 0,
                }
            });

            for (kind, count) in [
                (ReactionType::Standard, details.normal),
                (ReactionType::Burst, details.burst),
            ] {
                if count > 0 {
                    mapping.lines.insert(
                        Reaction::new(reaction.emoji.clone(), kind),
                        ReactionMappingLine::with_unknown(count),
                    );
                }
            }
        }

        Ok(mapping)
    }

    /// Write the mapping as a message's `reactions` array, one element per
    /// emoji, ordered by emoji.
    ///
    /// # Errors
    ///
    /// Returns an [`EntityError`] if an emoji fails to encode.
    pub fn to_data(&self) -> Result<Value, EntityError> {
        let mut by_emoji: BTreeMap<String, (&Emoji, CountDetails)> = BTreeMap::new();

        for (reaction, line) in &self.lines {
            let (_, details) = by_emoji
                .entry(reaction.emoji.as_reaction())
                .or_insert((&reaction.emoji, CountDetails::default()));

            match reaction.kind {
                ReactionType::Standard => details.normal += line.count(),
                ReactionType::Burst => details.burst += line.count(),
            }
        }

        let reactions: Vec<_> = by_emoji
            .into_values()
            .map(|(emoji, details)| MessageReaction {
                emoji: emoji.clone(),
                count: details.normal + details.burst,
                count_details: Some(details),
                me: false,
                burst: details.burst > 0,
            })
            .collect();

        serde_json::to_value(reactions).map_err(EntityError::serialize)
    }

    pub fn get(&self, reaction: &Reaction) -> Option<&ReactionMappingLine> {
        self.lines.get(reaction)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Reaction, &ReactionMappingLine)> {
        self.lines.iter()
    }

    /// Number of distinct reactions.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Record a user reacting. Returns whether the user is new to the line.
    pub fn add(&mut self, reaction: Reaction, user: Id<UserMarker>) -> bool {
        self.lines.entry(reaction).or_default().add(user)
    }

    /// Record a user removing their reaction.
    ///
    /// Lines left without reactors are dropped. Returns whether the count
    /// went down.
    pub fn remove(&mut self, reaction: &Reaction, user: Id<UserMarker>) -> bool {
        let Some(line) = self.lines.get_mut(reaction) else {
            return false;
        };

        let removed = line.remove(user);

        if line.is_empty() {
            self.lines.remove(reaction);
        }

        removed
    }

    /// Drop every reaction with the given emoji, of either kind.
    pub fn remove_emoji(&mut self, emoji: &Emoji) -> bool {
        let before = self.lines.len();
        self.lines.retain(|reaction, _| &reaction.emoji != emoji);

        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Merge a newer mapping of the same message into this one.
    ///
    /// See [`merge_update_reaction_mapping_lines`].
    pub fn merge_update(&mut self, newer: ReactionMapping) -> bool {
        merge_update_reaction_mapping_lines(&mut self.lines, newer.lines)
    }

    /// Record reactors fetched for one reaction.
    pub fn fill_reactors(
        &mut self,
        reaction: Reaction,
        users: impl IntoIterator<Item = Id<UserMarker>>,
    ) {
        self.lines.entry(reaction).or_default().fill_reactors(users);
    }

    /// Sum of every line's count.
    pub fn total_count(&self) -> usize {
        self.lines.values().map(ReactionMappingLine::count).sum()
    }

    /// Whether every reactor of every line is known.
    pub fn fully_loaded(&self) -> bool {
        self.lines.values().all(|line| line.unknown == 0)
    }
}

impl From<HashMap<Reaction, ReactionMappingLine>> for ReactionMapping {
    fn from(lines: HashMap<Reaction, ReactionMappingLine>) -> Self {
        Self { lines }
    }
}

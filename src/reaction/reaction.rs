use crate::{
    emoji::Emoji,
    entity::Entity,
    error::ValidationError,
};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Whether a reaction is a normal or a super reaction.
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize_repr)]
#[repr(u8)]
pub enum ReactionType {
    #[default]
    Standard = 0,
    /// Super reaction, drawn with an animated burst.
    Burst = 1,
}

/// An emoji reacted with in a given way. Keys a [`ReactionMapping`].
///
/// [`ReactionMapping`]: super::ReactionMapping
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Reaction {
    pub emoji: Emoji,
    #[serde(rename = "type", default)]
    pub kind: ReactionType,
}

impl Reaction {
    pub const fn new(emoji: Emoji, kind: ReactionType) -> Self {
        Self { emoji, kind }
    }

    pub const fn standard(emoji: Emoji) -> Self {
        Self::new(emoji, ReactionType::Standard)
    }

    pub const fn burst(emoji: Emoji) -> Self {
        Self::new(emoji, ReactionType::Burst)
    }

    pub fn is_burst(&self) -> bool {
        self.kind == ReactionType::Burst
    }
}

impl Display for Reaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.emoji, f)?;

        if self.is_burst() {
            f.write_str(" (burst)")?;
        }

        Ok(())
    }
}

impl Entity for Reaction {
    const REQUIRED_FIELDS: &'static [&'static str] = &["emoji", "type"];

    fn validate(&self) -> Result<(), ValidationError> {
        self.emoji.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Reaction, ReactionType};
    use crate::{
        emoji::Emoji,
        entity::{tests::assert_round_trip, Entity},
    };
    use serde_json::json;
    use serde_test::Token;
    use static_assertions::assert_impl_all;
    use std::{collections::HashSet, fmt::Debug, hash::Hash};

    assert_impl_all!(Reaction: Clone, Debug, Eq, Hash, Send, Sync);

    #[test]
    fn reaction_type() {
        serde_test::assert_tokens(&ReactionType::Burst, &[Token::U8(1)]);
    }

    #[test]
    fn keyed_by_emoji_and_type() {
        let standard = Reaction::standard(Emoji::unicode("🐼"));
        let burst = Reaction::burst(Emoji::unicode("🐼"));

        let keys: HashSet<_> = [standard.clone(), burst.clone(), standard.clone()]
            .into_iter()
            .collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(burst.to_string(), "🐼 (burst)");
        assert_eq!(standard.to_string(), "🐼");
    }

    #[test]
    fn decode() {
        let reaction = Reaction::from_data(&json!({
            "emoji": {"id": "41771983429993937", "name": "LUL", "animated": true},
            "type": 1
        }))
        .unwrap();

        assert!(reaction.is_burst());
        assert!(reaction.emoji.is_custom());
        assert_round_trip(&reaction);
    }
}

//! Enum-like wire values with stable names.
//!
//! Discord adds new variants to its enumerations without notice. A
//! preinstanced type keeps every value the library knows about as a named
//! variant and carries anything else through `Unknown`, so decoding never
//! fails on a new value and re-encoding writes back exactly what was read.

/// Declare a preinstanced type.
///
/// Integer-valued types are `Copy`; string-valued types (declared with
/// `enum Name: str`) hold an owned string for unknown values. Exactly one
/// variant must be marked `#[default]`.
///
/// ```ignore
/// preinstanced! {
///     pub enum ReactionKind: u8 {
///         #[default]
///         Standard = 0 => "standard",
///         Burst = 1 => "burst",
///     }
/// }
/// ```
macro_rules! preinstanced {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: str {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $display:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Value not known to this library.
            Unknown(String),
        }

        impl $name {
            /// Every known variant.
            pub const VALUES: &'static [Self] = &[$(Self::$variant),+];

            /// Wire value.
            pub fn value(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Human readable name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)+
                    Self::Unknown(_) => "undefined",
                }
            }

            /// Whether the wire value wasn't recognised.
            pub const fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    unknown => {
                        tracing::trace!(kind = stringify!($name), value = unknown, "unknown preinstanced value");
                        Self::Unknown(unknown.to_owned())
                    }
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unknown(value) => value,
                    known => known.value().to_owned(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value.as_ref()))
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $display:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Value not known to this library.
            Unknown($repr),
        }

        impl $name {
            /// Every known variant.
            pub const VALUES: &'static [Self] = &[$(Self::$variant),+];

            /// Wire value.
            pub const fn value(self) -> $repr {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value,
                }
            }

            /// Human readable name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)+
                    Self::Unknown(_) => "undefined",
                }
            }

            /// Whether the wire value wasn't recognised.
            pub const fn is_unknown(self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    unknown => {
                        tracing::trace!(kind = stringify!($name), value = unknown, "unknown preinstanced value");
                        Self::Unknown(unknown)
                    }
                }
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.value()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.value(), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <$repr as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_test::Token;

    preinstanced! {
        enum Flavor: u8 {
            #[default]
            Plain = 0 => "plain",
            Sour = 1 => "sour",
        }
    }

    preinstanced! {
        enum Mood: str {
            Happy = "happy" => "Happy",
            #[default]
            Calm = "calm" => "Calm",
        }
    }

    #[test]
    fn integer_known_values() {
        assert_eq!(Flavor::from(1), Flavor::Sour);
        assert_eq!(Flavor::Sour.value(), 1);
        assert_eq!(Flavor::Sour.name(), "sour");
        assert_eq!(Flavor::default(), Flavor::Plain);
        assert_eq!(Flavor::VALUES, &[Flavor::Plain, Flavor::Sour]);
        serde_test::assert_tokens(&Flavor::Sour, &[Token::U8(1)]);
    }

    #[test]
    fn integer_unknown_value_is_kept() {
        let unknown = Flavor::from(200);
        assert!(unknown.is_unknown());
        assert_eq!(unknown.value(), 200);
        assert_eq!(unknown.to_string(), "undefined");
        serde_test::assert_tokens(&unknown, &[Token::U8(200)]);
    }

    #[test]
    fn string_values() {
        assert_eq!(Mood::from("happy"), Mood::Happy);
        assert_eq!(Mood::default(), Mood::Calm);
        assert_eq!(Mood::Happy.to_string(), "Happy");
        serde_test::assert_tokens(&Mood::Calm, &[Token::Str("calm")]);

        let unknown = Mood::from("sleepy");
        assert_eq!(unknown.value(), "sleepy");
        assert_eq!(String::from(unknown.clone()), "sleepy");
        serde_test::assert_tokens(&unknown, &[Token::Str("sleepy")]);
    }
}

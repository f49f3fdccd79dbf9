//! Human-readable identifiers for Cloud Kitchen entities
//!
//! Every record carries an application-level ID of the form `<prefix>-#####`
//! alongside its internal store identity. The numeric part is zero-padded to
//! five digits; larger numbers simply widen.
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "sqlx-support")]
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite, Type,
};

/// Width of the zero-padded numeric suffix
pub const SEQUENCE_WIDTH: usize = 5;

/// Entity types that receive sequential human-readable IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Registered users (`U-`)
    User,
    /// Recipes (`R-`)
    Recipe,
    /// Inventory items (`I-`)
    Inventory,
}

impl EntityKind {
    /// All kinds, in allocation-table order
    pub const ALL: [EntityKind; 3] = [EntityKind::User, EntityKind::Recipe, EntityKind::Inventory];

    /// Single-letter prefix rendered before the dash
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::User => "U",
            EntityKind::Recipe => "R",
            EntityKind::Inventory => "I",
        }
    }

    /// Stable key used for the sequence counter row
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Recipe => "recipe",
            EntityKind::Inventory => "inventory",
        }
    }

    /// Render sequence number `n` as `<prefix>-#####`
    pub fn format(&self, n: u64) -> String {
        format!("{}-{:0width$}", self.prefix(), n, width = SEQUENCE_WIDTH)
    }

    /// The ID handed out when no record of this kind exists yet
    pub fn seed(&self) -> String {
        self.format(1)
    }

    /// Parse the numeric suffix of an ID of this kind
    ///
    /// Returns `None` when the prefix does not match or the suffix is not a
    /// plain decimal number.
    pub fn parse_sequence(&self, id: &str) -> Option<u64> {
        let digits = id.strip_prefix(self.prefix())?.strip_prefix('-')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// The ID that follows `last`, or the seed when there is no usable `last`
    pub fn successor(&self, last: Option<&str>) -> String {
        match last.and_then(|id| self.parse_sequence(id)) {
            Some(n) => self.format(n + 1),
            None => self.seed(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

macro_rules! human_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Entity kind this ID belongs to
            pub const KIND: EntityKind = $kind;

            /// Wrap an existing ID string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Build the ID for sequence number `n`
            pub fn from_sequence(n: u64) -> Self {
                Self(Self::KIND.format(n))
            }

            /// Numeric suffix, if well-formed
            pub fn sequence(&self) -> Option<u64> {
                Self::KIND.parse_sequence(&self.0)
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        #[cfg(feature = "sqlx-support")]
        impl Type<Sqlite> for $name {
            fn type_info() -> SqliteTypeInfo {
                <String as Type<Sqlite>>::type_info()
            }
        }

        #[cfg(feature = "sqlx-support")]
        impl<'q> Encode<'q, Sqlite> for $name {
            fn encode_by_ref(
                &self,
                args: &mut Vec<SqliteArgumentValue<'q>>,
            ) -> Result<IsNull, BoxDynError> {
                <String as Encode<Sqlite>>::encode_by_ref(&self.0, args)
            }
        }

        #[cfg(feature = "sqlx-support")]
        impl<'r> Decode<'r, Sqlite> for $name {
            fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
                let s = <String as Decode<Sqlite>>::decode(value)?;
                Ok($name(s))
            }
        }
    };
}

human_id!(
    /// User identifier (`U-#####`)
    UserId,
    EntityKind::User
);

human_id!(
    /// Recipe identifier (`R-#####`)
    RecipeId,
    EntityKind::Recipe
);

human_id!(
    /// Inventory item identifier (`I-#####`)
    InventoryId,
    EntityKind::Inventory
);

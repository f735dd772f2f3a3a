use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! object_types {
    ($($variant: ident => $singular: literal, $plural: literal, $snake: literal;)*) => {
        /// Kind of schema object a bulk grant applies to.
        ///
        /// Each kind carries its singular and plural SQL keyword phrase,
        /// the plural is never derived by appending a suffix.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum ObjectType {
            $($variant,)*
        }

        impl ObjectType {
            /// Every object type, in keyword table order.
            pub const ALL: &'static [ObjectType] = &[$(ObjectType::$variant,)*];

            pub const fn singular(self) -> &'static str {
                match self {
                    $(ObjectType::$variant => $singular,)*
                }
            }
            pub const fn plural(self) -> &'static str {
                match self {
                    $(ObjectType::$variant => $plural,)*
                }
            }
            pub const fn snake_case(self) -> &'static str {
                match self {
                    $(ObjectType::$variant => $snake,)*
                }
            }
        }
    };
}

object_types! {
    Schema => "SCHEMA", "SCHEMAS", "schema";
    Table => "TABLE", "TABLES", "table";
    View => "VIEW", "VIEWS", "view";
    MaterializedView => "MATERIALIZED VIEW", "MATERIALIZED VIEWS", "materialized_view";
    Stage => "STAGE", "STAGES", "stage";
    ExternalTable => "EXTERNAL TABLE", "EXTERNAL TABLES", "external_table";
    FileFormat => "FILE FORMAT", "FILE FORMATS", "file_format";
    Function => "FUNCTION", "FUNCTIONS", "function";
    Procedure => "PROCEDURE", "PROCEDURES", "procedure";
    Sequence => "SEQUENCE", "SEQUENCES", "sequence";
    Stream => "STREAM", "STREAMS", "stream";
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Error parsing an [ObjectType] from text
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown object type `{0}`")]
pub struct ParseObjectTypeError(pub String);

/// Accepts `MATERIALIZED VIEW`, `materialized views` or `materialized_view`.
impl FromStr for ObjectType {
    type Err = ParseObjectTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .replace('_', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        ObjectType::ALL
            .iter()
            .copied()
            .find(|object_type| {
                object_type.singular() == normalized || object_type.plural() == normalized
            })
            .ok_or_else(|| ParseObjectTypeError(s.to_owned()))
    }
}

impl TryFrom<String> for ObjectType {
    type Error = ParseObjectTypeError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObjectType> for &'static str {
    fn from(value: ObjectType) -> Self {
        value.singular()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ObjectType::Schema, "SCHEMAS")]
    #[case(ObjectType::Table, "TABLES")]
    #[case(ObjectType::View, "VIEWS")]
    #[case(ObjectType::MaterializedView, "MATERIALIZED VIEWS")]
    #[case(ObjectType::Stage, "STAGES")]
    #[case(ObjectType::ExternalTable, "EXTERNAL TABLES")]
    #[case(ObjectType::FileFormat, "FILE FORMATS")]
    #[case(ObjectType::Function, "FUNCTIONS")]
    #[case(ObjectType::Procedure, "PROCEDURES")]
    #[case(ObjectType::Sequence, "SEQUENCES")]
    #[case(ObjectType::Stream, "STREAMS")]
    fn plural_keyword(#[case] object_type: ObjectType, #[case] plural: &str) {
        assert_eq!(object_type.plural(), plural);
    }

    #[test]
    fn all_lists_every_type_once() {
        assert_eq!(ObjectType::ALL.len(), 11);
        for (i, object_type) in ObjectType::ALL.iter().enumerate() {
            assert!(!ObjectType::ALL[i + 1..].contains(object_type));
        }
    }

    #[rstest]
    #[case("MATERIALIZED VIEW", ObjectType::MaterializedView)]
    #[case("materialized views", ObjectType::MaterializedView)]
    #[case("materialized_view", ObjectType::MaterializedView)]
    #[case("  File   Format ", ObjectType::FileFormat)]
    #[case("STREAMS", ObjectType::Stream)]
    fn parse(#[case] input: &str, #[case] expected: ObjectType) {
        assert_eq!(input.parse::<ObjectType>(), Ok(expected));
    }

    #[test]
    fn parse_unknown() {
        let err = "WAREHOUSE".parse::<ObjectType>().unwrap_err();
        assert_eq!(err, ParseObjectTypeError("WAREHOUSE".into()));
        assert_eq!(err.to_string(), "unknown object type `WAREHOUSE`");
    }

    #[test]
    fn parse_round_trips_display() {
        for object_type in ObjectType::ALL {
            assert_eq!(object_type.to_string().parse::<ObjectType>(), Ok(*object_type));
            assert_eq!(object_type.snake_case().parse::<ObjectType>(), Ok(*object_type));
        }
    }

    #[test]
    fn serde_uses_keyword() -> Result<(), anyhow::Error> {
        let json = serde_json::to_string(&ObjectType::ExternalTable)?;
        assert_eq!(json, r#""EXTERNAL TABLE""#);
        let parsed: ObjectType = serde_json::from_str(r#""external_table""#)?;
        assert_eq!(parsed, ObjectType::ExternalTable);
        assert!(serde_json::from_str::<ObjectType>(r#""TASK""#).is_err());
        Ok(())
    }
}

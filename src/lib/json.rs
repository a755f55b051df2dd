//! Lenient decoders for API fields whose JSON type is not stable (numbers
//! sent as strings and the other way round, ids that are sometimes populated
//! documents). Everything is normalized to one Rust type at this boundary.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(value) => value.trim().to_string(),
            Scalar::Integer(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
        }
    }
}

/// Accepts `"3"`, `3` or `null` and yields the textual form.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// Like [`string_or_number`], but blank and `null` values come back as `None`.
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .filter(|value| !value.is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Reference {
    Id(String),
    Document {
        #[serde(rename = "_id", alias = "id")]
        id: String,
    },
}

/// Accepts an id string or a populated document with `_id` and yields the id.
pub fn id_or_document<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<Reference>::deserialize(deserializer)?.map(|reference| match reference {
            Reference::Id(id) | Reference::Document { id } => id,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::{id_or_document, optional_string_or_number, string_or_number};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "string_or_number")]
        quantity: String,
        #[serde(default, deserialize_with = "id_or_document")]
        owner: Option<String>,
        #[serde(default, deserialize_with = "optional_string_or_number")]
        phone: Option<String>,
    }

    fn parse(json: &str) -> Sample {
        serde_json::from_str(json).expect("sample")
    }

    #[test]
    fn numbers_and_strings_normalize_to_text() {
        assert_eq!(parse(r#"{"quantity": 3}"#).quantity, "3");
        assert_eq!(parse(r#"{"quantity": " 3 "}"#).quantity, "3");
        assert_eq!(parse(r#"{"quantity": 2.5}"#).quantity, "2.5");
        assert_eq!(parse(r#"{"quantity": null}"#).quantity, "");
        assert_eq!(parse("{}").quantity, "");
    }

    #[test]
    fn optional_fields_drop_blank_and_null() {
        assert_eq!(parse(r#"{"phone": 599111222}"#).phone.as_deref(), Some("599111222"));
        assert_eq!(parse(r#"{"phone": "0599"}"#).phone.as_deref(), Some("0599"));
        assert_eq!(parse(r#"{"phone": "  "}"#).phone, None);
        assert_eq!(parse(r#"{"phone": null}"#).phone, None);
        assert_eq!(parse("{}").phone, None);
    }

    #[test]
    fn owner_accepts_id_or_populated_document() {
        assert_eq!(parse(r#"{"owner": "u1"}"#).owner.as_deref(), Some("u1"));
        assert_eq!(
            parse(r#"{"owner": {"_id": "u2", "name": "Rana"}}"#).owner.as_deref(),
            Some("u2")
        );
        assert_eq!(parse(r#"{"owner": null}"#).owner, None);
        assert_eq!(parse("{}").owner, None);
    }
}

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single record album.
///
/// `id` is positional: it always equals the album's index in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Request body for creating or modifying an album.
///
/// Decoding is lenient in the same ways as a Go `encoding/json` struct decode:
/// - keys match field names case-insensitively (`"Title"` fills `title`);
/// - missing fields, `null` fields and a bare `null` body leave zero values;
/// - a repeated key keeps its last value, unknown keys are skipped.
///
/// The `id` is never trusted: the store assigns or keeps its own.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AlbumPayload {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl AlbumPayload {
    pub fn into_album(self, id: String) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}

impl<'de> Deserialize<'de> for AlbumPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AlbumPayloadVisitor)
    }
}

struct AlbumPayloadVisitor;

impl<'de> Visitor<'de> for AlbumPayloadVisitor {
    type Value = AlbumPayload;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an album object")
    }

    fn visit_unit<E: de::Error>(self) -> Result<AlbumPayload, E> {
        Ok(AlbumPayload::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<AlbumPayload, E> {
        Ok(AlbumPayload::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<AlbumPayload, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut payload = AlbumPayload::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.to_lowercase().as_str() {
                "id" => {
                    if let Some(id) = map.next_value::<Option<String>>()? {
                        payload.id = id;
                    }
                }
                "title" => {
                    if let Some(title) = map.next_value::<Option<String>>()? {
                        payload.title = title;
                    }
                }
                "artist" => {
                    if let Some(artist) = map.next_value::<Option<String>>()? {
                        payload.artist = artist;
                    }
                }
                "price" => {
                    if let Some(price) = map.next_value::<Option<f64>>()? {
                        payload.price = price;
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(payload)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

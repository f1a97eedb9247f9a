//! Optional attachments for a notification and their wire field names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Multipart field names understood by the LINE Notify API
pub mod fields {
    pub const MESSAGE: &str = "message";
    pub const IMAGE_FULLSIZE: &str = "imageFullsize";
    pub const IMAGE_THUMBNAIL: &str = "imageThumbnail";
    pub const IMAGE_FILE: &str = "imageFile";
    pub const STICKER_PACKAGE_ID: &str = "stickerPackageId";
    pub const STICKER_ID: &str = "stickerId";
}

type FieldSource = fn(&SendOptions) -> Option<&str>;

/// Text fields derived from options, in submission order.
///
/// `url` feeds both image fields. The local file is not listed here because
/// it travels as a binary part under [`fields::IMAGE_FILE`].
const TEXT_FIELDS: [(&str, FieldSource); 4] = [
    (fields::IMAGE_FULLSIZE, |o| o.url.as_deref()),
    (fields::IMAGE_THUMBNAIL, |o| o.url.as_deref()),
    (fields::STICKER_PACKAGE_ID, |o| o.sticker_package_id.as_deref()),
    (fields::STICKER_ID, |o| o.sticker_id.as_deref()),
];

/// Optional attachments accepted by `send`
///
/// Serialized keys are `url`, `file`, `stkpkgid` and `stkid`. Sticker ids
/// may be given as numbers or strings; unknown keys are ignored. No
/// combination is rejected: a URL and a file, or half a sticker pair, are
/// passed to the service as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOptions {
    /// Public image URL, used for both the full-size and thumbnail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Local image uploaded as binary content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(
        rename = "stkpkgid",
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub sticker_package_id: Option<String>,

    #[serde(
        rename = "stkid",
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub sticker_id: Option<String>,
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object such as
    /// `{"url": "...", "stkpkgid": 1, "stkid": 2}`.
    ///
    /// `null` yields empty options.
    pub fn from_data(data: serde_json::Value) -> AppResult<Self> {
        if data.is_null() {
            return Ok(Self::default());
        }

        serde_json::from_value(data).map_err(|e| AppError::Validation {
            field: "data".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn with_sticker(
        mut self,
        package_id: impl Into<String>,
        sticker_id: impl Into<String>,
    ) -> Self {
        self.sticker_package_id = Some(package_id.into());
        self.sticker_id = Some(sticker_id.into());
        self
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.file.is_none()
            && self.sticker_package_id.is_none()
            && self.sticker_id.is_none()
    }

    /// Values from `other` replace the ones set here
    pub fn merge(mut self, other: SendOptions) -> Self {
        if other.url.is_some() {
            self.url = other.url;
        }
        if other.file.is_some() {
            self.file = other.file;
        }
        if other.sticker_package_id.is_some() {
            self.sticker_package_id = other.sticker_package_id;
        }
        if other.sticker_id.is_some() {
            self.sticker_id = other.sticker_id;
        }
        self
    }
}

/// Text parts of the form for `message` and `options`.
///
/// The message always comes first, even when empty.
pub fn text_fields<'a>(
    message: &'a str,
    options: Option<&'a SendOptions>,
) -> Vec<(&'static str, &'a str)> {
    let mut out = vec![(fields::MESSAGE, message)];

    if let Some(options) = options {
        out.extend(
            TEXT_FIELDS
                .iter()
                .filter_map(|(name, source)| source(options).map(|value| (*name, value))),
        );
    }

    out
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    }))
}

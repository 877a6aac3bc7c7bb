//! Parameter enums and typed results of the likes methods.
//!
//! The `Deserialize` impls here are the per-method payload decoders. Field
//! types are as narrow as the API allows: counts are unsigned, object ids are
//! `i64` so nothing is truncated, and integer-encoded flags become [`BoolInt`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of object a like is attached to. Sent as the `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeType {
    Post,
    Comment,
    Photo,
    Audio,
    Video,
    Note,
    Market,
    PhotoComment,
    VideoComment,
    TopicComment,
    MarketComment,
    Sitepage,
    Story,
}

impl LikeType {
    pub fn as_str(self) -> &'static str {
        match self {
            LikeType::Post => "post",
            LikeType::Comment => "comment",
            LikeType::Photo => "photo",
            LikeType::Audio => "audio",
            LikeType::Video => "video",
            LikeType::Note => "note",
            LikeType::Market => "market",
            LikeType::PhotoComment => "photo_comment",
            LikeType::VideoComment => "video_comment",
            LikeType::TopicComment => "topic_comment",
            LikeType::MarketComment => "market_comment",
            LikeType::Sitepage => "sitepage",
            LikeType::Story => "story",
        }
    }
}

impl fmt::Display for LikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `filter` parameter of `likes.getList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikesFilter {
    /// Everyone who liked the object.
    Likes,
    /// Only those who also shared it.
    Copies,
}

impl LikesFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            LikesFilter::Likes => "likes",
            LikesFilter::Copies => "copies",
        }
    }
}

/// A flag the API encodes as the integer `1` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum BoolInt {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 0 or 1, got {0}")]
pub struct InvalidBoolInt(pub i64);

impl BoolInt {
    pub fn is_yes(self) -> bool {
        self == BoolInt::Yes
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoolInt::Yes => "1",
            BoolInt::No => "0",
        }
    }
}

impl TryFrom<i64> for BoolInt {
    type Error = InvalidBoolInt;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BoolInt::Yes),
            0 => Ok(BoolInt::No),
            other => Err(InvalidBoolInt(other)),
        }
    }
}

impl From<BoolInt> for i64 {
    fn from(value: BoolInt) -> Self {
        match value {
            BoolInt::Yes => 1,
            BoolInt::No => 0,
        }
    }
}

impl From<bool> for BoolInt {
    fn from(value: bool) -> Self {
        if value {
            BoolInt::Yes
        } else {
            BoolInt::No
        }
    }
}

/// Result of `likes.add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResponse {
    /// Total likes on the object after the call.
    pub likes: u32,
}

/// Result of `likes.delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Total likes on the object after the call.
    pub likes: u32,
}

/// Result of `likes.getList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetListResponse {
    pub count: u32,
    /// User ids in server order. Documented as 32-bit, kept as `i64`;
    /// narrow with `i32::try_from` where needed.
    pub items: Vec<i64>,
}

/// Result of `likes.isLiked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsLikedResponse {
    pub liked: BoolInt,
    pub copied: BoolInt,
}

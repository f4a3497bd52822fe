use crate::{Author, CommunityRef, DbUrl, Time};

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobRef {
    pub blob_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MediaBlobs {
    pub original: BlobRef,
    pub thumb: BlobRef,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    pub blobs: MediaBlobs,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostValue {
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_text: Option<String>,

    pub created_at: Time,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<Media>,
}

/// A post as returned by the post RPCs; it is the root of a comment thread
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PostNode {
    pub key: String,
    pub url: DbUrl,
    pub author: Author,
    pub value: PostValue,
}

use std::fmt;

/// Identifier of a user or community, in `username@domain` form
///
/// Community and server ids carry no `@`; they are then both their own username and their own
/// domain.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> UserId {
        UserId(id.into())
    }

    pub fn username(&self) -> &str {
        self.0.split('@').next().unwrap_or(&self.0)
    }

    /// Only the field right after the first `@` counts, anything past a second `@` is ignored
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub user_id: UserId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Author {
    /// Name to show next to this author's content, falling back to the raw id
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.user_id.as_str())
    }
}

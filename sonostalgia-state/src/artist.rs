use serde::{Deserialize, Serialize};

/// An artist credited on a [`crate::Song`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    /// The artist name; also the key artists are deduplicated by
    pub name: String,
    /// A link to the artist's page
    pub link: String,
}
impl Artist {
    /// Creates an artist from a name and link.
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}
impl std::fmt::Display for Artist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n    - name: {}\n      link: {}",
            self.name, self.link
        )
    }
}

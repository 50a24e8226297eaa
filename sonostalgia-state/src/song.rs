use serde::{Deserialize, Serialize};

use crate::Artist;

/// A song attached to a memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Song {
    /// The song name
    pub name: String,
    /// A link to the song
    #[serde(rename = "link")]
    pub song_link: String,
    /// The credited artists; the first one is the primary artist
    pub artists: Vec<Artist>,
    /// When the song mattered. Free-form, never parsed.
    pub relevant_date: String,
    /// A link to the cover image
    pub image_link: String,
}
impl Song {
    /// The first credited artist, if there is one.
    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }
}

/// Renders the song as a YAML list entry, ready to paste into a memory file.
impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n- name: {}\n  link: {}\n  artists: ",
            self.name, self.song_link
        )?;
        for artist in &self.artists {
            write!(f, "{artist}")?;
        }
        write!(
            f,
            "\n  imageLink: {}\n  relevantDate: {}",
            self.image_link, self.relevant_date
        )
    }
}

use serde::{Deserialize, Serialize};

use crate::Song;

/// A single memory: a life event, when it happened, and the songs tied to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Memory {
    /// The output name of the memory's own page, e.g. `eve-online`
    pub output_title: String,
    /// The short title used for the page title
    #[serde(rename = "shortTitle")]
    pub page_title: String,
    /// The heading
    pub title: String,
    /// The subheading
    pub subtitle: String,
    /// A free-form date expression: `2019`, `2019-2022` or `2019,2021`
    pub date: String,
    /// The songs this memory is about
    pub songs: Vec<Song>,
    /// Markdown body. Rendering it is left to the templating layer.
    pub content: String,
    /// Songs that are related but not counted towards the totals
    pub other_songs: Vec<Song>,
}

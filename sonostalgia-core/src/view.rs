//! The view models handed to the templating layer, one per page.
use serde::Serialize;

use crate::{aggregate::Aggregate, date::YearToken, sonostalgia_state::Memory};

/// The most memories shown as recent.
pub const RECENT_MEMORY_COUNT: usize = 5;

/// The last [`RECENT_MEMORY_COUNT`] memories, in their original order.
pub fn recent_memories(memories: &[Memory]) -> &[Memory] {
    &memories[memories.len().saturating_sub(RECENT_MEMORY_COUNT)..]
}

/// The about page: headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The earliest year, or the sentinel if no year could be parsed
    pub earliest_memory: String,
    pub memory_count: usize,
    pub song_count: usize,
    pub artist_count: usize,
}

/// The landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Index<'a> {
    pub memory_count: usize,
    pub song_count: usize,
    pub artist_count: usize,
    /// Every distinct year token, numeric or not
    pub years_with_entries: usize,
    pub recent_memories: &'a [Memory],
}

/// Every memory, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog<'a> {
    pub memories: &'a [Memory],
}

/// Memories grouped by year, earliest year first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Years<'a> {
    pub years: Vec<YearGroup<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearGroup<'a> {
    pub year: YearToken,
    pub memories: Vec<&'a Memory>,
}

/// A page to render, together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Page<'a> {
    Summary(&'a Summary),
    Index(&'a Index<'a>),
    Catalog(&'a Catalog<'a>),
    Years(&'a Years<'a>),
    /// A single memory's own page
    Memory(&'a Memory),
}
impl<'a> Page<'a> {
    /// The name of the template that renders this page.
    pub fn template_name(&self) -> &'static str {
        match self {
            Page::Summary(_) => "about",
            Page::Index(_) => "index",
            Page::Catalog(_) => "memories",
            Page::Years(_) => "years",
            Page::Memory(_) => "memory",
        }
    }

    /// The subdirectory of the output directory this page goes in, if any.
    pub fn output_subdir(&self) -> Option<&'static str> {
        match self {
            Page::Memory(_) => Some("memory"),
            _ => None,
        }
    }

    /// The file name of this page, without an extension. `None` for a memory
    /// without an output title.
    ///
    /// For memory pages this is the raw output title, which is not safe to use
    /// as a path as-is.
    pub fn output_stem(&self) -> Option<&'a str> {
        match *self {
            Page::Memory(memory) if memory.output_title.is_empty() => None,
            Page::Memory(memory) => Some(memory.output_title.as_str()),
            _ => Some(self.template_name()),
        }
    }
}

/// All of the views for one collection of memories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages<'a> {
    pub summary: Summary,
    pub index: Index<'a>,
    pub catalog: Catalog<'a>,
    pub years: Years<'a>,
}
impl<'a> Pages<'a> {
    /// Aggregates `memories` and builds every view from the result.
    pub fn build(memories: &'a [Memory]) -> Self {
        assemble(&Aggregate::from_memories(memories), memories)
    }

    /// The four aggregate pages, followed by one page per memory.
    pub fn iter(&self) -> impl Iterator<Item = Page<'_>> {
        [
            Page::Summary(&self.summary),
            Page::Index(&self.index),
            Page::Catalog(&self.catalog),
            Page::Years(&self.years),
        ]
        .into_iter()
        .chain(self.catalog.memories.iter().map(Page::Memory))
    }
}

/// Builds the views from an aggregate and the memories it was built from.
pub fn assemble<'a>(aggregate: &Aggregate<'a>, memories: &'a [Memory]) -> Pages<'a> {
    let summary = Summary {
        earliest_memory: aggregate.earliest_year_or_sentinel().to_string(),
        memory_count: aggregate.memory_count,
        song_count: aggregate.song_count,
        artist_count: aggregate.artist_count,
    };

    let index = Index {
        memory_count: aggregate.memory_count,
        song_count: aggregate.song_count,
        artist_count: aggregate.artist_count,
        years_with_entries: aggregate.years.len(),
        recent_memories: recent_memories(memories),
    };

    let years = Years {
        years: aggregate
            .sorted_years()
            .into_iter()
            .map(|(_, token, memories)| YearGroup {
                year: token.clone(),
                memories: memories.to_vec(),
            })
            .collect(),
    };

    tracing::debug!(
        "Assembled views for {} memories across {} years",
        summary.memory_count,
        years.years.len()
    );

    Pages {
        summary,
        index,
        catalog: Catalog { memories },
        years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aggregate::EARLIEST_YEAR_SENTINEL,
        sonostalgia_state::{Artist, Song},
    };

    fn memories(dates: &[&str]) -> Vec<Memory> {
        dates
            .iter()
            .enumerate()
            .map(|(i, date)| Memory {
                output_title: format!("r{}", i + 1),
                title: format!("r{}", i + 1),
                date: date.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn titles<'m>(memories: impl IntoIterator<Item = &'m Memory>) -> Vec<&'m str> {
        memories.into_iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_recent_memories() {
        let seven = memories(&["2019"; 7]);
        assert_eq!(
            titles(recent_memories(&seven)),
            ["r3", "r4", "r5", "r6", "r7"]
        );

        let three = memories(&["2019"; 3]);
        assert_eq!(titles(recent_memories(&three)), ["r1", "r2", "r3"]);

        assert!(recent_memories(&[]).is_empty());
    }

    #[test]
    fn test_recent_memories_ignore_dates() {
        let memories = memories(&["2024", "2023", "2022", "2021", "2020", "2019"]);
        assert_eq!(
            titles(recent_memories(&memories)),
            ["r2", "r3", "r4", "r5", "r6"]
        );
    }

    #[test]
    fn test_empty() {
        let pages = Pages::build(&[]);
        assert_eq!(
            pages.summary,
            Summary {
                earliest_memory: EARLIEST_YEAR_SENTINEL.to_string(),
                memory_count: 0,
                song_count: 0,
                artist_count: 0,
            }
        );
        assert_eq!(pages.index.years_with_entries, 0);
        assert!(pages.index.recent_memories.is_empty());
        assert!(pages.catalog.memories.is_empty());
        assert!(pages.years.years.is_empty());
        assert_eq!(pages.iter().count(), 4);
    }

    #[test]
    fn test_views() {
        let mut memories = memories(&["2021", "2019-2020", "summer", "2018,2021", "x-y"]);
        memories[0].songs = vec![Song {
            name: "Heroes".to_string(),
            artists: vec![Artist::new("David Bowie", "")],
            ..Default::default()
        }];
        let pages = Pages::build(&memories);

        assert_eq!(pages.summary.earliest_memory, "2018");
        assert_eq!(pages.summary.memory_count, 5);
        assert_eq!(pages.summary.song_count, 1);
        assert_eq!(pages.summary.artist_count, 1);

        assert_eq!(pages.index.memory_count, 5);
        // 2018, 2019, 2020, 2021 and "summer".
        assert_eq!(pages.index.years_with_entries, 5);
        assert_eq!(titles(pages.index.recent_memories), titles(&memories));

        assert_eq!(pages.catalog.memories, memories.as_slice());

        let years: Vec<&str> = pages.years.years.iter().map(|g| g.year.as_str()).collect();
        assert_eq!(years, ["2018", "2019", "2020", "2021"]);
        assert_eq!(titles(pages.years.years[3].memories.iter().copied()), ["r1", "r4"]);
    }

    #[test]
    fn test_pages() {
        let mut memories = memories(&["2019", "2020"]);
        memories[1].output_title = String::new();
        let pages = Pages::build(&memories);

        let names: Vec<_> = pages
            .iter()
            .map(|p| (p.output_subdir(), p.output_stem()))
            .collect();
        assert_eq!(
            names,
            [
                (None, Some("about")),
                (None, Some("index")),
                (None, Some("memories")),
                (None, Some("years")),
                (Some("memory"), Some("r1")),
                (Some("memory"), None),
            ]
        );
        assert_eq!(pages.iter().last().unwrap().template_name(), "memory");
    }

    #[test]
    fn test_page_serializes_as_its_view() {
        let memories = memories(&["2019"]);
        let pages = Pages::build(&memories);
        let json = serde_json::to_value(Page::Summary(&pages.summary)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "earliestMemory": "2019",
                "memoryCount": 1,
                "songCount": 0,
                "artistCount": 0,
            })
        );

        let json = serde_json::to_value(Page::Years(&pages.years)).unwrap();
        assert_eq!(json["years"][0]["year"], "2019");
        assert_eq!(json["years"][0]["memories"][0]["outputTitle"], "r1");

        let json = serde_json::to_value(Page::Index(&pages.index)).unwrap();
        assert_eq!(json["yearsWithEntries"], 1);
        assert_eq!(json["recentMemories"][0]["outputTitle"], "r1");
    }
}

use std::collections::{HashMap, HashSet};

use crate::{
    date::{YearToken, parse_date_expression},
    sonostalgia_state::Memory,
};

/// What is reported as the earliest year when no date expression produced a
/// numeric year. Consumers should treat it as "unknown".
pub const EARLIEST_YEAR_SENTINEL: i64 = 9999;

/// Statistics and year groupings derived from a collection of memories.
///
/// Borrows the memories it was built from; nothing is copied.
#[derive(Debug, Clone, Default)]
pub struct Aggregate<'a> {
    /// The number of memories, including those with unparseable dates.
    pub memory_count: usize,
    /// The number of distinct (song name, primary artist) pairs.
    pub song_count: usize,
    /// The number of distinct primary artist names.
    pub artist_count: usize,
    /// Every year token that was produced, with the memories that produced
    /// it in input order. Includes non-numeric tokens.
    pub years: HashMap<YearToken, Vec<&'a Memory>>,
    /// The smallest numeric year token, if there was one.
    pub earliest_year: Option<i64>,
}
impl<'a> Aggregate<'a> {
    /// Aggregates `memories` in a single pass.
    ///
    /// Only each memory's main songs count towards the song and artist totals;
    /// other songs and any artists after the first are ignored.
    pub fn from_memories(memories: &'a [Memory]) -> Self {
        let mut songs: HashSet<(&str, Option<&str>)> = HashSet::new();
        let mut artists: HashSet<&str> = HashSet::new();
        let mut years: HashMap<YearToken, Vec<&'a Memory>> = HashMap::new();

        for memory in memories {
            for song in &memory.songs {
                let artist = song.primary_artist().map(|a| a.name.as_str());
                songs.insert((song.name.as_str(), artist));
                if let Some(artist) = artist {
                    artists.insert(artist);
                }
            }

            for token in parse_date_expression(&memory.date) {
                years.entry(token).or_default().push(memory);
            }
        }

        let earliest_year = years.keys().filter_map(YearToken::as_year).min();

        Self {
            memory_count: memories.len(),
            song_count: songs.len(),
            artist_count: artists.len(),
            years,
            earliest_year,
        }
    }

    /// The earliest year, or [`EARLIEST_YEAR_SENTINEL`] if there is none.
    pub fn earliest_year_or_sentinel(&self) -> i64 {
        self.earliest_year.unwrap_or(EARLIEST_YEAR_SENTINEL)
    }

    /// The year groupings in ascending numeric order.
    ///
    /// Tokens that are not numeric are left out. Tokens with the same numeric
    /// value but different text (`2019` and `+2019`) stay separate and are
    /// ordered by their text.
    pub fn sorted_years(&self) -> Vec<(i64, &YearToken, &[&'a Memory])> {
        let mut sorted: Vec<_> = self
            .years
            .iter()
            .filter_map(|(token, memories)| {
                token
                    .as_year()
                    .map(|year| (year, token, memories.as_slice()))
            })
            .collect();
        sorted.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        sorted
    }
}

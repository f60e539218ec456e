use regex::RegexBuilder;
use std::ops::Range;

use crate::content::{ChapterContent, ContentCache, Subtopic};


const ELLIPSIS: &'static str = "...";
const NO_CONTENT: &'static str = "No content";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HitKind {
    Chapter,
    Subtopic,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchHit {
    pub kind: HitKind,
    pub title: String,
    pub preview: String,
    pub chapter_id: String,
    pub subtopic_id: Option<String>,
}

/// `Inactive` asks the caller to hide results altogether, whereas an empty
/// `Active` list means nothing matched.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchResults {
    Inactive,
    Active(Vec<SearchHit>),
}

impl SearchResults {
    pub fn is_active(&self) -> bool {
        match self {
            SearchResults::Active(_) => true,
            SearchResults::Inactive => false,
        }
    }

    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchResults::Active(hits) => hits,
            SearchResults::Inactive => &[],
        }
    }
}

/// Substring search over the chapters that were already loaded. Results come
/// in cache order, each chapter hit followed by its subtopic hits.
#[derive(Clone, Debug)]
pub struct SearchIndex {
    preview_length: usize,
}

impl Default for SearchIndex {
    fn default() -> Self {
        SearchIndex::new(150)
    }
}

impl SearchIndex {
    pub fn new(preview_length: usize) -> Self {
        SearchIndex { preview_length }
    }

    pub fn search(&self, query: &str, cache: &ContentCache) -> SearchResults {
        let query = query.trim();
        if query.is_empty() {
            return SearchResults::Inactive;
        }
        let needle = query.to_lowercase();

        let mut hits = Vec::new();
        for (chapter_id, chapter) in cache.iter() {
            if contains(&chapter.title, &needle) {
                hits.push(chapter_hit(chapter_id, chapter));
            }
            for subtopic in &chapter.subtopics {
                let body_matches = subtopic.body().map_or(false, |b| contains(b, &needle));
                if contains(&subtopic.title, &needle) || body_matches {
                    hits.push(self.subtopic_hit(chapter_id, subtopic));
                }
            }
        }

        log::debug!("Search for {:?} found {} results", query, hits.len());
        SearchResults::Active(hits)
    }

    fn subtopic_hit(&self, chapter_id: &str, subtopic: &Subtopic) -> SearchHit {
        SearchHit {
            kind: HitKind::Subtopic,
            title: subtopic.title.clone(),
            preview: self.preview(subtopic.body()),
            chapter_id: chapter_id.to_owned(),
            subtopic_id: Some(subtopic.id.clone()),
        }
    }

    fn preview(&self, body: Option<&str>) -> String {
        match body {
            None => NO_CONTENT.to_owned(),
            Some(body) => match body.char_indices().nth(self.preview_length) {
                Some((cut, _)) => format!("{}{}", &body[..cut], ELLIPSIS),
                None => body.to_owned(),
            },
        }
    }
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

fn chapter_hit(chapter_id: &str, chapter: &ChapterContent) -> SearchHit {
    SearchHit {
        kind: HitKind::Chapter,
        title: chapter.title.clone(),
        preview: format!("Chapter: {}", chapter.title),
        chapter_id: chapter_id.to_owned(),
        subtopic_id: None,
    }
}

/// Byte ranges of every case-insensitive occurrence of `query` in `text`,
/// for the view layer to emphasise.
pub fn highlight(text: &str, query: &str) -> Vec<Range<usize>> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => regex.find_iter(text).map(|m| m.start()..m.end()).collect(),
        Err(e) => {
            log::warn!("Cannot highlight {:?}: {}", query, e);
            Vec::new()
        }
    }
}

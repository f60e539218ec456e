use itertools::Itertools;

use crate::course::{Catalog, Course};

/// Distinct values offered by the homepage filters, sorted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub classes: Vec<String>,
    pub subjects: Vec<String>,
    pub tags: Vec<String>,
}

fn distinct<'a, I: Iterator<Item = &'a String>>(values: I) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .cloned()
        .sorted()
        .dedup()
        .collect()
}

impl FilterOptions {
    pub fn collect(catalog: &Catalog) -> Self {
        FilterOptions {
            categories: distinct(catalog.active_courses().map(|c| &c.category)),
            classes: distinct(catalog.active_courses().flat_map(|c| c.classes.iter())),
            subjects: distinct(catalog.active_courses().flat_map(|c| c.subjects.iter())),
            tags: distinct(catalog.active_courses().flat_map(|c| c.tags.iter())),
        }
    }
}

/// Homepage course filter. Unset criteria accept every course.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseFilter {
    pub query: String,
    pub category: Option<String>,
    pub class: Option<String>,
    pub subject: Option<String>,
    pub tag: Option<String>,
}

impl CourseFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.category.is_none()
            && self.class.is_none()
            && self.subject.is_none()
            && self.tag.is_none()
    }

    pub fn matches(&self, course: &Course) -> bool {
        if let Some(category) = &self.category {
            if course.category != *category {
                return false;
            }
        }
        if let Some(class) = &self.class {
            if !course.classes.contains(class) {
                return false;
            }
        }
        if let Some(subject) = &self.subject {
            if !course.subjects.contains(subject) {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !course.tags.contains(tag) {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let haystack = format!(
            "{} {} {} {}",
            course.title,
            course.description,
            course.subjects.join(" "),
            course.tags.join(" ")
        );
        haystack.to_lowercase().contains(&query)
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Course> {
        catalog
            .active_courses()
            .filter(|c| self.matches(c))
            .collect()
    }
}

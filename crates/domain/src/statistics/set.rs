use classify_lines_shared_kernel::DomainResult;

use super::Statistics;
use crate::{category::Category, classifier};

/// One [`Statistics`] per category, for a single file or for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsSet {
    integers: Statistics,
    floats: Statistics,
    strings: Statistics,
}

impl StatisticsSet {
    pub fn new() -> Self {
        Self {
            integers: Statistics::empty(Category::Integer),
            floats: Statistics::empty(Category::Float),
            strings: Statistics::empty(Category::String),
        }
    }

    pub fn get(&self, category: Category) -> &Statistics {
        match category {
            Category::Integer => &self.integers,
            Category::Float => &self.floats,
            Category::String => &self.strings,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Statistics {
        match category {
            Category::Integer => &mut self.integers,
            Category::Float => &mut self.floats,
            Category::String => &mut self.strings,
        }
    }

    /// Classify a trimmed, non-empty line and record it under its category.
    pub fn record_line(&mut self, line: &str) -> DomainResult<Category> {
        let parsed = classifier::parse(line);
        let category = parsed.category();
        self.get_mut(category).record(line.to_owned(), parsed)?;
        Ok(category)
    }

    /// Merge every category of `other` into `self`, appending its lines.
    pub fn merge(&mut self, other: Self) -> DomainResult<()> {
        let Self { integers, floats, strings } = other;
        self.integers.merge(integers)?;
        self.floats.merge(floats)?;
        self.strings.merge(strings)?;
        Ok(())
    }

    /// Statistics in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Statistics> {
        Category::ALL.into_iter().map(|category| self.get(category))
    }

    /// Total number of classified lines across all categories.
    pub fn total(&self) -> usize {
        self.iter().map(Statistics::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Default for StatisticsSet {
    fn default() -> Self {
        Self::new()
    }
}

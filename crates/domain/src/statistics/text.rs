use classify_lines_shared_kernel::LineLength;

/// Shortest and longest line length of the string category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthSummary {
    shortest: Option<LineLength>,
    longest: Option<LineLength>,
}

impl LengthSummary {
    pub const fn new() -> Self {
        Self { shortest: None, longest: None }
    }

    pub fn observe(&mut self, line: &str) {
        let length = LineLength::of(line);
        self.absorb(Self { shortest: Some(length), longest: Some(length) });
    }

    pub fn absorb(&mut self, other: Self) {
        self.shortest = match (self.shortest, other.shortest) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.longest = match (self.longest, other.longest) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    #[inline]
    pub const fn shortest(&self) -> Option<LineLength> {
        self.shortest
    }

    #[inline]
    pub const fn longest(&self) -> Option<LineLength> {
        self.longest
    }
}

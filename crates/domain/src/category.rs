use std::fmt;

/// Closed set of line categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Integer,
    Float,
    String,
}

impl Category {
    /// Every category, in report and output order.
    pub const ALL: [Self; 3] = [Self::Integer, Self::Float, Self::String];

    /// Plural name used in reports and as the output file stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integers",
            Self::Float => "floats",
            Self::String => "strings",
        }
    }

    /// Output file name for this category, e.g. `out_integers.txt`.
    pub fn file_name(self, prefix: &str) -> String {
        format!("{prefix}{}.txt", self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

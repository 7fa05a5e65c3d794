/// How a category file is opened when there are lines to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file or replace its content.
    #[default]
    Truncate,
    /// Create the file or add to its end.
    Append,
}

/// Verbosity of the statistics report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// Category name and count.
    #[default]
    Short,
    /// Count plus min/max/sum/average or shortest/longest.
    Full,
}

/// What happens to an existing output file whose category received no lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyOutputPolicy {
    /// Remove the stale file, in truncate and append mode alike.
    #[default]
    Delete,
    /// Leave the existing file untouched.
    Keep,
}

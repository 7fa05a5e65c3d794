use classify_lines_shared_kernel::DomainResult;

use crate::statistics::StatisticsSet;

/// Folds per-file statistics into one global set.
///
/// Merging runs on a single thread after every per-file result exists, so the
/// global set is never shared. Counts, sums and extremes do not depend on the
/// merge order; the line sequence is the concatenation in the order the
/// results are supplied.
pub struct Aggregator;

impl Aggregator {
    pub fn merge_into(global: &mut StatisticsSet, file: StatisticsSet) -> DomainResult<()> {
        global.merge(file)
    }

    pub fn fold<I>(results: I) -> DomainResult<StatisticsSet>
    where
        I: IntoIterator<Item = StatisticsSet>,
    {
        results.into_iter().try_fold(StatisticsSet::new(), |mut global, file| {
            Self::merge_into(&mut global, file)?;
            Ok(global)
        })
    }
}

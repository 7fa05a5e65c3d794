use classify_lines_domain::{Category, Statistics, StatisticsSet, config::RunConfig, options::EmptyOutputPolicy};
use classify_lines_ports::store::OutputStore;
use classify_lines_shared_kernel::InfraResult;

use crate::dto::{CategoryPublish, PublishAction, PublishReport};

/// Apply the output policy to every category.
///
/// A category with lines is written in the configured mode. An empty category
/// has its file removed under [`EmptyOutputPolicy::Delete`] and left untouched
/// under [`EmptyOutputPolicy::Keep`]. A failure for one category does not stop
/// the others.
pub fn publish(store: &dyn OutputStore, config: &RunConfig, totals: &StatisticsSet) -> PublishReport {
    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let path = config.output_path(category);
            let result = publish_one(store, config, totals.get(category), &path);
            match &result {
                Ok(action) => log::debug!("{category}: {action:?} at {}", path.display()),
                Err(err) => log::warn!("{category}: {err}"),
            }
            CategoryPublish { category, path, result }
        })
        .collect();

    PublishReport { categories }
}

fn publish_one(
    store: &dyn OutputStore,
    config: &RunConfig,
    stats: &Statistics,
    path: &std::path::Path,
) -> InfraResult<PublishAction> {
    if !stats.is_empty() {
        store.write_lines(path, stats.lines(), config.write_mode)?;
        return Ok(PublishAction::Written { lines: stats.count() });
    }

    match config.empty_output {
        EmptyOutputPolicy::Keep => Ok(PublishAction::Kept),
        EmptyOutputPolicy::Delete => {
            Ok(if store.remove(path)? { PublishAction::Removed } else { PublishAction::Absent })
        }
    }
}

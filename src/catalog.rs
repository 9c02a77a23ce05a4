use std::path::Path;

use mealweek_recipe::{Catalog, CatalogLoader, LoadIssue};

/// Reads every source file in order and merges what parses.
///
/// A missing or unreadable file becomes a [`LoadIssue`] like a malformed
/// one, the remaining files still load.
pub async fn load_catalog<P: AsRef<Path>>(sources: &[P]) -> (Catalog, Vec<LoadIssue>) {
    let mut loader = CatalogLoader::new();

    for path in sources {
        let path = path.as_ref();
        let origin = path.display().to_string();

        match tokio::fs::read_to_string(path).await {
            Ok(body) => loader.source(origin, &body),
            Err(e) => loader.unavailable(origin, e),
        };
    }

    loader.finish()
}

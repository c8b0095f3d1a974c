use async_trait::async_trait;
use cinesync_models::ListMovie;

use crate::definition::ListDefinition;
use crate::error::ListError;

/// Uniform contract over the heterogeneous list providers.
///
/// `fetch` returns the raw items the provider reports; enrichment and
/// provider tagging happen in the aggregator. A fetch error marks the
/// provider failed for this cycle without aborting the others.
#[async_trait]
pub trait ImportList: Send + Sync {
    fn definition(&self) -> &ListDefinition;

    fn enabled(&self) -> bool {
        self.definition().enabled
    }

    fn enable_auto(&self) -> bool {
        self.definition().enable_auto
    }

    async fn fetch(&self) -> Result<Vec<ListMovie>, ListError>;
}

use cinesync_config::{Config, ListConfig, ListKind};
use tracing::info;

use crate::definition::ListDefinition;
use crate::radarr_list::RadarrListImport;
use crate::registry::ListRegistry;
use crate::stevenlu::StevenLuImport;
use crate::traits::ImportList;

/// Build the provider registry from configuration.
pub fn build_registry(config: &Config, client: reqwest::Client) -> ListRegistry {
    let lists = config
        .lists
        .iter()
        .map(|list_config| build_list(list_config, client.clone()))
        .collect::<Vec<_>>();

    info!(count = lists.len(), "configured list providers");

    ListRegistry::new(lists)
}

fn build_list(config: &ListConfig, client: reqwest::Client) -> Box<dyn ImportList> {
    let definition = definition_from_config(config);

    match config.kind {
        ListKind::RadarrList => Box::new(RadarrListImport::new(
            definition,
            config.url.clone(),
            client,
        )),
        ListKind::StevenLu => Box::new(StevenLuImport::new(
            definition,
            config.url.clone(),
            client,
        )),
    }
}

fn definition_from_config(config: &ListConfig) -> ListDefinition {
    ListDefinition {
        id: config.id,
        name: config.name.clone(),
        enabled: config.enabled,
        enable_auto: config.enable_auto,
        root_folder_path: config.root_folder_path.clone(),
        quality_profile_id: config.quality_profile_id,
        minimum_availability: config.minimum_availability,
        tags: config.tags.clone(),
        should_monitor: config.should_monitor,
    }
}

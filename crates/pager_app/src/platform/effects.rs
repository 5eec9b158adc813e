use std::path::PathBuf;

use pager_core::{Effect, PagerState};
use pager_logging::pager_info;

use super::persistence;
use super::source::ListingSource;

/// Executes pager effects against the listing source.
pub struct EffectRunner {
    prefs_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(prefs_dir: PathBuf) -> Self {
        Self { prefs_dir }
    }

    /// Run the effects of one interaction, returning the refreshed snapshot
    /// when any effect asked for a new fetch.
    pub fn apply(
        &self,
        source: &ListingSource,
        state: &PagerState,
        effects: Vec<Effect>,
    ) -> Option<PagerState> {
        let mut refreshed = None;
        for effect in effects {
            match effect {
                Effect::ChangePage { page } => {
                    pager_info!("ChangePage page={}", page);
                    refreshed = Some(source.fetch(page, state.page_size()));
                }
                Effect::ChangePageSize { size } => {
                    pager_info!("ChangePageSize size={}", size);
                    persistence::save_page_size(&self.prefs_dir, size);
                    // A new size restarts the listing from the first page.
                    refreshed = Some(source.fetch(1, size));
                }
            }
        }
        refreshed
    }
}

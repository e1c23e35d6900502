use ccc_config::CccConfig;
use ccc_core::catalog::Catalog;
use ccc_core::errors::CoreError;
use ccc_core::filter::FilterState;
use ccc_core::membership::MembershipSet;
use ccc_core::render::{Interaction, RenderSet};
use ccc_core::views::{self, DirectoryView};
use ccc_store::{FileStore, KeyValueStore, MembershipStore};
use chrono::NaiveDate;

use crate::bootstrap;
use crate::cli::GlobalFlags;

/// Session state shared by all command handlers.
///
/// Filter and membership state only change through [`AppContext::apply`],
/// which reports the views that must be redrawn.
pub struct AppContext<S = FileStore> {
    catalog: Catalog,
    filter: FilterState,
    membership: MembershipSet,
    store: MembershipStore<S>,
    today: Option<NaiveDate>,
}

impl AppContext<FileStore> {
    /// Build the context from configuration: sample catalog, file-backed
    /// membership, default filters.
    pub fn init(config: &CccConfig, flags: &GlobalFlags) -> Self {
        let dir = bootstrap::membership_dir(config, flags);
        tracing::debug!(dir = %dir.display(), key = %config.storage.key, "opening membership store");
        let store = MembershipStore::new(FileStore::new(dir), config.storage.key.clone());
        Self::new(
            Catalog::sample(),
            store,
            bootstrap::today_override(config, flags),
        )
    }
}

impl<S: KeyValueStore> AppContext<S> {
    /// Loads the persisted membership set once.
    pub fn new(catalog: Catalog, store: MembershipStore<S>, today: Option<NaiveDate>) -> Self {
        let membership = store.load();
        Self {
            catalog,
            filter: FilterState::default(),
            membership,
            store,
            today,
        }
    }

    pub const fn membership(&self) -> &MembershipSet {
        &self.membership
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pinned date if configured, otherwise the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Apply one interaction and return the views it invalidates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` when toggling an id that is neither in
    /// the catalog nor currently joined. State is left untouched in that case.
    pub fn apply(&mut self, interaction: &Interaction) -> Result<RenderSet, CoreError> {
        tracing::debug!(?interaction, "applying interaction");

        if let Interaction::ClubToggled(id) = interaction {
            // Stale joined ids stay removable after their club leaves the catalog.
            if self.catalog.find_club_by_id(id).is_none() && !self.membership.contains(id) {
                return Err(CoreError::club_not_found(id));
            }
            self.membership = self.store.toggle_and_save(&self.membership, id);
            return Ok(RenderSet::for_interaction(interaction));
        }

        Ok(self.filter.apply(interaction))
    }

    /// Build the requested sections. `today` is read once per pass.
    pub fn render(&self, set: RenderSet) -> DirectoryView {
        views::render(
            &self.catalog,
            &self.filter,
            &self.membership,
            self.today(),
            set,
        )
    }
}

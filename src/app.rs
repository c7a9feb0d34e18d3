//! App Core for Shelfmark.
//!
//! `App` owns the database, the settings engine and the explicit view state.
//! Every user event arrives as an [`Action`]; `dispatch` applies it, then
//! reloads both collections and re-renders the whole [`View`].

use crate::database::Database;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::kv_store::SqliteKeyValueStore;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::user_prompt::UserPrompt;
use crate::services::view_projector;
use crate::types::bookmark::{Bookmark, SortMode};
use crate::types::errors::BookmarkError;
use crate::types::settings::ViewSettings;
use crate::types::view::View;

pub const DELETE_CONFIRM_MESSAGE: &str = "Permanently delete this archived bookmark?";
pub const CLEAR_CONFIRM_MESSAGE: &str = "Clear entire archive?";
pub const EDIT_TAG_MESSAGE: &str = "Enter a tag (leave blank to remove it):";

/// Text currently typed into the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub url: String,
}

/// UI state that lives only for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub sort_mode: SortMode,
    pub filter_text: String,
    pub archive_visible: bool,
    pub form: AddForm,
}

impl ViewState {
    pub fn from_settings(settings: &ViewSettings) -> Self {
        Self {
            sort_mode: settings.default_sort,
            archive_visible: settings.show_archive,
            ..Self::default()
        }
    }
}

/// A discrete event coming from a rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { name: String, url: String },
    ToggleImportant { name: String, url: String },
    EditTag { name: String, url: String },
    Archive { name: String, url: String },
    Restore { name: String, url: String },
    Delete { name: String, url: String, tag: String },
    ClearArchive,
    ToggleArchiveVisibility,
    SetSortMode(SortMode),
    SetFilter(String),
}

/// Central application struct.
///
/// The bookmark manager is built on demand because it borrows the connection.
pub struct App {
    pub db: Database,
    pub settings_engine: SettingsEngine,
    pub state: ViewState,
}

impl App {
    /// Wraps an opened database; the initial view state comes from the loaded settings.
    pub fn new(db: Database, settings_engine: SettingsEngine) -> Self {
        let state = ViewState::from_settings(&settings_engine.get_settings().view);
        Self {
            db,
            settings_engine,
            state,
        }
    }

    /// Opens the database configured in already-loaded settings.
    pub fn open(settings_engine: SettingsEngine) -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = settings_engine.database_path();
        let db = Database::open(&db_path)?;
        tracing::info!(
            db = %db_path.display(),
            config = %settings_engine.get_config_path(),
            "shelfmark started"
        );
        Ok(Self::new(db, settings_engine))
    }

    pub fn bookmark_manager(&self) -> BookmarkManager<SqliteKeyValueStore<'_>> {
        BookmarkManager::new(SqliteKeyValueStore::new(self.db.connection()))
    }

    /// Re-projects both collections with the current state.
    pub fn view(&self) -> Result<View, BookmarkError> {
        let manager = self.bookmark_manager();
        let bookmarks = manager.list_bookmarks()?;
        let archive = manager.list_archive()?;
        Ok(view_projector::render_view(
            self.state.sort_mode,
            &self.state.filter_text,
            self.state.archive_visible,
            &bookmarks,
            &archive,
        ))
    }

    /// Handles one user event and returns the freshly rendered view.
    ///
    /// Mutations that match no record are silent no-ops. Validation failures are
    /// shown through `prompt` and returned; corrupt stored data aborts the action.
    pub fn dispatch(
        &mut self,
        action: Action,
        prompt: &mut dyn UserPrompt,
    ) -> Result<View, BookmarkError> {
        match self.apply(action, prompt) {
            Ok(()) => {}
            Err(BookmarkError::NotFound(what)) => {
                tracing::debug!(record = %what, "action matched no record");
            }
            Err(e) => return Err(e),
        }
        self.view()
    }

    fn apply(&mut self, action: Action, prompt: &mut dyn UserPrompt) -> Result<(), BookmarkError> {
        let mut manager = BookmarkManager::new(SqliteKeyValueStore::new(self.db.connection()));

        match action {
            Action::Add { name, url } => {
                self.state.form = AddForm {
                    name: name.clone(),
                    url: url.clone(),
                };
                match manager.add_bookmark(&name, &url) {
                    Ok(_) => {
                        self.state.form = AddForm::default();
                        Ok(())
                    }
                    Err(BookmarkError::Validation(msg)) => {
                        prompt.notify(&msg);
                        Err(BookmarkError::Validation(msg))
                    }
                    Err(e) => Err(e),
                }
            }
            Action::ToggleImportant { name, url } => {
                manager.toggle_important(&name, &url).map(|_| ())
            }
            Action::EditTag { name, url } => {
                let current = manager
                    .list_bookmarks()?
                    .into_iter()
                    .find(|b: &Bookmark| b.matches(&name, &url))
                    .map(|b| b.tag)
                    .ok_or_else(|| BookmarkError::NotFound(format!("{} <{}>", name, url)))?;
                match prompt.prompt_text(EDIT_TAG_MESSAGE, &current) {
                    Some(tag) => manager.set_tag(&name, &url, &tag),
                    None => Ok(()),
                }
            }
            Action::Archive { name, url } => manager.archive_bookmark(&name, &url).map(|_| ()),
            Action::Restore { name, url } => manager.restore_bookmark(&name, &url).map(|_| ()),
            Action::Delete { name, url, tag } => {
                if !prompt.confirm(DELETE_CONFIRM_MESSAGE) {
                    tracing::debug!(name = %name, "delete declined");
                    return Ok(());
                }
                manager.delete_archived(&name, &url, &tag).map(|_| ())
            }
            Action::ClearArchive => {
                if !prompt.confirm(CLEAR_CONFIRM_MESSAGE) {
                    tracing::debug!("clear archive declined");
                    return Ok(());
                }
                manager.clear_archive()
            }
            Action::ToggleArchiveVisibility => {
                self.state.archive_visible = !self.state.archive_visible;
                Ok(())
            }
            Action::SetSortMode(mode) => {
                self.state.sort_mode = mode;
                Ok(())
            }
            Action::SetFilter(text) => {
                self.state.filter_text = text;
                Ok(())
            }
        }
    }
}

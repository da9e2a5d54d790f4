use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::editor::domain::{
    entities::editor::Editor, repositories::editor_repository::EditorRepository,
};
use crate::shared::application::{Page, PageRequest};
use crate::shared::domain::value_objects::SearchMode;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct EditorService {
    editor_repo: Arc<dyn EditorRepository>,
}

impl EditorService {
    pub fn new(editor_repo: Arc<dyn EditorRepository>) -> Self {
        Self { editor_repo }
    }

    /// Get all editors by page of 50 results each, in name alphabetical
    /// order.
    pub async fn get_all_editors(&self, page_number: u32) -> AppResult<Page<Editor>> {
        let page = self
            .editor_repo
            .find_page(&PageRequest::new(page_number))
            .await?;

        if page.is_empty() {
            warn!("No editors found on the page number {}", page_number);
        }

        Ok(page)
    }

    /// Get all editors with a matching name.
    pub async fn get_editors_by_name(
        &self,
        name: &str,
        mode: SearchMode,
    ) -> AppResult<Vec<Editor>> {
        let editors = match mode {
            SearchMode::Strict => {
                debug!("Getting editors by name with strict search");
                self.editor_repo.find_by_name(name).await?
            }
            SearchMode::Default => self.editor_repo.find_by_name_containing(name).await?,
        };

        if editors.is_empty() {
            info!("No editors found with the name {}", name);
        }

        Ok(editors)
    }

    /// Get the editor with the matching id.
    pub async fn get_editor_by_id(&self, id: &Uuid) -> AppResult<Editor> {
        self.editor_repo.find_by_id(id).await?.ok_or_else(|| {
            let message = format!("Cannot find an editor with this id: {}", id);
            info!("{}", message);
            AppError::EntityNotFound(message)
        })
    }

    /// Pure existence check; a missing id is `Ok(false)`, never an error.
    pub async fn editor_exists_by_id(&self, id: &Uuid) -> AppResult<bool> {
        self.editor_repo.exists_by_id(id).await
    }

    /// Save a single validated editor.
    pub async fn create_editor(&self, editor: Editor) -> AppResult<Editor> {
        Validator::validate_company_name(&editor.name)?;

        debug!("Creating the editor named {}", editor.name);
        let created = self.editor_repo.save(&editor).await?;

        if created.id.is_none() {
            let message = format!("The editor named '{}' has not been created", created.name);
            warn!("{}", message);
            return Err(AppError::EntityPersistFailure(message));
        }

        Ok(created)
    }

    /// Save a list of editors in one batch call. Not atomic: the error
    /// names every editor that came back without an id, while the rest
    /// stay persisted.
    pub async fn create_editors(&self, editors: Vec<Editor>) -> AppResult<Vec<Editor>> {
        let saved = self.editor_repo.save_batch(&editors).await?;

        let failures: Vec<String> = saved
            .iter()
            .filter(|editor| editor.id.is_none())
            .map(|editor| format!("The editor named '{}' has not been created", editor.name))
            .collect();

        if !failures.is_empty() {
            let message = failures.join("; ");
            warn!("{}", message);
            return Err(AppError::EntityPersistFailure(message));
        }

        Ok(saved)
    }

    /// Delete the editor with the matching id; `false` when absent.
    pub async fn delete_editor(&self, id: &Uuid) -> AppResult<bool> {
        if !self.editor_repo.exists_by_id(id).await? {
            info!("No editor found with the id: {}", id);
            return Ok(false);
        }

        debug!("Deleting editor with the id: {}", id);
        self.editor_repo.delete(id).await?;

        Ok(true)
    }
}

use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::developer::domain::{
    entities::developer::Developer, repositories::developer_repository::DeveloperRepository,
};
use crate::shared::application::{Page, PageRequest};
use crate::shared::domain::value_objects::SearchMode;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct DeveloperService {
    developer_repo: Arc<dyn DeveloperRepository>,
}

impl DeveloperService {
    pub fn new(developer_repo: Arc<dyn DeveloperRepository>) -> Self {
        Self { developer_repo }
    }

    /// Get all developers by page of 50 results each, in name
    /// alphabetical order.
    pub async fn get_all_developers(&self, page_number: u32) -> AppResult<Page<Developer>> {
        let page = self
            .developer_repo
            .find_page(&PageRequest::new(page_number))
            .await?;

        if page.is_empty() {
            warn!("No developers found on the page number {}", page_number);
        }

        Ok(page)
    }

    /// Get all developers with a matching name.
    pub async fn get_developers_by_name(
        &self,
        name: &str,
        mode: SearchMode,
    ) -> AppResult<Vec<Developer>> {
        let developers = match mode {
            SearchMode::Strict => {
                debug!("Getting developers by name with strict search");
                self.developer_repo.find_by_name(name).await?
            }
            SearchMode::Default => self.developer_repo.find_by_name_containing(name).await?,
        };

        if developers.is_empty() {
            info!("No developers found with the name {}", name);
        }

        Ok(developers)
    }

    /// Get the developer with the matching id.
    pub async fn get_developer_by_id(&self, id: &Uuid) -> AppResult<Developer> {
        self.developer_repo.find_by_id(id).await?.ok_or_else(|| {
            let message = format!("Cannot find a developer with this id: {}", id);
            info!("{}", message);
            AppError::EntityNotFound(message)
        })
    }

    /// Pure existence check; a missing id is `Ok(false)`, never an error.
    pub async fn developer_exists_by_id(&self, id: &Uuid) -> AppResult<bool> {
        self.developer_repo.exists_by_id(id).await
    }

    /// Save a single validated developer.
    pub async fn create_developer(&self, developer: Developer) -> AppResult<Developer> {
        Validator::validate_company_name(&developer.name)?;

        debug!("Creating the developer named {}", developer.name);
        let created = self.developer_repo.save(&developer).await?;

        if created.id.is_none() {
            let message = format!(
                "The developer named '{}' has not been created",
                created.name
            );
            warn!("{}", message);
            return Err(AppError::EntityPersistFailure(message));
        }

        Ok(created)
    }

    /// Save a list of developers in one batch call. Not atomic: the
    /// error names every developer that came back without an id, while
    /// the rest stay persisted.
    pub async fn create_developers(
        &self,
        developers: Vec<Developer>,
    ) -> AppResult<Vec<Developer>> {
        let saved = self.developer_repo.save_batch(&developers).await?;

        let failures: Vec<String> = saved
            .iter()
            .filter(|developer| developer.id.is_none())
            .map(|developer| {
                format!(
                    "The developer named '{}' has not been created",
                    developer.name
                )
            })
            .collect();

        if !failures.is_empty() {
            let message = failures.join("; ");
            warn!("{}", message);
            return Err(AppError::EntityPersistFailure(message));
        }

        Ok(saved)
    }

    /// Delete the developer with the matching id; `false` when absent.
    pub async fn delete_developer(&self, id: &Uuid) -> AppResult<bool> {
        if !self.developer_repo.exists_by_id(id).await? {
            info!("No developer found with the id: {}", id);
            return Ok(false);
        }

        debug!("Deleting developer with the id: {}", id);
        self.developer_repo.delete(id).await?;

        Ok(true)
    }
}

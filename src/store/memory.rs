// ==========================================
// 项目工时估算 - 内存实现
// ==========================================
// InMemoryLineStore: 进程内行存储（按插入顺序保存）
// StaticVocabularyProvider: 来自配置的固定词表
// ==========================================

use crate::config::EstimatorConfig;
use crate::domain::estimation::{Estimation, EstimationTotals};
use crate::domain::line::EstimationLine;
use crate::domain::model::{DevelopmentType, EstimationModel, ModelLine};
use crate::store::error::{StoreError, StoreResult};
use crate::store::traits::{LineStore, VocabularyProvider};
use crate::vocabulary::{CategoryLabels, OptionSetEntry};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct StoreState {
    estimations: HashMap<String, Estimation>,
    lines: Vec<EstimationLine>,
    models: Vec<EstimationModel>,
    model_lines: Vec<ModelLine>,
    development_types: HashMap<String, DevelopmentType>,
}

// ==========================================
// InMemoryLineStore
// ==========================================
#[derive(Debug, Default)]
pub struct InMemoryLineStore {
    state: RwLock<StoreState>,
}

impl InMemoryLineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入估算头（estimation_id 必填）
    pub async fn insert_estimation(&self, estimation: Estimation) -> StoreResult<()> {
        let id = estimation
            .estimation_id
            .clone()
            .ok_or_else(|| StoreError::Unavailable("估算头缺少 estimation_id".to_string()))?;
        let mut state = self.state.write().await;
        if state.estimations.contains_key(&id) {
            return Err(StoreError::AlreadyExists {
                entity: "Estimation".to_string(),
                id,
            });
        }
        state.estimations.insert(id, estimation);
        Ok(())
    }

    /// 直接写入一行（保留其 ID,用于预置数据）
    pub async fn seed_line(&self, line: EstimationLine) {
        self.state.write().await.lines.push(line);
    }

    pub async fn insert_model(&self, model: EstimationModel) {
        self.state.write().await.models.push(model);
    }

    pub async fn insert_model_line(&self, line: ModelLine) {
        self.state.write().await.model_lines.push(line);
    }

    pub async fn insert_development_type(&self, development_type: DevelopmentType) {
        self.state
            .write()
            .await
            .development_types
            .insert(development_type.development_type_id.clone(), development_type);
    }
}

#[async_trait]
impl LineStore for InMemoryLineStore {
    async fn retrieve_estimation(&self, estimation_id: &str) -> StoreResult<Estimation> {
        self.state
            .read()
            .await
            .estimations
            .get(estimation_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Estimation", estimation_id))
    }

    async fn update_estimation_totals(
        &self,
        estimation_id: &str,
        totals: EstimationTotals,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let estimation = state
            .estimations
            .get_mut(estimation_id)
            .ok_or_else(|| StoreError::not_found("Estimation", estimation_id))?;
        estimation.apply_totals(totals);
        Ok(())
    }

    async fn list_lines(&self, estimation_id: &str) -> StoreResult<Vec<EstimationLine>> {
        let state = self.state.read().await;
        if !state.estimations.contains_key(estimation_id) {
            return Err(StoreError::not_found("Estimation", estimation_id));
        }
        Ok(state
            .lines
            .iter()
            .filter(|line| line.estimation_id.as_deref() == Some(estimation_id))
            .cloned()
            .collect())
    }

    async fn create_line(&self, line: &EstimationLine) -> StoreResult<String> {
        let mut state = self.state.write().await;

        let estimation_id = line.estimation_id.as_deref().unwrap_or_default();
        if !state.estimations.contains_key(estimation_id) {
            return Err(StoreError::not_found("Estimation", estimation_id));
        }

        let id = Uuid::new_v4().to_string();
        let mut stored = line.clone();
        stored.line_id = id.clone();
        state.lines.push(stored);

        tracing::debug!(line_id = %id, estimation_id = %estimation_id, "新建估算行");
        Ok(id)
    }

    async fn update_line(&self, line: &EstimationLine) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let slot = state
            .lines
            .iter_mut()
            .find(|stored| stored.line_id == line.line_id)
            .ok_or_else(|| StoreError::not_found("EstimationLine", &line.line_id))?;
        *slot = line.clone();
        Ok(())
    }

    async fn delete_line(&self, line_id: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let before = state.lines.len();
        state.lines.retain(|line| line.line_id != line_id);
        if state.lines.len() == before {
            return Err(StoreError::not_found("EstimationLine", line_id));
        }
        Ok(())
    }

    async fn list_models(&self) -> StoreResult<Vec<EstimationModel>> {
        Ok(self.state.read().await.models.clone())
    }

    async fn list_model_lines(&self, model_id: &str) -> StoreResult<Vec<ModelLine>> {
        Ok(self
            .state
            .read()
            .await
            .model_lines
            .iter()
            .filter(|line| line.model_id.as_deref() == Some(model_id))
            .cloned()
            .collect())
    }

    async fn retrieve_development_type(
        &self,
        development_type_id: &str,
    ) -> StoreResult<DevelopmentType> {
        self.state
            .read()
            .await
            .development_types
            .get(development_type_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("DevelopmentType", development_type_id))
    }
}

// ==========================================
// StaticVocabularyProvider
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct StaticVocabularyProvider {
    labels: CategoryLabels,
    option_set: Vec<OptionSetEntry>,
}

impl StaticVocabularyProvider {
    pub fn new(labels: CategoryLabels, option_set: Vec<OptionSetEntry>) -> Self {
        Self { labels, option_set }
    }

    pub fn from_config(config: &EstimatorConfig) -> Self {
        Self::new(config.resolved_labels(), config.activity_option_set.clone())
    }
}

#[async_trait]
impl VocabularyProvider for StaticVocabularyProvider {
    async fn category_labels(&self) -> StoreResult<CategoryLabels> {
        Ok(self.labels.clone())
    }

    async fn activity_option_set(&self) -> StoreResult<Vec<OptionSetEntry>> {
        Ok(self.option_set.clone())
    }
}

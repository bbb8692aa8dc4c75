// ==========================================
// 项目工时估算 - 估算工作表
// ==========================================
// 职责: 调用方持有的工作集（估算头 + 有序行快照）
// 流程: 每次变更 → 构造下一快照 → RecalcEngine 全量重算 → 整体替换 → 汇总写回估算头
// 红线: 流程行与支持行不可删除
// 红线: 工作表只在 load/save 时接触存储
// ==========================================

use crate::domain::estimation::{Estimation, EstimationTotals};
use crate::domain::line::{EstimationLine, LineActivity};
use crate::domain::model::{DevelopmentType, ModelLine};
use crate::domain::types::ActivityCategory;
use crate::engine::RecalcEngine;
use crate::store::{LineStore, VocabularyProvider};
use crate::vocabulary::{CategoryVocabulary, LabelledLine};
use crate::worksheet::error::{WorksheetError, WorksheetResult};
use crate::worksheet::patch::LinePatch;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

// ==========================================
// SavePlan / SaveReport
// ==========================================
/// 保存计划: 新建行（new- 前缀）与更新行,按工作表顺序
#[derive(Debug, Clone, PartialEq)]
pub struct SavePlan {
    pub creates: Vec<EstimationLine>,
    pub updates: Vec<EstimationLine>,
    pub deletes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SaveReport {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
}

// ==========================================
// EstimationWorksheet
// ==========================================
#[derive(Debug, Clone)]
pub struct EstimationWorksheet {
    estimation: Estimation,
    lines: Vec<EstimationLine>,
    vocabulary: CategoryVocabulary,
    engine: RecalcEngine,
    pending_deletes: Vec<String>,
    dirty: bool,
}

impl EstimationWorksheet {
    /// 空工作表
    pub fn new(estimation: Estimation, vocabulary: CategoryVocabulary) -> Self {
        Self::with_lines(estimation, vocabulary, Vec::new())
    }

    /// 以已有快照创建,并立即重算一次得到权威汇总
    pub fn with_lines(
        estimation: Estimation,
        vocabulary: CategoryVocabulary,
        lines: Vec<EstimationLine>,
    ) -> Self {
        let mut worksheet = Self {
            estimation,
            lines,
            vocabulary,
            engine: RecalcEngine::new(),
            pending_deletes: Vec::new(),
            dirty: false,
        };
        worksheet.recalculate();
        worksheet
    }

    /// 从存储加载
    #[instrument(skip(store, provider))]
    pub async fn load(
        store: &dyn LineStore,
        provider: &dyn VocabularyProvider,
        estimation_id: &str,
    ) -> WorksheetResult<Self> {
        validate_estimation_id(estimation_id)?;

        let labels = provider.category_labels().await?;
        let option_set = provider.activity_option_set().await?;
        let vocabulary = CategoryVocabulary::with_option_set(labels, option_set)?;

        let estimation = store.retrieve_estimation(estimation_id).await?;
        let lines = store.list_lines(estimation_id).await?;

        tracing::info!(line_count = lines.len(), "工作表已加载");
        Ok(Self::with_lines(estimation, vocabulary, lines))
    }

    // ==========================================
    // 读取
    // ==========================================

    pub fn estimation(&self) -> &Estimation {
        &self.estimation
    }

    pub fn lines(&self) -> &[EstimationLine] {
        &self.lines
    }

    pub fn totals(&self) -> EstimationTotals {
        self.estimation.totals
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn line(&self, line_id: &str) -> Option<&EstimationLine> {
        self.lines.iter().find(|line| line.line_id == line_id)
    }

    /// 以外部标签导出当前快照
    pub fn labelled_lines(&self) -> Vec<LabelledLine> {
        self.lines
            .iter()
            .map(|line| self.vocabulary.to_labelled(line))
            .collect()
    }

    // ==========================================
    // 变更（每次变更后全量重算）
    // ==========================================

    /// 修改估算头（汇总字段由重算维护,编辑后恢复）
    pub fn edit_header<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut Estimation),
    {
        let totals = self.estimation.totals;
        edit(&mut self.estimation);
        self.estimation.totals = totals;
        self.dirty = true;
    }

    /// 新增一行 Development（sizing = 0）
    pub fn add_line(&mut self) -> String {
        let line = EstimationLine::draft(
            self.estimation.estimation_id.clone(),
            LineActivity::Development { sizing: 0.0 },
        );
        let line_id = line.line_id.clone();
        self.lines.push(line);
        self.commit();
        line_id
    }

    /// 编辑一行
    pub fn update_line(&mut self, line_id: &str, patch: &LinePatch) -> WorksheetResult<()> {
        let index = self.index_of(line_id)?;
        let updated = patch.apply(&self.lines[index])?;
        self.lines[index] = updated;
        self.commit();
        Ok(())
    }

    /// 选择开发类型: 写入类型并复制默认描述
    pub fn change_development_type(
        &mut self,
        line_id: &str,
        development_type: &DevelopmentType,
    ) -> WorksheetResult<()> {
        let index = self.index_of(line_id)?;
        let payload = &mut self.lines[index].payload;
        payload.development_type_id = Some(development_type.development_type_id.clone());
        payload.development_type_name = Some(development_type.name.clone());
        payload.description = Some(
            development_type
                .default_description
                .clone()
                .unwrap_or_default(),
        );
        self.commit();
        Ok(())
    }

    /// 按 ID 从存储读取开发类型后应用到行
    pub async fn change_development_type_from_store(
        &mut self,
        store: &dyn LineStore,
        line_id: &str,
        development_type_id: &str,
    ) -> WorksheetResult<()> {
        self.index_of(line_id)?;
        let development_type = store.retrieve_development_type(development_type_id).await?;
        self.change_development_type(line_id, &development_type)
    }

    /// 删除一行
    ///
    /// Process / Support 行受保护。已持久化的行在 save 时从存储删除。
    pub fn delete_line(&mut self, line_id: &str) -> WorksheetResult<EstimationLine> {
        let index = self.index_of(line_id)?;
        if let Some(category @ (ActivityCategory::Process | ActivityCategory::Support)) =
            self.lines[index].category()
        {
            return Err(WorksheetError::ProtectedLine {
                line_id: line_id.to_string(),
                category,
            });
        }

        let removed = self.lines.remove(index);
        if removed.is_persisted() {
            self.pending_deletes.push(removed.line_id.clone());
        }
        self.commit();
        Ok(removed)
    }

    /// 导入模板行（按模板顺序追加在末尾）
    pub fn import_models(&mut self, model_lines: &[ModelLine]) -> usize {
        let estimation_id = self.estimation.estimation_id.clone();
        let imported: Vec<EstimationLine> = model_lines
            .iter()
            .map(|model_line| {
                let record = LabelledLine {
                    line_id: crate::domain::line::new_line_id(),
                    estimation_id: estimation_id.clone(),
                    activity_label: model_line.activity_label.clone(),
                    activity_code: model_line.activity_code,
                    sizing: model_line.sizing,
                    development_share: model_line.development_share,
                    final_estimate: Some(0),
                    payload: model_line.payload.clone(),
                };
                self.vocabulary.to_line(&record)
            })
            .collect();

        let count = imported.len();
        self.lines.extend(imported);
        self.commit();

        tracing::info!(count, "模板行已导入");
        count
    }

    /// 从存储读取多个模板并导入
    pub async fn import_models_from_store(
        &mut self,
        store: &dyn LineStore,
        model_ids: &[String],
    ) -> WorksheetResult<usize> {
        let mut model_lines = Vec::new();
        for model_id in model_ids {
            model_lines.extend(store.list_model_lines(model_id).await?);
        }
        Ok(self.import_models(&model_lines))
    }

    // ==========================================
    // 保存
    // ==========================================

    pub fn save_plan(&self) -> SavePlan {
        let (updates, creates): (Vec<_>, Vec<_>) =
            self.lines.iter().cloned().partition(|line| line.is_persisted());
        SavePlan {
            creates,
            updates,
            deletes: self.pending_deletes.clone(),
        }
    }

    /// 写回存储: 新建 / 更新 / 删除行,再写回汇总
    #[instrument(skip(self, store), fields(estimation_id = ?self.estimation.estimation_id))]
    pub async fn save(&mut self, store: &dyn LineStore) -> WorksheetResult<SaveReport> {
        let estimation_id = self
            .estimation
            .estimation_id
            .clone()
            .ok_or(WorksheetError::MissingEstimationId)?;
        validate_estimation_id(&estimation_id)?;

        let mut report = SaveReport::default();

        for line in self.lines.iter_mut() {
            line.estimation_id = Some(estimation_id.clone());
            if line.is_persisted() {
                store.update_line(line).await?;
                report.updated += 1;
            } else {
                let persisted_id = store.create_line(line).await?;
                line.line_id = persisted_id;
                report.created += 1;
            }
        }

        // 删除成功后才出队,失败时剩余 ID 保留到下次 save
        while let Some(line_id) = self.pending_deletes.first().cloned() {
            store.delete_line(&line_id).await?;
            self.pending_deletes.remove(0);
            report.deleted += 1;
        }

        store
            .update_estimation_totals(&estimation_id, self.estimation.totals)
            .await?;

        self.dirty = false;
        tracing::info!(
            created = report.created,
            updated = report.updated,
            deleted = report.deleted,
            "工作表已保存"
        );
        Ok(report)
    }

    // ==========================================
    // 内部
    // ==========================================

    fn index_of(&self, line_id: &str) -> WorksheetResult<usize> {
        self.lines
            .iter()
            .position(|line| line.line_id == line_id)
            .ok_or_else(|| WorksheetError::LineNotFound(line_id.to_string()))
    }

    fn commit(&mut self) {
        self.recalculate();
        self.dirty = true;
    }

    fn recalculate(&mut self) {
        let result = self.engine.recalculate(&self.lines);
        self.lines = result.lines;
        self.estimation.apply_totals(result.totals);
    }
}

/// 估算 ID 必须是 GUID 格式
fn validate_estimation_id(estimation_id: &str) -> WorksheetResult<()> {
    Uuid::parse_str(estimation_id)
        .map(|_| ())
        .map_err(|_| WorksheetError::InvalidEstimationId(estimation_id.to_string()))
}

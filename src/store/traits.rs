// ==========================================
// 项目工时估算 - 协作方接口
// ==========================================
// 职责: 定义外部行存储与类别词表提供方的读取/写入接口（不包含实现）
// 红线: 引擎不依赖这些接口,只有 worksheet 通过它们加载/保存快照
// ==========================================

use crate::domain::estimation::{Estimation, EstimationTotals};
use crate::domain::line::EstimationLine;
use crate::domain::model::{DevelopmentType, EstimationModel, ModelLine};
use crate::store::error::StoreResult;
use crate::vocabulary::{CategoryLabels, OptionSetEntry};
use async_trait::async_trait;

// ==========================================
// LineStore Trait
// ==========================================
// 实现者: InMemoryLineStore; 远端数据存储由调用方接入
#[async_trait]
pub trait LineStore: Send + Sync {
    /// 读取估算头
    async fn retrieve_estimation(&self, estimation_id: &str) -> StoreResult<Estimation>;

    /// 写回估算头上的三项汇总
    async fn update_estimation_totals(
        &self,
        estimation_id: &str,
        totals: EstimationTotals,
    ) -> StoreResult<()>;

    /// 列出某估算的全部行
    ///
    /// # 约定
    /// - 按插入顺序返回
    async fn list_lines(&self, estimation_id: &str) -> StoreResult<Vec<EstimationLine>>;

    /// 新建行
    ///
    /// # 返回
    /// - 存储分配的持久化 ID
    async fn create_line(&self, line: &EstimationLine) -> StoreResult<String>;

    /// 更新已持久化的行
    async fn update_line(&self, line: &EstimationLine) -> StoreResult<()>;

    /// 删除行
    async fn delete_line(&self, line_id: &str) -> StoreResult<()>;

    /// 列出可导入的估算模板
    async fn list_models(&self) -> StoreResult<Vec<EstimationModel>>;

    /// 列出某估算模板的模板行（按模板顺序）
    async fn list_model_lines(&self, model_id: &str) -> StoreResult<Vec<ModelLine>>;

    /// 读取开发类型
    async fn retrieve_development_type(
        &self,
        development_type_id: &str,
    ) -> StoreResult<DevelopmentType>;
}

// ==========================================
// VocabularyProvider Trait
// ==========================================
// 实现者: StaticVocabularyProvider（来自配置）
#[async_trait]
pub trait VocabularyProvider: Send + Sync {
    /// 本次会话的三类标签
    async fn category_labels(&self) -> StoreResult<CategoryLabels>;

    /// 活动类别选项集
    async fn activity_option_set(&self) -> StoreResult<Vec<OptionSetEntry>>;
}

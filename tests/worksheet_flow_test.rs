// ==========================================
// 估算工作表 端到端测试
// ==========================================
// 流程: 加载 → 编辑 / 导入模板 / 删除 → 保存 → 重新加载
// 存储: InMemoryLineStore
// ==========================================

mod helpers;

use effort_estimator::domain::{ActivityCategory, DevelopmentType, EstimationModel, ModelLine};
use effort_estimator::store::{InMemoryLineStore, LineStore, StaticVocabularyProvider};
use effort_estimator::vocabulary::{CategoryLabels, OptionSetEntry};
use effort_estimator::worksheet::{EstimationWorksheet, LinePatch, WorksheetError};
use helpers::{model_line, seeded_store, stored_id, LineBuilder, EST_ID};

fn pt_provider() -> StaticVocabularyProvider {
    StaticVocabularyProvider::new(
        CategoryLabels::new("Desenvolvimento", "Processo", "Apoio"),
        vec![
            OptionSetEntry { value: 1, label: "Desenvolvimento".to_string() },
            OptionSetEntry { value: 2, label: "Processo".to_string() },
            OptionSetEntry { value: 3, label: "Apoio".to_string() },
        ],
    )
}

async fn standard_store() -> InMemoryLineStore {
    seeded_store(vec![
        LineBuilder::development(&stored_id(1), 30.0).estimation(EST_ID).build(),
        LineBuilder::process(&stored_id(2), 8.0).estimation(EST_ID).build(),
        LineBuilder::support(&stored_id(3), 10.0).estimation(EST_ID).build(),
    ])
    .await
}

#[tokio::test]
async fn test_load_recalculates_stale_values() {
    effort_estimator::logging::init_test();
    let store = standard_store().await;

    let ws = EstimationWorksheet::load(&store, &pt_provider(), EST_ID)
        .await
        .unwrap();

    assert_eq!(ws.lines().len(), 3);
    assert_eq!(ws.totals().total_development_sizing, 30.0);
    assert_eq!(ws.totals().total_support_sizing, 3.0);
    assert_eq!(ws.lines()[0].final_estimate(), 33);
    assert_eq!(ws.lines()[1].final_estimate(), 8);
    assert!(!ws.is_dirty());

    let labelled = ws.labelled_lines();
    assert_eq!(labelled[2].activity_label.as_deref(), Some("Apoio"));
    assert_eq!(ws.vocabulary().code_of(ActivityCategory::Support), Some(3));
}

#[tokio::test]
async fn test_full_edit_cycle_persists_totals() {
    let store = standard_store().await;
    store
        .insert_model_line(model_line("M1", "Desenvolvimento", Some(20.0), None))
        .await;
    store
        .insert_model_line(model_line("M1", "Apoio", None, Some(5.0)))
        .await;
    store
        .insert_model_line(model_line("M2", "Processo", Some(2.0), None))
        .await;

    let mut ws = EstimationWorksheet::load(&store, &pt_provider(), EST_ID)
        .await
        .unwrap();

    // 导入模板 M1
    let imported = ws
        .import_models_from_store(&store, &["M1".to_string()])
        .await
        .unwrap();
    assert_eq!(imported, 2);
    // 开发 50 → 支持 10% = 5, 5% = 3 (2.5 向上取整)
    assert_eq!(ws.totals().total_development_sizing, 50.0);
    assert_eq!(ws.totals().total_support_sizing, 8.0);

    // 新增一行并录入
    let new_id = ws.add_line();
    ws.update_line(&new_id, &LinePatch::sizing(50.0)).unwrap();
    assert_eq!(ws.totals().total_support_sizing, 15.0);

    // 选择开发类型
    let dev_type = DevelopmentType {
        development_type_id: "DT-9".to_string(),
        name: "Integration".to_string(),
        default_description: Some("REST integration".to_string()),
    };
    ws.change_development_type(&new_id, &dev_type).unwrap();

    // 删除已持久化的开发行
    ws.delete_line(&stored_id(1)).unwrap();
    assert_eq!(ws.totals().total_development_sizing, 70.0);

    let plan = ws.save_plan();
    assert_eq!(plan.creates.len(), 3);
    assert_eq!(plan.updates.len(), 2);
    assert_eq!(plan.deletes, vec![stored_id(1)]);

    let report = ws.save(&store).await.unwrap();
    assert_eq!((report.created, report.updated, report.deleted), (3, 2, 1));

    // 重新加载后与保存前一致
    let reloaded = EstimationWorksheet::load(&store, &pt_provider(), EST_ID)
        .await
        .unwrap();
    assert_eq!(reloaded.totals(), ws.totals());
    assert_eq!(reloaded.lines().len(), 5);
    let ids: Vec<_> = reloaded.lines().iter().map(|l| l.line_id.clone()).collect();
    let saved: Vec<_> = ws.lines().iter().map(|l| l.line_id.clone()).collect();
    assert_eq!(ids, saved);

    let header = store.retrieve_estimation(EST_ID).await.unwrap();
    assert_eq!(header.totals, ws.totals());
    assert_eq!(
        header.totals.total_project_hours,
        header.totals.total_development_sizing + header.totals.total_support_sizing
    );

    let saved_line = reloaded.line(&ws.lines()[4].line_id).unwrap();
    assert_eq!(saved_line.payload.description.as_deref(), Some("REST integration"));
}

#[tokio::test]
async fn test_protected_lines_survive_delete_attempts() {
    let store = standard_store().await;
    let mut ws = EstimationWorksheet::load(&store, &pt_provider(), EST_ID)
        .await
        .unwrap();

    for id in [stored_id(2), stored_id(3)] {
        let err = ws.delete_line(&id).unwrap_err();
        assert!(matches!(err, WorksheetError::ProtectedLine { .. }));
    }
    assert_eq!(ws.lines().len(), 3);
    assert!(ws.save_plan().deletes.is_empty());
}

#[tokio::test]
async fn test_load_unknown_estimation_fails() {
    let store = InMemoryLineStore::new();
    let result =
        EstimationWorksheet::load(&store, &pt_provider(), "9d3b8b9e-0000-4000-8000-000000000000").await;
    assert!(matches!(result, Err(WorksheetError::Store(_))));
}

#[tokio::test]
async fn test_category_change_unlocks_delete() {
    let store = standard_store().await;
    let mut ws = EstimationWorksheet::load(&store, &pt_provider(), EST_ID)
        .await
        .unwrap();

    // 流程行改为开发行: 开发总量 38 → 支持 ceil(3.8) = 4
    ws.update_line(&stored_id(2), &LinePatch::category(ActivityCategory::Development))
        .unwrap();

    assert_eq!(ws.totals().total_development_sizing, 38.0);
    assert_eq!(ws.totals().total_support_sizing, 4.0);
    // 开发行改类别后可以删除
    ws.delete_line(&stored_id(2)).unwrap();
    assert_eq!(ws.totals().total_development_sizing, 30.0);
}

#[tokio::test]
async fn test_models_and_development_type_from_store() {
    let store = standard_store().await;
    store
        .insert_model(EstimationModel {
            model_id: "M7".to_string(),
            name: "Portal".to_string(),
        })
        .await;
    // 标签已过期,按选项集编码识别为 Apoio
    store
        .insert_model_line(ModelLine {
            activity_code: Some(3),
            ..model_line("M7", "Suporte", None, Some(20.0))
        })
        .await;
    store
        .insert_development_type(DevelopmentType {
            development_type_id: "DT-1".to_string(),
            name: "Workflow".to_string(),
            default_description: None,
        })
        .await;

    let mut ws = EstimationWorksheet::load(&store, &pt_provider(), EST_ID)
        .await
        .unwrap();

    let model_ids: Vec<String> = store
        .list_models()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.model_id)
        .collect();
    assert_eq!(ws.import_models_from_store(&store, &model_ids).await.unwrap(), 1);

    let imported = &ws.lines()[3];
    assert_eq!(imported.category(), Some(ActivityCategory::Support));
    // 30 × 20% = 6
    assert_eq!(imported.sizing(), 6.0);
    assert_eq!(ws.totals().total_support_sizing, 9.0);

    ws.change_development_type_from_store(&store, &stored_id(1), "DT-1")
        .await
        .unwrap();
    let payload = &ws.lines()[0].payload;
    assert_eq!(payload.development_type_name.as_deref(), Some("Workflow"));
    assert_eq!(payload.description.as_deref(), Some(""));
}

// ==========================================
// 项目工时估算 - 命令行入口
// ==========================================
// 用法:
//   effort-estimator <lines.csv|lines.xlsx> [--locale <en|pt-BR|zh-CN>] [--config <path>] [--log-json]
//
// 读取估算行文件 → 按配置的类别标签转换 → 全量重算 → stdout 输出 JSON
// ==========================================

use anyhow::{bail, Context};
use effort_estimator::config::{ConfigLoader, EstimatorConfig};
use effort_estimator::importer::TemplateImporter;
use effort_estimator::{i18n, logging, Estimation, EstimationWorksheet};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    locale: Option<String>,
    config: Option<PathBuf>,
    log_json: bool,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--locale" => {
                parsed.locale = Some(args.next().context("--locale 缺少参数")?);
            }
            "--config" => {
                parsed.config = Some(PathBuf::from(args.next().context("--config 缺少参数")?));
            }
            "--log-json" => parsed.log_json = true,
            other if other.starts_with("--") => bail!("未知参数: {}", other),
            other => {
                if parsed.input.is_some() {
                    bail!("只能指定一个输入文件");
                }
                parsed.input = Some(PathBuf::from(other));
            }
        }
    }

    Ok(parsed)
}

#[derive(Serialize)]
struct CliOutput<'a> {
    locale: &'a str,
    lines: Vec<effort_estimator::LabelledLine>,
    totals: effort_estimator::EstimationTotals,
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;

    if args.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    let input = args.input.context(
        "用法: effort-estimator <lines.csv|lines.xlsx> [--locale <code>] [--config <path>] [--log-json]",
    )?;

    let mut config: EstimatorConfig = match &args.config {
        Some(path) => ConfigLoader::load_from(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    i18n::set_locale(&config.locale);

    tracing::info!(
        version = effort_estimator::VERSION,
        locale = %config.locale,
        "{}",
        effort_estimator::APP_NAME
    );

    let vocabulary = config.vocabulary().context("类别词表配置无效")?;
    let model_lines = TemplateImporter::default()
        .import_file(&input)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let estimation = Estimation::with_id(uuid::Uuid::new_v4().to_string());
    let mut worksheet = EstimationWorksheet::new(estimation, vocabulary);
    worksheet.import_models(&model_lines);

    let output = CliOutput {
        locale: &config.locale,
        lines: worksheet.labelled_lines(),
        totals: worksheet.totals(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

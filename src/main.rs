// ==========================================
// Camvio 库存导入 - 命令行入口
// ==========================================
// 用法:
//   camvio-import <session.json> [catalog.json] [config.json]
//
// 会话中没有设备选择时，只打印识别结果和建议选择（JSON），不写文件
// 退出码: 仅输入级错误非 0；行级失败写入失败日志
// ==========================================

use anyhow::{bail, Context, Result};
use camvio_inventory_import::api::{ConversionApi, ConversionSession};
use camvio_inventory_import::catalog::DeviceCatalog;
use camvio_inventory_import::config::{ConfigManager, ConversionConfigReader};
use camvio_inventory_import::i18n::{self, t_with_args};
use camvio_inventory_import::{logging, APP_NAME, VERSION};
use std::path::PathBuf;
use std::sync::Arc;

const CATALOG_FILE: &str = "catalog.json";

fn main() -> Result<()> {
    logging::init();
    tracing::info!("{} {}", APP_NAME, VERSION);

    let mut args = std::env::args().skip(1);
    let Some(session_path) = args.next() else {
        bail!("usage: camvio-import <session.json> [catalog.json] [config.json]");
    };
    let catalog_path = args.next().map(PathBuf::from);
    let config_path = args.next().map(PathBuf::from);

    // 配置
    let config = match config_path {
        Some(path) => ConfigManager::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ConfigManager::load_default().context("failed to load default config")?,
    };
    i18n::set_locale(&config.get_locale()?);

    // 设备目录
    let catalog = load_catalog(catalog_path)?;

    // 会话
    let session = ConversionSession::load(&session_path)
        .with_context(|| format!("failed to load session {}", session_path))?;

    let api = ConversionApi::new(Arc::new(config), Arc::new(catalog));

    if session.selections.is_empty() {
        let preview = api
            .preview(&session.input_path, session.header_row)
            .with_context(|| format!("failed to read {}", session.input_path.display()))?;

        let header_row = preview.header_row.to_string();
        println!(
            "{}",
            t_with_args("summary.detected_devices", &[("row", header_row.as_str())])
        );
        for m in &preview.device_matches {
            let count = m.match_count.to_string();
            println!(
                "{}",
                t_with_args(
                    "summary.device_line",
                    &[
                        ("device", m.device_name.as_str()),
                        ("profile", m.profile_type.code()),
                        ("count", count.as_str()),
                    ],
                )
            );
        }

        let suggestions = api.suggest_selections(&preview)?;
        println!("{}", i18n::t("summary.no_selections"));
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    let report = api
        .run(&session)
        .with_context(|| format!("conversion failed for {}", session.input_path.display()))?;

    for advisory in &report.advisories {
        eprintln!("! {}", advisory.message());
    }

    let output_dir = session.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let paths = report.write_outputs(&output_dir)?;

    println!("{}", report.summary());
    let export_path = paths.export.display().to_string();
    println!(
        "{}",
        t_with_args("summary.export_written", &[("path", export_path.as_str())])
    );
    if let Some(failures) = &paths.failures {
        let failures_path = failures.display().to_string();
        println!(
            "{}",
            t_with_args("summary.failures_written", &[("path", failures_path.as_str())])
        );
    }

    Ok(())
}

/// 加载设备目录；未指定且默认位置不存在时使用空目录
fn load_catalog(path: Option<PathBuf>) -> Result<DeviceCatalog> {
    let path = match path {
        Some(path) => path,
        None => match camvio_inventory_import::config::default_config_path()
            .and_then(|p| p.parent().map(|dir| dir.join(CATALOG_FILE)))
            .filter(|p| p.exists())
        {
            Some(path) => path,
            None => {
                tracing::warn!("未指定设备目录，所有设备将按目录未命中处理");
                return Ok(DeviceCatalog::default());
            }
        },
    };

    DeviceCatalog::load(&path).with_context(|| format!("failed to load catalog {}", path.display()))
}

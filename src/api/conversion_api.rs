// ==========================================
// Camvio 库存导入 - 转换API
// ==========================================
// 职责: 串联一次完整转换（解析 → 表头 → 列语义 → 匹配 → 检查 → 构建 → 导出）
// 红线: 只有输入级错误中止；行级问题进入 failures，提示进入 advisories
// ==========================================

use crate::api::error::ApiResult;
use crate::catalog::DeviceCatalog;
use crate::config::ConversionConfigReader;
use crate::domain::device::{Advisory, DeviceMatch, DeviceSelection, ExportFailure, OutputRecord};
use crate::domain::table::{ColumnRoles, RawTable, ResolvedTable};
use crate::engine::{DeviceMatcher, RecordBuilder, SelectionChecker};
use crate::export::{export_file_name, failures_file_name, write_csv_file, ExportWriter};
use crate::i18n::t_with_args;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::{ColumnResolver, HeaderLocator, UniversalFileParser};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, Span};
use uuid::Uuid;

// ==========================================
// ConversionSession - 一次转换的完整请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSession {
    pub input_path: PathBuf,
    /// 表头行号（0 起）；缺省时自动定位
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub selections: Vec<DeviceSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl ConversionSession {
    pub fn new<P: Into<PathBuf>>(input_path: P) -> Self {
        Self {
            input_path: input_path.into(),
            header_row: None,
            company_name: None,
            selections: Vec::new(),
            output_dir: None,
        }
    }

    /// 从 JSON 文件加载
    ///
    /// 相对路径（input_path / output_dir）按会话文件所在目录解析
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        let raw = fs::read_to_string(path)?;
        let mut session: Self = serde_json::from_str(&raw)?;

        if let Some(base) = path.parent() {
            if session.input_path.is_relative() {
                session.input_path = base.join(&session.input_path);
            }
            if let Some(dir) = session.output_dir.as_mut().filter(|d| d.is_relative()) {
                *dir = base.join(&*dir);
            }
        }

        Ok(session)
    }
}

// ==========================================
// 预览 / 报告结构
// ==========================================

/// 文件预览（选择设备前）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePreview {
    pub header_row: usize,
    pub headers: Vec<String>,
    pub column_roles: ColumnRoles,
    pub row_count: usize,
    pub device_matches: Vec<DeviceMatch>,
}

/// 单个设备选择的执行摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub device_name: String,
    pub search_text: String,
    pub match_count: usize,
    pub exported: usize,
    pub failed: usize,
}

/// 转换报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub run_id: String,
    pub generated_at: NaiveDateTime,
    pub header_row: usize,
    pub column_roles: ColumnRoles,
    pub row_count: usize,
    pub device_matches: Vec<DeviceMatch>,
    pub selections: Vec<SelectionSummary>,
    pub records: Vec<OutputRecord>,
    pub failures: Vec<ExportFailure>,
    pub advisories: Vec<Advisory>,
    pub export_file_name: String,
    pub failures_file_name: String,
    pub export_csv: String,
    pub failures_csv: String,
}

/// 写出的文件路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub export: PathBuf,
    /// 无失败行时不写失败日志
    pub failures: Option<PathBuf>,
}

impl ConversionReport {
    /// 写出导出文件（总是）与失败日志（有失败行时）
    pub fn write_outputs<P: AsRef<Path>>(&self, dir: P) -> ApiResult<OutputPaths> {
        let dir = dir.as_ref();

        let export = dir.join(&self.export_file_name);
        write_csv_file(&export, &self.export_csv)?;

        let failures = if self.failures.is_empty() {
            None
        } else {
            let path = dir.join(&self.failures_file_name);
            write_csv_file(&path, &self.failures_csv)?;
            Some(path)
        };

        info!(export = %export.display(), failures = ?failures, "转换结果已写出");
        Ok(OutputPaths { export, failures })
    }

    /// 本地化摘要
    pub fn summary(&self) -> String {
        let records = self.records.len().to_string();
        let failures = self.failures.len().to_string();
        let advisories = self.advisories.len().to_string();
        t_with_args(
            "summary.conversion",
            &[
                ("records", records.as_str()),
                ("failures", failures.as_str()),
                ("advisories", advisories.as_str()),
            ],
        )
    }
}

// ==========================================
// ConversionApi
// ==========================================
pub struct ConversionApi {
    config: Arc<dyn ConversionConfigReader>,
    catalog: Arc<DeviceCatalog>,
    parser: UniversalFileParser,
}

impl ConversionApi {
    pub fn new(config: Arc<dyn ConversionConfigReader>, catalog: Arc<DeviceCatalog>) -> Self {
        Self {
            config,
            catalog,
            parser: UniversalFileParser,
        }
    }

    pub fn catalog(&self) -> &DeviceCatalog {
        &self.catalog
    }

    /// 预览文件: 表头、列语义、目录设备命中情况
    #[instrument(skip(self, input_path), fields(input = %input_path.as_ref().display()))]
    pub fn preview<P: AsRef<Path>>(
        &self,
        input_path: P,
        header_row: Option<usize>,
    ) -> ApiResult<TablePreview> {
        let (table, roles) = self.load_table(input_path.as_ref(), header_row)?;
        let device_matches = DeviceMatcher::match_catalog(&table, roles.description, &self.catalog)?;

        Ok(TablePreview {
            header_row: table.header_row(),
            headers: table.headers().to_vec(),
            column_roles: roles,
            row_count: table.row_count(),
            device_matches,
        })
    }

    /// 为预览中的目录命中生成建议选择
    pub fn suggest_selections(&self, preview: &TablePreview) -> ApiResult<Vec<DeviceSelection>> {
        let location = self.config.get_default_location()?;
        Ok(preview
            .device_matches
            .iter()
            .map(|m| self.catalog.suggest_selection(&m.device_name, &location))
            .collect())
    }

    /// 执行转换（当前时间命名导出文件）
    pub fn run(&self, session: &ConversionSession) -> ApiResult<ConversionReport> {
        self.run_at(session, Local::now().naive_local())
    }

    /// 执行转换
    #[instrument(
        skip(self, session),
        fields(
            run_id = tracing::field::Empty,
            input = %session.input_path.display(),
            selections = session.selections.len()
        )
    )]
    pub fn run_at(
        &self,
        session: &ConversionSession,
        now: NaiveDateTime,
    ) -> ApiResult<ConversionReport> {
        let run_id = Uuid::new_v4().to_string();
        Span::current().record("run_id", run_id.as_str());
        info!("开始转换");

        // === 步骤 1: 解析 + 表头 + 列语义（描述列缺失即中止）===
        let (table, roles) = self.load_table(&session.input_path, session.header_row)?;

        // === 步骤 2: 目录设备匹配 ===
        let device_matches = DeviceMatcher::match_catalog(&table, roles.description, &self.catalog)?;

        // === 步骤 3: 选择检查（阻断类错误在构建前返回）===
        let checker = SelectionChecker::new(self.config.get_block_on_type_mismatch()?);
        let mut advisories = Vec::new();
        for selection in &session.selections {
            advisories.extend(checker.check(selection, &self.catalog)?);
        }

        // === 步骤 4: 逐个选择构建记录 ===
        let builder = RecordBuilder::new(self.config.get_missing_value_sentinels()?);
        let mut records = Vec::new();
        let mut failures = Vec::new();
        let mut selections = Vec::with_capacity(session.selections.len());

        for selection in &session.selections {
            let search_text = selection.search_text().to_string();
            let rows = DeviceMatcher::match_text(&table, roles.description, &search_text)?;
            let outcome = builder.build(selection, &table, &rows, &roles, &self.catalog);

            debug!(
                device = %selection.device_name,
                search = %search_text,
                matched = rows.len(),
                "设备选择处理完成"
            );

            selections.push(SelectionSummary {
                device_name: selection.device_name.clone(),
                search_text,
                match_count: rows.len(),
                exported: outcome.records.len(),
                failed: outcome.failures.len(),
            });
            records.extend(outcome.records);
            failures.extend(outcome.failures);
        }

        // === 步骤 5: 生成导出内容 ===
        let writer = ExportWriter::new(&self.config.get_failure_field_separator()?);
        let export_csv = writer.write(&records)?;
        let failures_csv = writer.write_failures(&failures)?;

        let include_time = self.config.get_filename_include_time()?;
        let default_stem = self.config.get_default_export_stem()?;
        let company = session.company_name.as_deref();

        info!(
            records = records.len(),
            failures = failures.len(),
            advisories = advisories.len(),
            "转换完成"
        );

        Ok(ConversionReport {
            run_id,
            generated_at: now,
            header_row: table.header_row(),
            column_roles: roles,
            row_count: table.row_count(),
            device_matches,
            selections,
            records,
            failures,
            advisories,
            export_file_name: export_file_name(company, now, include_time, &default_stem),
            failures_file_name: failures_file_name(company, now, include_time, &default_stem),
            export_csv,
            failures_csv,
        })
    }

    /// 解析文件并确定表头与列语义
    fn load_table(
        &self,
        input_path: &Path,
        header_row: Option<usize>,
    ) -> ImportResult<(ResolvedTable, ColumnRoles)> {
        let raw: RawTable = self.parser.parse(input_path)?;

        let header_row = match header_row {
            Some(row) if row >= raw.len() => {
                return Err(ImportError::HeaderRowOutOfRange {
                    row,
                    total: raw.len(),
                })
            }
            Some(row) => row,
            None => HeaderLocator::new(self.config.get_header_scan_rows()?).locate(&raw),
        };

        let table = raw.resolve(header_row);
        let roles = ColumnResolver::resolve(table.headers())?;
        debug!(header_row, rows = table.row_count(), "表头与列语义已确定");

        Ok((table, roles))
    }
}

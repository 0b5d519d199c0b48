// ==========================================
// Camvio 库存导入 - 转换配置读取 Trait
// ==========================================
// 职责: 定义转换流程所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::importer::error::ImportResult;

// ==========================================
// ConversionConfigReader Trait
// ==========================================
// 实现者: ConfigManager（JSON key/value）
pub trait ConversionConfigReader: Send + Sync {
    /// 自动定位表头时扫描的行数
    ///
    /// # 默认值
    /// - 10
    fn get_header_scan_rows(&self) -> ImportResult<usize>;

    /// 新选择的默认库位
    ///
    /// # 默认值
    /// - WAREHOUSE
    fn get_default_location(&self) -> ImportResult<String>;

    /// 视为"无值"的保留标记（大小写无关）
    ///
    /// # 默认值
    /// - ["NO VALUE", "NAN", "NONE"]
    fn get_missing_value_sentinels(&self) -> ImportResult<Vec<String>>;

    /// 无公司名时的导出文件名前缀
    ///
    /// # 默认值
    /// - inventory_export
    fn get_default_export_stem(&self) -> ImportResult<String>;

    /// 导出文件名是否带时分秒
    ///
    /// # 默认值
    /// - true
    fn get_filename_include_time(&self) -> ImportResult<bool>;

    /// 设备类型与目录不一致时是否中止转换
    ///
    /// # 默认值
    /// - false（只提示）
    fn get_block_on_type_mismatch(&self) -> ImportResult<bool>;

    /// 失败日志 missing_fields 的连接符
    ///
    /// # 默认值
    /// - ;
    fn get_failure_field_separator(&self) -> ImportResult<String>;

    /// 提示文本语言
    ///
    /// # 默认值
    /// - en
    fn get_locale(&self) -> ImportResult<String>;
}

// ==========================================
// Camvio 库存导入 - 属性串模板
// ==========================================
// 职责: 固定占位符集合的闭式替换（不是通用模板引擎）
// 占位符: <<MAC>> <<SN>> <<FSAN>> <<ONT_PORT>> <<ONT_PROFILE_ID>> <<ONT_MOMENTUM_PASSWORD>>
// 规则: 单遍扫描；替换值中的占位符文本不会被再次展开；未知占位符原样保留
// ==========================================

use crate::domain::types::ProfileType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateToken {
    Mac,
    Sn,
    Fsan,
    OntPort,
    OntProfileId,
    OntMomentumPassword,
}

impl TemplateToken {
    pub const ALL: [TemplateToken; 6] = [
        TemplateToken::Mac,
        TemplateToken::Sn,
        TemplateToken::Fsan,
        TemplateToken::OntPort,
        TemplateToken::OntProfileId,
        TemplateToken::OntMomentumPassword,
    ];

    /// 占位符内部名（不含 << >>）
    pub fn name(&self) -> &'static str {
        match self {
            TemplateToken::Mac => "MAC",
            TemplateToken::Sn => "SN",
            TemplateToken::Fsan => "FSAN",
            TemplateToken::OntPort => "ONT_PORT",
            TemplateToken::OntProfileId => "ONT_PROFILE_ID",
            TemplateToken::OntMomentumPassword => "ONT_MOMENTUM_PASSWORD",
        }
    }

    pub fn placeholder(&self) -> String {
        format!("<<{}>>", self.name())
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

/// 一行记录的替换值
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateValues<'a> {
    pub mac: &'a str,
    pub sn: &'a str,
    pub fsan: &'a str,
    pub ont_port: &'a str,
    pub ont_profile_id: &'a str,
    pub ont_momentum_password: &'a str,
}

impl<'a> TemplateValues<'a> {
    fn get(&self, token: TemplateToken) -> &'a str {
        match token {
            TemplateToken::Mac => self.mac,
            TemplateToken::Sn => self.sn,
            TemplateToken::Fsan => self.fsan,
            TemplateToken::OntPort => self.ont_port,
            TemplateToken::OntProfileId => self.ont_profile_id,
            TemplateToken::OntMomentumPassword => self.ont_momentum_password,
        }
    }
}

/// 模板是否包含某占位符
pub fn requires(template: &str, token: TemplateToken) -> bool {
    template.contains(&token.placeholder())
}

/// 展开模板
pub fn expand(template: &str, values: &TemplateValues<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(start) = rest.find("<<") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find(">>") {
            Some(end) => match TemplateToken::from_name(&after[..end]) {
                Some(token) => {
                    out.push_str(values.get(token));
                    rest = &after[end + 2..];
                }
                None => {
                    // 未知占位符: 原样输出一个 '<'，从下一个字符继续扫描
                    out.push('<');
                    rest = &rest[start + 1..];
                }
            },
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}

// 操作员填写的 ONT 字段（属性串中的键名与占位符同名）
const OPERATOR_FIELDS: [TemplateToken; 3] = [
    TemplateToken::OntPort,
    TemplateToken::OntProfileId,
    TemplateToken::OntMomentumPassword,
];

/// ONT 的完整通用模板
pub const GENERIC_ONT_TEMPLATE: &str = "MAC=<<MAC>>|SN=<<SN>>|ONT_FSAN=<<FSAN>>|ONT_ID=NO VALUE|ONT_NODENAME=NO VALUE|ONT_PORT=<<ONT_PORT>>|ONT_PROFILE_ID=<<ONT_PROFILE_ID>>|ONT_MOMENTUM_PASSWORD=<<ONT_MOMENTUM_PASSWORD>>";

/// 目录无模板时的通用模板
///
/// - ONT: 见 `GENERIC_ONT_TEMPLATE`（含操作员字段）
/// - 有 FSAN 标签: `MAC=<<MAC>>|SN=<<SN>>|{LABEL}=<<FSAN>>`
/// - Endpoint: `MAC=<<MAC>>|SN=<<SN>>`
pub fn generic_template(profile_type: &ProfileType) -> String {
    if profile_type.is_ont() {
        return GENERIC_ONT_TEMPLATE.to_string();
    }
    match profile_type.fsan_label() {
        Some(label) => format!("MAC=<<MAC>>|SN=<<SN>>|{}=<<FSAN>>", label),
        None => "MAC=<<MAC>>|SN=<<SN>>".to_string(),
    }
}

/// 将模板中 ONT 操作员字段的值改为对应占位符
///
/// 目录模板常带字面默认值（如 `ONT_PORT=G1`），
/// 改写后由操作员的选择决定最终值；其余字段不变。
pub fn bind_operator_fields(template: &str) -> String {
    template
        .split('|')
        .map(|segment| {
            let key = segment.split('=').next().unwrap_or_default().trim();
            match OPERATOR_FIELDS.iter().find(|t| t.name() == key) {
                Some(token) => format!("{}={}", key, token.placeholder()),
                None => segment.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

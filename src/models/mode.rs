use serde::{Deserialize, Serialize};

/// 改写模式
///
/// 四种已知模式之外的名称保存在 `Other` 中，原样发送给服务端，由服务端决定如何处理。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// 流畅
    #[default]
    Fluency,
    /// 学术
    Academic,
    /// 简单
    Simple,
    /// 创意
    Creative,
    /// 未知模式（不拒绝）
    Other(String),
}

/// 模式描述信息，对应服务端 `GET /modes` 返回的条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Mode {
    /// 所有已知模式
    pub const KNOWN: [Mode; 4] = [Mode::Fluency, Mode::Academic, Mode::Simple, Mode::Creative];

    /// 获取模式 ID（即发送给服务端的字符串）
    pub fn id(&self) -> &str {
        match self {
            Mode::Fluency => "fluency",
            Mode::Academic => "academic",
            Mode::Simple => "simple",
            Mode::Creative => "creative",
            Mode::Other(id) => id,
        }
    }

    /// 获取显示名称
    pub fn name(&self) -> &str {
        match self {
            Mode::Fluency => "Fluency",
            Mode::Academic => "Academic",
            Mode::Simple => "Simple",
            Mode::Creative => "Creative",
            // 与原界面一致：未知模式显示为默认名称
            Mode::Other(_) => "Fluency",
        }
    }

    /// 获取模式说明
    pub fn description(&self) -> &str {
        match self {
            Mode::Fluency => "Improve flow and natural language",
            Mode::Academic => "Transform to scholarly and formal style",
            Mode::Simple => "Convert to clear, easy-to-understand language",
            Mode::Creative => "Add expressive flair and imaginative elements",
            Mode::Other(_) => "",
        }
    }

    /// 获取该模式的示例文本
    pub fn sample_text(&self) -> &'static str {
        match self {
            Mode::Academic => "The empirical evidence suggests that there is a strong correlation between socioeconomic status and educational outcomes. Further research is necessary to understand the causal mechanisms underlying this relationship.",
            Mode::Simple => "Climate change is making the Earth warmer. This happens because we burn too much oil and gas. We need to use more renewable energy to solve this problem.",
            Mode::Creative => "The sunset painted the sky with hues of orange and pink, as the day bid farewell to make way for the night. Stars began to appear, like diamonds scattered across a velvet canvas.",
            Mode::Fluency | Mode::Other(_) => "Machine learning is a method of data analysis that automates analytical model building. It is a branch of artificial intelligence based on the idea that systems can learn from data, identify patterns and make decisions with minimal human intervention.",
        }
    }

    /// 是否为已知模式
    pub fn is_known(&self) -> bool {
        !matches!(self, Mode::Other(_))
    }

    /// 转换为描述信息
    pub fn info(&self) -> ModeInfo {
        ModeInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }

    /// 内置的模式列表（`/modes` 不可用时使用）
    pub fn builtin_infos() -> Vec<ModeInfo> {
        Self::KNOWN.iter().map(Mode::info).collect()
    }

    /// 从字符串解析模式（ID 不区分大小写，未知名称保留原文）
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "fluency" => Mode::Fluency,
            "academic" => Mode::Academic,
            "simple" => Mode::Simple,
            "creative" => Mode::Creative,
            _ => Mode::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for Mode {
    fn from(s: String) -> Self {
        Mode::parse(&s)
    }
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        Mode::parse(s)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.id().to_string()
    }
}

impl std::str::FromStr for Mode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::parse(s))
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes_case_insensitive() {
        assert_eq!(Mode::parse("fluency"), Mode::Fluency);
        assert_eq!(Mode::parse("Academic"), Mode::Academic);
        assert_eq!(Mode::parse(" SIMPLE "), Mode::Simple);
        assert_eq!(Mode::parse("creative"), Mode::Creative);
    }

    #[test]
    fn test_unknown_mode_passes_through() {
        let mode = Mode::parse("shakespeare");
        assert_eq!(mode, Mode::Other("shakespeare".to_string()));
        assert!(!mode.is_known());
        assert_eq!(mode.id(), "shakespeare");
        // 未知模式使用默认示例文本
        assert_eq!(mode.sample_text(), Mode::Fluency.sample_text());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Mode::Academic).unwrap();
        assert_eq!(json, "\"academic\"");

        let mode: Mode = serde_json::from_str("\"poetic\"").unwrap();
        assert_eq!(mode.to_string(), "poetic");
    }

    #[test]
    fn test_builtin_infos_cover_known_modes() {
        let infos = Mode::builtin_infos();
        let ids: Vec<&str> = infos.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["fluency", "academic", "simple", "creative"]);
        assert_eq!(infos[1].name, "Academic");
    }
}

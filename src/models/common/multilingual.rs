use serde::{Deserialize, Serialize};

/// 多语言文本，`zh-CN` 必填，其余语言可选
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilingualText {
    #[serde(rename = "zh-CN")]
    pub zh_cn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub es: Option<String>,
}

/// `?lang=` 查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

impl LanguageQuery {
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }
}

pub const DEFAULT_LANG: &str = "zh-CN";

impl MultilingualText {
    pub fn new(zh_cn: impl Into<String>) -> Self {
        Self {
            zh_cn: zh_cn.into(),
            en: None,
            es: None,
        }
    }

    #[cfg(test)]
    pub fn with_en(mut self, en: impl Into<String>) -> Self {
        self.en = Some(en.into());
        self
    }

    /// 按语言取值，缺失或为空时回退到 zh-CN
    pub fn resolve(&self, lang: &str) -> &str {
        let candidate = match lang {
            "en" => self.en.as_deref(),
            "es" => self.es.as_deref(),
            _ => None,
        };
        candidate
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(&self.zh_cn)
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_zh_cn() {
        let text = MultilingualText::new("草甘膦").with_en("Glyphosate");
        assert_eq!(text.resolve("en"), "Glyphosate");
        assert_eq!(text.resolve("es"), "草甘膦");
        assert_eq!(text.resolve("fr"), "草甘膦");
        assert_eq!(text.resolve("zh-CN"), "草甘膦");
    }

    #[test]
    fn test_empty_translation_falls_back() {
        let text = MultilingualText::new("草甘膦").with_en("  ");
        assert_eq!(text.resolve("en"), "草甘膦");
    }

    #[test]
    fn test_serde_keys() {
        let text: MultilingualText =
            serde_json::from_str(r#"{"zh-CN":"百草枯","en":"Paraquat"}"#).unwrap();
        assert_eq!(text.zh_cn, "百草枯");
        assert_eq!(text.es, None);

        let value = text.to_value();
        assert_eq!(value["zh-CN"], "百草枯");
        assert!(value.get("es").is_none());
    }

    #[test]
    fn test_missing_zh_cn_rejected() {
        assert!(serde_json::from_str::<MultilingualText>(r#"{"en":"Paraquat"}"#).is_err());
    }
}

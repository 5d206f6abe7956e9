//! 评价内容审核策略
//!
//! 匹配策略做成可替换的 trait：默认为大小写不敏感的子串匹配
//! （子串会命中无关单词内部，是已知的误报来源），另提供
//! 整词边界匹配实现，按配置 match_mode 选择。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::AppConfig;

pub trait ContentPolicy: Send + Sync {
    /// 返回第一个命中的违禁词；无命中时返回 None
    fn find_banned_term(&self, text: &str) -> Option<String>;

    fn is_acceptable(&self, text: &str) -> bool {
        self.find_banned_term(text).is_none()
    }
}

/// 子串匹配：不分词，大小写不敏感
pub struct SubstringDenylist {
    terms: Vec<String>,
}

impl SubstringDenylist {
    pub fn new(terms: &[String]) -> Self {
        Self {
            terms: terms.iter().map(|t| t.to_lowercase()).collect(),
        }
    }
}

impl ContentPolicy for SubstringDenylist {
    fn find_banned_term(&self, text: &str) -> Option<String> {
        let lowered = text.to_lowercase();
        self.terms
            .iter()
            .find(|term| !term.is_empty() && lowered.contains(term.as_str()))
            .cloned()
    }
}

/// 整词匹配：词边界命中才算，避免子串误报
pub struct WordBoundaryDenylist {
    patterns: Vec<(String, Regex)>,
}

impl WordBoundaryDenylist {
    pub fn new(terms: &[String]) -> Self {
        let patterns = terms
            .iter()
            .filter(|t| !t.is_empty())
            .filter_map(|t| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(t));
                Regex::new(&pattern).ok().map(|re| (t.to_lowercase(), re))
            })
            .collect();
        Self { patterns }
    }
}

impl ContentPolicy for WordBoundaryDenylist {
    fn find_banned_term(&self, text: &str) -> Option<String> {
        self.patterns
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(term, _)| term.clone())
    }
}

static CONTENT_POLICY: Lazy<Box<dyn ContentPolicy>> = Lazy::new(|| {
    let config = AppConfig::get();
    match config.moderation.match_mode.as_str() {
        "word_boundary" => Box::new(WordBoundaryDenylist::new(&config.moderation.denylist)),
        _ => Box::new(SubstringDenylist::new(&config.moderation.denylist)),
    }
});

/// 获取全局审核策略实例
pub fn content_policy() -> &'static dyn ContentPolicy {
    CONTENT_POLICY.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let policy = SubstringDenylist::new(&terms(&["garbage"]));
        assert!(policy.find_banned_term("This is GarBage content").is_some());
        assert!(policy.is_acceptable("perfectly fine text"));
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // 已知误报：子串命中无关单词内部
        let policy = SubstringDenylist::new(&terms(&["ass"]));
        assert!(policy.find_banned_term("great class overall").is_some());
    }

    #[test]
    fn test_word_boundary_avoids_substring_false_positive() {
        let policy = WordBoundaryDenylist::new(&terms(&["ass"]));
        assert!(policy.find_banned_term("great class overall").is_none());
        assert!(policy.find_banned_term("what an ass").is_some());
    }

    #[test]
    fn test_empty_terms_never_match() {
        let policy = SubstringDenylist::new(&terms(&[""]));
        assert!(policy.is_acceptable("anything"));
    }

    #[test]
    fn test_returns_first_hit() {
        let policy = SubstringDenylist::new(&terms(&["foo", "bar"]));
        assert_eq!(policy.find_banned_term("bar foo").as_deref(), Some("foo"));
    }
}

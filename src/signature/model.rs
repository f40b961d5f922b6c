//! 指纹数据模型定义
//! 仅存储指纹数据与检测结果结构，无任何匹配逻辑，结果支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::error::TgResult;

/// 单条技术指纹（编译期常量表的一行）
/// name 在全目录内唯一，作为检测结果的去重键
#[derive(Debug, Clone, Copy)]
pub struct SignatureEntry {
    pub name: &'static str,
    pub category: &'static str,
    // 针对HTML正文的正则模式（忽略大小写）
    pub content_patterns: &'static [&'static str],
    // 针对Header检索串的正则模式（忽略大小写），可为空
    pub header_patterns: &'static [&'static str],
}

/// 置信度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

impl Confidence {
    /// 按命中模式数映射置信度等级与分值（固定阈值）
    /// 两条独立佐证与三条同样视为可信，单条佐证降级为 medium，
    /// 控制泛化词（如正文里的 react）造成的误报
    pub fn from_match_count(match_count: usize) -> (Self, f64) {
        if match_count >= 3 {
            (Confidence::High, 0.95)
        } else if match_count == 2 {
            (Confidence::High, 0.85)
        } else {
            (Confidence::Medium, 0.70)
        }
    }
}

// ======== 为 Confidence 实现 Display trait（用于 CLI / Report 输出） ========
impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
        }
    }
}

/// 单项技术检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub name: String,
    pub category: String,
    pub confidence: Confidence,
    pub confidence_score: f64,
    pub match_count: usize,
    // 命中的模式原文，最多记录3条；Header命中带 header: 前缀
    pub patterns_matched: Vec<String>,
}

// ======== 为 Detection 实现 Display trait（用于 CLI / Report 输出） ========
impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.category, self.confidence)
    }
}

// ======== 检测结果列表序列化辅助函数 ========

/// 检测结果列表转紧凑JSON
pub fn detections_to_compact_json(detections: &[Detection]) -> TgResult<String> {
    Ok(serde_json::to_string(detections)?)
}

/// 检测结果列表转格式化JSON
pub fn detections_to_pretty_json(detections: &[Detection]) -> TgResult<String> {
    Ok(serde_json::to_string_pretty(detections)?)
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_from_match_count_tiers() {
        // 测试场景：三档固定阈值，不产生其他分值
        assert_eq!(Confidence::from_match_count(1), (Confidence::Medium, 0.70));
        assert_eq!(Confidence::from_match_count(2), (Confidence::High, 0.85));
        assert_eq!(Confidence::from_match_count(3), (Confidence::High, 0.95));
        assert_eq!(Confidence::from_match_count(17), (Confidence::High, 0.95));
    }

    #[test]
    fn test_confidence_serialize_lowercase() {
        // 测试场景：置信度序列化为小写字符串
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), r#""high""#);
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), r#""medium""#);
    }

    #[test]
    fn test_detection_json_roundtrip() {
        // 测试场景：检测结果序列化后可反序列化还原
        let detection = Detection {
            name: "Shopify".to_string(),
            category: "Ecommerce".to_string(),
            confidence: Confidence::High,
            confidence_score: 0.85,
            match_count: 2,
            patterns_matched: vec![r"cdn\.shopify\.com".to_string(), "header:x-shopify-stage".to_string()],
        };

        let json = detections_to_compact_json(std::slice::from_ref(&detection)).unwrap();
        let parsed: Vec<Detection> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![detection]);
    }
}

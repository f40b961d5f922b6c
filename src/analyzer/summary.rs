//! 检测结果汇总：按分类聚合技术清单与置信度计数

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::signature::model::{Confidence, Detection};

/// 分类下的单项技术（精简视图）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTech {
    pub name: String,
    pub confidence: Confidence,
}

/// 技术栈汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechSummary {
    pub total_detected: usize,
    pub categories_found: usize,
    pub by_category: HashMap<String, Vec<CategoryTech>>,
    pub high_confidence_count: usize,
}

/// 汇总检测结果
/// 空输入返回全零计数与空映射
pub fn summarize(detections: &[Detection]) -> TechSummary {
    let mut by_category: HashMap<String, Vec<CategoryTech>> = HashMap::new();

    for detection in detections {
        by_category
            .entry(detection.category.clone())
            .or_default()
            .push(CategoryTech {
                name: detection.name.clone(),
                confidence: detection.confidence,
            });
    }

    TechSummary {
        total_detected: detections.len(),
        categories_found: by_category.len(),
        high_confidence_count: detections
            .iter()
            .filter(|d| d.confidence == Confidence::High)
            .count(),
        by_category,
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    fn det(name: &str, category: &str, match_count: usize) -> Detection {
        let (confidence, confidence_score) = Confidence::from_match_count(match_count);
        Detection {
            name: name.to_string(),
            category: category.to_string(),
            confidence,
            confidence_score,
            match_count,
            patterns_matched: Vec::new(),
        }
    }

    #[test]
    fn test_summarize_empty_input() {
        // 测试场景：空输入返回全零计数与空映射
        let summary = summarize(&[]);
        assert_eq!(summary.total_detected, 0);
        assert_eq!(summary.categories_found, 0);
        assert_eq!(summary.high_confidence_count, 0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_summarize_groups_and_counts() {
        // 测试场景：同分类聚合到一组，high置信度单独计数
        let detections = [
            det("HubSpot", "CRM", 3),
            det("Hotjar", "Analytics", 2),
            det("Heap", "Analytics", 1),
            det("React", "Framework", 1),
        ];

        let summary = summarize(&detections);
        assert_eq!(summary.total_detected, 4);
        assert_eq!(summary.categories_found, 3);
        assert_eq!(summary.high_confidence_count, 2);

        let analytics = &summary.by_category["Analytics"];
        assert_eq!(analytics.len(), 2);
        assert_eq!(analytics[0].name, "Hotjar");
        assert_eq!(analytics[0].confidence, Confidence::High);
        assert_eq!(analytics[1].confidence, Confidence::Medium);
    }
}

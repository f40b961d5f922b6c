//! 缺口分析：对照固定的必备/增长分类体系，产出改进商机与缺口评分

use std::collections::{BTreeSet, HashMap};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::signature::model::Detection;

/// 多数企业站点的必备分类
pub const ESSENTIAL_CATEGORIES: &[&str] = &["CRM", "Analytics", "Email Marketing"];

/// 增长期企业的进阶分类
pub const GROWTH_CATEGORIES: &[&str] = &["Marketing Automation", "Chat", "A/B Testing"];

// 缺口评分权重：必备缺口按增长缺口3倍计
const ESSENTIAL_GAP_WEIGHT: u32 = 15;
const GROWTH_GAP_WEIGHT: u32 = 5;

/// 商机优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityPriority {
    High,
    Medium,
}

/// 单项服务商机
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub category: String,
    pub service: String,
    pub pitch: String,
    pub monthly_value: u32,
    pub priority: OpportunityPriority,
}

/// 缺口分析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub detected_categories: BTreeSet<String>,
    pub missing_essential: BTreeSet<String>,
    pub missing_growth: BTreeSet<String>,
    pub opportunities: Vec<Opportunity>,
    pub gap_score: u32,
}

struct OpportunityInfo {
    service: &'static str,
    pitch: &'static str,
    monthly_value: u32,
}

// 商机映射表（分类 -> 服务方案），表外分类不产出商机
static OPPORTUNITY_MAP: Lazy<HashMap<&'static str, OpportunityInfo>> = Lazy::new(|| {
    HashMap::from([
        (
            "CRM",
            OpportunityInfo {
                service: "CRM Implementation",
                pitch: "streamline sales process and close more deals",
                monthly_value: 150,
            },
        ),
        (
            "Analytics",
            OpportunityInfo {
                service: "Analytics Setup",
                pitch: "understand customer behavior and optimize conversions",
                monthly_value: 50,
            },
        ),
        (
            "Email Marketing",
            OpportunityInfo {
                service: "Email Marketing",
                pitch: "nurture leads and drive repeat purchases",
                monthly_value: 75,
            },
        ),
        (
            "Marketing Automation",
            OpportunityInfo {
                service: "Marketing Automation",
                pitch: "automate campaigns and scale marketing efforts",
                monthly_value: 500,
            },
        ),
        (
            "Chat",
            OpportunityInfo {
                service: "Live Chat Implementation",
                pitch: "provide instant support and capture more leads",
                monthly_value: 60,
            },
        ),
        (
            "A/B Testing",
            OpportunityInfo {
                service: "Conversion Optimization",
                pitch: "increase conversions through data-driven testing",
                monthly_value: 200,
            },
        ),
    ])
});

/// 分析技术栈缺口
///
/// 必备缺口商机先于增长缺口商机插入，再按月度价值降序稳定排序，
/// 等值条目保持插入顺序（必备类排前）
pub fn analyze_gaps(detections: &[Detection]) -> GapAnalysis {
    let detected_categories: BTreeSet<String> =
        detections.iter().map(|d| d.category.clone()).collect();

    let missing_essential = missing_from(ESSENTIAL_CATEGORIES, &detected_categories);
    let missing_growth = missing_from(GROWTH_CATEGORIES, &detected_categories);

    let mut opportunities = Vec::new();
    for category in ESSENTIAL_CATEGORIES {
        if missing_essential.contains(*category) {
            if let Some(opp) = opportunity_for(category, OpportunityPriority::High) {
                opportunities.push(opp);
            }
        }
    }
    for category in GROWTH_CATEGORIES {
        if missing_growth.contains(*category) {
            if let Some(opp) = opportunity_for(category, OpportunityPriority::Medium) {
                opportunities.push(opp);
            }
        }
    }
    opportunities.sort_by(|a, b| b.monthly_value.cmp(&a.monthly_value));

    let gap_score = ESSENTIAL_GAP_WEIGHT * missing_essential.len() as u32
        + GROWTH_GAP_WEIGHT * missing_growth.len() as u32;

    GapAnalysis {
        detected_categories,
        missing_essential,
        missing_growth,
        opportunities,
        gap_score,
    }
}

fn missing_from(taxonomy: &[&str], detected: &BTreeSet<String>) -> BTreeSet<String> {
    taxonomy
        .iter()
        .filter(|category| !detected.contains(**category))
        .map(|category| category.to_string())
        .collect()
}

// 表外分类静默返回None，不视为错误
fn opportunity_for(category: &str, priority: OpportunityPriority) -> Option<Opportunity> {
    OPPORTUNITY_MAP.get(category).map(|info| Opportunity {
        category: category.to_string(),
        service: info.service.to_string(),
        pitch: info.pitch.to_string(),
        monthly_value: info.monthly_value,
        priority,
    })
}

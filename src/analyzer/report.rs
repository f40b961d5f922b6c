//! 组合报告：检测、汇总、缺口分析的一体化结果封装

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::detector::{TechDetector, global_detector};
use crate::error::TgResult;
use crate::signature::model::Detection;
use super::gaps::{GapAnalysis, analyze_gaps};
use super::summary::{TechSummary, summarize};

/// 单页分析报告（检测+汇总+缺口三合一）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub technologies: Vec<Detection>,
    pub tech_summary: TechSummary,
    pub gap_analysis: GapAnalysis,
}

impl AnalysisReport {
    /// 从检测结果构建完整报告
    pub fn from_detections(technologies: Vec<Detection>) -> Self {
        let tech_summary = summarize(&technologies);
        let gap_analysis = analyze_gaps(&technologies);
        Self {
            technologies,
            tech_summary,
            gap_analysis,
        }
    }
}

impl TechDetector {
    /// 一次调用完成检测、汇总与缺口分析
    pub fn analyze(&self, html: &str, headers: &HashMap<String, String>) -> AnalysisReport {
        AnalysisReport::from_detections(self.detect(html, headers))
    }
}

/// 使用全局检测器分析单页内容
pub fn analyze_page(html: &str, headers: &HashMap<String, String>) -> AnalysisReport {
    global_detector().analyze(html, headers)
}

/// 分析报告转格式化JSON
pub fn report_to_pretty_json(report: &AnalysisReport) -> TgResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// 页面级报告封装
/// url/final_url/status_code由上游抓取层填充，引擎本身不接触网络；
/// 抓取失败时由failure构造器携带错误信息与置零的引擎结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    pub success: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub technologies: Vec<Detection>,
    pub tech_summary: TechSummary,
    pub gap_analysis: GapAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageReport {
    /// 抓取成功后的页面报告
    pub fn completed(
        url: impl Into<String>,
        final_url: impl Into<String>,
        status_code: u16,
        report: AnalysisReport,
    ) -> Self {
        Self {
            success: true,
            url: url.into(),
            final_url: Some(final_url.into()),
            status_code: Some(status_code),
            technologies: report.technologies,
            tech_summary: report.tech_summary,
            gap_analysis: report.gap_analysis,
            error: None,
        }
    }

    /// 抓取失败的页面报告：错误信息+置零的引擎结果
    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            url: url.into(),
            final_url: None,
            status_code: None,
            technologies: Vec::new(),
            tech_summary: summarize(&[]),
            gap_analysis: analyze_gaps(&[]),
            error: Some(error.into()),
        }
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_page_composes_three_engines() {
        // 测试场景：组合报告与分步调用结果一致
        let html = "cdn.shopify.com static.hotjar.com hotjar.com";
        let headers = HashMap::new();

        let report = analyze_page(html, &headers);
        let detections = global_detector().detect(html, &headers);

        assert_eq!(report.technologies, detections);
        assert_eq!(report.tech_summary, summarize(&detections));
        assert_eq!(report.gap_analysis, analyze_gaps(&detections));
        assert_eq!(report.tech_summary.total_detected, 2);
    }

    #[test]
    fn test_failure_report_carries_zeroed_results() {
        // 测试场景：抓取失败报告携带错误与置零引擎结果，缺口分析按空输入计算
        let report = PageReport::failure("example.com", "Request timeout");

        assert!(!report.success);
        assert_eq!(report.error.as_deref(), Some("Request timeout"));
        assert!(report.final_url.is_none());
        assert!(report.status_code.is_none());
        assert!(report.technologies.is_empty());
        assert_eq!(report.tech_summary.total_detected, 0);
        assert_eq!(report.gap_analysis.gap_score, 60);
        assert_eq!(report.gap_analysis.opportunities.len(), 6);
    }

    #[test]
    fn test_completed_report_serialization_skips_empty_error() {
        // 测试场景：成功报告序列化后不含error字段
        let report = PageReport::completed(
            "example.com",
            "https://example.com/",
            200,
            AnalysisReport::from_detections(Vec::new()),
        );

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""status_code":200"#));
        assert!(!json.contains("error"));
    }
}

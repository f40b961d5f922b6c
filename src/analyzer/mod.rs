//! 分析模块：检测结果的汇总、缺口分析与组合报告
pub mod summary;
pub mod gaps;
pub mod report;

// 导出核心接口
pub use self::summary::{CategoryTech, TechSummary, summarize};
pub use self::gaps::{
    ESSENTIAL_CATEGORIES, GROWTH_CATEGORIES,
    GapAnalysis, Opportunity, OpportunityPriority, analyze_gaps,
};
pub use self::report::{
    AnalysisReport, PageReport, analyze_page, report_to_pretty_json,
};

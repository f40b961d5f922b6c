//! techgap - 网站技术栈指纹检测与商机缺口分析引擎

// 导出全局错误类型
pub use self::error::{TechgapError, TgResult};

// 导出指纹模块核心接口
pub use self::signature::{
    SignatureEntry, Confidence, Detection,
    TECH_SIGNATURES, DEFAULT_CATEGORY_PRIORITY,
    category_priority, signature_by_name,
    CategoryGroup, SignatureIndex, signature_index,
    detections_to_compact_json, detections_to_pretty_json,
};

// 导出编译模块核心接口
pub use self::compiler::{
    CompiledPattern, CompiledSignature, CompiledCatalog, SignatureCompiler,
};

// 导出检测模块核心接口（含兼容函数式调用的简化接口）
pub use self::detector::{
    TechDetector,
    global_detector,
    detect_technologies,
    detect_technologies_multi,
};

// 导出分析模块核心接口
pub use self::analyzer::{
    CategoryTech, TechSummary, summarize,
    ESSENTIAL_CATEGORIES, GROWTH_CATEGORIES,
    GapAnalysis, Opportunity, OpportunityPriority, analyze_gaps,
    AnalysisReport, PageReport, analyze_page, report_to_pretty_json,
};

// 导出工具模块核心接口
pub use self::utils::HeaderConverter;

// 声明所有子模块
pub mod error;
pub mod signature;
pub mod compiler;
pub mod detector;
pub mod analyzer;
pub mod utils;

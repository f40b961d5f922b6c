//! 指纹模块：目录数据、检测结果模型与目录索引
pub mod model;
pub mod catalog;
pub mod index;

// 导出核心接口
pub use self::model::{
    SignatureEntry, Confidence, Detection,
    detections_to_compact_json, detections_to_pretty_json,
};
pub use self::catalog::{
    TECH_SIGNATURES, DEFAULT_CATEGORY_PRIORITY, category_priority, signature_by_name,
};
pub use self::index::{CategoryGroup, SignatureIndex, signature_index};

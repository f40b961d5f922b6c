//! 检测模块：指纹匹配执行与全局单例
pub mod detector;
pub mod global;

// 导出核心接口
pub use self::detector::TechDetector;
pub use self::global::{global_detector, detect_technologies, detect_technologies_multi};

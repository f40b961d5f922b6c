//! 全局检测器单例管理
//! 内置目录编译一次，进程内只读共享，无锁并发安全

use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::detector::TechDetector;
use crate::signature::model::Detection;

/// 全局检测器实例（首次访问时编译内置目录）
static GLOBAL_DETECTOR: Lazy<TechDetector> = Lazy::new(TechDetector::new);

/// 获取全局检测器
pub fn global_detector() -> &'static TechDetector {
    &GLOBAL_DETECTOR
}

// 对外暴露的简化接口（兼容函数式调用方式）

pub fn detect_technologies(html: &str, headers: &HashMap<String, String>) -> Vec<Detection> {
    global_detector().detect(html, headers)
}

pub fn detect_technologies_multi(
    html: &str,
    headers: &HashMap<String, Vec<String>>,
) -> Vec<Detection> {
    global_detector().detect_multi(html, headers)
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_detector_shared_instance() {
        // 测试场景：全局单例与新建检测器对同输入产出一致结果
        let html = "cdn.shopify.com wp-content";
        let headers = HashMap::new();

        let from_global = detect_technologies(html, &headers);
        let from_fresh = TechDetector::new().detect(html, &headers);
        assert_eq!(from_global, from_fresh);
    }
}

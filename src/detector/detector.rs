//! 检测器核心：单趟扫描指纹目录，输出去重后的带置信度检测结果

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

use crate::compiler::{CompiledCatalog, CompiledSignature, SignatureCompiler};
use crate::signature::catalog::TECH_SIGNATURES;
use crate::signature::model::{Confidence, Detection};
use crate::utils::HeaderConverter;

// 结果中记录的命中模式上限（match_count本身不设限）
const MAX_RECORDED_PATTERNS: usize = 3;

/// 技术检测器
/// 持有编译后的只读目录，可跨线程共享，单次调用无内部状态
#[derive(Debug, Clone)]
pub struct TechDetector {
    compiled: Arc<CompiledCatalog>,
}

impl TechDetector {
    /// 创建检测器（编译内置指纹目录）
    pub fn new() -> Self {
        Self {
            compiled: Arc::new(SignatureCompiler::compile(TECH_SIGNATURES)),
        }
    }

    /// 基于已编译目录创建检测器
    pub fn with_catalog(compiled: Arc<CompiledCatalog>) -> Self {
        Self { compiled }
    }

    /// 核心检测接口
    ///
    /// 对HTML正文逐条测试content模式，对Header检索串逐条测试header模式，
    /// 同名指纹只产出一条结果（先到先得）。空正文/空头是合法输入，返回空列表。
    pub fn detect(&self, html: &str, headers: &HashMap<String, String>) -> Vec<Detection> {
        let header_blob = HeaderConverter::to_search_blob(headers);

        let mut detected = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for sig in &self.compiled.signatures {
            // 去重守卫：同名指纹不重复产出
            if seen.contains(sig.name) {
                continue;
            }

            let Some(detection) = Self::match_signature(sig, html, &header_blob) else {
                continue;
            };

            seen.insert(sig.name);
            debug!(
                "指纹命中：技术={}，分类={}，命中数={}，置信度={}",
                detection.name, detection.category, detection.match_count, detection.confidence
            );
            detected.push(detection);
        }

        // 分类优先级升序为主键，置信度分值降序为副键；
        // 稳定排序，键相同的条目保持目录相对顺序
        detected.sort_by(|a, b| {
            let pa = self.priority_of(&a.name);
            let pb = self.priority_of(&b.name);
            pa.cmp(&pb)
                .then_with(|| b.confidence_score.total_cmp(&a.confidence_score))
        });

        detected
    }

    /// 检测接口（HashMap<String, Vec<String>>多值头）
    pub fn detect_multi(
        &self,
        html: &str,
        headers: &HashMap<String, Vec<String>>,
    ) -> Vec<Detection> {
        let single = HeaderConverter::to_single_value(headers);
        self.detect(html, &single)
    }

    /// 编译后目录的只读视图
    pub fn catalog(&self) -> &CompiledCatalog {
        &self.compiled
    }

    /// 对单条指纹执行全部模式测试，无命中返回None
    fn match_signature(
        sig: &CompiledSignature,
        html: &str,
        header_blob: &str,
    ) -> Option<Detection> {
        let mut match_count = 0usize;
        let mut patterns_matched = Vec::new();

        for pattern in &sig.content_patterns {
            if pattern.is_match(html) {
                match_count += 1;
                if patterns_matched.len() < MAX_RECORDED_PATTERNS {
                    patterns_matched.push(pattern.source.to_string());
                }
            }
        }

        // Header命中与content命中同权计数，仅记录时加前缀区分
        for pattern in &sig.header_patterns {
            if pattern.is_match(header_blob) {
                match_count += 1;
                if patterns_matched.len() < MAX_RECORDED_PATTERNS {
                    patterns_matched.push(format!("header:{}", pattern.source));
                }
            }
        }

        if match_count == 0 {
            return None;
        }

        let (confidence, confidence_score) = Confidence::from_match_count(match_count);
        Some(Detection {
            name: sig.name.to_string(),
            category: sig.category.to_string(),
            confidence,
            confidence_score,
            match_count,
            patterns_matched,
        })
    }

    // 排序用优先级查询；检测结果必然来自目录，查不到时退回兜底值
    fn priority_of(&self, name: &str) -> u32 {
        self.compiled
            .get(name)
            .map(|sig| sig.priority)
            .unwrap_or(crate::signature::DEFAULT_CATEGORY_PRIORITY)
    }
}

impl Default for TechDetector {
    fn default() -> Self {
        Self::new()
    }
}

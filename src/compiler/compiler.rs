//! 指纹编译器：将目录常量表编译为可执行的正则匹配器
//! 单条模式编译失败仅跳过该模式，不影响同指纹的其他模式与整体编译

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::signature::catalog;
use crate::signature::model::SignatureEntry;
use super::pattern::{CompiledCatalog, CompiledPattern, CompiledSignature};

/// 指纹编译器
pub struct SignatureCompiler;

impl SignatureCompiler {
    /// 编译整个指纹目录
    pub fn compile(entries: &[SignatureEntry]) -> CompiledCatalog {
        let mut signatures = Vec::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for entry in entries {
            let compiled = Self::compile_entry(entry);
            by_name.insert(compiled.name, signatures.len());
            signatures.push(compiled);
        }

        debug!("指纹目录编译完成，共{}条指纹", signatures.len());
        CompiledCatalog { signatures, by_name }
    }

    /// 编译单条指纹
    /// 非法模式逐条隔离：记录告警后丢弃，指纹本身保留
    fn compile_entry(entry: &SignatureEntry) -> CompiledSignature {
        CompiledSignature {
            name: entry.name,
            category: entry.category,
            priority: catalog::category_priority(entry.category),
            content_patterns: Self::compile_patterns(entry.name, entry.content_patterns),
            header_patterns: Self::compile_patterns(entry.name, entry.header_patterns),
        }
    }

    fn compile_patterns(tech_name: &str, sources: &[&'static str]) -> Vec<CompiledPattern> {
        sources
            .iter()
            .copied()
            .filter_map(|source| match CompiledPattern::compile(source) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("跳过非法模式：技术={}，模式={}，错误={}", tech_name, source, e);
                    None
                }
            })
            .collect()
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::TECH_SIGNATURES;

    #[test]
    fn test_compile_full_catalog() {
        // 测试场景：内置目录全部模式均为合法正则，编译无丢失
        let compiled = SignatureCompiler::compile(TECH_SIGNATURES);
        assert_eq!(compiled.len(), TECH_SIGNATURES.len());

        for (entry, compiled_sig) in TECH_SIGNATURES.iter().zip(&compiled.signatures) {
            assert_eq!(compiled_sig.content_patterns.len(), entry.content_patterns.len());
            assert_eq!(compiled_sig.header_patterns.len(), entry.header_patterns.len());
        }
    }

    #[test]
    fn test_compile_is_case_insensitive() {
        // 测试场景：编译产物忽略大小写匹配
        let pattern = CompiledPattern::compile(r"cdn\.shopify\.com").unwrap();
        assert!(pattern.is_match("CDN.Shopify.COM/assets/theme.js"));
    }

    #[test]
    fn test_invalid_pattern_skipped() {
        // 测试场景：非法正则仅丢弃该条，指纹保留且其余模式可用
        let entries = [SignatureEntry {
            name: "BrokenTech",
            category: "Analytics",
            content_patterns: &[r"[unclosed", r"valid\.pattern"],
            header_patterns: &[r"(?P<dup>a)(?P<dup>b)"],
        }];

        let compiled = SignatureCompiler::compile(&entries);
        assert_eq!(compiled.len(), 1);

        let sig = compiled.get("BrokenTech").unwrap();
        assert_eq!(sig.content_patterns.len(), 1);
        assert_eq!(sig.content_patterns[0].source, r"valid\.pattern");
        assert!(sig.header_patterns.is_empty());
    }

    #[test]
    fn test_priority_resolved_at_compile_time() {
        // 测试场景：编译期固化分类优先级，未登记分类取兜底值
        let entries = [SignatureEntry {
            name: "MysteryTech",
            category: "Blockchain",
            content_patterns: &[r"mystery\.io"],
            header_patterns: &[],
        }];

        let compiled = SignatureCompiler::compile(&entries);
        assert_eq!(compiled.get("MysteryTech").unwrap().priority, crate::signature::DEFAULT_CATEGORY_PRIORITY);

        let full = SignatureCompiler::compile(TECH_SIGNATURES);
        assert_eq!(full.get("HubSpot").unwrap().priority, 1);
        assert_eq!(full.get("React").unwrap().priority, 14);
    }
}

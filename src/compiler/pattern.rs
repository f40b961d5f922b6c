//! 编译后指纹模型
//! 正则编译后的结构

use std::collections::HashMap;
use regex::{Regex, RegexBuilder};

use crate::error::TgResult;

/// 编译后的单条模式
/// 保留模式原文用于结果记录与展示
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub source: &'static str,
    pub regex: Regex,
}

impl CompiledPattern {
    /// 编译单条模式（忽略大小写、非锚定子串匹配）
    pub fn compile(source: &'static str) -> TgResult<Self> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        Ok(Self { source, regex })
    }

    /// 匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// 编译后的单条指纹
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub name: &'static str,
    pub category: &'static str,
    // 编译期解析好的分类优先级，检测排序直接使用
    pub priority: u32,
    pub content_patterns: Vec<CompiledPattern>,
    pub header_patterns: Vec<CompiledPattern>,
}

/// 编译后的指纹目录
#[derive(Debug, Clone)]
pub struct CompiledCatalog {
    pub signatures: Vec<CompiledSignature>,
    pub by_name: HashMap<&'static str, usize>, // 指纹名称 -> signatures下标
}

impl CompiledCatalog {
    /// 按名称查询编译后指纹（O(1)期望复杂度）
    pub fn get(&self, name: &str) -> Option<&CompiledSignature> {
        self.by_name.get(name).map(|&idx| &self.signatures[idx])
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

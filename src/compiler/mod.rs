//! 编译模块：指纹目录的正则编译
pub mod pattern;
pub mod compiler;

// 导出核心接口
pub use self::pattern::{CompiledPattern, CompiledSignature, CompiledCatalog};
pub use self::compiler::SignatureCompiler;

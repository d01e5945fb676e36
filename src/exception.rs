// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 该模块定义了构建 `Set-Cookie` 头时可能返回的各类错误。
//!
//! ## 设计意图
//! - **错误分类**：通过 [`ExceptionKind`] 将错误归为语法校验、类型校验、状态与配置四类。
//! - **不修改状态**：任何返回错误的 setter 都不会改动 `Cookie` 原有的属性。
//! - **用户友好**：通过实现 `std::fmt::Display`，错误信息可以直接写入日志或返回给调用方。

use std::fmt;

/// 构建或序列化 Cookie 过程中发生的异常类型。
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exception {
    /// Cookie 名称中含有控制字符、空白或分隔符。
    InvalidName,
    /// Cookie 值中含有控制字符、空白、双引号、分号或反斜杠。
    InvalidValue,
    /// `Domain` 不符合域名语法。
    InvalidDomain,
    /// `Path` 没有以 `/` 开头。
    PathNotAbsolute,
    /// `Path` 中含有控制字符或分号。
    InvalidPath,
    /// `Expires` 的日期时间超出了可表示的范围。
    DateOutOfRange,
    /// setter 收到了语义类型不符的参数，例如给 `Expires` 传入字符串。
    TypeMismatch {
        expected: &'static str,
        received: &'static str,
    },
    /// 序列化时缺少名称或值。
    MissingNameOrValue,
    /// 无法读取配置文件。
    ConfigUnreadable,
    /// 配置文件不是合法的 TOML，或字段类型与结构不符。
    ConfigMalformed,
}

/// 异常的大类，便于调用方按类别处理。
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExceptionKind {
    /// 名称、值、域名或路径的内容不合法。
    Validation,
    /// 参数的语义类型错误。
    TypeValidation,
    /// 对象状态不完整，无法执行操作。
    State,
    /// 配置文件相关错误。
    Config,
}

use Exception::*;

impl Exception {
    pub fn kind(&self) -> ExceptionKind {
        match self {
            InvalidName | InvalidValue | InvalidDomain | PathNotAbsolute | InvalidPath
            | DateOutOfRange => {
                ExceptionKind::Validation
            }
            TypeMismatch { .. } => ExceptionKind::TypeValidation,
            MissingNameOrValue => ExceptionKind::State,
            ConfigUnreadable | ConfigMalformed => ExceptionKind::Config,
        }
    }
}

impl fmt::Display for Exception {
    /// 根据错误类型写入人类可读的描述文本。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidName => write!(f, "Invalid cookie name provided"),
            InvalidValue => write!(f, "Invalid cookie value provided"),
            InvalidDomain => write!(f, "Invalid domain provided"),
            PathNotAbsolute => write!(f, "Path must start with '/'"),
            InvalidPath => write!(f, "Invalid path provided"),
            DateOutOfRange => write!(f, "Expires date is out of range"),
            TypeMismatch { expected, received } => {
                write!(f, "Expected {}, received {}", expected, received)
            }
            MissingNameOrValue => write!(
                f,
                "Invalid Cookie. You must provide a name and a value for your Cookie."
            ),
            ConfigUnreadable => write!(f, "Couldn't read cookie config file"),
            ConfigMalformed => write!(f, "Cookie config file is malformed"),
        }
    }
}

impl std::error::Error for Exception {}

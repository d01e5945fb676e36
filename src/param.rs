// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Cookie 协议参数与常量模块
//!
//! 该模块定义了 `patissier` 遵循的 RFC 6265 相关常量和数据结构，包括：
//! - 序列化时使用的属性名、分隔符与日期格式。
//! - 按字节值索引的 cookie-octet 查找表（编译期生成）。
//! - 域名语法的正则表达式。
//! - `SameSite` 属性的强类型枚举。

use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer};
use serde_derive::Serialize;

use std::{error::Error, fmt, str::FromStr};

/// HTTP 协议规定的换行符（Carriage Return Line Feed）
pub const CRLF: &str = "\r\n";

/// 响应头名称
pub const SET_COOKIE: &str = "Set-Cookie";

/// 各属性片段之间的分隔符
pub const ATTRIBUTE_SEPARATOR: &str = "; ";

pub const EXPIRES: &str = "Expires";
pub const MAX_AGE: &str = "Max-Age";
pub const DOMAIN: &str = "Domain";
pub const PATH: &str = "Path";
pub const SECURE: &str = "Secure";
pub const HTTP_ONLY: &str = "HttpOnly";
pub const SAME_SITE: &str = "SameSite";

/// `Expires` 使用的 RFC 1123 日期格式，时区固定写作 `GMT`。
pub const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// cookie-name 中禁止出现的分隔符（RFC 2616 `separators`，不含制表符）。
pub const NAME_SEPARATORS: &[u8] = b" \"(),/:;<=>?@[\\]{}";

/// cookie-value 中禁止出现的字符。
pub const VALUE_SEPARATORS: &[u8] = b" \";\\";

/// path-value 中禁止出现的字符。
pub const PATH_SEPARATORS: &[u8] = b";";

/// 以 [0x20, 0x7E] 为基础，剔除 `excluded` 中的字节，生成按字节值索引的查找表。
const fn octet_table(excluded: &[u8]) -> [bool; 256] {
    let mut table = [false; 256];
    let mut byte = 0x20;
    while byte < 0x7f {
        table[byte] = true;
        byte += 1;
    }
    let mut i = 0;
    while i < excluded.len() {
        table[excluded[i] as usize] = false;
        i += 1;
    }
    table
}

/// 允许出现在 cookie 名称中的字节。
pub static NAME_OCTETS: [bool; 256] = octet_table(NAME_SEPARATORS);

/// 允许出现在 cookie 值中的字节。
pub static VALUE_OCTETS: [bool; 256] = octet_table(VALUE_SEPARATORS);

/// 允许出现在 `Path` 中的字节。
pub static PATH_OCTETS: [bool; 256] = octet_table(PATH_SEPARATORS);

/// 逐字符检查：码点必须小于 256 且在查找表中被允许。空串视为合法。
pub fn all_octets_allowed(s: &str, table: &[bool; 256]) -> bool {
    s.chars().all(|c| {
        let code = c as u32;
        code < 256 && table[code as usize]
    })
}

lazy_static! {
    /// 域名语法：可选的前导点，若干以 `.` 结尾的标签，最后是 2~6 个字母的后缀。
    ///
    /// 这只是语法检查，并不做 DNS 层面的校验。
    pub static ref DOMAIN_PATTERN: Regex =
        Regex::new(r"^\.?(?:[A-Za-z0-9+-]{1,63}\.)+[A-Za-z]{2,6}$").unwrap();
}

/// `SameSite` 属性的取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SameSite {
    /// 第一方与跨站请求中都会携带。浏览器要求同时设置 `Secure`，否则会拒绝该 Cookie。
    None,
    /// 跨站子请求（如加载图片、iframe）不携带，但用户从外站导航到本站时携带。
    Lax,
    /// 只在第一方上下文中携带。
    Strict,
}

impl fmt::Display for SameSite {
    /// 将枚举格式化为 `SameSite=` 之后的取值
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SameSite::None => write!(f, "None"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::Strict => write!(f, "Strict"),
        }
    }
}

/// 无法识别的 `SameSite` 取值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSameSiteError(String);

impl fmt::Display for ParseSameSiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown SameSite value {:?}, expected None, Lax or Strict",
            self.0
        )
    }
}

impl Error for ParseSameSiteError {}

impl FromStr for SameSite {
    type Err = ParseSameSiteError;

    /// 不区分大小写地解析 `None`、`Lax`、`Strict`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(SameSite::None),
            "lax" => Ok(SameSite::Lax),
            "strict" => Ok(SameSite::Strict),
            _ => Err(ParseSameSiteError(s.to_string())),
        }
    }
}

// 配置文件与命令行使用同一套解析规则，都不区分大小写。
impl<'de> Deserialize<'de> for SameSite {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Cookie 模块
//!
//! [`Cookie`] 表示一个符合 RFC 6265 的 Cookie：
//! - 每个 setter 都会严格校验输入，校验失败时返回 [`Exception`] 且不修改原有状态；
//! - [`Cookie::serialize`] 按固定顺序拼接各属性，生成 `Set-Cookie` 响应头的值。
//!
//! 参考：<https://www.rfc-editor.org/rfc/rfc6265>，
//! <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Set-Cookie>

use crate::{exception::Exception, param::*, value::AttributeValue};

use chrono::{DateTime, Utc};
use log::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cookie {
    name: Option<String>,
    value: Option<String>,
    expires: Option<DateTime<Utc>>,
    max_age: Option<i64>,
    domain: Option<String>,
    path: Option<String>,
    secure: Option<bool>,
    http_only: Option<bool>,
    same_site: Option<SameSite>,
}

impl Cookie {
    /// 所有属性均未设置的空 Cookie
    pub fn new() -> Self {
        Self::default()
    }

    /// 在构造时同时指定名称和值，两者都会经过校验。
    pub fn with_name_value(name: &str, value: &str) -> Result<Self, Exception> {
        let mut cookie = Self::new();
        cookie.set_name(name)?.set_value(value)?;
        Ok(cookie)
    }
}

impl Cookie {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    pub fn max_age(&self) -> Option<i64> {
        self.max_age
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn secure(&self) -> Option<bool> {
        self.secure
    }

    pub fn http_only(&self) -> Option<bool> {
        self.http_only
    }

    /// Cookie 是否只能在第一方或同站上下文中发送
    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }
}

impl Cookie {
    /// cookie-name 可以包含任意 US-ASCII 可打印字符，但不能包含控制字符、空格、制表符，
    /// 以及分隔符 `( ) < > @ , ; : \ " / [ ] ? = { }`。
    pub fn set_name(&mut self, name: &str) -> Result<&mut Self, Exception> {
        if !all_octets_allowed(name, &NAME_OCTETS) {
            debug!("拒绝非法的Cookie名称（长度{}）", name.len());
            return Err(Exception::InvalidName);
        }
        self.name = Some(name.to_string());
        Ok(self)
    }

    /// cookie-value 可以包含任意 US-ASCII 可打印字符，但不能包含控制字符、空格、
    /// 双引号、分号和反斜杠。
    pub fn set_value(&mut self, value: &str) -> Result<&mut Self, Exception> {
        if !all_octets_allowed(value, &VALUE_OCTETS) {
            debug!("拒绝非法的Cookie值（长度{}）", value.len());
            return Err(Exception::InvalidValue);
        }
        self.value = Some(value.to_string());
        Ok(self)
    }

    pub fn set_same_site(&mut self, same_site: SameSite) -> &mut Self {
        self.same_site = Some(same_site);
        self
    }

    /// 只接受日期时间类型，其他类型返回 [`Exception::TypeMismatch`]。
    pub fn set_expires<V: Into<AttributeValue>>(&mut self, date: V) -> Result<&mut Self, Exception> {
        match date.into() {
            AttributeValue::Date(date) => {
                self.expires = Some(date);
                Ok(self)
            }
            AttributeValue::DateOutOfRange => {
                debug!("Expires超出可表示的范围");
                Err(Exception::DateOutOfRange)
            }
            other => Err(type_mismatch("Date", &other)),
        }
    }

    /// 只接受整数秒数（或没有小数部分的浮点数）。
    ///
    /// 小于等于 0 的值会让客户端立即把 Cookie 视为过期，这里不做限制。
    pub fn set_max_age<V: Into<AttributeValue>>(
        &mut self,
        seconds: V,
    ) -> Result<&mut Self, Exception> {
        let seconds = match seconds.into() {
            AttributeValue::Integer(n) => n,
            AttributeValue::Float(n)
                if n.is_finite()
                    && n.fract() == 0.0
                    && n >= i64::MIN as f64
                    && n < i64::MAX as f64 =>
            {
                n as i64
            }
            other => return Err(type_mismatch("Integer", &other)),
        };
        if seconds <= 0 {
            warn!("Max-Age为{}，客户端会立即将该Cookie视为过期", seconds);
        }
        self.max_age = Some(seconds);
        Ok(self)
    }

    pub fn set_domain(&mut self, domain: &str) -> Result<&mut Self, Exception> {
        if !DOMAIN_PATTERN.is_match(domain) {
            debug!("拒绝非法的Domain：{:?}", domain);
            return Err(Exception::InvalidDomain);
        }
        self.domain = Some(domain.to_string());
        Ok(self)
    }

    /// `Path` 必须是以 `/` 开头的字符串，且不能包含控制字符或分号。
    pub fn set_path<V: Into<AttributeValue>>(&mut self, path: V) -> Result<&mut Self, Exception> {
        let path = match path.into() {
            AttributeValue::Text(s) => s,
            other => return Err(type_mismatch("String", &other)),
        };
        if !path.starts_with('/') {
            debug!("拒绝不以/开头的Path：{:?}", path);
            return Err(Exception::PathNotAbsolute);
        }
        if !all_octets_allowed(&path, &PATH_OCTETS) {
            debug!("拒绝含非法字符的Path：{:?}", path);
            return Err(Exception::InvalidPath);
        }
        self.path = Some(path);
        Ok(self)
    }

    pub fn set_secure(&mut self, secure: bool) -> &mut Self {
        self.secure = Some(secure);
        self
    }

    pub fn set_http_only(&mut self, http_only: bool) -> &mut Self {
        self.http_only = Some(http_only);
        self
    }
}

impl Cookie {
    /// 生成 `Set-Cookie` 响应头的值。
    ///
    /// 属性顺序固定为 `Expires`、`Max-Age`、`Domain`、`Path`、`Secure`、`HttpOnly`、
    /// `SameSite`，未设置的属性不会出现。名称或值缺失时返回
    /// [`Exception::MissingNameOrValue`]。
    pub fn serialize(&self) -> Result<String, Exception> {
        let (name, value) = match (&self.name, &self.value) {
            (Some(name), Some(value)) => (name, value),
            _ => return Err(Exception::MissingNameOrValue),
        };

        let mut parts = vec![format!("{}={}", name, value)];

        if let Some(expires) = &self.expires {
            parts.push(format!("{}={}", EXPIRES, expires.format(EXPIRES_FORMAT)));
        }
        if let Some(max_age) = self.max_age {
            parts.push(format!("{}={}", MAX_AGE, max_age));
        }
        if let Some(domain) = &self.domain {
            parts.push(format!("{}={}", DOMAIN, domain));
        }
        if let Some(path) = &self.path {
            parts.push(format!("{}={}", PATH, path));
        }
        if self.secure == Some(true) {
            parts.push(SECURE.to_string());
        }
        if self.http_only == Some(true) {
            parts.push(HTTP_ONLY.to_string());
        }
        if let Some(same_site) = self.same_site {
            if same_site == SameSite::None && self.secure != Some(true) {
                warn!(
                    "Cookie {} 设置了SameSite=None但没有设置Secure，浏览器可能会拒绝它",
                    name
                );
            }
            parts.push(format!("{}={}", SAME_SITE, same_site));
        }

        Ok(parts.join(ATTRIBUTE_SEPARATOR))
    }

    /// 生成一整行响应头：`Set-Cookie: <value>\r\n`
    pub fn to_header_line(&self) -> Result<String, Exception> {
        Ok(format!("{}: {}{}", SET_COOKIE, self.serialize()?, CRLF))
    }
}

fn type_mismatch(expected: &'static str, received: &AttributeValue) -> Exception {
    debug!("类型不符：期望{}，实际收到{}", expected, received.type_name());
    Exception::TypeMismatch {
        expected,
        received: received.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::ExceptionKind;
    use chrono::TimeZone;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_new_cookie_is_empty() {
        let cookie = Cookie::new();
        assert_eq!(cookie.name(), None);
        assert_eq!(cookie.value(), None);
        assert_eq!(cookie.domain(), None);
        assert_eq!(cookie.expires(), None);
        assert_eq!(cookie.http_only(), None);
        assert_eq!(cookie.max_age(), None);
        assert_eq!(cookie.path(), None);
        assert_eq!(cookie.same_site(), None);
        assert_eq!(cookie.secure(), None);
    }

    #[test]
    fn test_serialize_name_value_only() {
        let mut cookie = Cookie::new();
        cookie.set_name("biscuits").unwrap().set_value("with_tea").unwrap();
        assert_eq!(cookie.serialize().unwrap(), "biscuits=with_tea");
    }

    #[test]
    fn test_invalid_names() {
        let mut cookie = Cookie::new();
        for name in [
            "some;cookie",
            "\"some_cookie\"",
            "http:\\\\",
            "hello world",
            "@jamesbond",
            "/giphy",
            "token?",
            "tab\tname",
        ] {
            assert_eq!(cookie.set_name(name).unwrap_err(), Exception::InvalidName);
        }
        assert_eq!(cookie.name(), None);
    }

    #[test]
    fn test_invalid_values() {
        let mut cookie = Cookie::new();
        for value in ["some;cookie", "\"some_cookie\"", "http:\\\\", "hello world"] {
            assert_eq!(cookie.set_value(value).unwrap_err(), Exception::InvalidValue);
        }
    }

    #[test]
    fn test_value_allows_name_separators() {
        let mut cookie = Cookie::new();
        cookie.set_value("a=b/c:d?e@f[g]{h}(i),<j>").unwrap();
        assert_eq!(cookie.value(), Some("a=b/c:d?e@f[g]{h}(i),<j>"));
    }

    #[test]
    fn test_rejected_assignment_keeps_previous() {
        let mut cookie = Cookie::new();
        cookie.set_name("token").unwrap();
        assert!(cookie.set_name("bad name").is_err());
        assert_eq!(cookie.name(), Some("token"));

        cookie.set_path("/docs").unwrap();
        assert!(cookie.set_path("docs").is_err());
        assert!(cookie.set_path(7).is_err());
        assert_eq!(cookie.path(), Some("/docs"));

        cookie.set_domain("example.com").unwrap();
        assert!(cookie.set_domain("not a domain").is_err());
        assert_eq!(cookie.domain(), Some("example.com"));
    }

    #[test]
    fn test_path() {
        let mut cookie = Cookie::new();
        assert_eq!(
            cookie.set_path("cookies").unwrap_err(),
            Exception::PathNotAbsolute
        );
        cookie.set_path("/cookies").unwrap();
        assert_eq!(cookie.path(), Some("/cookies"));
    }

    #[test]
    fn test_path_type_mismatch() {
        let err = Cookie::new().set_path(1).unwrap_err();
        assert_eq!(err.kind(), ExceptionKind::TypeValidation);
        assert!(err.to_string().contains("Number"));
    }

    #[test]
    fn test_path_rejects_semicolon() {
        assert_eq!(
            Cookie::new().set_path("/a; Secure").unwrap_err(),
            Exception::InvalidPath
        );
    }

    #[test]
    fn test_expires_type_mismatch() {
        assert_eq!(
            Cookie::new().set_expires("Hello").unwrap_err(),
            Exception::TypeMismatch {
                expected: "Date",
                received: "String"
            }
        );
    }

    #[test]
    fn test_max_age_type_mismatch() {
        assert_eq!(
            Cookie::new().set_max_age(Utc::now()).unwrap_err(),
            Exception::TypeMismatch {
                expected: "Integer",
                received: "Date"
            }
        );
        assert_eq!(
            Cookie::new().set_max_age(1.5).unwrap_err().to_string(),
            "Expected Integer, received Float"
        );
        assert!(Cookie::new().set_max_age(f64::NAN).is_err());
    }

    #[test]
    fn test_expires_out_of_range_is_an_error() {
        let mut cookie = Cookie::with_name_value("id", "1").unwrap();
        let far_future = UNIX_EPOCH + Duration::from_secs(10_000_000_000_000);
        assert_eq!(
            cookie.set_expires(far_future).unwrap_err(),
            Exception::DateOutOfRange
        );
        assert_eq!(cookie.expires(), None);
        assert_eq!(cookie.serialize().unwrap(), "id=1");
    }

    #[test]
    fn test_max_age_integral_float() {
        let mut cookie = Cookie::new();
        cookie.set_max_age(60.0).unwrap();
        assert_eq!(cookie.max_age(), Some(60));
    }

    #[test]
    fn test_domain() {
        let mut cookie = Cookie::new();
        cookie.set_domain("example.com").unwrap();
        cookie.set_domain(".example.com").unwrap();
        assert_eq!(cookie.domain(), Some(".example.com"));
        assert_eq!(
            cookie.set_domain("not a domain").unwrap_err(),
            Exception::InvalidDomain
        );
    }

    #[test]
    fn test_serialize_requires_name_and_value() {
        assert_eq!(
            Cookie::new().serialize().unwrap_err(),
            Exception::MissingNameOrValue
        );

        let mut cookie = Cookie::new();
        cookie.set_name("only_name").unwrap();
        assert_eq!(cookie.serialize().unwrap_err().kind(), ExceptionKind::State);
    }

    #[test]
    fn test_serialize_full() {
        let mut cookie = Cookie::new();
        cookie
            .set_name("pepperoni")
            .unwrap()
            .set_value("pizza_is_so_good")
            .unwrap()
            .set_same_site(SameSite::Lax)
            .set_max_age(12 * 24 * 60 * 60)
            .unwrap()
            .set_domain("example.com")
            .unwrap()
            .set_path("/")
            .unwrap()
            .set_secure(true)
            .set_http_only(true);

        assert_eq!(
            cookie.serialize().unwrap(),
            "pepperoni=pizza_is_so_good; Max-Age=1036800; Domain=example.com; Path=/; Secure; HttpOnly; SameSite=Lax"
        );
    }

    #[test]
    fn test_serialize_expires() {
        let mut cookie = Cookie::with_name_value("id", "a3fWa").unwrap();
        cookie
            .set_expires(Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap())
            .unwrap();
        assert_eq!(
            cookie.serialize().unwrap(),
            "id=a3fWa; Expires=Wed, 21 Oct 2015 07:28:00 GMT"
        );
    }

    #[test]
    fn test_expires_before_max_age() {
        let mut cookie = Cookie::with_name_value("id", "1").unwrap();
        cookie.set_max_age(0).unwrap();
        cookie
            .set_expires(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap())
            .unwrap();
        assert_eq!(
            cookie.serialize().unwrap(),
            "id=1; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0"
        );
    }

    #[test]
    fn test_false_flags_are_omitted() {
        let mut cookie = Cookie::with_name_value("a", "b").unwrap();
        cookie.set_secure(false).set_http_only(false);
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.serialize().unwrap(), "a=b");
    }

    #[test]
    fn test_same_site_none_without_secure_is_not_enforced() {
        let mut cookie = Cookie::with_name_value("a", "b").unwrap();
        cookie.set_same_site(SameSite::None);
        assert_eq!(cookie.serialize().unwrap(), "a=b; SameSite=None");
    }

    #[test]
    fn test_serialize_idempotent() {
        let mut cookie = Cookie::with_name_value("a", "b").unwrap();
        cookie.set_path("/").unwrap().set_secure(true);
        assert_eq!(cookie.serialize().unwrap(), cookie.serialize().unwrap());
    }

    #[test]
    fn test_with_name_value_validates() {
        assert_eq!(
            Cookie::with_name_value("bad name", "v").unwrap_err(),
            Exception::InvalidName
        );
        assert_eq!(
            Cookie::with_name_value("n", "bad value").unwrap_err(),
            Exception::InvalidValue
        );
    }

    #[test]
    fn test_to_header_line() {
        let cookie = Cookie::with_name_value("biscuits", "with_tea").unwrap();
        assert_eq!(
            cookie.to_header_line().unwrap(),
            "Set-Cookie: biscuits=with_tea\r\n"
        );
    }
}

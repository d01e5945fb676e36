// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

use crate::{
    config::CookieConfig, cookie::Cookie, exception::Exception, param::SameSite,
    value::AttributeValue,
};

use log::debug;

/// 以建造者模式逐个字段地构造 [`Cookie`]。
///
/// ```
/// use patissier::{CookieBuilder, SameSite};
///
/// # fn main() -> Result<(), patissier::Exception> {
/// let cookie = CookieBuilder::new()
///     .name("pepperoni")?
///     .value("pizza_is_so_good")?
///     .same_site(SameSite::Lax)
///     .max_age(12 * 24 * 60 * 60)?
///     .domain("example.com")?
///     .path("/")?
///     .secure()
///     .http_only()
///     .build();
///
/// assert_eq!(
///     cookie.serialize()?,
///     "pepperoni=pizza_is_so_good; Max-Age=1036800; Domain=example.com; Path=/; Secure; HttpOnly; SameSite=Lax"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CookieBuilder {
    cookie: Cookie,
}

impl CookieBuilder {
    pub fn new() -> Self {
        Self {
            cookie: Cookie::new(),
        }
    }

    /// 以配置文件中的默认属性为起点。配置里的每个值都经过与 setter 相同的校验。
    pub fn from_config(config: &CookieConfig) -> Result<Self, Exception> {
        let mut builder = Self::new();
        if let Some(domain) = config.domain() {
            builder = builder.domain(domain)?;
        }
        if let Some(path) = config.path() {
            builder = builder.path(path)?;
        }
        if let Some(max_age) = config.max_age() {
            builder = builder.max_age(max_age)?;
        }
        if let Some(expires) = config.expires() {
            builder = builder.expires(expires)?;
        }
        if let Some(same_site) = config.same_site() {
            builder = builder.same_site(same_site);
        }
        if config.secure() {
            builder = builder.secure();
        }
        if config.http_only() {
            builder = builder.http_only();
        }
        debug!(
            "已从配置构造CookieBuilder，Domain={:?}，Path={:?}",
            builder.cookie.domain(),
            builder.cookie.path()
        );
        Ok(builder)
    }

    pub fn name(mut self, name: &str) -> Result<Self, Exception> {
        self.cookie.set_name(name)?;
        Ok(self)
    }

    pub fn value(mut self, value: &str) -> Result<Self, Exception> {
        self.cookie.set_value(value)?;
        Ok(self)
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.cookie.set_same_site(same_site);
        self
    }

    pub fn expires<V: Into<AttributeValue>>(mut self, date: V) -> Result<Self, Exception> {
        self.cookie.set_expires(date)?;
        Ok(self)
    }

    pub fn max_age<V: Into<AttributeValue>>(mut self, seconds: V) -> Result<Self, Exception> {
        self.cookie.set_max_age(seconds)?;
        Ok(self)
    }

    pub fn domain(mut self, domain: &str) -> Result<Self, Exception> {
        self.cookie.set_domain(domain)?;
        Ok(self)
    }

    pub fn path<V: Into<AttributeValue>>(mut self, path: V) -> Result<Self, Exception> {
        self.cookie.set_path(path)?;
        Ok(self)
    }

    /// 为 Cookie 设置 `Secure` 属性
    pub fn secure(mut self) -> Self {
        self.cookie.set_secure(true);
        self
    }

    /// 为 Cookie 设置 `HttpOnly` 属性
    pub fn http_only(mut self) -> Self {
        self.cookie.set_http_only(true);
        self
    }

    /// 交出内部的 Cookie，不做额外校验；缺少名称或值的错误要到序列化时才会出现。
    pub fn build(self) -> Cookie {
        self.cookie
    }
}

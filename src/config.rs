use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::{exception::Exception, param::SameSite};

use log::error;
use std::fs::File;
use std::io::prelude::*;

/// 从 TOML 读取的 Cookie 默认属性。
///
/// `path`、`max_age`、`expires` 按任意 TOML 值读入，类型检查留给 `Cookie` 的 setter，
/// 这样 `max_age = "1d"` 会得到带有类型名的错误，而不是笼统的解析失败。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CookieConfig {
    domain: Option<String>,
    path: Option<toml::Value>,
    max_age: Option<toml::Value>,
    expires: Option<toml::Value>,
    same_site: Option<SameSite>,
    #[serde(default)]
    secure: bool,
    #[serde(default)]
    http_only: bool,
}

impl CookieConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml(filename: &str) -> Result<Self, Exception> {
        let mut file = match File::open(filename) {
            Ok(f) => f,
            Err(e) => {
                error!("无法打开配置文件{}：{}", filename, e);
                return Err(Exception::ConfigUnreadable);
            }
        };
        let mut str_val = String::new();
        if let Err(e) = file.read_to_string(&mut str_val) {
            error!("读取配置文件{}失败：{}", filename, e);
            return Err(Exception::ConfigUnreadable);
        }
        Self::from_toml_str(&str_val)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Exception> {
        match toml::from_str(s) {
            Ok(config) => Ok(config),
            Err(e) => {
                error!("无法从配置文件构建Cookie配置：{}", e);
                Err(Exception::ConfigMalformed)
            }
        }
    }
}

impl CookieConfig {
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn path(&self) -> Option<&toml::Value> {
        self.path.as_ref()
    }

    pub fn max_age(&self) -> Option<&toml::Value> {
        self.max_age.as_ref()
    }

    pub fn expires(&self) -> Option<&toml::Value> {
        self.expires.as_ref()
    }

    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }
}

pub mod builder;
pub mod config;
pub mod cookie;
pub mod exception;
pub mod param;
pub mod value;

pub use builder::CookieBuilder;
pub use config::CookieConfig;
pub use cookie::Cookie;
pub use exception::{Exception, ExceptionKind};
pub use param::{ParseSameSiteError, SameSite};
pub use value::AttributeValue;

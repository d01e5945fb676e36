// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # patissier 命令行工具
//!
//! 读取配置文件中的默认属性，结合命令行给出的名称和值构造一个 Cookie，
//! 并把对应的 `Set-Cookie` 响应头打印到标准输出。
//!
//! 用法：`patissier <name> <value> [config.toml]`

use log::{debug, error, info};

use patissier::{CookieBuilder, CookieConfig, Exception};

use std::{env, process};

const DEFAULT_CONFIG: &str = "config/development.toml";
const LOG_CONFIG: &str = "config/log4rs.yaml";

fn main() {
    // 1. 初始化日志系统：日志配置缺失时仍然可以正常输出结果，只是没有日志
    if let Err(e) = log4rs::init_file(LOG_CONFIG, Default::default()) {
        eprintln!("无法从{}初始化日志：{}", LOG_CONFIG, e);
    }

    // 2. 解析命令行参数
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        let program = args
            .first()
            .map(String::as_str)
            .unwrap_or(env!("CARGO_PKG_NAME"));
        eprintln!("用法：{} <name> <value> [config.toml]", program);
        process::exit(2);
    }
    let config_path = args.get(3).map(String::as_str).unwrap_or(DEFAULT_CONFIG);

    // 3. 构造并输出
    match run(&args[1], &args[2], config_path) {
        Ok(line) => print!("{}", line),
        Err(e) => {
            error!("构造Cookie失败：{}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn run(name: &str, value: &str, config_path: &str) -> Result<String, Exception> {
    let config = CookieConfig::from_toml(config_path)?;
    info!("配置文件{}已载入", config_path);
    debug!("{:?}", config);

    let cookie = CookieBuilder::from_config(&config)?
        .name(name)?
        .value(value)?
        .build();
    cookie.to_header_line()
}

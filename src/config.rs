//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use metatile_grid::{GridConfig, Metatile};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub metatile: GridConfig,
}

pub const DEFAULT_CONFIG: &'static str = r#"
[metatile]
size = 1
"#;

impl<'a> Config<'a, GridConfig> for Metatile {
    fn from_config(cfg: &GridConfig) -> Result<Self, String> {
        Metatile::try_from(cfg).map_err(|e| e.to_string())
    }
    fn gen_config() -> String {
        let toml = r#"
[metatile]
# Number of tiles rendered together. The metatile edge is floor(sqrt(size)) tiles.
size = 4
"#;
        toml.to_string()
    }
}

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

fn template_error(e: tera::Error) -> String {
    match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    }
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let mut tera = Tera::default();
    let toml = tera
        .add_raw_template(path, &config_toml)
        .and_then(|_| tera.render(path, &context))
        .map_err(template_error)?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}

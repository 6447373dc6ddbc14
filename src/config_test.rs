//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::config::{parse_config, read_config, ApplicationCfg, Config, DEFAULT_CONFIG};
use metatile_grid::{GridConfig, GridDimensions, Metatile};

#[test]
fn test_load_config() {
    let config = read_config("src/test/metatile.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(config.metatile.size, 4);
    let metatile = Metatile::from_config(&config.metatile).unwrap();
    assert_eq!(
        metatile.dimensions(3).unwrap(),
        GridDimensions { dx: 2, dy: 2 }
    );
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert_eq!(config.metatile.size, 1);

    // missing table or size
    let config: ApplicationCfg = parse_config("".to_string(), "").unwrap();
    assert_eq!(config.metatile, GridConfig::default());
    let config: ApplicationCfg = parse_config("[metatile]\n".to_string(), "").unwrap();
    assert_eq!(config.metatile.size, 1);
}

#[test]
fn test_invalid_size() {
    let config: ApplicationCfg = parse_config("[metatile]\nsize = 0".to_string(), "").unwrap();
    assert_eq!(
        Metatile::from_config(&config.metatile).err(),
        Some("invalid metatile size 0 (expected an integer >= 1)".to_string())
    );

    let config: Result<ApplicationCfg, _> = parse_config("[metatile]\nsize = -4".to_string(), "");
    assert!(config.is_err());
    let config: Result<ApplicationCfg, _> = parse_config("[metatile]\nsize = 2.5".to_string(), "");
    assert!(config.is_err());
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/test/invalid.toml");
    let err = config.err().unwrap();
    assert!(err.starts_with("src/test/invalid.toml - "), "{}", err);

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());

    let config: Result<ApplicationCfg, _> =
        parse_config("[metatile]\nsize = ${SIZE}".to_string(), "");
    assert_eq!(
        "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`",
        config.err().unwrap()
    );
}

#[test]
fn test_env_config() {
    std::env::set_var("METATILE_TEST_SIZE", "16");
    let config: ApplicationCfg = read_config("src/test/metatile_env.toml").unwrap();
    assert_eq!(config.metatile.size, 16);
}

#[test]
fn test_gen_config() {
    let template = <Metatile as Config<GridConfig>>::gen_config();
    let config: ApplicationCfg = parse_config(template, "").unwrap();
    assert_eq!(config.metatile.size, 4);
}

#[test]
fn test_template_errors() {
    let config: Result<ApplicationCfg, _> =
        parse_config("[metatile]\nsize = {{ env.".to_string(), "");
    let err = config.err().unwrap();
    assert!(err.starts_with("Template error: "), "{}", err);

    let config: Result<ApplicationCfg, _> = parse_config(
        "[metatile]\nsize = {{ env.METATILE_UNDEFINED_VARIABLE }}".to_string(),
        "",
    );
    let err = config.err().unwrap();
    assert!(err.starts_with("Template error: "), "{}", err);
}

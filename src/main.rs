//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

mod config;
#[cfg(test)]
mod config_test;

use crate::config::{parse_config, read_config, ApplicationCfg, Config, DEFAULT_CONFIG};
use clap::{App, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use metatile_grid::{GridConfig, Metatile, TileAddress};
use serde_json::Value;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn config_from_args(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath)?
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "")?
    };
    if let Some(size) = args.value_of("size") {
        config.metatile.size = size
            .parse::<u32>()
            .map_err(|_| format!("Error parsing 'size' as integer value: '{}'", size))?;
    }
    Ok(config)
}

fn metatile_from_args(args: &ArgMatches<'_>) -> Result<Metatile, String> {
    let config = config_from_args(args)?;
    let metatile = Metatile::from_config(&config.metatile)?;
    debug!("Using metatile size {}", metatile.size());
    Ok(metatile)
}

fn tile_from_args(args: &ArgMatches<'_>) -> Result<TileAddress, String> {
    args.value_of("tile")
        .ok_or_else(|| "Missing 'tile' argument".to_string())?
        .parse::<TileAddress>()
        .map_err(|e| e.to_string())
}

fn dimensions(args: &ArgMatches<'_>) -> Result<Value, String> {
    let metatile = metatile_from_args(args)?;
    let zoom = args
        .value_of("zoom")
        .ok_or_else(|| "Missing 'zoom' argument".to_string())?;
    let zoom = zoom
        .parse::<u8>()
        .map_err(|_| format!("Error parsing 'zoom' as integer value: '{}'", zoom))?;
    let dims = metatile.dimensions(zoom).map_err(|e| e.to_string())?;
    let pixels = metatile
        .dimensions_in_pixels(zoom)
        .map_err(|e| e.to_string())?;
    Ok(json!({
        "zoom": zoom,
        "dimensions": dims,
        "pixels": pixels,
    }))
}

fn tiles(args: &ArgMatches<'_>) -> Result<Value, String> {
    let metatile = metatile_from_args(args)?;
    let tile = tile_from_args(args)?;
    let origin = metatile.origin_of(&tile).map_err(|e| e.to_string())?;
    let tiles = metatile.tiles(&tile).map_err(|e| e.to_string())?;
    Ok(json!({
        "tile": tile,
        "origin": origin,
        "tiles": tiles,
    }))
}

fn bbox(args: &ArgMatches<'_>) -> Result<Value, String> {
    let metatile = metatile_from_args(args)?;
    let tile = tile_from_args(args)?;
    let bbox = match args.value_of("scope").unwrap_or("span") {
        "span" => metatile.bounding_box(&tile),
        "tile" => metatile.tile_bounding_box(&tile),
        "cell" => metatile.cell_bounding_box(&tile),
        scope => return Err(format!("Unknown bbox scope '{}'", scope)),
    }
    .map_err(|e| e.to_string())?;
    Ok(json!({
        "tile": tile,
        "bbox": bbox.to_array(),
    }))
}

fn execute(subcommand: &str, args: &ArgMatches<'_>) -> Result<Value, String> {
    match subcommand {
        "dimensions" => dimensions(args),
        "tiles" => tiles(args),
        "bbox" => bbox(args),
        _ => Err(format!("Unknown subcommand '{}'", subcommand)),
    }
}

fn print_result(result: Result<Value, String>) {
    match result.and_then(|value| serde_json::to_string_pretty(&value).map_err(|e| e.to_string()))
    {
        Ok(out) => println!("{}", out),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1)
        }
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("metatile")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Metatile grid calculator for Spherical Mercator tile pyramids")
        .subcommand(SubCommand::with_name("dimensions")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --size=[NUM] 'Metatile size (overrides config)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --zoom=<LEVEL> 'Zoom level'")
                        .about("Metatile dimensions in tiles and pixels"))
        .subcommand(SubCommand::with_name("tiles")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --size=[NUM] 'Metatile size (overrides config)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --tile=<TILE> 'Tile address z/x/y'")
                        .about("Tiles rendered together with a tile"))
        .subcommand(SubCommand::with_name("bbox")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --size=[NUM] 'Metatile size (overrides config)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --tile=<TILE> 'Tile address z/x/y'
                                              --scope=[span|tile|cell] 'Extent of size x size tiles, the tile or its metatile (Default: span)'")
                        .about("Spherical Mercator bounding box"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"))
}

fn main() {
    dotenv().ok();
    let mut app = app();

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        // Usage errors go to stderr with exit code 1, --help and --version to stdout
        Result::Err(e) => e.exit(),
        Result::Ok(matches) => match matches.subcommand() {
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", <Metatile as Config<GridConfig>>::gen_config());
            }
            (subcommand, Some(sub_m)) => {
                init_logger(sub_m);
                print_result(execute(subcommand, sub_m));
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}

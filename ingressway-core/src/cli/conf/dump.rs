use crate::conf::load_ingress_config;
use crate::render::RenderedConfig;
use serde::Serialize;
use std::path::PathBuf;

pub fn dump(path: PathBuf, json: bool, yaml: bool, resolved: bool) -> anyhow::Result<()> {
    let ingress = load_ingress_config(&path)?;

    if resolved {
        emit(&RenderedConfig::from_ingress(&ingress), json, yaml)
    } else {
        emit(&ingress, json, yaml)
    }
}

fn emit<T: Serialize>(value: &T, json: bool, yaml: bool) -> anyhow::Result<()> {
    if yaml && !json {
        dump_yaml(value)
    } else {
        dump_json(value)
    }
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}

use crate::conf::{ConfigError, load_ingress_config};
use crate::render::RenderedConfig;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_ingress_config(&path) {
        Ok(ingress) => {
            let rendered = RenderedConfig::from_ingress(&ingress);
            let backends: usize = ingress.upstreams.iter().map(|u| u.backends.len()).sum();
            let empty = ingress.upstreams.iter().filter(|u| u.is_empty()).count();

            println!("✔ Snapshot loaded successfully");
            if ingress.is_sorted() {
                println!("✔ Collections in canonical order");
            } else {
                println!("✘ Collections not in canonical order");
            }
            println!("✔ {} upstreams ({} empty)", ingress.upstreams.len(), empty);
            println!("✔ {} backends", backends);
            println!("✔ {} servers", ingress.servers.len());
            println!("✔ {} locations", ingress.locations().count());
            println!(
                "✔ {} locations redirect to HTTPS",
                rendered.redirecting_locations()
            );
            println!(
                "✔ {} tcp / {} udp upstreams",
                ingress.tcp_upstreams.len(),
                ingress.udp_upstreams.len()
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{} {}", "error:".red().bold(), err);
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::UnsupportedFormat { .. } => Some(
            "Snapshots are read according to their extension.\n\
             \n\
             Rename the file to end in .json, .yaml, .yml or .hcl.",
        ),

        ConfigError::UnknownUpstream { .. } => Some(
            "Locations must reference an upstream declared in the same snapshot.\n\
             \n\
             Example:\n\
             \n\
             upstreams:\n\
             \x20 - name: web\n\
             \x20   backends: [{ address: 10.0.0.1, port: \"80\" }]\n\
             servers:\n\
             \x20 - name: shop.example.com\n\
             \x20   locations: [{ path: /, upstream: web }]",
        ),

        ConfigError::Parse { .. } => Some(
            "Check the snapshot syntax.\n\
             \n\
             Host config values are typed: `sslRedirect` only accepts true or false.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}

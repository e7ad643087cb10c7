use anyhow::{Context, Result};
use markdown_pages_config::{Config, normalize_base_path};
use markdown_pages_engine::site::{AssetSync, FsAssetSync, PageGenerator};
use std::env;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("markdown-pages starting up");

    let args: Vec<String> = env::args().collect();
    let base_path_arg = match args.len() {
        1 => None,
        2 => Some(args[1].clone()),
        _ => {
            let program_name = args
                .first()
                .cloned()
                .unwrap_or_else(|| "markdown-pages".to_string());
            eprintln!("Usage: {program_name} [base-path]");
            process::exit(1);
        }
    };

    if let Err(e) = run(base_path_arg) {
        log::error!("Site generation failed: {e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(base_path_arg: Option<String>) -> Result<()> {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    let config = Config::load().context("Failed to load config file")?;

    let base_path = match base_path_arg {
        Some(arg) => {
            log::info!("Using base path from CLI argument: {arg}");
            normalize_base_path(&arg)
        }
        None => config.normalized_base_path(),
    };
    log::info!("Base path: {base_path}");

    log::info!(
        "Syncing static files from {} to {}",
        config.static_path.display(),
        config.output_path.display()
    );
    FsAssetSync
        .sync(&config.static_path, &config.output_path)
        .context("Failed to copy static files")?;

    let generator = PageGenerator::from_template_file(&config.template_path, base_path)
        .context("Failed to read page template")?;
    let count = generator
        .generate_tree(&config.content_path, &config.output_path)
        .with_context(|| {
            format!(
                "Failed to generate pages from {}",
                config.content_path.display()
            )
        })?;

    log::info!(
        "Generated {count} page(s) into {}",
        config.output_path.display()
    );
    Ok(())
}

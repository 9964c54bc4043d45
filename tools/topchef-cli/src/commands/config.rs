//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration actuelle");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("fichier", &path.display().to_string()),
        None => ctx.output.kv("fichier", "(valeurs par défaut)"),
    }

    println!();
    println!("[store]");
    ctx.output.kv("path", &ctx.config.store.path);
    ctx.output.kv("key", &ctx.config.store.key);
    ctx.output.kv(
        "resolved",
        &ctx.resolve_path(&ctx.config.store.path).display().to_string(),
    );

    println!();
    println!("[channel]");
    ctx.output.kv("base_url", &ctx.config.channel.base_url);
    ctx.output.kv("phone", &ctx.config.channel.phone);

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = ctx.config.get_value(key)?;

    if ctx.output.is_json() {
        println!(r#"{{"key": "{}", "value": {}}}"#, key, value);
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = find_config_file(ctx) else {
        bail!("Aucun fichier de configuration. Lancez `topchef config init` pour en créer un.");
    };
    let config_path = config_path.to_string_lossy().to_string();

    let mut config = CliConfig::load(&config_path)?;
    config.set_value(key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("{} = {} enregistré", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Le fichier de configuration existe déjà : {}. Utilisez --force pour l'écraser.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Créé : {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Vérification de la configuration");

    let (errors, warnings) = ctx.config.problems();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration valide");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Erreur : {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Attention : {}", warning));
    }

    if !errors.is_empty() {
        bail!("La configuration contient {} erreur(s)", errors.len());
    }

    ctx.output.success("Configuration valide (avec avertissements)");

    Ok(())
}

/// The file the active config was loaded from, else one in the working directory.
fn find_config_file(ctx: &Context) -> Option<PathBuf> {
    if let Some(path) = &ctx.config_path {
        return Some(path.clone());
    }
    CONFIG_NAMES
        .iter()
        .map(|name| ctx.cwd.join(name))
        .find(|path| path.exists())
}

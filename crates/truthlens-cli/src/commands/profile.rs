//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the profile command, saving changes to `config_path`.
pub fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, config_path, name, formatter),
        ProfileAction::Set {
            name,
            endpoint,
            model,
            timeout_secs,
        } => set_profile(
            config,
            config_path,
            name,
            ProfileUpdate {
                endpoint,
                model,
                timeout_secs,
            },
            formatter,
        ),
        ProfileAction::Delete { name } => delete_profile(config, config_path, name, formatter),
    }
}

/// Fields to change on a profile; `None` keeps the current value.
#[derive(Debug, Default)]
struct ProfileUpdate {
    endpoint: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    let mut names: Vec<&String> = config.profiles.keys().collect();
    names.sort();

    println!("Available profiles:");
    for name in names {
        let profile = &config.profiles[name];
        if name == &config.active_profile {
            println!("* {}", formatter.success(name));
        } else {
            println!("  {}", name);
        }
        print_profile_fields(profile, "    ");
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    print_profile_fields(profile, "  ");

    Ok(())
}

fn print_profile_fields(profile: &Profile, indent: &str) {
    println!("{}Endpoint: {}", indent, profile.endpoint);
    println!("{}Model: {}", indent, profile.model);
    println!("{}Timeout: {}s", indent, profile.timeout_secs);
}

/// Switch to a different profile.
fn switch_profile(
    config: &mut Config,
    config_path: &Path,
    name: String,
    formatter: &Formatter,
) -> Result<()> {
    config.switch_profile(name.clone())?;
    config.save_to(config_path)?;
    println!(
        "{}",
        formatter.success(&format!("Switched to profile '{}'", name))
    );
    Ok(())
}

/// Create or update a profile.
fn set_profile(
    config: &mut Config,
    config_path: &Path,
    name: String,
    update: ProfileUpdate,
    formatter: &Formatter,
) -> Result<()> {
    let (mut profile, action) = match config.profiles.get(&name) {
        Some(existing) => (existing.clone(), "Updated"),
        None => (Profile::default(), "Created"),
    };

    if let Some(endpoint) = update.endpoint {
        profile.endpoint = endpoint;
    }
    if let Some(model) = update.model {
        profile.model = model;
    }
    if let Some(timeout_secs) = update.timeout_secs {
        profile.timeout_secs = timeout_secs;
    }

    let previous = config.profiles.insert(name.clone(), profile);
    if let Err(e) = config.validate() {
        match previous {
            Some(p) => config.set_profile(name, p),
            None => {
                config.profiles.remove(&name);
            }
        }
        return Err(e);
    }
    config.save_to(config_path)?;

    println!(
        "{}",
        formatter.success(&format!("{} profile '{}'", action, name))
    );

    Ok(())
}

/// Delete a profile.
fn delete_profile(
    config: &mut Config,
    config_path: &Path,
    name: String,
    formatter: &Formatter,
) -> Result<()> {
    if !config.profiles.contains_key(&name) {
        println!(
            "{}",
            formatter.warning(&format!("Profile '{}' does not exist", name))
        );
        return Ok(());
    }

    config.delete_profile(&name)?;
    config.save_to(config_path)?;
    println!(
        "{}",
        formatter.success(&format!("Deleted profile '{}'", name))
    );

    Ok(())
}

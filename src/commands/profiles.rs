//! Profile listing and inspection
//!
//! `profiles` prints the table; `show` prints how one profile resolves
//! against the defaults, which is what `deploy` would use.

use std::path::Path;

use anyhow::Result;

use simdeploy::config::Settings;
use simdeploy::domain::entities::ResolvedTarget;

pub fn cmd_profiles(config: Option<&Path>, json: bool) -> Result<()> {
    let settings = super::load_settings(config)?;

    if json {
        let items: Vec<serde_json::Value> = settings
            .profiles
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "hosts": p.hosts.hosts(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "profiles",
                "source": settings.source.as_ref().map(|s| s.display().to_string()),
                "profiles": items,
            })
        );
        return Ok(());
    }

    print!("{}", render_profiles(&settings));
    Ok(())
}

pub fn cmd_show(config: Option<&Path>, name: &str, json: bool) -> Result<()> {
    let settings = super::load_settings(config)?;
    let profile = settings
        .profile(name)
        .ok_or_else(|| super::unknown_profile(&settings, name))?;
    let target = settings.context().resolve(profile);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "profile",
                "name": target.profile,
                "hosts": target.hosts,
                "user": target.user,
                "port": target.port,
                "remote_dir": target.remote_dir,
                "repository": target.repository,
                "forward_agent": target.forward_agent,
            })
        );
        return Ok(());
    }

    print!("{}", render_target(&target));
    Ok(())
}

fn render_profiles(settings: &Settings) -> String {
    let width = settings
        .profiles
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for profile in &settings.profiles {
        out.push_str(&format!(
            "{:<width$}  {}\n",
            profile.name,
            profile.hosts.hosts().join(", "),
            width = width
        ));
    }
    if let Some(source) = &settings.source {
        out.push_str(&format!("\n(config: {})\n", source.display()));
    }
    out
}

fn render_target(target: &ResolvedTarget) -> String {
    let mut out = format!("Profile:    {}\n", target.profile);
    out.push_str("Hosts:\n");
    for host in &target.hosts {
        out.push_str(&format!("  - {}\n", target.connection(host)));
    }
    out.push_str(&format!(
        "User:       {}\n",
        target.user.as_deref().unwrap_or("(ssh default)")
    ));
    if let Some(port) = target.port {
        out.push_str(&format!("Port:       {}\n", port));
    }
    out.push_str(&format!("Directory:  {}\n", target.remote_dir));
    out.push_str(&format!("Repository: {}\n", target.repository));
    out
}

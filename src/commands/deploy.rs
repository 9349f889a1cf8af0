//! Deploy command handler

use std::path::Path;

use anyhow::Result;
use tracing::info;

use simdeploy::application::DeployOptions;
use simdeploy::presentation::factory::create_deploy_use_case;
use simdeploy::GitRef;

/// Options collected from the command line
pub struct DeployArgs<'a> {
    pub config: Option<&'a Path>,
    pub profile: &'a str,
    pub git_ref: GitRef,
    pub keep_going: bool,
    pub dry_run: bool,
    pub json: bool,
}

/// Run the deploy and return the process exit code
pub fn cmd_deploy(args: DeployArgs<'_>) -> Result<i32> {
    let settings = super::load_settings(args.config)?;
    let profile = settings
        .profile(args.profile)
        .ok_or_else(|| super::unknown_profile(&settings, args.profile))?;

    let mut context = settings.context();
    let target = context.select(profile);
    info!(
        profile = %target.profile,
        hosts = target.hosts.len(),
        dir = %target.remote_dir,
        "selected target"
    );

    let options = DeployOptions::new(args.git_ref)
        .with_keep_going(args.keep_going)
        .with_dry_run(args.dry_run);
    if profile.is_multi_host() {
        info!(policy = ?options.failure_policy, "multi-host target");
    }

    let use_case = create_deploy_use_case(&settings, args.json);
    let report = use_case.execute(&context, &options)?;

    Ok(report.exit_code())
}

use super::context::AppContext;
use anyhow::Result;
use familia_infrastructure::FamiliaPaths;
use familia_application::QuickMatch;
use familia_core::gateway::MatchingGateway;
use familia_core::matching::{BrowseProfile, MatchPhase, RoleBrowseQuery};
use tokio_util::sync::CancellationToken;

fn print_profile(profile: &BrowseProfile) {
    let verified = if profile.is_verified { " ✓" } else { "" };
    println!(
        "  {}{} [{}] {} ({:.1}) id={}",
        profile.display_name,
        verified,
        profile.offering_role.as_deref().unwrap_or("-"),
        profile.country,
        profile.care_score,
        profile.id
    );
}

pub async fn browse(paths: &FamiliaPaths, role: Option<String>, all: bool) -> Result<()> {
    let ctx = AppContext::open(paths).await?;

    let profiles = match (all, role) {
        (true, _) => ctx.client.browse_all().await?,
        (false, Some(role)) => {
            let query = RoleBrowseQuery::new(role, ctx.client.is_authenticated());
            let raw = ctx.client.browse(&query).await?;
            query.filter(raw)
        }
        (false, None) => anyhow::bail!("Pass a ROLE or --all"),
    };

    println!("{} member(s)", profiles.len());
    for profile in &profiles {
        print_profile(profile);
    }
    Ok(())
}

/// Runs one quick-match search; Ctrl-C cancels it.
pub async fn quick_match(paths: &FamiliaPaths, my_role: &str, partner_role: &str) -> Result<()> {
    let ctx = AppContext::open(paths).await?;
    let flow = QuickMatch::new(
        ctx.client.clone(),
        ctx.toasts.clone(),
        ctx.config.quick_match,
    )
    .authenticated(ctx.client.is_authenticated());
    flow.choose_my_role(my_role)?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    println!("🔍 Searching for a {}...", partner_role);
    match flow.search(partner_role, cancel).await? {
        MatchPhase::Found { matches, .. } => {
            println!("🎉 Found {} match(es)", matches.len());
            for profile in &matches {
                print_profile(profile);
            }
        }
        MatchPhase::NotFound { .. } => println!("😔 Nobody available right now. Try again later."),
        _ => println!("Search cancelled"),
    }
    Ok(())
}

use super::context::AppContext;
use anyhow::Result;
use familia_infrastructure::FamiliaPaths;

pub async fn login(paths: &FamiliaPaths, email: &str, password: &str) -> Result<()> {
    let ctx = AppContext::open(paths).await?;
    let profile = ctx.session.login(email, password).await?;
    println!("✅ Signed in as {} ({})", profile.display_name, profile.id);
    Ok(())
}

pub async fn logout(paths: &FamiliaPaths) -> Result<()> {
    let ctx = AppContext::open(paths).await?;
    ctx.session.logout().await?;
    println!("👋 Signed out");
    Ok(())
}

use super::context::AppContext;
use anyhow::Result;
use familia_infrastructure::FamiliaPaths;
use familia_core::gateway::TranslationGateway;

pub async fn translate(paths: &FamiliaPaths, text: &str, from: Option<&str>, to: &str) -> Result<()> {
    let ctx = AppContext::open(paths).await?;
    let translation = ctx.client.translate(text, from, to).await?;

    println!("{}", translation.translated_text);
    if translation.has_idiom
        && let Some(explanation) = &translation.idiom_explanation
    {
        println!("💡 Idiom: {}", explanation);
    }
    if let Some(note) = &translation.cultural_note {
        println!("🌍 {}", note);
    }
    Ok(())
}

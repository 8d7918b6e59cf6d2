use crate::FamiliaClient;
use async_trait::async_trait;
use familia_core::chat::{SupportedLanguage, Translation};
use familia_core::error::Result;
use familia_core::gateway::TranslationGateway;
use serde::Deserialize;

#[derive(Deserialize)]
struct LanguagesResponse {
    #[serde(default)]
    languages: Vec<SupportedLanguage>,
}

#[async_trait]
impl TranslationGateway for FamiliaClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<Translation> {
        let mut query = vec![("text", text.to_string())];
        if let Some(source) = source_lang
            && !source.is_empty()
        {
            query.push(("source_lang", source.to_string()));
        }
        query.push(("target_lang", target_lang.to_string()));

        self.api.post_with_query("/translate/", &query).await
    }

    async fn languages(&self) -> Result<Vec<SupportedLanguage>> {
        let response: LanguagesResponse = self.api.get("/translate/languages").await?;
        Ok(response.languages)
    }
}

//! Visitor-facing chat assistant.
//!
//! The assistant wraps an external text-generation API behind the [`ChatApi`]
//! trait and prepends a fixed company-context preamble to every question.
//! When the API fails, the visitor still gets an answer: the error is logged
//! and a canned keyword-matched reply is returned instead. API failures never
//! surface to the caller.

/// Keyword-matched canned replies used when the API is unavailable
pub mod fallback;

use crate::config::company::CompanyProfile;
use crate::errors::Result;
use async_trait::async_trait;
use tracing::warn;

/// External text-generation collaborator: prompt in, reply out, may fail.
#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// The site chat assistant.
pub struct Assistant {
    api: Box<dyn ChatApi>,
    profile: CompanyProfile,
}

impl Assistant {
    #[must_use]
    pub fn new(api: Box<dyn ChatApi>, profile: CompanyProfile) -> Self {
        Self { api, profile }
    }

    /// Builds the full prompt: company context preamble plus the question.
    #[must_use]
    pub fn build_prompt(&self, question: &str) -> String {
        let services = self
            .profile
            .services
            .iter()
            .map(|service| format!("- {service}"))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are a helpful assistant for {name}, {tagline}.\n\
             Our services include:\n{services}\n\n\
             Contact: {email}, {phone}\n\n\
             Please provide helpful, concise responses about our services, \
             pricing (mention we offer competitive rates and custom quotes), \
             project timelines, or general questions. Keep responses \
             friendly, professional, and under 150 words.\n\n\
             User question: {question}",
            name = self.profile.name,
            tagline = self.profile.tagline,
            email = self.profile.email,
            phone = self.profile.phone,
        )
    }

    /// Answers a visitor question. Always returns a reply: an API failure
    /// degrades to the keyword-matched canned response.
    pub async fn ask(&self, question: &str) -> String {
        match self.api.generate(&self.build_prompt(question)).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "chat api failed, using canned reply");
                fallback::canned_reply(question).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    struct CannedApi(&'static str);

    #[async_trait]
    impl ChatApi for CannedApi {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingApi;

    #[async_trait]
    impl ChatApi for FailingApi {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(Error::ChatApi {
                message: "quota exhausted".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn successful_api_reply_is_returned_verbatim() {
        let assistant = Assistant::new(
            Box::new(CannedApi("We build data pipelines.")),
            CompanyProfile::default(),
        );
        assert_eq!(assistant.ask("what do you do").await, "We build data pipelines.");
    }

    #[tokio::test]
    async fn api_failure_degrades_to_canned_reply() {
        let assistant = Assistant::new(Box::new(FailingApi), CompanyProfile::default());
        let reply = assistant.ask("How much does a website cost?").await;
        assert!(reply.contains("custom quotes"));
    }

    #[test]
    fn prompt_carries_company_context_and_question() {
        let assistant = Assistant::new(Box::new(FailingApi), CompanyProfile::default());
        let prompt = assistant.build_prompt("Do you do mobile apps?");
        assert!(prompt.contains("goCode Softwares"));
        assert!(prompt.contains("info@gocodesoftwares.com"));
        assert!(prompt.ends_with("Do you do mobile apps?"));
    }
}

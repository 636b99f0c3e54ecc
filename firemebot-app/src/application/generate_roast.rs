use crate::domain::{RoastEnvelope, RoastRequest};
use crate::infrastructure::openai::OpenAiClient;
use crate::infrastructure::security::{Fingerprinter, InputSanitizer};
use firemebot_errors::AppError;

pub struct GenerateRoast {
    openai: OpenAiClient,
    fingerprinter: Fingerprinter,
}

impl GenerateRoast {
    pub fn new(openai: OpenAiClient, fingerprinter: Fingerprinter) -> Self {
        Self {
            openai,
            fingerprinter,
        }
    }

    /// Full `POST /api/roast` flow for a raw request body.
    pub async fn handle(
        &self,
        raw_body: &[u8],
        client_ip: Option<&str>,
    ) -> Result<RoastEnvelope, AppError> {
        let body = InputSanitizer::parse_body(raw_body);
        let request = InputSanitizer::validate_title(&body)?;
        self.execute(request, client_ip).await
    }

    pub async fn execute(
        &self,
        request: RoastRequest,
        client_ip: Option<&str>,
    ) -> Result<RoastEnvelope, AppError> {
        let fingerprint = self.fingerprinter.fingerprint(client_ip);
        let roast = self.openai.generate_roast(&request.title, fingerprint).await?;
        Ok(RoastEnvelope::new(roast, request.title))
    }
}

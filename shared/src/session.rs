//! Per-tab analysis state.
//!
//! Every asynchronous step (file read, remote call) is issued a [`Ticket`].
//! Starting a newer step or removing the image invalidates older tickets, so
//! a late completion from superseded work is dropped instead of clobbering
//! the current state.

use crate::error::AnalysisError;
use crate::ingest::{ImageData, check_mime};
use crate::model::{AnalysisRequest, AnalysisResult, Platform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    ReadingImage,
    AwaitingResponse,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    phase: Phase,
    image: Option<ImageData>,
    result: Option<AnalysisResult>,
    error: Option<String>,
    platform: Platform,
    credential: String,
    current: Ticket,
}

impl AnalysisSession {
    pub fn new(credential: String) -> Self {
        Self { credential, ..Default::default() }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn set_credential(&mut self, credential: String) {
        self.credential = credential;
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::ReadingImage | Phase::AwaitingResponse)
    }

    pub fn can_submit(&self) -> bool {
        self.image.is_some() && !self.is_busy()
    }

    fn next_ticket(&mut self) -> Ticket {
        self.current = Ticket(self.current.0 + 1);
        self.current
    }

    fn reject(&mut self, err: AnalysisError) -> AnalysisError {
        self.error = Some(err.user_message());
        err
    }

    /// A file was picked, dropped or pasted. Non-images only set the error
    /// text; everything else starts a read that supersedes pending work.
    pub fn offer_file(&mut self, mime_type: &str) -> Result<Ticket, AnalysisError> {
        if let Err(err) = check_mime(mime_type) {
            return Err(self.reject(err));
        }
        self.phase = Phase::ReadingImage;
        Ok(self.next_ticket())
    }

    /// Returns `false` when the read belonged to superseded work.
    pub fn image_read(&mut self, ticket: Ticket, outcome: Result<ImageData, AnalysisError>) -> bool {
        if ticket != self.current || self.phase != Phase::ReadingImage {
            log::debug!("Dropping stale image read {:?}", ticket);
            return false;
        }
        match outcome {
            Ok(image) => {
                self.image = Some(image);
                self.result = None;
                self.error = None;
                self.phase = Phase::Idle;
            }
            Err(err) => {
                self.image = None;
                self.result = None;
                self.reject(err);
                self.phase = Phase::Failed;
            }
        }
        true
    }

    pub fn remove_image(&mut self) {
        self.next_ticket();
        self.image = None;
        self.result = None;
        self.error = None;
        self.phase = Phase::Idle;
    }

    /// Validate local preconditions and move to `AwaitingResponse`. The
    /// returned request is what the caller sends.
    pub fn submit(&mut self) -> Result<(Ticket, AnalysisRequest), AnalysisError> {
        if self.is_busy() {
            return Err(AnalysisError::busy());
        }
        if self.image.is_none() {
            return Err(self.reject(AnalysisError::no_image()));
        }
        if self.credential.trim().is_empty() {
            return Err(self.reject(AnalysisError::missing_credential()));
        }

        let request = self
            .image
            .as_ref()
            .map(|image| AnalysisRequest {
                image_data: image.base64.clone(),
                mime_type: image.mime_type.clone(),
                platform: self.platform,
            })
            .ok_or_else(AnalysisError::no_image)?;
        self.error = None;
        self.result = None;
        self.phase = Phase::AwaitingResponse;
        Ok((self.next_ticket(), request))
    }

    /// Returns `false` when the response belonged to superseded work.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        if ticket != self.current || self.phase != Phase::AwaitingResponse {
            log::debug!("Dropping stale analysis response {:?}", ticket);
            return false;
        }
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.result = None;
                self.reject(err);
                self.phase = Phase::Failed;
            }
        }
        true
    }
}

//! Profile form state and submission lifecycle.
//!
//! [`ProfileFormController`] owns every piece of form state. The UI feeds it
//! field edits, picture picks and submit clicks; it never holds a borrow
//! across an await, so the async halves (preview reads and submission) are
//! split into tickets that the caller drives and then reports back.

use employee_profile_shared::{
    data_url, validate, CountryCode, FormField, FormFields, PictureError, PictureLimits,
    ProfilePayload, SubmitError, UnknownField, ValidationErrors,
};

use crate::config::FormConfig;
use crate::notify::{Notice, Notifier};
use crate::picture_source::SelectedPicture;
use crate::submission::ProfileSubmitter;

/// Text shown after a successful submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Profile submitted";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Why a submit click did not start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    AlreadySubmitting,
    Invalid(ValidationErrors),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted,
    Failed(SubmitError),
    Rejected(SubmitRejection),
}

/// Handle for one in-flight preview read.
#[derive(Debug, Clone)]
pub struct PreviewTicket {
    generation: u64,
    picture: SelectedPicture,
}

impl PreviewTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read the picked file and encode it as a `data:` URI.
    pub async fn load(&self) -> Result<String, PictureError> {
        let bytes = self.picture.read_bytes().await?;
        Ok(data_url(self.picture.mime(), &bytes))
    }
}

/// Snapshot of the form taken when a submission starts.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    fields: FormFields,
    country_code: CountryCode,
    picture: Option<SelectedPicture>,
}

impl PendingSubmission {
    pub async fn into_payload(self) -> Result<ProfilePayload, SubmitError> {
        let picture = match &self.picture {
            Some(picture) => Some(picture.to_part().await?),
            None => None,
        };
        Ok(ProfilePayload::assemble(&self.fields, self.country_code, picture))
    }

    /// Hand the snapshot to the submitter and tell the user how it went.
    pub async fn deliver(
        self,
        submitter: &dyn ProfileSubmitter,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        let result = match self.into_payload().await {
            Ok(payload) => submitter
                .submit(&payload)
                .await
                .map(|()| payload.diagnostic_json()),
            Err(e) => Err(e),
        };

        match result {
            Ok(diagnostics) => {
                crate::log_info!("Submitted: {}", diagnostics);
                notifier.notify(Notice::success(SUBMIT_SUCCESS_MESSAGE));
                SubmitOutcome::Submitted
            }
            Err(e) => {
                crate::log_error!("Profile submission failed: {}", e);
                notifier.notify(Notice::failure(e.user_message()));
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// Runs its reset closure exactly once, on drop. Covers cancelled futures
/// and panicking submitters as well as normal completion.
pub struct FinishOnDrop<F: FnOnce()> {
    reset: Option<F>,
}

impl<F: FnOnce()> FinishOnDrop<F> {
    pub fn new(reset: F) -> Self {
        Self { reset: Some(reset) }
    }
}

impl<F: FnOnce()> Drop for FinishOnDrop<F> {
    fn drop(&mut self) {
        if let Some(reset) = self.reset.take() {
            reset();
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileFormController {
    fields: FormFields,
    country_code: CountryCode,
    picture: Option<SelectedPicture>,
    preview: Option<String>,
    preview_generation: u64,
    picture_warning: Option<String>,
    errors: ValidationErrors,
    phase: SubmitPhase,
    picture_limits: PictureLimits,
    enforce_picture_limits: bool,
}

impl Default for ProfileFormController {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

impl ProfileFormController {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            fields: FormFields::default(),
            country_code: config.default_country_code,
            picture: None,
            preview: None,
            preview_generation: 0,
            picture_warning: None,
            errors: ValidationErrors::default(),
            phase: SubmitPhase::Idle,
            picture_limits: config.picture_limits.clone(),
            enforce_picture_limits: config.enforce_picture_limits,
        }
    }

    // --- Accessors ---

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    pub fn country_code(&self) -> CountryCode {
        self.country_code
    }

    pub fn picture(&self) -> Option<&SelectedPicture> {
        self.picture.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Advisory message when the current picture is outside the limits.
    pub fn picture_warning(&self) -> Option<&str> {
        self.picture_warning.as_deref()
    }

    pub fn picture_limits(&self) -> &PictureLimits {
        &self.picture_limits
    }

    /// Errors from the most recent submit attempt.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    // --- Edits ---

    /// Replace one field. Errors are left alone until the next submit.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Same as [`update_field`](Self::update_field) for names coming from
    /// input events.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field = name.parse::<FormField>()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn set_country_code(&mut self, code: CountryCode) {
        self.country_code = code;
    }

    // --- Picture ---

    /// Record a newly picked picture and return the ticket for its preview
    /// read. `None` leaves any earlier selection in place.
    ///
    /// Every accepted pick bumps the preview generation, so a read started
    /// for an older pick can no longer land.
    pub fn select_picture(
        &mut self,
        picture: Option<SelectedPicture>,
    ) -> Result<Option<PreviewTicket>, PictureError> {
        let Some(picture) = picture else {
            return Ok(None);
        };

        let warning = match self.picture_limits.check(picture.size(), picture.mime()) {
            Ok(()) => None,
            Err(e) if self.enforce_picture_limits => {
                crate::log_warn!("Rejected picture {}: {}", picture.name(), e);
                return Err(e);
            }
            Err(e) => {
                crate::log_warn!("Picture {} is outside the advised limits: {}", picture.name(), e);
                Some(e.to_string())
            }
        };

        self.preview_generation += 1;
        self.preview = None;
        self.picture_warning = warning;
        self.picture = Some(picture.clone());

        Ok(Some(PreviewTicket {
            generation: self.preview_generation,
            picture,
        }))
    }

    /// Store the result of a preview read. Returns `false` when the read
    /// belongs to a superseded pick and was discarded.
    pub fn apply_preview(&mut self, generation: u64, result: Result<String, PictureError>) -> bool {
        if generation != self.preview_generation {
            crate::log_debug!(
                "Discarding stale preview (generation {}, current {})",
                generation,
                self.preview_generation
            );
            return false;
        }

        match result {
            Ok(url) => self.preview = Some(url),
            Err(e) => {
                crate::log_error!("Failed to build picture preview: {}", e);
                self.preview = None;
            }
        }
        true
    }

    // --- Validation and submission ---

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.fields)
    }

    /// Start a submission: Idle -> Submitting.
    ///
    /// Validation errors are published to the controller whether or not
    /// they block the attempt.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejection> {
        if self.is_submitting() {
            crate::log_debug!("Ignoring submit while another is in flight");
            return Err(SubmitRejection::AlreadySubmitting);
        }

        self.errors = self.validate();
        if !self.errors.is_empty() {
            crate::log_debug!("Submit blocked by {} validation error(s)", self.errors.len());
            return Err(SubmitRejection::Invalid(self.errors.clone()));
        }

        self.phase = SubmitPhase::Submitting;
        Ok(PendingSubmission {
            fields: self.fields.clone(),
            country_code: self.country_code,
            picture: self.picture.clone(),
        })
    }

    /// Back to Idle, whatever the outcome. Field values are kept.
    pub fn finish_submit(&mut self) {
        self.phase = SubmitPhase::Idle;
    }

    /// Run a whole submission against `self`. Meant for callers that can
    /// hold the controller mutably for the duration.
    pub async fn submit(
        &mut self,
        submitter: &dyn ProfileSubmitter,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        let phase = &mut self.phase;
        let _finish = FinishOnDrop::new(move || *phase = SubmitPhase::Idle);
        pending.deliver(submitter, notifier).await
    }
}

//! Reservation dialog state.
//!
//! The dialog holds a small contact form and walks a fixed sequence:
//! editing -> submitting (simulated delay) -> success screen -> reset and
//! close. There is no backend yet; the assembled [`ReservationRequest`] is
//! serialization-ready for whichever submission endpoint gets wired in
//! later, and today it is only logged.

use std::time::Duration;

use bevy::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::config::{SUBMIT_SECONDS, SUCCESS_SECONDS};
use crate::zones::Zone;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ReservationForm {
    /// Name and phone are required; email and message are optional.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.phone.trim().is_empty() {
            return Err(FormError::MissingPhone);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("full name is required")]
    MissingName,
    #[error("phone number is required")]
    MissingPhone,
}

/// What a real backend would receive. Deposit is 10% of the zone's
/// current plot price.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub zone_id: String,
    pub deposit: u64,
}

impl ReservationRequest {
    pub fn new(form: &ReservationForm, zone: &Zone) -> Self {
        Self {
            name: form.name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            zone_id: zone.id.clone(),
            deposit: zone.deposit(),
        }
    }
}

#[derive(Debug)]
pub enum DialogPhase {
    Editing,
    Submitting(Timer),
    Success(Timer),
}

#[derive(Resource)]
pub struct ReservationDialog {
    pub open: bool,
    /// Zone whose pricing the dialog shows. Set when the dialog opens.
    pub zone_id: Option<String>,
    pub phase: DialogPhase,
    pub form: ReservationForm,
    pub error: Option<FormError>,
    pending: Option<ReservationRequest>,
}

impl Default for ReservationDialog {
    fn default() -> Self {
        Self {
            open: false,
            zone_id: None,
            phase: DialogPhase::Editing,
            form: ReservationForm::default(),
            error: None,
            pending: None,
        }
    }
}

impl ReservationDialog {
    pub fn open_for(&mut self, zone_id: &str) {
        self.open = true;
        self.zone_id = Some(zone_id.to_owned());
        self.phase = DialogPhase::Editing;
        self.error = None;
    }

    /// Closing discards any in-flight timer and resets the form.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, DialogPhase::Submitting(_))
    }

    /// Validate the form and start the simulated submission. Validation
    /// failures keep the user's input and surface inline.
    pub fn submit(&mut self, zone: &Zone) -> Result<(), FormError> {
        if let Err(e) = self.form.validate() {
            self.error = Some(e);
            return Err(e);
        }
        self.error = None;
        self.pending = Some(ReservationRequest::new(&self.form, zone));
        self.phase = DialogPhase::Submitting(Timer::from_seconds(SUBMIT_SECONDS, TimerMode::Once));
        Ok(())
    }

    /// Advance the submitting/success timers by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        match &mut self.phase {
            DialogPhase::Editing => {}
            DialogPhase::Submitting(timer) => {
                timer.tick(delta);
                if timer.finished() {
                    if let Some(request) = self.pending.take() {
                        match serde_json::to_string(&request) {
                            Ok(json) => info!("reservation request sent: {json}"),
                            Err(e) => warn!("reservation request not serializable: {e}"),
                        }
                    }
                    self.phase =
                        DialogPhase::Success(Timer::from_seconds(SUCCESS_SECONDS, TimerMode::Once));
                }
            }
            DialogPhase::Success(timer) => {
                timer.tick(delta);
                if timer.finished() {
                    self.close();
                }
            }
        }
    }
}

/// Per-frame driver for the dialog timers.
pub fn tick_reservation(time: Res<Time>, mut dialog: ResMut<ReservationDialog>) {
    if dialog.open {
        dialog.advance(time.delta());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::ZoneCatalog;

    fn zone_c() -> Zone {
        ZoneCatalog::default().get("zone-c").unwrap().clone()
    }

    fn valid_form() -> ReservationForm {
        ReservationForm {
            name: "Jane Wanjiku".into(),
            phone: "+254 700 000 000".into(),
            email: String::new(),
            message: String::new(),
        }
    }

    #[test]
    fn test_validation_requires_name_and_phone() {
        let mut form = valid_form();
        assert_eq!(form.validate(), Ok(()));

        form.name = "   ".into();
        assert_eq!(form.validate(), Err(FormError::MissingName));

        form = valid_form();
        form.phone.clear();
        assert_eq!(form.validate(), Err(FormError::MissingPhone));
    }

    #[test]
    fn test_request_deposit_is_ten_percent() {
        let request = ReservationRequest::new(&valid_form(), &zone_c());
        assert_eq!(request.zone_id, "zone-c");
        assert_eq!(request.deposit, 75_000);
    }

    #[test]
    fn test_failed_validation_keeps_input_and_stays_editing() {
        let mut dialog = ReservationDialog::default();
        dialog.open_for("zone-c");
        dialog.form.phone = "+254 711 111 111".into();

        assert!(dialog.submit(&zone_c()).is_err());
        assert!(matches!(dialog.phase, DialogPhase::Editing));
        assert_eq!(dialog.error, Some(FormError::MissingName));
        // Input survives the rejection.
        assert_eq!(dialog.form.phone, "+254 711 111 111");
    }

    #[test]
    fn test_submit_walks_to_success_then_closes() {
        let mut dialog = ReservationDialog::default();
        dialog.open_for("zone-c");
        dialog.form = valid_form();
        dialog.submit(&zone_c()).unwrap();
        assert!(dialog.is_submitting());

        // Still submitting before the delay elapses.
        dialog.advance(Duration::from_millis(1000));
        assert!(dialog.is_submitting());

        dialog.advance(Duration::from_millis(600));
        assert!(matches!(dialog.phase, DialogPhase::Success(_)));
        assert!(dialog.open);

        // Success screen holds, then the dialog resets and closes.
        dialog.advance(Duration::from_millis(2100));
        assert!(!dialog.open);
        assert_eq!(dialog.form, ReservationForm::default());
        assert!(dialog.zone_id.is_none());
    }

    #[test]
    fn test_close_discards_in_flight_submission() {
        let mut dialog = ReservationDialog::default();
        dialog.open_for("zone-c");
        dialog.form = valid_form();
        dialog.submit(&zone_c()).unwrap();

        dialog.close();
        assert!(!dialog.open);
        assert!(matches!(dialog.phase, DialogPhase::Editing));

        // An advance after closing is a no-op.
        dialog.advance(Duration::from_secs(5));
        assert!(matches!(dialog.phase, DialogPhase::Editing));
    }
}

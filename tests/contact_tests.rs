#[cfg(test)]
pub mod contact_tests {
    use devfolio::frontend::components::contact::{
        SubmissionPhase, CONFIRMATION_DELAY, CONFIRMATION_MESSAGE, SUBMIT_DELAY,
    };

    #[test]
    fn test_submit_requires_idle_and_filled_fields() {
        assert_eq!(
            SubmissionPhase::Idle.begin(true),
            Some(SubmissionPhase::Submitting)
        );
        assert_eq!(SubmissionPhase::Idle.begin(false), None);
    }

    #[test]
    fn test_concurrent_submission_is_rejected() {
        assert_eq!(SubmissionPhase::Submitting.begin(true), None);
        assert_eq!(SubmissionPhase::Confirmed.begin(true), None);
    }

    #[test]
    fn test_full_cycle_returns_to_idle() {
        let submitted = SubmissionPhase::Idle.begin(true).expect("submit accepted");
        let confirmed = submitted.complete();
        assert_eq!(confirmed, SubmissionPhase::Confirmed);
        assert_eq!(confirmed.dismiss(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_complete_and_dismiss_only_fire_from_their_phase() {
        assert_eq!(SubmissionPhase::Idle.complete(), SubmissionPhase::Idle);
        assert_eq!(SubmissionPhase::Confirmed.complete(), SubmissionPhase::Confirmed);
        assert_eq!(SubmissionPhase::Idle.dismiss(), SubmissionPhase::Idle);
        assert_eq!(SubmissionPhase::Submitting.dismiss(), SubmissionPhase::Submitting);
    }

    #[test]
    fn test_submitting_disables_the_submit_control() {
        assert!(SubmissionPhase::Submitting.is_submitting());
        assert!(!SubmissionPhase::Idle.is_submitting());
        assert!(!SubmissionPhase::Confirmed.is_submitting());
    }

    #[test]
    fn test_message_display_outlasts_the_simulated_send() {
        assert!(CONFIRMATION_DELAY > SUBMIT_DELAY);
        assert!(!CONFIRMATION_MESSAGE.is_empty());
    }
}

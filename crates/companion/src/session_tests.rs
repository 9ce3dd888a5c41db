//! Tests for the guided voice session

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::{
        interface::InterfaceMode,
        voice::{
            session::{
                CAMERA_ACTIVATED, FIRST_DIRECTION, NAVIGATION_NOT_ACTIVE, NAVIGATION_STARTED,
                NAVIGATION_STOPPED, NEED_BOTH_ENDPOINTS, NEXT_DIRECTION, PROMPT_FROM, PROMPT_TO,
            },
            responses,
            PendingField, VoiceError, VoiceIntent, VoiceSession,
        },
    };

    fn session() -> VoiceSession {
        VoiceSession::new(InterfaceMode::Blind, 1234, Utc::now())
    }

    #[test]
    fn test_full_dialog_reaches_navigation() {
        let mut session = session();

        let turn = session.handle_transcript("set my start").unwrap();
        assert_eq!(turn.intent, Some(VoiceIntent::SetFrom));
        assert_eq!(turn.reply, PROMPT_FROM);
        assert_eq!(turn.pending_field, Some(PendingField::From));

        let turn = session.handle_transcript("Central Station").unwrap();
        assert_eq!(turn.intent, None);
        assert_eq!(
            turn.reply,
            "From location set to Central Station. Now say your destination."
        );
        assert_eq!(turn.from.as_deref(), Some("Central Station"));
        assert_eq!(turn.pending_field, Some(PendingField::To));

        let turn = session.handle_transcript("City Hospital").unwrap();
        assert_eq!(
            turn.reply,
            "Destination set to City Hospital. Ready to start navigation."
        );
        assert_eq!(turn.pending_field, None);

        let turn = session.handle_transcript("navigate").unwrap();
        assert!(turn.navigating);
        assert_eq!(
            turn.reply,
            "Starting navigation from Central Station to City Hospital. I will guide you with voice directions."
        );
        assert_eq!(turn.follow_up.as_deref(), Some(FIRST_DIRECTION));
        assert_eq!(turn.current_direction.as_deref(), Some(FIRST_DIRECTION));
        let route = turn.route.expect("route planned");
        assert_eq!(route.steps[2].instruction, "Walk to City Hospital");
    }

    #[test]
    fn test_pending_field_captures_keywords_verbatim() {
        let mut session = session();
        session.request_field(PendingField::To);
        // would classify as camera, but a location is expected
        let turn = session.handle_transcript("Camera Museum").unwrap();
        assert_eq!(turn.to.as_deref(), Some("Camera Museum"));
        assert_eq!(turn.intent, None);
    }

    #[test]
    fn test_navigate_requires_both_endpoints() {
        let mut session = session();
        let turn = session.handle_transcript("give me directions").unwrap();
        assert_eq!(turn.reply, NEED_BOTH_ENDPOINTS);
        assert!(!turn.navigating);
        assert!(turn.route.is_none());
    }

    #[test]
    fn test_set_to_prompts_for_destination() {
        let mut session = session();
        let turn = session.handle_transcript("destination please").unwrap();
        assert_eq!(turn.reply, PROMPT_TO);
        assert_eq!(turn.pending_field, Some(PendingField::To));
    }

    #[test]
    fn test_camera_announces_scene() {
        let mut session = session();
        let turn = session.handle_transcript("open camera").unwrap();
        assert_eq!(turn.reply, CAMERA_ACTIVATED);
        assert!(turn.follow_up.unwrap().contains("crosswalk"));
    }

    #[test]
    fn test_other_intents_use_standard_replies() {
        let mut session = session();
        let turn = session.handle_transcript("what a lovely day").unwrap();
        assert_eq!(turn.intent, Some(VoiceIntent::General));
        assert!(turn.reply.contains("what a lovely day"));
    }

    #[test]
    fn test_empty_transcript_keeps_pending_field() {
        let mut session = session();
        session.request_field(PendingField::From);
        assert_eq!(
            session.handle_transcript("   "),
            Err(VoiceError::MissingTranscript)
        );
        assert_eq!(session.snapshot().pending_field, Some(PendingField::From));
    }

    #[test]
    fn test_stop_navigation() {
        let mut session = session();
        assert_eq!(session.stop_navigation().reply, NAVIGATION_NOT_ACTIVE);

        session.request_field(PendingField::From);
        session.handle_transcript("Home").unwrap();
        session.handle_transcript("Work").unwrap();
        assert!(session.start_navigation().navigating);

        let turn = session.stop_navigation();
        assert_eq!(turn.reply, NAVIGATION_STOPPED);
        assert!(!turn.navigating);
    }

    #[test]
    fn test_standard_mode_fills_only_the_requested_field() {
        let mut session = VoiceSession::new(InterfaceMode::Standard, 1, Utc::now());

        session.request_field(PendingField::From);
        let turn = session.handle_transcript("Home").unwrap();
        assert_eq!(turn.reply, "From location set to Home");
        assert_eq!(turn.from.as_deref(), Some("Home"));
        assert_eq!(turn.pending_field, None);

        session.request_field(PendingField::To);
        let turn = session.handle_transcript("Work").unwrap();
        assert_eq!(turn.reply, "Destination set to Work");
        assert_eq!(turn.pending_field, None);
    }

    #[test]
    fn test_standard_mode_keywords_get_plain_replies() {
        let mut session = VoiceSession::new(InterfaceMode::Standard, 1, Utc::now());
        let turn = session.handle_transcript("set my start").unwrap();
        assert_eq!(turn.intent, Some(VoiceIntent::SetFrom));
        assert_eq!(turn.reply, responses::SET_FROM_RESPONSE);
        assert_eq!(turn.pending_field, None);

        let turn = session.handle_transcript("navigate").unwrap();
        assert_eq!(turn.reply, responses::NAVIGATE_RESPONSE);
        assert!(!turn.navigating);
    }

    #[test]
    fn test_standard_mode_navigation_shows_directions() {
        let mut session = VoiceSession::new(InterfaceMode::Standard, 1, Utc::now());
        session.request_field(PendingField::From);
        session.handle_transcript("Home").unwrap();
        session.request_field(PendingField::To);
        session.handle_transcript("Work").unwrap();

        let turn = session.start_navigation();
        assert!(turn.navigating);
        assert_eq!(turn.reply, NAVIGATION_STARTED);
        assert_eq!(turn.follow_up.as_deref(), Some(NEXT_DIRECTION));
        assert_eq!(
            turn.current_direction.as_deref(),
            Some("Head north on Main Street for 200 meters, then turn right")
        );

        let turn = session.stop_navigation();
        assert_eq!(turn.current_direction, None);
        assert_eq!(session.snapshot().current_direction, None);
    }

    #[test]
    fn test_seeded_sessions_replay_feeds() {
        let now = Utc::now();
        let mut a = VoiceSession::new(InterfaceMode::Deaf, 77, now);
        let mut b = VoiceSession::new(InterfaceMode::Deaf, 77, now);
        for _ in 0..25 {
            assert_eq!(a.poll_signs(now), b.poll_signs(now));
            assert_eq!(a.next_alert(now), b.next_alert(now));
        }
        assert_eq!(a.snapshot(), b.snapshot());
        assert!(a.recent_alerts().len() <= crate::RECENT_WINDOW);
        assert!(a.recent_signs().len() <= crate::RECENT_WINDOW);
    }
}

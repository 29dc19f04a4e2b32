//! End-to-end edit → recompute → redisplay cycles through a session.

use skillcap::*;

#[derive(Default)]
struct ConsoleView {
    frames: Vec<ChartFrame>,
    status: String,
}

impl BuildView for ConsoleView {
    fn render_chart(&mut self, frame: &ChartFrame) {
        self.frames.push(frame.clone());
    }

    fn show_status(&mut self, message: Option<&ValidationMessage>) {
        self.status = message.map(|m| m.to_string()).unwrap_or_default();
    }
}

fn band(s: &str) -> HeightBand {
    s.parse().unwrap()
}

#[test]
fn test_full_build_cycle() {
    let mut session =
        BuildSession::new(CapResolver::standard(), Position::ShootingGuard, band("6'4")).unwrap();
    let mut view = ConsoleView::default();
    session.refresh(&mut view);
    assert_eq!(view.frames.len(), 1);

    // sg 6'4: 90 80 83 82 68 81 78 85
    session.edit_number(SkillId::Shooting, 90);
    session.edit_number(SkillId::Passing, 70);
    session.edit_number(SkillId::Dribbling, 80);
    session.refresh(&mut view);
    assert_eq!(view.status, "");
    assert_eq!(view.frames.last().unwrap().ratings[..3], [90, 70, 80]);

    session.drag_slider(SkillId::Defense, 60);
    session.drag_slider(SkillId::Speed, 70);
    assert_eq!(session.remaining_points(), 30);

    // 30 left: a slider cannot take all of it
    session.drag_slider(SkillId::Stamina, 30);
    session.refresh(&mut view);
    assert_eq!(view.status, "Total points must not exceed 400.");
    assert_eq!(session.allocation()[SkillId::Stamina], 0);

    // a number field can
    session.edit_number(SkillId::Stamina, 45);
    session.refresh(&mut view);
    assert_eq!(session.allocation()[SkillId::Stamina], 30);
    assert_eq!(session.remaining_points(), 0);
    assert_eq!(view.status, "");
    assert_eq!(view.frames.last().unwrap().ratings[7], 30);
}

#[test]
fn test_position_change_reclamps_allocation() {
    let mut session =
        BuildSession::new(CapResolver::standard(), Position::PointGuard, band("6'2")).unwrap();
    session.edit_number(SkillId::Passing, 90);
    session.edit_number(SkillId::Dribbling, 88);

    session.set_position(Position::Center).unwrap();
    assert_eq!(session.allocation()[SkillId::Passing], 65);
    assert_eq!(session.allocation()[SkillId::Dribbling], 65);
    // dribbling is checked after passing, so its message is the one shown
    assert_eq!(session.status_text(), "Dribbling exceeds skill cap of 65.");
}

#[test]
fn test_failed_lookup_leaves_session_untouched() {
    let json = r#"{
        "base_caps": {
            "pf": {"shooting": 70, "passing": 72, "dribbling": 70, "defense": 86,
                   "rebounding": 85, "speed": 68, "vertical": 82, "stamina": 85}
        },
        "height_scaling": {
            "6'8": {"shooting": 1.0, "passing": 1.0, "dribbling": 1.0, "defense": 1.0,
                    "rebounding": 1.0, "speed": 1.0, "vertical": 1.0, "stamina": 1.0}
        }
    }"#;
    let resolver = CapResolver::new(CapTables::from_json(json).unwrap());
    let mut session = BuildSession::new(resolver, Position::PowerForward, band("6'8")).unwrap();
    session.edit_number(SkillId::Defense, 80);

    let err = session.set_height(band("6'9")).unwrap_err();
    assert_eq!(err, LookupError::MissingHeight(band("6'9")));
    assert_eq!(session.height(), band("6'8"));
    assert_eq!(session.allocation()[SkillId::Defense], 80);

    assert!(session.set_position(Position::Center).is_err());
    assert_eq!(session.position(), Position::PowerForward);
}

#[test]
fn test_load_allocation_validates() {
    let mut session =
        BuildSession::new(CapResolver::standard(), Position::Center, band("7'0")).unwrap();
    let saved: Allocation = serde_json::from_str(
        r#"{"shooting": 70, "passing": 10, "dribbling": 10, "defense": 99,
            "rebounding": 99, "speed": 20, "vertical": 90, "stamina": 2}"#,
    )
    .unwrap();

    let message = session.load_allocation(saved);
    // c 7'0 shooting: 65 * 0.85 = 55.25
    assert_eq!(session.allocation()[SkillId::Shooting], 55);
    assert_eq!(
        message,
        Some(ValidationMessage::ExceedsCap {
            skill: SkillId::Shooting,
            cap: 55
        })
    );
}

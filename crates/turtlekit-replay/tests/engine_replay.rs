use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::LocalSet;
use turtlekit_core::{Color, Error, ParameterError};
use turtlekit_replay::{
    DrawingEngine, RecordingSurface, ReplayEvent, ReplayState, SessionRequest, TickStatus,
    TouchEvent,
};

fn engine(width: f64, height: f64) -> DrawingEngine<RecordingSurface> {
    DrawingEngine::new(RecordingSurface::new(width, height))
}

#[tokio::test(start_paused = true)]
async fn test_full_session_replays_every_command() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(800.0, 600.0);
            engine
                .start_session(SessionRequest::new(100.0, 4, 10))
                .unwrap();
            assert_eq!(engine.state(), ReplayState::Running);

            assert_eq!(engine.wait_until_finished().await, ReplayState::Exhausted);

            let session = engine.session().unwrap();
            let scheduler = session.scheduler();
            let stats = scheduler.stats();
            assert_eq!(stats.ticks, scheduler.queue().len());
            assert_eq!(stats.command_errors, 0);
            assert_eq!(stats.render_errors, 0);

            for name in ["A", "B", "C", "D", "E", "F", "3", "4", "12"] {
                assert!(scheduler.marks().contains(name), "mark {} missing", name);
            }
            for (name, point) in session.construction().marks.iter() {
                let replayed = scheduler.marks().get(name).unwrap();
                assert!(replayed.approx_eq(point, 1e-6), "mark {} drifted", name);
            }
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_surface_receives_labels_and_colours() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(800.0, 600.0);
            engine
                .start_session(SessionRequest::new(60.0, 5, 10))
                .unwrap();
            engine.wait_until_finished().await;

            let renderer = engine.renderer();
            let surface = renderer.surface();
            let texts: Vec<&str> = surface.texts().collect();
            for expected in ["A", "B", "C", "D", "E", "3", "13", "5-sided polygon", "P4"] {
                assert!(texts.contains(&expected), "text {} missing", expected);
            }
            assert!(surface.lines_with_color(Color::RED) > 0);
            assert!(surface.lines_with_color(Color::MAGENTA) > 0);
            assert_eq!(surface.lines_with_color(Color::PURPLE), 5);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_events_end_with_finished() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(800.0, 600.0).with_event_capacity(8192);
            let mut rx = engine.subscribe();
            let id = engine
                .start_session(SessionRequest::new(50.0, 3, 10))
                .unwrap();

            let mut ticks = 0;
            let mut skipped = 0;
            let finished = loop {
                match rx.recv().await {
                    Ok(ReplayEvent::Started { session, commands, tick_delay_ms }) => {
                        assert_eq!(session, id);
                        assert!(commands > 0);
                        assert_eq!(tick_delay_ms, 6);
                    }
                    Ok(ReplayEvent::Tick { status, .. }) => {
                        ticks += 1;
                        if matches!(status, TickStatus::Skipped { .. }) {
                            skipped += 1;
                        }
                    }
                    Ok(event @ ReplayEvent::Finished { .. }) => break event,
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => panic!("event channel closed"),
                }
            };

            match finished {
                ReplayEvent::Finished { state, stats, .. } => {
                    assert_eq!(state, ReplayState::Exhausted);
                    assert_eq!(stats.ticks, ticks);
                }
                _ => unreachable!(),
            }
            assert_eq!(skipped, 0);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_zero_sized_surface_skips_drawing_but_finishes() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(0.0, 0.0);
            engine
                .start_session(SessionRequest::new(80.0, 4, 10))
                .unwrap();
            assert_eq!(engine.wait_until_finished().await, ReplayState::Exhausted);

            let session = engine.session().unwrap();
            let stats = session.scheduler().stats();
            assert_eq!(stats.drawn, 0);
            assert!(stats.render_errors > 0);
            assert_eq!(stats.command_errors, 0);
            assert!(session.scheduler().marks().contains("F"));
            assert!(engine.renderer().surface().calls().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_ticks_and_keeps_drawing() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(800.0, 600.0);
            engine
                .start_session(SessionRequest::new(100.0, 4, 1))
                .unwrap();
            tokio::time::sleep(Duration::from_millis(600)).await;
            engine.cancel_session();

            let position = engine.session().unwrap().scheduler().position();
            assert!(position > 0);
            let drawn = engine.renderer().surface().calls().len();

            tokio::time::sleep(Duration::from_secs(5)).await;
            assert_eq!(engine.state(), ReplayState::Cancelled);
            assert_eq!(engine.session().unwrap().scheduler().position(), position);
            assert_eq!(engine.renderer().surface().calls().len(), drawn);
            assert_eq!(engine.wait_until_finished().await, ReplayState::Cancelled);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_new_session_replaces_previous() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(800.0, 600.0);
            let first = engine
                .start_session(SessionRequest::new(100.0, 4, 5))
                .unwrap();
            tokio::time::sleep(Duration::from_millis(200)).await;

            let second = engine
                .start_session(SessionRequest::new(70.0, 6, 10))
                .unwrap();
            assert_ne!(first, second);
            assert_eq!(engine.session_id(), Some(second));

            {
                let session = engine.session().unwrap();
                assert!(session.scheduler().position() <= 1);
                assert!(session.scheduler().marks().len() <= 1);
            }
            assert_eq!(engine.renderer().surface().clear_count(), 2);

            assert_eq!(engine.wait_until_finished().await, ReplayState::Exhausted);
            let session = engine.session().unwrap();
            assert!(session.scheduler().marks().contains("6"));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_missing_parameters_leave_engine_idle() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(800.0, 600.0);
            let err = engine
                .start_session(SessionRequest {
                    length: Some(100.0),
                    sides: None,
                    speed: Some(5),
                })
                .unwrap_err();
            assert!(matches!(
                err,
                Error::Parameter(ParameterError::Missing { .. })
            ));
            assert_eq!(engine.state(), ReplayState::Idle);
            assert!(engine.session_id().is_none());
            assert_eq!(engine.wait_until_finished().await, ReplayState::Idle);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_clear_canvas_resets_session() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(800.0, 600.0);
            engine
                .start_session(SessionRequest::new(100.0, 4, 10))
                .unwrap();
            tokio::time::sleep(Duration::from_millis(120)).await;
            engine.clear_canvas().unwrap();

            assert_eq!(engine.state(), ReplayState::Idle);
            let session = engine.session().unwrap();
            assert!(session.scheduler().queue().is_empty());
            assert!(session.scheduler().marks().is_empty());
            drop(session);
            assert!(engine.renderer().surface().calls().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_gestures_change_projection_only() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(800.0, 600.0);
            engine.handle_touch(TouchEvent::Down { id: 1, x: 0.0, y: 0.0 });
            engine.handle_touch(TouchEvent::Down { id: 2, x: 100.0, y: 0.0 });
            engine.handle_touch(TouchEvent::Move { id: 2, x: 200.0, y: 0.0 });
            engine.handle_touch(TouchEvent::Up { id: 2 });
            engine.handle_touch(TouchEvent::Move { id: 1, x: 10.0, y: 20.0 });
            assert!((engine.view_mut().scale() - 2.0).abs() < 1e-12);
            assert_eq!(engine.view_mut().pan(), (10.0, 20.0));

            engine
                .start_session(SessionRequest::new(100.0, 4, 10))
                .unwrap();
            engine.wait_until_finished().await;

            let session = engine.session().unwrap();
            let a = session.scheduler().marks().get("A").unwrap();
            assert_eq!(a, turtlekit_core::Point::new(-200.0, 0.0));
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_resize_recentres_view() {
    LocalSet::new()
        .run_until(async {
            let mut engine = engine(0.0, 0.0);
            engine.resize(1024.0, 768.0);
            assert_eq!(engine.view_mut().center(), (512.0, 384.0));
        })
        .await;
}

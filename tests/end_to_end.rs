mod common;

use common::{buffer_lines, make_app, memory_store, render_app, seeded_store, settle};
use playdeck::config::AppConfig;
use playdeck::ui::settings::{RowView, ScreenId};

fn gapless_line(lines: &[String]) -> &str {
    lines
        .iter()
        .find(|line| line.contains("Gapless"))
        .map(String::as_str)
        .expect("no Gapless row on screen")
}

#[tokio::test]
async fn gapless_off_turns_on_after_one_commit() {
    let mut initial = AppConfig::default();
    initial.player.gapless = false;
    let (memory, store) = seeded_store(initial);
    let mut rx = store.observe();
    let mut app = make_app(&store, ScreenId::Playback);

    let before = buffer_lines(&render_app(&app, 60, 20));
    assert!(before.iter().any(|line| line.contains("Playback")));
    assert!(gapless_line(&before).contains("[off]"));

    app.activate();
    assert_eq!(app.take_pending().len(), 1);
    settle(&mut app, &mut rx).await;

    let after = buffer_lines(&render_app(&app, 60, 20));
    assert!(gapless_line(&after).contains("[ on]"));
    assert!(store.current().player.gapless);
    assert_eq!(memory.saved().map(|c| c.player.gapless), Some(true));
}

#[tokio::test]
async fn same_snapshot_renders_identical_frames() {
    let (_memory, store) = memory_store();
    let app = make_app(&store, ScreenId::Playback);
    assert_eq!(render_app(&app, 60, 20), render_app(&app, 60, 20));
}

#[tokio::test]
async fn gapless_switch_commits_through_store() {
    let (memory, store) = memory_store();
    let mut rx = store.observe();
    let mut app = make_app(&store, ScreenId::Playback);

    let rows = app.rows();
    assert_eq!(
        rows[0],
        RowView::Category {
            label: "Playback".into()
        }
    );
    assert!(matches!(&rows[1], RowView::Switch { label, on: true, .. } if label == "Gapless"));

    app.activate();
    settle(&mut app, &mut rx).await;

    assert!(matches!(app.rows()[1], RowView::Switch { on: false, .. }));
    assert!(!store.current().player.gapless);
    assert_eq!(memory.saved().map(|c| c.player.gapless), Some(false));
}

#[tokio::test]
async fn failed_write_keeps_switch_unchanged() {
    let (memory, store) = memory_store();
    memory.reject_writes(true);
    let mut app = make_app(&store, ScreenId::Playback);

    app.activate();
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    app.on_config_changed();

    assert!(matches!(app.rows()[1], RowView::Switch { on: true, .. }));
    assert!(store.current().player.gapless);
}

#[tokio::test]
async fn crossfade_slider_commits_on_release_only() {
    let (_memory, store) = memory_store();
    let mut rx = store.observe();
    let mut app = make_app(&store, ScreenId::Playback);

    // Gapless, Autoplay, Crossfade.
    app.move_focus(1);
    app.move_focus(1);
    for _ in 0..3 {
        app.nudge(1);
    }
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    assert!(!rx.has_changed().unwrap());
    assert_eq!(store.current().player.crossfade_seconds, 0);

    app.activate();
    settle(&mut app, &mut rx).await;
    assert_eq!(store.current().player.crossfade_seconds, 3);
    assert!(matches!(
        app.rows()[3],
        RowView::Slider {
            value: 3,
            dragging: false,
            ..
        }
    ));
}

#[tokio::test]
async fn data_saver_caps_quality_and_disables_high_tiers() {
    let (_memory, store) = memory_store();
    let mut rx = store.observe();
    let mut app = make_app(&store, ScreenId::Quality);

    app.activate();
    settle(&mut app, &mut rx).await;

    let enabled: Vec<bool> = app
        .rows()
        .iter()
        .filter_map(|row| match row {
            RowView::Radio { enabled, .. } => Some(*enabled),
            _ => None,
        })
        .collect();
    assert_eq!(enabled, vec![true, true, false, false]);
}

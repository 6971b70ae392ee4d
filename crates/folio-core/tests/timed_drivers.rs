//! Typewriter and cursor drivers under a paused clock, plus the teardown
//! that happens when Home's task set is dropped on navigation.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::{Instant, sleep};

use folio_core::{
    CursorBlink, Navigator, PageTransition, Phase, Route, SiteContent, Typewriter,
    TypewriterFrame, TypewriterTiming, ViewTasks, run_cursor_blink, run_typewriter,
};

fn record_frames(
    roles: &[&str],
) -> (Arc<Mutex<Vec<(Duration, TypewriterFrame)>>>, tokio::task::JoinHandle<()>) {
    let frames = Arc::new(Mutex::new(Vec::new()));
    let sink = frames.clone();
    let start = Instant::now();
    let machine = Typewriter::new(roles, TypewriterTiming::default()).unwrap();
    let handle = tokio::spawn(run_typewriter(machine, move |frame| {
        sink.lock().push((start.elapsed(), frame));
    }));
    (frames, handle)
}

#[tokio::test(start_paused = true)]
async fn test_typewriter_steps_are_sequential_and_timed() {
    let (frames, handle) = record_frames(&["Hi"]);

    // type H (0ms), type i (180ms), hold until 1480ms, erase i, erase H,
    // advance at 1750ms
    sleep(Duration::from_millis(1700)).await;
    handle.abort();

    let frames = frames.lock();
    let texts: Vec<&str> = frames.iter().map(|(_, f)| f.text.as_str()).collect();
    assert_eq!(texts, vec!["", "H", "Hi", "Hi", "H", ""]);

    let phases: Vec<Phase> = frames.iter().map(|(_, f)| f.phase).collect();
    assert_eq!(
        phases,
        vec![
            Phase::Typing,
            Phase::Typing,
            Phase::Holding,
            Phase::Erasing,
            Phase::Erasing,
            Phase::Advancing,
        ]
    );

    let at: Vec<u128> = frames.iter().map(|(t, _)| t.as_millis()).collect();
    assert_eq!(at, vec![0, 0, 180, 1480, 1570, 1660]);
}

#[tokio::test(start_paused = true)]
async fn test_cursor_blinks_once_per_interval_until_cancelled() {
    let interval = TypewriterTiming::default().blink_interval;
    let toggles = Arc::new(Mutex::new(Vec::new()));
    let sink = toggles.clone();
    let start = Instant::now();

    let handle = tokio::spawn(run_cursor_blink(interval, CursorBlink::new(), move |cursor: CursorBlink| {
        sink.lock().push((start.elapsed(), cursor.visible()));
    }));

    sleep(interval * 5 + Duration::from_millis(50)).await;
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    let snapshot = toggles.lock().clone();
    let values: Vec<bool> = snapshot.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![false, true, false, true, false]);
    for (i, (at, _)) in snapshot.iter().enumerate() {
        assert_eq!(*at, interval * (i as u32 + 1));
    }

    sleep(interval * 4).await;
    assert_eq!(toggles.lock().len(), 5, "blink kept running after teardown");
}

#[tokio::test(start_paused = true)]
async fn test_dropping_view_tasks_stops_home_timers() {
    let content = SiteContent::builtin();
    let timing = TypewriterTiming::default();
    let mut nav = Navigator::new(Route::Home);
    nav.finish_enter();

    // Mount Home: both timers are owned by the view's task set.
    let tasks = ViewTasks::new();
    let roles = content.role_list();
    let (frames, typer) = record_frames(&roles.iter().map(String::as_str).collect::<Vec<_>>());
    let blinks = Arc::new(Mutex::new(0usize));
    let sink = blinks.clone();
    let blinker = tokio::spawn(run_cursor_blink(timing.blink_interval, CursorBlink::new(), move |_| {
        *sink.lock() += 1;
    }));
    let typer_abort = typer.abort_handle();
    let blinker_abort = blinker.abort_handle();
    tasks.push(move || typer_abort.abort());
    tasks.push(move || blinker_abort.abort());

    sleep(Duration::from_secs(2)).await;
    assert!(!frames.lock().is_empty());
    assert!(*blinks.lock() > 0);

    // Navigate to Projects: Home exits, then unmounts and drops its tasks.
    nav.navigate(Route::Projects);
    sleep(PageTransition::default().duration).await;
    assert_eq!(nav.finish_exit(), Some(Route::Projects));
    drop(tasks);

    assert!(typer.await.unwrap_err().is_cancelled());
    assert!(blinker.await.unwrap_err().is_cancelled());

    let frame_count = frames.lock().len();
    let blink_count = *blinks.lock();
    sleep(Duration::from_secs(10)).await;
    assert_eq!(frames.lock().len(), frame_count);
    assert_eq!(*blinks.lock(), blink_count);
}

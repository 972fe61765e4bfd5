//! End-to-end interpreter tests: whole scripts through the runner,
//! asserting on registry state, transcript, SVG output, wait timing, and
//! run supersession.

use std::time::Duration;

use sketchpad_core::Point;
use sketchpad_script::{Interpreter, RunOutcome, ScriptStore, DEFAULT_SCRIPT};
use sketchpad_svg::SvgSurface;

fn interpreter() -> Interpreter<SvgSurface> {
    Interpreter::new(SvgSurface::default())
}

#[tokio::test]
async fn rectangle_script_end_to_end() {
    let interp = interpreter();
    let outcome = interp
        .run("new rectangle r\n  size 10 20\n  paint red\n")
        .await;
    assert_eq!(outcome, RunOutcome::Completed);

    let session = interp.session().await;
    let r = session.registry().get("r").expect("rectangle exists");
    assert_eq!(r.extent(), Point::new(10.0, 20.0));
    assert_eq!(r.fill(), "red");

    // Three echo lines numbered 1-3, real numbers in the data model.
    let entries = session.transcript().entries();
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries.iter().map(|e| e.line).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let svg = session.surface().to_svg();
    assert!(svg.contains("fill=\"red\""));
    assert!(svg.contains("width=\"10\""));
    assert!(svg.contains("height=\"20\""));
}

#[tokio::test]
async fn run_clears_previous_state() {
    let interp = interpreter();
    interp.run("new rectangle old\n").await;
    interp.run("new ellipse fresh\n").await;

    let session = interp.session().await;
    assert!(session.registry().get("old").is_err());
    assert!(session.registry().get("fresh").is_ok());
    assert_eq!(session.registry().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn wait_suspends_for_the_requested_duration() {
    let interp = interpreter();
    let started = tokio::time::Instant::now();
    interp
        .run("new rectangle r\nwait 2 seconds\n  paint red\n")
        .await;

    assert!(started.elapsed() >= Duration::from_secs(2));
    let session = interp.session().await;
    assert_eq!(session.registry().get("r").unwrap().fill(), "red");
}

#[tokio::test(start_paused = true)]
async fn rerun_during_wait_cancels_the_first_run() {
    let interp = interpreter();

    let first = {
        let interp = interp.clone();
        tokio::spawn(async move {
            interp
                .run("new rectangle doomed\nwait 60 seconds\nnew rectangle never\n")
                .await
        })
    };
    // Let the first run reach its wait.
    tokio::task::yield_now().await;

    let second = interp.run("new ellipse winner\n").await;
    assert_eq!(second, RunOutcome::Completed);
    assert_eq!(first.await.unwrap(), RunOutcome::Cancelled);

    // The cancelled continuation never executed, and the fresh run's
    // reset removed the first run's shapes.
    let session = interp.session().await;
    assert!(session.registry().get("never").is_err());
    assert!(session.registry().get("doomed").is_err());
    assert!(session.registry().get("winner").is_ok());
}

#[tokio::test]
async fn completed_run_persists_the_script() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScriptStore::new(dir.path()).unwrap();
    let interp = Interpreter::with_store(SvgSurface::default(), store.clone());

    let script = "new rectangle r\n  paint navy\n";
    interp.run(script).await;
    assert_eq!(store.load().unwrap(), script);
}

#[tokio::test]
async fn errors_are_logged_under_the_offending_line() {
    let interp = interpreter();
    interp
        .run("new rectangle r\nnew rectangle r\nremove ghost\n")
        .await;

    let session = interp.session().await;
    let entries = session.transcript().entries();
    // Echo + error for line 2, echo + error for line 3.
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[2].line, 2);
    assert_eq!(entries[2].message, "name already in use: r");
    assert_eq!(entries[4].line, 3);
    assert_eq!(entries[4].message, "no such object: ghost");

    // Display collapses the repeated numbers; the data model keeps them.
    let rendered = session.transcript().render();
    assert!(rendered.contains("      name already in use: r"));
}

#[tokio::test(start_paused = true)]
async fn default_script_runs_clean() {
    let interp = interpreter();
    assert_eq!(interp.run(DEFAULT_SCRIPT).await, RunOutcome::Completed);

    let session = interp.session().await;
    // Echo lines only; no error ever logs twice under one number.
    let entries = session.transcript().entries();
    let mut lines: Vec<u32> = entries.iter().map(|e| e.line).collect();
    lines.dedup();
    assert_eq!(lines.len(), entries.len(), "no line logged twice");
    assert!(session.registry().get("background").is_ok());
    assert_eq!(
        session.registry().get("greeting").unwrap().text(),
        Some("hello sketchpad")
    );
}

#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts phrasefind::app::run in the background with default options.
// - PHRASEFIND_TEST_HEADLESS=1 bypasses raw mode and the terminal event reader.
// - If the task finishes early it must return Ok(()); otherwise it is aborted and
//   the join must report cancellation, not a panic.

use std::time::Duration;

use phrasefind::app::RunOptions;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("PHRASEFIND_TEST_HEADLESS", "1");
    }

    let handle = tokio::spawn(async { phrasefind::app::run(RunOptions::default()).await });

    tokio::time::sleep(Duration::from_millis(50)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}

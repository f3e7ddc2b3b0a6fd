// Diagnostic log ring buffer.

use std::sync::Arc;
use storyboard_core::{LogEntry, LogLevel};
use storyboard_models::DiagnosticLog;

fn entry(correlation: &str, details: &str) -> LogEntry {
    LogEntry::new(LogLevel::Info, "attempt", correlation, details)
}

#[test]
fn test_evicts_oldest_first() {
    let log = DiagnosticLog::new(100);
    for n in 0..150 {
        log.record(entry("aaaa0000", &n.to_string()));
    }

    let snapshot = log.snapshot();
    assert_eq!(snapshot.len(), 100);
    assert_eq!(snapshot[0].details(), "50");
    assert_eq!(snapshot[99].details(), "149");
}

#[test]
fn test_zero_capacity_keeps_one() {
    let log = DiagnosticLog::new(0);
    log.record(entry("aaaa0000", "first"));
    log.record(entry("aaaa0000", "second"));

    assert_eq!(log.capacity(), 1);
    assert_eq!(log.snapshot()[0].details(), "second");
}

#[test]
fn test_filter_by_correlation() {
    let log = DiagnosticLog::default();
    log.record(entry("aaaa0000", "one"));
    log.record(entry("bbbb1111", "two"));
    log.record(entry("aaaa0000", "three"));

    let details: Vec<_> = log
        .for_correlation("aaaa0000")
        .iter()
        .map(|e| e.details().clone())
        .collect();
    assert_eq!(details, ["one", "three"]);
}

#[test]
fn test_concurrent_writers() {
    let log = Arc::new(DiagnosticLog::new(10));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let log = Arc::clone(&log);
            std::thread::spawn(move || {
                for n in 0..25 {
                    log.record(entry("cccc2222", &format!("{t}-{n}")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(log.len(), 10);
}

//! Bounded in-memory attempt log with aggregation queries.

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write as _;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::analytics::event::{DeepLinkEvent, LinkSource};
use crate::link::ParsedDeepLink;

/// Default maximum retained events.
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// How many failures the report lists.
const REPORT_FAILURE_COUNT: usize = 5;

/// Aggregate view over the recorded events.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub average_navigation_time_ms: f64,
    pub by_handler: BTreeMap<String, usize>,
    pub by_source: BTreeMap<String, usize>,
}

/// Long-lived, bounded event log.
///
/// Construct one per process and share it; there is deliberately no global
/// instance. Appends and FIFO eviction run under a single lock so the
/// capacity invariant holds even with concurrent recording.
pub struct AnalyticsRecorder {
    events: Mutex<VecDeque<DeepLinkEvent>>,
    capacity: usize,
}

impl AnalyticsRecorder {
    /// Recorder with the default 100-event capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Recorder with an explicit capacity (must be ≥ 1; see config
    /// validation).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Record an attempt built from a parsed descriptor.
    pub fn track_navigation(
        &self,
        url: &str,
        link: &ParsedDeepLink,
        handler: Option<&str>,
        source: LinkSource,
        navigation_time_ms: Option<u64>,
    ) {
        self.append(DeepLinkEvent {
            timestamp_ms: now_ms(),
            url: url.to_string(),
            path: Some(link.path.clone()),
            query_params: link.query_params.clone(),
            handler: handler.map(str::to_string),
            is_valid: link.is_valid(),
            error_message: link.error_message(),
            navigation_time_ms,
            source,
        });
    }

    /// Record a failure that happened before a descriptor existed.
    pub fn track_validation_failure(&self, url: &str, error_message: &str, source: LinkSource) {
        self.append(DeepLinkEvent {
            timestamp_ms: now_ms(),
            url: url.to_string(),
            path: None,
            query_params: BTreeMap::new(),
            handler: None,
            is_valid: false,
            error_message: Some(error_message.to_string()),
            navigation_time_ms: None,
            source,
        });
    }

    fn append(&self, event: DeepLinkEvent) {
        let mut events = self.events.lock().unwrap();
        if events.len() == self.capacity {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Snapshot of all retained events, oldest first.
    pub fn events(&self) -> Vec<DeepLinkEvent> {
        self.events.lock().unwrap().iter().cloned().collect()
    }

    /// Snapshot of retained valid attempts.
    pub fn valid_events(&self) -> Vec<DeepLinkEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.is_valid)
            .cloned()
            .collect()
    }

    /// Snapshot of retained failed attempts.
    pub fn failed_events(&self) -> Vec<DeepLinkEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| !e.is_valid)
            .cloned()
            .collect()
    }

    /// Mean navigation time over events that recorded one; 0 when none did.
    pub fn average_navigation_time_ms(&self) -> f64 {
        let events = self.events.lock().unwrap();
        let times: Vec<u64> = events.iter().filter_map(|e| e.navigation_time_ms).collect();
        if times.is_empty() {
            return 0.0;
        }
        times.iter().sum::<u64>() as f64 / times.len() as f64
    }

    /// Aggregate counts over the retained events.
    pub fn stats(&self) -> AnalyticsStats {
        let events = self.events.lock().unwrap();

        let mut by_handler: BTreeMap<String, usize> = BTreeMap::new();
        let mut by_source: BTreeMap<String, usize> = BTreeMap::new();
        let mut valid = 0;
        let mut time_sum = 0u64;
        let mut time_count = 0usize;

        for event in events.iter() {
            if event.is_valid {
                valid += 1;
            }
            if let Some(handler) = &event.handler {
                *by_handler.entry(handler.clone()).or_default() += 1;
            }
            *by_source.entry(event.source.to_string()).or_default() += 1;
            if let Some(t) = event.navigation_time_ms {
                time_sum += t;
                time_count += 1;
            }
        }

        AnalyticsStats {
            total: events.len(),
            valid,
            invalid: events.len() - valid,
            average_navigation_time_ms: if time_count == 0 {
                0.0
            } else {
                time_sum as f64 / time_count as f64
            },
            by_handler,
            by_source,
        }
    }

    /// Fixed-format, human-readable summary for debug tooling.
    pub fn generate_report(&self) -> String {
        let stats = self.stats();
        let failures = self.failed_events();

        let mut report = String::new();
        report.push_str("Deep Link Analytics Report\n");
        report.push_str("==========================\n");
        let _ = writeln!(report, "Total attempts: {}", stats.total);
        let _ = writeln!(report, "Valid: {}", stats.valid);
        let _ = writeln!(report, "Invalid: {}", stats.invalid);
        let _ = writeln!(
            report,
            "Average navigation time: {:.1} ms",
            stats.average_navigation_time_ms
        );

        report.push_str("\nBy handler:\n");
        for (handler, count) in &stats.by_handler {
            let _ = writeln!(report, "  {handler}: {count}");
        }

        report.push_str("\nBy source:\n");
        for (source, count) in &stats.by_source {
            let _ = writeln!(report, "  {source}: {count}");
        }

        let recent = failures
            .iter()
            .rev()
            .take(REPORT_FAILURE_COUNT)
            .collect::<Vec<_>>();
        let _ = writeln!(report, "\nRecent failures ({}):", recent.len());
        for failure in recent.into_iter().rev() {
            let path = failure.path.as_deref().unwrap_or("(no path)");
            let message = failure.error_message.as_deref().unwrap_or("unknown");
            let _ = writeln!(report, "  {path}: {message}");
        }

        report
    }

    /// Drop every retained event. Used by tests and debug tooling.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
        tracing::debug!("analytics event log cleared");
    }
}

impl Default for AnalyticsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::parse;
    use crate::routing::RouteTable;

    fn valid_link(raw: &str) -> ParsedDeepLink {
        let link = parse(raw, &RouteTable::with_default_routes());
        assert!(link.is_valid());
        link
    }

    fn invalid_link(raw: &str) -> ParsedDeepLink {
        let link = parse(raw, &RouteTable::with_default_routes());
        assert!(!link.is_valid());
        link
    }

    #[test]
    fn test_fifo_eviction_at_capacity() {
        let recorder = AnalyticsRecorder::new();
        let link = valid_link("acp://sessions/abc");
        for i in 0..150 {
            recorder.track_navigation(
                &format!("acp://sessions/abc?n={i}"),
                &link,
                Some("session-detail"),
                LinkSource::Foreground,
                None,
            );
        }

        let events = recorder.events();
        assert_eq!(events.len(), 100);
        // The 100 most recent survive: 50..150.
        assert_eq!(events.first().unwrap().url, "acp://sessions/abc?n=50");
        assert_eq!(events.last().unwrap().url, "acp://sessions/abc?n=149");
    }

    #[test]
    fn test_custom_capacity() {
        let recorder = AnalyticsRecorder::with_capacity(3);
        let link = valid_link("acp://chat");
        for i in 0..5 {
            recorder.track_navigation(
                &format!("acp://chat?n={i}"),
                &link,
                Some("chat"),
                LinkSource::Foreground,
                None,
            );
        }
        let events = recorder.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events.first().unwrap().url, "acp://chat?n=2");
    }

    #[test]
    fn test_average_navigation_time() {
        let recorder = AnalyticsRecorder::new();
        assert_eq!(recorder.average_navigation_time_ms(), 0.0);

        let link = valid_link("acp://sessions");
        for time in [100, 200, 300] {
            recorder.track_navigation(
                "acp://sessions",
                &link,
                Some("sessions-list"),
                LinkSource::Foreground,
                Some(time),
            );
        }
        // One untimed event must not skew the mean.
        recorder.track_navigation(
            "acp://sessions",
            &link,
            Some("sessions-list"),
            LinkSource::Foreground,
            None,
        );

        assert_eq!(recorder.average_navigation_time_ms(), 200.0);
    }

    #[test]
    fn test_stats_breakdowns_sum_to_total() {
        let recorder = AnalyticsRecorder::new();
        let chat = valid_link("acp://chat");
        let sessions = valid_link("acp://sessions");
        let bad = invalid_link("acp://unknown/path");

        recorder.track_navigation("acp://chat", &chat, Some("chat"), LinkSource::Initial, Some(100));
        recorder.track_navigation(
            "acp://sessions",
            &sessions,
            Some("sessions-list"),
            LinkSource::Foreground,
            Some(300),
        );
        recorder.track_navigation(
            "acp://unknown/path",
            &bad,
            None,
            LinkSource::Foreground,
            None,
        );
        recorder.track_validation_failure("acp://", "missing path", LinkSource::Background);

        let stats = recorder.stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.valid, 2);
        assert_eq!(stats.invalid, 2);
        assert_eq!(stats.average_navigation_time_ms, 200.0);
        assert_eq!(stats.by_handler.get("chat"), Some(&1));
        assert_eq!(stats.by_handler.get("sessions-list"), Some(&1));
        assert_eq!(stats.by_source.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_source.get("foreground"), Some(&2));
        assert_eq!(stats.by_source.get("initial"), Some(&1));
        assert_eq!(stats.by_source.get("background"), Some(&1));
    }

    #[test]
    fn test_snapshots_are_copies() {
        let recorder = AnalyticsRecorder::new();
        let link = valid_link("acp://chat");
        recorder.track_navigation("acp://chat", &link, Some("chat"), LinkSource::Foreground, None);

        let snapshot = recorder.events();
        recorder.clear();
        assert_eq!(snapshot.len(), 1);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_report_contents() {
        let recorder = AnalyticsRecorder::new();
        let chat = valid_link("acp://chat");
        recorder.track_navigation("acp://chat", &chat, Some("chat"), LinkSource::Foreground, Some(120));
        for i in 0..7 {
            let bad = invalid_link(&format!("acp://unknown/path{i}"));
            recorder.track_navigation(
                &format!("acp://unknown/path{i}"),
                &bad,
                None,
                LinkSource::Background,
                None,
            );
        }

        let report = recorder.generate_report();
        assert!(report.contains("Total attempts: 8"));
        assert!(report.contains("Valid: 1"));
        assert!(report.contains("Invalid: 7"));
        assert!(report.contains("chat: 1"));
        assert!(report.contains("background: 7"));
        // Only the five most recent failures appear.
        assert!(report.contains("Recent failures (5):"));
        assert!(!report.contains("/unknown/path0"));
        assert!(!report.contains("/unknown/path1"));
        assert!(report.contains("/unknown/path2"));
        assert!(report.contains("/unknown/path6"));
        assert!(report.contains("Unsupported route"));
    }
}

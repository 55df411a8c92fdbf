//! Property-based tests for rust_module_logger using proptest

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_module_logger::prelude::*;
use rust_module_logger::{format_timestamp_at, log};

fn capture(enable: u64, output: OutputMode) -> (Logger, MemorySink, MemorySink) {
    let console = MemorySink::named("console");
    let syslog = MemorySink::named("syslog");
    let logger = Logger::builder()
        .enable(ModuleId::from_bits(enable))
        .output(output)
        .console_sink(console.clone())
        .syslog_sink(syslog.clone())
        .build()
        .unwrap();
    (logger, console, syslog)
}

fn ordinary_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Warn),
        Just(Severity::Info),
        Just(Severity::SysErr),
    ]
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Panic),
        Just(Severity::Fatal),
        Just(Severity::Error),
        Just(Severity::Warn),
        Just(Severity::Info),
        Just(Severity::SysErr),
    ]
}

fn output_mode() -> impl Strategy<Value = OutputMode> {
    prop_oneof![
        Just(OutputMode::NONE),
        Just(OutputMode::CONSOLE),
        Just(OutputMode::SYSLOG),
        Just(OutputMode::BOTH),
    ]
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A call is emitted exactly when its module shares a bit with the map
    #[test]
    fn test_emitted_iff_bits_intersect(
        enable in any::<u64>(),
        module in any::<u64>(),
        severity in ordinary_severity(),
    ) {
        let (logger, console, _) = capture(enable, OutputMode::CONSOLE);

        log!(logger, ModuleId::from_bits(module), severity, " {:x}", module);

        let expected = usize::from(enable & module != 0);
        prop_assert_eq!(console.len(), expected);
        prop_assert_eq!(logger.enabled(ModuleId::from_bits(module)), enable & module != 0);
    }

    /// The wildcard map admits every non-empty module mask
    #[test]
    fn test_wildcard_admits_everything(module in 1u64..) {
        let (logger, console, _) = capture(u64::MAX, OutputMode::CONSOLE);
        logger.info(ModuleId::from_bits(module), "x");
        prop_assert_eq!(console.len(), 1);
    }

    /// An empty map admits nothing
    #[test]
    fn test_empty_map_admits_nothing(module in any::<u64>(), severity in ordinary_severity()) {
        let (logger, console, syslog) = capture(0, OutputMode::BOTH);
        log!(logger, ModuleId::from_bits(module), severity, "x");
        prop_assert!(console.is_empty());
        prop_assert!(syslog.is_empty());
    }

    /// An emitted ordinary line reaches at most one sink, syslog first
    #[test]
    fn test_at_most_one_sink(mode in output_mode(), severity in ordinary_severity()) {
        let (logger, console, syslog) = capture(u64::MAX, mode);

        log!(logger, ModuleId::PMON, severity, "routed");

        prop_assert!(console.len() + syslog.len() <= 1);
        prop_assert_eq!(syslog.len(), usize::from(mode.syslog()));
        prop_assert_eq!(console.len(), usize::from(mode.console() && !mode.syslog()));
        if let Some((priority, _)) = syslog.records().first() {
            prop_assert_eq!(*priority, severity.priority());
        }
    }

    /// Every emitted line starts with a newline and the bracketed tag
    #[test]
    fn test_line_prefix(severity in ordinary_severity(), message in "[a-z ]{0,40}") {
        let (logger, console, _) = capture(u64::MAX, OutputMode::CONSOLE);

        log!(logger, ModuleId::MSG_POOL, severity, "{}", message);

        let line = &console.lines()[0];
        let prefix = format!("\n[{}] ", severity.tag());
        prop_assert!(line.starts_with(&prefix));
        if severity != Severity::SysErr {
            prop_assert!(line.ends_with(&message));
        }
    }
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Tags are three characters and parse back to the same severity
    #[test]
    fn test_severity_tag_roundtrip(severity in any_severity()) {
        prop_assert_eq!(severity.tag().len(), 3);
        let parsed: Severity = severity.tag().parse().unwrap();
        prop_assert_eq!(parsed, severity);
    }

    /// Numeric codes round-trip
    #[test]
    fn test_severity_code_roundtrip(severity in any_severity()) {
        prop_assert_eq!(Severity::from_code(severity.code()), Some(severity));
    }

    /// Codes past the last severity are rejected
    #[test]
    fn test_severity_code_out_of_range(code in 6u8..) {
        prop_assert_eq!(Severity::from_code(code), None);
    }
}

// ============================================================================
// ModuleId Tests
// ============================================================================

proptest! {
    /// Display output parses back to the same id
    #[test]
    fn test_module_id_display_roundtrip(bits in any::<u64>()) {
        let id = ModuleId::from_bits(bits);
        let parsed: ModuleId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }

    /// A list of decimal masks parses to their union
    #[test]
    fn test_module_id_list_is_union(masks in prop::collection::vec(any::<u64>(), 1..6)) {
        let text = masks.iter().map(u64::to_string).collect::<Vec<_>>().join(",");
        let parsed: ModuleId = text.parse().unwrap();
        let expected = masks.iter().fold(0u64, |acc, m| acc | m);
        prop_assert_eq!(parsed.bits(), expected);
    }

    /// Set operations agree with the raw bit operations
    #[test]
    fn test_module_id_set_ops(a in any::<u64>(), b in any::<u64>()) {
        let (x, y) = (ModuleId::from_bits(a), ModuleId::from_bits(b));
        prop_assert_eq!((x | y).bits(), a | b);
        prop_assert_eq!((x & y).bits(), a & b);
        prop_assert_eq!(x.difference(y).bits(), a & !b);
        prop_assert_eq!(x.intersects(y), a & b != 0);
        prop_assert_eq!(x.contains(y), a & b == b);
    }

    /// Runtime enable and disable behave like set union and difference
    #[test]
    fn test_enable_disable(start in any::<u64>(), on in any::<u64>(), off in any::<u64>()) {
        let (logger, _, _) = capture(start, OutputMode::NONE);
        logger.enable_modules(ModuleId::from_bits(on));
        logger.disable_modules(ModuleId::from_bits(off));
        prop_assert_eq!(logger.enable_map().bits(), (start | on) & !off);
    }
}

// ============================================================================
// Timestamp Tests
// ============================================================================

proptest! {
    /// The classic timestamp always has the `Mon:dd hh:MM:SS:uuuuuu` shape
    #[test]
    fn test_classic_timestamp_shape(secs in 0i64..4_102_444_800, micros in 0u32..1_000_000) {
        let datetime = Utc.timestamp_opt(secs, micros * 1_000).unwrap();
        let stamp = format_timestamp_at(&datetime);

        prop_assert_eq!(stamp.len(), 22, "stamp was {:?}", stamp);
        prop_assert!(stamp[0..3].chars().all(|c| c.is_ascii_alphabetic()));
        prop_assert_eq!(&stamp[3..4], ":");
        prop_assert_eq!(&stamp[6..7], " ");
        prop_assert_eq!(&stamp[9..10], ":");
        prop_assert_eq!(&stamp[12..13], ":");
        prop_assert_eq!(&stamp[15..16], ":");
        let expected_micros = format!("{:06}", micros);
        prop_assert_eq!(&stamp[16..], expected_micros.as_str());
    }
}

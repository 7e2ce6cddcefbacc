use ti_txt::*;

use std::fs;
use std::path::PathBuf;
use std::process;

fn test_file_path(name: &str) -> PathBuf {
    let output = process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .unwrap()
        .stdout;
    let cargo_toml_path = String::from_utf8(output).unwrap();

    let mut path = PathBuf::from(cargo_toml_path.trim());
    path.pop();
    path.push("test_files");
    path.push(name);
    path
}

#[test]
fn analyze_flash_image() {
    let path = test_file_path("gpio_blink.hex");
    let analysis = analyze_file(path, &AnalysisOptions::default()).expect("analysis failed");
    assert_eq!(analysis.total_lines, 12);
    assert_eq!(analysis.size_bytes, 504);
    assert_eq!(analysis.displayed.len(), 10);
    assert_eq!(analysis.hidden_lines(), 2);
    assert!(analysis
        .displayed
        .iter()
        .all(|outcome| outcome.record().is_some_and(|rec| rec.check_bounds().is_ok())));

    let report = &analysis.report;
    assert_eq!(report.total_data_bytes, 192);
    assert_eq!(report.bounds(), Some(AddressRange::new(0x08_0000, 0x08_00BF)));
    assert_eq!(report.span_bytes(), Some(192));
    assert_eq!(report.region(), Some(MemoryRegion::Flash));
}

#[test]
fn analyze_flash_image_display_window_only() {
    let path = test_file_path("gpio_blink.hex");
    let options = AnalysisOptions {
        display_lines: 10,
        scope: AggregateScope::DisplayWindow,
    };
    let analysis = analyze_file(path, &options).expect("analysis failed");
    assert_eq!(analysis.report.total_data_bytes, 160);
    assert_eq!(analysis.report.max_address(), Some(0x08_009F));
}

#[test]
fn analyze_mixed_lines() {
    let path = test_file_path("mixed_lines.hex");
    let analysis = analyze_file(path, &AnalysisOptions::default()).expect("analysis failed");
    assert_eq!(analysis.total_lines, 7);
    assert_eq!(analysis.hidden_lines(), 0);

    let displayed = &analysis.displayed;
    assert!(matches!(displayed[0], DecodeOutcome::Record { line_no: 1, .. }));
    assert!(matches!(
        &displayed[1],
        DecodeOutcome::Unrecognized { line_no: 2, preview } if preview == "not a hex record"
    ));
    assert!(matches!(
        displayed[2],
        DecodeOutcome::Malformed { line_no: 3, reason: MalformedReason::TooShort }
    ));
    assert!(matches!(
        displayed[3],
        DecodeOutcome::Malformed {
            line_no: 4,
            reason: MalformedReason::ParseError { field: Field::Length, .. }
        }
    ));
    assert_eq!(displayed[4].record().map(|rec| rec.data_byte_count), Some(0));
    assert_eq!(
        displayed[5].record().and_then(HexRecord::end_address),
        Some(0x08_0032)
    );
    assert!(matches!(displayed[6], DecodeOutcome::Unrecognized { line_no: 7, .. }));

    let report = &analysis.report;
    assert_eq!(report.records, 3);
    assert_eq!(report.malformed, 2);
    assert_eq!(report.unrecognized, 2);
    assert_eq!(report.total_data_bytes, 5);
    assert_eq!(report.address_ranges.len(), 2);
    assert_eq!(report.span_bytes(), Some(0x33));
    assert_eq!(report.is_flash_region(), Some(true));
}

#[test]
fn reports_split_across_files_merge() {
    let blink = analyze_file(test_file_path("gpio_blink.hex"), &AnalysisOptions::default())
        .expect("analysis failed");
    let low = analyze_file(test_file_path("low_memory.hex"), &AnalysisOptions::default())
        .expect("analysis failed");

    let merged = blink.report.clone().merge(low.report.clone());
    assert_eq!(merged.total_data_bytes, 200);
    assert_eq!(merged.address_ranges.len(), 14);
    assert_eq!(merged.address_ranges[12], AddressRange::new(0x00_0100, 0x00_0103));
    assert_eq!(merged.region(), Some(MemoryRegion::NonFlash));
}

#[test]
fn analyze_temporary_file_with_crlf_endings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("crlf.hex");
    fs::write(&path, "%0208000012AB\r\n%0208000234CD\r\n").expect("write failed");

    let analysis = analyze_file(&path, &AnalysisOptions::default()).expect("analysis failed");
    assert_eq!(analysis.total_lines, 2);
    assert_eq!(analysis.report.records, 2);
    assert_eq!(analysis.report.span_bytes(), Some(4));
}

#[test]
fn unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("binary.hex");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x25]).expect("write failed");

    let result = analyze_file(&path, &AnalysisOptions::default());
    assert!(matches!(result, Err(Error::ReadFile { .. })));
}

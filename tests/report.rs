use ferrofetch::collectors::mock::MockSource;
use ferrofetch::display::{self, ERROR_TOKEN};
use ferrofetch::{Collector, Fact};
use std::sync::Arc;

fn render(source: MockSource) -> String {
    Collector::new(Arc::new(source)).render().unwrap()
}

fn data_lines(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|line| line.starts_with(display::BOLD))
        .collect()
}

#[test]
fn test_full_report() {
    let report = render(MockSource::healthy());

    let expected = [
        display::format_line("User", "ferris@crab"),
        display::format_line("OS", "Arch (Linux)"),
        display::format_line("CPU", "16x AMD Ryzen 7 5800X 8-Core Processor"),
        display::format_line("Memory", "4.2 GB / 16.7 GB (9.5 GB free)"),
        display::format_line("Uptime", "1 Days 01:01:01"),
        display::format_line("Shell", "/bin/zsh"),
        display::format_line("WM/DE", "Hyprland"),
    ];
    let expected = format!(
        "{}\n{}\n{}\n",
        display::header(),
        expected.join("\n"),
        display::footer()
    );

    assert_eq!(report, expected);
}

#[test]
fn test_single_failure_is_isolated() {
    for (index, fact) in Fact::ALL.iter().enumerate().take(5) {
        let report = render(MockSource::healthy().fail(*fact));
        let lines = data_lines(&report);

        assert_eq!(lines.len(), 7, "{fact} failing");
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.contains(ERROR_TOKEN), i == index, "{fact} failing, line {i}");
        }
        assert_eq!(lines[index], display::format_error(fact.label()));
    }
}

#[test]
fn test_unset_variables_use_fallbacks() {
    let report = render(MockSource::healthy().fail(Fact::Shell).fail(Fact::Desktop));
    let lines = data_lines(&report);

    assert_eq!(lines[5], display::format_line("Shell", "/usr/bin/sh or Unknown"));
    assert_eq!(lines[6], display::format_line("WM/DE", "None/Unknown"));
    assert!(!report.contains(ERROR_TOKEN));
}

#[test]
fn test_everything_failing_still_prints_seven_lines() {
    let report = render(MockSource::new());
    let lines = data_lines(&report);

    assert_eq!(lines.len(), 7);
    assert_eq!(lines.iter().filter(|l| l.contains(ERROR_TOKEN)).count(), 5);
}

#[test]
fn test_report_is_idempotent() {
    let collector = Collector::new(Arc::new(MockSource::healthy()));
    assert_eq!(collector.render().unwrap(), collector.render().unwrap());
}

#[test]
fn test_live_report_shape() {
    let mut out = Vec::new();
    ferrofetch::print_report(&mut out, Default::default()).unwrap();

    let report = String::from_utf8(out).unwrap();
    assert_eq!(data_lines(&report).len(), 7);
}

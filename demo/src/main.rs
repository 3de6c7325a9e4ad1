//! Health Checkup Status Engine: Demo CLI
//!
//! Runs the engine's operations against the bundled reference catalog or a
//! catalog document supplied with `--catalog`.
//!
//! Usage:
//!   cargo run -p demo -- summary
//!   cargo run -p demo -- metrics --status caution
//!   cargo run -p demo -- metric bp-systolic
//!   cargo run -p demo -- --today 2024-11-16 alerts --mark-read alert-001
//!   cargo run -p demo -- hospitals --specialty 내과 --open-only
//!   cargo run -p demo -- verify --ranges ranges.toml

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkup_contracts::{Catalog, CheckupError, CheckupResult, HealthMetric};
use checkup_core::{
    age::{age_on, evaluate_age_deviation},
    aggregate::attention_metrics,
    alerts::{format_relative_date, unread_preview},
    classify::BandClassifier,
    filter::{StatusFilter, ALL_SPECIALTIES, SPECIALTY_FILTERS},
    present::{
        activity_progress, age_narrative, alert_descriptor, chart_bounds, descriptor,
        gauge_percent, DEFAULT_STEP_GOAL,
    },
    aggregate, reduce, HealthCatalog, StatusClassifier, ViewAction, ViewState,
};
use checkup_ranges::RangeTable;
use checkup_verify::{load_catalog, ConsistencyVerifier};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Health checkup status engine demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Health checkup status engine demo",
    long_about = "Classifies checkup metrics, summarises the latest checkup, groups the\n\
                  alert inbox and filters the hospital directory."
)]
struct Cli {
    /// Calendar date treated as today (YYYY-MM-DD). Defaults to the local date.
    #[arg(long, global = true)]
    today: Option<String>,

    /// Catalog JSON document to load instead of the bundled reference catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Overall status, status counts, health age and the alert preview.
    Summary,
    /// List the metrics of the latest checkup.
    Metrics {
        /// Status filter: all, safe, caution or danger.
        #[arg(long, default_value = "all")]
        status: String,
    },
    /// Detail view of one metric, including its history.
    Metric {
        /// Metric id, e.g. `bp-systolic`.
        id: String,
    },
    /// Show the alert inbox, optionally applying read/delete actions first.
    Alerts {
        /// Mark the alert with this id as read. May be repeated.
        #[arg(long = "mark-read")]
        mark_read: Vec<String>,
        #[arg(long)]
        mark_all_read: bool,
        /// Remove read alerts after the other actions.
        #[arg(long)]
        delete_read: bool,
    },
    /// Search the hospital directory.
    Hospitals {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = ALL_SPECIALTIES)]
        specialty: String,
        #[arg(long)]
        open_only: bool,
    },
    /// Profile, current age, activity and medications.
    Profile,
    /// Schema and stored-status consistency report.
    Verify {
        /// Reference range TOML to classify with instead of the metric bands.
        #[arg(long)]
        ranges: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CheckupResult<()> {
    let today = resolve_today(cli.today.as_deref())?;
    let catalog = load(cli.catalog.as_deref())?;
    info!(%today, checkup = %catalog.latest_checkup.id, "catalog ready");

    match cli.command {
        Command::Summary => run_summary(&catalog, today),
        Command::Metrics { status } => run_metrics(&catalog, &status),
        Command::Metric { id } => run_metric(&catalog, &id),
        Command::Alerts {
            mark_read,
            mark_all_read,
            delete_read,
        } => run_alerts(&catalog, today, mark_read, mark_all_read, delete_read),
        Command::Hospitals {
            query,
            specialty,
            open_only,
        } => run_hospitals(&catalog, query, specialty, open_only),
        Command::Profile => run_profile(&catalog, today),
        Command::Verify { ranges } => run_verify(&catalog, ranges.as_deref()),
    }
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn resolve_today(arg: Option<&str>) -> CheckupResult<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| CheckupError::InvalidDate {
            input: s.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn load(path: Option<&Path>) -> CheckupResult<Catalog> {
    match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).map_err(|e| CheckupError::CatalogInvalid {
                reason: format!("cannot read '{}': {e}", p.display()),
            })?;
            load_catalog(&text)
        }
        None => checkup_ref_data::reference_catalog(),
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_summary(catalog: &Catalog, today: NaiveDate) -> CheckupResult<()> {
    let checkup = catalog.latest_checkup();
    let summary = aggregate(&checkup.metrics);
    let overall = descriptor(summary.overall);
    let deviation = evaluate_age_deviation(checkup.health_age, checkup.actual_age);

    println!();
    println!("{} 님의 건강 상태 ({})", catalog.profile().name, checkup.date);
    println!("=================================");
    println!("  종합: {} / {} ({})", overall.label, overall.headline, overall.color);
    println!("  {}", overall.guidance);
    println!(
        "  안전 {}  주의 {}  위험 {}  (총 {})",
        summary.counts.safe,
        summary.counts.caution,
        summary.counts.danger,
        summary.counts.total()
    );
    println!(
        "  건강 나이 {}세 / 실제 나이 {}세: {}",
        checkup.health_age,
        checkup.actual_age,
        age_narrative(&deviation)
    );

    let attention = attention_metrics(&checkup.metrics);
    if !attention.is_empty() {
        println!();
        println!("관리가 필요한 항목");
        for metric in attention {
            print_metric_line(metric);
        }
    }

    let state = ViewState::new(catalog.alerts().to_vec());
    println!();
    println!("읽지 않은 알림 {}건", state.unread_count());
    for alert in unread_preview(&state.inbox, 2) {
        println!("  - {} ({})", alert.title, format_relative_date(alert.date, today));
    }
    println!();
    Ok(())
}

fn run_metrics(catalog: &Catalog, status: &str) -> CheckupResult<()> {
    // StatusFilter parsing is total; unknown selectors show every metric.
    let filter: StatusFilter = status.parse().unwrap_or_default();
    let state = reduce(
        ViewState::new(Vec::new()),
        ViewAction::SetStatusFilter(filter),
    );

    let visible = state.visible_metrics(catalog.latest_checkup());
    println!();
    println!("검진 항목 [{}] {}개", state.status_filter, visible.len());
    for metric in visible {
        print_metric_line(metric);
    }
    println!();
    Ok(())
}

fn run_metric(catalog: &Catalog, id: &str) -> CheckupResult<()> {
    let metric = catalog.metric(id).ok_or_else(|| CheckupError::NotFound {
        kind: "metric".to_string(),
        id: id.to_string(),
    })?;
    let status = descriptor(metric.status);

    println!();
    println!("{} ({})", metric.name, metric.id);
    println!("  값: {} {}  [{}]", metric.value, metric.unit, status.label);
    println!(
        "  정상 {}-{}  주의 {}-{}",
        metric.normal_range.min,
        metric.normal_range.max,
        metric.caution_range.min,
        metric.caution_range.max
    );
    println!("  게이지: {:.0}%", gauge_percent(metric));
    println!("  {}", metric.description);
    println!("  조언: {}", metric.advice);

    let derived = BandClassifier.classify(metric, metric.value);
    if derived != metric.status {
        println!("  (기준 범위로는 '{}' 에 해당)", descriptor(derived).label);
    }

    if let Some(series) = catalog.history(id) {
        let (low, high) = chart_bounds(&series.history, &metric.normal_range, &metric.caution_range);
        println!();
        println!("  추이 ({} 건, 축 {:.1}-{:.1})", series.history.len(), low, high);
        for point in &series.history {
            println!(
                "    {}  {:>7} {}  {}",
                point.date,
                point.value,
                series.unit,
                descriptor(point.status).label
            );
        }
    }
    println!();
    Ok(())
}

fn run_alerts(
    catalog: &Catalog,
    today: NaiveDate,
    mark_read: Vec<String>,
    mark_all_read: bool,
    delete_read: bool,
) -> CheckupResult<()> {
    let mut state = ViewState::new(catalog.alerts().to_vec());
    for id in mark_read {
        if !state.inbox.iter().any(|a| a.id == id) {
            return Err(CheckupError::NotFound {
                kind: "alert".to_string(),
                id,
            });
        }
        state = reduce(state, ViewAction::MarkRead(id));
    }
    if mark_all_read {
        state = reduce(state, ViewAction::MarkAllRead);
    }
    if delete_read {
        state = reduce(state, ViewAction::DeleteRead);
    }

    let groups = state.inbox_groups(today);
    println!();
    println!("알림 (읽지 않음 {}건)", state.unread_count());
    for (heading, bucket) in [("오늘", &groups.today), ("이전", &groups.earlier)] {
        if bucket.is_empty() {
            continue;
        }
        println!();
        println!("[{heading}]");
        for alert in bucket {
            let accent = alert_descriptor(alert.kind);
            let marker = if alert.is_read { " " } else { "*" };
            println!(
                "  {marker} [{}] {} ({})",
                accent.kind,
                alert.title,
                format_relative_date(alert.date, today)
            );
            println!("      {}", alert.message);
        }
    }
    println!();
    Ok(())
}

fn run_hospitals(
    catalog: &Catalog,
    query: String,
    specialty: String,
    open_only: bool,
) -> CheckupResult<()> {
    let state = [
        ViewAction::SetQuery(query),
        ViewAction::SetSpecialty(specialty),
        ViewAction::SetOpenOnly(open_only),
    ]
    .into_iter()
    .fold(ViewState::new(Vec::new()), reduce);

    let found = state.visible_hospitals(catalog.hospitals());
    println!();
    println!("진료과: {}", SPECIALTY_FILTERS.join(" | "));
    println!("검색 결과 {}곳", found.len());
    for hospital in found {
        let open = if hospital.is_open { "진료중" } else { "진료종료" };
        println!(
            "  {} ({}) {}  ★{:.1}  {}",
            hospital.name, hospital.kind, hospital.distance, hospital.rating, open
        );
        println!("      {} | {}", hospital.address, hospital.specialty.join(", "));
        println!("      {} | {}", hospital.phone, hospital.open_hours);
    }
    println!();
    Ok(())
}

fn run_profile(catalog: &Catalog, today: NaiveDate) -> CheckupResult<()> {
    let profile = catalog.profile();
    println!();
    println!("{} ({})", profile.name, profile.id);
    println!("  생년월일 {}  만 {}세", profile.birth_date, age_on(profile.birth_date, today));
    println!("  키 {}cm  몸무게 {}kg", profile.height, profile.weight);
    if let Some(blood) = &profile.blood_type {
        println!("  혈액형 {blood}");
    }

    if let Some(activity) = catalog.latest_activity() {
        let progress = activity_progress(activity, DEFAULT_STEP_GOAL);
        println!();
        println!(
            "  {} 걸음 {} / {} ({:.0}%{})",
            activity.date,
            activity.steps,
            DEFAULT_STEP_GOAL,
            progress.percent,
            if progress.goal_met { ", 목표 달성" } else { "" }
        );
    }

    if !catalog.medications().is_empty() {
        println!();
        println!("  복용 중인 약");
        for med in catalog.medications() {
            println!("    {} {} ({}) - {}", med.name, med.dosage, med.frequency, med.purpose);
        }
    }

    if !catalog.visits().is_empty() {
        println!();
        println!("  진료 기록");
        for visit in catalog.visits() {
            println!("    {} {} {} - {}", visit.date, visit.hospital, visit.department, visit.diagnosis);
        }
    }
    println!();
    Ok(())
}

fn run_verify(catalog: &Catalog, ranges: Option<&Path>) -> CheckupResult<()> {
    let table: Option<RangeTable> = ranges.map(RangeTable::from_file).transpose()?;
    let classifier: &dyn StatusClassifier = match &table {
        Some(t) => t,
        None => &BandClassifier,
    };

    let report = ConsistencyVerifier::new().verify(catalog, classifier);
    println!();
    println!(
        "상태 일관성 검사: {} ({}건 비교, 불일치 {}건)",
        if report.passed { "통과" } else { "불일치 발견" },
        report.checked,
        report.mismatches.len()
    );
    for mismatch in &report.mismatches {
        println!("  - {mismatch}");
    }
    println!();
    Ok(())
}

// ── Formatting ────────────────────────────────────────────────────────────────

fn print_metric_line(metric: &HealthMetric) {
    println!(
        "  {:<6} {} {} {}",
        descriptor(metric.status).label,
        metric.name,
        metric.value,
        metric.unit
    );
}

//! Status-to-presentation lookup tables and display arithmetic.
//!
//! Every screen that colours or labels a status reads from `descriptor`, so
//! badges, traffic lights, gauges and chart points cannot disagree. Labels
//! are in the fixed ko-KR display locale.

use serde::Serialize;

use checkup_contracts::{ActivityData, AlertKind, HealthHistory, HealthMetric, HealthStatus, Range};

use crate::age::{AgeDeviation, AgeDirection};

/// Everything a view needs to render one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub status: HealthStatus,
    /// Badge label.
    pub label: &'static str,
    /// Headline used by the overall summary card.
    pub headline: &'static str,
    /// One-line guidance on the metric detail screen.
    pub guidance: &'static str,
    /// Hex colour shared by badges, gauges and chart points.
    pub color: &'static str,
}

const STATUS_TABLE: [StatusDescriptor; 3] = [
    StatusDescriptor {
        status: HealthStatus::Safe,
        label: "안전",
        headline: "양호",
        guidance: "정상 범위입니다.",
        color: "#10b981",
    },
    StatusDescriptor {
        status: HealthStatus::Caution,
        label: "주의",
        headline: "주의 필요",
        guidance: "건강 관리가 필요한 주의 단계입니다.",
        color: "#f59e0b",
    },
    StatusDescriptor {
        status: HealthStatus::Danger,
        label: "위험",
        headline: "관리 필요",
        guidance: "전문의 상담을 권장합니다.",
        color: "#ef4444",
    },
];

pub fn descriptor(status: HealthStatus) -> &'static StatusDescriptor {
    match status {
        HealthStatus::Safe => &STATUS_TABLE[0],
        HealthStatus::Caution => &STATUS_TABLE[1],
        HealthStatus::Danger => &STATUS_TABLE[2],
    }
}

/// Presentation of an alert category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertKindDescriptor {
    pub kind: AlertKind,
    pub color: &'static str,
    /// 0 = informational, 2 = urgent.
    pub rank: u8,
}

pub fn alert_descriptor(kind: AlertKind) -> AlertKindDescriptor {
    match kind {
        AlertKind::Info => AlertKindDescriptor { kind, color: "#3b82f6", rank: 0 },
        AlertKind::Warning => AlertKindDescriptor { kind, color: "#f59e0b", rank: 1 },
        AlertKind::Urgent => AlertKindDescriptor { kind, color: "#ef4444", rank: 2 },
    }
}

/// ko-KR sentence describing a health-age deviation.
pub fn age_narrative(deviation: &AgeDeviation) -> String {
    match deviation.direction {
        AgeDirection::Higher => format!("실제 나이보다 {}세 높음", deviation.magnitude()),
        AgeDirection::Lower => format!("실제 나이보다 {}세 낮음", deviation.magnitude()),
        AgeDirection::Equal => "실제 나이와 동일".to_string(),
    }
}

/// Gauge fill for a metric card, in percent.
///
/// The gauge spans zero to 120% of the caution band's upper bound and is
/// clamped to `[0, 100]`.
pub fn gauge_percent(metric: &HealthMetric) -> f64 {
    let scale = metric.caution_range.max * 1.2;
    if scale <= 0.0 || !scale.is_finite() {
        return 0.0;
    }
    (metric.value / scale * 100.0).clamp(0.0, 100.0)
}

/// Y-axis bounds for a trend chart: 10% headroom around the readings and
/// the normal floor / caution ceiling.
pub fn chart_bounds(history: &[HealthHistory], normal: &Range, caution: &Range) -> (f64, f64) {
    let low = history
        .iter()
        .map(|h| h.value)
        .fold(normal.min, f64::min);
    let high = history
        .iter()
        .map(|h| h.value)
        .fold(caution.max, f64::max);
    (low * 0.9, high * 1.1)
}

pub const DEFAULT_STEP_GOAL: u32 = 8000;

/// Step-goal progress for one day of activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityProgress {
    /// Percent of goal, clamped to 100.
    pub percent: f64,
    pub goal_met: bool,
}

pub fn activity_progress(activity: &ActivityData, goal: u32) -> ActivityProgress {
    let percent = if goal == 0 {
        100.0
    } else {
        (f64::from(activity.steps) / f64::from(goal) * 100.0).min(100.0)
    };
    ActivityProgress {
        percent,
        goal_met: activity.steps >= goal,
    }
}

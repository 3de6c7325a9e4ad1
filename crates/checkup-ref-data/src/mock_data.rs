//! Simulated checkup data for the reference catalog.
//!
//! All data in this module is hardcoded and fictional. It stands in for the
//! health-screening export a production deployment would load. Values are
//! reproduced as recorded, including stored statuses that the band rule
//! would classify differently.

use serde_json::{json, Value};

// ── User profile (mock) ───────────────────────────────────────────────────────

pub fn user_profile() -> Value {
    json!({
        "id": "user-001",
        "name": "김건강",
        "birthDate": "1985-03-15",
        "gender": "male",
        "height": 175,
        "weight": 72,
        "bloodType": "A+"
    })
}

// ── Latest checkup (mock) ─────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn metric(
    id: &str,
    name: &str,
    value: f64,
    unit: &str,
    status: &str,
    normal: (f64, f64),
    caution: (f64, f64),
    description: &str,
    advice: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "value": value,
        "unit": unit,
        "status": status,
        "normalRange": { "min": normal.0, "max": normal.1 },
        "cautionRange": { "min": caution.0, "max": caution.1 },
        "description": description,
        "advice": advice
    })
}

/// The eleven-metric national screening result of 2024-11-15.
pub fn latest_checkup() -> Value {
    let metrics = vec![
        metric(
            "bp-systolic", "수축기 혈압", 135.0, "mmHg", "caution",
            (90.0, 120.0), (120.0, 140.0),
            "심장이 수축할 때 혈관에 가해지는 압력입니다.",
            "염분 섭취를 줄이고, 규칙적인 유산소 운동을 권장합니다.",
        ),
        metric(
            "bp-diastolic", "이완기 혈압", 88.0, "mmHg", "caution",
            (60.0, 80.0), (80.0, 90.0),
            "심장이 이완할 때 혈관에 가해지는 압력입니다.",
            "스트레스 관리와 충분한 수면이 도움됩니다.",
        ),
        metric(
            "fasting-glucose", "공복 혈당", 105.0, "mg/dL", "caution",
            (70.0, 100.0), (100.0, 126.0),
            "8시간 이상 금식 후 측정한 혈중 포도당 농도입니다.",
            "탄수화물 섭취를 조절하고, 식이섬유가 풍부한 음식을 섭취하세요.",
        ),
        metric(
            "total-cholesterol", "총 콜레스테롤", 195.0, "mg/dL", "safe",
            (0.0, 200.0), (200.0, 240.0),
            "혈중 총 콜레스테롤 수치입니다.",
            "현재 정상 범위입니다. 건강한 식습관을 유지하세요.",
        ),
        metric(
            "ldl-cholesterol", "LDL 콜레스테롤", 125.0, "mg/dL", "safe",
            (0.0, 130.0), (130.0, 160.0),
            "나쁜 콜레스테롤로 알려진 저밀도 지질단백질입니다.",
            "포화지방 섭취를 줄이고 불포화지방을 섭취하세요.",
        ),
        metric(
            "hdl-cholesterol", "HDL 콜레스테롤", 55.0, "mg/dL", "safe",
            (40.0, 999.0), (35.0, 40.0),
            "좋은 콜레스테롤로 알려진 고밀도 지질단백질입니다.",
            "유산소 운동이 HDL 수치 상승에 도움됩니다.",
        ),
        metric(
            "bmi", "체질량지수", 23.5, "kg/m²", "safe",
            (18.5, 23.0), (23.0, 25.0),
            "체중(kg)을 키(m)의 제곱으로 나눈 값입니다.",
            "정상 범위입니다. 현재 체중을 유지하세요.",
        ),
        metric(
            "hemoglobin", "헤모글로빈", 15.2, "g/dL", "safe",
            (13.0, 17.0), (11.0, 13.0),
            "적혈구 내 산소 운반 단백질의 농도입니다.",
            "정상 범위입니다.",
        ),
        metric(
            "ast", "AST (간기능)", 28.0, "U/L", "safe",
            (0.0, 40.0), (40.0, 80.0),
            "간 건강을 나타내는 효소 수치입니다.",
            "정상 범위입니다. 과음을 피하세요.",
        ),
        metric(
            "alt", "ALT (간기능)", 32.0, "U/L", "safe",
            (0.0, 40.0), (40.0, 80.0),
            "간세포 손상 정도를 나타내는 효소 수치입니다.",
            "정상 범위입니다.",
        ),
        metric(
            "gfr", "사구체여과율", 92.0, "mL/min", "safe",
            (90.0, 999.0), (60.0, 90.0),
            "신장의 노폐물 배출 기능을 나타냅니다.",
            "정상 범위입니다. 수분 섭취를 적정히 유지하세요.",
        ),
    ];

    json!({
        "id": "checkup-2024-001",
        "date": "2024-11-15",
        "overallStatus": "caution",
        "healthAge": 43,
        "actualAge": 39,
        "metrics": metrics
    })
}

// ── Metric histories (mock) ───────────────────────────────────────────────────

fn history(metric_id: &str, metric_name: &str, unit: &str, points: &[(&str, f64, &str)]) -> Value {
    let history: Vec<Value> = points
        .iter()
        .map(|(date, value, status)| json!({ "date": date, "value": value, "status": status }))
        .collect();

    json!({
        "metricId": metric_id,
        "metricName": metric_name,
        "unit": unit,
        "history": history
    })
}

/// Ten years of readings for four tracked metrics, oldest first.
pub fn metric_histories() -> Value {
    json!([
        history("bp-systolic", "수축기 혈압", "mmHg", &[
            ("2015-04", 118.0, "safe"),
            ("2016-04", 120.0, "safe"),
            ("2017-04", 122.0, "caution"),
            ("2018-04", 125.0, "caution"),
            ("2019-04", 118.0, "safe"),
            ("2020-04", 128.0, "caution"),
            ("2021-04", 130.0, "caution"),
            ("2022-04", 126.0, "caution"),
            ("2023-04", 132.0, "caution"),
            ("2024-11", 135.0, "caution"),
        ]),
        history("fasting-glucose", "공복 혈당", "mg/dL", &[
            ("2015-04", 88.0, "safe"),
            ("2016-04", 90.0, "safe"),
            ("2017-04", 92.0, "safe"),
            ("2018-04", 95.0, "safe"),
            ("2019-04", 94.0, "safe"),
            ("2020-04", 98.0, "safe"),
            ("2021-04", 100.0, "safe"),
            ("2022-04", 102.0, "caution"),
            ("2023-04", 103.0, "caution"),
            ("2024-11", 105.0, "caution"),
        ]),
        history("total-cholesterol", "총 콜레스테롤", "mg/dL", &[
            ("2015-04", 180.0, "safe"),
            ("2016-04", 185.0, "safe"),
            ("2017-04", 192.0, "safe"),
            ("2018-04", 198.0, "safe"),
            ("2019-04", 195.0, "safe"),
            ("2020-04", 190.0, "safe"),
            ("2021-04", 188.0, "safe"),
            ("2022-04", 192.0, "safe"),
            ("2023-04", 194.0, "safe"),
            ("2024-11", 195.0, "safe"),
        ]),
        history("bmi", "체질량지수", "kg/m²", &[
            ("2015-04", 22.1, "safe"),
            ("2016-04", 22.5, "safe"),
            ("2017-04", 22.8, "safe"),
            ("2018-04", 23.2, "caution"),
            ("2019-04", 23.0, "safe"),
            ("2020-04", 23.8, "caution"),
            ("2021-04", 24.1, "caution"),
            ("2022-04", 23.6, "caution"),
            ("2023-04", 23.4, "caution"),
            ("2024-11", 23.5, "caution"),
        ]),
    ])
}

// ── Alerts (mock) ─────────────────────────────────────────────────────────────

pub fn health_alerts() -> Value {
    json!([
        {
            "id": "alert-001",
            "type": "warning",
            "title": "혈압 주의 필요",
            "message": "최근 검진 결과 수축기 혈압이 135mmHg로 주의 단계입니다. 전문의 상담을 권장합니다.",
            "metricId": "bp-systolic",
            "date": "2024-11-16",
            "isRead": false,
            "actionUrl": "/hospitals"
        },
        {
            "id": "alert-002",
            "type": "warning",
            "title": "공복 혈당 상승 추세",
            "message": "공복 혈당이 3년 연속 상승하고 있습니다. 당뇨 예방을 위한 생활 습관 개선이 필요합니다.",
            "metricId": "fasting-glucose",
            "date": "2024-11-16",
            "isRead": false,
            "actionUrl": "/checkup/fasting-glucose"
        },
        {
            "id": "alert-003",
            "type": "info",
            "title": "정기 건강검진 안내",
            "message": "다음 국가건강검진 예정일이 2025년 4월입니다. 미리 일정을 확인해 주세요.",
            "date": "2024-11-01",
            "isRead": true
        },
        {
            "id": "alert-004",
            "type": "info",
            "title": "걸음 수 목표 달성",
            "message": "이번 주 평균 걸음 수 8,500보로 목표를 달성했습니다.",
            "date": "2024-11-10",
            "isRead": true
        }
    ])
}

// ── Hospital directory (mock) ─────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn hospital(
    id: &str,
    name: &str,
    kind: &str,
    specialty: &[&str],
    address: &str,
    distance: &str,
    rating: f64,
    phone: &str,
    is_open: bool,
    open_hours: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "specialty": specialty,
        "address": address,
        "distance": distance,
        "rating": rating,
        "phone": phone,
        "isOpen": is_open,
        "openHours": open_hours
    })
}

/// Five hospitals near the user, in directory order.
pub fn nearby_hospitals() -> Value {
    json!([
        hospital(
            "hospital-001", "서울대학교병원", "상급종합병원",
            &["내과", "심장내과", "내분비내과"],
            "서울특별시 종로구 대학로 101", "2.3km", 4.8, "02-2072-2114",
            true, "평일 08:30-17:30",
        ),
        hospital(
            "hospital-002", "강북삼성병원", "종합병원",
            &["내과", "가정의학과", "건강검진센터"],
            "서울특별시 종로구 새문안로 29", "1.5km", 4.5, "02-2001-2001",
            true, "평일 08:00-17:00",
        ),
        hospital(
            "hospital-003", "연세내과의원", "의원",
            &["내과"],
            "서울특별시 종로구 종로 33", "0.8km", 4.6, "02-123-4567",
            true, "평일 09:00-18:00, 토 09:00-13:00",
        ),
        hospital(
            "hospital-004", "종로성모내과", "의원",
            &["내과", "순환기내과"],
            "서울특별시 종로구 삼봉로 81", "1.2km", 4.4, "02-765-4321",
            false, "평일 09:00-18:00",
        ),
        hospital(
            "hospital-005", "서울메디컬센터", "종합병원",
            &["내과", "외과", "정형외과"],
            "서울특별시 중구 을지로 39", "3.1km", 4.3, "02-3456-7890",
            true, "24시간 응급실 운영",
        ),
    ])
}

// ── Activity, medications, visits (mock) ──────────────────────────────────────

/// The last seven days of tracked activity, oldest first.
pub fn activity_data() -> Value {
    let days: [(&str, u32, f64, u32, u32); 7] = [
        ("2024-11-08", 7823, 5.2, 320, 45),
        ("2024-11-09", 9156, 6.1, 380, 52),
        ("2024-11-10", 6421, 4.3, 275, 35),
        ("2024-11-11", 8934, 5.9, 365, 48),
        ("2024-11-12", 10234, 6.8, 420, 62),
        ("2024-11-13", 5678, 3.8, 240, 28),
        ("2024-11-14", 8567, 5.7, 350, 46),
    ];

    Value::Array(
        days.iter()
            .map(|(date, steps, distance, calories, active)| {
                json!({
                    "date": date,
                    "steps": steps,
                    "distance": distance,
                    "calories": calories,
                    "activeMinutes": active
                })
            })
            .collect(),
    )
}

pub fn medications() -> Value {
    json!([
        {
            "id": "med-001",
            "name": "아스피린프로텍트정 100mg",
            "dosage": "1정",
            "frequency": "1일 1회 아침 식후",
            "startDate": "2024-06-15",
            "prescribedBy": "서울대학교병원 심장내과",
            "purpose": "심혈관 질환 예방"
        }
    ])
}

pub fn medical_visits() -> Value {
    json!([
        {
            "id": "visit-001",
            "date": "2024-11-15",
            "hospital": "강북삼성병원",
            "department": "건강검진센터",
            "doctor": "이건강",
            "diagnosis": "국가건강검진",
            "notes": "혈압, 혈당 주의 소견. 6개월 후 재검 권고."
        },
        {
            "id": "visit-002",
            "date": "2024-06-15",
            "hospital": "서울대학교병원",
            "department": "심장내과",
            "doctor": "박심장",
            "diagnosis": "고혈압 전단계",
            "notes": "생활습관 개선 권고. 아스피린 처방."
        },
        {
            "id": "visit-003",
            "date": "2024-03-20",
            "hospital": "연세내과의원",
            "department": "내과",
            "doctor": "김내과",
            "diagnosis": "상기도감염",
            "notes": "감기 증상. 약물 처방 후 호전."
        }
    ])
}

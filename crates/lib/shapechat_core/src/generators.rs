//! Sample content generators, one per [`Shape`].
//!
//! Every generator takes the original query, the wall-clock time to stamp
//! entries with, and a random source. Randomness only ever changes values;
//! field names, entry counts and chart order are fixed per shape.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::{Value, json};

use crate::shape::{Shape, ShapedResponse};

/// Timestamp format used by table rows and log entries.
pub const ROW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Log levels a generated entry may carry.
pub const LOG_LEVELS: &[&str] = &["info", "debug", "warning", "error"];

const TABLE_ROWS: usize = 5;
const LOG_ENTRIES: usize = 10;
const PIE_SEGMENTS: u32 = 4;
const PIE_MIN_SEGMENT: u32 = 10;
const PIE_TOTAL: u32 = 100;

/// Generate content of `shape` for `query`.
pub fn generate<R: Rng + ?Sized>(
    shape: Shape,
    query: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ShapedResponse {
    let content = match shape {
        Shape::Text => text(query, rng),
        Shape::Json => json_data(query, now, rng),
        Shape::Table => table(now, rng),
        Shape::Log => log(query, now, rng),
        Shape::Dashboard => dashboard(query, rng),
        Shape::Error => error(query, rng),
    };
    ShapedResponse::new(shape, content)
}

fn pick<'a, R: Rng + ?Sized>(choices: &'a [String], rng: &mut R) -> &'a str {
    choices.choose(rng).map_or("", String::as_str)
}

/// Random v4 UUID drawn from `rng`, so seeded sources give stable ids.
fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Letter for a zero-based index: 0 → 'A', 1 → 'B', ...
fn letter(i: usize) -> char {
    char::from(b'A' + (i % 26) as u8)
}

fn text<R: Rng + ?Sized>(query: &str, rng: &mut R) -> Value {
    let templates = [
        format!("You asked about '{query}'. This is a text response from the MCP server."),
        format!("Processing your query: '{query}'. Here are some findings..."),
        format!("Analysis complete for '{query}'. See the following information."),
    ];
    Value::String(pick(&templates, rng).to_owned())
}

fn json_data<R: Rng + ?Sized>(query: &str, now: DateTime<Utc>, rng: &mut R) -> Value {
    let count: u32 = rng.random_range(1..=100);
    let data: Vec<Value> = ["A", "B", "C"]
        .iter()
        .map(|category| {
            json!({
                "id": random_id(rng),
                "value": rng.random::<f64>() * 100.0,
                "category": category,
            })
        })
        .collect();

    json!({
        "query": query,
        "timestamp": now.to_rfc3339(),
        "results": {
            "status": "success",
            "count": count,
            "data": data,
        }
    })
}

fn table<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Value {
    let rows: Vec<Value> = (0..TABLE_ROWS)
        .map(|i| {
            let stamp = now - Duration::days(i as i64);
            json!([
                format!("ROW-{}", i + 1),
                format!("Item {}", letter(i)),
                round2(rng.random::<f64>() * 1000.0),
                stamp.format(ROW_TIME_FORMAT).to_string(),
            ])
        })
        .collect();

    json!({
        "headers": ["ID", "Name", "Value", "Timestamp"],
        "rows": rows,
    })
}

fn log<R: Rng + ?Sized>(query: &str, now: DateTime<Utc>, rng: &mut R) -> Value {
    let entries: Vec<Value> = (0..LOG_ENTRIES)
        .map(|i| {
            let stamp = now - Duration::minutes(5 * i as i64);
            let level = LOG_LEVELS.choose(rng).copied().unwrap_or("info");
            // Fixed by position in the level list, not by the drawn level.
            let detail = if LOG_LEVELS[i % LOG_LEVELS.len()] == "error" {
                "Error detected"
            } else {
                "Normal operation"
            };
            json!({
                "timestamp": stamp.format(ROW_TIME_FORMAT).to_string(),
                "level": level,
                "message": format!("Log entry {} related to '{query}': {detail}", i + 1),
            })
        })
        .collect();
    Value::Array(entries)
}

/// Pie segments whose values sum to exactly [`PIE_TOTAL`].
///
/// Each of the [`PIE_SEGMENTS`] named segments gets at least
/// [`PIE_MIN_SEGMENT`]; whatever is left becomes an "Other" segment.
pub fn pie_segments<R: Rng + ?Sized>(rng: &mut R) -> Vec<(String, u32)> {
    let mut remaining = PIE_TOTAL;
    let mut segments = Vec::with_capacity(PIE_SEGMENTS as usize + 1);
    for i in 0..PIE_SEGMENTS {
        // Leave room for the minimum of every segment still to come.
        let reserved = PIE_MIN_SEGMENT * (PIE_SEGMENTS - 1 - i);
        let value = rng.random_range(PIE_MIN_SEGMENT..=remaining - reserved);
        remaining -= value;
        segments.push((format!("Segment {}", letter(i as usize)), value));
    }
    if remaining > 0 {
        segments.push(("Other".to_string(), remaining));
    }
    segments
}

fn dashboard<R: Rng + ?Sized>(query: &str, rng: &mut R) -> Value {
    let line: Vec<Value> = (0..10)
        .map(|i| {
            json!({
                "name": format!("Day {}", i + 1),
                "series1": round2(rng.random::<f64>() * 100.0),
                "series2": round2(rng.random::<f64>() * 80.0),
            })
        })
        .collect();

    let bar: Vec<Value> = (0..6)
        .map(|i| {
            json!({
                "name": format!("Category {}", letter(i)),
                "value1": rng.random_range(10..=100u32),
                "value2": rng.random_range(20..=90u32),
            })
        })
        .collect();

    let pie: Vec<Value> = pie_segments(rng)
        .into_iter()
        .map(|(name, value)| json!({ "name": name, "value": value }))
        .collect();

    let area: Vec<Value> = (0..7)
        .map(|i| {
            json!({
                "name": format!("Week {}", i + 1),
                "series1": round2(rng.random::<f64>() * 100.0),
                "series2": round2(rng.random::<f64>() * 100.0),
            })
        })
        .collect();

    json!({
        "title": format!("Dashboard for '{query}'"),
        "description": "This is a sample dashboard with various charts",
        "charts": [
            { "type": "line", "title": "Trend Analysis", "data": line },
            { "type": "bar", "title": "Comparative Analysis", "data": bar },
            { "type": "pie", "title": "Distribution", "data": pie },
            { "type": "area", "title": "Cumulative Metrics", "data": area },
        ]
    })
}

fn error<R: Rng + ?Sized>(query: &str, rng: &mut R) -> Value {
    let templates = [
        format!("Failed to process query: '{query}'. Invalid syntax."),
        format!("Query execution error: Service unavailable for '{query}'."),
        format!("Permission denied when accessing data for '{query}'."),
    ];
    Value::String(pick(&templates, rng).to_owned())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn generate_keeps_requested_shape() {
        let mut rng = seeded(1);
        for &shape in Shape::ALL {
            let resp = generate(shape, "q", fixed_now(), &mut rng);
            assert_eq!(resp.shape, shape);
        }
    }

    #[test]
    fn text_and_error_embed_query() {
        let mut rng = seeded(2);
        for _ in 0..20 {
            let t = generate(Shape::Text, "weather", fixed_now(), &mut rng);
            assert!(t.content.as_str().unwrap().contains("'weather'"));
            let e = generate(Shape::Error, "weather", fixed_now(), &mut rng);
            assert!(e.content.as_str().unwrap().contains("'weather'"));
        }
    }

    #[test]
    fn json_content_structure() {
        let mut rng = seeded(3);
        let c = generate(Shape::Json, "show data", fixed_now(), &mut rng).content;
        assert_eq!(c["query"], "show data");
        assert!(DateTime::parse_from_rfc3339(c["timestamp"].as_str().unwrap()).is_ok());
        assert_eq!(c["results"]["status"], "success");

        let count = c["results"]["count"].as_u64().unwrap();
        assert!((1..=100).contains(&count));

        let data = c["results"]["data"].as_array().unwrap();
        let categories: Vec<&str> = data
            .iter()
            .map(|d| d["category"].as_str().unwrap())
            .collect();
        assert_eq!(categories, ["A", "B", "C"]);
        for d in data {
            let v = d["value"].as_f64().unwrap();
            assert!((0.0..100.0).contains(&v));
            assert!(uuid::Uuid::parse_str(d["id"].as_str().unwrap()).is_ok());
        }
        assert_ne!(data[0]["id"], data[1]["id"]);
    }

    #[test]
    fn table_rows_step_back_one_day() {
        let mut rng = seeded(4);
        let c = generate(Shape::Table, "list", fixed_now(), &mut rng).content;
        assert_eq!(c["headers"], json!(["ID", "Name", "Value", "Timestamp"]));

        let rows = c["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0][0], "ROW-1");
        assert_eq!(rows[4][1], "Item E");
        assert_eq!(rows[0][3], "2024-03-10 12:00:00");
        assert_eq!(rows[2][3], "2024-03-08 12:00:00");
        for row in rows {
            let v = row[2].as_f64().unwrap();
            assert!((0.0..1000.0).contains(&v));
            assert_eq!(round2(v), v);
        }
    }

    #[test]
    fn log_entries_step_back_five_minutes() {
        let mut rng = seeded(5);
        let c = generate(Shape::Log, "logs", fixed_now(), &mut rng).content;
        let entries = c.as_array().unwrap();
        assert_eq!(entries.len(), 10);

        let stamp = |e: &Value| {
            NaiveDateTime::parse_from_str(e["timestamp"].as_str().unwrap(), ROW_TIME_FORMAT)
                .unwrap()
        };
        assert_eq!(stamp(&entries[0]) - stamp(&entries[9]), Duration::minutes(45));

        for (i, e) in entries.iter().enumerate() {
            assert!(LOG_LEVELS.contains(&e["level"].as_str().unwrap()));
            let msg = e["message"].as_str().unwrap();
            assert!(msg.starts_with(&format!("Log entry {} ", i + 1)));
            assert!(msg.contains("'logs'"));
            let expected = if i % 4 == 3 {
                "Error detected"
            } else {
                "Normal operation"
            };
            assert!(msg.ends_with(expected), "entry {i}: {msg}");
        }
    }

    #[test]
    fn log_suffix_ignores_drawn_level() {
        for seed in 0..20 {
            let c = generate(Shape::Log, "q", fixed_now(), &mut seeded(seed)).content;
            let flagged: Vec<usize> = c
                .as_array()
                .unwrap()
                .iter()
                .enumerate()
                .filter(|(_, e)| e["message"].as_str().unwrap().ends_with("Error detected"))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(flagged, [3, 7], "seed {seed}");
        }
    }

    #[test]
    fn dashboard_has_four_charts_in_order() {
        let mut rng = seeded(6);
        let c = generate(Shape::Dashboard, "sales", fixed_now(), &mut rng).content;
        assert_eq!(c["title"], "Dashboard for 'sales'");
        assert!(c["description"].is_string());

        let charts = c["charts"].as_array().unwrap();
        let types: Vec<&str> = charts.iter().map(|c| c["type"].as_str().unwrap()).collect();
        assert_eq!(types, ["line", "bar", "pie", "area"]);

        assert_eq!(charts[0]["data"].as_array().unwrap().len(), 10);
        assert_eq!(charts[1]["data"].as_array().unwrap().len(), 6);
        assert_eq!(charts[3]["data"].as_array().unwrap().len(), 7);
        assert!(charts.iter().all(|c| c["title"].is_string()));
    }

    #[test]
    fn pie_segments_always_sum_to_total() {
        for seed in 0..500 {
            let mut rng = seeded(seed);
            let segments = pie_segments(&mut rng);
            let sum: u32 = segments.iter().map(|(_, v)| v).sum();
            assert_eq!(sum, 100, "seed {seed}: {segments:?}");
            assert!(segments[..4].iter().all(|(_, v)| *v >= 10));
            assert!(segments.len() == 4 || segments[4].0 == "Other");
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = generate(Shape::Dashboard, "x", fixed_now(), &mut seeded(7));
        let b = generate(Shape::Dashboard, "x", fixed_now(), &mut seeded(7));
        assert_eq!(a, b);
    }
}

use crate::error::{AuditError, Result};
use crate::models::lighthouse::audit::{CUMULATIVE_LAYOUT_SHIFT, LARGEST_CONTENTFUL_PAINT};
use crate::models::{Audit, CategoryScore, Report, ReportHeader, Summary, Vitals, NOT_AVAILABLE};
use chrono::SecondsFormat;
use std::fmt::Write;

/// Convert a `[0, 1]` category score to a whole number out of 100, rounding
/// halves away from zero (0.875 -> 88). `None` if the score is out of range.
pub fn round_score(score: f64) -> Option<u8> {
    if !(0.0..=1.0).contains(&score) {
        return None;
    }
    Some((score * 100.0).round() as u8)
}

/// Project a decoded report onto the printed summary.
///
/// Every category and the LCP and CLS display values are required. INP is
/// the single tolerated gap: older Lighthouse versions do not emit it, so it
/// falls back to [`NOT_AVAILABLE`].
pub fn extract_summary(report: &Report) -> Result<Summary> {
    let scores = report
        .categories
        .iter()
        .map(|(key, category)| {
            let score = round_score(category.score).ok_or_else(|| {
                AuditError::UnexpectedShape(format!(
                    "category {:?} score {} is outside [0, 1]",
                    key, category.score
                ))
            })?;
            Ok(CategoryScore {
                title: category.title.clone(),
                score,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let vitals = Vitals {
        lcp: required_display_value(
            report.audits.largest_contentful_paint.as_ref(),
            LARGEST_CONTENTFUL_PAINT,
        )?,
        cls: required_display_value(
            report.audits.cumulative_layout_shift.as_ref(),
            CUMULATIVE_LAYOUT_SHIFT,
        )?,
        inp: report
            .audits
            .interaction_to_next_paint
            .as_ref()
            .and_then(|audit| audit.display_value.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    };

    let header = ReportHeader {
        lighthouse_version: report.lighthouse_version.clone(),
        requested_url: report
            .requested_url
            .clone()
            .or_else(|| report.final_url.clone()),
        fetch_time: report
            .fetch_time
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        runtime_error: report.runtime_error.as_ref().map(|e| match &e.message {
            Some(message) => format!("{}: {}", e.code, message),
            None => e.code.clone(),
        }),
    };

    Ok(Summary {
        header,
        scores,
        vitals,
    })
}

fn required_display_value(audit: Option<&Audit>, key: &str) -> Result<String> {
    let audit = audit.ok_or_else(|| AuditError::UnexpectedShape(format!("missing audit {:?}", key)))?;
    audit.display_value.clone().ok_or_else(|| {
        AuditError::UnexpectedShape(format!("audit {:?} has no displayValue", key))
    })
}

/// Text printed at the end of a run: an optional header, the category
/// scores, then the vitals.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let header = &summary.header;

    if let Some(version) = &header.lighthouse_version {
        let _ = write!(out, "Lighthouse {}", version);
        if let Some(url) = &header.requested_url {
            let _ = write!(out, " report for {}", url);
        }
        if let Some(fetched) = &header.fetch_time {
            let _ = write!(out, " (fetched {})", fetched);
        }
        out.push('\n');
    }
    if let Some(runtime_error) = &header.runtime_error {
        let _ = writeln!(out, "Warning: Lighthouse reported a runtime error: {}", runtime_error);
    }

    out.push_str("\n--- LIGHTHOUSE SCORES ---\n");
    for category in &summary.scores {
        let _ = writeln!(out, "{}: {}", category.title, category.score);
    }

    out.push_str("\n--- CORE WEB VITALS ---\n");
    let _ = writeln!(out, "LCP: {}", summary.vitals.lcp);
    let _ = writeln!(out, "CLS: {}", summary.vitals.cls);
    let _ = writeln!(out, "INP: {}", summary.vitals.inp);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(json: &str) -> Report {
        serde_json::from_str(json).expect("report fixture")
    }

    const VITALS: &str = r#"{
        "largest-contentful-paint": {"displayValue": "2.1 s"},
        "cumulative-layout-shift": {"displayValue": "0.02"},
        "interaction-to-next-paint": {"displayValue": "120 ms"}
    }"#;

    #[test]
    fn rounds_to_nearest_whole_score() {
        assert_eq!(round_score(0.873), Some(87));
        assert_eq!(round_score(1.0), Some(100));
        assert_eq!(round_score(0.875), Some(88));
        assert_eq!(round_score(0.0), Some(0));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        assert_eq!(round_score(1.2), None);
        assert_eq!(round_score(-0.1), None);
        assert_eq!(round_score(f64::NAN), None);

        let report = report(&format!(
            r#"{{"categories": {{"seo": {{"title": "SEO", "score": 4}}}}, "audits": {}}}"#,
            VITALS
        ));
        let err = extract_summary(&report).expect_err("score 4");
        assert!(matches!(err, AuditError::UnexpectedShape(ref m) if m.contains("seo")));
    }

    #[test]
    fn extracts_scores_in_report_order() {
        let report = report(&format!(
            r#"{{"categories": {{
                "performance": {{"title": "Performance", "score": 0.873}},
                "accessibility": {{"title": "Accessibility", "score": 1.0}}
            }}, "audits": {}}}"#,
            VITALS
        ));
        let summary = extract_summary(&report).expect("summary");

        assert_eq!(
            summary.scores,
            vec![
                CategoryScore { title: "Performance".into(), score: 87 },
                CategoryScore { title: "Accessibility".into(), score: 100 },
            ]
        );
        assert_eq!(summary.vitals.lcp, "2.1 s");
        assert_eq!(summary.vitals.inp, "120 ms");
    }

    #[test]
    fn missing_inp_uses_placeholder() {
        let report = report(
            r#"{"categories": {}, "audits": {
                "largest-contentful-paint": {"displayValue": "2.1 s"},
                "cumulative-layout-shift": {"displayValue": "0"}
            }}"#,
        );
        let summary = extract_summary(&report).expect("summary");
        assert_eq!(summary.vitals.inp, NOT_AVAILABLE);

        let without_display = report_with_inp_no_display();
        assert_eq!(
            extract_summary(&without_display).expect("summary").vitals.inp,
            "N/A"
        );
    }

    fn report_with_inp_no_display() -> Report {
        report(
            r#"{"categories": {}, "audits": {
                "largest-contentful-paint": {"displayValue": "2.1 s"},
                "cumulative-layout-shift": {"displayValue": "0"},
                "interaction-to-next-paint": {"score": null}
            }}"#,
        )
    }

    #[test]
    fn odd_unrelated_audits_do_not_block_the_summary() {
        let report = report(
            r#"{"categories": {"seo": {"title": "SEO", "score": 0.9}}, "audits": {
                "largest-contentful-paint": {"displayValue": "2.1 s"},
                "cumulative-layout-shift": {"displayValue": "0"},
                "some-other-audit": {"displayValue": ["%d ms", 12]},
                "interaction-to-next-paint": {"displayValue": 120}
            }}"#,
        );
        let summary = extract_summary(&report).expect("summary");
        assert_eq!(summary.scores[0].score, 90);
        assert_eq!(summary.vitals.lcp, "2.1 s");
        assert_eq!(summary.vitals.inp, NOT_AVAILABLE);
    }

    #[test]
    fn missing_lcp_or_cls_is_not_tolerated() {
        let no_lcp = report(
            r#"{"categories": {}, "audits": {
                "cumulative-layout-shift": {"displayValue": "0"}
            }}"#,
        );
        let err = extract_summary(&no_lcp).expect_err("lcp required");
        assert!(matches!(err, AuditError::UnexpectedShape(ref m) if m.contains("largest-contentful-paint")));
        assert!(!err.is_tool_failure());

        let cls_without_display = report(
            r#"{"categories": {}, "audits": {
                "largest-contentful-paint": {"displayValue": "2.1 s"},
                "cumulative-layout-shift": {"score": 1}
            }}"#,
        );
        assert!(extract_summary(&cls_without_display).is_err());
    }

    #[test]
    fn renders_both_sections() {
        let summary = Summary {
            header: ReportHeader::default(),
            scores: vec![CategoryScore { title: "SEO".into(), score: 91 }],
            vitals: Vitals {
                lcp: "1.0 s".into(),
                cls: "0".into(),
                inp: NOT_AVAILABLE.into(),
            },
        };

        assert_eq!(
            render_summary(&summary),
            "\n--- LIGHTHOUSE SCORES ---\nSEO: 91\n\n--- CORE WEB VITALS ---\nLCP: 1.0 s\nCLS: 0\nINP: N/A\n"
        );
    }

    #[test]
    fn renders_header_and_runtime_warning() {
        let report = report(&format!(
            r#"{{"lighthouseVersion": "12.2.1",
                "requestedUrl": "http://localhost:3000/",
                "fetchTime": "2026-10-16T09:30:00.000Z",
                "runtimeError": {{"code": "NO_FCP"}},
                "categories": {{}}, "audits": {}}}"#,
            VITALS
        ));
        let text = render_summary(&extract_summary(&report).expect("summary"));
        assert!(text.starts_with(
            "Lighthouse 12.2.1 report for http://localhost:3000/ (fetched 2026-10-16T09:30:00Z)\n"
        ));
        assert!(text.contains("runtime error: NO_FCP\n"));
    }
}

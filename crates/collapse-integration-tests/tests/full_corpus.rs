//! The whole corpus, end to end.

use std::collections::HashSet;

use collapse_chapters::{in_part, registry, ChapterReport};

#[test]
fn every_chapter_passes_every_check() {
    for chapter in registry() {
        let report = chapter.run();
        let failures: Vec<String> = report
            .failures()
            .map(|c| {
                format!(
                    "{}/{}: computed {:e}, expected {:e}",
                    report.id, c.name, c.computed, c.expected
                )
            })
            .collect();
        assert!(failures.is_empty(), "failed checks:\n{}", failures.join("\n"));
    }
}

#[test]
fn registry_ids_are_unique() {
    let mut seen = HashSet::new();
    for chapter in registry() {
        assert!(seen.insert(chapter.id), "duplicate chapter id {}", chapter.id);
    }
}

#[test]
fn all_four_parts_are_populated() {
    for part in 1..=4 {
        let chapters = in_part(part).unwrap();
        assert!(!chapters.is_empty(), "part {} is empty", part);
    }
}

#[test]
fn check_names_are_unique_within_chapters() {
    for chapter in registry() {
        let report = chapter.run();
        let mut names = HashSet::new();
        for check in &report.checks {
            assert!(
                names.insert(check.name.clone()),
                "duplicate check name {} in chapter {}",
                check.name,
                report.id
            );
        }
    }
}

#[test]
fn reports_serialize_and_deserialize() {
    let reports: Vec<ChapterReport> = registry().iter().map(|c| c.run()).collect();
    let json = serde_json::to_string_pretty(&reports).unwrap();
    let back: Vec<ChapterReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(reports, back);

    // Verdicts survive the round-trip.
    for (original, restored) in reports.iter().zip(&back) {
        assert_eq!(original.all_passed(), restored.all_passed());
    }
}

#[test]
fn corpus_totals() {
    let reports: Vec<ChapterReport> = registry().iter().map(|c| c.run()).collect();
    assert_eq!(reports.len(), 13);
    let checks: usize = reports.iter().map(ChapterReport::len).sum();
    assert!(checks >= 60, "corpus shrank to {} checks", checks);
}

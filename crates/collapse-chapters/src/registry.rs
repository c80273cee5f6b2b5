//! The ordered chapter registry.

use tracing::debug;

use crate::report::{ChapterId, ChapterReport};
use crate::{part1, part2, part3, part4, ChapterError, Result};

/// A registered chapter: identity plus its runner.
#[derive(Debug, Clone, Copy)]
pub struct Chapter {
    /// Stable identifier, ordered by part then number.
    pub id: ChapterId,
    /// Chapter title as printed in reports.
    pub title: &'static str,
    runner: fn() -> ChapterReport,
}

impl Chapter {
    const fn new(part: u8, number: u8, title: &'static str, runner: fn() -> ChapterReport) -> Self {
        Self {
            id: ChapterId::new(part, number),
            title,
            runner,
        }
    }

    /// Execute the chapter's derivations.
    pub fn run(&self) -> ChapterReport {
        debug!(chapter = %self.id, title = self.title, "running chapter");
        (self.runner)()
    }
}

const CHAPTERS: &[Chapter] = &[
    Chapter::new(1, 1, "Collapse limit constants from structure alone", part1::foundations),
    Chapter::new(1, 2, "Speed limit constant c* from collapse paths", part1::speed_limit),
    Chapter::new(1, 3, "Action quantum hbar* from closed rank loops", part1::action_quantum),
    Chapter::new(1, 4, "Gravitational coupling G* from rank entropy", part1::gravitational_coupling),
    Chapter::new(1, 5, "Collapse Planck scale", part1::planck_scale),
    Chapter::new(2, 1, "Scale mapping to SI units", part2::scale_mapping),
    Chapter::new(2, 2, "Observer depth below the Planck scale", part2::observer_depth),
    Chapter::new(2, 3, "Zeckendorf structure of the speed of light", part2::zeckendorf_speed),
    Chapter::new(3, 1, "Fine-structure constant from rank-6/7 averaging", part3::fine_structure_average),
    Chapter::new(3, 2, "Phi-trace ranks of the SI constants", part3::phi_trace_ranks),
    Chapter::new(3, 3, "Atomic constants downstream of alpha", part3::atomic_constants),
    Chapter::new(4, 1, "Dark-energy fraction from the binary cascade", part4::dark_energy),
    Chapter::new(4, 2, "Hubble scale and critical density", part4::hubble_scale),
];

/// All chapters, ordered by id.
pub fn registry() -> &'static [Chapter] {
    CHAPTERS
}

/// Look a chapter up by id.
pub fn find(id: ChapterId) -> Result<&'static Chapter> {
    CHAPTERS
        .iter()
        .find(|c| c.id == id)
        .ok_or(ChapterError::UnknownChapter(id))
}

/// All chapters of one part.
pub fn in_part(part: u8) -> Result<Vec<&'static Chapter>> {
    let chapters: Vec<_> = CHAPTERS.iter().filter(|c| c.id.part == part).collect();
    if chapters.is_empty() {
        return Err(ChapterError::UnknownPart(part));
    }
    Ok(chapters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        for pair in CHAPTERS.windows(2) {
            assert!(
                pair[0].id < pair[1].id,
                "{} must precede {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn reports_carry_their_registry_id() {
        for chapter in registry() {
            let report = chapter.run();
            assert_eq!(report.id, chapter.id);
            assert_eq!(report.title, chapter.title);
            assert!(!report.is_empty(), "chapter {} has no checks", chapter.id);
        }
    }

    #[test]
    fn find_known_and_unknown() {
        assert!(find(ChapterId::new(1, 1)).is_ok());
        assert!(matches!(
            find(ChapterId::new(9, 9)),
            Err(ChapterError::UnknownChapter(id)) if id == ChapterId::new(9, 9)
        ));
    }

    #[test]
    fn parts_partition_the_registry() {
        let total: usize = (1..=4).map(|p| in_part(p).unwrap().len()).sum();
        assert_eq!(total, CHAPTERS.len());
        assert!(matches!(in_part(5), Err(ChapterError::UnknownPart(5))));
    }
}

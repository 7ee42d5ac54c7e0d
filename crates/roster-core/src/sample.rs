//! Sample data generator.
//!
//! Adds a batch of randomized students and courses, then gives every
//! student in the store one mark per course in the store, including
//! entries that existed before the batch.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SampleSettings;
use crate::error::SampleError;
use crate::model::{Course, Mark, Student};
use crate::store::RosterStore;

const ID_YEARS: RangeInclusive<u32> = 20..=29;
const ID_SERIALS: RangeInclusive<u32> = 100..=999;
const DOB_YEARS: RangeInclusive<u32> = 1990..=2000;
const SAMPLE_MARKS: RangeInclusive<u8> = 0..=20;

/// What a generator run added to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSummary {
    pub students_added: usize,
    pub courses_added: usize,
    pub marks_added: usize,
}

/// Populates a store with demonstration data.
pub struct SampleGenerator<'a> {
    settings: &'a SampleSettings,
}

impl<'a> SampleGenerator<'a> {
    pub fn new(settings: &'a SampleSettings) -> Self {
        Self { settings }
    }

    /// Add the configured number of students and courses, then the full
    /// student × course cross product of marks.
    ///
    /// Ids and names are drawn before anything is inserted, so a failed run
    /// leaves the store untouched.
    pub fn populate<R: Rng + ?Sized>(
        &self,
        store: &mut RosterStore,
        rng: &mut R,
    ) -> Result<SampleSummary, SampleError> {
        if self.settings.students > 0 && self.settings.student_names.is_empty() {
            return Err(SampleError::EmptyNamePool("student"));
        }

        let student_ids = draw_ids(
            "student",
            "BI",
            &store.student_ids(),
            self.settings.students,
            rng,
        )?;
        let course_ids = draw_ids(
            "course",
            "C",
            &store.course_ids(),
            self.settings.courses,
            rng,
        )?;
        let course_names = self.draw_course_names(store, course_ids.len(), rng)?;

        for id in student_ids {
            let name = self
                .settings
                .student_names
                .choose(rng)
                .ok_or(SampleError::EmptyNamePool("student"))?;
            let dob = random_dob(rng);
            store.add_student(Student::new(name.as_str(), id, dob))?;
        }

        for (id, name) in course_ids.into_iter().zip(course_names) {
            store.add_course(Course::new(name, id))?;
        }

        let course_ids = store.course_ids();
        let mut marks_added = 0;
        for index in 0..store.student_count() {
            for course_id in &course_ids {
                let value = rng.gen_range(SAMPLE_MARKS);
                store.add_mark(index, Mark::whole(course_id.as_str(), value))?;
                marks_added += 1;
            }
        }

        let summary = SampleSummary {
            students_added: self.settings.students,
            courses_added: self.settings.courses,
            marks_added,
        };
        tracing::info!(
            students = summary.students_added,
            courses = summary.courses_added,
            marks = summary.marks_added,
            "sample data generated"
        );
        Ok(summary)
    }

    /// Pick `count` course names not yet in the store, without replacement.
    ///
    /// Once every candidate is taken, candidates get a numeric suffix
    /// (`Maths 2`, `Maths 3`, ...).
    fn draw_course_names<R: Rng + ?Sized>(
        &self,
        store: &RosterStore,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, SampleError> {
        let pool = &self.settings.course_names;
        if count > 0 && pool.is_empty() {
            return Err(SampleError::EmptyNamePool("course"));
        }

        let mut taken: HashSet<String> = store.courses().iter().map(|c| c.name.clone()).collect();
        let mut fresh: Vec<&String> = pool.iter().filter(|n| !taken.contains(*n)).collect();
        fresh.shuffle(rng);

        let mut names = Vec::with_capacity(count);
        for name in fresh {
            if names.len() == count {
                break;
            }
            if taken.insert(name.clone()) {
                names.push(name.clone());
            }
        }

        let mut suffix = 2;
        while names.len() < count {
            for base in pool {
                if names.len() == count {
                    break;
                }
                let candidate = format!("{base} {suffix}");
                if taken.insert(candidate.clone()) {
                    names.push(candidate);
                }
            }
            suffix += 1;
        }

        Ok(names)
    }
}

/// Draw `count` distinct ids of the form `{20..=29}{infix}{100..=999}` absent from `taken`.
fn draw_ids<R: Rng + ?Sized>(
    kind: &'static str,
    infix: &str,
    taken: &[String],
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, SampleError> {
    let taken: HashSet<&str> = taken.iter().map(String::as_str).collect();
    let free: Vec<String> = ID_YEARS
        .flat_map(|year| ID_SERIALS.map(move |serial| format!("{year}{infix}{serial}")))
        .filter(|id| !taken.contains(id.as_str()))
        .collect();

    if free.len() < count {
        return Err(SampleError::IdsExhausted {
            kind,
            requested: count,
            available: free.len(),
        });
    }

    let mut picked: Vec<String> = free.choose_multiple(rng, count).cloned().collect();
    picked.shuffle(rng);
    Ok(picked)
}

fn random_dob<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        rng.gen_range(DOB_YEARS),
        rng.gen_range(1..=12u32),
        rng.gen_range(1..=28u32)
    )
}

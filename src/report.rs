//! Plain-text rendering of catalogs, solutions and verdicts.

use crate::catalog::Catalog;
use crate::solver::Solution;
use crate::verify::{Verdict, Verification};
use std::fmt;

const WIDE: usize = 80;
const NARROW: usize = 50;

/// Tabular listing of a catalog.
pub struct CatalogTable<'a>(pub &'a Catalog);

impl fmt::Display for CatalogTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "COURSE CATALOG")?;
        writeln!(f, "{}", "=".repeat(WIDE))?;
        writeln!(f, "{:35} {:>6} {:>8}  Category", "Course", "Hours", "Impact")?;
        writeln!(f, "{}", "-".repeat(WIDE))?;
        for c in self.0 {
            writeln!(f, "{:35} {:6} {:8}  {}", c.name, c.hours, c.impact, c.category)?;
        }
        write!(f, "{}", "-".repeat(WIDE))
    }
}

/// One solver's result under a heading.
pub struct SolutionReport<'a> {
    pub title: &'a str,
    pub solution: &'a Solution,
}

impl fmt::Display for SolutionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.solution;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Maximum impact: {} points", s.value)?;
        writeln!(f, "Hours used: {}h", s.total_hours)?;
        writeln!(f, "Recommended courses:")?;
        writeln!(f, "{}", "-".repeat(NARROW))?;
        for c in &s.selected {
            writeln!(
                f,
                "  * {} ({}h) -> impact {} | {}",
                c.name, c.hours, c.impact, c.category
            )?;
        }
        write!(f, "{}", "-".repeat(NARROW))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Verdict::Agree => "agree",
            Verdict::ItemsetDiffers => "itemset differs",
            Verdict::Disagree => "disagree",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CONSISTENCY CHECK")?;
        writeln!(f, "{}", "=".repeat(60))?;
        match self.verdict {
            Verdict::Agree => {
                writeln!(f, "SUCCESS: both algorithms returned the same optimal selection.")?;
                write!(f, "Courses: {:?}", self.memoized_ids)
            }
            Verdict::ItemsetDiffers => {
                writeln!(
                    f,
                    "NOTICE: equal impact ({}) but different selections (tied optimum).",
                    self.memoized_value
                )?;
                writeln!(f, "  memoized:  {:?} ({}h)", self.memoized_ids, self.memoized_hours)?;
                write!(f, "  tabulated: {:?} ({}h)", self.tabulated_ids, self.tabulated_hours)
            }
            Verdict::Disagree => {
                writeln!(f, "ERROR: the two methods diverged. Review the implementations.")?;
                writeln!(f, "  memoized value:  {}", self.memoized_value)?;
                write!(f, "  tabulated value: {}", self.tabulated_value)
            }
        }
    }
}

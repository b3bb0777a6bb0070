//! # Filters and Rollups
//!
//! Pure predicates and aggregates over fetched records. Screens keep their
//! search terms; these functions decide what is shown.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::models::{Candidate, Internship, InternshipStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    /// Cycles to the next filter (wraps around)
    pub fn next(self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Open,
            StatusFilter::Open => StatusFilter::Closed,
            StatusFilter::Closed => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Open => "Active",
            StatusFilter::Closed => "Closed",
        }
    }

    fn admits(self, status: InternshipStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => status == InternshipStatus::Open,
            StatusFilter::Closed => status == InternshipStatus::Closed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternshipFilter {
    /// Matches title or company.
    pub search: String,
    pub status: StatusFilter,
    pub company: String,
    pub location: String,
}

impl InternshipFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status == StatusFilter::All
            && self.company.trim().is_empty()
            && self.location.trim().is_empty()
    }

    pub fn matches(&self, internship: &Internship) -> bool {
        let search = self.search.trim();
        let matches_search = search.is_empty()
            || contains_ci(&internship.title, search)
            || contains_ci(&internship.company, search);
        matches_search
            && self.status.admits(internship.status)
            && contains_ci(&internship.company, self.company.trim())
            && contains_ci(&internship.location, self.location.trim())
    }

    pub fn apply<'a>(&self, internships: &'a [Internship]) -> Vec<&'a Internship> {
        internships.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Case-insensitive match over name, education, location or any skill.
pub fn candidate_matches(candidate: &Candidate, term: &str) -> bool {
    let term = term.trim();
    term.is_empty()
        || contains_ci(&candidate.name, term)
        || contains_ci(&candidate.education, term)
        || contains_ci(&candidate.location, term)
        || candidate.skills.iter().any(|s| contains_ci(s, term))
}

pub fn filter_candidates<'a>(candidates: &'a [Candidate], term: &str) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|c| candidate_matches(c, term))
        .collect()
}

/// Headline numbers for the dashboard and reports screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternshipStats {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub applicants: u64,
    /// Sum of advertised positions; internships without a capacity add nothing.
    pub capacity: u64,
    pub companies: usize,
}

pub fn internship_stats(internships: &[Internship]) -> InternshipStats {
    let companies: BTreeSet<&str> = internships
        .iter()
        .map(|i| i.company.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    InternshipStats {
        total: internships.len(),
        open: internships
            .iter()
            .filter(|i| i.status == InternshipStatus::Open)
            .count(),
        closed: internships
            .iter()
            .filter(|i| i.status == InternshipStatus::Closed)
            .count(),
        applicants: internships.iter().map(|i| u64::from(i.applicants)).sum(),
        capacity: internships.iter().filter_map(|i| i.capacity).map(u64::from).sum(),
        companies: companies.len(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateStats {
    pub total: usize,
    pub applications: u64,
    pub locations: usize,
}

pub fn candidate_stats(candidates: &[Candidate]) -> CandidateStats {
    let locations: BTreeSet<String> = candidates
        .iter()
        .map(|c| c.location.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    CandidateStats {
        total: candidates.len(),
        applications: candidates.iter().map(|c| u64::from(c.applications)).sum(),
        locations: locations.len(),
    }
}

/// One row of the companies screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRollup {
    pub company: String,
    pub internships: usize,
    pub open: usize,
    pub applicants: u64,
    pub capacity: u64,
}

/// Groups internships by company, sorted by company name.
pub fn company_rollups(internships: &[Internship]) -> Vec<CompanyRollup> {
    let mut by_company: BTreeMap<&str, CompanyRollup> = BTreeMap::new();
    for internship in internships {
        let name = match internship.company.trim() {
            "" => "(unknown)",
            name => name,
        };
        let entry = by_company.entry(name).or_insert_with(|| CompanyRollup {
            company: name.to_string(),
            internships: 0,
            open: 0,
            applicants: 0,
            capacity: 0,
        });
        entry.internships += 1;
        if internship.status == InternshipStatus::Open {
            entry.open += 1;
        }
        entry.applicants += u64::from(internship.applicants);
        entry.capacity += internship.capacity.map(u64::from).unwrap_or(0);
    }
    by_company.into_values().collect()
}

/// Internship counts per location, most common first.
pub fn location_breakdown(internships: &[Internship]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for internship in internships {
        let location = internship.location.trim();
        if !location.is_empty() {
            *counts.entry(location).or_default() += 1;
        }
    }
    let mut rows: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(location, n)| (location.to_string(), n))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internship(title: &str, company: &str, location: &str, status: InternshipStatus) -> Internship {
        Internship {
            id: title.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            applicants: 10,
            status,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Internship> {
        vec![
            internship("Software Development Intern", "GAIL (India) Limited", "New Delhi", InternshipStatus::Open),
            internship("Data Analytics Intern", "REC Limited", "Mumbai", InternshipStatus::Open),
            internship("Marketing Research Intern", "Unilever India", "Bangalore", InternshipStatus::Closed),
            internship("Finance Intern", "REC Limited", "Mumbai", InternshipStatus::Closed),
        ]
    }

    #[test]
    fn test_empty_filter_admits_everything() {
        let filter = InternshipFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 4);
    }

    #[test]
    fn test_search_matches_title_or_company_case_insensitively() {
        let data = sample();
        let filter = InternshipFilter {
            search: "rec lim".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&data).len(), 2);

        let filter = InternshipFilter {
            search: "MARKETING".to_string(),
            ..Default::default()
        };
        let hits = filter.apply(&data);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company, "Unilever India");
    }

    #[test]
    fn test_filters_combine() {
        let data = sample();
        let filter = InternshipFilter {
            status: StatusFilter::Closed,
            location: "mumbai".to_string(),
            ..Default::default()
        };
        let hits = filter.apply(&data);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Finance Intern");
    }

    #[test]
    fn test_status_filter_cycle() {
        assert_eq!(StatusFilter::All.next(), StatusFilter::Open);
        assert_eq!(StatusFilter::Open.next(), StatusFilter::Closed);
        assert_eq!(StatusFilter::Closed.next(), StatusFilter::All);
    }

    #[test]
    fn test_candidate_search_covers_skills_and_education() {
        let candidates = vec![
            Candidate {
                name: "Priya Sharma".to_string(),
                education: "B.Tech Computer Science".to_string(),
                location: "Delhi".to_string(),
                skills: vec!["React".to_string(), "TypeScript".to_string()],
                ..Default::default()
            },
            Candidate {
                name: "Rahul Kumar".to_string(),
                education: "MBA Finance".to_string(),
                location: "Mumbai".to_string(),
                skills: vec!["Excel".to_string()],
                ..Default::default()
            },
        ];
        assert_eq!(filter_candidates(&candidates, "typescript").len(), 1);
        assert_eq!(filter_candidates(&candidates, "mba").len(), 1);
        assert_eq!(filter_candidates(&candidates, "mumbai")[0].name, "Rahul Kumar");
        assert_eq!(filter_candidates(&candidates, "  ").len(), 2);
        assert!(filter_candidates(&candidates, "kotlin").is_empty());
    }

    #[test]
    fn test_internship_stats() {
        let stats = internship_stats(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.open, 2);
        assert_eq!(stats.closed, 2);
        assert_eq!(stats.applicants, 40);
        assert_eq!(stats.companies, 3);
    }

    #[test]
    fn test_candidate_stats_counts_distinct_locations() {
        let candidates = vec![
            Candidate { location: "Delhi".to_string(), applications: 3, ..Default::default() },
            Candidate { location: "delhi".to_string(), applications: 1, ..Default::default() },
            Candidate { location: "Pune".to_string(), applications: 2, ..Default::default() },
        ];
        let stats = candidate_stats(&candidates);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.applications, 6);
        assert_eq!(stats.locations, 2);
    }

    #[test]
    fn test_company_rollups_group_and_sort() {
        let rollups = company_rollups(&sample());
        let names: Vec<&str> = rollups.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["GAIL (India) Limited", "REC Limited", "Unilever India"]);
        assert_eq!(rollups[1].internships, 2);
        assert_eq!(rollups[1].open, 1);
        assert_eq!(rollups[1].applicants, 20);
    }

    #[test]
    fn test_company_rollups_sum_capacity() {
        let mut data = sample();
        data[1].capacity = Some(5);
        data[3].capacity = Some(3);
        data[0].capacity = Some(20);
        let rollups = company_rollups(&data);
        assert_eq!(rollups[0].capacity, 20);
        assert_eq!(rollups[1].capacity, 8);
        assert_eq!(rollups[2].capacity, 0);
        assert_eq!(internship_stats(&data).capacity, 28);
    }

    #[test]
    fn test_location_breakdown_most_common_first() {
        let rows = location_breakdown(&sample());
        assert_eq!(rows[0], ("Mumbai".to_string(), 2));
        assert_eq!(rows.len(), 3);
    }
}

//! Codeforces profile statistics: solved problems and rating history.

use crate::transport::decode;
use crate::{ClientError, Transport};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

#[derive(Deserialize)]
struct Envelope<T> {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    result: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub index: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Submission {
    pub problem: Problem,
    #[serde(default)]
    pub verdict: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    #[serde(default)]
    pub contest_id: i64,
    #[serde(default)]
    pub contest_name: Option<String>,
    #[serde(default)]
    pub old_rating: i64,
    pub new_rating: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingPoint {
    pub name: String,
    pub rating: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestStats {
    /// Distinct problems with an accepted submission
    pub solved: usize,
    pub rating: Option<i64>,
    pub max_rating: Option<i64>,
    pub contests: usize,
    pub history: Vec<RatingPoint>,
}

impl ContestStats {
    pub fn rank(&self) -> Rank {
        Rank::from_rating(self.rating)
    }
}

/// Combine raw submissions and rating changes into profile statistics
pub fn summarize(submissions: &[Submission], changes: &[RatingChange]) -> ContestStats {
    let solved: HashSet<String> = submissions
        .iter()
        .filter(|sub| sub.verdict.as_deref() == Some("OK"))
        .map(|sub| {
            let contest = sub
                .problem
                .contest_id
                .map_or_else(|| "undefined".to_string(), |id| id.to_string());
            format!("{contest}-{}", sub.problem.index)
        })
        .collect();

    let history = changes
        .iter()
        .enumerate()
        .map(|(i, change)| RatingPoint {
            name: change
                .contest_name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("Contest {}", i + 1)),
            rating: change.new_rating,
        })
        .collect();

    let max_rating = changes
        .iter()
        .map(|change| change.new_rating)
        .max()
        .filter(|rating| *rating > 0);

    ContestStats {
        solved: solved.len(),
        rating: changes.last().map(|change| change.new_rating),
        max_rating,
        contests: changes.len(),
        history,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Unrated,
    Newbie,
    Pupil,
    Specialist,
    Expert,
    CandidateMaster,
    Master,
    InternationalMaster,
    Grandmaster,
    LegendaryGrandmaster,
}

impl Rank {
    pub fn from_rating(rating: Option<i64>) -> Rank {
        let Some(rating) = rating else {
            return Rank::Unrated;
        };
        match rating {
            r if r < 1200 => Rank::Newbie,
            r if r < 1400 => Rank::Pupil,
            r if r < 1600 => Rank::Specialist,
            r if r < 1900 => Rank::Expert,
            r if r < 2100 => Rank::CandidateMaster,
            r if r < 2300 => Rank::Master,
            r if r < 2400 => Rank::InternationalMaster,
            r if r < 2600 => Rank::Grandmaster,
            _ => Rank::LegendaryGrandmaster,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Unrated => "Unrated",
            Rank::Newbie => "Newbie",
            Rank::Pupil => "Pupil",
            Rank::Specialist => "Specialist",
            Rank::Expert => "Expert",
            Rank::CandidateMaster => "Candidate Master",
            Rank::Master => "Master",
            Rank::InternationalMaster => "International Master",
            Rank::Grandmaster => "Grandmaster",
            Rank::LegendaryGrandmaster => "Legendary Grandmaster",
        }
    }

    /// Tier colour class
    pub fn text_class(&self) -> &'static str {
        match self {
            Rank::Unrated => "text-gray-400",
            Rank::Newbie => "text-gray-600",
            Rank::Pupil => "text-green-600",
            Rank::Specialist => "text-cyan-600",
            Rank::Expert => "text-blue-600",
            Rank::CandidateMaster => "text-purple-600",
            Rank::Master => "text-orange-500",
            Rank::InternationalMaster => "text-orange-600",
            Rank::Grandmaster => "text-red-500",
            Rank::LegendaryGrandmaster => "text-red-700",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct CodeforcesClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    handle: String,
}

impl CodeforcesClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            handle: handle.into(),
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Fetch submissions and rating history concurrently
    pub async fn stats(&self) -> Result<ContestStats, ClientError> {
        let (submissions, changes) = futures::join!(
            self.call::<Vec<Submission>>("user.status"),
            self.call::<Vec<RatingChange>>("user.rating"),
        );
        Ok(summarize(&submissions?, &changes?))
    }

    async fn call<T: serde::de::DeserializeOwned>(&self, method: &str) -> Result<T, ClientError> {
        let url = format!("{}/{}?handle={}", self.base_url, method, self.handle);
        let response = self.transport.get(&url).await?;
        let envelope: Envelope<T> = decode(&url, response)?;
        if envelope.status != "OK" {
            return Err(ClientError::Api(
                envelope.comment.unwrap_or_else(|| "API Error".to_string()),
            ));
        }
        envelope.result.ok_or_else(|| ClientError::Decode {
            url,
            message: "response has no result".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn submission(contest: i64, index: &str, verdict: &str) -> Submission {
        Submission {
            problem: Problem {
                contest_id: Some(contest),
                index: index.to_string(),
                name: String::new(),
            },
            verdict: Some(verdict.to_string()),
        }
    }

    fn change(name: Option<&str>, rating: i64) -> RatingChange {
        RatingChange {
            contest_id: 1,
            contest_name: name.map(str::to_string),
            old_rating: 0,
            new_rating: rating,
        }
    }

    #[test]
    fn test_solved_counts_distinct_accepted_problems() {
        let stats = summarize(
            &[
                submission(1, "A", "OK"),
                submission(1, "A", "OK"),
                submission(1, "B", "WRONG_ANSWER"),
                submission(2, "A", "OK"),
            ],
            &[],
        );
        assert_eq!(stats.solved, 2);
        assert_eq!(stats.rating, None);
        assert_eq!(stats.max_rating, None);
        assert_eq!(stats.rank(), Rank::Unrated);
    }

    #[test]
    fn test_rating_history() {
        let stats = summarize(
            &[],
            &[
                change(Some("Round 900"), 1350),
                change(None, 1520),
                change(Some("Round 950"), 1480),
            ],
        );
        assert_eq!(stats.rating, Some(1480));
        assert_eq!(stats.max_rating, Some(1520));
        assert_eq!(stats.contests, 3);
        assert_eq!(stats.history[1].name, "Contest 2");
        assert_eq!(stats.rank(), Rank::Specialist);
    }

    #[rstest]
    #[case(None, Rank::Unrated)]
    #[case(Some(0), Rank::Newbie)]
    #[case(Some(1199), Rank::Newbie)]
    #[case(Some(1200), Rank::Pupil)]
    #[case(Some(1899), Rank::Expert)]
    #[case(Some(1900), Rank::CandidateMaster)]
    #[case(Some(2300), Rank::InternationalMaster)]
    #[case(Some(2599), Rank::Grandmaster)]
    #[case(Some(3800), Rank::LegendaryGrandmaster)]
    fn test_rank_tiers(#[case] rating: Option<i64>, #[case] expected: Rank) {
        assert_eq!(Rank::from_rating(rating), expected);
    }

    #[test]
    fn test_rank_names() {
        assert_eq!(Rank::CandidateMaster.to_string(), "Candidate Master");
        assert_eq!(Rank::LegendaryGrandmaster.name(), "Legendary Grandmaster");
    }
}

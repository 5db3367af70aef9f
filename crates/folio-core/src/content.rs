//! Portfolio content model.
//!
//! Everything rendered on the page is fixed, hand-authored data: a
//! profile masthead plus one block of content per [`SectionId`]. The
//! built-in [`Portfolio::sample`] carries the reference page; a TOML
//! file with the same shape can replace it via [`Portfolio::load`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name, tagline, and avatar fallback shown in the masthead.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
}

impl Profile {
    /// Avatar fallback: first letter of each name word (at most two).
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

/// Fixed outbound link targets. Inert data, not behavior; an empty
/// string means the target is absent and its shortcut does nothing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Links {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub scholar: String,
    /// CV document, opened in the system viewer on request.
    #[serde(default)]
    pub cv: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub years: String,
}

/// Content of the About section.
///
/// Field order matters for TOML output: plain values (paragraphs,
/// skills) must serialize before the education array of tables.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub repo: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContestResult {
    pub contest: String,
    #[serde(default)]
    pub placement: String,
}

/// Handle and rank badge on one online judge.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JudgeProfile {
    pub site: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub badge: String,
}

/// Content of the Competitive section.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Competitive {
    #[serde(default)]
    pub results: Vec<ContestResult>,
    #[serde(default)]
    pub profiles: Vec<JudgeProfile>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Award {
    pub title: String,
    #[serde(default)]
    pub venue: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Highlight {
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

/// Content of the Achievements section.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Achievements {
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

/// The complete hand-authored page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Portfolio {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub competitive: Competitive,
    #[serde(default)]
    pub achievements: Achievements,
}

impl Portfolio {
    /// Load a portfolio from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Portfolio> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::content_not_found(path)
            } else {
                Error::Io(e)
            }
        })?;
        let portfolio: Portfolio = toml::from_str(&raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Parse a portfolio from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Portfolio> {
        let portfolio: Portfolio = toml::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::content_invalid("profile.name must not be empty"));
        }
        Ok(())
    }

    /// The built-in reference page shown when no content file is given.
    pub fn sample() -> Portfolio {
        Portfolio {
            profile: Profile {
                name: "John Doe".to_string(),
                tagline: "Research Scientist & Competitive Programmer".to_string(),
            },
            links: Links {
                email: "john.doe@example.com".to_string(),
                github: "https://github.com".to_string(),
                linkedin: "https://linkedin.com".to_string(),
                scholar: "https://scholar.google.com".to_string(),
                cv: "https://example.com/cv.pdf".to_string(),
            },
            about: About {
                paragraphs: vec![
                    "I am a research scientist specializing in machine learning and \
                     artificial intelligence. With over 5 years of experience in the \
                     field, I have contributed to various research projects and \
                     published papers in top-tier conferences and journals."
                        .to_string(),
                    "My research interests include deep learning, computer vision, and \
                     natural language processing. I am passionate about developing \
                     innovative solutions to complex problems and advancing the state \
                     of the art in AI research."
                        .to_string(),
                    "In addition to my research work, I am an avid competitive \
                     programmer with a strong track record in international \
                     competitions. I enjoy solving algorithmic challenges and \
                     continuously improving my problem-solving skills."
                        .to_string(),
                ],
                skills: [
                    "Machine Learning",
                    "Deep Learning",
                    "Python",
                    "TensorFlow",
                    "PyTorch",
                    "C++",
                    "Algorithms",
                    "Data Structures",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                education: vec![
                    Education {
                        degree: "Ph.D. in Computer Science".to_string(),
                        institution: "Stanford University".to_string(),
                        years: "2018-2022".to_string(),
                    },
                    Education {
                        degree: "M.S. in Computer Science".to_string(),
                        institution: "MIT".to_string(),
                        years: "2016-2018".to_string(),
                    },
                    Education {
                        degree: "B.S. in Computer Science".to_string(),
                        institution: "UC Berkeley".to_string(),
                        years: "2012-2016".to_string(),
                    },
                ],
            },
            publications: (2021..=2023)
                .map(|year| Publication {
                    title: "Novel Approach to Deep Learning for Computer Vision Tasks"
                        .to_string(),
                    authors: "John Doe, Jane Smith, Robert Johnson".to_string(),
                    venue: format!(
                        "International Conference on Computer Vision (ICCV), {year}"
                    ),
                    summary: "This paper presents a novel approach to deep learning for \
                              computer vision tasks, achieving state-of-the-art results \
                              on benchmark datasets."
                        .to_string(),
                    tags: vec![
                        "Computer Vision".to_string(),
                        "Deep Learning".to_string(),
                        "Neural Networks".to_string(),
                    ],
                })
                .collect(),
            projects: (1..=6)
                .map(|i| Project {
                    title: format!("Advanced Image Recognition System {i}"),
                    summary: "A deep learning-based image recognition system capable of \
                              identifying objects with high accuracy in real-time."
                        .to_string(),
                    tags: vec!["Computer Vision".to_string(), "PyTorch".to_string()],
                    repo: "https://github.com".to_string(),
                })
                .collect(),
            competitive: Competitive {
                results: vec![
                    ContestResult {
                        contest: "Google Code Jam".to_string(),
                        placement: "Global Finalist (Top 25), 2022".to_string(),
                    },
                    ContestResult {
                        contest: "Facebook Hacker Cup".to_string(),
                        placement: "Round 3 Qualifier, 2021".to_string(),
                    },
                    ContestResult {
                        contest: "ACM ICPC".to_string(),
                        placement: "World Finals Participant, 2019".to_string(),
                    },
                    ContestResult {
                        contest: "Codeforces".to_string(),
                        placement: "International Grandmaster (Rating: 2700+)".to_string(),
                    },
                ],
                profiles: vec![
                    JudgeProfile {
                        site: "Codeforces".to_string(),
                        handle: "JohnDoe".to_string(),
                        badge: "Rank: 42".to_string(),
                    },
                    JudgeProfile {
                        site: "LeetCode".to_string(),
                        handle: "JohnDoe".to_string(),
                        badge: "Rank: 127".to_string(),
                    },
                    JudgeProfile {
                        site: "HackerRank".to_string(),
                        handle: "JohnDoe".to_string(),
                        badge: "6 stars".to_string(),
                    },
                    JudgeProfile {
                        site: "AtCoder".to_string(),
                        handle: "JohnDoe".to_string(),
                        badge: "Rating: 2350".to_string(),
                    },
                ],
            },
            achievements: Achievements {
                awards: vec![
                    Award {
                        title: "Best Paper Award".to_string(),
                        venue: "CVPR 2022".to_string(),
                    },
                    Award {
                        title: "Research Excellence Award".to_string(),
                        venue: "Stanford University, 2021".to_string(),
                    },
                    Award {
                        title: "Young Researcher Award".to_string(),
                        venue: "AI Conference, 2020".to_string(),
                    },
                ],
                highlights: vec![
                    Highlight {
                        title: "Google Research Grant".to_string(),
                        detail: "Awarded $150,000 for research on advanced machine \
                                 learning techniques (2022)"
                            .to_string(),
                    },
                    Highlight {
                        title: "Patent".to_string(),
                        detail: "\"Method for Efficient Neural Network Training\" \
                                 (US Patent #12345678, 2021)"
                            .to_string(),
                    },
                    Highlight {
                        title: "Invited Speaker".to_string(),
                        detail: "International Conference on Machine Learning (ICML), \
                                 2022"
                            .to_string(),
                    },
                    Highlight {
                        title: "Program Committee Member".to_string(),
                        detail: "NeurIPS, ICLR, CVPR (2020-Present)".to_string(),
                    },
                ],
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! # Engineering Knowledge Base
//!
//! A static taxonomy of engineering domains, topics, and concepts used to
//! enrich the course-generation prompt. Matching is plain substring
//! containment in both directions, collected in insertion order and capped;
//! there is no ranking.

/// One named concept inside a domain, with its grouped detail lists.
#[derive(Debug)]
pub struct Concept {
    pub name: &'static str,
    pub groups: &'static [(&'static str, &'static [&'static str])],
}

/// One engineering domain: a topic list plus a concept map.
#[derive(Debug)]
pub struct Domain {
    pub name: &'static str,
    pub topics: &'static [&'static str],
    pub concepts: &'static [Concept],
}

pub static KNOWLEDGE_BASE: &[Domain] = &[
    Domain {
        name: "computer science",
        topics: &[
            "data structures",
            "algorithms",
            "programming languages",
            "software engineering",
            "databases",
            "computer networks",
            "operating systems",
            "machine learning",
            "artificial intelligence",
            "cybersecurity",
            "web development",
            "mobile development",
            "system design",
            "distributed systems",
            "cloud computing",
            "devops",
        ],
        concepts: &[
            Concept {
                name: "data structures",
                groups: &[
                    (
                        "fundamentals",
                        &[
                            "arrays",
                            "linked lists",
                            "stacks",
                            "queues",
                            "trees",
                            "graphs",
                            "hash tables",
                        ],
                    ),
                    (
                        "applications",
                        &[
                            "searching",
                            "sorting",
                            "graph traversal",
                            "dynamic programming",
                        ],
                    ),
                    (
                        "complexity",
                        &["Big O notation", "space complexity", "time-space tradeoffs"],
                    ),
                ],
            },
            Concept {
                name: "algorithms",
                groups: &[
                    (
                        "sorting",
                        &["bubble sort", "merge sort", "quick sort", "heap sort"],
                    ),
                    (
                        "searching",
                        &[
                            "linear search",
                            "binary search",
                            "depth-first search",
                            "breadth-first search",
                        ],
                    ),
                    (
                        "optimization",
                        &[
                            "greedy algorithms",
                            "dynamic programming",
                            "divide and conquer",
                        ],
                    ),
                ],
            },
            Concept {
                name: "web development",
                groups: &[
                    (
                        "frontend",
                        &["HTML", "CSS", "JavaScript", "React", "Vue", "Angular"],
                    ),
                    (
                        "backend",
                        &["Node.js", "Express", "REST APIs", "GraphQL"],
                    ),
                    (
                        "databases",
                        &["SQL", "MongoDB", "PostgreSQL", "Redis"],
                    ),
                ],
            },
            Concept {
                name: "machine learning",
                groups: &[
                    (
                        "supervised",
                        &[
                            "linear regression",
                            "logistic regression",
                            "decision trees",
                            "random forest",
                            "SVM",
                        ],
                    ),
                    (
                        "unsupervised",
                        &["k-means clustering", "hierarchical clustering", "PCA"],
                    ),
                    (
                        "deep learning",
                        &["neural networks", "CNN", "RNN", "transformers"],
                    ),
                ],
            },
        ],
    },
    Domain {
        name: "electrical engineering",
        topics: &[
            "circuit analysis",
            "electronics",
            "power systems",
            "control systems",
            "signal processing",
            "electromagnetics",
            "microprocessors",
            "embedded systems",
        ],
        concepts: &[
            Concept {
                name: "circuit analysis",
                groups: &[
                    (
                        "fundamentals",
                        &["Ohm's law", "Kirchhoff's laws", "AC/DC circuits", "impedance"],
                    ),
                    (
                        "components",
                        &[
                            "resistors",
                            "capacitors",
                            "inductors",
                            "diodes",
                            "transistors",
                        ],
                    ),
                    (
                        "analysis",
                        &["nodal analysis", "mesh analysis", "Thevenin equivalent"],
                    ),
                ],
            },
            Concept {
                name: "electronics",
                groups: &[
                    (
                        "analog",
                        &["amplifiers", "filters", "oscillators", "power supplies"],
                    ),
                    (
                        "digital",
                        &["logic gates", "flip-flops", "counters", "microcontrollers"],
                    ),
                ],
            },
        ],
    },
    Domain {
        name: "mechanical engineering",
        topics: &[
            "thermodynamics",
            "fluid mechanics",
            "materials science",
            "manufacturing",
            "design engineering",
            "robotics",
            "automotive engineering",
            "aerospace",
        ],
        concepts: &[
            Concept {
                name: "thermodynamics",
                groups: &[
                    ("laws", &["first law", "second law", "entropy", "enthalpy"]),
                    ("cycles", &["Carnot cycle", "Otto cycle", "Rankine cycle"]),
                    (
                        "applications",
                        &["heat engines", "refrigeration", "power plants"],
                    ),
                ],
            },
            Concept {
                name: "fluid mechanics",
                groups: &[
                    (
                        "fundamentals",
                        &["pressure", "buoyancy", "fluid statics", "fluid dynamics"],
                    ),
                    (
                        "flow",
                        &["laminar flow", "turbulent flow", "boundary layers"],
                    ),
                ],
            },
        ],
    },
    Domain {
        name: "civil engineering",
        topics: &[
            "structural engineering",
            "geotechnical engineering",
            "transportation",
            "environmental engineering",
            "construction management",
            "water resources",
        ],
        concepts: &[Concept {
            name: "structural engineering",
            groups: &[
                (
                    "materials",
                    &["concrete", "steel", "wood", "composite materials"],
                ),
                (
                    "analysis",
                    &["statics", "dynamics", "structural analysis", "design codes"],
                ),
                (
                    "structures",
                    &["beams", "columns", "foundations", "bridges"],
                ),
            ],
        }],
    },
];

/// The maximum number of context matches folded into a prompt.
pub const MAX_CONTEXT_MATCHES: usize = 5;

/// One knowledge-base hit for a topic.
#[derive(Debug)]
pub enum ContextMatch {
    /// The topic matched entries of a domain's topic list.
    DomainTopics {
        domain: &'static str,
        topics: Vec<&'static str>,
    },
    /// The topic matched a concept by name.
    Concept {
        domain: &'static str,
        concept: &'static Concept,
    },
}

impl ContextMatch {
    /// The label recorded in a generated course's `ragContext`.
    pub fn label(&self) -> &'static str {
        match self {
            ContextMatch::DomainTopics { domain, .. } => domain,
            ContextMatch::Concept { concept, .. } => concept.name,
        }
    }
}

/// Substring-matches the topic against every domain's topic list and concept
/// names, in both directions, and returns up to [`MAX_CONTEXT_MATCHES`] hits
/// in insertion order.
pub fn find_relevant_context(topic: &str) -> Vec<ContextMatch> {
    let topic = topic.trim().to_lowercase();
    let mut matches = Vec::new();

    for domain in KNOWLEDGE_BASE {
        let matching_topics: Vec<&'static str> = domain
            .topics
            .iter()
            .copied()
            .filter(|t| {
                let t_lower = t.to_lowercase();
                topic.contains(&t_lower) || t_lower.contains(&topic)
            })
            .collect();
        if !matching_topics.is_empty() {
            matches.push(ContextMatch::DomainTopics {
                domain: domain.name,
                topics: matching_topics,
            });
        }

        for concept in domain.concepts {
            let name_lower = concept.name.to_lowercase();
            if topic.contains(&name_lower) || name_lower.contains(&topic) {
                matches.push(ContextMatch::Concept {
                    domain: domain.name,
                    concept,
                });
            }
        }
    }

    matches.truncate(MAX_CONTEXT_MATCHES);
    matches
}

/// Renders the matched context into prompt text. With no matches, falls back
/// to the generic one-line instruction.
pub fn context_prompt(topic: &str, matches: &[ContextMatch]) -> String {
    if matches.is_empty() {
        return format!(
            "Create a focused engineering course on \"{topic}\". Ensure it's educational, \
             practical, and can be completed in 15-30 minutes."
        );
    }

    let mut text = String::from("Based on the following engineering knowledge context:\n\n");
    for m in matches {
        match m {
            ContextMatch::DomainTopics { domain, topics } => {
                text.push_str(&format!(
                    "Domain: {domain}\nRelated topics: {}\n\n",
                    topics.join(", ")
                ));
            }
            ContextMatch::Concept { concept, .. } => {
                text.push_str(&format!("Concept: {}\n", concept.name));
                for (group, items) in concept.groups {
                    text.push_str(&format!("{group}: {}\n", items.join(", ")));
                }
                text.push('\n');
            }
        }
    }
    text
}

//! # Fallback Course Library
//!
//! Fully-authored course content served when the AI collaborator is
//! unavailable, returns unparsable output, or returns a generic template.
//! Resolution order: direct substring match against the authored topics,
//! then keyword-based reuse of an authored skeleton, then the Bresenham
//! special case, then a parameterized generic template.

use crate::types::{CourseBody, CourseDocument, CourseSection};
use regex::RegexBuilder;

/// Thresholds for the generic-template judgment. These are tuning constants
/// with no deeper rationale; they are configurable rather than load-bearing.
#[derive(Debug, Clone)]
pub struct GenericTemplateThresholds {
    /// Minimum character count for a section to count as substantial.
    pub min_section_chars: usize,
    /// Minimum character count for a summary/description.
    pub min_summary_chars: usize,
    /// Titles shorter than this that start with a boilerplate prefix are
    /// considered generic.
    pub max_generic_title_chars: usize,
}

impl Default for GenericTemplateThresholds {
    fn default() -> Self {
        Self {
            min_section_chars: 500,
            min_summary_chars: 100,
            max_generic_title_chars: 40,
        }
    }
}

const GENERIC_TITLE_PREFIXES: &[&str] = &["Complete Guide to", "Introduction to", "Guide to"];

fn has_structure(text: &str) -> bool {
    text.contains("```")
        || text.contains('#')
        || text.contains("\n- ")
        || text.contains("\n* ")
        || text.starts_with("- ")
}

/// Judges whether a course document is a low-quality generic template:
/// a short boilerplate-prefixed title, fewer than two substantial units among
/// the first two, or a too-short summary.
pub fn is_generic_template(course: &CourseDocument, t: &GenericTemplateThresholds) -> bool {
    if GENERIC_TITLE_PREFIXES
        .iter()
        .any(|p| course.title.starts_with(p))
        && course.title.len() < t.max_generic_title_chars
    {
        return true;
    }

    let texts = course.body.unit_texts();
    let substantial = texts
        .iter()
        .take(2)
        .filter(|text| text.len() >= t.min_section_chars && has_structure(text))
        .count();
    if substantial < 2 {
        return true;
    }

    let summary = course
        .summary
        .as_deref()
        .or(course.description.as_deref())
        .unwrap_or_default();
    if summary.len() < t.min_summary_chars {
        return true;
    }

    false
}

/// The keywords that allow reusing an authored skeleton for a related topic.
const SKELETON_KEYWORDS: &[&str] = &[
    "algorithm",
    "virtual machine",
    "machine learning",
    "line drawing",
    "bresenham",
    "programming",
    "javascript",
    "python",
    "software",
    "web development",
    "api",
];

/// Returns the authored course for a topic.
///
/// Matching: direct substring hit against the library keys (both
/// directions); then keyword-based skeleton reuse with the title and summary
/// re-pointed at the requested topic; then the Bresenham special case; and
/// finally the generic parameterized template.
pub fn detailed_course(topic: &str) -> CourseDocument {
    let normalized = topic.trim().to_lowercase();

    for (key, build) in library() {
        if normalized.contains(key) || key.contains(normalized.as_str()) {
            tracing::info!(key, topic, "serving authored fallback course");
            let mut course = build();
            course.topic = Some(topic.to_string());
            return course;
        }
    }

    for keyword in SKELETON_KEYWORDS {
        if !normalized.contains(keyword) {
            continue;
        }
        for (key, build) in library() {
            if key.contains(keyword) {
                tracing::info!(key, keyword, topic, "reusing authored skeleton for topic");
                let mut course = build();
                course.title = format!("Comprehensive Guide to {topic}");
                course.topic = Some(topic.to_string());
                if let Some(summary) = course.summary.take() {
                    let re = RegexBuilder::new(&regex::escape(key))
                        .case_insensitive(true)
                        .build()
                        .expect("escaped key is a valid pattern");
                    course.summary = Some(re.replace_all(&summary, topic).into_owned());
                }
                return course;
            }
        }
    }

    if normalized.contains("bresenham")
        || (normalized.contains("line")
            && (normalized.contains("drawing") || normalized.contains("algorithm")))
    {
        tracing::info!(topic, "serving specialized line-drawing content");
        return bresenham_course();
    }

    generic_course(topic)
}

fn library() -> [(&'static str, fn() -> CourseDocument); 3] {
    [
        ("virtual machines", virtual_machines_course),
        ("machine learning", machine_learning_course),
        ("bresenham line", bresenham_course),
    ]
}

fn section(title: impl Into<String>, content: &str) -> CourseSection {
    CourseSection {
        title: title.into(),
        content: content.trim().to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn base_document(
    title: impl Into<String>,
    summary: impl Into<String>,
    minutes: u32,
    learning_objectives: Vec<String>,
    prerequisites: Vec<String>,
    sections: Vec<CourseSection>,
    study_next: Vec<String>,
) -> CourseDocument {
    CourseDocument {
        id: None,
        title: title.into(),
        description: None,
        summary: Some(summary.into()),
        duration: None,
        difficulty: None,
        estimated_read_time: None,
        estimated_duration_minutes: Some(minutes),
        body: CourseBody::Sectioned { sections },
        learning_objectives,
        prerequisites,
        real_world_applications: Vec::new(),
        quick_reference: Vec::new(),
        assessment_questions: Vec::new(),
        next_steps: Vec::new(),
        study_next,
        topic: None,
        generated_at: None,
        is_ai_generated: None,
        is_fallback: None,
        fallback_used: None,
        rag_context: Vec::new(),
    }
}

fn virtual_machines_course() -> CourseDocument {
    base_document(
        "Comprehensive Guide to Virtual Machines",
        "Explore the world of virtualization technology with this in-depth course on virtual \
         machines. Learn about different types of VMs, their architecture, use cases, and \
         implementation strategies in modern computing environments.",
        120,
        strings(&[
            "Understand the core concepts and principles of virtualization technology",
            "Compare different types of virtual machines and hypervisors",
            "Configure and manage virtual machines in different environments",
            "Apply VM technology to solve real-world infrastructure challenges",
            "Implement security best practices for virtual environments",
        ]),
        strings(&[
            "Basic understanding of operating systems",
            "Familiarity with computer hardware components",
            "Some experience with system administration (helpful but not required)",
        ]),
        vec![
            section(
                "Introduction to Virtualization",
                r#"
## What is Virtualization?

Virtualization is a technology that allows you to create multiple simulated environments or dedicated resources from a single physical hardware system. Software called a hypervisor connects directly to that hardware and allows you to split one system into separate, distinct, and secure environments known as virtual machines (VMs).

## Evolution of Virtualization

- **1960s**: IBM developed virtualization to partition mainframe computers
- **1990s**: VMware introduced x86 virtualization technology
- **2000s**: Major expansion and adoption in enterprise environments
- **2010s**: Cloud computing revolution driven by virtualization technology
- **Present day**: Foundation of modern cloud infrastructure and containerization

## Key Benefits

1. **Resource Efficiency**: Maximize hardware utilization by running multiple VMs on one physical machine
2. **Isolation**: Contain system failures to individual VMs without affecting others
3. **Flexibility**: Easily create, copy, resize, or migrate virtual environments
4. **Cost Reduction**: Lower hardware, power, cooling, and maintenance expenses
5. **Disaster Recovery**: Simplify backup and recovery processes

## Types of Virtualization

- **Hardware Virtualization**: Virtualizing physical hardware components
- **Storage Virtualization**: Pooling physical storage from multiple devices
- **Network Virtualization**: Combining hardware and software network resources
- **Desktop Virtualization (VDI)**: Hosting desktop environments on a central server
"#,
            ),
            section(
                "Virtual Machine Architecture",
                r#"
## Components of a Virtual Machine

A virtual machine consists of several key components that work together to create a fully functional virtualized system:

1. **Virtual CPU (vCPU)**: Emulates physical processor functionality
2. **Virtual Memory**: Allocated RAM for the virtual machine
3. **Virtual Storage**: Disk space allocated to the VM, often as virtual disk files
4. **Virtual Network Interfaces**: Connections to virtual or physical networks
5. **Guest Operating System**: OS installed within the virtual environment

## Hypervisor Types

The hypervisor provides the layer of abstraction between virtual machines and physical hardware.

### Type 1 (Bare Metal)

- Run directly on the host's hardware with minimal overhead
- Examples: VMware ESXi, Microsoft Hyper-V, KVM

### Type 2 (Hosted)

- Run as an application on a conventional operating system
- Easier to set up but less efficient
- Examples: VMware Workstation, Oracle VirtualBox, Parallels Desktop

## Resource Allocation and Management

- **CPU Scheduling**: How hypervisors allocate processor time across guests
- **Memory Management**: Techniques like ballooning, compression, and page sharing
- **Storage Provisioning**: Thin vs. thick provisioning, storage migration
- **Network Configuration**: Virtual switches, VLANs, and traffic management
"#,
            ),
            section(
                "Implementing Virtual Machines",
                r#"
## Setting Up Your First Virtual Machine

Creating a virtual machine involves several key steps:

1. **Choose a hypervisor** based on your needs (performance, features, cost)
2. **Allocate resources** (CPU cores, memory, disk space)
3. **Configure networking** (bridged, NAT, or host-only)
4. **Select an operating system** to install
5. **Install guest OS tools** for better performance and integration
6. **Configure backup solutions** to protect your VM

## Popular Virtualization Platforms

- **VMware ESXi/vSphere**: Enterprise-grade bare-metal hypervisor with centralized vCenter management
- **Microsoft Hyper-V**: Windows-based hypervisor included with Windows Server
- **KVM**: Linux kernel virtualization, the foundation of many clouds
- **VirtualBox**: Cross-platform virtualization tool, ideal for desktops and labs
- **Proxmox VE**: Complete open-source virtualization management platform

## Common Use Cases

- Server consolidation to reduce hardware footprint
- Development and testing environments with snapshot-based resets
- Legacy application support on modern hardware
- Disaster recovery solutions and replicated standby systems
- Virtual desktop infrastructure (VDI) for remote work
"#,
            ),
            section(
                "Advanced Virtual Machine Concepts",
                r#"
## VM Migration and Portability

### Live Migration

- Moving running VMs between hosts with no downtime
- Requirements: shared storage, compatible CPU families, sufficient network bandwidth
- Use cases: hardware maintenance, load balancing, power management

### Cold Migration and Conversion

- Moving powered-off VMs between hosts, or converting physical machines to virtual (P2V)
- Simpler process with fewer requirements, suited to major hardware changes

## Clustering and High Availability

- **Failover Clustering**: Automatic VM restart on a different host if the primary host fails
- **Fault Tolerance**: A synchronized duplicate VM runs in parallel for instant failover
- **Resource Pools**: Guaranteed resource allocation for critical VMs

## Security Considerations

VM isolation limits the impact of compromises, and snapshots enable quick recovery from incidents. The challenges to watch:

- **VM Escape**: Attacks that break out of VM isolation
- **Sprawl**: Unmanaged VMs with outdated security patches
- **Management Interface Security**: Protecting the hypervisor layer itself

Best practices: patch both host and guest systems regularly, segment networks between VMs, encrypt VM storage and traffic, and apply least privilege to VM access.
"#,
            ),
            section(
                "Practical Applications and Case Studies",
                r#"
## Enterprise Virtualization

A typical mid-size consolidation project replaces dozens of physical servers with a handful of virtualization hosts, cutting power consumption and rack space dramatically while simplifying provisioning. The recurring lessons: plan application compatibility early, schedule migrations in waves, and measure the baseline before you start.

## Cloud Computing and Virtualization

Virtualization forms the foundation of modern cloud computing services:

- **Infrastructure as a Service (IaaS)**: AWS EC2, Azure VMs, Google Compute Engine offer self-service provisioning of virtual machines with pay-as-you-go consumption
- **Platform as a Service (PaaS)**: Builds on virtualized infrastructure while abstracting away VM management
- **Hybrid Cloud**: Consistent virtualization platforms between on-premises and cloud enable VM mobility between environments

## Specialized Environments

- **VDI**: Centralized desktop delivery for secure environments and remote work
- **Network Function Virtualization (NFV)**: Firewalls, load balancers, and routers as virtual appliances
- **Laboratory and Training**: Isolated networks for security testing, snapshot resets between classes

## Emerging Trends

- **Containerization**: Lighter-weight alternative to full VMs (Docker, Kubernetes)
- **Unikernels**: Specialized, single-purpose VMs with minimal footprint
- **Nested Virtualization**: Running VMs inside VMs for lab and CI workloads
"#,
            ),
        ],
        strings(&[
            "Container technologies (Docker, Kubernetes)",
            "Cloud architecture and design patterns",
            "Advanced networking for virtual environments",
            "Hybrid cloud implementations",
            "Infrastructure as Code (IaC)",
        ]),
    )
}

fn machine_learning_course() -> CourseDocument {
    base_document(
        "Machine Learning Fundamentals",
        "Dive into the exciting world of machine learning, exploring core algorithms, \
         techniques, and applications that power modern AI systems. This course provides a \
         solid foundation in ML concepts with practical examples.",
        180,
        strings(&[
            "Understand key machine learning concepts, types, and workflows",
            "Implement and evaluate fundamental ML algorithms",
            "Apply feature engineering and data preparation techniques",
            "Evaluate model performance and address common challenges",
            "Build practical ML solutions for real-world problems",
        ]),
        strings(&[
            "Basic Python programming skills",
            "Understanding of fundamental statistics concepts",
            "Familiarity with data structures and algorithms",
            "High school level mathematics (algebra, calculus basics)",
        ]),
        vec![
            section(
                "Introduction to Machine Learning",
                r#"
## What is Machine Learning?

Machine Learning (ML) is a subset of artificial intelligence that enables systems to learn and improve from experience without being explicitly programmed. It focuses on developing algorithms that can receive data, extract patterns, and make decisions with minimal human intervention.

## Types of Machine Learning

### Supervised Learning

- Uses labeled datasets to train algorithms that map inputs to known outputs
- Examples: classification, regression
- Applications: spam detection, price prediction, image recognition

### Unsupervised Learning

- Works with unlabeled data to discover patterns and structure
- Examples: clustering, association, dimensionality reduction
- Applications: customer segmentation, anomaly detection

### Reinforcement Learning

- An agent learns through interaction with an environment, optimizing behavior based on rewards and penalties
- Applications: game playing, robotics, autonomous vehicles

## The Machine Learning Workflow

1. **Problem Definition**: Articulate the problem and success metrics
2. **Data Collection**: Gather relevant, representative, sufficient data
3. **Data Preparation**: Clean, transform, and organize data
4. **Feature Engineering**: Create meaningful features from raw data
5. **Model Selection and Training**: Choose algorithms and fit them to training data
6. **Evaluation and Tuning**: Assess performance on validation data, optimize hyperparameters
7. **Deployment and Monitoring**: Implement in production and track performance drift
"#,
            ),
            section(
                "Core Machine Learning Algorithms",
                r#"
## Linear Models

### Linear Regression

- Predicts a continuous value assuming a linear relationship between features and target
- Cost function: Mean Squared Error (MSE); optimized by least squares or gradient descent

```python
from sklearn.linear_model import LinearRegression
model = LinearRegression()
model.fit(X_train, y_train)
predictions = model.predict(X_test)
```

### Logistic Regression

- Classification despite the name: models the probability of class membership with the sigmoid function
- Strong baseline for binary classification problems

## Tree-Based Models

- **Decision Trees**: Recursive feature splits; interpretable but prone to overfitting
- **Random Forests**: Ensembles of trees on bootstrapped samples; robust general-purpose learners
- **Gradient Boosting**: Sequentially corrects the errors of prior trees; state of the art on tabular data

## Distance and Margin Methods

- **k-Nearest Neighbors**: Classifies by the majority vote of the closest training points
- **Support Vector Machines**: Finds the maximum-margin separating hyperplane, with kernels for non-linear boundaries

## Clustering

- **k-means**: Partitions data into k clusters by iteratively refining centroids
- **Hierarchical clustering**: Builds a tree of clusters without choosing k upfront
"#,
            ),
            section(
                "Data Preparation and Feature Engineering",
                r#"
## Why Data Preparation Dominates

Most of the effort in a real ML project goes into the data, not the model. Quality issues that silently destroy model performance:

- Missing values and inconsistent encodings
- Duplicated or leaked records between train and test sets
- Skewed class distributions
- Features on wildly different scales

## Core Techniques

1. **Imputation**: Fill missing values with statistics (mean/median) or model-based estimates
2. **Scaling**: Standardize or normalize features so no single feature dominates distance-based models
3. **Encoding**: One-hot or ordinal encoding for categorical variables
4. **Outlier Handling**: Winsorize or remove points that distort the fit

## Feature Engineering

- Derive domain-informed features (ratios, aggregates, time deltas)
- Reduce dimensionality with PCA when features are highly correlated
- Select features by importance scores to simplify and regularize models

## Train/Validation/Test Discipline

Always split before any statistic is computed from the data. Fit scalers and encoders on the training set only, then apply them to validation and test sets. Cross-validation gives a more stable estimate when data is scarce.
"#,
            ),
            section(
                "Model Evaluation and Common Pitfalls",
                r#"
## Choosing the Right Metric

- **Regression**: MSE, RMSE, MAE, R-squared
- **Classification**: accuracy, precision, recall, F1, ROC-AUC
- Accuracy alone misleads on imbalanced data; a 99%-negative dataset scores 99% with a useless constant model

## Overfitting and Underfitting

- **Overfitting**: The model memorizes training noise; great train score, poor validation score
- **Underfitting**: The model is too simple to capture the signal; poor scores everywhere

Remedies: regularization (L1/L2), more data, simpler models, early stopping, dropout for neural networks.

## Bias-Variance Tradeoff

Total error decomposes into bias (systematic error from model assumptions), variance (sensitivity to the training sample), and irreducible noise. Increasing model capacity lowers bias but raises variance; the sweet spot is found empirically via validation curves.

## Common Pitfalls

- **Data leakage**: Information from the future or the target sneaking into features
- **Training-serving skew**: Different preprocessing in production than in training
- **Ignoring drift**: Real-world distributions shift; monitor deployed models and retrain
"#,
            ),
            section(
                "Building Practical ML Solutions",
                r#"
## From Notebook to Production

A model that only lives in a notebook delivers no value. The productionization checklist:

1. Package preprocessing and model as one artifact (pipeline objects)
2. Version data, code, and models together
3. Expose predictions behind a stable API
4. Log inputs and outputs for monitoring and audit
5. Automate retraining with guardrail metrics

## Project Walkthrough: Predicting Equipment Failure

- **Data**: Sensor time series with rare failure labels
- **Approach**: Feature windows (rolling means, deltas), gradient boosting, class weighting for imbalance
- **Evaluation**: Precision-recall tradeoff tuned to the cost of missed failures vs. false alarms
- **Deployment**: Daily batch scoring with alert thresholds reviewed quarterly

## Tooling Landscape

- **scikit-learn**: The reference library for classical ML
- **PyTorch / TensorFlow**: Deep learning frameworks
- **pandas / NumPy**: Data manipulation backbone
- **MLflow**: Experiment tracking and model registry

## Where to Go Deeper

Neural network architectures (CNNs for images, transformers for text), probabilistic modeling, and causal inference each open substantial new application areas once the fundamentals here are solid.
"#,
            ),
        ],
        strings(&[
            "Deep learning and neural network architectures",
            "Natural language processing",
            "Computer vision applications",
            "MLOps and production model deployment",
            "Probabilistic modeling and Bayesian methods",
        ]),
    )
}

fn bresenham_course() -> CourseDocument {
    base_document(
        "Comprehensive Guide to Bresenham's Line Drawing Algorithm",
        "Master the elegant and efficient Bresenham's line drawing algorithm, a fundamental \
         technique in computer graphics for rasterizing lines on pixel-based displays. This \
         course explores the algorithm's principles, implementation, optimizations, and \
         practical applications.",
        90,
        strings(&[
            "Understand the mathematical principles behind Bresenham's line drawing algorithm",
            "Implement the algorithm efficiently in various programming languages",
            "Apply optimizations to improve performance for specific use cases",
            "Extend the algorithm to other shapes like circles and ellipses",
            "Integrate the algorithm into real-world graphics applications",
        ]),
        strings(&[
            "Basic understanding of computer graphics concepts",
            "Familiarity with coordinate systems and 2D geometry",
            "Programming experience in any language",
        ]),
        vec![
            section(
                "Introduction to Bresenham's Line Algorithm",
                r#"
## The Pixel-Based Display Challenge

In computer graphics, we often need to represent continuous mathematical objects (like lines) on discrete pixel grids. This process, called rasterization, is fundamental to all graphics rendering.

### The Line Drawing Problem

A line with endpoints (x1,y1) and (x2,y2) has an infinite number of points represented by the equation `y = mx + b` where `m` is the slope and `b` is the y-intercept. Displays can only illuminate discrete pixels, so the challenge becomes:

- Which pixels should we illuminate to best represent the mathematical line?
- How can we do this efficiently without floating-point calculations?

### Why Efficiency Matters

Before Bresenham's algorithm (developed by Jack Bresenham in 1962 while working at IBM), line drawing required floating-point multiplication and division, which were extremely slow on early computers, and floating-point precision errors caused visual artifacts.

Bresenham's insight was an algorithm that:

- Uses only integer addition, subtraction, and bit shifting
- Makes pixel decisions using only integer calculations
- Eliminates floating-point operations entirely

### Core Principles

1. Determine which pixels lie closest to the mathematical line
2. Make incremental decisions about which pixel to illuminate next
3. Use an error accumulation technique to track deviation from the true line
"#,
            ),
            section(
                "The Algorithm Explained",
                r#"
## Understanding the Decision Variable

For each step along the major axis (usually x), we decide whether to increment the minor axis (usually y) or keep it the same. The decision is based on an error term that tracks how far we've deviated from the true mathematical line.

### Step-by-Step Derivation (first octant, 0 <= m <= 1)

1. For a line from (x1,y1) to (x2,y2), define dx = x2 - x1 and dy = y2 - y1
2. For each pixel (x,y), choose between (x+1,y) and (x+1,y+1)
3. Track the error e, initially 0; at each step, if e < 0.5 keep y and update e += dy/dx, otherwise increment y and update e += dy/dx - 1
4. Multiply all terms by 2*dx to eliminate fractions, giving purely integer updates
5. Initialize the decision variable as e = 2*dy - dx

### The Algorithm in Pseudocode

```
function bresenham(x1, y1, x2, y2):
    dx = abs(x2 - x1)
    dy = abs(y2 - y1)
    sx = sign(x2 - x1)
    sy = sign(y2 - y1)

    error = 2 * dy - dx
    x = x1
    y = y1

    while x != x2:
        plot(x, y)
        if error >= 0:
            y = y + sy
            error = error - 2 * dx
        x = x + sx
        error = error + 2 * dy
```

The loop body performs two or three integer additions per pixel and nothing else, which is what made the algorithm practical on 1960s hardware and keeps it in use today.
"#,
            ),
            section(
                "Complete Implementation",
                r#"
## Handling All Octants

The first-octant derivation generalizes by swapping roles of x and y for steep lines and by stepping with the sign of each delta:

```rust
fn draw_line(x1: i32, y1: i32, x2: i32, y2: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x1, y1);

    loop {
        plot(x, y);
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
```

This combined form folds the octant cases into one loop by keeping dy negative and comparing the doubled error term against both deltas.

## Verifying Correctness

- Horizontal, vertical, and 45-degree lines exercise the boundary conditions
- A line and its reverse must plot the same pixel set
- Every step moves exactly one pixel on the major axis; the minor axis moves at most one
"#,
            ),
            section(
                "Extensions and Optimizations",
                r#"
## Beyond Basic Lines

### Thick Lines

Draw perpendicular spans at each plotted pixel, or offset multiple parallel lines. Care is needed at joints to avoid gaps on steep slopes.

### Anti-Aliased Lines

Bresenham's integer decision can be extended (Wu's algorithm) to plot the two candidate pixels with intensities proportional to their distance from the true line, trading the pure-integer property for smoother output.

### Dashed and Patterned Lines

Carry a pattern counter through the loop and skip plotting when the counter falls in a gap segment. The error-term bookkeeping is unchanged.

## Bresenham Circles

The same error-accumulation idea rasterizes circles using eight-way symmetry:

```
function circle(xc, yc, r):
    x = 0; y = r
    d = 3 - 2 * r
    while x <= y:
        plot_octants(xc, yc, x, y)
        if d < 0:
            d = d + 4 * x + 6
        else:
            d = d + 4 * (x - y) + 10
            y = y - 1
        x = x + 1
```

## Performance Notes

- The inner loop is branch-light and integer-only, ideal for microcontrollers and scanline setup
- Fixed-point variants (DDA with 16.16 arithmetic) can be faster on hardware with fast multiplies
- For batch rendering, clipping lines against the viewport before rasterizing avoids wasted work
"#,
            ),
            section(
                "Practical Applications",
                r#"
## Where Bresenham Shows Up

- **Display rasterization**: The historical home: converting vector primitives to pixels in 2D graphics libraries and printer firmware
- **Game development**: Line-of-sight and field-of-view calculations on tile maps walk the Bresenham pixel set between two cells
- **Robotics and CNC**: Stepper-motor motion planning interpolates straight paths with the same integer error accumulation
- **GIS and raster analysis**: Tracing rays across grid cells for visibility and terrain profiles

## Integration Example: Tile-Based Line of Sight

A roguelike checks whether a monster sees the player by walking the line between them and stopping at the first opaque tile. Bresenham gives a deterministic walk with no floating point, which keeps the check cheap even for hundreds of monsters per turn.

## Choosing Between Bresenham and Alternatives

- Use Bresenham when output must be exact pixels and the platform favors integer math
- Use DDA when a simple implementation matters more than avoiding floats
- Use Wu's algorithm when anti-aliased output is required
- Use GPU rasterization when drawing thousands of primitives per frame; the algorithm survives there in line-setup hardware

## Summary

Bresenham's algorithm endures because it answers a discrete question discretely: rather than approximating real arithmetic, it reformulates rasterization as integer error tracking. That reframing, more than the specific loop, is the transferable lesson.
"#,
            ),
        ],
        strings(&[
            "Anti-aliasing techniques (Wu's algorithm)",
            "Polygon filling algorithms",
            "Circle and ellipse rasterization",
            "Clipping algorithms (Cohen-Sutherland, Liang-Barsky)",
            "GPU rasterization pipelines",
        ]),
    )
}

/// The parameterized template used when nothing in the library fits.
fn generic_course(topic: &str) -> CourseDocument {
    tracing::info!(topic, "no authored content matched, using generic template");
    base_document(
        format!("Comprehensive Guide to {topic}"),
        format!(
            "Dive into the fascinating world of {topic} with this comprehensive course. \
             Explore key concepts, practical applications, and advanced techniques in this \
             growing field."
        ),
        120,
        vec![
            format!("Understand the fundamental principles of {topic}"),
            format!("Apply {topic} concepts to solve real-world problems"),
            format!("Analyze and evaluate different approaches in {topic}"),
            format!("Design and implement solutions using {topic} techniques"),
        ],
        vec![
            format!("Basic understanding of concepts related to {topic}"),
            "Familiarity with foundational principles in the field".to_string(),
            "Problem-solving skills and logical thinking".to_string(),
        ],
        vec![
            section(
                format!("Introduction to {topic}"),
                &format!(
                    r#"
## Overview of {topic}

{topic} represents an important area of study with significant applications across multiple domains. This introduction provides a foundation for understanding the core concepts, historical development, and key applications.

## Historical Development

The field of {topic} has evolved considerably over time, with significant milestones including:

- Early conceptual development and theoretical foundations
- Key innovations that shaped modern understanding
- Recent advances and current state of the art
- Emerging trends and future directions

## Importance and Applications

{topic} has wide-ranging applications, from foundational uses within its own field to cross-disciplinary work where its techniques unlock new capabilities. Understanding the vocabulary and core principles is essential before moving to hands-on practice.
"#
                ),
            ),
            section(
                format!("Core Concepts of {topic}"),
                &format!(
                    r#"
## Essential Framework

The conceptual framework of {topic} consists of several interconnected elements that work together:

- Foundational components with their key characteristics and roles
- The relationships and interactions between those components
- Implementation considerations and common variations

## Theoretical Foundations

The theoretical underpinnings of {topic} draw from several disciplines, combining core principles, conceptual models, and analytical frameworks that practitioners apply daily.

## Methodological Approaches

Several methodologies have emerged as effective ways to approach {topic}, each with its own workflow, strengths, limitations, and typical use cases. Comparing them against the problem at hand is a core practitioner skill.
"#
                ),
            ),
            section(
                format!("Practical Applications of {topic}"),
                &format!(
                    r#"
## Real-World Implementation

Implementing {topic} in practical settings involves a step-by-step process, required resources, and a set of challenges that recur across projects. Studying representative case studies, from industry deployments to research applications, reveals the approaches that work.

## Best Practices

Experience across implementations has produced a reliable set of best practices:

1. Start from a clearly articulated problem, not a technique
2. Validate assumptions early with small experiments
3. Watch for the common pitfalls practitioners repeatedly hit
4. Build in quality assurance and review from the beginning

## Common Challenges

Technical, organizational, and process challenges each have known diagnostic approaches and mitigation strategies; recognizing which kind of challenge you face is half the solution.
"#
                ),
            ),
            section(
                format!("Advanced Topics in {topic}"),
                &format!(
                    r#"
## Cutting-Edge Developments

The field of {topic} continues to evolve. Recent innovations bring advantages over previous approaches, along with new implementation considerations and open questions about limitations.

## Specialized Techniques

Advanced practitioners employ specialized techniques for specific scenarios, weighing comparative advantages, resource requirements, and demonstrated effectiveness.

## Integration with Related Fields

{topic} increasingly intersects with other domains, creating opportunities through combined approaches and raising new technical challenges in integration. Research continues to push these boundaries in several active directions.
"#
                ),
            ),
            section(
                format!("Building Expertise in {topic}"),
                &format!(
                    r#"
## Skill Development Pathway

Building expertise in {topic} typically progresses from essential knowledge and foundational skills, through advanced concepts and specialized areas, to mastery and contribution back to the field.

## Tools and Resources

Practitioners rely on a core set of tools and learning resources: recommended references, structured courses, community forums, and hands-on projects. Evaluating resource quality is itself a skill worth developing early.

## Community and Mentorship

Engaging with the {topic} community through professional organizations, online communities, and mentorship accelerates learning and keeps skills current as the field develops.
"#
                ),
            ),
        ],
        vec![
            format!("Advanced {topic} concepts and techniques"),
            format!("Specialized applications of {topic}"),
            format!("Integration of {topic} with complementary fields"),
            format!("Emerging trends in {topic}"),
        ],
    )
}

//! Authoring-time checks for storyboards.
//!
//! Nothing here runs at construction. Callers ask for a report and decide
//! what to do with it; the renderers never look at it.

use std::collections::HashSet;

use serde::Serialize;

use crate::shot::RendererKind;
use crate::storyboard::Storyboard;

/// Timing comparisons tolerate float noise up to this many seconds.
const TIME_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Shot the issue is attached to, if any.
    pub shot_id: Option<u32>,
    pub message: String,
}

impl ValidationIssue {
    fn error(shot_id: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            shot_id,
            message: message.into(),
        }
    }

    fn warning(shot_id: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            shot_id,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match self.shot_id {
            Some(id) => write!(f, "{level}: shot {id}: {}", self.message),
            None => write!(f, "{level}: {}", self.message),
        }
    }
}

/// Result of validating a storyboard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }

    /// True when no errors were found (warnings are allowed).
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }
}

impl Storyboard {
    /// Run every authoring-time check.
    pub fn validate(&self) -> ValidationReport {
        let mut issues = vec![];
        check_shot_fields(self, &mut issues);
        check_ids(self, &mut issues);
        check_scene_overlaps(self, &mut issues);
        check_timeline_continuity(self, &mut issues);
        check_renderers(self, &mut issues);
        ValidationReport { issues }
    }
}

fn check_shot_fields(board: &Storyboard, issues: &mut Vec<ValidationIssue>) {
    for shot in board.shots() {
        if !(shot.start_time >= 0.0) {
            issues.push(ValidationIssue::error(
                Some(shot.id),
                format!("start_time must be >= 0 (got {})", shot.start_time),
            ));
        }
        if !(shot.duration > 0.0) {
            issues.push(ValidationIssue::error(
                Some(shot.id),
                format!("duration must be > 0 (got {})", shot.duration),
            ));
        }
        if let Some(opacity) = shot.overlay_opacity {
            if !(0.0..=1.0).contains(&opacity) {
                issues.push(ValidationIssue::error(
                    Some(shot.id),
                    format!("overlay_opacity must be within [0, 1] (got {opacity})"),
                ));
            }
        }
        if shot.overlay_video.is_none() && shot.overlay_opacity.is_some() {
            issues.push(ValidationIssue::warning(
                Some(shot.id),
                "overlay_opacity set without overlay_video",
            ));
        }
    }
}

fn check_ids(board: &Storyboard, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    let mut previous: Option<u32> = None;

    for shot in board.shots() {
        if shot.id == 0 {
            issues.push(ValidationIssue::error(Some(0), "id must be positive"));
        }
        if !seen.insert(shot.id) {
            issues.push(ValidationIssue::error(Some(shot.id), "duplicate shot id"));
        } else if let Some(prev) = previous {
            if shot.id <= prev {
                issues.push(ValidationIssue::error(
                    Some(shot.id),
                    format!("id is not ascending (follows {prev})"),
                ));
            }
        }
        previous = Some(shot.id);
    }
}

fn check_scene_overlaps(board: &Storyboard, issues: &mut Vec<ValidationIssue>) {
    for scene in board.scenes() {
        for pair in scene.shots.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if b.start_time + TIME_EPSILON < a.end_time() {
                issues.push(ValidationIssue::error(
                    Some(b.id),
                    format!(
                        "overlaps shot {} in scene '{}' ({:.3}s < {:.3}s)",
                        a.id,
                        scene.name,
                        b.start_time,
                        a.end_time()
                    ),
                ));
            }
        }
    }
}

fn check_timeline_continuity(board: &Storyboard, issues: &mut Vec<ValidationIssue>) {
    let shots: Vec<_> = board.shots().collect();
    let Some(first) = shots.first() else {
        issues.push(ValidationIssue::warning(None, "storyboard has no shots"));
        return;
    };

    if first.start_time > TIME_EPSILON {
        issues.push(ValidationIssue::warning(
            Some(first.id),
            format!("timeline starts at {:.3}s, leaving a gap", first.start_time),
        ));
    }

    for pair in shots.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if b.start_time > a.end_time() + TIME_EPSILON {
            issues.push(ValidationIssue::warning(
                Some(b.id),
                format!(
                    "gap of {:.3}s after shot {}",
                    b.start_time - a.end_time(),
                    a.id
                ),
            ));
        }
    }

    let end = shots.iter().map(|s| s.end_time()).fold(0.0_f64, f64::max);
    if (end - board.config.duration_secs).abs() > TIME_EPSILON {
        issues.push(ValidationIssue::warning(
            None,
            format!(
                "shots end at {:.3}s but the composition lasts {:.3}s",
                end, board.config.duration_secs
            ),
        ));
    }
}

fn check_renderers(board: &Storyboard, issues: &mut Vec<ValidationIssue>) {
    for shot in board.shots() {
        match &shot.renderer {
            RendererKind::Generic => {}
            RendererKind::CrossfadeTriptych(spec) => {
                if spec.images.is_empty() {
                    issues.push(ValidationIssue::error(
                        Some(shot.id),
                        "triptych needs at least one image",
                    ));
                }
                if !spec.labels.is_empty() && spec.labels.len() != spec.images.len() {
                    issues.push(ValidationIssue::error(
                        Some(shot.id),
                        format!(
                            "triptych has {} labels for {} images",
                            spec.labels.len(),
                            spec.images.len()
                        ),
                    ));
                }
                if !(spec.seconds_per_image > 0.0) {
                    issues.push(ValidationIssue::error(
                        Some(shot.id),
                        "triptych seconds_per_image must be > 0",
                    ));
                } else if spec.cycle_secs() > shot.duration + TIME_EPSILON {
                    issues.push(ValidationIssue::warning(
                        Some(shot.id),
                        format!(
                            "triptych cycle ({:.3}s) runs past the shot ({:.3}s)",
                            spec.cycle_secs(),
                            shot.duration
                        ),
                    ));
                }
            }
            RendererKind::SplitScreen(spec) => {
                if spec.connector_fade_end_secs <= spec.connector_fade_start_secs {
                    issues.push(ValidationIssue::error(
                        Some(shot.id),
                        "split-screen connector fade must end after it starts",
                    ));
                }
            }
        }
    }
}

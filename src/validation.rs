//! Input validation for staffing data.
//!
//! Checks records at the storage/API boundary before they are turned into
//! a [`PlanningSnapshot`](crate::models::PlanningSnapshot). Detects:
//! - Duplicate IDs and duplicate developer emails
//! - Allocations referencing unknown developers or projects
//! - Allocation ranges that do not end after they start
//! - Bandwidth values outside the configured set
//!
//! The computations never call this; they tolerate everything it rejects.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{Allocation, Developer, Project};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// Two developers share the same email.
    DuplicateEmail,
    /// An allocation references a developer that doesn't exist.
    UnknownDeveloper,
    /// An allocation references a project that doesn't exist.
    UnknownProject,
    /// An allocation's end date is not after its start date.
    InvalidDateRange,
    /// An allocation's bandwidth is not an accepted value.
    InvalidBandwidth,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single allocation's own fields.
///
/// Checks the date range (end strictly after start) and that the bandwidth
/// is one of `config.allowed_bandwidths`.
pub fn validate_allocation(allocation: &Allocation, config: &PlannerConfig) -> ValidationResult {
    let mut errors = Vec::new();
    check_allocation_fields(allocation, config, &mut errors);
    finish(errors)
}

/// Validates a full set of records.
///
/// Checks:
/// 1. No duplicate developer, project or allocation IDs
/// 2. No duplicate developer emails (case-insensitive, empty ignored)
/// 3. Every allocation references an existing developer and project
/// 4. Every allocation ends after it starts
/// 5. Every allocation's bandwidth is allowed by `config`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(
    developers: &[Developer],
    projects: &[Project],
    allocations: &[Allocation],
    config: &PlannerConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut developer_ids = HashSet::new();
    let mut emails = HashSet::new();
    for dev in developers {
        if !developer_ids.insert(dev.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate developer ID: {}", dev.id),
            ));
        }
        if !dev.email.is_empty() && !emails.insert(dev.email.to_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEmail,
                format!("Duplicate developer email: {}", dev.email),
            ));
        }
    }

    let mut project_ids = HashSet::new();
    for project in projects {
        if !project_ids.insert(project.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate project ID: {}", project.id),
            ));
        }
    }

    let mut allocation_ids = HashSet::new();
    for allocation in allocations {
        if !allocation_ids.insert(allocation.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate allocation ID: {}", allocation.id),
            ));
        }
        if !developer_ids.contains(allocation.developer_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDeveloper,
                format!(
                    "Allocation '{}' references unknown developer '{}'",
                    allocation.id, allocation.developer_id
                ),
            ));
        }
        if !project_ids.contains(allocation.project_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownProject,
                format!(
                    "Allocation '{}' references unknown project '{}'",
                    allocation.id, allocation.project_id
                ),
            ));
        }
        check_allocation_fields(allocation, config, &mut errors);
    }

    finish(errors)
}

fn check_allocation_fields(
    allocation: &Allocation,
    config: &PlannerConfig,
    errors: &mut Vec<ValidationError>,
) {
    if allocation.end_date <= allocation.start_date {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDateRange,
            format!(
                "Allocation '{}' ends on {} which is not after its start {}",
                allocation.id, allocation.end_date, allocation.start_date
            ),
        ));
    }
    if !config.is_allowed_bandwidth(allocation.bandwidth) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBandwidth,
            format!(
                "Allocation '{}' has bandwidth {}%, expected one of {:?}",
                allocation.id, allocation.bandwidth, config.allowed_bandwidths
            ),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        debug!(count = errors.len(), "staffing input rejected");
        Err(errors)
    }
}

//! Skill matching.
//!
//! A required skill is covered when any developer skill contains it, or is
//! contained by it, ignoring case. There is no tokenization: "react"
//! matches "React Native" and "Java" matches "JavaScript".

/// Whether two skill tags match under case-insensitive containment.
pub fn skills_match(required: &str, offered: &str) -> bool {
    let required = required.to_lowercase();
    let offered = offered.to_lowercase();
    offered.contains(&required) || required.contains(&offered)
}

/// Percentage (0.0..=100.0) of `required` covered by `developer_skills`.
///
/// An empty requirement list scores 100.
pub fn skill_match<R, S>(required: &[R], developer_skills: &[S]) -> f64
where
    R: AsRef<str>,
    S: AsRef<str>,
{
    if required.is_empty() {
        return 100.0;
    }

    let covered = required
        .iter()
        .filter(|req| {
            developer_skills
                .iter()
                .any(|skill| skills_match(req.as_ref(), skill.as_ref()))
        })
        .count();

    covered as f64 / required.len() as f64 * 100.0
}

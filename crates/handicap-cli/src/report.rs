//! Plain-text rendering of calculation results.

use handicap_core::{Course, HandicapBreakdown, StrokeComparison};

/// Formats a handicap with an explicit sign for non-zero values.
pub fn signed(handicap: i32) -> String {
    if handicap > 0 {
        format!("+{}", handicap)
    } else {
        handicap.to_string()
    }
}

/// Renders a single handicap result, optionally with its breakdown.
pub fn handicap(course: &Course, breakdown: &HandicapBreakdown, explain: bool) -> String {
    let mut out = format!(
        "Handicap for {}: {}\n",
        course.name,
        signed(breakdown.handicap)
    );
    if explain {
        out.push_str(&explanation(course, breakdown));
    }
    out
}

fn explanation(course: &Course, breakdown: &HandicapBreakdown) -> String {
    let holes = match course.holes {
        Some(holes) => holes.to_string(),
        None => "unknown (treated as 18)".to_string(),
    };
    let mut lines = vec![
        format!("Rating:            {}", breakdown.rating),
        format!("Par rating:        {}", breakdown.par_rating),
        format!("Rating gap:        {:+.1}", breakdown.rating_gap),
        format!("Holes:             {}", holes),
    ];

    match breakdown.scaling {
        Some(scaling) => {
            lines.push(format!("Reference rating:  {}", scaling.reference_rating));
            lines.push(format!(
                "Points per stroke: {:.3} (adjusted {:.3})",
                scaling.base_points_per_stroke, scaling.adjusted_points_per_stroke
            ));
            lines.push(format!("Raw handicap:      {:.3}", scaling.raw_handicap));
        }
        None => lines.push("Rating matches the par rating exactly".to_string()),
    }

    lines.push(format!(
        "Allowed range:     {} to {}",
        signed(breakdown.bounds.min),
        signed(breakdown.bounds.max)
    ));

    lines.iter().map(|line| format!("  {}\n", line)).collect()
}

/// Renders a two-player comparison.
pub fn comparison(course: &Course, comparison: &StrokeComparison) -> String {
    format!(
        "Course: {}\nPerson one handicap: {}\nPerson two handicap: {}\n{}\n",
        course.name,
        signed(comparison.handicap_one),
        signed(comparison.handicap_two),
        comparison.allotment
    )
}

/// Renders a course listing, one course per line.
pub fn course_list(courses: &[&Course]) -> String {
    if courses.is_empty() {
        return "No course found.\n".to_string();
    }

    courses
        .iter()
        .map(|course| {
            let holes = course
                .holes
                .map_or_else(|| "-".to_string(), |holes| holes.to_string());
            format!(
                "{:<55} par rating {:>6}  holes {:>3}\n",
                course.name, course.par_rating, holes
            )
        })
        .collect()
}

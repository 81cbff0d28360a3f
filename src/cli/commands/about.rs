//! About page: mission, how it works, categories, FAQ and contact details.

use super::{PageContext, heading};
use crate::config::CliOverrides;
use crate::error::Result;
use crate::model::Category;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::info;

const MISSION: &str = "To create smarter, more responsive cities by connecting citizens with \
                       local government through technology and transparency.";

const STEPS: [(&str, &str); 4] = [
    (
        "Report an Issue",
        "Use the report form to describe the problem, add photos, and pin the exact location.",
    ),
    (
        "Community Review",
        "Other community members can view, vote on, and comment on your reported issue.",
    ),
    (
        "City Response",
        "City officials review the issue and update its status as work progresses.",
    ),
    (
        "Resolution",
        "Track progress until the issue is resolved and the community is updated.",
    ),
];

const FAQS: [(&str, &str); 4] = [
    (
        "How do I report an issue?",
        "Run 'civic report' with a title, description and location. You'll receive a tracking number.",
    ),
    (
        "How long does it take for issues to be resolved?",
        "Resolution times vary depending on the type and severity of the issue. Critical issues \
         like water main breaks are typically addressed within 24 hours.",
    ),
    (
        "Can I track the progress of my reported issue?",
        "Yes! Each issue shows its current status (Reported, Under Review, In Progress, or Resolved).",
    ),
    (
        "What if my issue isn't getting attention?",
        "Encourage community members to vote for it, which helps prioritize it.",
    ),
];

const CONTACT: [(&str, &str); 3] = [
    ("Email Support", "support@cityreport.com"),
    ("Phone Support", "+1 (555) 123-CITY"),
    ("Emergency Issues", "Call 911 or your local emergency services"),
];

#[derive(Serialize)]
struct AboutOutput {
    mission: &'static str,
    steps: Vec<&'static str>,
    categories: Vec<Category>,
}

/// Execute the about command.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn execute(json: bool, cli: &CliOverrides) -> Result<()> {
    run(&PageContext::load(json, cli)?)
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(ctx: &PageContext) -> Result<()> {
    info!("Rendering about page");
    if ctx.json {
        return ctx.emit_json(AboutOutput {
            mission: MISSION,
            steps: STEPS.iter().map(|(title, _)| *title).collect(),
            categories: Category::ALL.to_vec(),
        });
    }
    ctx.print(&render_about());
    Ok(())
}

fn render_about() -> String {
    let mut out = heading("About CityReport");
    out.push_str(
        "Empowering communities to build better cities through collaborative issue \
         reporting and resolution\n\n",
    );
    let _ = writeln!(out, "Our Mission: {MISSION}\n");

    out.push_str(&heading("How It Works"));
    for (number, (title, description)) in STEPS.iter().enumerate() {
        let _ = writeln!(out, "{}. {title}\n   {description}", number + 1);
    }

    out.push('\n');
    out.push_str(&heading("What You Can Report"));
    for category in Category::ALL {
        let _ = writeln!(out, "• {category}");
    }

    out.push('\n');
    out.push_str(&heading("Frequently Asked Questions"));
    for (question, answer) in FAQS {
        let _ = writeln!(out, "Q: {question}\nA: {answer}\n");
    }

    out.push_str(&heading("Get in Touch"));
    for (label, value) in CONTACT {
        let _ = writeln!(out, "{label}: {value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_lists_every_category_in_order() {
        let text = render_about();
        let start = text.find("What You Can Report").unwrap();
        let section = &text[start..];
        let positions: Vec<usize> = Category::ALL
            .iter()
            .map(|category| section.find(category.as_str()).expect("category listed"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn about_numbers_the_steps() {
        let text = render_about();
        assert!(text.contains("1. Report an Issue"));
        assert!(text.contains("4. Resolution"));
        assert!(text.contains("support@cityreport.com"));
    }
}

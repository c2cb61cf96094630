//! Markdown-style transcript of an itinerary

use crate::models::DayPlan;

pub struct TranscriptHeader<'a> {
    pub destination: &'a str,
    pub travel_type: &'a str,
    pub budget: i64,
    pub num_people: u32,
    pub num_days: u32,
}

pub fn render_itinerary(header: &TranscriptHeader<'_>, itinerary: &[DayPlan]) -> String {
    let daily = if header.num_days > 0 {
        header.budget.div_euclid(i64::from(header.num_days))
    } else {
        header.budget
    };
    let people = if header.num_people == 1 { "person" } else { "people" };

    let mut lines = vec![
        format!(
            "# {}-Day {} Trip to {}",
            header.num_days,
            title_case(header.travel_type),
            header.destination
        ),
        format!(
            "**Total Budget:** ${} for {} {}",
            header.budget, header.num_people, people
        ),
        format!("**Daily Budget:** ${}", daily),
        String::new(),
    ];

    for day in itinerary {
        lines.push(format!("## {}", day.title));
        lines.push(String::new());

        for activity in &day.activities {
            lines.push(format!("**{}**", activity.time));
            lines.push(format!("- {}", activity.activity));
            lines.push(format!("  _{}_", activity.description));
            if activity.estimated_cost > 0.0 {
                lines.push(format!("  Est. cost: ${:.0}", activity.estimated_cost));
            }
            lines.push(String::new());
        }

        lines.push(format!("**Day Total:** ${:.0}", day.day_total));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("culture"), "Culture");
        assert_eq!(title_case("nature,FOOD"), "Nature,Food");
        assert_eq!(title_case("mid-range stay"), "Mid-Range Stay");
    }

    #[test]
    fn test_render_shows_cost_only_when_paid() {
        let itinerary = vec![DayPlan {
            day: 1,
            title: "Day 1 in Paris".to_string(),
            activities: vec![
                Activity {
                    time: "Morning (9:00 AM)".to_string(),
                    activity: "Arrive in Paris".to_string(),
                    description: "Check into your hotel and settle in".to_string(),
                    estimated_cost: 0.0,
                },
                Activity {
                    time: "Afternoon (2:00 PM)".to_string(),
                    activity: "Visit Louvre".to_string(),
                    description: "Art".to_string(),
                    estimated_cost: 17.0,
                },
            ],
            day_total: 17.0,
        }];

        let text = render_itinerary(
            &TranscriptHeader {
                destination: "Paris",
                travel_type: "culture",
                budget: 1000,
                num_people: 1,
                num_days: 2,
            },
            &itinerary,
        );

        assert!(text.starts_with("# 2-Day Culture Trip to Paris\n"));
        assert!(text.contains("**Total Budget:** $1000 for 1 person"));
        assert!(text.contains("**Daily Budget:** $500"));
        assert!(text.contains("## Day 1 in Paris"));
        assert_eq!(text.matches("Est. cost:").count(), 1);
        assert!(text.contains("  Est. cost: $17"));
        assert!(text.contains("**Day Total:** $17"));
    }
}

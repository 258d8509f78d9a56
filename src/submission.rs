//! Form submissions for the Join Our Team and Beta-Tasting screens.
//!
//! Nothing is uploaded anywhere: a submission is a value object handed to a
//! notifier, whose job is to get a human in the loop (today, by preparing a
//! mailto and telling the guest what to send). The chat core never touches
//! any of this.

use tracing::info;

use crate::content::EMAIL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub start_date: String,
    pub positions: Vec<String>,
    pub shifts: Vec<String>,
    pub experience: String,
    pub therapy_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub date_visited: String,
    pub server_name: String,
    pub items_ordered: String,
    pub meal_rating: String,
    pub service_rating: String,
    pub overall_rating: String,
    pub ideas: String,
}

/// The "notify a human" seam. Swappable for a real mail/queue backend later;
/// the screens only see the confirmation string.
pub trait Notifier {
    fn deliver_application(&self, submission: &ApplicationSubmission) -> String;
    fn deliver_feedback(&self, submission: &FeedbackSubmission) -> String;
}

/// Prepares mailto details, logs them for the operators, and confirms to the
/// guest. Resumes can't be attached from a terminal, so the confirmation
/// spells out the manual email step.
pub struct MailtoNotifier;

impl MailtoNotifier {
    pub fn application_subject(submission: &ApplicationSubmission) -> String {
        format!(
            "New Applicant Resume_({} {})",
            submission.first_name, submission.last_name
        )
    }
}

impl Notifier for MailtoNotifier {
    fn deliver_application(&self, submission: &ApplicationSubmission) -> String {
        info!(
            applicant = %format!("{} {}", submission.first_name, submission.last_name),
            positions = %submission.positions.join(", "),
            "employment application prepared"
        );
        format!(
            "Application Prepared! Please ensure you send your resume to {} with the subject '{}'.",
            EMAIL.to_lowercase(),
            Self::application_subject(submission)
        )
    }

    fn deliver_feedback(&self, submission: &FeedbackSubmission) -> String {
        info!(
            guest = %submission.name,
            overall = %submission.overall_rating,
            "beta-tasting feedback recorded"
        );
        "Thank you for your feedback, Beta-Taster!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_application() -> ApplicationSubmission {
        ApplicationSubmission {
            first_name: "Jordan".to_string(),
            last_name: "Reyes".to_string(),
            phone: "(559) 555-0117".to_string(),
            email: "jordan@example.com".to_string(),
            start_date: "2026-09-01".to_string(),
            positions: vec!["Server".to_string(), "Host".to_string()],
            shifts: vec!["Weekend PM".to_string()],
            experience: "Two years at a bistro".to_string(),
            therapy_answer: "Making guests feel at home".to_string(),
        }
    }

    #[test]
    fn test_application_subject_includes_name() {
        let subject = MailtoNotifier::application_subject(&sample_application());
        assert_eq!(subject, "New Applicant Resume_(Jordan Reyes)");
    }

    #[test]
    fn test_application_confirmation_mentions_resume_email() {
        let confirmation = MailtoNotifier.deliver_application(&sample_application());
        assert!(confirmation.contains("csh@coltonssocialhouse.com"));
        assert!(confirmation.contains("New Applicant Resume_(Jordan Reyes)"));
    }

    #[test]
    fn test_feedback_confirmation_is_fixed() {
        let submission = FeedbackSubmission {
            name: "Sam".to_string(),
            email: String::new(),
            date_visited: String::new(),
            server_name: String::new(),
            items_ordered: "Social Wings".to_string(),
            meal_rating: "Excellent".to_string(),
            service_rating: "Good".to_string(),
            overall_rating: "Excellent".to_string(),
            ideas: String::new(),
        };
        assert_eq!(
            MailtoNotifier.deliver_feedback(&submission),
            "Thank you for your feedback, Beta-Taster!"
        );
    }
}

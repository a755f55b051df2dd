use crate::app_lib::json::string_or_number;
use serde::{Deserialize, Serialize};

/// Delay before the result page returns home.
pub const RETURN_HOME_AFTER_MS: u32 = 5_000;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub text: String,
}

#[derive(Deserialize)]
pub(crate) struct QuestionList {
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Answer {
    #[serde(rename = "questionId")]
    pub question_id: String,
    /// Lower-cased `yes` or `no`.
    pub answer: String,
}

#[derive(Serialize)]
pub(crate) struct Submission<'a> {
    pub answers: &'a [Answer],
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Eligibility {
    #[serde(default)]
    pub eligible: bool,
}

/// Walks the question list one answer at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
    answers: Vec<Answer>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
        }
    }

    /// Question waiting for an answer, `None` once all are answered.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.answers.len())
    }

    /// One-based position of the current question and the total.
    pub fn position(&self) -> (usize, usize) {
        (
            (self.answers.len() + 1).min(self.questions.len()),
            self.questions.len(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        !self.questions.is_empty() && self.answers.len() == self.questions.len()
    }

    /// Records an answer to the current question. Returns every answer once
    /// the last question has been answered, ready for submission.
    pub fn answer(&mut self, answer: &str) -> Option<Vec<Answer>> {
        let question_id = self.current()?.id.clone();
        self.answers.push(Answer {
            question_id,
            answer: answer.trim().to_lowercase(),
        });
        self.is_finished().then(|| self.answers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{Eligibility, Question, Questionnaire};

    fn questions(count: usize) -> Vec<Question> {
        (1..=count)
            .map(|index| Question {
                id: format!("q{index}"),
                text: format!("Question {index}?"),
            })
            .collect()
    }

    #[test]
    fn answers_are_collected_in_order_and_lowercased() {
        let mut flow = Questionnaire::new(questions(2));
        assert_eq!(flow.position(), (1, 2));
        assert_eq!(flow.current().map(|q| q.id.as_str()), Some("q1"));

        assert_eq!(flow.answer("Yes"), None);
        assert_eq!(flow.position(), (2, 2));

        let answers = flow.answer("NO").expect("complete");
        assert!(flow.is_finished());
        assert_eq!(flow.current(), None);
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].answer, "yes");
        assert_eq!(answers[1].question_id, "q2");
        assert_eq!(answers[1].answer, "no");
    }

    #[test]
    fn extra_answers_are_ignored() {
        let mut flow = Questionnaire::new(questions(1));
        assert!(flow.answer("yes").is_some());
        assert_eq!(flow.answer("yes"), None);
    }

    #[test]
    fn empty_questionnaire_never_finishes() {
        let mut flow = Questionnaire::new(Vec::new());
        assert!(flow.is_empty());
        assert!(!flow.is_finished());
        assert_eq!(flow.answer("yes"), None);
        assert_eq!(flow.position(), (0, 0));
    }

    #[test]
    fn submission_uses_camel_case_question_id() {
        let mut flow = Questionnaire::new(questions(1));
        let answers = flow.answer("Yes").expect("answers");
        let json = serde_json::to_string(&super::Submission { answers: &answers }).expect("json");
        assert_eq!(json, r#"{"answers":[{"questionId":"q1","answer":"yes"}]}"#);
    }

    #[test]
    fn eligibility_defaults_to_false() {
        let result: Eligibility = serde_json::from_str("{}").expect("result");
        assert!(!result.eligible);
    }
}

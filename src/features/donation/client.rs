use crate::{
    app_lib::{ApiClient, AppError, Method, Transport},
    features::donation::types::{Answer, Eligibility, Question, QuestionList, Submission},
};

pub async fn fetch_questions<T: Transport>(
    api: &ApiClient<T>,
) -> Result<Vec<Question>, AppError> {
    let list: QuestionList = api.get_json("/get-questions").await?;
    Ok(list.questions)
}

pub async fn submit_answers<T: Transport>(
    api: &ApiClient<T>,
    answers: &[Answer],
) -> Result<Eligibility, AppError> {
    if answers.is_empty() {
        return Err(AppError::Config("No answers to submit.".to_string()));
    }
    api.send_json(Method::Post, "/submit-answers", &Submission { answers })
        .await
}

#[cfg(test)]
mod tests {
    use super::{fetch_questions, submit_answers};
    use crate::{
        app_lib::testing::{FakeTransport, client},
        features::donation::types::Questionnaire,
    };

    #[tokio::test]
    async fn questionnaire_flow_against_api() {
        let transport = FakeTransport::new()
            .respond(200, r#"{"questions":[{"_id":"q1","text":"Are you over 18?"}]}"#)
            .respond(200, r#"{"eligible":true}"#);
        let api = client(transport.clone(), Some("t"));

        let mut flow = Questionnaire::new(fetch_questions(&api).await.expect("questions"));
        let answers = flow.answer("Yes").expect("answers");
        let result = submit_answers(&api, &answers).await.expect("result");

        assert!(result.eligible);
        let sent = transport.requests();
        assert_eq!(sent[0].url, "https://api.test/api/get-questions");
        assert_eq!(sent[1].url, "https://api.test/api/submit-answers");
        assert_eq!(
            sent[1].body.as_deref(),
            Some(r#"{"answers":[{"questionId":"q1","answer":"yes"}]}"#)
        );
    }

    #[tokio::test]
    async fn nothing_is_submitted_without_answers() {
        let transport = FakeTransport::new();
        let api = client(transport.clone(), None);

        assert!(submit_answers(&api, &[]).await.is_err());
        assert_eq!(transport.calls(), 0);
    }
}

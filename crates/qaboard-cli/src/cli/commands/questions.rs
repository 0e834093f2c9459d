//! `qaboard questions`

use std::fmt::Write as _;

use anyhow::{Context, Result};
use qaboard_core::api::{ApiClient, Question};

pub async fn run(client: &ApiClient, json: bool) -> Result<()> {
    let questions = client
        .list_questions()
        .await
        .context("Failed to load questions")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
    } else {
        print!("{}", format_questions(&questions));
    }
    Ok(())
}

fn format_questions(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions yet\n".to_string();
    }

    let mut out = String::new();
    for question in questions {
        let _ = writeln!(out, "[{}] {}", question.id, question.title);
        if !question.content.is_empty() {
            let _ = writeln!(out, "    {}", question.content);
        }
        if let Some(answers) = &question.answers {
            for answer in answers {
                let _ = writeln!(out, "    - [{}] {}", answer.id, answer.content);
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use qaboard_core::api::{Answer, AnswerId, EntityId, QuestionId};

    use super::*;

    #[test]
    fn test_format_questions() {
        let questions = vec![
            Question {
                id: QuestionId(EntityId::Number(1)),
                title: "First".into(),
                content: "Body".into(),
                answers: Some(vec![Answer {
                    id: AnswerId(EntityId::Text("a-1".into())),
                    content: "Yes".into(),
                }]),
            },
            Question {
                id: QuestionId(EntityId::Number(2)),
                title: "Second".into(),
                content: String::new(),
                answers: None,
            },
        ];

        assert_eq!(
            format_questions(&questions),
            "[1] First\n    Body\n    - [a-1] Yes\n\n[2] Second\n\n"
        );
        assert_eq!(format_questions(&[]), "No questions yet\n");
    }
}

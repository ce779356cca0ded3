use serde::Serialize;

/// A learning module owning an ordered sequence of lessons.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_hours: u32,
    pub lessons: Vec<Lesson>,
}

impl Module {
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

/// A single lesson. Content lessons carry prose sections; quiz lessons
/// carry questions. The two kinds never mix.
#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub body: LessonBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LessonBody {
    Content {
        overview: String,
        sections: Vec<Section>,
        key_takeaways: Vec<String>,
    },
    Quiz {
        questions: Vec<QuizQuestion>,
    },
}

impl Lesson {
    /// Overview text, absent for quiz lessons.
    pub fn overview(&self) -> Option<&str> {
        match &self.body {
            LessonBody::Content { overview, .. } => Some(overview),
            LessonBody::Quiz { .. } => None,
        }
    }

    pub fn sections(&self) -> &[Section] {
        match &self.body {
            LessonBody::Content { sections, .. } => sections,
            LessonBody::Quiz { .. } => &[],
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        match &self.body {
            LessonBody::Content { .. } => &[],
            LessonBody::Quiz { questions } => questions,
        }
    }

    pub fn is_quiz(&self) -> bool {
        matches!(self.body, LessonBody::Quiz { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// A multiple-choice question. `correct` indexes into `options`.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

/// Outcome of grading one answer sheet against a quiz.
#[derive(Debug, Clone, Serialize)]
pub struct QuizGrade {
    pub correct: usize,
    pub total: usize,
    pub verdicts: Vec<QuestionVerdict>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionVerdict {
    pub question_id: u32,
    pub chosen: Option<usize>,
    pub correct: bool,
}

impl QuizGrade {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.correct as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

/// Grade an answer sheet. Missing answers count as wrong; extra answers are
/// ignored.
pub fn grade_quiz(questions: &[QuizQuestion], answers: &[usize]) -> QuizGrade {
    let verdicts: Vec<QuestionVerdict> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let chosen = answers.get(i).copied();
            QuestionVerdict {
                question_id: q.id,
                chosen,
                correct: chosen.map_or(false, |c| q.is_correct(c)),
            }
        })
        .collect();

    QuizGrade {
        correct: verdicts.iter().filter(|v| v.correct).count(),
        total: questions.len(),
        verdicts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                id: 1,
                prompt: "2 + 2?".to_string(),
                options: vec!["3".to_string(), "4".to_string()],
                correct: 1,
                explanation: "Basic arithmetic.".to_string(),
            },
            QuizQuestion {
                id: 2,
                prompt: "Capital of France?".to_string(),
                options: vec!["Paris".to_string(), "Lyon".to_string()],
                correct: 0,
                explanation: "Paris.".to_string(),
            },
        ]
    }

    #[test]
    fn perfect_grade_requires_every_answer_correct() {
        let qs = questions();
        let grade = grade_quiz(&qs, &[1, 0]);
        assert!(grade.is_perfect());
        assert_eq!(grade.percent(), 100.0);

        let grade = grade_quiz(&qs, &[1, 1]);
        assert!(!grade.is_perfect());
        assert_eq!(grade.correct, 1);
        assert_eq!(grade.percent(), 50.0);
    }

    #[test]
    fn missing_answers_count_as_wrong() {
        let qs = questions();
        let grade = grade_quiz(&qs, &[1]);
        assert_eq!(grade.correct, 1);
        assert_eq!(grade.total, 2);
        assert_eq!(grade.verdicts[1].chosen, None);
        assert!(!grade.verdicts[1].correct);
    }

    #[test]
    fn quiz_lessons_have_no_overview() {
        let lesson = Lesson {
            id: "q".to_string(),
            title: "Quiz".to_string(),
            duration: "15 min".to_string(),
            body: LessonBody::Quiz {
                questions: questions(),
            },
        };
        assert!(lesson.is_quiz());
        assert_eq!(lesson.overview(), None);
        assert!(lesson.sections().is_empty());
        assert_eq!(lesson.questions().len(), 2);
    }
}

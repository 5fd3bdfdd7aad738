//! Static educational content and quiz sessions

/// A short tip on spotting misinformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationalTip {
    /// Heading
    pub title: &'static str,
    /// One-sentence advice
    pub description: &'static str,
}

/// A multiple-choice quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Question text
    pub question: &'static str,
    /// Answer options, in display order
    pub options: &'static [&'static str],
    /// Index into `options` of the right answer
    pub correct_answer_index: usize,
    /// Shown after answering
    pub explanation: &'static str,
}

/// Built-in tips
pub const EDUCATIONAL_TIPS: &[EducationalTip] = &[
    EducationalTip {
        title: "Check the Source",
        description: "Investigate the site's mission and contact info. Lack of credibility or transparency is a red flag.",
    },
    EducationalTip {
        title: "Look for Emotional Language",
        description: "Misinformation often uses sensational, emotionally charged words to provoke a reaction.",
    },
    EducationalTip {
        title: "Read Beyond the Headline",
        description: "Headlines can be misleading. Read the full article to understand the complete story.",
    },
];

/// Built-in quiz
pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "A headline says 'SHOCKING: This one food CURES all diseases!'. What's a potential red flag?",
        options: &[
            "It offers a simple solution to a complex problem.",
            "It's published on a well-known news site.",
            "It includes a doctor's quote.",
        ],
        correct_answer_index: 0,
        explanation: "Sensational claims and miraculous cures are common misinformation tactics. Real science is nuanced.",
    },
    QuizQuestion {
        question: "You see a post on social media from an account you don't know. What should be your first step before sharing?",
        options: &[
            "Share it if it seems believable.",
            "Check the account's profile and previous posts for credibility.",
            "Assume it's true if it has many likes.",
        ],
        correct_answer_index: 1,
        explanation: "Always vet the source. Anonymous or new accounts with no history are often unreliable.",
    },
];

/// Outcome of answering the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    /// Whether the chosen option was right
    pub correct: bool,
    /// Index of the right option
    pub correct_index: usize,
    /// Explanation to show
    pub explanation: &'static str,
}

/// Quiz misuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// The current question was already answered
    AlreadyAnswered,
    /// `advance` called before answering
    NotAnswered,
    /// Option index past the end of the options list
    InvalidOption(usize),
    /// No questions left
    Finished,
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::AlreadyAnswered => f.write_str("question already answered"),
            QuizError::NotAnswered => f.write_str("answer the current question first"),
            QuizError::InvalidOption(i) => write!(f, "no option number {}", i + 1),
            QuizError::Finished => f.write_str("quiz is finished"),
        }
    }
}

impl std::error::Error for QuizError {}

/// One pass through a question set
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: &'static [QuizQuestion],
    index: usize,
    score: usize,
    answered: Option<usize>,
}

impl Quiz {
    /// Quiz over the given questions
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
            answered: None,
        }
    }

    /// Question awaiting an answer, or `None` once finished
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    /// Zero-based position of the current question
    pub fn position(&self) -> usize {
        self.index
    }

    /// Answer the current question
    pub fn answer(&mut self, option: usize) -> Result<AnswerFeedback, QuizError> {
        let question = self.current().ok_or(QuizError::Finished)?;
        if self.answered.is_some() {
            return Err(QuizError::AlreadyAnswered);
        }
        if option >= question.options.len() {
            return Err(QuizError::InvalidOption(option));
        }

        let feedback = AnswerFeedback {
            correct: option == question.correct_answer_index,
            correct_index: question.correct_answer_index,
            explanation: question.explanation,
        };
        if feedback.correct {
            self.score += 1;
        }
        self.answered = Some(option);
        Ok(feedback)
    }

    /// Move past an answered question
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.is_finished() {
            return Err(QuizError::Finished);
        }
        if self.answered.take().is_none() {
            return Err(QuizError::NotAnswered);
        }
        self.index += 1;
        Ok(())
    }

    /// Whether every question has been answered and passed
    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Correct answers so far
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Start over from the first question
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0;
        self.answered = None;
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(QUIZ_QUESTIONS)
    }
}

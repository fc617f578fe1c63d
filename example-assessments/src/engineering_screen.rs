use proctor_types::{
    Assessment, ChoiceConstraints, Condition, ConditionalRule, NumericConstraints, Question,
    QuestionKind, QuestionType, Section, TextConstraints,
};

/// A realistic three-section screen for a software engineering role.
///
/// Exercises every question type and every rule condition: the Rust
/// follow-up appears on an `equals`, the incident question on a
/// `contains`, the query-tuning question on a `greaterThan`, the
/// mentoring offer on a `lessThan`, and the home-office question on a
/// `notEquals`.
pub fn engineering_screen() -> Assessment {
    Assessment::draft("job-eng-01")
        .with_title("Software Engineer Assessment")
        .with_description("Screening questions for the backend engineering role.")
        .with_time_limit(45)
        .with_passing_score(70)
        .with_section(background_section())
        .with_section(technical_section())
        .with_section(behavioral_section())
}

fn background_section() -> Section {
    let rust_in_production = Question::of_kind(QuestionKind::SingleChoice(
        ChoiceConstraints::new(["Yes", "No"]),
    ))
    .with_text("Have you worked with Rust in production?")
    .with_required(true);

    let rust_details = Question::new(QuestionType::LongText)
        .with_text("Describe the largest Rust system you have worked on.")
        .with_rule(ConditionalRule::new(
            rust_in_production.id().clone(),
            Condition::Equals,
            "Yes",
        ));

    Section::new("Background & Experience")
        .with_description("Tell us about your professional background")
        .with_question(
            Question::new(QuestionType::ShortText)
                .with_text("What is your current job title?")
                .with_required(true),
        )
        .with_question(
            Question::of_kind(QuestionKind::Numeric(NumericConstraints::with_bounds(
                0, 50,
            )))
            .with_text("How many years of professional experience do you have?")
            .with_required(true),
        )
        .with_question(rust_in_production)
        .with_question(rust_details)
        .with_question(
            Question::new(QuestionType::FileUpload)
                .with_text("Upload your resume.")
                .with_required(true),
        )
}

fn technical_section() -> Section {
    let technologies = Question::of_kind(QuestionKind::MultiChoice(ChoiceConstraints::new([
        "Rust",
        "Go",
        "TypeScript",
        "Kubernetes",
        "PostgreSQL",
    ])))
    .with_text("Which of these technologies have you used professionally?")
    .with_required(true);

    let incident = Question::new(QuestionType::LongText)
        .with_text("Describe a production incident you debugged on Kubernetes.")
        .with_rule(ConditionalRule::new(
            technologies.id().clone(),
            Condition::Contains,
            "Kubernetes",
        ));

    let sql_fluency = Question::of_kind(QuestionKind::Numeric(NumericConstraints::with_bounds(
        0, 10,
    )))
    .with_text("Rate your SQL fluency from 0 to 10.")
    .with_required(true);

    let query_tuning = Question::of_kind(QuestionKind::ShortText(
        TextConstraints::with_max_length(250),
    ))
    .with_text("Name the most complex query optimization you have done.")
    .with_rule(ConditionalRule::new(
        sql_fluency.id().clone(),
        Condition::GreaterThan,
        "7",
    ));

    let mentoring = Question::of_kind(QuestionKind::SingleChoice(ChoiceConstraints::new([
        "Yes", "No",
    ])))
    .with_text("Would you be interested in SQL mentoring during onboarding?")
    .with_rule(ConditionalRule::new(
        sql_fluency.id().clone(),
        Condition::LessThan,
        "3",
    ));

    Section::new("Technical Skills")
        .with_description("Assess your technical capabilities")
        .with_question(technologies)
        .with_question(incident)
        .with_question(sql_fluency)
        .with_question(query_tuning)
        .with_question(mentoring)
}

fn behavioral_section() -> Section {
    let work_mode = Question::of_kind(QuestionKind::SingleChoice(ChoiceConstraints::new([
        "Remote", "Hybrid", "On-site",
    ])))
    .with_text("How do you prefer to work?")
    .with_required(true);

    let home_office = Question::new(QuestionType::ShortText)
        .with_text("What does your home office setup look like?")
        .with_rule(ConditionalRule::new(
            work_mode.id().clone(),
            Condition::NotEquals,
            "On-site",
        ));

    Section::new("Behavioral Questions")
        .with_description("Understanding your work style")
        .with_question(work_mode)
        .with_question(home_office)
        .with_question(
            Question::new(QuestionType::LongText)
                .with_text("Describe your approach to problem-solving."),
        )
        .with_question(
            Question::of_kind(QuestionKind::Numeric(NumericConstraints::with_bounds(
                0, 500,
            )))
            .with_text("What are your salary expectations, in thousands per year?"),
        )
}

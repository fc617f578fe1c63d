use proctor_types::{
    Assessment, ChoiceConstraints, Condition, ConditionalRule, Question, QuestionKind,
    QuestionType, Section,
};

/// A deliberately imperfect screen for a customer-support role.
///
/// Useful for exercising the degraded paths a builder has to survive:
/// one question's rule references a question that no longer exists, the
/// escalation section is entirely gated behind an unanswered question,
/// and the final section has no questions yet.
pub fn support_screen() -> Assessment {
    let product_use = Question::of_kind(QuestionKind::SingleChoice(ChoiceConstraints::new([
        "Yes", "No",
    ])))
    .with_text("Have you used our product before?")
    .with_required(true);
    let product_use_id = product_use.id().clone();

    let favorite_features = Question::new(QuestionType::LongText)
        .with_text("Which features do you use most?")
        .with_rule(ConditionalRule::new(
            product_use_id.clone(),
            Condition::Equals,
            "Yes",
        ));

    // The question this rule referenced was deleted in an earlier edit;
    // the id no longer resolves.
    let orphaned = Question::new(QuestionType::ShortText)
        .with_text("Which ticketing system did you mention earlier?")
        .with_rule(ConditionalRule::new(
            "q-deleted-tooling",
            Condition::Equals,
            "Zendesk",
        ));

    let screening = Section::new("Screening")
        .with_description("Basics before the scenario questions")
        .with_question(product_use)
        .with_question(favorite_features)
        .with_question(orphaned);

    let escalations = Section::new("Escalations")
        .with_description("Only relevant for experienced users")
        .with_question(
            Question::new(QuestionType::LongText)
                .with_text("Describe an escalation you handled end to end.")
                .with_rule(ConditionalRule::new(
                    product_use_id.clone(),
                    Condition::Equals,
                    "Yes",
                )),
        )
        .with_question(
            Question::new(QuestionType::ShortText)
                .with_text("Who did you hand unresolved cases to?")
                .with_rule(ConditionalRule::new(
                    product_use_id,
                    Condition::Equals,
                    "Yes",
                )),
        );

    Assessment::draft("job-sup-02")
        .with_title("Customer Support Assessment")
        .with_description("Scenario-driven screen for the support team.")
        .with_time_limit(30)
        .with_passing_score(60)
        .with_section(screening)
        .with_section(escalations)
        .with_section(Section::new("Archived").with_description("Questions retired for now"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_one_dangling_rule() {
        let assessment = support_screen();
        let order = assessment.flattened_order();
        let dangling: Vec<_> = assessment
            .sections()
            .iter()
            .flat_map(|section| section.questions())
            .filter_map(Question::rule)
            .filter(|rule| !order.contains(rule.depends_on()))
            .collect();
        assert_eq!(dangling.len(), 1);
    }

    #[test]
    fn last_section_is_empty() {
        let assessment = support_screen();
        assert!(assessment.sections().last().unwrap().is_empty());
    }

    #[test]
    fn escalations_are_fully_gated() {
        let assessment = support_screen();
        let escalations = assessment.section(1).unwrap();
        assert!(
            escalations
                .questions()
                .iter()
                .all(Question::is_conditional)
        );
    }
}

// Scoring pipeline prompt templates.
// All prompts for the scoring module are defined here.

/// Instruction sent with the uploaded image to the vision model.
pub const EXTRACTION_PROMPT: &str = "Extract information from the resume";

/// Example response shape embedded verbatim in the evaluation prompt. The
/// model is told to keep the field names exactly as written here. The text
/// it returns is relayed to the client without being parsed against this
/// shape.
pub const FEEDBACK_SHAPE_EXAMPLE: &str = r#"{"questions":[{"question":"","model_ans":"","candidate_ans":"","score":"","feedback":""}],"overall_feedback":"","overall_score":""}"#;

/// Builds the evaluation prompt around the extracted resume text.
pub fn evaluation_prompt(resume_info: &str) -> String {
    format!(
        "Evaluate the resume {resume_info}. Find the flaws in it and write its fix. \
         Ignore inconsistent font and formatting. After finding score give the result \
         in format of JSON strictly follow this {FEEDBACK_SHAPE_EXAMPLE}. Do not change \
         even the variable names. Give an overall score out of 100 to the resume."
    )
}

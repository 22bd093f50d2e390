// Interview prompt templates and fallback strings.
// Placeholders in braces are substituted by `fill`.

pub const QUESTION_PROMPT: &str = "\
You are interviewing a candidate for the position of {job_title}. \
Ask exactly one interview question that is relevant to this role. \
Respond with the question only, without numbering, preamble or explanation.";

pub const FEEDBACK_PROMPT: &str = "\
You are an experienced interviewer reviewing a candidate's answer.

QUESTION:
{question}

CANDIDATE ANSWER:
{user_answer}

Give concise, constructive feedback on this answer: what was good, \
what was missing, and how it could be improved. Address the candidate directly.";

pub const SUMMARY_PROMPT: &str = "\
You conducted a mock interview for the position of {job_title}. \
Below is the full transcript with the feedback already given for each answer.

{transcript}

Write an overall summary of the candidate's performance: main strengths, \
main areas to improve, and a short recommendation for further practice.";

pub const QUESTION_FALLBACK: &str = "question generation failed";
pub const FEEDBACK_FALLBACK: &str = "feedback generation failed";
pub const SUMMARY_FALLBACK: &str = "summary generation failed";

/// Substitutes `{name}` placeholders in one left-to-right pass. Substituted
/// values are never rescanned, so user text containing `{...}` stays literal.
/// Unknown placeholders are left as they are.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after_brace = &rest[start + 1..];
        let matched = vars.iter().find_map(|(name, value)| {
            after_brace
                .strip_prefix(*name)
                .and_then(|tail| tail.strip_prefix('}'))
                .map(|tail| (*value, tail))
        });
        match matched {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after_brace;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Fixed instruction text that wraps the user's summary.
pub const REWRITE_SUMMARY_INSTRUCTION: &str = "You are an expert resume writer. \
    Rewrite the following resume summary to be more professional, impactful, and ATS-friendly. \
    Make it concise (about 3-4 sentences) and use strong action verbs. \
    Here is the user's summary:";

pub fn rewrite_summary_prompt(summary: &str) -> String {
    format!("{REWRITE_SUMMARY_INSTRUCTION}\n\n\"{summary}\"")
}

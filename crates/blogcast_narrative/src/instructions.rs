//! Prompt text sent to the generation backend.

/// System instructions describing the host persona and the summary budget.
pub fn instruction_script(max_chars: usize) -> String {
    [
        "You are a blog-to-podcast host.".to_string(),
        "You receive the scraped content of one blog post and turn it into a short spoken summary."
            .to_string(),
        "Summarize ONLY the provided content. Never make up facts that are not in it.".to_string(),
        format!(
            "Keep the summary under {} characters, including spaces.",
            max_chars
        ),
        "Write in a conversational, engaging tone, as if speaking directly to listeners."
            .to_string(),
        "Reply with the summary text only: no headings, no markdown, no stage directions."
            .to_string(),
    ]
    .join("\n")
}

/// User message carrying the fetched article.
pub fn summarization_prompt(url: &str, content: &str) -> String {
    format!(
        "Create a podcast summary of the blog post at {url}.\n\n--- BEGIN CONTENT ---\n{content}\n--- END CONTENT ---"
    )
}
